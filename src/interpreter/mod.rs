//! Instruction interpreter
//!
//! Replays a lesson's instructions from step 1 up to a requested step and
//! works out which wires exist and what should be emphasized at that step.
//! Each description is matched against an ordered list of phrase rules
//! (see [`rules`]); the first rule that matches decides the wiring for that
//! step. Nothing here fails: a rule that names a component the layout did not
//! place simply contributes no wire.

pub mod config;
pub mod rules;

pub use config::{InterpreterConfig, ResistorSwap};

use log::debug;

use crate::layout::{Placement, Point};
use crate::lesson::LessonSpec;

use rules::StepContext;

/// Semantic wire color, resolved against the stylesheet at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireColor {
    /// Current path from a positive terminal
    Positive,
    /// Return path to a negative terminal
    Negative,
    /// Series link between two like components
    Series,
}

impl WireColor {
    /// Stylesheet token for this color
    pub fn token(&self) -> &'static str {
        match self {
            WireColor::Positive => "wire-positive",
            WireColor::Negative => "wire-negative",
            WireColor::Series => "wire-series",
        }
    }
}

/// A wire between anchor points on two distinct placed components
#[derive(Debug, Clone, PartialEq)]
pub struct WireConnection {
    pub from_id: String,
    pub from: Point,
    pub to_id: String,
    pub to: Point,
    pub color: WireColor,
    pub highlighted: bool,
}

impl WireConnection {
    /// Whether this wire joins the two components, in either direction
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.from_id == a && self.to_id == b) || (self.from_id == b && self.to_id == a)
    }
}

/// Whether the requested step is visually emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Highlight wires and components touched by the requested step
    CurrentStep,
    /// Draw everything in its normal state
    None,
}

/// Components and wires as they stand at one step of a lesson
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub components: Placement,
    pub wires: Vec<WireConnection>,
}

impl Scene {
    pub fn new(components: Placement) -> Self {
        Self {
            components,
            wires: vec![],
        }
    }

    pub fn highlighted_wires(&self) -> impl Iterator<Item = &WireConnection> {
        self.wires.iter().filter(|w| w.highlighted)
    }

    pub fn highlighted_components(&self) -> impl Iterator<Item = &str> {
        self.components
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.id.as_str())
    }
}

/// Replay a lesson up to and including `step`.
///
/// `placement` is cloned so every call starts with no wires and no
/// highlights. A step whose own description mentions "disconnect" yields the
/// bare components; an earlier disconnect step clears the wiring built so far.
pub fn replay(
    lesson: &LessonSpec,
    placement: &Placement,
    step: u32,
    emphasis: Emphasis,
    config: &InterpreterConfig,
) -> Scene {
    let mut scene = Scene::new(placement.clone());
    scene.components.clear_highlights();

    let requested = lesson
        .instruction(step)
        .map(|i| i.description.to_lowercase())
        .unwrap_or_default();
    if requested.contains("disconnect") {
        debug!(lesson_id = lesson.id, step; "Disconnect step, drawing components only");
        return scene;
    }

    for instruction in lesson.instructions_through(step) {
        let i = instruction.step_number;
        let description = instruction.description.to_lowercase();
        let is_current = i == step;

        if description.contains("disconnect") && !is_current {
            debug!(lesson_id = lesson.id, step = i; "Clearing wires at disconnect step");
            scene.wires.clear();
            continue;
        }

        let mut ctx = StepContext {
            description: &description,
            step: i,
            highlight: is_current && emphasis == Emphasis::CurrentStep,
            config,
            scene: &mut scene,
        };
        match rules::apply_first_match(&mut ctx) {
            Some(rule) => debug!(lesson_id = lesson.id, step = i, rule; "Matched wiring rule"),
            None => debug!(lesson_id = lesson.id, step = i; "No wiring rule matched"),
        }
        if ctx.highlight {
            rules::highlight_identified(&mut ctx);
        }
    }

    scene
}
