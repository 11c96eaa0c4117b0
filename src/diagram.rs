//! Diagram orchestration
//!
//! A [`DiagramGenerator`] lays a lesson out once and then produces the three
//! artifact kinds from that single placement, so component ids and
//! coordinates agree across every step diagram, the main diagram and the
//! final view.

use log::debug;

use crate::interpreter::{replay, rules, Emphasis, Scene};
use crate::layout::{self, Component, Placement, Point, TextAnchor};
use crate::lesson::LessonSpec;
use crate::renderer::svg::{Paint, SvgBuilder, TextStyle};
use crate::renderer::{render_component, render_wire};
use crate::DiagramConfig;

/// Title of the final view
pub const FINAL_TITLE: &str = "Your Completed Circuit!";

/// Text of the success banner in the final view
pub const SUCCESS_BANNER: &str = "✓ Circuit Complete! Well Done!";

/// Subtitle of the main diagram
pub const MAIN_SUBTITLE: &str = "Complete Circuit Diagram";

const DESCRIPTION_Y: f64 = 75.0;
const DESCRIPTION_WIDTH: f64 = 600.0;
const CALLOUT_HEIGHT: f64 = 60.0;
const CALLOUT_GAP: f64 = 10.0;

/// Generates every diagram for one lesson
#[derive(Debug)]
pub struct DiagramGenerator<'a> {
    lesson: &'a LessonSpec,
    config: DiagramConfig,
    placement: Placement,
}

impl<'a> DiagramGenerator<'a> {
    pub fn new(lesson: &'a LessonSpec, config: DiagramConfig) -> Self {
        let placement = layout::compute(lesson, &config.layout);
        Self {
            lesson,
            config,
            placement,
        }
    }

    pub fn lesson(&self) -> &LessonSpec {
        self.lesson
    }

    /// Component table shared by every artifact of this lesson
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Wiring and highlights as they stand at `step`, with that step emphasized
    pub fn step_scene(&self, step: u32) -> Scene {
        replay(
            self.lesson,
            &self.placement,
            step,
            Emphasis::CurrentStep,
            &self.config.interpreter,
        )
    }

    /// The fully assembled, unpowered circuit
    pub fn main_scene(&self) -> Scene {
        replay(
            self.lesson,
            &self.placement,
            self.lesson.last_step(),
            Emphasis::None,
            &self.config.interpreter,
        )
    }

    /// The assembled circuit with every LED lit, every switch on and every buzzer sounding
    pub fn final_scene(&self) -> Scene {
        let mut scene = self.main_scene();
        let lit = self.config.stylesheet.resolve_or_default("led-lit");
        for placed in scene.components.iter_mut() {
            placed.component.energize();
            if let Component::Led { color, .. } = &mut placed.component {
                color.clone_from(&lit);
            }
        }
        scene
    }

    /// Render the diagram for one instruction step
    pub fn step_diagram(&self, step: u32) -> String {
        debug!(lesson_id = self.lesson.id, step; "Rendering step diagram");
        let mut svg = self.surface();
        let instruction = self.lesson.instruction(step);

        if let Some(instruction) = instruction {
            let title = format!("Step {}: {}", step, instruction.title);
            let title_color = self.color("title");
            svg.add_text(
                svg.width() / 2.0,
                40.0,
                &title,
                &TextStyle::new(24.0, title_color).bold(),
            );
            let style = TextStyle::new(14.0, self.color("subtitle"));
            let x = svg.width() / 2.0;
            draw_wrapped(&mut svg, &instruction.description, x, DESCRIPTION_Y, DESCRIPTION_WIDTH, &style);
        }

        let scene = self.step_scene(step);
        self.draw_scene(&mut svg, &scene);

        let identify = instruction
            .map(|i| rules::is_identification(&i.description.to_lowercase()))
            .unwrap_or(false);
        if identify {
            self.draw_pointers(&mut svg, &scene);
        }

        if let Some(instruction) = instruction {
            let mut top = svg.height() - 90.0;
            if let Some(tip) = instruction.tip.as_deref() {
                self.draw_callout(&mut svg, top, "💡 Tip:", tip, "tip");
                top -= CALLOUT_HEIGHT + CALLOUT_GAP;
            }
            if let Some(warning) = instruction.warning.as_deref() {
                self.draw_callout(&mut svg, top, "⚠ Warning:", warning, "warning");
            }
        }

        svg.finish();
        svg.build()
    }

    /// Render the complete circuit
    pub fn main_diagram(&self) -> String {
        debug!(lesson_id = self.lesson.id; "Rendering main diagram");
        let mut svg = self.surface();
        let x = svg.width() / 2.0;
        svg.add_text(
            x,
            40.0,
            &self.lesson.title,
            &TextStyle::new(28.0, self.color("title")).bold(),
        );
        svg.add_text(
            x,
            70.0,
            MAIN_SUBTITLE,
            &TextStyle::new(18.0, self.color("subtitle")),
        );

        self.draw_scene(&mut svg, &self.main_scene());

        svg.finish();
        svg.build()
    }

    /// Render the completed, powered circuit with a success banner
    pub fn final_view(&self) -> String {
        debug!(lesson_id = self.lesson.id; "Rendering final view");
        let mut svg = self.surface();
        let (w, h) = (svg.width(), svg.height());
        svg.add_text(
            w / 2.0,
            40.0,
            FINAL_TITLE,
            &TextStyle::new(28.0, self.color("success-title")).bold(),
        );

        self.draw_scene(&mut svg, &self.final_scene());

        svg.add_rect(
            w / 2.0 - 200.0,
            h - 80.0,
            400.0,
            50.0,
            8.0,
            &Paint::fill(self.color("success-fill")).with_stroke(self.color("success-stroke"), 2.0),
        );
        svg.add_text(
            w / 2.0,
            h - 50.0,
            SUCCESS_BANNER,
            &TextStyle::new(18.0, self.color("success-text")).bold(),
        );

        svg.finish();
        svg.build()
    }

    fn color(&self, token: &str) -> String {
        self.config.stylesheet.resolve_or_default(token)
    }

    fn surface(&self) -> SvgBuilder {
        let mut svg = SvgBuilder::new(self.config.svg.clone());
        svg.start(&self.config.stylesheet);
        svg
    }

    // Wires go first so components sit on top of their ends.
    fn draw_scene(&self, svg: &mut SvgBuilder, scene: &Scene) {
        for wire in &scene.wires {
            render_wire(wire, svg, &self.config.stylesheet);
        }
        for placed in scene.components.iter() {
            render_component(placed, svg, &self.config.stylesheet);
        }
    }

    fn draw_pointers(&self, svg: &mut SvgBuilder, scene: &Scene) {
        let color = self.color("marker");
        for placed in scene.components.iter().filter(|c| c.highlighted) {
            let bounds = placed.bounds();
            let tip = Point::new(bounds.x - 8.0, bounds.y + bounds.height / 2.0);
            let tail = tip.offset(-70.0, -40.0);
            let label = placed.label.as_deref().unwrap_or(placed.id.as_str());
            svg.add_arrow(tail, tip, &color, Some(label));
        }
    }

    fn draw_callout(&self, svg: &mut SvgBuilder, top: f64, heading: &str, body: &str, kind: &str) {
        let fill = self.color(&format!("{kind}-fill"));
        let stroke = self.color(&format!("{kind}-stroke"));
        let width = svg.width();
        svg.add_rect(
            30.0,
            top,
            width - 60.0,
            CALLOUT_HEIGHT,
            8.0,
            &Paint::fill(fill).with_stroke(stroke.as_str(), 2.0),
        );
        svg.add_text(
            50.0,
            top + 25.0,
            heading,
            &TextStyle::new(14.0, stroke)
                .with_anchor(TextAnchor::Start)
                .bold(),
        );
        let style = TextStyle::new(12.0, self.color("text")).with_anchor(TextAnchor::Start);
        draw_wrapped(svg, body, 50.0, top + 45.0, width - 100.0, &style);
    }
}

/// Break text into lines at word boundaries so each fits `max_width`.
///
/// Width is estimated at half the font size per character. A single word
/// wider than `max_width` is kept whole on its own line.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let char_width = font_size * 0.5;
    let mut lines = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if !current.is_empty() && candidate_len as f64 * char_width > max_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn draw_wrapped(svg: &mut SvgBuilder, text: &str, x: f64, y: f64, max_width: f64, style: &TextStyle) {
    let line_height = style.size + 4.0;
    for (i, line) in wrap_text(text, max_width, style.size).iter().enumerate() {
        svg.add_text(x, y + i as f64 * line_height, line, style);
    }
}
