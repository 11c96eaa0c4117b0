//! Lesson records consumed by the diagram generator
//!
//! Lessons arrive as camelCase JSON documents. Only the fields the engine
//! reads are modelled; everything else in a record (quiz, fun facts,
//! learning objectives, ...) is ignored.

use std::collections::BTreeSet;

use serde::Deserialize;

/// A single lesson: what to build and the steps to build it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSpec {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub components: Vec<ComponentRequirement>,
    #[serde(default)]
    pub instructions: Vec<InstructionStep>,
}

/// A line item from the lesson's parts list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRequirement {
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// One numbered instruction
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    pub step_number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

impl LessonSpec {
    /// Parse a single lesson record
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Find the instruction with the given step number
    pub fn instruction(&self, step: u32) -> Option<&InstructionStep> {
        self.instructions.iter().find(|i| i.step_number == step)
    }

    /// The greatest step number in the lesson, or 0 when it has no instructions
    pub fn last_step(&self) -> u32 {
        self.instructions
            .iter()
            .map(|i| i.step_number)
            .max()
            .unwrap_or(0)
    }

    /// Instructions numbered from 1 up to and including `step`, in step order.
    ///
    /// When several instructions share a step number only the first one
    /// counts, the same one [`LessonSpec::instruction`] finds.
    pub fn instructions_through(&self, step: u32) -> Vec<&InstructionStep> {
        let mut steps: Vec<&InstructionStep> = self
            .instructions
            .iter()
            .filter(|i| (1..=step).contains(&i.step_number))
            .collect();
        steps.sort_by_key(|i| i.step_number);
        steps.dedup_by_key(|i| i.step_number);
        steps
    }

    /// Distinct step numbers in the order they first appear
    pub fn step_numbers(&self) -> Vec<u32> {
        let mut seen = BTreeSet::new();
        self.instructions
            .iter()
            .map(|i| i.step_number)
            .filter(|n| seen.insert(*n))
            .collect()
    }
}

impl ComponentRequirement {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            description: None,
        }
    }
}

impl InstructionStep {
    pub fn new(step_number: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            step_number,
            title: title.into(),
            description: description.into(),
            tip: None,
            warning: None,
        }
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

/// Parse a shard (a JSON array of lesson records) record by record.
///
/// The outer document must be an array; each element is decoded on its own
/// so a malformed record only affects its own slot.
pub fn parse_shard(
    source: &str,
) -> Result<Vec<Result<LessonSpec, serde_json::Error>>, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(source)?;
    Ok(records
        .into_iter()
        .map(serde_json::from_value::<LessonSpec>)
        .collect())
}
