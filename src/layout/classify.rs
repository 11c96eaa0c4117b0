//! Classification of parts-list names into component kinds

use std::collections::BTreeMap;

use log::debug;

use crate::lesson::ComponentRequirement;

use super::types::ComponentKind;

/// Classify a parts-list name by case-insensitive keyword match.
///
/// Order matters: anything mentioning "button" or "push" is a push button
/// even when it also says "switch", so the switch test never sees those
/// names. Names matching no keyword return `None`.
pub fn classify(name: &str) -> Option<ComponentKind> {
    let name = name.to_lowercase();
    if name.contains("button") || name.contains("push") {
        Some(ComponentKind::PushButton)
    } else if name.contains("switch") {
        Some(ComponentKind::Switch)
    } else if name.contains("buzzer") {
        Some(ComponentKind::Buzzer)
    } else if name.contains("resistor") {
        Some(ComponentKind::Resistor)
    } else if name.contains("led") {
        Some(ComponentKind::Led)
    } else if name.contains("battery") || name.contains("aa") {
        Some(ComponentKind::Battery)
    } else {
        None
    }
}

/// Quantities of each kind, summed over every matching line item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentCounts {
    counts: BTreeMap<ComponentKind, u32>,
}

impl ComponentCounts {
    /// Count a parts list. Unclassifiable entries are dropped.
    pub fn from_requirements(requirements: &[ComponentRequirement]) -> Self {
        let mut counts = BTreeMap::new();
        for requirement in requirements {
            match classify(&requirement.name) {
                Some(kind) => {
                    let count = counts.entry(kind).or_insert(0u32);
                    *count = count.saturating_add(requirement.quantity);
                }
                None => debug!(name = requirement.name.as_str(); "Excluding unclassifiable component"),
            }
        }
        Self { counts }
    }

    pub fn get(&self, kind: ComponentKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}
