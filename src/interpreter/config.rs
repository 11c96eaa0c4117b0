//! Configuration for the instruction interpreter

/// Content-authoring convention for lessons that swap one resistor for another.
///
/// Lessons comparing two resistors describe the swap in prose ("replace it
/// with the 1kΩ resistor", "reconnect the battery"). Rules that wire a
/// resistor pick the replacement instead of the primary when the description
/// mentions one of `keywords` or the step is at or past `from_step`, provided
/// the replacement was placed at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorSwap {
    pub keywords: Vec<String>,
    pub from_step: u32,
    pub primary: String,
    pub replacement: String,
}

impl Default for ResistorSwap {
    fn default() -> Self {
        Self {
            keywords: vec!["1k".to_string(), "reconnect".to_string()],
            from_step: 4,
            primary: "resistor1".to_string(),
            replacement: "resistor2".to_string(),
        }
    }
}

/// Configuration options for step replay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterpreterConfig {
    pub resistor_swap: ResistorSwap,
}

impl InterpreterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resistor swap convention
    pub fn with_resistor_swap(mut self, swap: ResistorSwap) -> Self {
        self.resistor_swap = swap;
        self
    }

    /// Set the step from which the replacement resistor is used
    pub fn with_swap_from_step(mut self, step: u32) -> Self {
        self.resistor_swap.from_step = step;
        self
    }
}
