//! Circuit Diagrams - step-by-step wiring diagrams for electronics lessons
//!
//! This library lays out the parts a lesson calls for, replays its
//! instructions to work out which wires exist at each step, and renders
//! per-step, main and final SVG diagrams.
//!
//! # Example
//!
//! ```rust
//! use circuit_diagrams::{DiagramConfig, DiagramGenerator, LessonSpec};
//!
//! let lesson = LessonSpec::from_json(r#"{
//!     "id": 1,
//!     "title": "First Light",
//!     "components": [
//!         { "name": "LED", "quantity": 1 },
//!         { "name": "AA Battery", "quantity": 1 }
//!     ],
//!     "instructions": [
//!         { "stepNumber": 1, "title": "Connect", "description": "Connect the battery positive to the LED long leg." }
//!     ]
//! }"#).unwrap();
//!
//! let generator = DiagramGenerator::new(&lesson, DiagramConfig::default());
//! let svg = generator.step_diagram(1);
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(r#"id="led1""#));
//! ```

pub mod batch;
pub mod diagram;
pub mod error;
pub mod interpreter;
pub mod layout;
pub mod lesson;
pub mod renderer;
pub mod stylesheet;

pub use batch::{run_batch, Artifact, BatchOptions, BatchReport, LessonReport};
pub use diagram::{wrap_text, DiagramGenerator};
pub use error::{BatchError, LessonError, PersistError};
pub use interpreter::{Emphasis, InterpreterConfig, Scene, WireColor, WireConnection};
pub use layout::{LayoutConfig, Placement};
pub use lesson::{parse_shard, LessonSpec};
pub use renderer::SvgConfig;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Configuration for the complete diagram pipeline
#[derive(Debug, Clone, Default)]
pub struct DiagramConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Step replay configuration
    pub interpreter: InterpreterConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
}

impl DiagramConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the step replay configuration
    pub fn with_interpreter(mut self, config: InterpreterConfig) -> Self {
        self.interpreter = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builders() {
        let stylesheet = Stylesheet::from_str(
            r##"
[colors]
wire-positive = "#ff0000"
"##,
        )
        .unwrap();
        let config = DiagramConfig::new()
            .with_svg(SvgConfig::default().with_pretty_print(false))
            .with_interpreter(InterpreterConfig::new().with_swap_from_step(6))
            .with_stylesheet(stylesheet);

        assert!(!config.svg.pretty_print);
        assert_eq!(config.interpreter.resistor_swap.from_step, 6);
        assert_eq!(config.stylesheet.resolve("wire-positive"), Some("#ff0000"));
    }

    #[test]
    fn test_custom_stylesheet_recolors_wires() {
        let lesson = LessonSpec::from_json(
            r#"{
                "id": 2,
                "title": "Red Wire",
                "components": [{ "name": "LED", "quantity": 1 }, { "name": "Battery", "quantity": 1 }],
                "instructions": [
                    { "stepNumber": 1, "title": "Wire", "description": "Connect the battery positive to the LED long leg." }
                ]
            }"#,
        )
        .unwrap();
        let stylesheet = Stylesheet::from_str("[colors]\nwire-positive = \"#abcdef\"\n").unwrap();
        let generator =
            DiagramGenerator::new(&lesson, DiagramConfig::new().with_stylesheet(stylesheet));
        assert!(generator.main_diagram().contains(r##"stroke="#abcdef""##));
    }
}
