//! Color palette for lesson diagrams
//!
//! Wire, canvas, and callout colors are named by semantic tokens
//! (`wire-positive`, `tip-fill`, ...) and resolved through a stylesheet, so a
//! lesson set can be re-themed from a TOML file. Component artwork keeps its
//! own fixed colors.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping symbolic colors to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette for lesson diagrams
const DEFAULT_PALETTE: &str = r##"
[colors]
# Wires
wire-positive = "#F44336"
wire-negative = "#2196F3"
wire-series = "#9C27B0"
wire-terminal = "#C2185B"

# Canvas
background = "#f8fcff"
grid = "#e8f4f8"
highlight = "#FFC107"
marker = "#FF9800"

# Text
title = "#1976D2"
subtitle = "#666666"
text = "#333333"

# Callout boxes
tip-fill = "#FFF9C4"
tip-stroke = "#F57F17"
warning-fill = "#FFEBEE"
warning-stroke = "#C62828"

# Final view
success-fill = "#C8E6C9"
success-stroke = "#388E3C"
success-text = "#1B5E20"
success-title = "#4CAF50"
led-lit = "#FFC107"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for exact token
    /// 2. Check default palette for exact token
    /// 3. Use category default (wire → #333333, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        // Try this stylesheet first
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        // Fallback to default palette
        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        // Final fallback: category defaults
        if token.starts_with("wire") {
            return "#333333".to_string();
        }
        if token.starts_with("background") || token.ends_with("-fill") {
            return "#ffffff".to_string();
        }
        if token.starts_with("success") {
            return "#4CAF50".to_string();
        }
        if token.starts_with("warning") {
            return "#C62828".to_string();
        }

        // Unknown category - return dark gray
        "#333333".to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
