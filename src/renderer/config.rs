//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Canvas width in user units
    pub width: f64,

    /// Canvas height in user units
    pub height: f64,

    /// Whether to format output with indentation and newlines
    pub pretty_print: bool,

    /// Font family applied to every text element
    pub font_family: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            pretty_print: true,
            font_family: "Arial, sans-serif".to_string(),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
        assert!(config.pretty_print);
        assert_eq!(config.font_family, "Arial, sans-serif");
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_size(1024.0, 768.0)
            .with_pretty_print(false)
            .with_font_family("Comic Neue");

        assert_eq!(config.width, 1024.0);
        assert!(!config.pretty_print);
        assert_eq!(config.font_family, "Comic Neue");
    }
}
