//! Configuration for the layout engine

/// Configuration options for component placement
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Canvas width the template is laid out on
    pub canvas_width: f64,

    /// Canvas height the template is laid out on
    pub canvas_height: f64,

    /// Horizontal distance of the battery and LED columns from the canvas edges
    pub edge_inset: f64,

    /// Vertical distance between stacked pairs (two batteries, two LEDs)
    pub pair_spacing: f64,

    /// Vertical distance between rows of a three-way fan (LEDs, resistors)
    pub fan_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            edge_inset: 150.0,
            pair_spacing: 80.0,
            fan_spacing: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the edge inset of the battery and LED columns
    pub fn with_edge_inset(mut self, inset: f64) -> Self {
        self.edge_inset = inset;
        self
    }

    /// Set the spacing used for stacked pairs
    pub fn with_pair_spacing(mut self, spacing: f64) -> Self {
        self.pair_spacing = spacing;
        self
    }

    /// Set the spacing used for three-way fans
    pub fn with_fan_spacing(mut self, spacing: f64) -> Self {
        self.fan_spacing = spacing;
        self
    }

    pub(crate) fn center_x(&self) -> f64 {
        self.canvas_width / 2.0
    }

    pub(crate) fn center_y(&self) -> f64 {
        self.canvas_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.canvas_width, 800.0);
        assert_eq!(config.canvas_height, 600.0);
        assert_eq!(config.edge_inset, 150.0);
        assert_eq!(config.pair_spacing, 80.0);
        assert_eq!(config.fan_spacing, 100.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_canvas_size(1000.0, 700.0)
            .with_edge_inset(120.0);

        assert_eq!(config.center_x(), 500.0);
        assert_eq!(config.center_y(), 350.0);
        assert_eq!(config.edge_inset, 120.0);
    }
}
