//! SVG drawing surface
//!
//! [`SvgBuilder`] is an append-only buffer of markup fragments. The header
//! (canvas, background, grid pattern, glow filter, arrow marker) must be
//! emitted with [`SvgBuilder::start`] before any shape, and the footer with
//! [`SvgBuilder::finish`] last. Geometry is written as given; nothing here
//! validates or fails.

use crate::layout::{BoundingBox, Point, TextAnchor};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Id of the glow filter defined in the header
pub const GLOW_FILTER: &str = "glow";

/// Id of the arrowhead marker defined in the header
pub const ARROW_MARKER: &str = "arrowhead";

/// Fill and stroke attributes for a closed shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub opacity: Option<f64>,
    pub filter: Option<String>,
}

impl Paint {
    /// Solid fill, no stroke
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    /// Stroke only, transparent interior
    pub fn outline(color: impl Into<String>, width: f64) -> Self {
        Self::default().with_stroke(color, width)
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = width;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn attrs(&self) -> String {
        let mut attrs = match &self.fill {
            Some(fill) => format!(r#" fill="{}""#, escape_xml(fill)),
            None => r#" fill="none""#.to_string(),
        };
        if let Some(stroke) = &self.stroke {
            attrs.push_str(&format!(
                r#" stroke="{}" stroke-width="{}""#,
                escape_xml(stroke),
                self.stroke_width
            ));
        }
        if let Some(opacity) = self.opacity {
            attrs.push_str(&format!(r#" opacity="{}""#, opacity));
        }
        if let Some(filter) = &self.filter {
            attrs.push_str(&format!(r#" filter="url(#{})""#, escape_xml(filter)));
        }
        attrs
    }
}

/// Stroke line-cap style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Font attributes for a text element
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub fill: String,
    pub anchor: TextAnchor,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: f64, fill: impl Into<String>) -> Self {
        Self {
            size,
            fill: fill.into(),
            anchor: TextAnchor::Middle,
            bold: false,
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Build SVG documents incrementally
#[derive(Debug)]
pub struct SvgBuilder {
    config: SvgConfig,
    fragments: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            fragments: vec![],
            indent: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.config.width
    }

    pub fn height(&self) -> f64 {
        self.config.height
    }

    fn push(&mut self, fragment: String) {
        if self.config.pretty_print {
            self.fragments
                .push(format!("{}{}", "  ".repeat(self.indent), fragment));
        } else {
            self.fragments.push(fragment);
        }
    }

    /// Emit the document header: root element, shared definitions, background and grid
    pub fn start(&mut self, stylesheet: &Stylesheet) {
        let (w, h) = (self.config.width, self.config.height);
        let grid = escape_xml(&stylesheet.resolve_or_default("grid"));
        let marker = escape_xml(&stylesheet.resolve_or_default("marker"));
        let background = escape_xml(&stylesheet.resolve_or_default("background"));

        self.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ));
        self.indent += 1;
        self.push("<defs>".to_string());
        self.indent += 1;
        self.push(r#"<pattern id="grid" width="40" height="40" patternUnits="userSpaceOnUse">"#.to_string());
        self.push(format!(
            r#"  <path d="M 40 0 L 0 0 0 40" fill="none" stroke="{grid}" stroke-width="1"/>"#
        ));
        self.push("</pattern>".to_string());
        self.push(format!(r#"<filter id="{GLOW_FILTER}">"#));
        self.push(r#"  <feGaussianBlur stdDeviation="4" result="coloredBlur"/>"#.to_string());
        self.push(
            r#"  <feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge>"#
                .to_string(),
        );
        self.push("</filter>".to_string());
        self.push(format!(
            r#"<marker id="{ARROW_MARKER}" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto">"#
        ));
        self.push(format!(r#"  <polygon points="0 0, 10 3.5, 0 7" fill="{marker}"/>"#));
        self.push("</marker>".to_string());
        self.indent -= 1;
        self.push("</defs>".to_string());
        self.push(format!(r#"<rect width="{w}" height="{h}" fill="{background}"/>"#));
        self.push(format!(r#"<rect width="{w}" height="{h}" fill="url(#grid)"/>"#));
    }

    /// Emit the closing tag of the document
    pub fn finish(&mut self) {
        self.indent = 0;
        self.push("</svg>".to_string());
    }

    /// Add a rectangle with optional corner radius
    pub fn add_rect(&mut self, x: f64, y: f64, width: f64, height: f64, rx: f64, paint: &Paint) {
        let rx_attr = if rx > 0.0 {
            format!(r#" rx="{}""#, rx)
        } else {
            String::new()
        };
        self.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
            x,
            y,
            width,
            height,
            paint.attrs(),
            rx_attr
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, paint: &Paint) {
        self.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            cx,
            cy,
            r,
            paint.attrs()
        ));
    }

    /// Add an ellipse element
    pub fn add_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, paint: &Paint) {
        self.push(format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{}/>"#,
            cx,
            cy,
            rx,
            ry,
            paint.attrs()
        ));
    }

    /// Add a straight line
    pub fn add_line(&mut self, from: Point, to: Point, paint: &Paint, cap: Option<LineCap>) {
        let cap_attr = cap
            .map(|c| format!(r#" stroke-linecap="{}""#, c.as_str()))
            .unwrap_or_default();
        self.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}{}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            paint.attrs(),
            cap_attr
        ));
    }

    /// Add a cubic bezier from `from` to `to` through two control points
    pub fn add_cubic(&mut self, from: Point, c1: Point, c2: Point, to: Point, paint: &Paint) {
        let d = format!(
            "M {} {} C {} {}, {} {}, {} {}",
            from.x, from.y, c1.x, c1.y, c2.x, c2.y, to.x, to.y
        );
        self.push(format!(r#"<path d="{}"{}/>"#, d, paint.attrs()));
    }

    /// Add a text element
    pub fn add_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        let weight = if style.bold {
            r#" font-weight="bold""#
        } else {
            ""
        };
        self.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" font-family="{}"{}>{}</text>"#,
            x,
            y,
            style.size,
            escape_xml(&style.fill),
            style.anchor.as_str(),
            escape_xml(&self.config.font_family),
            weight,
            escape_xml(text)
        ));
    }

    /// Open a group element with optional ID, classes and filter
    pub fn start_group(&mut self, id: Option<&str>, classes: &[&str], filter: Option<&str>) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, escape_xml(&classes.join(" ")))
        };
        let filter_attr = filter
            .map(|f| format!(r#" filter="url(#{})""#, escape_xml(f)))
            .unwrap_or_default();
        self.push(format!("<g{}{}{}>", id_attr, class_attr, filter_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.push("</g>".to_string());
    }

    /// Add a dashed, glowing outline around a region
    pub fn add_highlight_box(&mut self, bounds: BoundingBox, color: &str) {
        self.push(format!(
            r#"<rect class="highlight" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="3" stroke-dasharray="8,4" rx="8" filter="url(#{})"/>"#,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            escape_xml(color),
            GLOW_FILTER
        ));
    }

    /// Add a straight arrow with an arrowhead, optionally labelled at its midpoint
    pub fn add_arrow(&mut self, from: Point, to: Point, color: &str, label: Option<&str>) {
        self.push(format!(
            r#"<line class="pointer" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="3" marker-end="url(#{})"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            escape_xml(color),
            ARROW_MARKER
        ));
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            let mid_x = (from.x + to.x) / 2.0;
            let mid_y = (from.y + to.y) / 2.0;
            self.add_text(mid_x, mid_y - 10.0, label, &TextStyle::new(14.0, color).bold());
        }
    }

    /// Serialize everything added so far
    pub fn build(&self) -> String {
        if self.config.pretty_print {
            let mut svg = self.fragments.join("\n");
            svg.push('\n');
            svg
        } else {
            self.fragments.concat()
        }
    }
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
