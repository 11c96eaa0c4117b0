//! Component artwork
//!
//! Each kind is drawn relative to its placement position. Anchor points in
//! [`PlacedComponent::anchor_offset`] line up with the terminal dots drawn
//! here, so wires meet the artwork exactly.

use crate::layout::{Component, PlacedComponent, Point};
use crate::stylesheet::Stylesheet;

use super::svg::{LineCap, Paint, SvgBuilder, TextStyle};

const LEAD: &str = "#666";
const POSITIVE: &str = "#FF5252";
const POSITIVE_STROKE: &str = "#C62828";
const NEGATIVE: &str = "#2196F3";
const NEGATIVE_STROKE: &str = "#1565C0";

/// Draw a placed component, wrapped in a group carrying its id
pub fn render_component(placed: &PlacedComponent, svg: &mut SvgBuilder, stylesheet: &Stylesheet) {
    let kind = placed.kind().key_prefix();
    svg.start_group(Some(placed.id.as_str()), &["component", kind], None);

    let Point { x, y } = placed.position;
    match &placed.component {
        Component::Led { lit, color } => draw_led(svg, x, y, *lit, color),
        Component::Battery => draw_battery(svg, x, y),
        Component::Resistor { bands } => draw_resistor(svg, x, y, bands),
        Component::Switch { on } => draw_switch(svg, x, y, *on),
        Component::PushButton { pressed } => draw_push_button(svg, x, y, *pressed),
        Component::Buzzer { active } => draw_buzzer(svg, x, y, *active),
    }

    if let Some(label) = placed.label.as_deref().filter(|l| !l.is_empty()) {
        let text = stylesheet.resolve_or_default("text");
        svg.add_text(
            x,
            y + label_offset(placed),
            label,
            &TextStyle::new(14.0, text).bold(),
        );
    }

    if placed.highlighted {
        let color = stylesheet.resolve_or_default("highlight");
        svg.add_highlight_box(placed.bounds(), &color);
    }

    svg.end_group();
}

fn label_offset(placed: &PlacedComponent) -> f64 {
    match placed.component {
        Component::Led { .. } => -50.0,
        Component::Battery => -75.0,
        Component::Resistor { .. } => -25.0,
        Component::Switch { .. } => -35.0,
        Component::PushButton { .. } => -45.0,
        Component::Buzzer { .. } => -55.0,
    }
}

fn lead(svg: &mut SvgBuilder, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
    svg.add_line(
        Point::new(x1, y1),
        Point::new(x2, y2),
        &Paint::outline(color, width),
        Some(LineCap::Round),
    );
}

fn draw_led(svg: &mut SvgBuilder, x: f64, y: f64, lit: bool, color: &str) {
    let (body, rim) = if lit {
        (color, "#FFD54F")
    } else {
        ("#E8E8E8", "#BDBDBD")
    };
    svg.add_ellipse(
        x,
        y - 5.0,
        22.0,
        28.0,
        &Paint::fill(body).with_stroke(rim, 2.0).with_opacity(0.9),
    );

    if lit {
        svg.add_circle(x, y - 5.0, 15.0, &Paint::fill(color));
        svg.add_circle(x, y - 5.0, 15.0, &Paint::fill(color).with_opacity(0.6));
        svg.add_ellipse(x - 5.0, y - 10.0, 8.0, 12.0, &Paint::fill("white").with_opacity(0.4));
        svg.add_circle(x, y - 5.0, 32.0, &Paint::fill(color).with_opacity(0.2));
        svg.add_circle(x, y - 5.0, 38.0, &Paint::fill(color).with_opacity(0.1));
    } else {
        svg.add_ellipse(x - 6.0, y - 12.0, 6.0, 10.0, &Paint::fill("white").with_opacity(0.3));
    }

    svg.add_rect(x - 18.0, y + 20.0, 36.0, 8.0, 2.0, &Paint::fill("#757575"));
    svg.add_rect(x - 16.0, y + 22.0, 32.0, 4.0, 1.0, &Paint::fill("#9E9E9E"));

    // Long leg is the anode.
    lead(svg, x + 12.0, y + 28.0, x + 12.0, y + 55.0, "#888", 4.0);
    lead(svg, x - 12.0, y + 28.0, x - 12.0, y + 45.0, "#888", 4.0);
    svg.add_circle(
        x + 12.0,
        y + 55.0,
        5.0,
        &Paint::fill(POSITIVE).with_stroke(POSITIVE_STROKE, 2.0),
    );
    svg.add_circle(
        x - 12.0,
        y + 45.0,
        5.0,
        &Paint::fill(NEGATIVE).with_stroke(NEGATIVE_STROKE, 2.0),
    );

    svg.add_text(x + 12.0, y + 70.0, "+", &TextStyle::new(13.0, POSITIVE).bold());
    svg.add_text(x - 12.0, y + 60.0, "-", &TextStyle::new(13.0, NEGATIVE).bold());
}

fn draw_battery(svg: &mut SvgBuilder, x: f64, y: f64) {
    svg.add_rect(
        x - 30.0,
        y - 50.0,
        60.0,
        100.0,
        8.0,
        &Paint::fill("#4CAF50").with_stroke("#2E7D32", 2.0),
    );
    svg.add_rect(
        x - 10.0,
        y - 60.0,
        20.0,
        10.0,
        2.0,
        &Paint::fill(POSITIVE).with_stroke(POSITIVE_STROKE, 2.0),
    );
    svg.add_rect(
        x - 15.0,
        y + 50.0,
        30.0,
        5.0,
        0.0,
        &Paint::fill(NEGATIVE).with_stroke(NEGATIVE_STROKE, 2.0),
    );

    let sign = TextStyle::new(24.0, "#fff").bold();
    svg.add_text(x, y - 20.0, "+", &sign);
    svg.add_text(x, y + 30.0, "-", &sign);

    svg.add_circle(x, y - 60.0, 5.0, &Paint::fill(POSITIVE));
    svg.add_circle(x, y + 55.0, 5.0, &Paint::fill(NEGATIVE));
}

fn draw_resistor(svg: &mut SvgBuilder, x: f64, y: f64, bands: &[String]) {
    svg.add_rect(
        x - 40.0,
        y - 10.0,
        80.0,
        20.0,
        3.0,
        &Paint::fill("#F5DEB3").with_stroke("#8B4513", 2.0),
    );
    for (i, band) in bands.iter().enumerate() {
        let band_x = x - 25.0 + i as f64 * 20.0;
        svg.add_rect(band_x, y - 10.0, 8.0, 20.0, 0.0, &Paint::fill(band.as_str()));
    }

    lead(svg, x - 50.0, y, x - 40.0, y, LEAD, 3.0);
    lead(svg, x + 40.0, y, x + 50.0, y, LEAD, 3.0);
    svg.add_circle(x - 50.0, y, 4.0, &Paint::fill(LEAD));
    svg.add_circle(x + 50.0, y, 4.0, &Paint::fill(LEAD));
}

fn draw_switch(svg: &mut SvgBuilder, x: f64, y: f64, on: bool) {
    svg.add_rect(
        x - 35.0,
        y - 20.0,
        70.0,
        40.0,
        5.0,
        &Paint::fill("#607D8B").with_stroke("#37474F", 2.0),
    );

    let contact = Paint::fill("#FFD54F").with_stroke("#F57F17", 2.0);
    svg.add_circle(x - 25.0, y, 6.0, &contact);
    svg.add_circle(x + 25.0, y, 6.0, &contact);

    let tip = Point::new(if on { x + 15.0 } else { x - 15.0 }, y - 15.0);
    svg.add_line(
        Point::new(x - 5.0, y),
        tip,
        &Paint::outline("#FF5722", 5.0),
        Some(LineCap::Round),
    );
    svg.add_circle(
        tip.x,
        tip.y,
        7.0,
        &Paint::fill("#FF5722").with_stroke("#BF360C", 2.0),
    );

    lead(svg, x - 45.0, y, x - 35.0, y, LEAD, 3.0);
    lead(svg, x + 35.0, y, x + 45.0, y, LEAD, 3.0);
    svg.add_circle(x - 45.0, y, 4.0, &Paint::fill(LEAD));
    svg.add_circle(x + 45.0, y, 4.0, &Paint::fill(LEAD));

    let (state, color) = if on { ("ON", "#4CAF50") } else { ("OFF", "#F44336") };
    svg.add_text(x, y + 40.0, state, &TextStyle::new(12.0, color).bold());
}

fn draw_push_button(svg: &mut SvgBuilder, x: f64, y: f64, pressed: bool) {
    svg.add_circle(
        x,
        y,
        30.0,
        &Paint::fill("#FF5722").with_stroke("#BF360C", 3.0),
    );
    let cap_y = if pressed { y + 5.0 } else { y - 5.0 };
    svg.add_circle(
        x,
        cap_y,
        20.0,
        &Paint::fill("#FF7043").with_stroke("#D84315", 2.0),
    );
    svg.add_circle(x - 8.0, cap_y - 8.0, 6.0, &Paint::fill("#FFCCBC"));

    let pin = Paint::fill("#FFD54F").with_stroke("#F57F17", 2.0);
    for px in [x - 20.0, x + 20.0] {
        svg.add_circle(px, y + 35.0, 5.0, &pin);
        lead(svg, px, y + 40.0, px, y + 50.0, LEAD, 3.0);
        svg.add_circle(px, y + 50.0, 4.0, &Paint::fill(LEAD));
    }

    if pressed {
        svg.add_text(x, y + 70.0, "PRESSED", &TextStyle::new(11.0, "#4CAF50").bold());
    }
}

fn draw_buzzer(svg: &mut SvgBuilder, x: f64, y: f64, active: bool) {
    svg.add_circle(x, y, 35.0, &Paint::fill("#212121").with_stroke("#000", 2.0));
    svg.add_circle(
        x,
        y - 5.0,
        30.0,
        &Paint::fill("#424242").with_stroke("#212121", 2.0),
    );
    svg.add_circle(
        x,
        y - 5.0,
        15.0,
        &Paint::fill("#757575").with_stroke("#424242", 2.0),
    );

    if active {
        for (r, opacity) in [(52.0, 0.3), (64.0, 0.2), (76.0, 0.1)] {
            svg.add_circle(
                x,
                y - 5.0,
                r,
                &Paint::outline("#FFC107", 3.0).with_opacity(opacity),
            );
        }
    }

    lead(svg, x - 15.0, y + 35.0, x - 15.0, y + 60.0, "#F44336", 4.0);
    lead(svg, x + 15.0, y + 35.0, x + 15.0, y + 60.0, "#212121", 4.0);
    svg.add_circle(x - 15.0, y + 60.0, 5.0, &Paint::fill("#F44336"));
    svg.add_circle(x + 15.0, y + 60.0, 5.0, &Paint::fill("#212121"));

    svg.add_text(x - 15.0, y + 75.0, "+", &TextStyle::new(12.0, "#F44336").bold());
    svg.add_text(x + 15.0, y + 75.0, "-", &TextStyle::new(12.0, "#212121").bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::SvgConfig;

    fn render(placed: &PlacedComponent) -> String {
        let mut svg = SvgBuilder::new(SvgConfig::default());
        render_component(placed, &mut svg, &Stylesheet::default());
        svg.build()
    }

    #[test]
    fn test_group_carries_id_and_kind() {
        let out = render(&PlacedComponent::new("battery1", 150.0, 300.0, Component::Battery));
        assert!(out.starts_with(r#"<g id="battery1" class="component battery">"#));
        assert!(out.trim_end().ends_with("</g>"));
    }

    #[test]
    fn test_led_terminals_match_anchors() {
        let led = PlacedComponent::new("led1", 650.0, 300.0, Component::led());
        let out = render(&led);
        assert!(out.contains(r#"<circle cx="662" cy="355" r="5""#));
        assert!(out.contains(r#"<circle cx="638" cy="345" r="5""#));
        // Unlit LEDs have no glow rings.
        assert!(!out.contains(r#"r="38""#));
    }

    #[test]
    fn test_lit_led_glows() {
        let led = PlacedComponent::new(
            "led1",
            650.0,
            300.0,
            Component::Led {
                lit: true,
                color: "#FFC107".to_string(),
            },
        );
        let out = render(&led);
        assert!(out.contains(r##"r="38" fill="#FFC107" opacity="0.1""##));
    }

    #[test]
    fn test_resistor_bands_drawn_in_order() {
        let resistor = PlacedComponent::new(
            "resistor1",
            500.0,
            300.0,
            Component::resistor(&["#FF9800", "#FF9800", "#8B4513"]),
        );
        let out = render(&resistor);
        let first = out.find(r#"<rect x="475""#);
        let third = out.find(r##"<rect x="515" y="290" width="8" height="20" fill="#8B4513"/>"##);
        assert!(first.is_some());
        assert!(third.is_some());
        assert!(first < third);
    }

    #[test]
    fn test_switch_state_text() {
        let off = render(&PlacedComponent::new("switch1", 320.0, 300.0, Component::Switch { on: false }));
        assert!(off.contains(">OFF</text>"));
        let on = render(&PlacedComponent::new("switch1", 320.0, 300.0, Component::Switch { on: true }));
        assert!(on.contains(">ON</text>"));
    }

    #[test]
    fn test_only_pressed_button_says_pressed() {
        let idle = render(&PlacedComponent::new("button1", 400.0, 300.0, Component::PushButton { pressed: false }));
        assert!(!idle.contains("PRESSED"));
        let pressed = render(&PlacedComponent::new("button1", 400.0, 300.0, Component::PushButton { pressed: true }));
        assert!(pressed.contains("PRESSED"));
    }

    #[test]
    fn test_active_buzzer_has_sound_waves() {
        let quiet = render(&PlacedComponent::new("buzzer1", 650.0, 300.0, Component::Buzzer { active: false }));
        assert!(!quiet.contains(r##"stroke="#FFC107""##));
        let loud = render(&PlacedComponent::new("buzzer1", 650.0, 300.0, Component::Buzzer { active: true }));
        assert_eq!(loud.matches(r##"stroke="#FFC107""##).count(), 3);
    }

    #[test]
    fn test_empty_label_suppressed() {
        let led = PlacedComponent::new("led1", 650.0, 300.0, Component::led()).with_label("");
        let out = render(&led);
        assert!(!out.contains(r#"y="250""#));

        let led = led.with_label("LED");
        assert!(render(&led).contains(">LED</text>"));
    }

    #[test]
    fn test_highlight_box_only_when_highlighted() {
        let mut battery = PlacedComponent::new("battery1", 150.0, 300.0, Component::Battery);
        assert!(!render(&battery).contains(r#"class="highlight""#));
        battery.highlighted = true;
        let out = render(&battery);
        assert!(out.contains(r#"class="highlight" x="110" y="230" width="80" height="135""#));
    }
}
