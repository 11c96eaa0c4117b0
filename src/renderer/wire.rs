//! Wire rendering

use crate::interpreter::WireConnection;
use crate::layout::Point;
use crate::stylesheet::Stylesheet;

use super::svg::{LineCap, Paint, SvgBuilder, GLOW_FILTER};

/// Wires shorter than this are drawn straight, longer ones as a curve
pub const WIRE_CURVE_THRESHOLD: f64 = 50.0;

const WIRE_WIDTH: f64 = 4.0;
const HIGHLIGHT_WIRE_WIDTH: f64 = 6.0;

/// Draw a wire with a terminal dot at each end.
///
/// The curve leaves and enters horizontally: both control points sit at the
/// endpoint heights, pulled 30% of the horizontal span toward each other.
pub fn render_wire(wire: &WireConnection, svg: &mut SvgBuilder, stylesheet: &Stylesheet) {
    let color = stylesheet.resolve_or_default(wire.color.token());
    let terminal = stylesheet.resolve_or_default("wire-terminal");

    let classes: &[&str] = if wire.highlighted {
        &["wire", "highlighted"]
    } else {
        &["wire"]
    };
    svg.start_group(None, classes, None);

    let mut paint = Paint::outline(
        color.as_str(),
        if wire.highlighted {
            HIGHLIGHT_WIRE_WIDTH
        } else {
            WIRE_WIDTH
        },
    );
    if wire.highlighted {
        paint = paint.with_filter(GLOW_FILTER);
    }

    let (from, to) = (wire.from, wire.to);
    if from.distance(to) < WIRE_CURVE_THRESHOLD {
        svg.add_line(from, to, &paint, Some(LineCap::Round));
    } else {
        let dx = to.x - from.x;
        let c1 = Point::new(from.x + dx * 0.3, from.y);
        let c2 = Point::new(to.x - dx * 0.3, to.y);
        svg.add_cubic(from, c1, c2, to, &paint);
    }

    let dot = Paint::fill(color.as_str()).with_stroke(terminal.as_str(), 2.0);
    svg.add_circle(from.x, from.y, 5.0, &dot);
    svg.add_circle(to.x, to.y, 5.0, &dot);

    svg.end_group();
}
