//! Fixed-template placement of a lesson's components

use log::debug;

use crate::lesson::LessonSpec;

use super::classify::ComponentCounts;
use super::config::LayoutConfig;
use super::types::{Component, ComponentKind, PlacedComponent, Placement};

const BANDS_330_OHM: [&str; 3] = ["#FF9800", "#FF9800", "#8B4513"];
const BANDS_1K_OHM: [&str; 3] = ["#8B4513", "#212121", "#F44336"];

/// Place every classifiable component of a lesson on the canvas.
///
/// The result depends only on the parts list and the config, so every
/// artifact generated for a lesson sees the same identifiers at the same
/// coordinates.
pub fn compute(lesson: &LessonSpec, config: &LayoutConfig) -> Placement {
    let counts = ComponentCounts::from_requirements(&lesson.components);
    let placement = place(&counts, config);
    debug!(
        lesson_id = lesson.id,
        components = placement.len();
        "Computed component placement"
    );
    placement
}

/// Place components for already-counted kinds
pub fn place(counts: &ComponentCounts, config: &LayoutConfig) -> Placement {
    let count = |kind: ComponentKind| {
        let requested = counts.get(kind);
        let max = kind.max_instances();
        if requested > max {
            debug!(kind:? = kind, requested, max; "Clamping component count to template capacity");
        }
        requested.min(max)
    };

    let mut placement = Placement::new();
    let cx = config.center_x();
    let cy = config.center_y();
    let pair = config.pair_spacing;
    let fan = config.fan_spacing;

    let battery_x = config.edge_inset;
    match count(ComponentKind::Battery) {
        1 => placement.insert(
            PlacedComponent::new("battery1", battery_x, cy, Component::Battery).with_label("Battery"),
        ),
        2 => {
            placement.insert(
                PlacedComponent::new("battery1", battery_x, cy - pair, Component::Battery)
                    .with_label("Battery 1"),
            );
            placement.insert(
                PlacedComponent::new("battery2", battery_x, cy + pair, Component::Battery)
                    .with_label("Battery 2"),
            );
        }
        _ => {}
    }

    let led_count = count(ComponentKind::Led);
    let led_x = config.canvas_width - config.edge_inset;
    let led_rows: &[f64] = match led_count {
        1 => &[0.0],
        2 => &[-pair, pair],
        3 => &[-fan, 0.0, fan],
        _ => &[],
    };
    for (i, dy) in led_rows.iter().enumerate() {
        let label = if led_count == 1 {
            "LED".to_string()
        } else {
            format!("LED {}", i + 1)
        };
        placement.insert(
            PlacedComponent::new(format!("led{}", i + 1), led_x, cy + dy, Component::led())
                .with_label(label),
        );
    }

    let resistor_count = count(ComponentKind::Resistor);
    let resistor_x = led_x - config.edge_inset;
    let same_value_bank = led_count >= 3 && resistor_count >= 3;
    for i in 1..=resistor_count {
        let (y, label) = match i {
            1 if resistor_count == 1 => (cy - fan, "Resistor"),
            1 => (cy - fan, "330Ω"),
            2 if same_value_bank => (cy, "330Ω"),
            2 => (cy, "1KΩ"),
            _ => (cy + fan, "330Ω"),
        };
        let bands = if label == "1KΩ" {
            &BANDS_1K_OHM
        } else {
            &BANDS_330_OHM
        };
        placement.insert(
            PlacedComponent::new(format!("resistor{i}"), resistor_x, y, Component::resistor(bands))
                .with_label(label),
        );
    }

    let switch_count = count(ComponentKind::Switch);
    let switch_x = cx - pair;
    let half_gap = 0.75 * pair;
    match switch_count {
        1 => placement.insert(
            PlacedComponent::new("switch1", switch_x, cy, Component::Switch { on: false })
                .with_label("Switch"),
        ),
        2 => {
            placement.insert(
                PlacedComponent::new("switch1", switch_x - half_gap, cy, Component::Switch { on: false })
                    .with_label("Switch 1"),
            );
            placement.insert(
                PlacedComponent::new("switch2", switch_x + half_gap, cy, Component::Switch { on: false })
                    .with_label("Switch 2"),
            );
        }
        _ => {}
    }

    if count(ComponentKind::PushButton) >= 1 {
        placement.insert(
            PlacedComponent::new("button1", cx, cy, Component::PushButton { pressed: false })
                .with_label("Button"),
        );
    }

    // A buzzer takes over the single-LED slot.
    if count(ComponentKind::Buzzer) >= 1 {
        placement.insert(
            PlacedComponent::new("buzzer1", led_x, cy, Component::Buzzer { active: false })
                .with_label("Buzzer"),
        );
        placement.remove("led1");
    }

    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Point;
    use crate::lesson::ComponentRequirement;

    fn lesson(parts: &[(&str, u32)]) -> LessonSpec {
        LessonSpec {
            id: 1,
            title: "Test".to_string(),
            components: parts
                .iter()
                .map(|(name, qty)| ComponentRequirement::new(*name, *qty))
                .collect(),
            instructions: vec![],
        }
    }

    fn position(placement: &Placement, id: &str) -> Option<Point> {
        placement.get(id).map(|c| c.position)
    }

    #[test]
    fn test_single_led_and_battery() {
        let placement = compute(
            &lesson(&[("LED", 1), ("AA Battery", 1), ("Jumper Wires", 2)]),
            &LayoutConfig::default(),
        );
        assert_eq!(placement.ids().collect::<Vec<_>>(), vec!["battery1", "led1"]);
        assert_eq!(position(&placement, "battery1"), Some(Point::new(150.0, 300.0)));
        assert_eq!(position(&placement, "led1"), Some(Point::new(650.0, 300.0)));
        assert_eq!(placement.get("led1").and_then(|c| c.label.as_deref()), Some("LED"));
    }

    #[test]
    fn test_two_batteries_stack() {
        let placement = compute(&lesson(&[("AA Battery", 2)]), &LayoutConfig::default());
        assert_eq!(position(&placement, "battery1"), Some(Point::new(150.0, 220.0)));
        assert_eq!(position(&placement, "battery2"), Some(Point::new(150.0, 380.0)));
    }

    #[test]
    fn test_three_leds_fan_out() {
        let placement = compute(&lesson(&[("LED", 3)]), &LayoutConfig::default());
        let ys: Vec<f64> = placement.iter().map(|c| c.position.y).collect();
        assert_eq!(ys, vec![200.0, 300.0, 400.0]);
        assert_eq!(placement.get("led3").and_then(|c| c.label.as_deref()), Some("LED 3"));
    }

    #[test]
    fn test_resistor_labels() {
        let placement = compute(&lesson(&[("Resistor", 2), ("LED", 1)]), &LayoutConfig::default());
        assert_eq!(placement.get("resistor1").and_then(|c| c.label.as_deref()), Some("330Ω"));
        assert_eq!(placement.get("resistor2").and_then(|c| c.label.as_deref()), Some("1KΩ"));
        assert_eq!(position(&placement, "resistor1"), Some(Point::new(500.0, 200.0)));

        let bank = compute(&lesson(&[("Resistor", 3), ("LED", 3)]), &LayoutConfig::default());
        assert_eq!(bank.get("resistor2").and_then(|c| c.label.as_deref()), Some("330Ω"));
    }

    #[test]
    fn test_switch_pair_left_of_center() {
        let placement = compute(&lesson(&[("Switch", 2)]), &LayoutConfig::default());
        assert_eq!(position(&placement, "switch1"), Some(Point::new(260.0, 300.0)));
        assert_eq!(position(&placement, "switch2"), Some(Point::new(380.0, 300.0)));

        let single = compute(&lesson(&[("Toggle Switch", 1)]), &LayoutConfig::default());
        assert_eq!(position(&single, "switch1"), Some(Point::new(320.0, 300.0)));
        assert_eq!(single.get("switch1").and_then(|c| c.label.as_deref()), Some("Switch"));
        assert_eq!(placement.get("switch1").and_then(|c| c.label.as_deref()), Some("Switch 1"));
    }

    #[test]
    fn test_buzzer_replaces_led_slot() {
        let placement = compute(
            &lesson(&[("LED", 1), ("Buzzer", 1), ("Push Button", 1)]),
            &LayoutConfig::default(),
        );
        assert!(!placement.contains("led1"));
        assert_eq!(position(&placement, "buzzer1"), Some(Point::new(650.0, 300.0)));
        assert_eq!(position(&placement, "button1"), Some(Point::new(400.0, 300.0)));
    }

    #[test]
    fn test_counts_clamped_to_template() {
        let placement = compute(&lesson(&[("LED", 5)]), &LayoutConfig::default());
        assert_eq!(placement.of_kind(ComponentKind::Led).count(), 3);
    }

    #[test]
    fn test_unclassifiable_requirement_absent() {
        let placement = compute(
            &lesson(&[("LED", 1), ("Cardboard tube", 1)]),
            &LayoutConfig::default(),
        );
        assert_eq!(placement.ids().collect::<Vec<_>>(), vec!["led1"]);
    }

    #[test]
    fn test_placed_components_do_not_overlap() {
        let placement = compute(
            &lesson(&[("AA Battery", 2), ("LED", 3), ("Resistor", 3), ("Switch", 2)]),
            &LayoutConfig::default(),
        );
        let comps: Vec<_> = placement.iter().collect();
        for (i, a) in comps.iter().enumerate() {
            for b in &comps[i + 1..] {
                assert!(
                    !a.bounds().intersects(&b.bounds()),
                    "{} overlaps {}",
                    a.id,
                    b.id
                );
            }
        }
    }
}
