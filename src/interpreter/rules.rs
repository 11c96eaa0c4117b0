//! Ordered phrase rules mapping instruction text to wiring
//!
//! Rules are evaluated top to bottom and the first whose predicate matches
//! wins. Specific phrasings ("second led" + "long" + "positive") sit above
//! the generic subsets they contain ("battery" + "led" + "positive"); moving
//! a rule changes which wires a lesson gets. Several entries can never fire
//! because an earlier rule's predicate covers theirs. They are kept in the
//! order the lesson corpus was written against and marked as shadowed.

use crate::layout::Anchor;

use super::{InterpreterConfig, Scene, WireColor, WireConnection};

use Anchor::{Input, Negative, Output, Positive};

/// Evaluation state for one replayed instruction
pub struct StepContext<'a> {
    /// Lower-cased instruction description
    pub description: &'a str,
    /// Step number of the instruction being evaluated
    pub step: u32,
    /// Whether wires and components touched at this step are emphasized
    pub highlight: bool,
    pub config: &'a InterpreterConfig,
    pub scene: &'a mut Scene,
}

impl StepContext<'_> {
    pub fn has(&self, needle: &str) -> bool {
        self.description.contains(needle)
    }

    pub fn has_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.has(n))
    }

    pub fn has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.has(n))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.scene.components.contains(id)
    }

    /// First identifier in `ids` that was placed
    pub fn first_present(&self, ids: &[&'static str]) -> Option<&'static str> {
        ids.iter().copied().find(|id| self.exists(id))
    }

    /// Add a wire without touching component highlights.
    ///
    /// Returns false (and adds nothing) when either component or anchor is
    /// missing, or both ends name the same component.
    pub fn wire(
        &mut self,
        from: &str,
        from_anchor: Anchor,
        to: &str,
        to_anchor: Anchor,
        color: WireColor,
    ) -> bool {
        if from == to {
            return false;
        }
        let components = &self.scene.components;
        let start = components.get(from).and_then(|c| c.anchor(from_anchor));
        let end = components.get(to).and_then(|c| c.anchor(to_anchor));
        let (Some(start), Some(end)) = (start, end) else {
            return false;
        };
        self.scene.wires.push(WireConnection {
            from_id: from.to_string(),
            from: start,
            to_id: to.to_string(),
            to: end,
            color,
            highlighted: self.highlight,
        });
        true
    }

    /// Add a wire and emphasize both of its components
    pub fn connect(
        &mut self,
        from: &str,
        from_anchor: Anchor,
        to: &str,
        to_anchor: Anchor,
        color: WireColor,
    ) -> bool {
        let added = self.wire(from, from_anchor, to, to_anchor, color);
        if added {
            self.emphasize(from);
            self.emphasize(to);
        }
        added
    }

    /// Highlight a component if this step is emphasized
    pub fn emphasize(&mut self, id: &str) {
        if !self.highlight {
            return;
        }
        if let Some(component) = self.scene.components.get_mut(id) {
            component.highlighted = true;
        }
    }

    /// Resistor a rule should wire, following the swap convention.
    ///
    /// With `by_keyword` the swap keywords in the description also select the
    /// replacement; otherwise only the step threshold does.
    pub fn swapped_resistor(&self, by_keyword: bool) -> Option<String> {
        let swap = &self.config.resistor_swap;
        let wants_replacement = (by_keyword && swap.keywords.iter().any(|k| self.has(k)))
            || self.step >= swap.from_step;
        if wants_replacement && self.exists(&swap.replacement) {
            Some(swap.replacement.clone())
        } else if self.exists(&swap.primary) {
            Some(swap.primary.clone())
        } else {
            None
        }
    }

    /// Negative terminal a LED return wire lands on: the free end of a
    /// battery pair when there is one.
    fn return_battery(&self) -> Option<&'static str> {
        self.first_present(&["battery2", "battery1"])
    }
}

/// One phrase rule: a predicate over the description and the wiring it adds
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&StepContext) -> bool,
    pub apply: fn(&mut StepContext),
}

/// The rule ladder, in evaluation order
pub static RULES: &[Rule] = &[
    Rule {
        name: "second-led-positive",
        matches: second_led_positive,
        apply: battery_to_second_led,
    },
    Rule {
        name: "second-led-negative",
        matches: second_led_negative,
        apply: second_led_to_return_battery,
    },
    Rule {
        name: "first-led-positive",
        matches: |ctx| ctx.has_all(&["first led", "battery", "positive"]),
        apply: |ctx| {
            ctx.connect("battery1", Positive, "led1", Positive, WireColor::Positive);
        },
    },
    Rule {
        name: "first-led-negative",
        matches: |ctx| ctx.has_all(&["first led", "short", "negative"]),
        apply: first_led_negative,
    },
    Rule {
        name: "battery-led-positive",
        matches: |ctx| {
            ctx.has_all(&["battery", "led", "positive"]) && !ctx.has_any(&["first", "second"])
        },
        apply: |ctx| {
            ctx.connect("battery1", Positive, "led1", Positive, WireColor::Positive);
        },
    },
    Rule {
        name: "battery-led-negative",
        matches: |ctx| {
            ctx.has_all(&["battery", "led", "negative"]) && !ctx.has_any(&["first", "second"])
        },
        apply: |ctx| {
            ctx.connect("led1", Negative, "battery1", Negative, WireColor::Negative);
        },
    },
    Rule {
        name: "battery-resistor",
        matches: |ctx| ctx.has_all(&["battery", "resistor"]),
        apply: |ctx| {
            if let Some(resistor) = ctx.swapped_resistor(true) {
                ctx.connect("battery1", Positive, &resistor, Input, WireColor::Positive);
            }
        },
    },
    Rule {
        name: "battery-switch",
        matches: |ctx| ctx.has_all(&["battery", "switch"]),
        apply: |ctx| {
            if let Some(switch) = ctx.first_present(&["switch1", "button1"]) {
                ctx.connect("battery1", Positive, switch, Input, WireColor::Positive);
            }
        },
    },
    Rule {
        name: "second-switch-resistor",
        matches: |ctx| ctx.has_all(&["second switch", "resistor"]),
        apply: |ctx| {
            ctx.connect("switch2", Output, "resistor1", Input, WireColor::Positive);
        },
    },
    Rule {
        name: "switch-load",
        matches: |ctx| ctx.has("switch") && ctx.has_any(&["led", "resistor"]),
        apply: switch_to_load,
    },
    Rule {
        name: "parallel-resistor-bank",
        matches: |ctx| ctx.has_all(&["three", "parallel", "resistor"]),
        apply: parallel_resistor_bank,
    },
    Rule {
        name: "resistor-led",
        matches: |ctx| ctx.has_all(&["resistor", "led"]),
        apply: |ctx| {
            if let Some(resistor) = ctx.swapped_resistor(true) {
                ctx.connect(&resistor, Output, "led1", Positive, WireColor::Positive);
            }
        },
    },
    Rule {
        name: "batteries-series",
        matches: |ctx| ctx.has_all(&["batteries", "series"]),
        apply: |ctx| {
            ctx.connect("battery1", Negative, "battery2", Positive, WireColor::Series);
        },
    },
    Rule {
        name: "buzzer",
        matches: |ctx| ctx.has("buzzer"),
        apply: buzzer,
    },
    Rule {
        name: "switches-series",
        matches: |ctx| {
            ctx.has_all(&["first switch", "second switch"]) || ctx.has_all(&["switch", "series"])
        },
        apply: |ctx| {
            ctx.connect("switch1", Output, "switch2", Input, WireColor::Positive);
        },
    },
    Rule {
        name: "battery-button",
        matches: |ctx| ctx.has_all(&["battery", "button"]),
        apply: |ctx| {
            ctx.connect("battery1", Positive, "button1", Input, WireColor::Positive);
        },
    },
    Rule {
        name: "button-resistor",
        matches: |ctx| ctx.has_all(&["button", "resistor"]),
        apply: |ctx| {
            ctx.connect("button1", Output, "resistor1", Input, WireColor::Positive);
        },
    },
    Rule {
        name: "led-series",
        matches: |ctx| ctx.has_all(&["led", "short", "long"]),
        apply: |ctx| {
            ctx.connect("led1", Negative, "led2", Positive, WireColor::Series);
        },
    },
    // Shadowed by "second-led-positive".
    Rule {
        name: "second-led-positive-parallel",
        matches: second_led_positive,
        apply: battery_to_second_led,
    },
    // Shadowed by "second-led-negative"; returns to battery1 only.
    Rule {
        name: "second-led-negative-parallel",
        matches: second_led_negative,
        apply: |ctx| {
            ctx.connect("led2", Negative, "battery1", Negative, WireColor::Negative);
        },
    },
    // Wiring branches shadowed by "first-led-*" and "second-led-*".
    Rule {
        name: "numbered-led-battery",
        matches: |ctx| ctx.has_any(&["first led", "second led"]) && ctx.has("battery"),
        apply: numbered_led_battery,
    },
    Rule {
        name: "reconnect-battery",
        matches: |ctx| ctx.has_all(&["reconnect", "battery"]),
        apply: reconnect_battery,
    },
    // Shadowed by "battery-switch" ("battery pack" contains "battery").
    Rule {
        name: "switch-led-array",
        matches: |ctx| ctx.has_all(&["switch", "battery pack", "led array"]),
        apply: switch_led_array,
    },
    Rule {
        name: "passive",
        matches: |ctx| {
            ctx.has_any(&[
                "flip", "test", "press", "lights", "light up", "should", "arrange", "mount",
                "tape", "secure", "cut", "line",
            ])
        },
        apply: |_| {},
    },
];

/// First rule whose predicate matches the description
pub fn first_match(ctx: &StepContext) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(ctx))
}

/// Apply the first matching rule and return its name
pub fn apply_first_match(ctx: &mut StepContext) -> Option<&'static str> {
    let rule = first_match(ctx)?;
    (rule.apply)(ctx);
    Some(rule.name)
}

/// Whether a lower-cased description asks the learner to inspect a part
pub fn is_identification(description: &str) -> bool {
    ["look", "identify", "examine"]
        .iter()
        .any(|verb| description.contains(verb))
}

/// Emphasize components an identification step points at ("look at your LED")
pub fn highlight_identified(ctx: &mut StepContext) {
    if !is_identification(ctx.description) {
        return;
    }
    const TARGETS: [(&str, &str); 6] = [
        ("led", "led1"),
        ("battery", "battery1"),
        ("resistor", "resistor1"),
        ("switch", "switch1"),
        ("button", "button1"),
        ("buzzer", "buzzer1"),
    ];
    for (keyword, id) in TARGETS {
        if ctx.has(keyword) {
            ctx.emphasize(id);
        }
    }
}

fn second_led_positive(ctx: &StepContext) -> bool {
    ctx.has_all(&["second led", "long", "positive"])
}

fn second_led_negative(ctx: &StepContext) -> bool {
    ctx.has_all(&["second led", "short", "negative"])
}

fn battery_to_second_led(ctx: &mut StepContext) {
    ctx.connect("battery1", Positive, "led2", Positive, WireColor::Positive);
}

fn second_led_to_return_battery(ctx: &mut StepContext) {
    if let Some(battery) = ctx.return_battery() {
        ctx.connect("led2", Negative, battery, Negative, WireColor::Negative);
    }
}

fn first_led_negative(ctx: &mut StepContext) {
    if ctx.has("battery") {
        if let Some(battery) = ctx.return_battery() {
            ctx.connect("led1", Negative, battery, Negative, WireColor::Negative);
        }
    } else if ctx.has("second led") {
        ctx.connect("led1", Negative, "led2", Positive, WireColor::Series);
    }
}

fn switch_to_load(ctx: &mut StepContext) {
    let Some(from) = ctx.first_present(&["switch1", "button1"]) else {
        return;
    };
    if ctx.exists("resistor1") {
        ctx.connect(from, Output, "resistor1", Input, WireColor::Positive);
    } else {
        ctx.connect(from, Output, "led1", Positive, WireColor::Positive);
    }
}

/// Each LED of a three-way parallel bank gets its own resistor. Only the
/// first pair is emphasized.
fn parallel_resistor_bank(ctx: &mut StepContext) {
    for i in 1..=3 {
        let resistor = format!("resistor{i}");
        let led = format!("led{i}");
        if i == 1 {
            ctx.connect(&resistor, Output, &led, Positive, WireColor::Positive);
        } else {
            ctx.wire(&resistor, Output, &led, Positive, WireColor::Positive);
        }
    }
}

fn buzzer(ctx: &mut StepContext) {
    if !ctx.exists("buzzer1") {
        return;
    }
    if ctx.has("button") && ctx.exists("button1") {
        ctx.connect("button1", Output, "buzzer1", Positive, WireColor::Positive);
    } else if ctx.has("negative") {
        ctx.connect("buzzer1", Negative, "battery1", Negative, WireColor::Negative);
    }
}

fn numbered_led_battery(ctx: &mut StepContext) {
    let led = if ctx.has("first") {
        "led1"
    } else if ctx.has("second") {
        "led2"
    } else {
        "led1"
    };
    if ctx.has_all(&["positive", "long"]) {
        ctx.connect("battery1", Positive, led, Positive, WireColor::Positive);
    } else if ctx.has_all(&["negative", "short"]) {
        if let Some(battery) = ctx.return_battery() {
            ctx.connect(led, Negative, battery, Negative, WireColor::Negative);
        }
    }
}

/// Re-emit the whole battery, resistor, LED loop in one step
fn reconnect_battery(ctx: &mut StepContext) {
    let Some(resistor) = ctx.swapped_resistor(false) else {
        return;
    };
    if !ctx.exists("battery1") || !ctx.exists("led1") {
        return;
    }
    ctx.wire("battery1", Positive, &resistor, Input, WireColor::Positive);
    ctx.wire(&resistor, Output, "led1", Positive, WireColor::Positive);
    ctx.wire("led1", Negative, "battery1", Negative, WireColor::Negative);
    ctx.emphasize("battery1");
    ctx.emphasize(&resistor);
    ctx.emphasize("led1");
}

fn switch_led_array(ctx: &mut StepContext) {
    if !ctx.exists("switch1") {
        return;
    }
    ctx.wire("battery1", Positive, "switch1", Input, WireColor::Positive);
    ctx.wire("switch1", Output, "resistor1", Input, WireColor::Positive);
    ctx.emphasize("switch1");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{self, LayoutConfig, Placement};
    use crate::lesson::{ComponentRequirement, LessonSpec};

    fn placement(parts: &[(&str, u32)]) -> Placement {
        let lesson = LessonSpec {
            id: 1,
            title: String::new(),
            components: parts
                .iter()
                .map(|(n, q)| ComponentRequirement::new(*n, *q))
                .collect(),
            instructions: vec![],
        };
        layout::compute(&lesson, &LayoutConfig::default())
    }

    /// Run one description through the ladder as the current step
    fn evaluate(parts: &[(&str, u32)], description: &str, step: u32) -> (Option<&'static str>, Scene) {
        let config = InterpreterConfig::default();
        let mut scene = Scene::new(placement(parts));
        let description = description.to_lowercase();
        let name = {
            let mut ctx = StepContext {
                description: &description,
                step,
                highlight: true,
                config: &config,
                scene: &mut scene,
            };
            let name = apply_first_match(&mut ctx);
            highlight_identified(&mut ctx);
            name
        };
        (name, scene)
    }

    /// Run one rule action directly, bypassing the ladder
    fn apply_only(parts: &[(&str, u32)], description: &str, apply: fn(&mut StepContext)) -> Scene {
        let config = InterpreterConfig::default();
        let mut scene = Scene::new(placement(parts));
        let description = description.to_lowercase();
        let mut ctx = StepContext {
            description: &description,
            step: 2,
            highlight: true,
            config: &config,
            scene: &mut scene,
        };
        apply(&mut ctx);
        scene
    }

    /// Check one wire's endpoints, anchor points and color
    fn assert_wire(
        scene: &Scene,
        index: usize,
        (from, from_anchor): (&str, Anchor),
        (to, to_anchor): (&str, Anchor),
        color: WireColor,
    ) {
        let wire = &scene.wires[index];
        assert_eq!((wire.from_id.as_str(), wire.to_id.as_str()), (from, to));
        assert_eq!(
            Some(wire.from),
            scene.components.get(from).and_then(|c| c.anchor(from_anchor))
        );
        assert_eq!(
            Some(wire.to),
            scene.components.get(to).and_then(|c| c.anchor(to_anchor))
        );
        assert_eq!(wire.color, color);
    }

    const LED_AND_BATTERY: &[(&str, u32)] = &[("LED", 1), ("AA Battery", 1)];

    #[test]
    fn test_battery_led_positive() {
        let (rule, scene) = evaluate(
            LED_AND_BATTERY,
            "Connect one wire from the battery positive (+) terminal to the LED long leg.",
            2,
        );
        assert_eq!(rule, Some("battery-led-positive"));
        assert_eq!(scene.wires.len(), 1);
        let wire = &scene.wires[0];
        assert!(wire.joins("battery1", "led1"));
        assert_eq!(wire.color, WireColor::Positive);
        assert!(wire.highlighted);
        assert_eq!(wire.from, crate::layout::Point::new(150.0, 240.0));
        assert_eq!(wire.to, crate::layout::Point::new(662.0, 355.0));
    }

    #[test]
    fn test_specific_second_led_before_generic() {
        let (rule, scene) = evaluate(
            &[("LED", 2), ("AA Battery", 1)],
            "Connect the battery positive to the second LED long leg",
            3,
        );
        assert_eq!(rule, Some("second-led-positive"));
        assert!(scene.wires[0].joins("battery1", "led2"));
    }

    #[test]
    fn test_second_led_returns_to_free_battery() {
        let (_, scene) = evaluate(
            &[("LED", 2), ("AA Battery", 2)],
            "Connect the second LED short leg to the negative terminal",
            3,
        );
        assert!(scene.wires[0].joins("led2", "battery2"));
        assert_eq!(scene.wires[0].color, WireColor::Negative);
    }

    #[test]
    fn test_led_to_led_series_is_purple() {
        let (rule, scene) = evaluate(
            &[("LED", 2), ("AA Battery", 1)],
            "Connect the first LED short leg to the second LED long leg",
            2,
        );
        assert_eq!(rule, Some("led-series"));
        assert_eq!(scene.wires[0].color, WireColor::Series);
        assert!(scene.wires[0].joins("led1", "led2"));
    }

    #[test]
    fn test_missing_component_is_silent_no_op() {
        let (rule, scene) = evaluate(
            LED_AND_BATTERY,
            "Connect the battery to the resistor",
            2,
        );
        assert_eq!(rule, Some("battery-resistor"));
        assert!(scene.wires.is_empty());
        assert_eq!(scene.highlighted_components().count(), 0);
    }

    #[test]
    fn test_resistor_swap_by_keyword_and_step() {
        let parts = &[("Resistor", 2), ("LED", 1), ("AA Battery", 1)];
        let (_, early) = evaluate(parts, "Connect the battery to the resistor", 2);
        assert!(early.wires[0].joins("battery1", "resistor1"));

        let (_, keyword) = evaluate(parts, "Connect the battery to the 1k resistor", 2);
        assert!(keyword.wires[0].joins("battery1", "resistor2"));

        let (_, late) = evaluate(parts, "Connect the battery to the resistor", 4);
        assert!(late.wires[0].joins("battery1", "resistor2"));
    }

    #[test]
    fn test_reconnect_emits_full_loop() {
        let (rule, scene) = evaluate(
            &[("Resistor", 2), ("LED", 1), ("AA Battery", 1)],
            "Reconnect the power and watch the brightness change",
            5,
        );
        assert_eq!(rule, None);
        assert!(scene.wires.is_empty());

        let (rule, scene) = evaluate(
            &[("LED", 1), ("AA Battery", 1), ("Resistor", 2)],
            "Reconnect the battery",
            5,
        );
        assert_eq!(rule, Some("reconnect-battery"));
        assert_eq!(scene.wires.len(), 3);
        assert!(scene.wires[0].joins("battery1", "resistor2"));
        assert!(scene.wires[1].joins("resistor2", "led1"));
        assert!(scene.wires[2].joins("led1", "battery1"));
        let mut highlighted: Vec<_> = scene.highlighted_components().collect();
        highlighted.sort();
        assert_eq!(highlighted, vec!["battery1", "led1", "resistor2"]);
    }

    #[test]
    fn test_parallel_bank_highlights_first_pair_only() {
        let (rule, scene) = evaluate(
            &[("LED", 3), ("Resistor", 3), ("AA Battery", 1)],
            "Wire three LEDs in parallel, each with its own resistor",
            3,
        );
        assert_eq!(rule, Some("parallel-resistor-bank"));
        assert_eq!(scene.wires.len(), 3);
        let mut highlighted: Vec<_> = scene.highlighted_components().collect();
        highlighted.sort();
        assert_eq!(highlighted, vec!["led1", "resistor1"]);
    }

    #[test]
    fn test_switch_falls_back_to_button() {
        let (rule, scene) = evaluate(
            &[("Push Button", 1), ("LED", 1), ("AA Battery", 1)],
            "Connect the battery positive to the switch",
            1,
        );
        assert_eq!(rule, Some("battery-switch"));
        assert!(scene.wires[0].joins("battery1", "button1"));
    }

    #[test]
    fn test_buzzer_wiring() {
        let parts = &[("Buzzer", 1), ("Push Button", 1), ("AA Battery", 1)];
        let (_, via_button) = evaluate(parts, "Connect the button to the buzzer red wire", 2);
        assert!(via_button.wires[0].joins("button1", "buzzer1"));

        let (_, to_negative) = evaluate(parts, "Connect the buzzer black wire to the negative side", 3);
        assert!(to_negative.wires[0].joins("buzzer1", "battery1"));
        assert_eq!(to_negative.wires[0].color, WireColor::Negative);
    }

    #[test]
    fn test_passive_steps_add_nothing() {
        for description in [
            "Test your circuit!",
            "Mount the LED on the cardboard",
            "Tape the battery down",
        ] {
            let (rule, scene) = evaluate(LED_AND_BATTERY, description, 4);
            assert_eq!(rule, Some("passive"), "{description}");
            assert!(scene.wires.is_empty());
        }
    }

    #[test]
    fn test_identify_highlights_component() {
        let (rule, scene) = evaluate(
            LED_AND_BATTERY,
            "Look at your LED. The longer leg is positive (+), and the shorter leg is negative (-).",
            1,
        );
        // "shorter"/"longer" trip the LED series rule, which has no second LED to wire.
        assert_eq!(rule, Some("led-series"));
        assert!(scene.wires.is_empty());
        assert_eq!(scene.highlighted_components().collect::<Vec<_>>(), vec!["led1"]);
    }

    #[test]
    fn test_first_led_positive() {
        let (rule, scene) = evaluate(
            &[("LED", 2), ("AA Battery", 1)],
            "Connect the battery positive to the first LED",
            2,
        );
        assert_eq!(rule, Some("first-led-positive"));
        assert_eq!(scene.wires.len(), 1);
        assert_wire(&scene, 0, ("battery1", Positive), ("led1", Positive), WireColor::Positive);
    }

    #[test]
    fn test_first_led_negative_returns_to_free_battery() {
        let (rule, scene) = evaluate(
            &[("LED", 2), ("AA Battery", 2)],
            "Connect the first LED short leg to the battery negative",
            3,
        );
        assert_eq!(rule, Some("first-led-negative"));
        assert_wire(&scene, 0, ("led1", Negative), ("battery2", Negative), WireColor::Negative);
    }

    #[test]
    fn test_first_led_negative_series_branch() {
        let description = "Connect the first LED short leg to the second LED negative";
        // The ladder hands this phrasing to the second-LED rule.
        let (rule, _) = evaluate(&[("LED", 2), ("AA Battery", 1)], description, 3);
        assert_eq!(rule, Some("second-led-negative"));

        let scene = apply_only(&[("LED", 2), ("AA Battery", 1)], description, first_led_negative);
        assert_eq!(scene.wires.len(), 1);
        assert_wire(&scene, 0, ("led1", Negative), ("led2", Positive), WireColor::Series);
    }

    #[test]
    fn test_second_switch_resistor() {
        let (rule, scene) = evaluate(
            &[("Switch", 2), ("Resistor", 1), ("LED", 1), ("AA Battery", 1)],
            "Connect the second switch to the resistor",
            3,
        );
        assert_eq!(rule, Some("second-switch-resistor"));
        assert_wire(&scene, 0, ("switch2", Output), ("resistor1", Input), WireColor::Positive);
        let mut highlighted: Vec<_> = scene.highlighted_components().collect();
        highlighted.sort();
        assert_eq!(highlighted, vec!["resistor1", "switch2"]);
    }

    #[test]
    fn test_batteries_in_series() {
        let (rule, scene) = evaluate(
            &[("AA Battery", 2), ("LED", 1)],
            "Stack the two batteries in series",
            1,
        );
        assert_eq!(rule, Some("batteries-series"));
        assert_wire(&scene, 0, ("battery1", Negative), ("battery2", Positive), WireColor::Series);
    }

    #[test]
    fn test_switches_in_series() {
        let parts = &[("Switch", 2), ("AA Battery", 1)];
        for description in [
            "Join the first switch to the second switch",
            "Wire the switches in series",
        ] {
            let (rule, scene) = evaluate(parts, description, 2);
            assert_eq!(rule, Some("switches-series"), "{description}");
            assert_wire(&scene, 0, ("switch1", Output), ("switch2", Input), WireColor::Positive);
        }
    }

    #[test]
    fn test_battery_button() {
        let (rule, scene) = evaluate(
            &[("Push Button", 1), ("LED", 1), ("AA Battery", 1)],
            "Connect the battery positive to the button",
            1,
        );
        assert_eq!(rule, Some("battery-button"));
        assert_wire(&scene, 0, ("battery1", Positive), ("button1", Input), WireColor::Positive);
    }

    #[test]
    fn test_button_resistor() {
        let (rule, scene) = evaluate(
            &[("Push Button", 1), ("Resistor", 1), ("LED", 1), ("AA Battery", 1)],
            "Connect the other button pin to the resistor",
            2,
        );
        assert_eq!(rule, Some("button-resistor"));
        assert_wire(&scene, 0, ("button1", Output), ("resistor1", Input), WireColor::Positive);
    }

    #[test]
    fn test_numbered_led_battery_wiring() {
        let parts = &[("LED", 2), ("AA Battery", 2)];
        let positive = apply_only(
            parts,
            "Connect the second LED long leg to the battery positive",
            numbered_led_battery,
        );
        assert_wire(&positive, 0, ("battery1", Positive), ("led2", Positive), WireColor::Positive);

        let negative = apply_only(
            parts,
            "Connect the first LED short leg to the battery negative",
            numbered_led_battery,
        );
        assert_wire(&negative, 0, ("led1", Negative), ("battery2", Negative), WireColor::Negative);

        // Without a leg and polarity the rule matches but wires nothing.
        let (rule, neither) = evaluate(parts, "Hold the first LED near the battery", 2);
        assert_eq!(rule, Some("numbered-led-battery"));
        assert!(neither.wires.is_empty());
    }

    #[test]
    fn test_shadowed_rules_never_match_first() {
        let shadowed = [
            "second-led-positive-parallel",
            "second-led-negative-parallel",
            "switch-led-array",
            "numbered-led-battery",
        ];
        for description in [
            "Connect the battery positive to the second LED long leg",
            "Connect the second LED short leg to the battery negative",
            "Put the switch between the battery pack and the LED array",
            "Connect the first LED long leg to the battery positive",
            "Connect the first LED short leg to the battery negative",
            "Connect the second LED long leg to the battery positive",
            "Connect the second LED short leg to the battery negative",
        ] {
            let (rule, _) = evaluate(&[("LED", 3), ("AA Battery", 2), ("Switch", 1)], description, 2);
            let rule = rule.expect("Some rule matches");
            assert!(!shadowed.contains(&rule), "{rule} fired for {description}");
        }
    }
}
