//! Core types for the layout engine

/// A 2D point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate this point by a fixed offset
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A bounding box representing the spatial extent of a component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box intersects another
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// The closed catalog of component kinds the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Led,
    Battery,
    Resistor,
    Switch,
    PushButton,
    Buzzer,
}

impl ComponentKind {
    /// Prefix used for synthetic identifiers (`led1`, `button1`, ...)
    pub fn key_prefix(&self) -> &'static str {
        match self {
            ComponentKind::Led => "led",
            ComponentKind::Battery => "battery",
            ComponentKind::Resistor => "resistor",
            ComponentKind::Switch => "switch",
            ComponentKind::PushButton => "button",
            ComponentKind::Buzzer => "buzzer",
        }
    }

    /// Most instances of this kind a single diagram can place
    pub fn max_instances(&self) -> u32 {
        match self {
            ComponentKind::Led | ComponentKind::Resistor => 3,
            ComponentKind::Battery | ComponentKind::Switch => 2,
            ComponentKind::PushButton | ComponentKind::Buzzer => 1,
        }
    }
}

/// A wire attachment point on a component.
///
/// LEDs and batteries expose `Positive`/`Negative` (an LED's long leg is
/// positive, its short leg negative). Two-terminal parts without polarity
/// (resistor, switch, push button) expose `Input` (left) and `Output` (right).
/// A buzzer has polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Positive,
    Negative,
    Input,
    Output,
}

/// Kind-specific render state
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Led { lit: bool, color: String },
    Battery,
    Resistor { bands: Vec<String> },
    Switch { on: bool },
    PushButton { pressed: bool },
    Buzzer { active: bool },
}

impl Component {
    pub fn led() -> Self {
        Component::Led {
            lit: false,
            color: "#FFC107".to_string(),
        }
    }

    pub fn resistor(bands: &[&str]) -> Self {
        Component::Resistor {
            bands: bands.iter().map(|b| b.to_string()).collect(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Led { .. } => ComponentKind::Led,
            Component::Battery => ComponentKind::Battery,
            Component::Resistor { .. } => ComponentKind::Resistor,
            Component::Switch { .. } => ComponentKind::Switch,
            Component::PushButton { .. } => ComponentKind::PushButton,
            Component::Buzzer { .. } => ComponentKind::Buzzer,
        }
    }

    /// Put the component in its powered state (LED lit, switch on, buzzer sounding)
    pub fn energize(&mut self) {
        match self {
            Component::Led { lit, .. } => *lit = true,
            Component::Switch { on } => *on = true,
            Component::Buzzer { active } => *active = true,
            Component::Battery | Component::Resistor { .. } | Component::PushButton { .. } => {}
        }
    }
}

/// A named, positioned instance of a component on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedComponent {
    pub id: String,
    pub position: Point,
    pub label: Option<String>,
    pub highlighted: bool,
    pub component: Component,
}

impl PlacedComponent {
    pub fn new(id: impl Into<String>, x: f64, y: f64, component: Component) -> Self {
        Self {
            id: id.into(),
            position: Point::new(x, y),
            label: None,
            highlighted: false,
            component,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.component.kind()
    }

    /// Fixed offset of an anchor from the component origin, if the kind has it
    pub fn anchor_offset(kind: ComponentKind, anchor: Anchor) -> Option<(f64, f64)> {
        use Anchor::*;
        use ComponentKind::*;
        match (kind, anchor) {
            (Led, Positive) => Some((12.0, 55.0)),
            (Led, Negative) => Some((-12.0, 45.0)),
            (Battery, Positive) => Some((0.0, -60.0)),
            (Battery, Negative) => Some((0.0, 55.0)),
            (Buzzer, Positive) => Some((-15.0, 60.0)),
            (Buzzer, Negative) => Some((15.0, 60.0)),
            (Resistor, Input) => Some((-50.0, 0.0)),
            (Resistor, Output) => Some((50.0, 0.0)),
            (Switch, Input) => Some((-45.0, 0.0)),
            (Switch, Output) => Some((45.0, 0.0)),
            (PushButton, Input) => Some((-20.0, 50.0)),
            (PushButton, Output) => Some((20.0, 50.0)),
            _ => None,
        }
    }

    /// Canvas point of an anchor on this component
    pub fn anchor(&self, anchor: Anchor) -> Option<Point> {
        Self::anchor_offset(self.kind(), anchor).map(|(dx, dy)| self.position.offset(dx, dy))
    }

    /// Extent of the rendered artwork, used for highlight boxes and overlap checks
    pub fn bounds(&self) -> BoundingBox {
        let (dx, dy, w, h) = match self.kind() {
            ComponentKind::Led => (-32.0, -36.0, 64.0, 100.0),
            ComponentKind::Battery => (-40.0, -70.0, 80.0, 135.0),
            ComponentKind::Resistor => (-58.0, -18.0, 116.0, 36.0),
            ComponentKind::Switch => (-52.0, -28.0, 104.0, 56.0),
            ComponentKind::PushButton => (-38.0, -38.0, 76.0, 96.0),
            ComponentKind::Buzzer => (-42.0, -42.0, 84.0, 110.0),
        };
        BoundingBox::new(self.position.x + dx, self.position.y + dy, w, h)
    }
}

/// Named component table produced by the layout engine.
///
/// Insertion order is the render order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Placement {
    pub components: Vec<PlacedComponent>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, component: PlacedComponent) {
        match self.components.iter_mut().find(|c| c.id == component.id) {
            Some(existing) => *existing = component,
            None => self.components.push(component),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<PlacedComponent> {
        let index = self.components.iter().position(|c| c.id == id)?;
        Some(self.components.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PlacedComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.id.as_str())
    }

    pub fn of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &PlacedComponent> {
        self.components.iter().filter(move |c| c.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn clear_highlights(&mut self) {
        for component in &mut self.components {
            component.highlighted = false;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedComponent> {
        self.components.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlacedComponent> {
        self.components.iter_mut()
    }
}
