//! SVG renderer for circuit scenes
//!
//! [`svg`] is the low-level drawing surface; [`components`] and [`wire`]
//! draw the circuit parts on top of it.

pub mod components;
pub mod config;
pub mod svg;
pub mod wire;

pub use components::render_component;
pub use config::SvgConfig;
pub use svg::{escape_xml, SvgBuilder};
pub use wire::{render_wire, WIRE_CURVE_THRESHOLD};
