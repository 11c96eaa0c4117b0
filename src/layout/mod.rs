//! Layout engine for placing lesson components
//!
//! This module takes a lesson's parts list, classifies every line item into
//! a component kind and places the resulting instances on a fixed template,
//! producing a [`Placement`] keyed by synthetic ids (`led1`, `battery2`, ...).

pub mod classify;
pub mod config;
pub mod engine;
pub mod types;

pub use classify::{classify, ComponentCounts};
pub use config::LayoutConfig;
pub use engine::{compute, place};
pub use types::*;
