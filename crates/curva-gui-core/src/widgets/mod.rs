//! Shared control-surface widgets.

pub mod bound;
pub mod knob;

pub use bound::BoundKnob;
pub use knob::{Knob, format_value};
