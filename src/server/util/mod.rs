//! Small helpers shared across layers.

pub mod date;
pub mod money;
