//! Shared constants and combat math.

pub mod combat_math;
pub mod constants;

pub use constants::*;
