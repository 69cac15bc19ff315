//! Combat entity model and damage resolution.

pub mod logic;
pub mod modifiers;
pub mod types;

pub use logic::*;
pub use modifiers::*;
pub use types::*;
