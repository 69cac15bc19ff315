//! Skirmish - Turn-Based Fleet Combat Calculator
//!
//! This module exposes the combat model, persistence and simulator for testing
//! and for the `skirmish` binary.

pub mod combat;
pub mod core;
pub mod error;
pub mod fleet;
pub mod game;
pub mod input;
pub mod save_manager;
pub mod simulator;
pub mod ui;

pub use combat::{resolve_attack, AttackOutcome, CombatEntity, EntityKind, Modifier, ModifierTable};
pub use error::{Result, SkirmishError};
pub use fleet::{Exchange, Fleet};
pub use game::{RoundOrders, Session};
pub use save_manager::SaveManager;
