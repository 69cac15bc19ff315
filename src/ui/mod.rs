//! Console rendering for the referee loop.

mod combat_log;
mod fleet_panel;

pub use combat_log::{attack_lines, write_exchange};
pub use fleet_panel::{draw_fleet, status_color, status_line};
