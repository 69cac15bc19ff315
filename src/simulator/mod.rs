//! Balance simulator for Monte Carlo analysis.
//!
//! Runs thousands of attacks against a fresh target to estimate:
//! - Average number of hits needed to destroy it
//! - How crit chance and matchups shift that number
//! - Expected damage per hit
//!
//! Every shot goes through `combat::resolve_attack`, so simulation results
//! match the referee's behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{HitsGrid, SimReport};
pub use runner::{run_grid, run_simulation, simulate_single_run, RunStats};
