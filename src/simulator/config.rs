//! Simulation configuration.

use crate::combat::Modifier;
use crate::core::constants::*;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Hull points of the target (no shields)
    pub defender_hp: u32,

    /// Attacker firepower
    pub firepower: u32,

    /// Attacker base crit chance (0-100)
    pub crit_chance: u32,

    /// Matchup between attacker and target
    pub modifier: Modifier,

    /// Maximum hits per run before the run counts as timed out
    pub max_hits_per_run: u32,

    /// Emit one `tracing` event per finished run
    pub log_each_run: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: SIM_DEFAULT_RUNS,
            seed: None,
            defender_hp: SIM_DEFAULT_DEFENDER_HP,
            firepower: SIM_DEFAULT_FIREPOWER,
            crit_chance: SIM_DEFAULT_CRIT_CHANCE,
            modifier: Modifier::Balanced,
            max_hits_per_run: SIM_MAX_HITS_PER_RUN,
            log_each_run: false,
        }
    }
}

impl SimConfig {
    /// Attacker with a strong matchup against the target.
    pub fn strong_matchup(firepower: u32, crit_chance: u32) -> Self {
        Self {
            firepower,
            crit_chance,
            modifier: Modifier::Strong,
            ..Default::default()
        }
    }

    /// Quick reproducible config for tests.
    pub fn seeded(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_run_logging_is_opt_in() {
        assert!(!SimConfig::default().log_each_run);
        assert!(!SimConfig::seeded(10, 1).log_each_run);
        assert!(!SimConfig::strong_matchup(10, 35).log_each_run);
    }

    #[test]
    fn test_strong_matchup_keeps_defaults() {
        let config = SimConfig::strong_matchup(12, 50);
        assert_eq!(config.modifier, Modifier::Strong);
        assert_eq!(config.num_runs, SIM_DEFAULT_RUNS);
        assert_eq!(config.defender_hp, SIM_DEFAULT_DEFENDER_HP);
    }
}
