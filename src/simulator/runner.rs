//! Monte-Carlo runner built on the real damage resolver.
//!
//! Each run fires at a fresh hull-only target until it is destroyed, so the
//! numbers include the same crit and modifier rules the referee uses.

use super::config::SimConfig;
use super::report::{HitsGrid, SimReport};
use crate::combat::{resolve_attack, CombatEntity, EntityKind, ModifierTable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Outcome of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub hits: u32,
    pub crits: u32,
    pub timed_out: bool,
}

const ATTACKER_KIND: EntityKind = EntityKind::Scout;
const TARGET_KIND: EntityKind = EntityKind::Dreadnought;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let table = ModifierTable::new([((ATTACKER_KIND, TARGET_KIND), config.modifier)]);
    let attacker = CombatEntity::new(
        ATTACKER_KIND,
        "Attacker",
        1,
        0,
        config.firepower,
        config.crit_chance,
    );

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &attacker, &table, &mut rng);
        if config.log_each_run {
            tracing::info!(
                run = run_idx + 1,
                hits = run.hits,
                crits = run.crits,
                timed_out = run.timed_out,
                "run finished"
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(config, all_runs)
}

/// Fire at one fresh target until it is destroyed or the hit cap is reached.
pub fn simulate_single_run(
    config: &SimConfig,
    attacker: &CombatEntity,
    table: &ModifierTable,
    rng: &mut impl Rng,
) -> RunStats {
    let mut target = CombatEntity::new(TARGET_KIND, "Target", config.defender_hp, 0, 0, 0);
    let mut stats = RunStats {
        hits: 0,
        crits: 0,
        timed_out: false,
    };

    while target.is_alive() {
        if stats.hits >= config.max_hits_per_run {
            stats.timed_out = true;
            break;
        }
        let outcome = resolve_attack(attacker, &mut target, table, rng);
        stats.hits += 1;
        if outcome.is_crit {
            stats.crits += 1;
        }
    }

    stats
}

/// Average hits to destroy for every firepower × crit chance combination.
pub fn run_grid(base: &SimConfig, firepowers: &[u32], crit_chances: &[u32]) -> HitsGrid {
    let cells = firepowers
        .iter()
        .map(|&firepower| {
            crit_chances
                .iter()
                .map(|&crit_chance| {
                    let config = SimConfig {
                        firepower,
                        crit_chance,
                        log_each_run: false,
                        ..base.clone()
                    };
                    run_simulation(&config).mean_hits
                })
                .collect()
        })
        .collect();

    HitsGrid {
        defender_hp: base.defender_hp,
        firepowers: firepowers.to_vec(),
        crit_chances: crit_chances.to_vec(),
        cells,
    }
}
