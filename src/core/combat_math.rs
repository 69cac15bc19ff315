//! Shared combat math functions for the session loop and simulator.
//!
//! These pure functions calculate combat outcomes without side effects.
//! Both the interactive referee and the balance simulator go through them so
//! numbers always agree.

use super::constants::*;
use crate::combat::Modifier;
use rand::Rng;

/// Crit chance after the attacker/defender modifier is applied.
///
/// Strong matchups add a flat bonus, capped at 100%. Weak and balanced
/// matchups leave the attacker's chance untouched.
pub fn effective_crit_chance(base_crit_chance: u32, modifier: Modifier) -> u32 {
    match modifier {
        Modifier::Strong => base_crit_chance
            .saturating_add(STRONG_CRIT_BONUS)
            .min(MAX_CRIT_CHANCE),
        Modifier::Weak | Modifier::Balanced => base_crit_chance.min(MAX_CRIT_CHANCE),
    }
}

/// Roll for critical hit.
///
/// # Arguments
/// * `crit_chance_percent` - Chance to crit (0-100)
/// * `rng` - Random number generator
///
/// # Returns
/// true if the uniform draw in [0, 100) lands below the chance
pub fn roll_crit(crit_chance_percent: u32, rng: &mut impl Rng) -> bool {
    let roll: f64 = rng.gen_range(0.0..CRIT_ROLL_RANGE);
    roll < crit_chance_percent as f64
}

/// Damage of a single shot, saturating at `u32::MAX`.
pub fn shot_damage(firepower: u32, is_crit: bool) -> u32 {
    if is_crit {
        firepower.saturating_mul(CRIT_DAMAGE_MULTIPLIER)
    } else {
        firepower
    }
}

/// Split incoming damage between shields and hull.
///
/// # Returns
/// (shield_damage, hull_damage)
pub fn absorb_damage(damage: u32, shields: u32) -> (u32, u32) {
    let shield_damage = damage.min(shields);
    (shield_damage, damage - shield_damage)
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Check if entity is still alive.
pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}

/// Expected damage per shot for a given firepower and crit chance.
pub fn avg_damage(firepower: u32, crit_chance_percent: u32) -> f64 {
    let crit_prob = crit_chance_percent.min(MAX_CRIT_CHANCE) as f64 / 100.0;
    let base = firepower as f64;
    base * (1.0 - crit_prob) + base * CRIT_DAMAGE_MULTIPLIER as f64 * crit_prob
}
