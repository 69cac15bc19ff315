use super::modifiers::{Modifier, ModifierTable};
use super::types::CombatEntity;
use crate::core::combat_math::{
    absorb_damage, apply_damage, effective_crit_chance, roll_crit, shot_damage,
};
use rand::Rng;

/// What happened during one attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: String,
    pub defender: String,
    pub modifier: Modifier,
    /// Crit chance after the modifier was applied.
    pub crit_chance: u32,
    pub is_crit: bool,
    /// Total damage dealt (after crit multiplier if applicable).
    pub damage: u32,
    pub shield_damage: u32,
    pub hull_damage: u32,
    /// The defender's hp reached 0 during this attack.
    pub destroyed: bool,
}

/// Resolves a single attack, mutating only the defender.
///
/// Nothing stops a destroyed attacker from firing or a destroyed defender
/// from being hit; callers that care must check `is_alive` first.
pub fn resolve_attack(
    attacker: &CombatEntity,
    defender: &mut CombatEntity,
    table: &ModifierTable,
    rng: &mut impl Rng,
) -> AttackOutcome {
    let modifier = table.lookup(attacker.kind, defender.kind);
    let crit_chance = effective_crit_chance(attacker.crit_chance, modifier);
    let is_crit = roll_crit(crit_chance, rng);
    let damage = shot_damage(attacker.firepower, is_crit);

    let was_alive = defender.is_alive();
    let (shield_damage, hull_damage) = absorb_damage(damage, defender.shields);
    defender.shields -= shield_damage;
    defender.hp = apply_damage(defender.hp, hull_damage);
    let destroyed = was_alive && defender.is_destroyed();

    if destroyed {
        tracing::debug!(defender = %defender.name, "entity destroyed");
    }

    AttackOutcome {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        modifier,
        crit_chance,
        is_crit,
        damage,
        shield_damage,
        hull_damage,
        destroyed,
    }
}
