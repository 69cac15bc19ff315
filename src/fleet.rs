//! The ordered list of fleet slots owned by a session.
//!
//! A slot is either an entity or a `None` separator between the two sides.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::{resolve_attack, AttackOutcome, CombatEntity, ModifierTable};
use crate::error::{Result, SkirmishError};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fleet {
    slots: Vec<Option<CombatEntity>>,
}

/// Result of an attack plus optional return fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub attack: AttackOutcome,
    /// `None` when return fire was not requested or the defender did not
    /// survive the first shot.
    pub return_fire: Option<AttackOutcome>,
}

impl Fleet {
    pub fn new(slots: Vec<Option<CombatEntity>>) -> Self {
        Self { slots }
    }

    /// Two fixed opposing groups split by a separator.
    pub fn starter() -> Self {
        Self::new(vec![
            Some(CombatEntity::sniper("[A] Sniper #1")),
            Some(CombatEntity::dreadnought("[A] Dreadnought #1")),
            Some(CombatEntity::scout("[A] Scout #3")),
            Some(CombatEntity::scout("[A] Scout #4")),
            Some(CombatEntity::destroyer("[A] Destroyer #2")),
            None,
            Some(CombatEntity::scout("[D] Scout #1")),
            Some(CombatEntity::scout("[D] Scout #2")),
            Some(CombatEntity::destroyer("[D] Destroyer #1")),
            Some(CombatEntity::planetary_turret("[D] Planetary Turret")),
        ])
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<CombatEntity>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&CombatEntity> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CombatEntity> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Entities in slot order, skipping separators.
    pub fn entities(&self) -> impl Iterator<Item = &CombatEntity> {
        self.slots.iter().flatten()
    }

    pub fn validate(&self) -> Result<()> {
        self.entities().try_for_each(CombatEntity::validate)
    }

    /// `attacker_idx` fires at `defender_idx`; if `return_fire` is set and the
    /// defender is still alive it fires back.
    ///
    /// An entity may target itself; it then fires with its pre-attack stats.
    pub fn engage(
        &mut self,
        attacker_idx: usize,
        defender_idx: usize,
        return_fire: bool,
        table: &ModifierTable,
        rng: &mut impl Rng,
    ) -> Result<Exchange> {
        let attacker = self
            .get(attacker_idx)
            .cloned()
            .ok_or(SkirmishError::InvalidIndex(attacker_idx))?;
        let defender = self
            .get_mut(defender_idx)
            .ok_or(SkirmishError::InvalidIndex(defender_idx))?;

        let attack = resolve_attack(&attacker, defender, table, rng);

        let return_fire = if return_fire && defender.is_alive() {
            let retaliator = defender.clone();
            let target = self
                .get_mut(attacker_idx)
                .ok_or(SkirmishError::InvalidIndex(attacker_idx))?;
            Some(resolve_attack(&retaliator, target, table, rng))
        } else {
            None
        };

        Ok(Exchange {
            attack,
            return_fire,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::EntityKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    #[test]
    fn test_starter_fleet_layout() {
        let fleet = Fleet::starter();
        assert_eq!(fleet.len(), 10);
        assert!(fleet.slots()[5].is_none());
        assert_eq!(fleet.entities().count(), 9);
        assert_eq!(fleet.get(0).map(|e| e.kind), Some(EntityKind::Sniper));
        assert_eq!(
            fleet.get(9).map(|e| e.name.as_str()),
            Some("[D] Planetary Turret")
        );
        assert!(fleet.validate().is_ok());
    }

    #[test]
    fn test_get_separator_is_none() {
        let fleet = Fleet::starter();
        assert!(fleet.get(5).is_none());
        assert!(fleet.get(42).is_none());
    }

    #[test]
    fn test_engage_rejects_separator_and_out_of_range() {
        let table = ModifierTable::standard();
        let mut fleet = Fleet::starter();
        assert!(matches!(
            fleet.engage(5, 6, false, &table, &mut rng()),
            Err(SkirmishError::InvalidIndex(5))
        ));
        assert!(matches!(
            fleet.engage(0, 10, false, &table, &mut rng()),
            Err(SkirmishError::InvalidIndex(10))
        ));
        assert_eq!(fleet, Fleet::starter());
    }

    #[test]
    fn test_engage_with_return_fire() {
        let table = ModifierTable::standard();
        let mut fleet = Fleet::new(vec![
            Some(CombatEntity::destroyer("Attacker")),
            Some(CombatEntity::destroyer("Defender")),
        ]);

        let exchange = fleet.engage(0, 1, true, &table, &mut rng()).unwrap();

        assert_eq!(exchange.attack.damage, 6);
        let reply = exchange.return_fire.expect("defender survives and fires back");
        assert_eq!(reply.attacker, "Defender");
        assert_eq!(reply.defender, "Attacker");
        assert_eq!(fleet.get(0).unwrap().shields, 0);
        assert_eq!(fleet.get(1).unwrap().shields, 0);
    }

    #[test]
    fn test_engage_without_return_fire_leaves_attacker_untouched() {
        let table = ModifierTable::standard();
        let mut fleet = Fleet::new(vec![
            Some(CombatEntity::destroyer("Attacker")),
            Some(CombatEntity::destroyer("Defender")),
        ]);

        let exchange = fleet.engage(0, 1, false, &table, &mut rng()).unwrap();

        assert!(exchange.return_fire.is_none());
        assert_eq!(fleet.get(0), Some(&CombatEntity::destroyer("Attacker")));
    }

    #[test]
    fn test_destroyed_defender_does_not_fire_back() {
        let table = ModifierTable::default();
        let mut fleet = Fleet::new(vec![
            Some(CombatEntity::sniper("Sniper")),
            Some(CombatEntity::new(EntityKind::Scout, "Scout", 3, 0, 4, 0)),
        ]);

        let exchange = fleet.engage(0, 1, true, &table, &mut rng()).unwrap();

        assert!(exchange.attack.destroyed);
        assert!(exchange.return_fire.is_none());
        assert_eq!(fleet.get(0).unwrap().hp, 5);
    }

    #[test]
    fn test_self_target_uses_pre_attack_stats() {
        let table = ModifierTable::default();
        let mut fleet = Fleet::new(vec![Some(CombatEntity::destroyer("Confused"))]);

        let exchange = fleet.engage(0, 0, false, &table, &mut rng()).unwrap();

        assert_eq!(exchange.attack.damage, 6);
        let me = fleet.get(0).unwrap();
        assert_eq!((me.shields, me.hp), (0, 12));
    }
}
