//! Attacker/defender effectiveness table.

use super::types::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether an attacker's kind is effective against a defender's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Strong,
    Weak,
    #[default]
    Balanced,
}

/// Immutable (attacker, defender) → modifier mapping. Missing pairs are
/// balanced.
#[derive(Debug, Clone, Default)]
pub struct ModifierTable {
    entries: HashMap<(EntityKind, EntityKind), Modifier>,
}

impl ModifierTable {
    pub fn new(entries: impl IntoIterator<Item = ((EntityKind, EntityKind), Modifier)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The standard matchup table.
    pub fn standard() -> Self {
        use EntityKind::*;
        use Modifier::*;

        Self::new([
            ((Scout, Sniper), Strong),
            ((Sniper, Scout), Weak),
            ((Scout, Dreadnought), Strong),
            ((Dreadnought, Scout), Weak),
            ((Scout, PlanetaryTurret), Strong),
            ((PlanetaryTurret, Scout), Weak),
            ((Sniper, Dreadnought), Strong),
            ((Dreadnought, Sniper), Weak),
            ((Dreadnought, Destroyer), Strong),
            ((Destroyer, Dreadnought), Weak),
        ])
    }

    pub fn lookup(&self, attacker: EntityKind, defender: EntityKind) -> Modifier {
        self.entries
            .get(&(attacker, defender))
            .copied()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_pairs() {
        let table = ModifierTable::standard();
        assert_eq!(table.len(), 10);
        assert_eq!(
            table.lookup(EntityKind::Scout, EntityKind::Sniper),
            Modifier::Strong
        );
        assert_eq!(
            table.lookup(EntityKind::Sniper, EntityKind::Scout),
            Modifier::Weak
        );
        assert_eq!(
            table.lookup(EntityKind::Dreadnought, EntityKind::Destroyer),
            Modifier::Strong
        );
    }

    #[test]
    fn test_missing_pair_is_balanced() {
        let table = ModifierTable::standard();
        assert_eq!(
            table.lookup(EntityKind::Destroyer, EntityKind::Scout),
            Modifier::Balanced
        );
        assert_eq!(
            table.lookup(EntityKind::Scout, EntityKind::Scout),
            Modifier::Balanced
        );
    }

    #[test]
    fn test_empty_table_is_all_balanced() {
        let table = ModifierTable::default();
        assert!(table.is_empty());
        for a in EntityKind::all() {
            for d in EntityKind::all() {
                assert_eq!(table.lookup(a, d), Modifier::Balanced);
            }
        }
    }

    #[test]
    fn test_table_is_ordered_pairs() {
        let table = ModifierTable::new([(
            (EntityKind::Sniper, EntityKind::Destroyer),
            Modifier::Strong,
        )]);
        assert_eq!(
            table.lookup(EntityKind::Destroyer, EntityKind::Sniper),
            Modifier::Balanced
        );
    }
}
