use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::*;
use crate::error::{Result, SkirmishError};

/// Category tag used for modifier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Scout,
    Destroyer,
    Sniper,
    Dreadnought,
    PlanetaryTurret,
}

impl EntityKind {
    pub fn all() -> [EntityKind; 5] {
        [
            EntityKind::Scout,
            EntityKind::Destroyer,
            EntityKind::Sniper,
            EntityKind::Dreadnought,
            EntityKind::PlanetaryTurret,
        ]
    }

    /// Preset stat block as (hp, shields, firepower, crit_chance).
    pub fn preset_stats(self) -> (u32, u32, u32, u32) {
        match self {
            EntityKind::Scout => SCOUT_STATS,
            EntityKind::Destroyer => DESTROYER_STATS,
            EntityKind::Sniper => SNIPER_STATS,
            EntityKind::Dreadnought => DREADNOUGHT_STATS,
            EntityKind::PlanetaryTurret => PLANETARY_TURRET_STATS,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Scout => "scout",
            EntityKind::Destroyer => "destroyer",
            EntityKind::Sniper => "sniper",
            EntityKind::Dreadnought => "dreadnought",
            EntityKind::PlanetaryTurret => "planetary_turret",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A ship, turret, or structure that can attack and take damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatEntity {
    pub kind: EntityKind,
    pub name: String,
    pub max_hp: u32,
    pub max_shields: u32,
    pub hp: u32,
    pub shields: u32,
    pub firepower: u32,
    pub crit_chance: u32,
}

impl CombatEntity {
    /// Creates a fresh entity at full hp and shields.
    pub fn new(
        kind: EntityKind,
        name: impl Into<String>,
        hp: u32,
        shields: u32,
        firepower: u32,
        crit_chance: u32,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            max_hp: hp,
            max_shields: shields,
            hp,
            shields,
            firepower,
            crit_chance: crit_chance.min(MAX_CRIT_CHANCE),
        }
    }

    /// Creates an entity from its kind's preset stat block.
    pub fn preset(kind: EntityKind, name: impl Into<String>) -> Self {
        let (hp, shields, firepower, crit_chance) = kind.preset_stats();
        Self::new(kind, name, hp, shields, firepower, crit_chance)
    }

    pub fn scout(name: impl Into<String>) -> Self {
        Self::preset(EntityKind::Scout, name)
    }

    pub fn destroyer(name: impl Into<String>) -> Self {
        Self::preset(EntityKind::Destroyer, name)
    }

    pub fn sniper(name: impl Into<String>) -> Self {
        Self::preset(EntityKind::Sniper, name)
    }

    pub fn dreadnought(name: impl Into<String>) -> Self {
        Self::preset(EntityKind::Dreadnought, name)
    }

    pub fn planetary_turret(name: impl Into<String>) -> Self {
        Self::preset(EntityKind::PlanetaryTurret, name)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp == 0
    }

    pub fn is_damaged(&self) -> bool {
        self.hp < self.max_hp
    }

    /// Checks the hp, shield and crit bounds.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| {
            Err(SkirmishError::InvalidEntity {
                name: self.name.clone(),
                reason,
            })
        };
        if self.hp > self.max_hp {
            return fail(format!("hp {} exceeds max_hp {}", self.hp, self.max_hp));
        }
        if self.shields > self.max_shields {
            return fail(format!(
                "shields {} exceed max_shields {}",
                self.shields, self.max_shields
            ));
        }
        if self.crit_chance > MAX_CRIT_CHANCE {
            return fail(format!("crit_chance {} is above 100", self.crit_chance));
        }
        Ok(())
    }
}

impl fmt::Display for CombatEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CombatEntity[\"{}\", hp={}/{}]",
            self.name, self.hp, self.max_hp
        )
    }
}
