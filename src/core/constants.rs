// Crit resolution
pub const CRIT_ROLL_RANGE: f64 = 100.0;
pub const CRIT_DAMAGE_MULTIPLIER: u32 = 2;
pub const MAX_CRIT_CHANCE: u32 = 100;
pub const STRONG_CRIT_BONUS: u32 = 40;

// Preset stat blocks: (hp, shields, firepower, crit_chance)
pub const SCOUT_STATS: (u32, u32, u32, u32) = (8, 2, 4, 0);
pub const DESTROYER_STATS: (u32, u32, u32, u32) = (12, 6, 6, 0);
pub const SNIPER_STATS: (u32, u32, u32, u32) = (5, 0, 10, 0);
pub const DREADNOUGHT_STATS: (u32, u32, u32, u32) = (30, 10, 8, 0);
pub const PLANETARY_TURRET_STATS: (u32, u32, u32, u32) = (25, 0, 8, 0);

// Persistence
pub const DEFAULT_SAVE_FILE: &str = "data.json";

// Console
pub const NAME_COLUMN_WIDTH: usize = 24;
pub const HULL_COLUMN_WIDTH: usize = 10;
pub const INVALID_INPUT_MARKER: &str = "[invalid] ";

// Balance simulator
pub const SIM_DEFAULT_RUNS: u32 = 10_000;
pub const SIM_DEFAULT_DEFENDER_HP: u32 = 55;
pub const SIM_DEFAULT_FIREPOWER: u32 = 10;
pub const SIM_DEFAULT_CRIT_CHANCE: u32 = 35;
pub const SIM_MAX_HITS_PER_RUN: u32 = 10_000;
