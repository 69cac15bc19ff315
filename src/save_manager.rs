use crate::core::constants::DEFAULT_SAVE_FILE;
use crate::error::Result;
use crate::fleet::Fleet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Serializes a fleet as a pretty-printed flat JSON list.
///
/// Each element is either `null` (separator) or an entity record.
pub fn fleet_to_json(fleet: &Fleet) -> Result<String> {
    Ok(serde_json::to_string_pretty(fleet)?)
}

/// Parses a flat JSON list back into a fleet, rejecting records that break
/// the hp/shield/crit bounds.
pub fn fleet_from_json(json: &str) -> Result<Fleet> {
    let fleet: Fleet = serde_json::from_str(json)?;
    fleet.validate()?;
    Ok(fleet)
}

/// Manages saving and loading the fleet snapshot.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Writes the snapshot, creating parent directories as needed.
    pub fn save(&self, fleet: &Fleet) -> Result<()> {
        let json = fleet_to_json(fleet)?;

        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.save_path, json)?;
        tracing::debug!(path = %self.save_path.display(), "fleet saved");
        Ok(())
    }

    /// Loads the snapshot.
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The JSON is malformed
    /// - An entity violates its bounds
    pub fn load(&self) -> Result<Fleet> {
        let json = fs::read_to_string(&self.save_path)?;
        fleet_from_json(&json)
    }

    /// Loads the snapshot, or the starter fleet when no save exists yet.
    ///
    /// The flag is true when a save was found.
    pub fn load_or_default(&self) -> Result<(Fleet, bool)> {
        match self.load() {
            Ok(fleet) => {
                tracing::info!(path = %self.save_path.display(), "loaded saved fleet");
                Ok((fleet, true))
            }
            Err(crate::error::SkirmishError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.save_path.display(), "no save found, using starter fleet");
                Ok((Fleet::starter(), false))
            }
            Err(e) => Err(e),
        }
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

impl Default for SaveManager {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::CombatEntity;
    use crate::error::SkirmishError;

    #[test]
    fn test_json_shape_matches_flat_records() {
        let fleet = Fleet::new(vec![Some(CombatEntity::scout("S")), None]);
        let value: serde_json::Value =
            serde_json::from_str(&fleet_to_json(&fleet).unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {
                    "kind": "scout",
                    "name": "S",
                    "max_hp": 8,
                    "max_shields": 2,
                    "hp": 8,
                    "shields": 2,
                    "firepower": 4,
                    "crit_chance": 0
                },
                null
            ])
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let json = r#"[{"kind":"battlecruiser","name":"X","max_hp":1,"max_shields":0,
            "hp":1,"shields":0,"firepower":1,"crit_chance":0}]"#;
        assert!(matches!(fleet_from_json(json), Err(SkirmishError::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_broken_invariant() {
        let json = r#"[{"kind":"scout","name":"X","max_hp":5,"max_shields":0,
            "hp":9,"shields":0,"firepower":1,"crit_chance":0}]"#;
        assert!(matches!(
            fleet_from_json(json),
            Err(SkirmishError::InvalidEntity { .. })
        ));
    }

    #[test]
    fn test_missing_file_yields_starter_fleet() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path().join("missing.json"));

        let (fleet, loaded) = manager.load_or_default().unwrap();

        assert!(!loaded);
        assert_eq!(fleet, Fleet::starter());
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{not json").unwrap();

        let manager = SaveManager::new(&path);
        assert!(manager.load_or_default().is_err());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path().join("nested").join("data.json"));

        manager.save(&Fleet::starter()).unwrap();

        assert!(manager.save_exists());
        let (fleet, loaded) = manager.load_or_default().unwrap();
        assert!(loaded);
        assert_eq!(fleet, Fleet::starter());
    }

    #[test]
    fn test_default_path() {
        assert_eq!(SaveManager::default().path(), Path::new("data.json"));
    }
}
