//! Engine settings, persisted as JSON in ~/.questline/settings.json.

use super::constants::{BASE_MAX_HP, CRITICAL_SUCCESS_CHANCE, SETTINGS_FILE_NAME};
use crate::utils::persistence::SettingsStore;
use serde::{Deserialize, Serialize};
use std::io;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// When false a death only restores HP.
    pub penalties_enabled: bool,
    /// Probability that a completion doubles its rewards.
    pub crit_chance: f64,
    /// Max HP given to newly created players.
    pub base_max_hp: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            penalties_enabled: true,
            crit_chance: CRITICAL_SUCCESS_CHANCE,
            base_max_hp: BASE_MAX_HP,
        }
    }
}

impl EngineConfig {
    /// Loads ~/.questline/settings.json, falling back to defaults for a
    /// missing or unreadable file.
    pub fn load() -> Self {
        match SettingsStore::home() {
            Ok(store) => Self::load_from(&store),
            Err(e) => {
                warn!(error = %e, "no settings directory, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&SettingsStore::home()?)
    }

    pub fn load_from(store: &SettingsStore) -> Self {
        store
            .load_or_default::<EngineConfig>(SETTINGS_FILE_NAME)
            .sanitized()
    }

    pub fn save_to(&self, store: &SettingsStore) -> io::Result<()> {
        store.save(SETTINGS_FILE_NAME, self)
    }

    /// Clamps hand-edited values back into range.
    pub fn sanitized(mut self) -> Self {
        self.crit_chance = if self.crit_chance.is_finite() {
            self.crit_chance.clamp(0.0, 1.0)
        } else {
            CRITICAL_SUCCESS_CHANCE
        };
        self.base_max_hp = self.base_max_hp.max(1);
        self
    }

    pub fn without_penalties(mut self) -> Self {
        self.penalties_enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.penalties_enabled);
        assert_eq!(config.crit_chance, 0.10);
        assert_eq!(config.base_max_hp, 100);
    }

    #[test]
    fn test_sanitized() {
        let config = EngineConfig {
            penalties_enabled: false,
            crit_chance: 4.0,
            base_max_hp: 0,
        }
        .sanitized();
        assert_eq!(config.crit_chance, 1.0);
        assert_eq!(config.base_max_hp, 1);
        assert!(!config.penalties_enabled);

        let config = EngineConfig {
            crit_chance: f64::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.crit_chance, 0.10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"penalties_enabled": false}"#)
            .expect("partial settings should parse");
        assert!(!config.penalties_enabled);
        assert_eq!(config.base_max_hp, 100);
    }

    #[test]
    fn test_save_then_load_sanitizes() {
        let dir = std::env::temp_dir().join(format!("questline-config-{}", std::process::id()));
        let store = SettingsStore::at(&dir);

        let edited = EngineConfig {
            penalties_enabled: false,
            crit_chance: 3.5,
            base_max_hp: 0,
        };
        edited.save_to(&store).expect("save should succeed");
        assert!(store.path_for(SETTINGS_FILE_NAME).exists());

        let loaded = EngineConfig::load_from(&store);
        assert!(!loaded.penalties_enabled);
        assert_eq!(loaded.crit_chance, 1.0);
        assert_eq!(loaded.base_max_hp, 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_empty_store_is_default() {
        let store = SettingsStore::at(std::env::temp_dir().join("questline-config-missing"));
        assert_eq!(EngineConfig::load_from(&store), EngineConfig::default());
    }
}
