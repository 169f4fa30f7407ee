//! Settings persistence.

use crate::models::Settings;
use crate::storage::backend::{KeyValueStore, StorageError};

/// Saves and loads `Settings` as a JSON blob under a fixed key.
pub struct SettingsStore;

impl SettingsStore {
    pub const KEY: &'static str = "userSettings";

    /// Persist settings. A failed write is logged and otherwise ignored.
    pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, settings: &Settings) {
        if let Err(e) = Self::try_save(store, settings) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn try_save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        settings: &Settings,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(settings).map_err(StorageError::Encode)?;
        store.set(Self::KEY, json)
    }

    /// Saved settings, or defaults when nothing is stored or the blob can't be read.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Settings {
        match Self::try_load(store) {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Settings::default()
            }
        }
    }

    pub fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Settings>, StorageError> {
        let Some(json) = store.get(Self::KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(StorageError::Decode)
    }
}
