//! Game state persistence.

use crate::models::GameState;
use crate::storage::backend::{KeyValueStore, StorageError};

/// Saves, loads and clears the `{"players": [...]}` blob under a fixed key.
pub struct GameStateStore;

impl GameStateStore {
    pub const KEY: &'static str = "gameData";

    /// Persist the roster. A failed write is logged and otherwise ignored.
    pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, state: &GameState) {
        if let Err(e) = Self::try_save(store, state) {
            log::warn!("Failed to save game state: {}", e);
        }
    }

    pub fn try_save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        state: &GameState,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(state).map_err(StorageError::Encode)?;
        store.set(Self::KEY, json)
    }

    /// Saved roster, or a fresh P1/P2 roster when nothing is stored or the blob can't be read.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> GameState {
        match Self::try_load(store) {
            Ok(Some(state)) => state,
            Ok(None) => GameState::default(),
            Err(e) => {
                log::warn!("Starting a new game: {}", e);
                GameState::default()
            }
        }
    }

    pub fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<GameState>, StorageError> {
        let Some(json) = store.get(Self::KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(StorageError::Decode)
    }

    pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) {
        if let Err(e) = store.remove(Self::KEY) {
            log::warn!("Failed to clear game state: {}", e);
        }
    }
}
