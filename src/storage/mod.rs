//! Persistence: key-value backends and the settings / game state stores on top of them.

mod backend;
mod game_store;
mod settings_store;

pub use backend::{FileStore, KeyValueStore, MemoryStore, StorageError, DATA_DIR_ENV};
pub use game_store::GameStateStore;
pub use settings_store::SettingsStore;
