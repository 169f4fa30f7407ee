//! DicePro game core: library with models, game logic and persistence.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    apply_roll, apply_settings, commit_roll, compare_players, preview_roll, reconcile_roster,
    recompute_ranks, restore_session, roll_once, save_session, HoldConfig, HoldGesture,
    HoldInput, HoldPhase, HoldStep, RngRollSource, RollOutcome, RollSource, ScriptedRolls,
};
pub use models::{GameError, GameSession, GameState, PlayerRecord, PlayerSlot, Settings};
pub use storage::{FileStore, GameStateStore, KeyValueStore, MemoryStore, SettingsStore, StorageError};
