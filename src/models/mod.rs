//! Data structures for the dice game: players, settings, game state.

mod game;
mod player;
mod settings;

pub use game::{GameError, GameSession, GameState};
pub use player::{PlayerRecord, PlayerSlot};
pub use settings::Settings;
