//! GameState (the persisted roster) and GameSession (roster + settings + selection).

use crate::logic::recompute_ranks;
use crate::models::player::{PlayerRecord, PlayerSlot};
use crate::models::settings::Settings;
use serde::{Deserialize, Serialize};

/// Errors that can occur during game operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// A player index outside the current roster was used.
    PlayerIndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::PlayerIndexOutOfRange { index, len } => {
                write!(f, "Player index {} out of range (roster has {} players)", index, len)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// The persisted game blob: `{"players": [...]}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<PlayerRecord>,
}

impl Default for GameState {
    /// Fresh two-player roster (P1, P2), all zero.
    fn default() -> Self {
        Self::with_players(vec![
            PlayerRecord::for_slot(PlayerSlot::P1),
            PlayerRecord::for_slot(PlayerSlot::P2),
        ])
    }
}

impl GameState {
    pub fn with_players(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    /// Index of the first player flagged active, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.players.iter().position(|p| p.is_active)
    }

    pub fn has_scores(&self) -> bool {
        self.players.iter().any(PlayerRecord::has_scores)
    }
}

/// The live game: roster, settings in force, and the player selected to roll next.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameSession {
    pub state: GameState,
    pub settings: Settings,
    selected: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameState::default(), Settings::default())
    }
}

impl GameSession {
    /// Wrap an existing roster. Selection follows the roster's active flag, or the first player.
    /// Ranks are recomputed so the session never starts with stale ranks.
    pub fn new(mut state: GameState, settings: Settings) -> Self {
        recompute_ranks(&mut state.players);
        let selected = state.active_index().unwrap_or(0);
        Self {
            state,
            settings,
            selected,
        }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.state.players
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The player who receives the next committed roll.
    pub fn active_player(&self) -> Option<&PlayerRecord> {
        self.state.players.get(self.selected)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), GameError> {
        let len = self.state.players.len();
        if index >= len {
            return Err(GameError::PlayerIndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Make the player at `index` the only active one.
    pub fn select_player(&mut self, index: usize) -> Result<(), GameError> {
        self.check_index(index)?;
        for (i, p) in self.state.players.iter_mut().enumerate() {
            p.is_active = i == index;
        }
        self.selected = index;
        Ok(())
    }

    /// Zero every player's scores. Safe to call when nothing has been scored yet.
    pub fn reset_all_scores(&mut self) {
        if !self.has_scores() {
            return;
        }
        for p in &mut self.state.players {
            p.clear_scores();
        }
        recompute_ranks(&mut self.state.players);
        log::info!("Reset scores for {} players", self.state.players.len());
    }

    /// Whether any player has scored or rolled; gates the reset action.
    pub fn has_scores(&self) -> bool {
        self.state.has_scores()
    }

    /// Replace the roster wholesale and point the selection at `selected`.
    pub(crate) fn replace_players(&mut self, players: Vec<PlayerRecord>, selected: usize) {
        self.state.players = players;
        self.selected = selected;
    }
}
