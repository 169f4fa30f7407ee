//! PlayerRecord and PlayerSlot data structures.

use serde::{Deserialize, Serialize};

/// One of the four fixed player slots. P1 and P2 always exist; P3 and P4 are toggled by settings.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlayerSlot {
    P1,
    P2,
    P3,
    P4,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 4] = [PlayerSlot::P1, PlayerSlot::P2, PlayerSlot::P3, PlayerSlot::P4];

    /// Display name used in the roster ("P1".."P4").
    pub fn name(self) -> &'static str {
        match self {
            PlayerSlot::P1 => "P1",
            PlayerSlot::P2 => "P2",
            PlayerSlot::P3 => "P3",
            PlayerSlot::P4 => "P4",
        }
    }

    /// Zero-based slot number.
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::P1 => 0,
            PlayerSlot::P2 => 1,
            PlayerSlot::P3 => 2,
            PlayerSlot::P4 => 3,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// A player in the current game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    /// Sum of every roll attributed to this player.
    pub total_score: u32,
    /// Result of the most recent roll (0 before the first one).
    pub current_score: u32,
    pub attempts: u32,
    /// 1 = best. Only ever written by rank recomputation.
    pub rank: u32,
    /// Selected to receive the next roll.
    pub is_active: bool,
}

impl PlayerRecord {
    /// Create a new player with the given name. Other fields start at zero/false.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            current_score: 0,
            attempts: 0,
            rank: 0,
            is_active: false,
        }
    }

    /// Fresh zero-state record for a slot.
    pub fn for_slot(slot: PlayerSlot) -> Self {
        Self::new(slot.name())
    }

    /// Record a roll result for this player.
    pub fn record_roll(&mut self, sum: u32) {
        self.current_score = sum;
        self.total_score += sum;
        self.attempts += 1;
    }

    /// Zero the score fields. Name and active flag are kept.
    pub fn clear_scores(&mut self) {
        self.total_score = 0;
        self.current_score = 0;
        self.attempts = 0;
        self.rank = 0;
    }

    pub fn has_scores(&self) -> bool {
        self.total_score > 0 || self.attempts > 0
    }
}
