//! User settings toggled from the settings screen.

use serde::{Deserialize, Serialize};

/// The four independent game options. All default to off.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub is_player3_enabled: bool,
    pub is_player4_enabled: bool,
    pub is_two_dices_enabled: bool,
    /// Keep the display awake. Read by the UI only.
    pub is_screen_always_on_enabled: bool,
}

impl Settings {
    pub const DEFAULTS: Settings = Settings {
        is_player3_enabled: false,
        is_player4_enabled: false,
        is_two_dices_enabled: false,
        is_screen_always_on_enabled: false,
    };

    /// True when every option still has its default value.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULTS
    }

    /// Restore defaults (the settings screen's reset action).
    pub fn reset(&mut self) {
        *self = Self::DEFAULTS;
    }

    /// Number of players the roster should hold under these settings.
    pub fn player_count(&self) -> usize {
        2 + usize::from(self.is_player3_enabled) + usize::from(self.is_player4_enabled)
    }

    /// Number of dice drawn per roll.
    pub fn dice_count(&self) -> usize {
        if self.is_two_dices_enabled {
            2
        } else {
            1
        }
    }
}
