//! Roster reconciliation: add or drop the optional P3/P4 slots to match settings.

use crate::logic::recompute_ranks;
use crate::models::{PlayerRecord, PlayerSlot, Settings};

/// Build the roster that `settings` calls for from `current`.
///
/// 1. P1 and P2 are kept untouched (a fresh record is created only if missing).
/// 2. P3 / P4, when enabled, keep their existing record if the roster has one; otherwise a
///    zero-state record is appended. When disabled they are dropped and their scores discarded.
/// 3. Ranks are recomputed and P1 becomes the active player.
pub fn reconcile_roster(current: &[PlayerRecord], settings: &Settings) -> Vec<PlayerRecord> {
    let wanted = [
        (PlayerSlot::P1, true),
        (PlayerSlot::P2, true),
        (PlayerSlot::P3, settings.is_player3_enabled),
        (PlayerSlot::P4, settings.is_player4_enabled),
    ];

    let mut players: Vec<PlayerRecord> = wanted
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(slot, _)| {
            find_slot(current, slot)
                .cloned()
                .unwrap_or_else(|| PlayerRecord::for_slot(slot))
        })
        .collect();

    recompute_ranks(&mut players);
    for (i, p) in players.iter_mut().enumerate() {
        p.is_active = i == 0;
    }

    log::debug!(
        "Reconciled roster: {} -> {} players",
        current.len(),
        players.len()
    );
    players
}

/// Existing record for a slot. P1/P2 are matched by position, P3/P4 by name so that
/// P4 survives while P3 is disabled.
fn find_slot(current: &[PlayerRecord], slot: PlayerSlot) -> Option<&PlayerRecord> {
    match slot {
        PlayerSlot::P1 | PlayerSlot::P2 => current.get(slot.index()),
        PlayerSlot::P3 | PlayerSlot::P4 => current.iter().skip(2).find(|p| p.name == slot.name()),
    }
}
