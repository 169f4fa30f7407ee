//! Session operations: applying rolls and settings, the roll transaction, save/restore.

use crate::logic::roll::{roll_once, RollOutcome, RollSource};
use crate::logic::{recompute_ranks, reconcile_roster};
use crate::models::{GameError, GameSession, Settings};
use crate::storage::{GameStateStore, KeyValueStore, SettingsStore};

/// Credit `sum` to the player at `index` and make them the only active player, then rerank.
///
/// Out-of-range `index` returns an error and leaves the session unchanged.
pub fn apply_roll(session: &mut GameSession, sum: u32, index: usize) -> Result<(), GameError> {
    session.select_player(index)?;
    let players = &mut session.state.players;
    players[index].record_roll(sum);
    recompute_ranks(players);
    log::debug!(
        "{} rolled {} (total {}, rank {})",
        players[index].name,
        sum,
        players[index].total_score,
        players[index].rank
    );
    Ok(())
}

/// Take new settings into use: rebuild the roster for them and select the first player.
pub fn apply_settings(session: &mut GameSession, settings: Settings) {
    let players = reconcile_roster(session.players(), &settings);
    session.replace_players(players, 0);
    session.settings = settings;
    log::info!(
        "Applied settings: {} players, {} dice",
        session.players().len(),
        settings.dice_count()
    );
}

/// Visual-only roll for hold-to-roll ticks. Player state is not touched.
pub fn preview_roll<R: RollSource + ?Sized>(session: &GameSession, source: &mut R) -> RollOutcome {
    roll_once(source, session.settings.is_two_dices_enabled)
}

/// The roll transaction: draw, sum, apply to the selected player, rerank, persist.
///
/// The index is checked before drawing so a failed commit consumes no randomness and
/// writes nothing.
pub fn commit_roll<R, S>(
    session: &mut GameSession,
    source: &mut R,
    store: &mut S,
) -> Result<RollOutcome, GameError>
where
    R: RollSource + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let index = session.selected_index();
    session.check_index(index)?;
    let outcome = roll_once(source, session.settings.is_two_dices_enabled);
    apply_roll(session, outcome.sum, index)?;
    GameStateStore::save(store, &session.state);
    Ok(outcome)
}

/// Launch path: load settings and roster, fit the roster to the settings, and restore the
/// selection to the previously active player.
pub fn restore_session<S: KeyValueStore + ?Sized>(store: &S) -> GameSession {
    let settings = SettingsStore::load(store);
    let mut state = GameStateStore::load(store);
    let active_name = state
        .active_index()
        .map(|i| state.players[i].name.clone());

    state.players = reconcile_roster(&state.players, &settings);
    let mut session = GameSession::new(state, settings);
    let selected = active_name
        .and_then(|name| session.players().iter().position(|p| p.name == name))
        .unwrap_or(0);
    // selected comes from the roster itself
    let _ = session.select_player(selected);
    session
}

/// Persist both blobs.
pub fn save_session<S: KeyValueStore + ?Sized>(session: &GameSession, store: &mut S) {
    SettingsStore::save(store, &session.settings);
    GameStateStore::save(store, &session.state);
}
