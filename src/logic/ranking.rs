//! Ranking: order players by total score, then by fewer attempts.

use crate::models::PlayerRecord;
use std::cmp::Ordering;

/// Strength order between two players; `Greater` means `a` ranks above `b`.
///
/// Higher total wins. On equal totals, fewer attempts wins. Anything else is `Equal`
/// and left to roster order.
pub fn compare_players(a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
    a.total_score
        .cmp(&b.total_score)
        .then_with(|| b.attempts.cmp(&a.attempts))
}

/// Assign `rank = 1..=n` over the whole roster.
///
/// Sorts indices rather than records so duplicate (name, score, attempts) tuples still map
/// back to the right slot. `sort_by` is stable: full ties keep roster order.
pub fn recompute_ranks(players: &mut [PlayerRecord]) {
    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by(|&a, &b| compare_players(&players[b], &players[a]));
    for (position, idx) in order.into_iter().enumerate() {
        players[idx].rank = position as u32 + 1;
    }
}
