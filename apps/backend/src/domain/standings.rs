//! Season standings: per-player totals and the ranked leaderboard.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::domain::league::{Player, SeasonScoreRow};

/// A player's season-aggregate totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub player_id: String,
    pub player_name: String,
    pub rounds_played: u32,
    pub total_gross: i32,
    /// `None` until at least one net score is recorded.
    pub total_net: Option<i32>,
}

#[derive(Default)]
struct Totals {
    rounds: u32,
    gross_sum: i32,
    net_sum: i32,
    net_count: u32,
}

/// Aggregate `scores` into one row per roster player, in roster order.
///
/// Every roster player gets a row, including players with no scores.
/// Scores for players outside the roster are ignored.
pub fn compute_standings(players: &[Player], scores: &[SeasonScoreRow]) -> Vec<StandingRow> {
    let mut totals: HashMap<&str, Totals> = players
        .iter()
        .map(|p| (p.id.as_str(), Totals::default()))
        .collect();

    for score in scores {
        let Some(current) = totals.get_mut(score.player_id.as_str()) else {
            continue;
        };
        current.rounds += 1;
        current.gross_sum += score.gross;
        if let Some(net) = score.net {
            current.net_sum += net;
            current.net_count += 1;
        }
    }

    players
        .iter()
        .map(|p| {
            let t = totals.remove(p.id.as_str()).unwrap_or_default();
            StandingRow {
                player_id: p.id.clone(),
                player_name: p.name.clone(),
                rounds_played: t.rounds,
                total_gross: t.gross_sum,
                total_net: (t.net_count > 0).then_some(t.net_sum),
            }
        })
        .collect()
}

/// Leaderboard order: total net ascending with a missing net sorting last,
/// then total gross ascending.
pub fn compare_standings(a: &StandingRow, b: &StandingRow) -> Ordering {
    match (a.total_net, b.total_net) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.total_gross.cmp(&b.total_gross))
}

/// Sort rows into leaderboard order. Stable: equal rows keep input order.
/// A row's rank is its 1-based position in the result.
pub fn rank(mut rows: Vec<StandingRow>) -> Vec<StandingRow> {
    rows.sort_by(compare_standings);
    rows
}

/// Rank of each player in an already ranked leaderboard.
pub fn rank_positions(ranked: &[StandingRow]) -> HashMap<&str, u32> {
    ranked
        .iter()
        .enumerate()
        .map(|(idx, row)| (row.player_id.as_str(), idx as u32 + 1))
        .collect()
}

/// Convenience: aggregate then rank.
pub fn leaderboard(players: &[Player], scores: &[SeasonScoreRow]) -> Vec<StandingRow> {
    rank(compute_standings(players, scores))
}
