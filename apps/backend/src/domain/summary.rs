//! Derived views over a season: round progress, the trip summary and the
//! per-round leaderboard.

use std::collections::HashMap;

use crate::domain::league::{Round, RoundScoreRow, SeasonScoreRow};
use crate::domain::standings::StandingRow;

/// How many scores a round has against the size of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundProgress {
    pub round_id: String,
    pub entered: usize,
    pub roster_size: usize,
    pub complete: bool,
}

/// Score entry counts keyed by round id.
pub fn entries_by_round(scores: &[SeasonScoreRow]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for score in scores {
        *counts.entry(score.round_id.as_str()).or_default() += 1;
    }
    counts
}

/// Progress for each round, in the given round order.
/// A round is complete once the roster is non-empty and fully entered.
pub fn round_progress(
    rounds: &[Round],
    scores: &[SeasonScoreRow],
    roster_size: usize,
) -> Vec<RoundProgress> {
    let counts = entries_by_round(scores);
    rounds
        .iter()
        .map(|round| {
            let entered = counts.get(round.id.as_str()).copied().unwrap_or(0);
            RoundProgress {
                round_id: round.id.clone(),
                entered,
                roster_size,
                complete: roster_size > 0 && entered >= roster_size,
            }
        })
        .collect()
}

/// Rounds with fewer entries than the roster size.
pub fn rounds_remaining(rounds: &[Round], scores: &[SeasonScoreRow], roster_size: usize) -> usize {
    let counts = entries_by_round(scores);
    rounds
        .iter()
        .filter(|r| counts.get(r.id.as_str()).copied().unwrap_or(0) < roster_size)
        .count()
}

/// Lowest single round by net, or gross when net is missing.
/// The earliest such score wins a tie.
pub fn lowest_round(scores: &[SeasonScoreRow]) -> Option<&SeasonScoreRow> {
    scores.iter().reduce(|best, s| {
        if s.net.unwrap_or(s.gross) < best.net.unwrap_or(best.gross) {
            s
        } else {
            best
        }
    })
}

/// Current leader of a ranked leaderboard; `None` until someone has played.
///
/// The top row leads even when it has no rounds itself: a player with only
/// gross scores ranks behind a zero-score player on the gross tie-break.
pub fn leader(ranked: &[StandingRow]) -> Option<&StandingRow> {
    if ranked.iter().any(|row| row.rounds_played > 0) {
        ranked.first()
    } else {
        None
    }
}

/// Order a round's scores for display: by net when every score has one,
/// otherwise by gross. Stable.
pub fn round_leaderboard(mut scores: Vec<RoundScoreRow>) -> Vec<RoundScoreRow> {
    let all_net = scores.iter().all(|s| s.net.is_some());
    if all_net {
        scores.sort_by_key(|s| s.net.unwrap_or_default());
    } else {
        scores.sort_by_key(|s| s.gross);
    }
    scores
}
