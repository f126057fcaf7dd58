//! Round-over-round leaderboard movement.
//!
//! The reference leaderboard is built from scores of rounds up to and
//! including the second-to-last round by date.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::league::{Player, Round, SeasonScoreRow};
use crate::domain::standings::{leaderboard, rank_positions, StandingRow};

/// Marker rendered for an unchanged rank.
pub const NO_CHANGE_LABEL: &str = "—";
pub const NEW_LABEL: &str = "NEW";

/// Signed rank change (`previous - current`; positive means moved up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// No previous rank to compare against.
    New,
    Delta(i32),
}

impl Movement {
    pub fn value(self) -> Option<i32> {
        match self {
            Movement::New => None,
            Movement::Delta(d) => Some(d),
        }
    }

    pub fn label(self) -> String {
        match self {
            Movement::New => NEW_LABEL.to_string(),
            Movement::Delta(0) => NO_CHANGE_LABEL.to_string(),
            Movement::Delta(d) if d > 0 => format!("+{d}"),
            Movement::Delta(d) => d.to_string(),
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for Movement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Some(d) => serializer.serialize_some(&d),
            None => serializer.serialize_none(),
        }
    }
}

/// Rounds sorted by date ascending. Stable, so same-day rounds keep input order.
pub fn chronological(rounds: &[Round]) -> Vec<&Round> {
    let mut sorted: Vec<&Round> = rounds.iter().collect();
    sorted.sort_by_key(|r| r.date);
    sorted
}

/// The second-to-last round by date, with its chronological index.
/// `None` when fewer than two rounds exist.
pub fn previous_cutoff(rounds: &[Round]) -> Option<(usize, &Round)> {
    let sorted = chronological(rounds);
    if sorted.len() < 2 {
        return None;
    }
    let idx = sorted.len() - 2;
    Some((idx, sorted[idx]))
}

/// Leaderboard using only scores from rounds at or before the cutoff round's
/// chronological position. `None` when there is no cutoff.
pub fn previous_leaderboard(
    players: &[Player],
    rounds: &[Round],
    scores: &[SeasonScoreRow],
) -> Option<Vec<StandingRow>> {
    let (cutoff_idx, _) = previous_cutoff(rounds)?;

    let position: HashMap<&str, usize> = chronological(rounds)
        .into_iter()
        .enumerate()
        .map(|(idx, r)| (r.id.as_str(), idx))
        .collect();

    let restricted: Vec<SeasonScoreRow> = scores
        .iter()
        .filter(|s| {
            position
                .get(s.round_id.as_str())
                .is_some_and(|&idx| idx <= cutoff_idx)
        })
        .cloned()
        .collect();

    Some(leaderboard(players, &restricted))
}

/// Movement for every row of the current ranked leaderboard, keyed by player id.
pub fn compute_movements(
    players: &[Player],
    rounds: &[Round],
    scores: &[SeasonScoreRow],
    current: &[StandingRow],
) -> HashMap<String, Movement> {
    let previous = previous_leaderboard(players, rounds, scores).unwrap_or_default();
    let previous_rank = rank_positions(&previous);

    current
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let current_rank = idx as i32 + 1;
            let movement = match previous_rank.get(row.player_id.as_str()) {
                Some(&prev) => Movement::Delta(prev as i32 - current_rank),
                None => Movement::New,
            };
            (row.player_id.clone(), movement)
        })
        .collect()
}
