//! Joins of raw scores with their players and rounds.

use std::collections::HashMap;

use crate::domain::league::{
    PlayerScoreRow, Round, RoundScoreRow, Score, SeasonScoreRow, EPOCH, UNKNOWN_PLAYER_NAME,
};
use crate::repos::ordering::{sort_recent_scores, sort_season_scores};

fn name_of<'a>(names: &'a HashMap<String, String>, player_id: &str) -> &'a str {
    names
        .get(player_id)
        .map(String::as_str)
        .unwrap_or(UNKNOWN_PLAYER_NAME)
}

/// Scores of the season's `rounds` joined and ordered. Scores of other rounds are dropped.
pub fn season_score_rows(
    rounds: &[Round],
    scores: Vec<Score>,
    names: &HashMap<String, String>,
) -> Vec<SeasonScoreRow> {
    let by_id: HashMap<&str, &Round> = rounds.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut rows: Vec<SeasonScoreRow> = scores
        .into_iter()
        .filter_map(|s| {
            let round = by_id.get(s.round_id.as_str())?;
            Some(SeasonScoreRow {
                player_name: name_of(names, &s.player_id).to_string(),
                round_week: round.week,
                round_date: round.date,
                score_id: s.id,
                round_id: s.round_id,
                player_id: s.player_id,
                gross: s.gross,
                net: s.net,
            })
        })
        .collect();
    sort_season_scores(&mut rows);
    rows
}

/// One round's scores joined with player names, by score id.
pub fn round_score_rows(scores: Vec<Score>, names: &HashMap<String, String>) -> Vec<RoundScoreRow> {
    let mut rows: Vec<RoundScoreRow> = scores
        .into_iter()
        .map(|s| RoundScoreRow {
            player_name: name_of(names, &s.player_id).to_string(),
            score_id: s.id,
            round_id: s.round_id,
            player_id: s.player_id,
            gross: s.gross,
            net: s.net,
        })
        .collect();
    rows.sort_by(|a, b| a.score_id.cmp(&b.score_id));
    rows
}

/// A player's scores joined with their rounds, newest first, truncated to `limit`.
/// A score whose round is missing reports week 0 and the epoch date.
pub fn recent_score_rows(
    scores: Vec<Score>,
    rounds: &[Round],
    limit: usize,
) -> Vec<PlayerScoreRow> {
    let by_id: HashMap<&str, &Round> = rounds.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut rows: Vec<PlayerScoreRow> = scores
        .into_iter()
        .map(|s| {
            let (week, date) = by_id
                .get(s.round_id.as_str())
                .map_or((0, EPOCH), |r| (r.week, r.date));
            PlayerScoreRow {
                score_id: s.id,
                round_id: s.round_id,
                round_week: week,
                round_date: date,
                gross: s.gross,
                net: s.net,
            }
        })
        .collect();
    sort_recent_scores(&mut rows);
    rows.truncate(limit);
    rows
}
