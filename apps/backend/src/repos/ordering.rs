//! Result ordering shared by every repository implementation.

use std::cmp::Reverse;

use unicode_normalization::UnicodeNormalization;

use crate::domain::league::{Player, PlayerScoreRow, Round, Season, SeasonScoreRow, EPOCH};

/// Case-insensitive collation key for player names.
pub fn name_key(name: &str) -> String {
    name.nfkc().collect::<String>().to_lowercase()
}

/// Name ascending by collation key, then raw name, then id.
pub fn sort_players(players: &mut [Player]) {
    players.sort_by_cached_key(|p| (name_key(&p.name), p.name.clone(), p.id.clone()));
}

/// Date ascending, then week, then id.
pub fn sort_rounds(rounds: &mut [Round]) {
    rounds.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.week.cmp(&b.week))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Latest season by start date; a missing start date counts as the epoch.
/// Equal start dates resolve to the lowest id.
pub fn pick_latest(seasons: Vec<Season>) -> Option<Season> {
    seasons
        .into_iter()
        .min_by(|a, b| {
            let a_start = a.start_date.unwrap_or(EPOCH);
            let b_start = b.start_date.unwrap_or(EPOCH);
            b_start.cmp(&a_start).then_with(|| a.id.cmp(&b.id))
        })
}

/// Round chronology (date, week, round id), then score id.
pub fn sort_season_scores(rows: &mut [SeasonScoreRow]) {
    rows.sort_by(|a, b| {
        a.round_date
            .cmp(&b.round_date)
            .then(a.round_week.cmp(&b.round_week))
            .then_with(|| a.round_id.cmp(&b.round_id))
            .then_with(|| a.score_id.cmp(&b.score_id))
    });
}

/// Newest round first, then score id.
pub fn sort_recent_scores(rows: &mut [PlayerScoreRow]) {
    rows.sort_by(|a, b| {
        (Reverse(a.round_date), Reverse(a.round_week))
            .cmp(&(Reverse(b.round_date), Reverse(b.round_week)))
            .then_with(|| a.score_id.cmp(&b.score_id))
    });
}
