//! Hand-built league records for domain tests.

use time::macros::date;
use time::Date;

use super::league::{Player, Round, SeasonScoreRow};

pub fn player(id: &str, name: &str) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        email: None,
        handicap_index: None,
    }
}

pub fn round(id: &str, week: i32, date: Date) -> Round {
    Round {
        id: id.to_string(),
        season_id: "season-test".to_string(),
        week,
        date,
        course: None,
        tee_time: None,
        expected_players: None,
        confirmation_code: None,
    }
}

pub fn score(round: &Round, player: &Player, gross: i32, net: Option<i32>) -> SeasonScoreRow {
    SeasonScoreRow {
        score_id: format!("score-{}-{}", round.id, player.id),
        round_id: round.id.clone(),
        round_week: round.week,
        round_date: round.date,
        player_id: player.id.clone(),
        player_name: player.name.clone(),
        gross,
        net,
    }
}

/// The four-player trip roster, in name order.
pub fn trip_roster() -> Vec<Player> {
    vec![
        player("player-04", "Dave"),
        player("player-02", "Nathan"),
        player("player-03", "Neil"),
        player("player-01", "Nick"),
    ]
}

pub fn trip_rounds() -> Vec<Round> {
    vec![
        round("round-01", 1, date!(2026 - 05 - 11)),
        round("round-02", 2, date!(2026 - 05 - 12)),
        round("round-03", 3, date!(2026 - 05 - 13)),
    ]
}

/// Gross/net per round for Nick, Nathan, Neil, Dave.
const TRIP_CARDS: [[(i32, i32); 4]; 3] = [
    [(85, 74), (91, 77), (82, 73), (97, 81)],
    [(83, 72), (89, 75), (80, 71), (95, 79)],
    [(87, 76), (90, 76), (81, 72), (99, 83)],
];

/// Scores for the first `rounds` trip rounds.
pub fn trip_scores(rounds: usize) -> Vec<SeasonScoreRow> {
    let roster = trip_roster();
    let by_id = |id: &str| {
        roster
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .unwrap_or_else(|| player(id, "Unknown"))
    };
    let order = ["player-01", "player-02", "player-03", "player-04"];

    trip_rounds()
        .iter()
        .zip(TRIP_CARDS.iter())
        .take(rounds)
        .flat_map(|(r, cards)| {
            order
                .iter()
                .zip(cards.iter())
                .map(|(pid, &(gross, net))| score(r, &by_id(pid), gross, Some(net)))
                .collect::<Vec<_>>()
        })
        .collect()
}
