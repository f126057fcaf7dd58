//! The built-in sample league: a three-day Kiawah Island trip.
//!
//! Served when the store is unavailable and seeded into empty stores on
//! request.

use time::macros::date;

use crate::domain::league::{Player, Round, Score, Season};

/// A complete league snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueData {
    pub seasons: Vec<Season>,
    pub players: Vec<Player>,
    /// (season id, player id) roster links.
    pub season_players: Vec<(String, String)>,
    pub rounds: Vec<Round>,
    pub scores: Vec<Score>,
}

pub const SAMPLE_SEASON_ID: &str = "season-kiawah-2026";

fn player(id: &str, name: &str, email: Option<&str>, handicap: f64) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        email: email.map(str::to_string),
        handicap_index: Some(handicap),
    }
}

fn round(id: &str, week: i32, date: time::Date, course: &str, tee: &str, code: &str) -> Round {
    Round {
        id: id.to_string(),
        season_id: SAMPLE_SEASON_ID.to_string(),
        week,
        date,
        course: Some(course.to_string()),
        tee_time: Some(tee.to_string()),
        expected_players: Some(4),
        confirmation_code: Some(code.to_string()),
    }
}

/// Gross/net for players 01..04, one row per round.
const CARDS: [[(i32, i32); 4]; 3] = [
    [(85, 74), (91, 77), (82, 73), (97, 81)],
    [(83, 72), (89, 75), (80, 71), (95, 79)],
    [(87, 76), (90, 76), (81, 72), (99, 83)],
];

pub fn sample_league() -> LeagueData {
    let seasons = vec![Season {
        id: SAMPLE_SEASON_ID.to_string(),
        name: "Kiawah Island Golf Trip 2026".to_string(),
        start_date: Some(date!(2026 - 05 - 11)),
        end_date: Some(date!(2026 - 05 - 13)),
    }];

    let players = vec![
        player("player-01", "Nick", Some("nick@example.com"), 10.8),
        player("player-02", "Nathan", None, 13.7),
        player("player-03", "Neil", None, 8.9),
        player("player-04", "Dave", None, 15.4),
    ];

    let season_players = players
        .iter()
        .map(|p| (SAMPLE_SEASON_ID.to_string(), p.id.clone()))
        .collect();

    let rounds = vec![
        round("round-01", 1, date!(2026 - 05 - 11), "Turtle Point", "3:00 PM", "CN853709J5T8ZW"),
        round("round-02", 2, date!(2026 - 05 - 12), "The Ocean Course", "2:10 PM", "CN47TYW37D1YQK"),
        round("round-03", 3, date!(2026 - 05 - 13), "Cougar Point", "12:20 PM", "CN2B0G2FTX95Q7"),
    ];

    let mut scores = Vec::with_capacity(12);
    for (r, cards) in rounds.iter().zip(CARDS.iter()) {
        for (p, &(gross, net)) in players.iter().zip(cards.iter()) {
            scores.push(Score {
                id: format!("score-{:02}", scores.len() + 1),
                round_id: r.id.clone(),
                player_id: p.id.clone(),
                gross,
                net: Some(net),
            });
        }
    }

    LeagueData {
        seasons,
        players,
        season_players,
        rounds,
        scores,
    }
}
