//! Plain league records shared by the repositories and the standings engine.

use serde::{Deserialize, Serialize};
use time::Date;

/// Date substituted when a season has no start date or a score's round is missing.
pub const EPOCH: Date = time::macros::date!(1970 - 01 - 01);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub name: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub handicap_index: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub season_id: String,
    pub week: i32,
    pub date: Date,
    pub course: Option<String>,
    pub tee_time: Option<String>,
    pub expected_players: Option<i32>,
    pub confirmation_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: String,
    pub round_id: String,
    pub player_id: String,
    pub gross: i32,
    pub net: Option<i32>,
}

/// A season score joined with its player's name and its round's week/date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonScoreRow {
    pub score_id: String,
    pub round_id: String,
    pub round_week: i32,
    pub round_date: Date,
    pub player_id: String,
    pub player_name: String,
    pub gross: i32,
    pub net: Option<i32>,
}

/// A round's score joined with the player's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScoreRow {
    pub score_id: String,
    pub round_id: String,
    pub player_id: String,
    pub player_name: String,
    pub gross: i32,
    pub net: Option<i32>,
}

/// One of a player's scores with the round it was played in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScoreRow {
    pub score_id: String,
    pub round_id: String,
    pub round_week: i32,
    pub round_date: Date,
    pub gross: i32,
    pub net: Option<i32>,
}

/// A validated gross/net write for one player in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub player_id: String,
    pub gross: i32,
    pub net: Option<i32>,
}

/// Name shown for a score whose player row is missing.
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown";
