//! JSON response shapes. Field names are camelCase; dates are `YYYY-MM-DD`.

use serde::Serialize;

use crate::domain::league::{Player, PlayerScoreRow, Round, RoundScoreRow, Season, SeasonScoreRow};
use crate::domain::standings::StandingRow;
use crate::domain::summary::RoundProgress;
use crate::services::league::RankedStanding;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDto {
    pub id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<Season> for SeasonDto {
    fn from(s: Season) -> Self {
        Self {
            id: s.id,
            name: s.name,
            start_date: s.start_date.map(|d| d.to_string()),
            end_date: s.end_date.map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub handicap_index: Option<f64>,
}

impl From<Player> for PlayerDto {
    fn from(p: Player) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            handicap_index: p.handicap_index,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundDto {
    pub id: String,
    pub week: i32,
    pub date: String,
    pub season_id: String,
    pub course: Option<String>,
    pub tee_time: Option<String>,
    /// Expected head count for the tee time.
    pub players: Option<i32>,
    pub confirmation_number: Option<String>,
}

impl From<Round> for RoundDto {
    fn from(r: Round) -> Self {
        Self {
            id: r.id,
            week: r.week,
            date: r.date.to_string(),
            season_id: r.season_id,
            course: r.course,
            tee_time: r.tee_time,
            players: r.expected_players,
            confirmation_number: r.confirmation_code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoundRefDto {
    pub id: String,
    pub week: i32,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerRefDto {
    pub id: String,
    pub name: String,
}

/// A player's score with the round it was played in.
#[derive(Debug, Serialize)]
pub struct PlayerScoreDto {
    pub id: String,
    pub gross: i32,
    pub net: Option<i32>,
    pub round: RoundRefDto,
}

impl From<PlayerScoreRow> for PlayerScoreDto {
    fn from(s: PlayerScoreRow) -> Self {
        Self {
            id: s.score_id,
            gross: s.gross,
            net: s.net,
            round: RoundRefDto {
                id: s.round_id,
                week: s.round_week,
                date: s.round_date.to_string(),
            },
        }
    }
}

/// A round's score with the player who shot it.
#[derive(Debug, Serialize)]
pub struct RoundScoreDto {
    pub id: String,
    pub gross: i32,
    pub net: Option<i32>,
    pub player: PlayerRefDto,
}

impl From<RoundScoreRow> for RoundScoreDto {
    fn from(s: RoundScoreRow) -> Self {
        Self {
            id: s.score_id,
            gross: s.gross,
            net: s.net,
            player: PlayerRefDto {
                id: s.player_id,
                name: s.player_name,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingDto {
    pub rank: u32,
    pub player_id: String,
    pub player_name: String,
    pub rounds_played: u32,
    pub total_net: Option<i32>,
    pub total_gross: i32,
    /// `null` for players new to the leaderboard.
    pub movement: Option<i32>,
    pub movement_label: String,
}

impl From<RankedStanding> for StandingDto {
    fn from(r: RankedStanding) -> Self {
        Self {
            rank: r.rank,
            player_id: r.standing.player_id,
            player_name: r.standing.player_name,
            rounds_played: r.standing.rounds_played,
            total_net: r.standing.total_net,
            total_gross: r.standing.total_gross,
            movement: r.movement.value(),
            movement_label: r.movement.label(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundProgressDto {
    #[serde(flatten)]
    pub round: RoundDto,
    pub entered: usize,
    pub roster_size: usize,
    pub complete: bool,
}

impl From<(Round, RoundProgress)> for RoundProgressDto {
    fn from((round, progress): (Round, RoundProgress)) -> Self {
        Self {
            round: round.into(),
            entered: progress.entered,
            roster_size: progress.roster_size,
            complete: progress.complete,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderDto {
    pub player_id: String,
    pub player_name: String,
    pub rounds_played: u32,
    pub total_net: Option<i32>,
    pub total_gross: i32,
}

impl From<StandingRow> for LeaderDto {
    fn from(r: StandingRow) -> Self {
        Self {
            player_id: r.player_id,
            player_name: r.player_name,
            rounds_played: r.rounds_played,
            total_net: r.total_net,
            total_gross: r.total_gross,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowestRoundDto {
    pub score_id: String,
    pub round_id: String,
    pub week: i32,
    pub date: String,
    pub player_id: String,
    pub player_name: String,
    pub gross: i32,
    pub net: Option<i32>,
}

impl From<SeasonScoreRow> for LowestRoundDto {
    fn from(s: SeasonScoreRow) -> Self {
        Self {
            score_id: s.score_id,
            round_id: s.round_id,
            week: s.round_week,
            date: s.round_date.to_string(),
            player_id: s.player_id,
            player_name: s.player_name,
            gross: s.gross,
            net: s.net,
        }
    }
}

pub fn collect<S, T: From<S>>(items: Vec<S>) -> Vec<T> {
    items.into_iter().map(T::from).collect()
}
