//! League service: composes repository reads with the standings, movement
//! and summary computations, and runs the score write path.

use std::sync::Arc;

use tracing::info;

use crate::domain::league::{
    Player, PlayerScoreRow, Round, RoundScoreRow, Season, SeasonScoreRow,
};
use crate::domain::movement::{compute_movements, Movement};
use crate::domain::standings::{leaderboard, StandingRow};
use crate::domain::summary::{
    leader, lowest_round, round_leaderboard, round_progress, rounds_remaining, RoundProgress,
};
use crate::domain::validation::{validate_score_updates, ScoresPayload};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::league::{LeagueRepo, RECENT_SCORES_LIMIT};

/// A season with its roster and schedule. Empty when no season exists.
#[derive(Debug, Clone, Default)]
pub struct SeasonOverview {
    pub season: Option<Season>,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
}

/// One leaderboard line.
#[derive(Debug, Clone)]
pub struct RankedStanding {
    pub rank: u32,
    pub standing: StandingRow,
    pub movement: Movement,
}

#[derive(Debug, Clone, Default)]
pub struct StandingsView {
    pub season: Option<Season>,
    pub rows: Vec<RankedStanding>,
}

#[derive(Debug, Clone)]
pub struct PlayerDetail {
    pub player: Player,
    pub recent_scores: Vec<PlayerScoreRow>,
}

#[derive(Debug, Clone)]
pub struct RoundDetail {
    pub round: Round,
    pub scores: Vec<RoundScoreRow>,
    pub leaderboard: Vec<RoundScoreRow>,
}

#[derive(Debug, Clone, Default)]
pub struct RoundsProgressView {
    pub season: Option<Season>,
    pub rounds: Vec<(Round, RoundProgress)>,
}

#[derive(Debug, Clone, Default)]
pub struct TripSummary {
    pub season: Option<Season>,
    pub player_names: Vec<String>,
    pub rounds_scheduled: usize,
    pub leader: Option<StandingRow>,
    pub rounds_remaining: usize,
    pub lowest_round: Option<SeasonScoreRow>,
}

/// Everything the season-level views are computed from.
struct SeasonData {
    season: Season,
    players: Vec<Player>,
    rounds: Vec<Round>,
    scores: Vec<SeasonScoreRow>,
}

pub struct LeagueService {
    repo: Arc<dyn LeagueRepo>,
}

impl LeagueService {
    pub fn new(repo: Arc<dyn LeagueRepo>) -> Self {
        Self { repo }
    }

    async fn load_season(&self, season: Season) -> Result<SeasonData, DomainError> {
        let players = self.repo.players_for_season(&season.id).await?;
        let rounds = self.repo.rounds_for_season(&season.id).await?;
        let scores = self.repo.season_scores(&season.id).await?;
        Ok(SeasonData {
            season,
            players,
            rounds,
            scores,
        })
    }

    async fn load_latest(&self) -> Result<Option<SeasonData>, DomainError> {
        match self.repo.latest_season().await? {
            Some(season) => Ok(Some(self.load_season(season).await?)),
            None => Ok(None),
        }
    }

    /// Latest season with roster and rounds.
    pub async fn latest_overview(&self) -> Result<SeasonOverview, AppError> {
        let Some(season) = self.repo.latest_season().await? else {
            return Ok(SeasonOverview::default());
        };
        self.overview_of(season.id.clone(), Some(season)).await
    }

    /// Roster and rounds of a season by id. Unknown ids give empty lists.
    pub async fn season_overview(&self, season_id: &str) -> Result<SeasonOverview, AppError> {
        let season = self.repo.season_by_id(season_id).await?;
        self.overview_of(season_id.to_string(), season).await
    }

    async fn overview_of(
        &self,
        season_id: String,
        season: Option<Season>,
    ) -> Result<SeasonOverview, AppError> {
        let players = self.repo.players_for_season(&season_id).await?;
        let rounds = self.repo.rounds_for_season(&season_id).await?;
        Ok(SeasonOverview {
            season,
            players,
            rounds,
        })
    }

    /// Latest-season leaderboard with movement since the second-to-last round.
    pub async fn standings(&self) -> Result<StandingsView, AppError> {
        let Some(data) = self.load_latest().await? else {
            return Ok(StandingsView::default());
        };

        let ranked = leaderboard(&data.players, &data.scores);
        let mut movements = compute_movements(&data.players, &data.rounds, &data.scores, &ranked);

        let rows = ranked
            .into_iter()
            .enumerate()
            .map(|(idx, standing)| RankedStanding {
                rank: idx as u32 + 1,
                movement: movements
                    .remove(&standing.player_id)
                    .unwrap_or(Movement::New),
                standing,
            })
            .collect();

        Ok(StandingsView {
            season: Some(data.season),
            rows,
        })
    }

    pub async fn player_detail(&self, player_id: &str) -> Result<PlayerDetail, AppError> {
        let player = self.repo.player_by_id(player_id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
        })?;
        let recent_scores = self
            .repo
            .recent_scores_for_player(player_id, RECENT_SCORES_LIMIT)
            .await?;
        Ok(PlayerDetail {
            player,
            recent_scores,
        })
    }

    /// The round, or a `ROUND_NOT_FOUND` error.
    pub async fn require_round(&self, round_id: &str) -> Result<Round, DomainError> {
        self.repo.round_by_id(round_id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
        })
    }

    pub async fn round_detail(&self, round_id: &str) -> Result<RoundDetail, AppError> {
        let round = self.require_round(round_id).await?;
        let scores = self.repo.scores_for_round(round_id).await?;
        Ok(RoundDetail {
            round,
            leaderboard: round_leaderboard(scores.clone()),
            scores,
        })
    }

    /// Validate and persist a batch of score edits, then return the round's
    /// refreshed scores. Nothing is written when any entry is invalid.
    pub async fn update_round_scores(
        &self,
        round_id: &str,
        payload: &ScoresPayload,
    ) -> Result<Vec<RoundScoreRow>, AppError> {
        let round = self.require_round(round_id).await?;
        let roster = self.repo.players_for_season(&round.season_id).await?;

        let updates = validate_score_updates(payload, &roster).into_result()?;
        self.repo.upsert_scores(round_id, &updates).await?;
        info!(round_id, count = updates.len(), "Round scores updated");

        Ok(self.repo.scores_for_round(round_id).await?)
    }

    /// Latest-season rounds with how many scores each has.
    pub async fn rounds_progress(&self) -> Result<RoundsProgressView, AppError> {
        let Some(data) = self.load_latest().await? else {
            return Ok(RoundsProgressView::default());
        };
        let progress = round_progress(&data.rounds, &data.scores, data.players.len());
        Ok(RoundsProgressView {
            season: Some(data.season),
            rounds: data.rounds.into_iter().zip(progress).collect(),
        })
    }

    pub async fn summary(&self) -> Result<TripSummary, AppError> {
        let Some(data) = self.load_latest().await? else {
            return Ok(TripSummary::default());
        };
        let roster_size = data.players.len();
        let ranked = leaderboard(&data.players, &data.scores);

        Ok(TripSummary {
            player_names: data.players.iter().map(|p| p.name.clone()).collect(),
            rounds_scheduled: data.rounds.len(),
            leader: leader(&ranked).cloned(),
            rounds_remaining: rounds_remaining(&data.rounds, &data.scores, roster_size),
            lowest_round: lowest_round(&data.scores).cloned(),
            season: Some(data.season),
        })
    }
}
