//! Per-call fallback from a primary store to a secondary one.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::league::{
    Player, PlayerScoreRow, Round, RoundScoreRow, ScoreUpdate, Season, SeasonScoreRow,
};
use crate::errors::domain::DomainError;
use crate::repos::league::LeagueRepo;

/// Serves every call from `primary`, retrying once against `fallback` when
/// the primary fails with an infrastructure error. Validation and not-found
/// outcomes are never retried.
pub struct FallbackRepo {
    primary: Arc<dyn LeagueRepo>,
    fallback: Arc<dyn LeagueRepo>,
}

impl FallbackRepo {
    pub fn new(primary: Arc<dyn LeagueRepo>, fallback: Arc<dyn LeagueRepo>) -> Self {
        Self { primary, fallback }
    }
}

macro_rules! with_fallback {
    ($self:ident, $op:literal, $method:ident($($arg:expr),*)) => {
        match $self.primary.$method($($arg),*).await {
            Err(err) if err.is_infra() => {
                warn!(
                    operation = $op,
                    store = $self.primary.store_label(),
                    fallback = $self.fallback.store_label(),
                    error = %err,
                    "Store call failed; serving fallback data"
                );
                $self.fallback.$method($($arg),*).await
            }
            other => other,
        }
    };
}

#[async_trait]
impl LeagueRepo for FallbackRepo {
    fn store_label(&self) -> &'static str {
        self.primary.store_label()
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.primary.ping().await
    }

    async fn seasons(&self) -> Result<Vec<Season>, DomainError> {
        with_fallback!(self, "seasons", seasons())
    }

    async fn season_by_id(&self, season_id: &str) -> Result<Option<Season>, DomainError> {
        with_fallback!(self, "season_by_id", season_by_id(season_id))
    }

    async fn latest_season(&self) -> Result<Option<Season>, DomainError> {
        with_fallback!(self, "latest_season", latest_season())
    }

    async fn players_for_season(&self, season_id: &str) -> Result<Vec<Player>, DomainError> {
        with_fallback!(self, "players_for_season", players_for_season(season_id))
    }

    async fn player_by_id(&self, player_id: &str) -> Result<Option<Player>, DomainError> {
        with_fallback!(self, "player_by_id", player_by_id(player_id))
    }

    async fn rounds_for_season(&self, season_id: &str) -> Result<Vec<Round>, DomainError> {
        with_fallback!(self, "rounds_for_season", rounds_for_season(season_id))
    }

    async fn round_by_id(&self, round_id: &str) -> Result<Option<Round>, DomainError> {
        with_fallback!(self, "round_by_id", round_by_id(round_id))
    }

    async fn season_scores(&self, season_id: &str) -> Result<Vec<SeasonScoreRow>, DomainError> {
        with_fallback!(self, "season_scores", season_scores(season_id))
    }

    async fn scores_for_round(&self, round_id: &str) -> Result<Vec<RoundScoreRow>, DomainError> {
        with_fallback!(self, "scores_for_round", scores_for_round(round_id))
    }

    async fn recent_scores_for_player(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<PlayerScoreRow>, DomainError> {
        with_fallback!(
            self,
            "recent_scores_for_player",
            recent_scores_for_player(player_id, limit)
        )
    }

    async fn upsert_scores(
        &self,
        round_id: &str,
        updates: &[ScoreUpdate],
    ) -> Result<(), DomainError> {
        with_fallback!(self, "upsert_scores", upsert_scores(round_id, updates))
    }
}
