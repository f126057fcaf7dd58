//! Repository trait for league data.

use async_trait::async_trait;

use crate::domain::league::{
    Player, PlayerScoreRow, Round, RoundScoreRow, ScoreUpdate, Season, SeasonScoreRow,
};
use crate::errors::domain::DomainError;
use crate::repos::ordering::pick_latest;

/// Number of recent scores shown on a player's page.
pub const RECENT_SCORES_LIMIT: usize = 3;

/// Read and write access to seasons, rosters, rounds and scores.
///
/// Unknown ids yield empty collections or `None`, never errors. Errors are
/// reserved for the store itself failing.
#[async_trait]
pub trait LeagueRepo: Send + Sync {
    /// Short name of the backing store, reported by the health endpoint.
    fn store_label(&self) -> &'static str;

    /// Cheap round-trip used to decide whether the store is usable.
    async fn ping(&self) -> Result<(), DomainError>;

    async fn seasons(&self) -> Result<Vec<Season>, DomainError>;

    async fn season_by_id(&self, season_id: &str) -> Result<Option<Season>, DomainError>;

    /// Season with the greatest start date; ties go to the lowest id.
    async fn latest_season(&self) -> Result<Option<Season>, DomainError> {
        Ok(pick_latest(self.seasons().await?))
    }

    /// Roster of a season in name order.
    async fn players_for_season(&self, season_id: &str) -> Result<Vec<Player>, DomainError>;

    async fn player_by_id(&self, player_id: &str) -> Result<Option<Player>, DomainError>;

    /// Rounds of a season by date, then week, then id.
    async fn rounds_for_season(&self, season_id: &str) -> Result<Vec<Round>, DomainError>;

    async fn round_by_id(&self, round_id: &str) -> Result<Option<Round>, DomainError>;

    /// Every score of every round in the season, in round order then score id.
    async fn season_scores(&self, season_id: &str) -> Result<Vec<SeasonScoreRow>, DomainError>;

    /// Scores of one round by score id.
    async fn scores_for_round(&self, round_id: &str) -> Result<Vec<RoundScoreRow>, DomainError>;

    /// A player's most recent scores, newest round first.
    async fn recent_scores_for_player(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<PlayerScoreRow>, DomainError>;

    /// Overwrite or create one score per update for the round. No validation.
    async fn upsert_scores(&self, round_id: &str, updates: &[ScoreUpdate])
        -> Result<(), DomainError>;
}
