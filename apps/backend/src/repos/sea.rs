//! SeaORM-backed league repository.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, warn};

use crate::adapters::{players_sea, rounds_sea, scores_sea, seasons_sea};
use crate::domain::league::{
    Player, PlayerScoreRow, Round, RoundScoreRow, Score, ScoreUpdate, Season, SeasonScoreRow,
};
use crate::entities::{players, rounds, scores, seasons};
use crate::errors::domain::DomainError;
use crate::repos::league::LeagueRepo;
use crate::repos::ordering::{sort_players, sort_rounds};
use crate::repos::rows::{recent_score_rows, round_score_rows, season_score_rows};

impl From<seasons::Model> for Season {
    fn from(m: seasons::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            start_date: m.start_date,
            end_date: m.end_date,
        }
    }
}

impl From<players::Model> for Player {
    fn from(m: players::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            handicap_index: m.handicap_index,
        }
    }
}

impl From<rounds::Model> for Round {
    fn from(m: rounds::Model) -> Self {
        Self {
            id: m.id,
            season_id: m.season_id,
            week: m.week,
            date: m.date,
            course: m.course,
            tee_time: m.tee_time,
            expected_players: m.expected_players,
            confirmation_code: m.confirmation_code,
        }
    }
}

impl From<scores::Model> for Score {
    fn from(m: scores::Model) -> Self {
        Self {
            id: m.id,
            round_id: m.round_id,
            player_id: m.player_id,
            gross: m.gross,
            net: m.net,
        }
    }
}

fn convert<M, T: From<M>>(models: Vec<M>) -> Vec<T> {
    models.into_iter().map(T::from).collect()
}

#[derive(Debug, Clone)]
pub struct SeaLeagueRepo {
    conn: DatabaseConnection,
}

impl SeaLeagueRepo {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Names of the players referenced by `scores`.
    async fn names_for(&self, scores: &[Score]) -> Result<HashMap<String, String>, DomainError> {
        let ids: Vec<String> = scores
            .iter()
            .map(|s| s.player_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let players = players_sea::find_by_ids(&self.conn, &ids).await?;
        Ok(players.into_iter().map(|p| (p.id, p.name)).collect())
    }

    async fn season_rounds(&self, season_id: &str) -> Result<Vec<Round>, DomainError> {
        let mut rounds: Vec<Round> =
            convert(rounds_sea::find_all_by_season(&self.conn, season_id).await?);
        sort_rounds(&mut rounds);
        Ok(rounds)
    }
}

#[async_trait]
impl LeagueRepo for SeaLeagueRepo {
    fn store_label(&self) -> &'static str {
        "database"
    }

    async fn ping(&self) -> Result<(), DomainError> {
        seasons_sea::count(&self.conn).await?;
        Ok(())
    }

    async fn seasons(&self) -> Result<Vec<Season>, DomainError> {
        Ok(convert(seasons_sea::find_all(&self.conn).await?))
    }

    async fn season_by_id(&self, season_id: &str) -> Result<Option<Season>, DomainError> {
        Ok(seasons_sea::find_by_id(&self.conn, season_id)
            .await?
            .map(Season::from))
    }

    async fn players_for_season(&self, season_id: &str) -> Result<Vec<Player>, DomainError> {
        let ids = players_sea::roster_ids(&self.conn, season_id).await?;
        let mut players: Vec<Player> = convert(players_sea::find_by_ids(&self.conn, &ids).await?);
        sort_players(&mut players);
        Ok(players)
    }

    async fn player_by_id(&self, player_id: &str) -> Result<Option<Player>, DomainError> {
        Ok(players_sea::find_by_id(&self.conn, player_id)
            .await?
            .map(Player::from))
    }

    async fn rounds_for_season(&self, season_id: &str) -> Result<Vec<Round>, DomainError> {
        self.season_rounds(season_id).await
    }

    async fn round_by_id(&self, round_id: &str) -> Result<Option<Round>, DomainError> {
        Ok(rounds_sea::find_by_id(&self.conn, round_id)
            .await?
            .map(Round::from))
    }

    async fn season_scores(&self, season_id: &str) -> Result<Vec<SeasonScoreRow>, DomainError> {
        let rounds = self.season_rounds(season_id).await?;
        let round_ids: Vec<String> = rounds.iter().map(|r| r.id.clone()).collect();
        let scores: Vec<Score> =
            convert(scores_sea::find_all_by_rounds(&self.conn, &round_ids).await?);
        let names = self.names_for(&scores).await?;
        Ok(season_score_rows(&rounds, scores, &names))
    }

    async fn scores_for_round(&self, round_id: &str) -> Result<Vec<RoundScoreRow>, DomainError> {
        let scores: Vec<Score> = convert(scores_sea::find_all_by_round(&self.conn, round_id).await?);
        let names = self.names_for(&scores).await?;
        Ok(round_score_rows(scores, &names))
    }

    async fn recent_scores_for_player(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<PlayerScoreRow>, DomainError> {
        let scores: Vec<Score> =
            convert(scores_sea::find_all_by_player(&self.conn, player_id).await?);
        let round_ids: Vec<String> = scores
            .iter()
            .map(|s| s.round_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let rounds: Vec<Round> = convert(rounds_sea::find_by_ids(&self.conn, &round_ids).await?);
        Ok(recent_score_rows(scores, &rounds, limit))
    }

    async fn upsert_scores(
        &self,
        round_id: &str,
        updates: &[ScoreUpdate],
    ) -> Result<(), DomainError> {
        let txn = self.conn.begin().await?;

        for update in updates {
            let dto = scores_sea::ScoreUpsert {
                round_id: round_id.to_string(),
                player_id: update.player_id.clone(),
                gross: update.gross,
                net: update.net,
            };
            if let Err(err) = scores_sea::upsert_score(&txn, dto).await {
                // The upsert error is returned even when rollback also fails.
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(round_id, error = %rollback_err, "score upsert rollback failed");
                }
                return Err(err.into());
            }
        }

        txn.commit().await?;
        debug!(round_id, count = updates.len(), "scores upserted");
        Ok(())
    }
}
