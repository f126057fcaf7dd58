//! In-memory league repository.
//!
//! Holds a whole `LeagueData` snapshot behind a `parking_lot::RwLock`. The
//! snapshot lives as long as the repository value.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::league::{
    Player, PlayerScoreRow, Round, RoundScoreRow, Score, ScoreUpdate, Season, SeasonScoreRow,
};
use crate::errors::domain::DomainError;
use crate::repos::league::LeagueRepo;
use crate::repos::ordering::{sort_players, sort_rounds};
use crate::repos::rows::{recent_score_rows, round_score_rows, season_score_rows};
use crate::repos::sample::{sample_league, LeagueData};

#[derive(Debug, Default)]
pub struct MemoryLeagueRepo {
    data: RwLock<LeagueData>,
}

impl MemoryLeagueRepo {
    pub fn new(data: LeagueData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Repository over the built-in sample league.
    pub fn sample() -> Self {
        Self::new(sample_league())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> LeagueData {
        self.data.read().clone()
    }
}

fn player_names(players: &[Player]) -> HashMap<String, String> {
    players
        .iter()
        .map(|p| (p.id.clone(), p.name.clone()))
        .collect()
}

fn season_rounds(data: &LeagueData, season_id: &str) -> Vec<Round> {
    let mut rounds: Vec<Round> = data
        .rounds
        .iter()
        .filter(|r| r.season_id == season_id)
        .cloned()
        .collect();
    sort_rounds(&mut rounds);
    rounds
}

#[async_trait]
impl LeagueRepo for MemoryLeagueRepo {
    fn store_label(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn seasons(&self) -> Result<Vec<Season>, DomainError> {
        let mut seasons = self.data.read().seasons.clone();
        seasons.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(seasons)
    }

    async fn season_by_id(&self, season_id: &str) -> Result<Option<Season>, DomainError> {
        Ok(self
            .data
            .read()
            .seasons
            .iter()
            .find(|s| s.id == season_id)
            .cloned())
    }

    async fn players_for_season(&self, season_id: &str) -> Result<Vec<Player>, DomainError> {
        let data = self.data.read();
        let mut players: Vec<Player> = data
            .players
            .iter()
            .filter(|p| {
                data.season_players
                    .iter()
                    .any(|(s, pid)| s == season_id && *pid == p.id)
            })
            .cloned()
            .collect();
        sort_players(&mut players);
        Ok(players)
    }

    async fn player_by_id(&self, player_id: &str) -> Result<Option<Player>, DomainError> {
        Ok(self
            .data
            .read()
            .players
            .iter()
            .find(|p| p.id == player_id)
            .cloned())
    }

    async fn rounds_for_season(&self, season_id: &str) -> Result<Vec<Round>, DomainError> {
        Ok(season_rounds(&self.data.read(), season_id))
    }

    async fn round_by_id(&self, round_id: &str) -> Result<Option<Round>, DomainError> {
        Ok(self
            .data
            .read()
            .rounds
            .iter()
            .find(|r| r.id == round_id)
            .cloned())
    }

    async fn season_scores(&self, season_id: &str) -> Result<Vec<SeasonScoreRow>, DomainError> {
        let data = self.data.read();
        let rounds = season_rounds(&data, season_id);
        Ok(season_score_rows(
            &rounds,
            data.scores.clone(),
            &player_names(&data.players),
        ))
    }

    async fn scores_for_round(&self, round_id: &str) -> Result<Vec<RoundScoreRow>, DomainError> {
        let data = self.data.read();
        let scores: Vec<Score> = data
            .scores
            .iter()
            .filter(|s| s.round_id == round_id)
            .cloned()
            .collect();
        Ok(round_score_rows(scores, &player_names(&data.players)))
    }

    async fn recent_scores_for_player(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<PlayerScoreRow>, DomainError> {
        let data = self.data.read();
        let scores: Vec<Score> = data
            .scores
            .iter()
            .filter(|s| s.player_id == player_id)
            .cloned()
            .collect();
        Ok(recent_score_rows(scores, &data.rounds, limit))
    }

    async fn upsert_scores(
        &self,
        round_id: &str,
        updates: &[ScoreUpdate],
    ) -> Result<(), DomainError> {
        let mut data = self.data.write();
        for update in updates {
            let existing = data
                .scores
                .iter()
                .position(|s| s.round_id == round_id && s.player_id == update.player_id);
            match existing {
                Some(idx) => {
                    let score = &mut data.scores[idx];
                    score.gross = update.gross;
                    score.net = update.net;
                }
                None => data.scores.push(Score {
                    id: format!("score-{round_id}-{}", update.player_id),
                    round_id: round_id.to_string(),
                    player_id: update.player_id.clone(),
                    gross: update.gross,
                    net: update.net,
                }),
            }
        }
        Ok(())
    }
}
