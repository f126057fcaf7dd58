//! Loads a league snapshot into an empty store.

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use tracing::info;

use crate::adapters::seasons_sea;
use crate::entities::{players, rounds, scores, season_players, seasons};
use crate::error::AppError;
use crate::repos::sample::{sample_league, LeagueData};

/// Insert `data` when the store has no seasons yet. Returns whether anything was written.
pub async fn seed_league(conn: &DatabaseConnection, data: &LeagueData) -> Result<bool, AppError> {
    if seasons_sea::count(conn).await? > 0 {
        info!("seed=skipped store_not_empty=true");
        return Ok(false);
    }

    let txn = conn.begin().await?;

    for s in &data.seasons {
        seasons::ActiveModel {
            id: Set(s.id.clone()),
            name: Set(s.name.clone()),
            start_date: Set(s.start_date),
            end_date: Set(s.end_date),
        }
        .insert(&txn)
        .await?;
    }

    for p in &data.players {
        players::ActiveModel {
            id: Set(p.id.clone()),
            name: Set(p.name.clone()),
            email: Set(p.email.clone()),
            handicap_index: Set(p.handicap_index),
        }
        .insert(&txn)
        .await?;
    }

    for (season_id, player_id) in &data.season_players {
        season_players::ActiveModel {
            season_id: Set(season_id.clone()),
            player_id: Set(player_id.clone()),
        }
        .insert(&txn)
        .await?;
    }

    for r in &data.rounds {
        rounds::ActiveModel {
            id: Set(r.id.clone()),
            season_id: Set(r.season_id.clone()),
            week: Set(r.week),
            date: Set(r.date),
            course: Set(r.course.clone()),
            tee_time: Set(r.tee_time.clone()),
            expected_players: Set(r.expected_players),
            confirmation_code: Set(r.confirmation_code.clone()),
        }
        .insert(&txn)
        .await?;
    }

    for s in &data.scores {
        scores::ActiveModel {
            id: Set(s.id.clone()),
            round_id: Set(s.round_id.clone()),
            player_id: Set(s.player_id.clone()),
            gross: Set(s.gross),
            net: Set(s.net),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    info!(
        seasons = data.seasons.len(),
        players = data.players.len(),
        rounds = data.rounds.len(),
        scores = data.scores.len(),
        "seed=complete"
    );
    Ok(true)
}

/// Seed the built-in sample league.
pub async fn seed_sample_league(conn: &DatabaseConnection) -> Result<bool, AppError> {
    seed_league(conn, &sample_league()).await
}
