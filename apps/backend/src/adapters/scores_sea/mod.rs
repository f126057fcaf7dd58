//! SeaORM adapter for scores.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::scores;

pub mod dto;

pub use dto::ScoreUpsert;

/// All scores for a round, ordered by score id
pub async fn find_all_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: &str,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::RoundId.eq(round_id))
        .order_by_asc(scores::Column::Id)
        .all(conn)
        .await
}

/// All scores whose round is one of `round_ids`
pub async fn find_all_by_rounds<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_ids: &[String],
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    if round_ids.is_empty() {
        return Ok(Vec::new());
    }
    scores::Entity::find()
        .filter(scores::Column::RoundId.is_in(round_ids.iter().cloned()))
        .order_by_asc(scores::Column::Id)
        .all(conn)
        .await
}

pub async fn find_all_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: &str,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::PlayerId.eq(player_id))
        .order_by_asc(scores::Column::Id)
        .all(conn)
        .await
}

/// Find the score for a player in a round
pub async fn find_by_round_and_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: &str,
    player_id: &str,
) -> Result<Option<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::RoundId.eq(round_id))
        .filter(scores::Column::PlayerId.eq(player_id))
        .order_by_asc(scores::Column::Id)
        .one(conn)
        .await
}

/// Overwrite gross/net of the existing (round, player) score, or insert one.
pub async fn upsert_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreUpsert,
) -> Result<scores::Model, sea_orm::DbErr> {
    match find_by_round_and_player(conn, &dto.round_id, &dto.player_id).await? {
        Some(existing) => {
            let mut active = existing.into_active_model();
            active.gross = Set(dto.gross);
            active.net = Set(dto.net);
            active.update(conn).await
        }
        None => {
            let score = scores::ActiveModel {
                id: Set(dto.new_score_id()),
                round_id: Set(dto.round_id),
                player_id: Set(dto.player_id),
                gross: Set(dto.gross),
                net: Set(dto.net),
            };
            score.insert(conn).await
        }
    }
}
