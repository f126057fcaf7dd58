//! SeaORM adapter for players and season rosters.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{players, season_players};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id.to_owned())
        .one(conn)
        .await
}

/// Players whose ids are in `ids`. Order is not significant.
pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[String],
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    players::Entity::find()
        .filter(players::Column::Id.is_in(ids.iter().cloned()))
        .all(conn)
        .await
}

/// Player ids on a season's roster. Unknown seasons have no rows.
pub async fn roster_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: &str,
) -> Result<Vec<String>, sea_orm::DbErr> {
    let rows = season_players::Entity::find()
        .filter(season_players::Column::SeasonId.eq(season_id))
        .order_by_asc(season_players::Column::PlayerId)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|row| row.player_id).collect())
}
