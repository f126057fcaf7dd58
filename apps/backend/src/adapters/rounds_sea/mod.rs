//! SeaORM adapter for rounds.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::rounds;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: &str,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find_by_id(round_id.to_owned())
        .one(conn)
        .await
}

/// Rounds of a season ordered by date, then week.
pub async fn find_all_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: &str,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::SeasonId.eq(season_id))
        .order_by_asc(rounds::Column::Date)
        .order_by_asc(rounds::Column::Week)
        .all(conn)
        .await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[String],
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    rounds::Entity::find()
        .filter(rounds::Column::Id.is_in(ids.iter().cloned()))
        .all(conn)
        .await
}
