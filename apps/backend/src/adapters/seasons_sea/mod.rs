//! SeaORM adapter for seasons.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder};

use crate::entities::seasons;

/// All seasons, ordered by id. Choosing the latest happens in the repo layer.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<seasons::Model>, sea_orm::DbErr> {
    seasons::Entity::find()
        .order_by_asc(seasons::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: &str,
) -> Result<Option<seasons::Model>, sea_orm::DbErr> {
    seasons::Entity::find_by_id(season_id.to_owned())
        .one(conn)
        .await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    seasons::Entity::find().count(conn).await
}
