use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbProfile};
use crate::error::AppError;

/// Get database engine name for logging
fn db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays
/// Returns the result of the last attempt after all retries are exhausted
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| AppError::config("connection retry made no attempts")))
}

/// Pool options per engine.
///
/// In-memory SQLite is pinned to a single long-lived connection: every new
/// connection would open its own empty database.
fn connect_options(url: String, db_kind: DbKind) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    match db_kind {
        DbKind::SqliteMemory => {
            opts.max_connections(1)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(u32::MAX as u64))
                .max_lifetime(Duration::from_secs(u32::MAX as u64));
        }
        DbKind::SqliteFile => {
            opts.max_connections(4);
        }
        DbKind::Postgres => {
            opts.max_connections(10);
        }
    }
    opts
}

/// Open a pool for the profile/kind. This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile, db_kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile, db_kind)?;
    let max_attempts = if db_kind == DbKind::Postgres { 3 } else { 1 };

    let conn = retry_connection(
        || {
            let opts = connect_options(url.clone(), db_kind);
            async move { Database::connect(opts).await.map_err(AppError::from) }
        },
        max_attempts,
        500,
    )
    .await?;

    if db_kind.is_sqlite() {
        conn.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    }
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: DbProfile, db_kind: DbKind) -> Result<DatabaseConnection, AppError> {
    info!(
        profile = ?profile,
        db_kind = ?db_kind,
        engine = db_engine(db_kind),
        "bootstrap=start"
    );

    let conn = connect_db(profile, db_kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;

    info!("bootstrap=ready");
    Ok(conn)
}
