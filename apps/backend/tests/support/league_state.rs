use fairway_backend::config::app::AdminConfig;
use fairway_backend::config::db::{DbKind, DbProfile};
use fairway_backend::infra::state::build_state;
use fairway_backend::state::app_state::AppState;

pub const TEST_ADMIN_KEY: &str = "test-admin-key";

/// Fresh private in-memory SQLite store, migrated and seeded with the sample league.
pub async fn seeded_sqlite_state(admin: AdminConfig) -> AppState {
    build_state()
        .with_db(DbProfile::Test, DbKind::SqliteMemory)
        .with_seed_sample(true)
        .with_admin(admin)
        .build()
        .await
        .expect("sqlite state builds")
}

pub fn admin_enabled() -> AdminConfig {
    AdminConfig::from_key(Some(TEST_ADMIN_KEY))
}
