use std::sync::Arc;

use fairway_backend::config::app::FallbackPolicy;
use fairway_backend::config::db::{DbKind, DbProfile};
use fairway_backend::infra::db::bootstrap_db;
use fairway_backend::infra::state::build_state;
use fairway_backend::repos::{FallbackRepo, LeagueRepo, MemoryLeagueRepo, SeaLeagueRepo};

#[tokio::test]
async fn closed_connection_falls_back_to_sample() {
    let conn = bootstrap_db(DbProfile::Test, DbKind::SqliteMemory)
        .await
        .unwrap();
    let primary = SeaLeagueRepo::new(conn.clone());
    conn.close().await.unwrap();

    let repo = FallbackRepo::new(Arc::new(primary), Arc::new(MemoryLeagueRepo::sample()));
    let season = repo.latest_season().await.unwrap().unwrap();
    assert_eq!(season.id, "season-kiawah-2026");
    assert_eq!(repo.rounds_for_season(&season.id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn healthy_primary_is_served_as_is() {
    let conn = bootstrap_db(DbProfile::Test, DbKind::SqliteMemory)
        .await
        .unwrap();
    let repo = FallbackRepo::new(
        Arc::new(SeaLeagueRepo::new(conn)),
        Arc::new(MemoryLeagueRepo::sample()),
    );

    // Empty but healthy store: no fallback data leaks in.
    assert!(repo.latest_season().await.unwrap().is_none());
    assert_eq!(repo.store_label(), "database");
}

#[tokio::test]
async fn per_call_policy_wraps_the_store() {
    let state = build_state()
        .with_db(DbProfile::Test, DbKind::SqliteMemory)
        .with_fallback(FallbackPolicy::PerCall)
        .build()
        .await
        .unwrap();
    assert!(!state.fallback_active);
    assert_eq!(state.store_label(), "database");
    assert!(state.repo.ping().await.is_ok());
}
