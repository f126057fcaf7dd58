//! The SeaORM and in-memory repositories answer every read identically.

use fairway_backend::config::app::AdminConfig;
use fairway_backend::repos::{LeagueRepo, MemoryLeagueRepo};

use crate::support::seeded_sqlite_state;

const SEASON: &str = "season-kiawah-2026";

#[tokio::test]
async fn reads_match_between_stores() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let sea = state.repo.clone();
    let memory = MemoryLeagueRepo::sample();

    assert_eq!(sea.seasons().await.unwrap(), memory.seasons().await.unwrap());
    assert_eq!(
        sea.players_for_season(SEASON).await.unwrap(),
        memory.players_for_season(SEASON).await.unwrap()
    );
    assert_eq!(
        sea.rounds_for_season(SEASON).await.unwrap(),
        memory.rounds_for_season(SEASON).await.unwrap()
    );
    assert_eq!(
        sea.season_scores(SEASON).await.unwrap(),
        memory.season_scores(SEASON).await.unwrap()
    );
    for round in ["round-01", "round-02", "round-03"] {
        assert_eq!(
            sea.scores_for_round(round).await.unwrap(),
            memory.scores_for_round(round).await.unwrap()
        );
    }
    for player in ["player-01", "player-02", "player-03", "player-04"] {
        assert_eq!(
            sea.recent_scores_for_player(player, 3).await.unwrap(),
            memory.recent_scores_for_player(player, 3).await.unwrap()
        );
        assert_eq!(
            sea.player_by_id(player).await.unwrap(),
            memory.player_by_id(player).await.unwrap()
        );
    }
}

#[tokio::test]
async fn writes_match_between_stores() {
    use fairway_backend::domain::ScoreUpdate;

    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let sea = state.repo.clone();
    let memory = MemoryLeagueRepo::sample();
    let updates = [
        ScoreUpdate {
            player_id: "player-02".into(),
            gross: 88,
            net: None,
        },
        ScoreUpdate {
            player_id: "player-04".into(),
            gross: 93,
            net: Some(78),
        },
    ];

    sea.upsert_scores("round-02", &updates).await.unwrap();
    memory.upsert_scores("round-02", &updates).await.unwrap();

    assert_eq!(
        sea.scores_for_round("round-02").await.unwrap(),
        memory.scores_for_round("round-02").await.unwrap()
    );
}
