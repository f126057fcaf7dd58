use fairway_backend::config::app::AdminConfig;
use fairway_backend::domain::ScoreUpdate;
use fairway_backend::repos::LeagueRepo;
use sea_orm::{ConnectionTrait, Statement};

use crate::support::seeded_sqlite_state;

const SEASON: &str = "season-kiawah-2026";

fn update(player: &str, gross: i32, net: Option<i32>) -> ScoreUpdate {
    ScoreUpdate {
        player_id: player.to_string(),
        gross,
        net,
    }
}

#[tokio::test]
async fn latest_season_and_roster_order() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let repo = state.repo.clone();

    let season = repo.latest_season().await.unwrap().unwrap();
    assert_eq!(season.id, SEASON);
    assert_eq!(season.name, "Kiawah Island Golf Trip 2026");

    let names: Vec<String> = repo
        .players_for_season(SEASON)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Dave", "Nathan", "Neil", "Nick"]);
}

#[tokio::test]
async fn rounds_and_season_scores_follow_chronology() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let repo = state.repo.clone();

    let rounds = repo.rounds_for_season(SEASON).await.unwrap();
    let ids: Vec<&str> = rounds.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["round-01", "round-02", "round-03"]);

    let scores = repo.season_scores(SEASON).await.unwrap();
    assert_eq!(scores.len(), 12);
    assert_eq!(scores[0].score_id, "score-01");
    assert_eq!(scores[0].player_name, "Nick");
    assert_eq!(scores[11].round_id, "round-03");
}

#[tokio::test]
async fn unknown_season_yields_empty_lists() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let repo = state.repo.clone();

    assert!(repo.season_by_id("season-nope").await.unwrap().is_none());
    assert!(repo.players_for_season("season-nope").await.unwrap().is_empty());
    assert!(repo.rounds_for_season("season-nope").await.unwrap().is_empty());
    assert!(repo.season_scores("season-nope").await.unwrap().is_empty());
}

#[tokio::test]
async fn upsert_round_trip_replaces_instead_of_duplicating() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let repo = state.repo.clone();

    repo.upsert_scores("round-01", &[update("player-01", 83, Some(72))])
        .await
        .unwrap();
    repo.upsert_scores("round-01", &[update("player-01", 80, Some(70))])
        .await
        .unwrap();

    let rows = repo.scores_for_round("round-01").await.unwrap();
    assert_eq!(rows.len(), 4);
    let nick: Vec<_> = rows.iter().filter(|r| r.player_id == "player-01").collect();
    assert_eq!(nick.len(), 1);
    assert_eq!((nick[0].gross, nick[0].net), (80, Some(70)));
    assert_eq!(nick[0].score_id, "score-01");
}

#[tokio::test]
async fn upsert_creates_missing_score_with_derived_id() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let repo = state.repo.clone();
    let conn = state.db().unwrap();

    conn.execute(Statement::from_string(
        conn.get_database_backend(),
        "DELETE FROM scores WHERE id = 'score-12'",
    ))
    .await
    .unwrap();
    assert_eq!(repo.scores_for_round("round-03").await.unwrap().len(), 3);

    repo.upsert_scores("round-03", &[update("player-04", 101, Some(85))])
        .await
        .unwrap();
    let rows = repo.scores_for_round("round-03").await.unwrap();
    assert_eq!(rows.len(), 4);
    let dave = rows.iter().find(|r| r.player_id == "player-04").unwrap();
    assert_eq!(dave.score_id, "score-round-03-player-04");
    assert_eq!((dave.gross, dave.net), (101, Some(85)));
}

#[tokio::test]
async fn recent_scores_are_newest_first_and_limited() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let repo = state.repo.clone();

    let rows = repo.recent_scores_for_player("player-03", 2).await.unwrap();
    let rounds: Vec<&str> = rows.iter().map(|r| r.round_id.as_str()).collect();
    assert_eq!(rounds, ["round-03", "round-02"]);
    assert_eq!(rows[0].round_week, 3);

    assert!(repo
        .recent_scores_for_player("player-99", 3)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn seeding_is_skipped_when_store_has_data() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let wrote = fairway_backend::infra::seed::seed_sample_league(state.db().unwrap())
        .await
        .unwrap();
    assert!(!wrote);
}

#[tokio::test]
async fn failing_batch_is_rolled_back() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let repo = state.repo.clone();
    let before = repo.scores_for_round("round-01").await.unwrap();

    // The second entry violates the scores -> players foreign key.
    let err = repo
        .upsert_scores(
            "round-01",
            &[
                update("player-01", 80, Some(70)),
                update("player-99", 80, Some(70)),
            ],
        )
        .await
        .unwrap_err();
    assert!(err.is_infra());

    assert_eq!(repo.scores_for_round("round-01").await.unwrap(), before);
}
