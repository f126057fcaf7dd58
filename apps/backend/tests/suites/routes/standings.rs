use actix_web::test;
use fairway_backend::config::app::AdminConfig;
use fairway_backend::repos::LeagueRepo;
use serde_json::Value;

use crate::common::player_ids;
use crate::support::{create_test_app, seeded_sqlite_state};

#[actix_web::test]
async fn standings_rank_by_total_net() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/standings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["season"]["name"], "Kiawah Island Golf Trip 2026");
    let rows = &body["standings"];
    assert_eq!(
        player_ids(rows),
        ["player-03", "player-01", "player-02", "player-04"]
    );

    let leader = &rows[0];
    assert_eq!(leader["rank"], 1);
    assert_eq!(leader["playerName"], "Neil");
    assert_eq!(leader["roundsPlayed"], 3);
    assert_eq!(leader["totalNet"], 216);
    assert_eq!(leader["totalGross"], 243);
    assert_eq!(leader["movement"], 0);
    assert_eq!(leader["movementLabel"], "—");

    for (idx, row) in rows.as_array().unwrap().iter().enumerate() {
        assert_eq!(row["rank"], idx as u64 + 1);
        assert_eq!(row["movementLabel"], "—");
    }
}

#[actix_web::test]
async fn standings_move_after_a_score_edit() {
    use fairway_backend::domain::ScoreUpdate;

    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    // Dave posts a career round in the final round.
    state
        .repo
        .upsert_scores(
            "round-03",
            &[ScoreUpdate {
                player_id: "player-04".into(),
                gross: 70,
                net: Some(50),
            }],
        )
        .await
        .unwrap();
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/standings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rows = body["standings"].as_array().unwrap();

    assert_eq!(rows[0]["playerId"], "player-04");
    assert_eq!(rows[0]["movement"], 3);
    assert_eq!(rows[0]["movementLabel"], "+3");
    assert_eq!(rows[1]["playerId"], "player-03");
    assert_eq!(rows[1]["movementLabel"], "-1");
}
