use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use fairway_backend::config::app::AdminConfig;
use fairway_backend::repos::LeagueRepo;
use serde_json::{json, Value};

use crate::common::player_ids;
use crate::support::{admin_enabled, create_test_app, seeded_sqlite_state, TEST_ADMIN_KEY};

fn patch(round_id: &str, key: Option<&str>, body: Value) -> test::TestRequest {
    let mut req = test::TestRequest::patch()
        .uri(&format!("/api/rounds/{round_id}"))
        .set_json(body);
    if let Some(key) = key {
        req = req.insert_header(("x-admin-key", key));
    }
    req
}

#[actix_web::test]
async fn lists_rounds_with_progress() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/rounds").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["season"]["id"], "season-kiawah-2026");
    let rounds = body["rounds"].as_array().unwrap();
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0]["id"], "round-01");
    assert_eq!(rounds[0]["course"], "Turtle Point");
    assert_eq!(rounds[0]["date"], "2026-05-11");
    assert_eq!(rounds[0]["confirmationNumber"], "CN853709J5T8ZW");
    assert_eq!(rounds[0]["entered"], 4);
    assert_eq!(rounds[0]["rosterSize"], 4);
    assert_eq!(rounds[0]["complete"], true);
}

#[actix_web::test]
async fn round_detail_orders_leaderboard_by_net() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/rounds/round-01").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["round"]["week"], 1);
    assert_eq!(
        player_ids(&body["scores"]),
        ["player-01", "player-02", "player-03", "player-04"]
    );
    assert_eq!(
        player_ids(&body["leaderboard"]),
        ["player-03", "player-01", "player-02", "player-04"]
    );
}

#[actix_web::test]
async fn unknown_round_is_not_found() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/rounds/round-99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "ROUND_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("round-99"),
    )
    .await;
}

#[actix_web::test]
async fn patch_updates_scores_and_returns_refreshed_list() {
    let state = seeded_sqlite_state(admin_enabled()).await;
    let repo = state.repo.clone();
    let app = create_test_app(state).await;

    let body = json!({ "scores": [
        { "playerId": "player-01", "gross": 80, "net": 70 },
        { "playerId": "player-02", "gross": 92, "net": null }
    ]});
    let req = patch("round-02", Some(TEST_ADMIN_KEY), body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    let scores = body["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 4);
    let nick = scores.iter().find(|s| s["player"]["id"] == "player-01").unwrap();
    assert_eq!((nick["gross"].as_i64(), nick["net"].as_i64()), (Some(80), Some(70)));
    let nathan = scores.iter().find(|s| s["player"]["id"] == "player-02").unwrap();
    assert_eq!(nathan["gross"], 92);
    assert!(nathan["net"].is_null());

    let stored = repo.scores_for_round("round-02").await.unwrap();
    let nick = stored.iter().find(|s| s.player_id == "player-01").unwrap();
    assert_eq!(nick.gross, 80);
}

#[actix_web::test]
async fn patch_without_or_with_wrong_key_is_unauthorized() {
    let state = seeded_sqlite_state(admin_enabled()).await;
    let repo = state.repo.clone();
    let before = repo.scores_for_round("round-01").await.unwrap();
    let app = create_test_app(state).await;
    let body = json!({ "scores": [{ "playerId": "player-01", "gross": 60 }] });

    for key in [None, Some("not-the-key")] {
        let req = patch("round-01", key, body.clone()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            "UNAUTHORIZED",
            StatusCode::UNAUTHORIZED,
            None,
        )
        .await;
    }

    assert_eq!(repo.scores_for_round("round-01").await.unwrap(), before);
}

#[actix_web::test]
async fn patch_is_unavailable_when_editing_is_disabled() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let app = create_test_app(state).await;

    let body = json!({ "scores": [{ "playerId": "player-01", "gross": 80 }] });
    let req = patch("round-01", Some(TEST_ADMIN_KEY), body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "ADMIN_EDITING_DISABLED",
        StatusCode::SERVICE_UNAVAILABLE,
        None,
    )
    .await;
}

#[actix_web::test]
async fn patch_unknown_round_is_not_found_before_body_checks() {
    let state = seeded_sqlite_state(admin_enabled()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::patch()
        .uri("/api/rounds/round-99")
        .insert_header(("x-admin-key", TEST_ADMIN_KEY))
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "ROUND_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
}

#[actix_web::test]
async fn out_of_range_gross_rejects_whole_batch() {
    let state = seeded_sqlite_state(admin_enabled()).await;
    let repo = state.repo.clone();
    let before = repo.scores_for_round("round-01").await.unwrap();
    let app = create_test_app(state).await;

    let body = json!({ "scores": [
        { "playerId": "player-01", "gross": 80, "net": 70 },
        { "playerId": "player-02", "gross": 39 }
    ]});
    let req = patch("round-01", Some(TEST_ADMIN_KEY), body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_STROKE_COUNT",
        StatusCode::BAD_REQUEST,
        Some("player-02"),
    )
    .await;

    assert_eq!(repo.scores_for_round("round-01").await.unwrap(), before);
}

#[actix_web::test]
async fn missing_net_key_is_rejected() {
    let state = seeded_sqlite_state(admin_enabled()).await;
    let repo = state.repo.clone();
    let before = repo.scores_for_round("round-01").await.unwrap();
    let app = create_test_app(state).await;

    let body = json!({ "scores": [{ "playerId": "player-01", "gross": 83 }] });
    let req = patch("round-01", Some(TEST_ADMIN_KEY), body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_STROKE_COUNT",
        StatusCode::BAD_REQUEST,
        Some("Invalid net score"),
    )
    .await;

    assert_eq!(repo.scores_for_round("round-01").await.unwrap(), before);
}

#[actix_web::test]
async fn player_outside_roster_is_rejected() {
    let state = seeded_sqlite_state(admin_enabled()).await;
    let app = create_test_app(state).await;

    let body = json!({ "scores": [{ "playerId": "player-99", "gross": 80 }] });
    let req = patch("round-01", Some(TEST_ADMIN_KEY), body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_PLAYER_ID",
        StatusCode::BAD_REQUEST,
        Some("player-99"),
    )
    .await;
}

#[actix_web::test]
async fn empty_or_malformed_payload_is_invalid() {
    let state = seeded_sqlite_state(admin_enabled()).await;
    let app = create_test_app(state).await;

    for body in [json!({ "scores": [] }), json!({})] {
        let req = patch("round-01", Some(TEST_ADMIN_KEY), body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            "INVALID_PAYLOAD",
            StatusCode::BAD_REQUEST,
            Some("Invalid payload"),
        )
        .await;
    }

    let req = test::TestRequest::patch()
        .uri("/api/rounds/round-01")
        .insert_header(("x-admin-key", TEST_ADMIN_KEY))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\n  \"scores\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_PAYLOAD",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
}
