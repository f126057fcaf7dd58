use std::sync::Arc;

use actix_web::test;
use fairway_backend::config::app::AdminConfig;
use fairway_backend::infra::state::build_state;
use fairway_backend::repos::MemoryLeagueRepo;
use serde_json::Value;

use crate::support::{create_test_app, seeded_sqlite_state};

#[actix_web::test]
async fn latest_season_with_roster_and_rounds() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/season").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["season"]["id"], "season-kiawah-2026");
    assert_eq!(body["season"]["startDate"], "2026-05-11");
    assert_eq!(body["season"]["endDate"], "2026-05-13");
    assert_eq!(body["players"].as_array().unwrap().len(), 4);
    let weeks: Vec<i64> = body["rounds"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["week"].as_i64())
        .collect();
    assert_eq!(weeks, [1, 2, 3]);
    assert_eq!(body["rounds"][1]["teeTime"], "2:10 PM");
    assert_eq!(body["rounds"][1]["players"], 4);
}

#[actix_web::test]
async fn season_by_id_and_unknown_season() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/seasons/season-kiawah-2026")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["season"]["name"], "Kiawah Island Golf Trip 2026");

    let req = test::TestRequest::get()
        .uri("/api/seasons/season-nope")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["season"].is_null());
    assert_eq!(body["players"], serde_json::json!([]));
    assert_eq!(body["rounds"], serde_json::json!([]));
}

#[actix_web::test]
async fn empty_store_reports_no_season() {
    let state = build_state()
        .with_repo(Arc::new(MemoryLeagueRepo::empty()))
        .build()
        .await
        .unwrap();
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/season").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["season"].is_null());
    assert_eq!(body["players"], serde_json::json!([]));
    assert_eq!(body["rounds"], serde_json::json!([]));
}
