use actix_web::test;
use fairway_backend::config::app::AdminConfig;
use fairway_backend::state::app_state::AppState;
use serde_json::Value;

use crate::support::{create_test_app, seeded_sqlite_state};

#[actix_web::test]
async fn healthy_database_store() {
    let state = seeded_sqlite_state(AdminConfig::disabled()).await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "database");
    assert_eq!(body["appVersion"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("storeError").is_none());
    let migrations = body["migrations"].as_str().unwrap();
    assert_ne!(migrations, "n/a");
    assert_ne!(migrations, "unknown");
}

#[actix_web::test]
async fn sample_store_reports_no_migrations() {
    let app = create_test_app(AppState::sample(AdminConfig::disabled())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["store"], "memory");
    assert_eq!(body["migrations"], "n/a");
}

#[actix_web::test]
async fn fallback_serving_is_degraded() {
    let mut state = AppState::sample(AdminConfig::disabled());
    state.fallback_active = true;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"], "memory");
}
