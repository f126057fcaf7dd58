//! Round routes, including the admin score edit.

use actix_web::http::header::CONTENT_TYPE;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Serialize;

use crate::domain::validation::ScoresPayload;
use crate::error::AppError;
use crate::extractors::admin_key::AdminKey;
use crate::extractors::validated_json::ValidatedJson;
use crate::routes::dto::{collect, RoundDto, RoundProgressDto, RoundScoreDto, SeasonDto};
use crate::services::league::LeagueService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct RoundsResponse {
    season: Option<SeasonDto>,
    rounds: Vec<RoundProgressDto>,
}

#[derive(Debug, Serialize)]
struct RoundDetailResponse {
    round: RoundDto,
    scores: Vec<RoundScoreDto>,
    leaderboard: Vec<RoundScoreDto>,
}

#[derive(Debug, Serialize)]
struct ScoresUpdatedResponse {
    ok: bool,
    scores: Vec<RoundScoreDto>,
}

/// GET /api/rounds
///
/// Latest-season rounds with how many scores each has against the roster.
async fn rounds(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = LeagueService::new(app_state.repo.clone())
        .rounds_progress()
        .await?;
    Ok(HttpResponse::Ok().json(RoundsResponse {
        season: view.season.map(SeasonDto::from),
        rounds: collect(view.rounds),
    }))
}

/// GET /api/rounds/{round_id}
async fn round_detail(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    let detail = LeagueService::new(app_state.repo.clone())
        .round_detail(&round_id)
        .await?;
    Ok(HttpResponse::Ok().json(RoundDetailResponse {
        round: detail.round.into(),
        scores: collect(detail.scores),
        leaderboard: collect(detail.leaderboard),
    }))
}

/// PATCH /api/rounds/{round_id}
///
/// Checks run in order: admin key, round exists, payload shape, entries.
/// The body is only parsed once the round is known to exist.
async fn update_round_scores(
    _admin: AdminKey,
    http_req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round_id = path.into_inner();
    let service = LeagueService::new(app_state.repo.clone());

    service.require_round(&round_id).await?;

    let content_type = http_req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let payload = ValidatedJson::<ScoresPayload>::from_slice(&body, content_type)?.into_inner();

    let scores = service.update_round_scores(&round_id, &payload).await?;
    Ok(HttpResponse::Ok().json(ScoresUpdatedResponse {
        ok: true,
        scores: collect(scores),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/rounds").route(web::get().to(rounds)));
    cfg.service(
        web::resource("/api/rounds/{round_id}")
            .route(web::get().to(round_detail))
            .route(web::patch().to(update_round_scores)),
    );
}
