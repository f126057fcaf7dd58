use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::routes::dto::{collect, SeasonDto, StandingDto};
use crate::services::league::LeagueService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct StandingsResponse {
    season: Option<SeasonDto>,
    standings: Vec<StandingDto>,
}

/// GET /api/standings
///
/// Latest-season leaderboard with movement since the second-to-last round.
async fn standings(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let view = LeagueService::new(app_state.repo.clone()).standings().await?;
    Ok(HttpResponse::Ok().json(StandingsResponse {
        season: view.season.map(SeasonDto::from),
        standings: collect(view.rows),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/standings").route(web::get().to(standings)));
}
