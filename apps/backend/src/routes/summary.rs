use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::routes::dto::{LeaderDto, LowestRoundDto, SeasonDto};
use crate::services::league::LeagueService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    season: Option<SeasonDto>,
    player_names: Vec<String>,
    rounds_scheduled: usize,
    leader: Option<LeaderDto>,
    rounds_remaining: usize,
    lowest_round: Option<LowestRoundDto>,
}

/// GET /api/summary
async fn summary(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let s = LeagueService::new(app_state.repo.clone()).summary().await?;
    Ok(HttpResponse::Ok().json(SummaryResponse {
        season: s.season.map(SeasonDto::from),
        player_names: s.player_names,
        rounds_scheduled: s.rounds_scheduled,
        leader: s.leader.map(LeaderDto::from),
        rounds_remaining: s.rounds_remaining,
        lowest_round: s.lowest_round.map(LowestRoundDto::from),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/summary").route(web::get().to(summary)));
}
