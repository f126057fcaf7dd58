//! Player routes.

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::routes::dto::{collect, PlayerDto, PlayerScoreDto, SeasonDto};
use crate::services::league::LeagueService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct RosterResponse {
    season: Option<SeasonDto>,
    players: Vec<PlayerDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerDetailResponse {
    player: PlayerDto,
    recent_scores: Vec<PlayerScoreDto>,
}

/// GET /api/players
///
/// Roster of the latest season, in name order.
async fn roster(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let overview = LeagueService::new(app_state.repo.clone())
        .latest_overview()
        .await?;
    Ok(HttpResponse::Ok().json(RosterResponse {
        season: overview.season.map(SeasonDto::from),
        players: collect(overview.players),
    }))
}

/// GET /api/players/{player_id}
///
/// Player attributes with their three most recent scores, newest first.
async fn player_detail(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let detail = LeagueService::new(app_state.repo.clone())
        .player_detail(&player_id)
        .await?;
    Ok(HttpResponse::Ok().json(PlayerDetailResponse {
        player: detail.player.into(),
        recent_scores: collect(detail.recent_scores),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/players").route(web::get().to(roster)));
    cfg.service(web::resource("/api/players/{player_id}").route(web::get().to(player_detail)));
}
