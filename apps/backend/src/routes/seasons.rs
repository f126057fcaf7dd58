//! Season overview routes.

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::routes::dto::{collect, PlayerDto, RoundDto, SeasonDto};
use crate::services::league::{LeagueService, SeasonOverview};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct SeasonOverviewResponse {
    season: Option<SeasonDto>,
    players: Vec<PlayerDto>,
    rounds: Vec<RoundDto>,
}

impl From<SeasonOverview> for SeasonOverviewResponse {
    fn from(o: SeasonOverview) -> Self {
        Self {
            season: o.season.map(SeasonDto::from),
            players: collect(o.players),
            rounds: collect(o.rounds),
        }
    }
}

/// GET /api/season
///
/// The latest season with its roster and rounds; `season: null` when there is none.
async fn latest_season(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let overview = LeagueService::new(app_state.repo.clone())
        .latest_overview()
        .await?;
    Ok(HttpResponse::Ok().json(SeasonOverviewResponse::from(overview)))
}

/// GET /api/seasons/{season_id}
async fn season_by_id(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let season_id = path.into_inner();
    let overview = LeagueService::new(app_state.repo.clone())
        .season_overview(&season_id)
        .await?;
    Ok(HttpResponse::Ok().json(SeasonOverviewResponse::from(overview)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/season").route(web::get().to(latest_season)));
    cfg.service(web::resource("/api/seasons/{season_id}").route(web::get().to(season_by_id)));
}
