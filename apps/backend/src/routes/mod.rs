use actix_web::web;

pub mod dto;
pub mod health;
pub mod players;
pub mod rounds;
pub mod seasons;
pub mod standings;
pub mod summary;

/// Register every route. Shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    seasons::configure_routes(cfg);
    standings::configure_routes(cfg);
    players::configure_routes(cfg);
    rounds::configure_routes(cfg);
    summary::configure_routes(cfg);
}
