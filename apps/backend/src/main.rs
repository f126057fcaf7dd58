use actix_web::{web, App, HttpServer};
use fairway_backend::config::app::AppConfig;
use fairway_backend::config::db::DbProfile;
use fairway_backend::infra::state::StateBuilder;
use fairway_backend::middleware::request_trace::RequestTrace;
use fairway_backend::middleware::structured_logger::StructuredLogger;
use fairway_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match StateBuilder::from_config(&config, DbProfile::Prod).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let (host, port) = config.bind_addr();
    info!(
        host = %host,
        port,
        store = app_state.store_label(),
        fallback_active = app_state.fallback_active,
        admin_editing = config.admin.is_enabled(),
        "Starting Fairway backend"
    );

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
