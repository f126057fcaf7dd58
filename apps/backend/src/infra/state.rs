use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::config::app::{AdminConfig, AppConfig, FallbackPolicy};
use crate::config::db::{DbKind, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::infra::seed::seed_sample_league;
use crate::repos::fallback::FallbackRepo;
use crate::repos::league::LeagueRepo;
use crate::repos::memory::MemoryLeagueRepo;
use crate::repos::sea::SeaLeagueRepo;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db: Option<(DbProfile, DbKind)>,
    repo: Option<Arc<dyn LeagueRepo>>,
    admin: AdminConfig,
    fallback: FallbackPolicy,
    seed_sample: bool,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db: None,
            repo: None,
            admin: AdminConfig::disabled(),
            fallback: FallbackPolicy::default(),
            seed_sample: false,
        }
    }

    /// Builder preloaded from process configuration.
    pub fn from_config(config: &AppConfig, profile: DbProfile) -> Self {
        Self::new()
            .with_db(profile, config.db_kind)
            .with_admin(config.admin.clone())
            .with_fallback(config.fallback)
            .with_seed_sample(config.seed_sample_data)
    }

    pub fn with_db(mut self, profile: DbProfile, kind: DbKind) -> Self {
        self.db = Some((profile, kind));
        self
    }

    /// Serve this repository instead of connecting anywhere.
    pub fn with_repo(mut self, repo: Arc<dyn LeagueRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn with_admin(mut self, admin: AdminConfig) -> Self {
        self.admin = admin;
        self
    }

    pub fn with_fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    pub fn with_seed_sample(mut self, seed: bool) -> Self {
        self.seed_sample = seed;
        self
    }

    /// Connect, migrate, probe and optionally seed; bail out to the sample
    /// league according to the fallback policy.
    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(repo) = self.repo {
            return Ok(AppState::new(repo, None, self.admin));
        }

        let Some((profile, kind)) = self.db else {
            info!(store = "memory", "No database configured; serving sample league");
            return Ok(AppState::sample(self.admin));
        };

        match open_store(profile, kind, self.seed_sample).await {
            Ok(conn) => {
                let primary: Arc<dyn LeagueRepo> = Arc::new(SeaLeagueRepo::new(conn.clone()));
                let repo: Arc<dyn LeagueRepo> = match self.fallback {
                    FallbackPolicy::PerCall => Arc::new(FallbackRepo::new(
                        primary,
                        Arc::new(MemoryLeagueRepo::sample()),
                    )),
                    FallbackPolicy::Startup | FallbackPolicy::Off => primary,
                };
                info!(store = "database", fallback = ?self.fallback, "Store ready");
                Ok(AppState::new(repo, Some(conn), self.admin))
            }
            Err(err) if self.fallback != FallbackPolicy::Off => {
                warn!(error = %err, db_kind = ?kind, "Store unavailable at startup; serving sample league");
                let mut state = AppState::sample(self.admin);
                state.fallback_active = true;
                Ok(state)
            }
            Err(err) => Err(err),
        }
    }
}

async fn open_store(
    profile: DbProfile,
    kind: DbKind,
    seed_sample: bool,
) -> Result<DatabaseConnection, AppError> {
    let conn = bootstrap_db(profile, kind).await?;
    SeaLeagueRepo::new(conn.clone()).ping().await?;
    if seed_sample {
        seed_sample_league(&conn).await?;
    }
    Ok(conn)
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
