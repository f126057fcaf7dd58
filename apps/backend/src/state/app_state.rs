use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::app::AdminConfig;
use crate::repos::league::LeagueRepo;
use crate::repos::memory::MemoryLeagueRepo;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// League data source used by every handler
    pub repo: Arc<dyn LeagueRepo>,
    /// Database connection behind `repo`; `None` when serving in-memory data
    pub db: Option<DatabaseConnection>,
    /// Admin secret guarding score edits
    pub admin: AdminConfig,
    /// True when the store could not be reached and the sample league is served instead
    pub fallback_active: bool,
}

impl AppState {
    pub fn new(repo: Arc<dyn LeagueRepo>, db: Option<DatabaseConnection>, admin: AdminConfig) -> Self {
        Self {
            repo,
            db,
            admin,
            fallback_active: false,
        }
    }

    /// State serving the in-memory sample league.
    pub fn sample(admin: AdminConfig) -> Self {
        Self::new(Arc::new(MemoryLeagueRepo::sample()), None, admin)
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn store_label(&self) -> &'static str {
        self.repo.store_label()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store_label())
            .field("db", &self.db.is_some())
            .field("admin", &self.admin)
            .field("fallback_active", &self.fallback_active)
            .finish()
    }
}
