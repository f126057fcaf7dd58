//! Process configuration read from the environment at startup.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::config::db::DbKind;
use crate::error::AppError;

/// What to do when the store cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Probe once while building state; serve the sample league if that fails.
    #[default]
    Startup,
    /// Startup probe, plus retry each failing store call against the sample league.
    PerCall,
    /// Never fall back; a store failure at startup aborts.
    Off,
}

impl FromStr for FallbackPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "startup" => Ok(FallbackPolicy::Startup),
            "per-call" | "per_call" => Ok(FallbackPolicy::PerCall),
            "off" | "none" => Ok(FallbackPolicy::Off),
            other => Err(AppError::config(format!(
                "Unsupported STORE_FALLBACK '{other}' (expected startup, per-call or off)"
            ))),
        }
    }
}

/// Shared admin secret guarding score edits.
///
/// Only a blake3 digest of the key is kept; comparison is digest to digest.
#[derive(Clone, Default)]
pub struct AdminConfig {
    key_digest: Option<blake3::Hash>,
}

impl AdminConfig {
    /// A missing or empty key disables editing. The key is used verbatim,
    /// whitespace included, exactly as `verify` sees the presented header.
    pub fn from_key(key: Option<&str>) -> Self {
        let key_digest = key
            .filter(|k| !k.is_empty())
            .map(|k| blake3::hash(k.as_bytes()));
        Self { key_digest }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.key_digest.is_some()
    }

    /// Constant-time check of a presented key. Always false when disabled.
    pub fn verify(&self, presented: &str) -> bool {
        match &self.key_digest {
            Some(expected) => blake3::hash(presented.as_bytes()) == *expected,
            None => false,
        }
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    pub admin: AdminConfig,
    pub fallback: FallbackPolicy,
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("Invalid BACKEND_PORT '{raw}'")))?,
            Err(_) => 3001,
        };
        let fallback = match env::var("STORE_FALLBACK") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => FallbackPolicy::default(),
        };

        Ok(Self {
            host,
            port,
            db_kind: DbKind::from_env()?,
            admin: AdminConfig::from_key(env::var("ADMIN_EDIT_KEY").ok().as_deref()),
            fallback,
            seed_sample_data: flag("SEED_SAMPLE_DATA"),
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
