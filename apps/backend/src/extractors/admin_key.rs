use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::web::trace_ctx;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Proof that the request carried the configured admin key.
///
/// Fails with 503 `ADMIN_EDITING_DISABLED` when no key is configured and
/// 401 `UNAUTHORIZED` when the header is missing or wrong. List it before
/// any body extractor so the body is never read for rejected requests.
#[derive(Debug, Clone, Copy)]
pub struct AdminKey;

impl FromRequest for AdminKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(check(req))
    }
}

fn check(req: &HttpRequest) -> Result<AdminKey, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not configured"))?;

    if !state.admin.is_enabled() {
        return Err(AppError::editing_disabled());
    }

    let presented = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if state.admin.verify(key) => Ok(AdminKey),
        Some(_) => {
            warn!(trace_id = %trace_ctx::trace_id(), path = %req.path(), "Rejected admin key");
            Err(AppError::unauthorized())
        }
        None => {
            warn!(trace_id = %trace_ctx::trace_id(), path = %req.path(), "Missing admin key");
            Err(AppError::unauthorized())
        }
    }
}
