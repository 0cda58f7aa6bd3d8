//! Registration handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::debug;
use validator::Validate;

use seathub_core::error::AppError;
use seathub_service::registration::service::MISSING_FIELDS;

use crate::dto::{RegisterRequest, RegisterResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/register
///
/// An unparseable body is treated the same as one with missing fields.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Rejected registration body");
        AppError::validation(MISSING_FIELDS)
    })?;

    req.validate().map_err(AppError::from)?;

    let name = req.name.unwrap_or_default();
    let email = req.email.unwrap_or_default();

    let outcome = state.registration_service.register(&name, &email).await?;
    Ok(Json(RegisterResponse::from(outcome)))
}
