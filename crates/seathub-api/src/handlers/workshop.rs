//! Workshop handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::WorkshopResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/workshop
pub async fn get_workshop(
    State(state): State<AppState>,
) -> Result<Json<WorkshopResponse>, ApiError> {
    let info = state.workshop_service.get_info().await?;
    Ok(Json(WorkshopResponse::from(info)))
}
