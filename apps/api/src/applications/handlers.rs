use axum::{extract::State, http::StatusCode, Json};

use crate::applications::{ApplicationRecord, ApplyRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Json<Vec<ApplicationRecord>> {
    Json(state.applications.list().await)
}

/// POST /api/v1/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplicationRecord>), AppError> {
    let record = state.applications.apply(req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
