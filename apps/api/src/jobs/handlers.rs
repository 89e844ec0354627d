use axum::{
    extract::{Query, State},
    Json,
};

use crate::jobs::{JobPage, JobQuery};
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Json<JobPage> {
    Json(state.jobs.search(&query).await)
}
