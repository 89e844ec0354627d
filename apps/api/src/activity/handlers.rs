use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activity::feed::{
    feed_items, format_last_active, format_time_spent, quick_actions, FeedItem, QuickAction,
};
use crate::activity::models::{ActivityRecord, ActivityType, InterviewData, LetterData, ResumeData};
use crate::activity::stats::{compute_stats, Stats};
use crate::activity::store::DEFAULT_RECENT_LIMIT;
use crate::errors::AppError;
use crate::state::AppState;

type Tracked = (StatusCode, Json<ActivityRecord>);

#[derive(Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct PageVisit {
    pub page: String,
}

#[derive(Deserialize)]
pub struct TimeSpentSample {
    pub feature: String,
    pub duration: u64,
}

#[derive(Deserialize)]
pub struct OpenView {
    pub feature: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOpened {
    pub view_id: Uuid,
    pub feature: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: Stats,
    pub time_spent: String,
    pub last_active: String,
    pub recent: Vec<FeedItem>,
    pub quick_actions: Vec<QuickAction>,
}

/// GET /api/v1/activity
pub async fn handle_recent(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> Json<Vec<ActivityRecord>> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Json(state.activity.recent(limit).await)
}

/// DELETE /api/v1/activity
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    state.activity.clear().await;
    StatusCode::NO_CONTENT
}

/// GET /api/v1/activity/type/:kind
pub async fn handle_by_type(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<ActivityRecord>>, AppError> {
    let kind = ActivityType::parse(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown activity type '{kind}'")))?;
    Ok(Json(state.activity.by_type(kind).await))
}

/// GET /api/v1/activity/feature/:feature
pub async fn handle_by_feature(
    State(state): State<AppState>,
    Path(feature): Path<String>,
) -> Json<Vec<ActivityRecord>> {
    Json(state.activity.by_feature(&feature).await)
}

/// GET /api/v1/activity/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.activity.stats().await)
}

/// GET /api/v1/activity/feed
pub async fn handle_feed(State(state): State<AppState>) -> Json<Vec<FeedItem>> {
    let recent = state.activity.recent(DEFAULT_RECENT_LIMIT).await;
    Json(feed_items(&recent, Utc::now()))
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let activities = state.activity.snapshot().await;
    let stats = compute_stats(&activities);
    let now = Utc::now();
    Json(DashboardResponse {
        time_spent: format_time_spent(stats.total_time_spent),
        last_active: format_last_active(stats.last_active, now),
        recent: feed_items(&activities, now),
        quick_actions: quick_actions(&stats),
        stats,
    })
}

/// POST /api/v1/activity/page-visits
pub async fn handle_track_page_visit(
    State(state): State<AppState>,
    Json(req): Json<PageVisit>,
) -> Tracked {
    let record = state.activity.track_page_visit(req.page).await;
    (StatusCode::CREATED, Json(record))
}

/// POST /api/v1/activity/resumes
pub async fn handle_track_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeData>,
) -> Tracked {
    let record = state.activity.track_resume_created(req).await;
    (StatusCode::CREATED, Json(record))
}

/// POST /api/v1/activity/cover-letters
pub async fn handle_track_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<LetterData>,
) -> Tracked {
    let record = state.activity.track_cover_letter_generated(req).await;
    (StatusCode::CREATED, Json(record))
}

/// POST /api/v1/activity/interviews
pub async fn handle_track_interview(
    State(state): State<AppState>,
    Json(req): Json<InterviewData>,
) -> Tracked {
    let record = state.activity.track_interview_practiced(req).await;
    (StatusCode::CREATED, Json(record))
}

/// POST /api/v1/activity/time-spent
pub async fn handle_track_time_spent(
    State(state): State<AppState>,
    Json(req): Json<TimeSpentSample>,
) -> Tracked {
    let record = state
        .activity
        .track_time_spent(req.feature, req.duration)
        .await;
    (StatusCode::CREATED, Json(record))
}

/// POST /api/v1/views
pub async fn handle_open_view(
    State(state): State<AppState>,
    Json(req): Json<OpenView>,
) -> Result<(StatusCode, Json<ViewOpened>), AppError> {
    let view_id = state.views.open(&req.feature).await?;
    Ok((
        StatusCode::CREATED,
        Json(ViewOpened {
            view_id,
            feature: req.feature,
        }),
    ))
}

/// DELETE /api/v1/views/:id
pub async fn handle_close_view(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    state.views.close(id).await;
    StatusCode::NO_CONTENT
}
