//! Axum route handlers for template generation.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::activity::models::ActivityRecord;
use crate::errors::AppError;
use crate::generation::interview::{
    interview_questions, practice_activity, InterviewPrompt, InterviewQuestions,
};
use crate::generation::letter::{saved_letter_activity, LetterForm};
use crate::generation::resume::{
    generate_resume, generated_resume_activity, saved_resume_activity, ResumeForm,
};
use crate::state::AppState;
use crate::storage::{self, RESUME_PREVIEW_KEY};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ResumeDraftResponse {
    pub resume: ResumeForm,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews/questions
///
/// Generates practice questions and tracks an `interview_practiced` activity.
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(prompt): Json<InterviewPrompt>,
) -> Result<Json<InterviewQuestions>, AppError> {
    let questions = interview_questions(&prompt)?;
    state
        .activity
        .track_interview_practiced(practice_activity(&prompt))
        .await;
    Ok(Json(questions))
}

/// POST /api/v1/resumes/generate
///
/// Fills the draft sections, keeps the draft as the resume preview and tracks
/// a `resume_created` activity.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(form): Json<ResumeForm>,
) -> Result<Json<ResumeDraftResponse>, AppError> {
    let draft = generate_resume(&form)?;
    storage::set_json(state.local.as_ref(), RESUME_PREVIEW_KEY, &draft).await?;
    state
        .activity
        .track_resume_created(generated_resume_activity(&draft))
        .await;
    Ok(Json(ResumeDraftResponse { resume: draft }))
}

/// GET /api/v1/resumes/preview
pub async fn handle_resume_preview(
    State(state): State<AppState>,
) -> Result<Json<ResumeDraftResponse>, AppError> {
    let resume: Option<ResumeForm> =
        storage::get_json(state.local.as_ref(), RESUME_PREVIEW_KEY).await?;
    let resume =
        resume.ok_or_else(|| AppError::NotFound("No generated resume yet".to_string()))?;
    Ok(Json(ResumeDraftResponse { resume }))
}

/// POST /api/v1/resumes
///
/// Saves the form as written. Only the activity is recorded.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(form): Json<ResumeForm>,
) -> (StatusCode, Json<ActivityRecord>) {
    let record = state
        .activity
        .track_resume_created(saved_resume_activity(&form))
        .await;
    (StatusCode::CREATED, Json(record))
}

/// POST /api/v1/cover-letters
///
/// Saves a cover letter. Only the activity is recorded.
pub async fn handle_save_cover_letter(
    State(state): State<AppState>,
    Json(form): Json<LetterForm>,
) -> (StatusCode, Json<ActivityRecord>) {
    let record = state
        .activity
        .track_cover_letter_generated(saved_letter_activity(&form))
        .await;
    (StatusCode::CREATED, Json(record))
}
