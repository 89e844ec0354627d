pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::activity::handlers as activity;
use crate::applications::handlers as applications;
use crate::generation::handlers as generation;
use crate::jobs::handlers as jobs;
use crate::preferences;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Activity log
        .route(
            "/api/v1/activity",
            get(activity::handle_recent).delete(activity::handle_clear),
        )
        .route("/api/v1/activity/stats", get(activity::handle_stats))
        .route("/api/v1/activity/feed", get(activity::handle_feed))
        .route("/api/v1/activity/type/:kind", get(activity::handle_by_type))
        .route(
            "/api/v1/activity/feature/:feature",
            get(activity::handle_by_feature),
        )
        .route(
            "/api/v1/activity/page-visits",
            post(activity::handle_track_page_visit),
        )
        .route("/api/v1/activity/resumes", post(activity::handle_track_resume))
        .route(
            "/api/v1/activity/cover-letters",
            post(activity::handle_track_cover_letter),
        )
        .route(
            "/api/v1/activity/interviews",
            post(activity::handle_track_interview),
        )
        .route(
            "/api/v1/activity/time-spent",
            post(activity::handle_track_time_spent),
        )
        .route("/api/v1/dashboard", get(activity::handle_dashboard))
        // Feature views (time sampling)
        .route("/api/v1/views", post(activity::handle_open_view))
        .route("/api/v1/views/:id", delete(activity::handle_close_view))
        // Applications tracker
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications).post(applications::handle_apply),
        )
        // Template generation
        .route(
            "/api/v1/interviews/questions",
            post(generation::handle_interview_questions),
        )
        .route("/api/v1/resumes", post(generation::handle_save_resume))
        .route(
            "/api/v1/resumes/generate",
            post(generation::handle_generate_resume),
        )
        .route(
            "/api/v1/resumes/preview",
            get(generation::handle_resume_preview),
        )
        .route(
            "/api/v1/cover-letters",
            post(generation::handle_save_cover_letter),
        )
        // Preferences
        .route(
            "/api/v1/preferences/sidebar",
            get(preferences::handle_get_sidebar).put(preferences::handle_set_sidebar),
        )
        .route(
            "/api/v1/preferences/sidebar/toggle",
            post(preferences::handle_toggle_sidebar),
        )
        // Job search
        .route("/api/v1/jobs", get(jobs::handle_search_jobs))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::jobs::JobSearchService;
    use crate::storage::MemoryStore;

    async fn app() -> Router {
        let state = AppState::build(
            Arc::new(MemoryStore::new()),
            &MemoryStore::new(),
            Duration::from_secs(30),
            JobSearchService::new(None),
        )
        .await;
        build_router(state)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_tracking_updates_stats_and_feed() {
        let app = app().await;
        let (status, record) = send(
            &app,
            "POST",
            "/api/v1/activity/resumes",
            Some(json!({"title": "Platform Engineer", "template": "classic"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record["type"], "resume_created");
        assert_eq!(record["resumeData"]["title"], "Platform Engineer");

        send(
            &app,
            "POST",
            "/api/v1/activity/time-spent",
            Some(json!({"feature": "resume_maker", "duration": 3})),
        )
        .await;

        let (_, stats) = send(&app, "GET", "/api/v1/activity/stats", None).await;
        assert_eq!(stats["resumesCreated"], 1);
        assert_eq!(stats["totalTimeSpent"], 3);
        assert_eq!(stats["favoriteFeatures"], json!(["resume_maker"]));

        let (_, feed) = send(&app, "GET", "/api/v1/activity/feed", None).await;
        assert_eq!(feed[1]["text"], "Created resume: Platform Engineer");
    }

    #[tokio::test]
    async fn test_log_is_capped_through_api() {
        let app = app().await;
        for page in ["A", "B", "C", "D", "E", "F"] {
            send(
                &app,
                "POST",
                "/api/v1/activity/page-visits",
                Some(json!({ "page": page })),
            )
            .await;
        }
        let (_, recent) = send(&app, "GET", "/api/v1/activity?limit=10", None).await;
        let pages: Vec<_> = recent
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["page"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(pages, vec!["F", "E", "D", "C", "B"]);
    }

    #[tokio::test]
    async fn test_filter_by_unknown_type_is_404() {
        let app = app().await;
        let (status, body) = send(&app, "GET", "/api/v1/activity/type/logged_in", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_clear_resets_dashboard() {
        let app = app().await;
        send(
            &app,
            "POST",
            "/api/v1/activity/interviews",
            Some(json!({"industry": "Finance", "position": "Analyst"})),
        )
        .await;
        let (status, _) = send(&app, "DELETE", "/api/v1/activity", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, dashboard) = send(&app, "GET", "/api/v1/dashboard", None).await;
        assert_eq!(dashboard["lastActive"], "Never");
        assert_eq!(dashboard["timeSpent"], "0m");
        assert_eq!(dashboard["quickActions"].as_array().unwrap().len(), 4);
        assert!(dashboard["recent"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_tracks_job_and_adds_quick_action() {
        let app = app().await;
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/applications",
            Some(json!({"company": "DeepData", "position": "Data Scientist"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, record) = send(
            &app,
            "POST",
            "/api/v1/applications",
            Some(json!({
                "company": "DeepData",
                "position": "Data Scientist",
                "resumeUsed": "Software Engineer Resume"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record["status"], "Applied");

        let (_, list) = send(&app, "GET", "/api/v1/applications", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (_, dashboard) = send(&app, "GET", "/api/v1/dashboard", None).await;
        assert_eq!(dashboard["stats"]["jobsApplied"], 1);
        assert_eq!(dashboard["quickActions"][4]["label"], "Applications");
        assert_eq!(
            dashboard["recent"][0]["text"],
            "Applied to Data Scientist at DeepData"
        );
    }

    #[tokio::test]
    async fn test_view_close_is_idempotent() {
        let app = app().await;
        let (status, opened) = send(
            &app,
            "POST",
            "/api/v1/views",
            Some(json!({"feature": "job_search"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = opened["viewId"].as_str().unwrap().to_string();

        let uri = format!("/api/v1/views/{id}");
        let (first, _) = send(&app, "DELETE", &uri, None).await;
        let (second, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(first, StatusCode::NO_CONTENT);
        assert_eq!(second, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_sidebar_toggle() {
        let app = app().await;
        let (_, pref) = send(&app, "GET", "/api/v1/preferences/sidebar", None).await;
        assert_eq!(pref["sidebarCollapsed"], false);

        let (_, pref) = send(&app, "POST", "/api/v1/preferences/sidebar/toggle", None).await;
        assert_eq!(pref["sidebarCollapsed"], true);

        let (status, pref) = send(
            &app,
            "PUT",
            "/api/v1/preferences/sidebar",
            Some(json!({"sidebarCollapsed": false})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(pref["sidebarCollapsed"], false);
    }

    #[tokio::test]
    async fn test_job_search_without_provider_uses_samples() {
        let app = app().await;
        let (status, page) = send(&app, "GET", "/api/v1/jobs?keyword=designer", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["source"], "sample");
        assert_eq!(page["jobs"][0]["company"], "CreativeStudio");
        assert_eq!(page["totalPages"], 1);
    }

    #[tokio::test]
    async fn test_interview_questions_track_practice() {
        let app = app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/interviews/questions",
            Some(json!({"company": "Google"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"].as_array().unwrap().len(), 8);
        assert_eq!(body["questions"][1], "Why are you interested in working at Google?");

        let uri = "/api/v1/activity/type/interview_practiced";
        let (_, tracked) = send(&app, "GET", uri, None).await;
        assert_eq!(tracked[0]["interviewData"]["industry"], "General");
        assert_eq!(tracked[0]["interviewData"]["position"], "General Role");

        let uri = "/api/v1/interviews/questions";
        let (status, body) = send(&app, "POST", uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generated_resume_is_previewed_and_tracked() {
        let app = app().await;
        let (status, _) = send(&app, "GET", "/api/v1/resumes/preview", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/resumes/generate",
            Some(json!({"name": "Ada", "jobTitle": "Data Scientist", "skills": "Python"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["resume"]["summary"]
            .as_str()
            .unwrap()
            .starts_with("Experienced Data Scientist"));

        let (_, preview) = send(&app, "GET", "/api/v1/resumes/preview", None).await;
        assert_eq!(preview["resume"]["workDesc"], body["resume"]["workDesc"]);

        let (_, feed) = send(&app, "GET", "/api/v1/activity/feed", None).await;
        assert_eq!(feed[0]["text"], "Created resume: Ada's AI Resume");
    }

    #[tokio::test]
    async fn test_saving_letter_without_details_uses_defaults() {
        let app = app().await;
        let (status, record) = send(&app, "POST", "/api/v1/cover-letters", Some(json!({}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record["type"], "cover_letter_generated");
        assert_eq!(record["letterData"]["company"], "Unknown Company");
        assert_eq!(record["letterData"]["position"], "Unknown Position");
    }
}
