//! Display helpers for the dashboard widgets: recent activity lines, stat
//! formatting and the quick-action list.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::activity::models::{ActivityRecord, ActivityType};
use crate::activity::stats::Stats;

/// The recent-activity panel shows at most this many lines.
pub const FEED_DISPLAY_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeedItem {
    pub id: uuid::Uuid,
    pub icon: &'static str,
    pub text: String,
    pub time_ago: String,
}

pub fn feed_items(activities: &[ActivityRecord], now: DateTime<Utc>) -> Vec<FeedItem> {
    activities
        .iter()
        .take(FEED_DISPLAY_LIMIT)
        .map(|a| FeedItem {
            id: a.id,
            icon: icon(a.kind),
            text: describe(a),
            time_ago: format_time_ago(a.timestamp, now),
        })
        .collect()
}

pub fn icon(kind: ActivityType) -> &'static str {
    match kind {
        ActivityType::ResumeCreated => "📄",
        ActivityType::CoverLetterGenerated => "✉️",
        ActivityType::JobApplied => "💼",
        ActivityType::InterviewPracticed => "🎯",
        ActivityType::PageVisited => "👁️",
        ActivityType::TimeSpent => "📝",
    }
}

/// One-line description, with placeholders for missing payload fields.
pub fn describe(activity: &ActivityRecord) -> String {
    let d = &activity.details;
    match activity.kind {
        ActivityType::ResumeCreated => {
            let title = d.resume_data.as_ref().and_then(|r| r.title.as_deref());
            format!("Created resume: {}", title.unwrap_or("Untitled"))
        }
        ActivityType::CoverLetterGenerated => {
            let company = d.letter_data.as_ref().and_then(|l| l.company.as_deref());
            format!("Generated cover letter for {}", company.unwrap_or("Company"))
        }
        ActivityType::JobApplied => {
            let job = d.job_data.as_ref();
            let position = job.and_then(|j| j.position.as_deref());
            let company = job.and_then(|j| j.company.as_deref());
            format!(
                "Applied to {} at {}",
                position.unwrap_or("Position"),
                company.unwrap_or("Company")
            )
        }
        ActivityType::InterviewPracticed => {
            let position = d.interview_data.as_ref().and_then(|i| i.position.as_deref());
            format!("Practiced interview for {}", position.unwrap_or("Position"))
        }
        ActivityType::PageVisited => {
            format!("Visited {}", d.page.as_deref().unwrap_or("Unknown"))
        }
        ActivityType::TimeSpent => "Activity recorded".to_string(),
    }
}

fn minutes_since(ts: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - ts).num_minutes()
}

/// Compact relative time: `Just now`, `5m ago`, `3h ago`, `2d ago`.
pub fn format_time_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match minutes_since(ts, now) {
        m if m < 1 => "Just now".to_string(),
        m if m < 60 => format!("{m}m ago"),
        m if m < 1440 => format!("{}h ago", m / 60),
        m => format!("{}d ago", m / 1440),
    }
}

pub fn format_last_active(ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = ts else {
        return "Never".to_string();
    };
    match minutes_since(ts, now) {
        m if m < 1 => "Just now".to_string(),
        m if m < 60 => format!("{m} minutes ago"),
        m if m < 1440 => format!("{} hours ago", m / 60),
        m => format!("{} days ago", m / 1440),
    }
}

pub fn format_time_spent(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    match minutes % 60 {
        0 => format!("{hours}h"),
        rest => format!("{hours}h {rest}m"),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

const CORE_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Create Resume",
        icon: "📄",
        path: "/resume-maker-page",
    },
    QuickAction {
        label: "Generate Cover Letter",
        icon: "✉️",
        path: "/cover-letter-maker-page",
    },
    QuickAction {
        label: "Search Jobs",
        icon: "💼",
        path: "/job-search",
    },
    QuickAction {
        label: "Practice Interview",
        icon: "🎯",
        path: "/interviews",
    },
];

/// Core actions, plus shortcuts to things the user has already produced.
pub fn quick_actions(stats: &Stats) -> Vec<QuickAction> {
    let mut actions = CORE_ACTIONS.to_vec();
    if stats.resumes_created > 0 {
        actions.push(QuickAction {
            label: "View Resumes",
            icon: "📋",
            path: "/resume",
        });
    }
    if stats.cover_letters_generated > 0 {
        actions.push(QuickAction {
            label: "View Cover Letters",
            icon: "📝",
            path: "/cover_letter",
        });
    }
    if stats.jobs_applied > 0 {
        actions.push(QuickAction {
            label: "Applications",
            icon: "📊",
            path: "/applications",
        });
    }
    actions
}
