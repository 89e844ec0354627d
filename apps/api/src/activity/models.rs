use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    PageVisited,
    ResumeCreated,
    CoverLetterGenerated,
    JobApplied,
    InterviewPracticed,
    TimeSpent,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::PageVisited => "page_visited",
            ActivityType::ResumeCreated => "resume_created",
            ActivityType::CoverLetterGenerated => "cover_letter_generated",
            ActivityType::JobApplied => "job_applied",
            ActivityType::InterviewPracticed => "interview_practiced",
            ActivityType::TimeSpent => "time_spent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "page_visited" => Some(ActivityType::PageVisited),
            "resume_created" => Some(ActivityType::ResumeCreated),
            "cover_letter_generated" => Some(ActivityType::CoverLetterGenerated),
            "job_applied" => Some(ActivityType::JobApplied),
            "interview_practiced" => Some(ActivityType::InterviewPracticed),
            "time_spent" => Some(ActivityType::TimeSpent),
            _ => None,
        }
    }
}

/// Feature labels attached by the typed tracking helpers.
pub mod features {
    pub const RESUME_MAKER: &str = "resume_maker";
    pub const COVER_LETTER_MAKER: &str = "cover_letter_maker";
    pub const JOB_SEARCH: &str = "job_search";
    pub const INTERVIEW_PRACTICE: &str = "interview_practice";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LetterData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InterviewData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Optional payload merged into a record at append time.
/// Every field may be missing; display code substitutes placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_data: Option<ResumeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_data: Option<LetterData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_data: Option<JobData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_data: Option<InterviewData>,
    /// Whole minutes, `time_spent` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl ActivityDetails {
    pub fn with_feature(feature: impl Into<String>) -> Self {
        Self {
            feature: Some(feature.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub details: ActivityDetails,
}

impl ActivityRecord {
    /// Stamps a new record with a fresh id and the current time.
    pub fn new(kind: ActivityType, details: ActivityDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            timestamp: Utc::now(),
            details,
        }
    }

    pub fn feature(&self) -> Option<&str> {
        self.details.feature.as_deref()
    }
}
