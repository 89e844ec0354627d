use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::models::{ActivityRecord, ActivityType};

const MAX_FAVORITE_FEATURES: usize = 3;

/// Aggregate counters derived from the activity log. Never stored: every read
/// recomputes it from the current log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub resumes_created: usize,
    pub cover_letters_generated: usize,
    pub jobs_applied: usize,
    pub interviews_practiced: usize,
    pub last_active: Option<DateTime<Utc>>,
    /// Minutes.
    pub total_time_spent: u64,
    pub favorite_features: Vec<String>,
}

/// Derives `Stats` from a most-recent-first log.
pub fn compute_stats(activities: &[ActivityRecord]) -> Stats {
    let count = |kind: ActivityType| activities.iter().filter(|a| a.kind == kind).count();

    Stats {
        resumes_created: count(ActivityType::ResumeCreated),
        cover_letters_generated: count(ActivityType::CoverLetterGenerated),
        jobs_applied: count(ActivityType::JobApplied),
        interviews_practiced: count(ActivityType::InterviewPracticed),
        last_active: activities.first().map(|a| a.timestamp),
        total_time_spent: activities
            .iter()
            .map(|a| a.details.duration.unwrap_or(0))
            .sum(),
        favorite_features: favorite_features(activities),
    }
}

/// Top feature labels by frequency. The scan runs oldest-first, so ties keep
/// the order in which the labels were first recorded.
fn favorite_features(activities: &[ActivityRecord]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for feature in activities.iter().rev().filter_map(|a| a.feature()) {
        match counts.iter_mut().find(|(f, _)| *f == feature) {
            Some((_, n)) => *n += 1,
            None => counts.push((feature, 1)),
        }
    }
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_FAVORITE_FEATURES)
        .map(|(f, _)| f.to_string())
        .collect()
}
