use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::activity::models::{
    features, ActivityDetails, ActivityRecord, ActivityType, InterviewData, JobData, LetterData,
    ResumeData,
};
use crate::activity::stats::{compute_stats, Stats};
use crate::storage::{self, KeyValueStore, ACTIVITIES_KEY, SESSION_MARKER_KEY};

/// Hard cap on retained records. Oldest are evicted first.
pub const MAX_ACTIVITIES: usize = 5;
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Bounded, most-recent-first activity log persisted under `userActivities`.
///
/// All mutation goes through `append` and `clear`, which hold the write lock
/// across the in-memory update and the persistence write. Storage failures are
/// logged and absorbed; tracking never fails the caller.
#[derive(Clone)]
pub struct ActivityStore {
    local: Arc<dyn KeyValueStore>,
    activities: Arc<RwLock<Vec<ActivityRecord>>>,
}

impl ActivityStore {
    /// Loads the log for the current session.
    ///
    /// A session store without the marker means a new session: the persisted
    /// log is dropped and the marker is written. Otherwise the persisted log is
    /// loaded, with unreadable data treated as an empty log.
    pub async fn initialize(local: Arc<dyn KeyValueStore>, session: &dyn KeyValueStore) -> Self {
        let session_started = match session.get(SESSION_MARKER_KEY).await {
            Ok(marker) => marker.is_some(),
            Err(e) => {
                warn!("Could not read session marker, starting fresh: {e}");
                false
            }
        };

        let mut activities = if session_started {
            load_activities(local.as_ref()).await
        } else {
            info!("New session: clearing persisted activity log");
            if let Err(e) = session.set(SESSION_MARKER_KEY, "true").await {
                warn!("Failed to write session marker: {e}");
            }
            if let Err(e) = local.remove(ACTIVITIES_KEY).await {
                warn!("Failed to clear persisted activity log: {e}");
            }
            Vec::new()
        };
        activities.truncate(MAX_ACTIVITIES);

        persist(local.as_ref(), &activities).await;
        info!("Activity store ready with {} record(s)", activities.len());

        Self {
            local,
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Records a new activity at the head of the log and persists the log.
    pub async fn append(&self, kind: ActivityType, details: ActivityDetails) -> ActivityRecord {
        let record = ActivityRecord::new(kind, details);
        let mut activities = self.activities.write().await;
        activities.insert(0, record.clone());
        activities.truncate(MAX_ACTIVITIES);
        persist(self.local.as_ref(), &activities).await;
        debug!(
            "Tracked {} (feature: {:?})",
            kind.as_str(),
            record.feature()
        );
        record
    }

    pub async fn track_page_visit(&self, page: impl Into<String>) -> ActivityRecord {
        let details = ActivityDetails {
            page: Some(page.into()),
            ..ActivityDetails::default()
        };
        self.append(ActivityType::PageVisited, details).await
    }

    pub async fn track_resume_created(&self, resume: ResumeData) -> ActivityRecord {
        let details = ActivityDetails {
            resume_data: Some(resume),
            ..ActivityDetails::with_feature(features::RESUME_MAKER)
        };
        self.append(ActivityType::ResumeCreated, details).await
    }

    pub async fn track_cover_letter_generated(&self, letter: LetterData) -> ActivityRecord {
        let details = ActivityDetails {
            letter_data: Some(letter),
            ..ActivityDetails::with_feature(features::COVER_LETTER_MAKER)
        };
        self.append(ActivityType::CoverLetterGenerated, details).await
    }

    pub async fn track_job_applied(&self, job: JobData) -> ActivityRecord {
        let details = ActivityDetails {
            job_data: Some(job),
            ..ActivityDetails::with_feature(features::JOB_SEARCH)
        };
        self.append(ActivityType::JobApplied, details).await
    }

    pub async fn track_interview_practiced(&self, interview: InterviewData) -> ActivityRecord {
        let details = ActivityDetails {
            interview_data: Some(interview),
            ..ActivityDetails::with_feature(features::INTERVIEW_PRACTICE)
        };
        self.append(ActivityType::InterviewPracticed, details).await
    }

    pub async fn track_time_spent(
        &self,
        feature: impl Into<String>,
        minutes: u64,
    ) -> ActivityRecord {
        let details = ActivityDetails {
            duration: Some(minutes),
            ..ActivityDetails::with_feature(feature)
        };
        self.append(ActivityType::TimeSpent, details).await
    }

    /// The `limit` most recent records.
    pub async fn recent(&self, limit: usize) -> Vec<ActivityRecord> {
        self.activities
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn by_type(&self, kind: ActivityType) -> Vec<ActivityRecord> {
        self.activities
            .read()
            .await
            .iter()
            .filter(|a| a.kind == kind)
            .cloned()
            .collect()
    }

    pub async fn by_feature(&self, feature: &str) -> Vec<ActivityRecord> {
        self.activities
            .read()
            .await
            .iter()
            .filter(|a| a.feature() == Some(feature))
            .cloned()
            .collect()
    }

    pub async fn snapshot(&self) -> Vec<ActivityRecord> {
        self.activities.read().await.clone()
    }

    pub async fn stats(&self) -> Stats {
        compute_stats(&self.activities.read().await)
    }

    pub async fn clear(&self) {
        let mut activities = self.activities.write().await;
        activities.clear();
        persist(self.local.as_ref(), &activities).await;
        info!("Activity log cleared");
    }
}

async fn load_activities(local: &dyn KeyValueStore) -> Vec<ActivityRecord> {
    match storage::get_json::<Vec<ActivityRecord>>(local, ACTIVITIES_KEY).await {
        Ok(Some(activities)) => activities,
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Persisted activity log unreadable, starting empty: {e}");
            Vec::new()
        }
    }
}

async fn persist(local: &dyn KeyValueStore, activities: &[ActivityRecord]) {
    if let Err(e) = storage::set_json(local, ACTIVITIES_KEY, activities).await {
        warn!("Failed to persist activity log: {e}");
    }
}
