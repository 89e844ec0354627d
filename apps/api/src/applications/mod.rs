pub mod handlers;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::activity::models::JobData;
use crate::activity::store::ActivityStore;
use crate::errors::AppError;
use crate::storage::{self, KeyValueStore, APPLICATIONS_KEY};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    Hired,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub company: String,
    #[serde(alias = "title")]
    pub position: String,
    pub status: ApplicationStatus,
    #[serde(alias = "dateApplied", deserialize_with = "deserialize_applied_date")]
    pub applied_date: DateTime<Utc>,
    #[serde(default)]
    pub resume_used: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<String>,
}

/// Accepts RFC 3339 timestamps and date-only values (`2025-06-01`, read as midnight UTC).
fn deserialize_applied_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_applied_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid appliedDate '{raw}'")))
}

fn parse_applied_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub resume_used: String,
}

/// Job applications persisted under `jobApplications`, oldest first.
#[derive(Clone)]
pub struct ApplicationsStore {
    local: Arc<dyn KeyValueStore>,
    activity: ActivityStore,
    // serialises read-modify-write of the stored array
    write_lock: Arc<Mutex<()>>,
}

impl ApplicationsStore {
    pub fn new(local: Arc<dyn KeyValueStore>, activity: ActivityStore) -> Self {
        Self {
            local,
            activity,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Stored applications; unreadable data reads as none.
    pub async fn list(&self) -> Vec<ApplicationRecord> {
        match storage::get_json::<Vec<ApplicationRecord>>(self.local.as_ref(), APPLICATIONS_KEY)
            .await
        {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                warn!("Stored applications unreadable: {e}");
                Vec::new()
            }
        }
    }

    /// Records an application and tracks a `job_applied` activity.
    ///
    /// Stored data that cannot be read fails the request and is left untouched.
    pub async fn apply(&self, req: ApplyRequest) -> Result<ApplicationRecord, AppError> {
        if req.resume_used.trim().is_empty() {
            return Err(AppError::Validation(
                "Please select a resume before applying.".to_string(),
            ));
        }

        let record = ApplicationRecord {
            company: req.company,
            position: req.position,
            status: ApplicationStatus::Applied,
            applied_date: Utc::now(),
            resume_used: req.resume_used,
            interview_date: None,
        };

        {
            let _guard = self.write_lock.lock().await;
            let mut records: Vec<ApplicationRecord> =
                storage::get_json(self.local.as_ref(), APPLICATIONS_KEY)
                    .await?
                    .unwrap_or_default();
            records.push(record.clone());
            storage::set_json(self.local.as_ref(), APPLICATIONS_KEY, &records).await?;
        }
        info!(
            "Application recorded: {} at {}",
            record.position, record.company
        );

        self.activity
            .track_job_applied(JobData {
                company: Some(record.company.clone()),
                position: Some(record.position.clone()),
            })
            .await;

        Ok(record)
    }
}
