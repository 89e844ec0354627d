use std::sync::Arc;
use std::time::Duration;

use crate::activity::{ActivityStore, SamplerRegistry};
use crate::applications::ApplicationsStore;
use crate::jobs::JobSearchService;
use crate::storage::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Local key-value store (file-backed when `DATA_DIR` is set).
    pub local: Arc<dyn KeyValueStore>,
    /// The single writer of `userActivities`.
    pub activity: ActivityStore,
    /// Open feature views, each with its own time sampler.
    pub views: SamplerRegistry,
    pub applications: ApplicationsStore,
    pub jobs: JobSearchService,
}

impl AppState {
    /// Initialises the activity log for this session and wires its dependents.
    pub async fn build(
        local: Arc<dyn KeyValueStore>,
        session: &dyn KeyValueStore,
        sampler_interval: Duration,
        jobs: JobSearchService,
    ) -> Self {
        let activity = ActivityStore::initialize(local.clone(), session).await;
        Self {
            views: SamplerRegistry::new(activity.clone(), sampler_interval),
            applications: ApplicationsStore::new(local.clone(), activity.clone()),
            activity,
            local,
            jobs,
        }
    }
}
