//! Time-on-feature sampling.
//!
//! A sampler lives as long as a client keeps a feature view open. Every tick it
//! reports the whole minutes elapsed *since the view opened* (cumulative, not a
//! delta), and reports once more when stopped.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::activity::models::ActivityRecord;
use crate::activity::store::ActivityStore;
use crate::errors::AppError;

pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(30);

/// Views open at once across all clients.
pub const MAX_OPEN_VIEWS: usize = 256;

/// A view still open after this long is closed as if the client had left.
pub const MAX_VIEW_LIFETIME: Duration = Duration::from_secs(4 * 60 * 60);

struct Running {
    task: JoinHandle<()>,
}

pub struct ActivitySampler {
    feature: String,
    store: ActivityStore,
    started_at: Instant,
    cancel: CancellationToken,
    running: Mutex<Option<Running>>,
}

impl ActivitySampler {
    /// Starts measuring from now and spawns the recurring tick.
    pub fn start(store: ActivityStore, feature: impl Into<String>, interval: Duration) -> Self {
        let feature = feature.into();
        let started_at = Instant::now();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_ticks(
            store.clone(),
            feature.clone(),
            started_at,
            interval,
            cancel.clone(),
        ));
        debug!("Sampler started for {feature} every {interval:?}");
        Self {
            feature,
            store,
            started_at,
            cancel,
            running: Mutex::new(Some(Running { task })),
        }
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn elapsed_minutes(&self) -> u64 {
        whole_minutes(self.started_at.elapsed())
    }

    /// Cancels the tick and reports the final elapsed time.
    ///
    /// Returns the final `time_spent` record, or `None` when less than a minute
    /// elapsed or the sampler was already stopped.
    pub async fn stop(&self) -> Option<ActivityRecord> {
        let running = self.running.lock().await.take()?;
        self.cancel.cancel();
        if let Err(e) = running.task.await {
            warn!("Sampler task for {} ended abnormally: {e}", self.feature);
        }

        let minutes = self.elapsed_minutes();
        debug!("Sampler stopped for {} after {minutes}m", self.feature);
        if minutes == 0 {
            return None;
        }
        Some(self.store.track_time_spent(self.feature.as_str(), minutes).await)
    }

    /// Resolves once the sampler has been stopped or dropped.
    pub async fn stopped(&self) {
        self.cancel.cancelled().await
    }
}

impl Drop for ActivitySampler {
    // Dropping without `stop` halts ticking but records no final sample.
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_ticks(
    store: ActivityStore,
    feature: String,
    started_at: Instant,
    interval: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval_at(started_at + interval, interval);
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                let minutes = whole_minutes(started_at.elapsed());
                if minutes > 0 {
                    store.track_time_spent(feature.as_str(), minutes).await;
                }
            }
        }
    }
}

fn whole_minutes(elapsed: Duration) -> u64 {
    elapsed.as_secs() / 60
}

/// Open feature views, keyed by the id handed back to the client.
#[derive(Clone)]
pub struct SamplerRegistry {
    store: ActivityStore,
    interval: Duration,
    samplers: Arc<Mutex<HashMap<Uuid, Arc<ActivitySampler>>>>,
}

impl SamplerRegistry {
    pub fn new(store: ActivityStore, interval: Duration) -> Self {
        Self {
            store,
            interval,
            samplers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Starts sampling a view. Fails once `MAX_OPEN_VIEWS` are open; each view
    /// is closed automatically after `MAX_VIEW_LIFETIME`.
    pub async fn open(&self, feature: &str) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let sampler = {
            let mut samplers = self.samplers.lock().await;
            if samplers.len() >= MAX_OPEN_VIEWS {
                warn!("Refusing view for {feature}: {MAX_OPEN_VIEWS} views already open");
                return Err(AppError::Validation(format!(
                    "Too many open views (limit {MAX_OPEN_VIEWS})"
                )));
            }
            let sampler = Arc::new(ActivitySampler::start(
                self.store.clone(),
                feature,
                self.interval,
            ));
            samplers.insert(id, sampler.clone());
            sampler
        };
        info!("Opened view {id} for feature {feature}");

        let registry = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = sampler.stopped() => {}
                _ = tokio::time::sleep(MAX_VIEW_LIFETIME) => {
                    info!("View {id} expired after {MAX_VIEW_LIFETIME:?}");
                    registry.close(id).await;
                }
            }
        });
        Ok(id)
    }

    /// Stops and forgets a view. Unknown or already-closed ids are a no-op.
    pub async fn close(&self, id: Uuid) -> Option<ActivityRecord> {
        let sampler = self.samplers.lock().await.remove(&id)?;
        info!("Closed view {id} for feature {}", sampler.feature());
        sampler.stop().await
    }

    pub async fn active_count(&self) -> usize {
        self.samplers.lock().await.len()
    }

    /// Stops every open view, recording final samples. Used on shutdown.
    pub async fn close_all(&self) {
        let samplers: Vec<_> = self.samplers.lock().await.drain().collect();
        for (_, sampler) in samplers {
            sampler.stop().await;
        }
    }
}
