// Job search: a passthrough to a public listings provider, with a built-in
// sample catalogue whenever the provider is unconfigured, failing, or empty.

pub mod adzuna;
pub mod catalogue;
pub mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub use adzuna::AdzunaProvider;

pub const RESULTS_PER_PAGE: u32 = 20;
pub const NO_MATCH_NOTICE: &str = "No jobs found matching your criteria. Showing sample data.";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobQuery {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl JobQuery {
    pub fn keyword(&self) -> Option<&str> {
        non_blank(self.keyword.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.keyword().is_none() && self.location().is_none()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum JobSource {
    Provider,
    Sample,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total_results: u64,
    pub total_pages: u32,
    pub source: JobSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// A listings backend. Implement to swap providers without touching handlers.
#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn search(&self, query: &JobQuery) -> Result<JobPage, JobSearchError>;
}

#[derive(Clone)]
pub struct JobSearchService {
    provider: Option<Arc<dyn JobProvider>>,
}

impl JobSearchService {
    pub fn new(provider: Option<Arc<dyn JobProvider>>) -> Self {
        Self { provider }
    }

    /// Never fails: provider problems degrade to sample data.
    pub async fn search(&self, query: &JobQuery) -> JobPage {
        if query.is_empty() {
            return catalogue::sample_page(catalogue::sample_jobs(), None);
        }

        if let Some(provider) = &self.provider {
            match provider.search(query).await {
                Ok(page) if !page.jobs.is_empty() => {
                    info!(
                        "Job search returned {} of {} result(s)",
                        page.jobs.len(),
                        page.total_results
                    );
                    return page;
                }
                Ok(_) => info!("Job provider returned no results, using samples"),
                Err(e) => warn!("Job provider failed, using samples: {e}"),
            }
        }

        let matches = catalogue::filter(query.keyword(), query.location());
        let jobs = if matches.is_empty() {
            catalogue::sample_jobs()
        } else {
            matches
        };
        catalogue::sample_page(jobs, Some(NO_MATCH_NOTICE.to_string()))
    }
}
