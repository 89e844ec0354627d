//! Adzuna listings provider. Credentials stay on the server; clients only see
//! the normalised `JobPage`.
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::jobs::{Job, JobPage, JobProvider, JobQuery, JobSearchError, JobSource, RESULTS_PER_PAGE};

pub const DEFAULT_BASE_URL: &str = "https://api.adzuna.com";
const COUNTRY: &str = "gb";

#[derive(Debug, Deserialize)]
struct AdzunaResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
    #[serde(default)]
    count: u64,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: Option<DisplayName>,
    #[serde(default)]
    location: Option<DisplayName>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    redirect_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DisplayName {
    display_name: Option<String>,
}

fn display(name: Option<DisplayName>, fallback: &str) -> String {
    name.and_then(|n| n.display_name)
        .unwrap_or_else(|| fallback.to_string())
}

impl AdzunaResponse {
    fn into_page(self) -> JobPage {
        let total_pages = self.count.div_ceil(u64::from(RESULTS_PER_PAGE)).max(1);
        JobPage {
            jobs: self
                .results
                .into_iter()
                .map(|j| Job {
                    title: j.title,
                    company: display(j.company, "Unknown"),
                    location: display(j.location, "Unknown"),
                    description: j.description,
                    url: j.redirect_url,
                })
                .collect(),
            total_results: self.count,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
            source: JobSource::Provider,
            notice: None,
        }
    }
}

#[derive(Clone)]
pub struct AdzunaProvider {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl AdzunaProvider {
    pub fn new(base_url: String, app_id: String, app_key: String) -> Result<Self, JobSearchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id,
            app_key,
        })
    }

    fn search_url(&self, page: u32) -> String {
        format!("{}/v1/api/jobs/{COUNTRY}/search/{page}", self.base_url)
    }
}

#[async_trait]
impl JobProvider for AdzunaProvider {
    async fn search(&self, query: &JobQuery) -> Result<JobPage, JobSearchError> {
        let mut params = vec![
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
            ("results_per_page", RESULTS_PER_PAGE.to_string()),
        ];
        if let Some(keyword) = query.keyword() {
            params.push(("what", keyword.to_string()));
        }
        if let Some(location) = query.location() {
            params.push(("where", location.to_string()));
        }

        let response = self
            .client
            .get(self.search_url(query.page()))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobSearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: AdzunaResponse = response.json().await?;
        debug!("Adzuna returned {} result(s) of {}", body.results.len(), body.count);
        Ok(body.into_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_includes_page() {
        let provider = AdzunaProvider::new(
            "https://api.adzuna.com/".to_string(),
            "id".to_string(),
            "key".to_string(),
        )
        .unwrap();
        assert_eq!(
            provider.search_url(3),
            "https://api.adzuna.com/v1/api/jobs/gb/search/3"
        );
    }

    #[test]
    fn test_response_mapping() {
        let raw = r#"{
            "count": 45,
            "results": [
                {
                    "title": "Rust Developer",
                    "company": {"display_name": "Ferrous Ltd"},
                    "location": {"display_name": "London"},
                    "description": "Build services",
                    "redirect_url": "https://adzuna.example/1"
                },
                {"title": "Intern"}
            ]
        }"#;
        let page = serde_json::from_str::<AdzunaResponse>(raw).unwrap().into_page();
        assert_eq!(page.total_results, 45);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.jobs[0].company, "Ferrous Ltd");
        assert_eq!(page.jobs[1].company, "Unknown");
        assert!(page.jobs[1].url.is_none());
    }

    #[test]
    fn test_empty_response_has_one_page() {
        let page = serde_json::from_str::<AdzunaResponse>("{}").unwrap().into_page();
        assert!(page.jobs.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
