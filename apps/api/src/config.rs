use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::activity::DEFAULT_SAMPLE_INTERVAL;
use crate::jobs::adzuna::DEFAULT_BASE_URL;

/// Adzuna credentials. Present only when both id and key are configured.
#[derive(Debug, Clone)]
pub struct AdzunaCredentials {
    pub app_id: String,
    pub app_key: String,
}

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment runs an in-memory
/// service with sample job data.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub data_dir: Option<PathBuf>,
    pub sampler_interval: Duration,
    pub adzuna: Option<AdzunaCredentials>,
    pub adzuna_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let sampler_interval = match optional_env("SAMPLER_INTERVAL_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .context("SAMPLER_INTERVAL_SECS must be a whole number of seconds")?;
                anyhow::ensure!(secs > 0, "SAMPLER_INTERVAL_SECS must be greater than zero");
                Duration::from_secs(secs)
            }
            None => DEFAULT_SAMPLE_INTERVAL,
        };

        let adzuna = match (optional_env("ADZUNA_APP_ID"), optional_env("ADZUNA_APP_KEY")) {
            (Some(app_id), Some(app_key)) => Some(AdzunaCredentials { app_id, app_key }),
            _ => None,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_dir: optional_env("DATA_DIR").map(PathBuf::from),
            sampler_interval,
            adzuna,
            adzuna_base_url: optional_env("ADZUNA_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

/// Unset and blank variables both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
