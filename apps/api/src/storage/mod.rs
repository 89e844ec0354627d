//! Key-value storage: string keys, JSON-encoded values.
//!
//! Two scopes are used by the service:
//! - a *local* store that outlives the process when file-backed (`DATA_DIR`),
//! - a *session* store that lives exactly as long as the process.
//!
//! Nothing outside this module touches the underlying files.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Local-store key holding the activity log.
pub const ACTIVITIES_KEY: &str = "userActivities";
/// Local-store key holding the sidebar preference.
pub const SIDEBAR_KEY: &str = "sidebarCollapsed";
/// Local-store key holding tracked job applications.
pub const APPLICATIONS_KEY: &str = "jobApplications";
/// Local-store key holding the last generated resume draft.
pub const RESUME_PREVIEW_KEY: &str = "aiResumePreview";
/// Session-store key marking that the current session already started.
pub const SESSION_MARKER_KEY: &str = "sessionStarted";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key '{0}'")]
    InvalidKey(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and decodes a JSON value. `Ok(None)` when the key is absent.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub async fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}
