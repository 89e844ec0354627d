use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;
use crate::storage::{self, KeyValueStore, SIDEBAR_KEY};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SidebarPreference {
    pub sidebar_collapsed: bool,
}

/// Expanded (`false`) unless a readable value was stored.
pub async fn sidebar_collapsed(local: &dyn KeyValueStore) -> bool {
    match storage::get_json::<bool>(local, SIDEBAR_KEY).await {
        Ok(value) => value.unwrap_or(false),
        Err(e) => {
            warn!("Stored sidebar preference unreadable: {e}");
            false
        }
    }
}

pub async fn set_sidebar_collapsed(
    local: &dyn KeyValueStore,
    collapsed: bool,
) -> Result<(), AppError> {
    storage::set_json(local, SIDEBAR_KEY, &collapsed).await?;
    Ok(())
}

/// GET /api/v1/preferences/sidebar
pub async fn handle_get_sidebar(State(state): State<AppState>) -> Json<SidebarPreference> {
    Json(SidebarPreference {
        sidebar_collapsed: sidebar_collapsed(state.local.as_ref()).await,
    })
}

/// PUT /api/v1/preferences/sidebar
pub async fn handle_set_sidebar(
    State(state): State<AppState>,
    Json(req): Json<SidebarPreference>,
) -> Result<Json<SidebarPreference>, AppError> {
    set_sidebar_collapsed(state.local.as_ref(), req.sidebar_collapsed).await?;
    Ok(Json(req))
}

/// POST /api/v1/preferences/sidebar/toggle
pub async fn handle_toggle_sidebar(
    State(state): State<AppState>,
) -> Result<Json<SidebarPreference>, AppError> {
    let collapsed = !sidebar_collapsed(state.local.as_ref()).await;
    set_sidebar_collapsed(state.local.as_ref(), collapsed).await?;
    Ok(Json(SidebarPreference {
        sidebar_collapsed: collapsed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_defaults_to_expanded() {
        let store = MemoryStore::new();
        assert!(!sidebar_collapsed(&store).await);
    }

    #[tokio::test]
    async fn test_set_is_persisted_as_json_bool() {
        let store = MemoryStore::new();
        set_sidebar_collapsed(&store, true).await.unwrap();
        assert!(sidebar_collapsed(&store).await);
        assert_eq!(store.get(SIDEBAR_KEY).await.unwrap().as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_garbage_reads_as_expanded() {
        let store = MemoryStore::new();
        store.set(SIDEBAR_KEY, "maybe").await.unwrap();
        assert!(!sidebar_collapsed(&store).await);
    }
}
