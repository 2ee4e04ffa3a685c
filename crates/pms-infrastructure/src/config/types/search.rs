//! Search service configuration types

use pms_domain::constants::{SEARCH_DEFAULT_LIMIT, SEARCH_EMBED_TIMEOUT_MS, SEARCH_STORE_TIMEOUT_MS};
use pms_domain::value_objects::SearchServiceConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search configuration as written in the config file
///
/// Budgets are plain milliseconds here; [`SearchConfig::service_config`]
/// turns them into the value object the services take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Results returned when the caller passes no limit
    pub default_limit: usize,
    /// Budget for one embedding provider call
    pub embed_timeout_ms: u64,
    /// Budget for one vector store operation
    pub store_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: SEARCH_DEFAULT_LIMIT,
            embed_timeout_ms: SEARCH_EMBED_TIMEOUT_MS,
            store_timeout_ms: SEARCH_STORE_TIMEOUT_MS,
        }
    }
}

impl SearchConfig {
    /// Service configuration handed to the application layer
    pub fn service_config(&self) -> SearchServiceConfig {
        SearchServiceConfig::default()
            .with_default_limit(self.default_limit)
            .with_embed_timeout(Duration::from_millis(self.embed_timeout_ms))
            .with_store_timeout(Duration::from_millis(self.store_timeout_ms))
    }
}
