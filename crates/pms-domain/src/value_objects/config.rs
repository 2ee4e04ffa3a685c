//! Configuration value objects
//!
//! Settings the application services receive through their
//! constructors. Infrastructure maps loaded configuration onto these.

use crate::constants::{
    SEARCH_DEFAULT_LIMIT, SEARCH_EMBED_TIMEOUT_MS, SEARCH_STORE_TIMEOUT_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search and indexing service configuration
///
/// Time budgets bound the two blocking steps of the pipeline: the
/// embedding provider call and vector store I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchServiceConfig {
    /// Number of results returned when the caller does not pass a limit
    pub default_limit: usize,
    /// Budget for one embedding provider call
    pub embed_timeout: Duration,
    /// Budget for one vector store read or write
    pub store_timeout: Duration,
}

impl Default for SearchServiceConfig {
    fn default() -> Self {
        Self {
            default_limit: SEARCH_DEFAULT_LIMIT,
            embed_timeout: Duration::from_millis(SEARCH_EMBED_TIMEOUT_MS),
            store_timeout: Duration::from_millis(SEARCH_STORE_TIMEOUT_MS),
        }
    }
}

impl SearchServiceConfig {
    /// Set the default result limit
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the embedding call budget
    pub fn with_embed_timeout(mut self, timeout: Duration) -> Self {
        self.embed_timeout = timeout;
        self
    }

    /// Set the vector store budget
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }
}
