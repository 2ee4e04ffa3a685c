//! Provider configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Embedding provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingProviderConfig {
    /// Provider name (openai, ollama, null)
    pub provider: String,
    /// Model name, provider default when unset
    pub model: Option<String>,
    /// Base URL for the API, provider default when unset
    pub base_url: Option<String>,
    /// API key (required by openai)
    pub api_key: Option<String>,
    /// Vector length, provider default when unset
    pub dimensions: Option<usize>,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingProviderConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
            dimensions: None,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}

/// Vector store provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreProviderConfig {
    /// Provider name (memory, filesystem)
    pub provider: String,
    /// Record file location for the filesystem store
    pub path: Option<PathBuf>,
}

impl Default for VectorStoreProviderConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_VECTOR_STORE_PROVIDER.to_string(),
            path: Some(PathBuf::from(DEFAULT_VECTOR_STORE_PATH)),
        }
    }
}

/// Provider configurations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingProviderConfig,
    /// Vector store provider configuration
    #[serde(default)]
    pub vector_store: VectorStoreProviderConfig,
}
