//! Provider Factory
//!
//! Builds embedding and vector store providers from configuration. All
//! provider implementations come from `pms-providers`; this module only
//! does the wiring.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use pms_domain::error::{Error, Result};
use pms_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};
use pms_providers::constants::{OLLAMA_DEFAULT_MODEL, OPENAI_DEFAULT_MODEL};
use pms_providers::embedding::helpers::build_http_client;
use pms_providers::embedding::{
    NullEmbeddingProvider, OllamaEmbeddingProvider, OpenAIEmbeddingProvider,
};
use pms_providers::vector_store::{
    FilesystemVectorStore, FilesystemVectorStoreConfig, InMemoryVectorStoreProvider,
};
use reqwest::Client;
use tracing::debug;

use crate::config::{EmbeddingProviderConfig, VectorStoreProviderConfig};
use crate::constants::{embedding_providers, vector_store_providers};

/// Factory for creating embedding providers
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create an embedding provider based on configuration
    ///
    /// The `http_client` parameter is optional. If not provided, a client
    /// with the configured timeout is created for providers that need HTTP.
    pub fn create(
        config: &EmbeddingProviderConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let provider_name = config.provider.to_lowercase();
        debug!(provider = %provider_name, "Creating embedding provider");

        match provider_name.as_str() {
            embedding_providers::NULL => Ok(Arc::new(match config.dimensions {
                Some(dimensions) => NullEmbeddingProvider::with_dimensions(dimensions),
                None => NullEmbeddingProvider::new(),
            })),
            embedding_providers::OPENAI => Self::create_openai(config, http_client),
            embedding_providers::OLLAMA => Self::create_ollama(config, http_client),
            _ => Err(Error::Configuration {
                message: format!("Unknown embedding provider: {}", config.provider),
                source: None,
            }),
        }
    }

    fn create_openai(
        config: &EmbeddingProviderConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let timeout = Self::timeout(config);
        let client = Self::require_http_client(http_client, timeout)?;
        let api_key = Self::require_api_key(config, "OpenAI")?;
        let provider = OpenAIEmbeddingProvider::new(
            api_key,
            config.base_url.clone(),
            config
                .model
                .clone()
                .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string()),
            timeout,
            client,
        );
        Ok(match config.dimensions {
            Some(dimensions) => Arc::new(provider.with_dimensions(dimensions)),
            None => Arc::new(provider),
        })
    }

    fn create_ollama(
        config: &EmbeddingProviderConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let timeout = Self::timeout(config);
        let client = Self::require_http_client(http_client, timeout)?;
        let provider = OllamaEmbeddingProvider::new(
            config.base_url.clone().unwrap_or_default(),
            config
                .model
                .clone()
                .unwrap_or_else(|| OLLAMA_DEFAULT_MODEL.to_string()),
            timeout,
            client,
        );
        Ok(match config.dimensions {
            Some(dimensions) => Arc::new(provider.with_dimensions(dimensions)),
            None => Arc::new(provider),
        })
    }

    fn timeout(config: &EmbeddingProviderConfig) -> Duration {
        Duration::from_secs(config.timeout_secs)
    }

    fn require_http_client(client: Option<Client>, timeout: Duration) -> Result<Client> {
        client.map_or_else(|| build_http_client(timeout), Ok)
    }

    fn require_api_key(config: &EmbeddingProviderConfig, provider: &str) -> Result<String> {
        config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Configuration {
                message: format!("{provider} embedding provider requires an API key"),
                source: None,
            })
    }
}

/// Factory for creating vector store providers
pub struct VectorStoreProviderFactory;

impl VectorStoreProviderFactory {
    /// Create a vector store provider based on configuration
    ///
    /// Opening a filesystem store loads its record file, so this fails with
    /// a store initialization error when existing data cannot be read.
    pub async fn create(config: &VectorStoreProviderConfig) -> Result<Arc<dyn VectorStoreProvider>> {
        let provider_name = config.provider.to_lowercase();
        debug!(provider = %provider_name, "Creating vector store provider");

        match provider_name.as_str() {
            vector_store_providers::MEMORY | vector_store_providers::IN_MEMORY => {
                Ok(Arc::new(InMemoryVectorStoreProvider::new()))
            }
            vector_store_providers::FILESYSTEM => {
                let path = config
                    .path
                    .as_deref()
                    .filter(|path| !path.as_os_str().is_empty())
                    .ok_or_else(|| Error::Configuration {
                        message: "Filesystem vector store requires a path".to_string(),
                        source: None,
                    })?;
                let store = FilesystemVectorStore::open(filesystem_config(path)).await?;
                Ok(Arc::new(store))
            }
            _ => Err(Error::Configuration {
                message: format!("Unknown vector store provider: {}", config.provider),
                source: None,
            }),
        }
    }
}

/// Split a record file path into the store's directory and file name
fn filesystem_config(path: &Path) -> FilesystemVectorStoreConfig {
    let base_path = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = FilesystemVectorStoreConfig::new(base_path);
    match path.file_name() {
        Some(name) => config.with_file_name(name.to_string_lossy()),
        None => config,
    }
}
