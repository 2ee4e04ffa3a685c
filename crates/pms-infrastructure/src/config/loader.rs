//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{
    AppConfig, EmbeddingProviderConfig, LoggingConfig, SearchConfig, VectorStoreProviderConfig,
};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pms_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first `pms.toml` found)
    /// 3. Environment variables with prefix (e.g., `PMS__SEARCH__DEFAULT_LIMIT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) => {
                let found = config_path.exists();
                if found {
                    figment = figment.merge(Toml::file(config_path));
                }
                log_config_loaded(config_path, found);
            }
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // Double underscore separates nested keys so single underscores
        // stay inside field names (PMS__PROVIDERS__VECTOR_STORE__PATH)
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Reload configuration from the same sources
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing config file among the conventional locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(USER_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Programmatic configuration builder
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embedding provider configuration
    pub fn with_embedding(mut self, embedding: EmbeddingProviderConfig) -> Self {
        self.config.providers.embedding = embedding;
        self
    }

    /// Set the vector store configuration
    pub fn with_vector_store(mut self, vector_store: VectorStoreProviderConfig) -> Self {
        self.config.providers.vector_store = vector_store;
        self
    }

    /// Set the search configuration
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    /// Set the logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build without validation
    pub fn build(self) -> AppConfig {
        self.config
    }

    /// Build and validate
    pub fn build_validated(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_embedding_config(config)?;
    validate_vector_store_config(config)?;
    validate_search_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn config_error(message: impl Into<String>) -> Error {
    Error::configuration(message)
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.providers.embedding;
    let provider = embedding.provider.to_ascii_lowercase();

    match provider.as_str() {
        embedding_providers::OPENAI => {
            let has_key = embedding
                .api_key
                .as_deref()
                .is_some_and(|key| !key.trim().is_empty());
            if !has_key {
                return Err(config_error("OpenAI embedding provider requires an API key"));
            }
        }
        embedding_providers::OLLAMA | embedding_providers::NULL => {}
        other => {
            return Err(config_error(format!(
                "Unknown embedding provider: {other}"
            )));
        }
    }

    if embedding.dimensions == Some(0) {
        return Err(config_error("Embedding dimensions cannot be 0"));
    }
    if embedding.timeout_secs == 0 {
        return Err(config_error("Embedding timeout cannot be 0"));
    }
    Ok(())
}

fn validate_vector_store_config(config: &AppConfig) -> Result<()> {
    let store = &config.providers.vector_store;
    match store.provider.to_ascii_lowercase().as_str() {
        vector_store_providers::MEMORY | vector_store_providers::IN_MEMORY => Ok(()),
        vector_store_providers::FILESYSTEM => {
            let has_path = store
                .path
                .as_deref()
                .is_some_and(|path| !path.as_os_str().is_empty());
            if has_path {
                Ok(())
            } else {
                Err(config_error("Filesystem vector store requires a path"))
            }
        }
        other => Err(config_error(format!("Unknown vector store provider: {other}"))),
    }
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    if config.search.embed_timeout_ms == 0 {
        return Err(config_error("Search embed timeout cannot be 0"));
    }
    if config.search.store_timeout_ms == 0 {
        return Err(config_error("Search store timeout cannot be 0"));
    }
    Ok(())
}
