//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::providers::{EmbeddingProviderConfig, ProvidersConfig, VectorStoreProviderConfig};
pub use super::search::SearchConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider configurations
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Search service configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
