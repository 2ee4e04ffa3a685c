//! Configuration management
//!
//! Layered configuration via Figment: defaults, then a TOML file, then
//! `PMS__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, EmbeddingProviderConfig, LoggingConfig, ProvidersConfig, SearchConfig,
    VectorStoreProviderConfig,
};
