//! Configuration types

pub mod app;
pub mod logging;
pub mod providers;
pub mod search;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use providers::{EmbeddingProviderConfig, ProvidersConfig, VectorStoreProviderConfig};
pub use search::SearchConfig;
