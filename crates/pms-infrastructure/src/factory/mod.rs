//! Provider factories

pub mod providers;

pub use providers::{EmbeddingProviderFactory, VectorStoreProviderFactory};
