//! # Project Marketplace Search - Provider Implementations
//!
//! Concrete adapters for the ports defined in `pms-domain`. Every provider
//! is constructed explicitly and handed to the application services as a
//! trait object.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Ollama, Null |
//! | Vector Store | `VectorStoreProvider` | InMemory, Filesystem |
//! | Catalog | `ProjectCatalog` | InMemory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! pms-providers = { version = "0.1", default-features = false, features = ["vectorstore-memory"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use pms_providers::embedding::OpenAIEmbeddingProvider;
//! use pms_providers::vector_store::{FilesystemVectorStore, FilesystemVectorStoreConfig};
//! ```

// Re-export pms-domain types commonly used with providers
pub use pms_domain::error::{Error, Result};
pub use pms_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};
pub use pms_domain::repositories::ProjectCatalog;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for remote and local embedding APIs.
pub mod embedding;

/// Vector store provider implementations
///
/// Implements `VectorStoreProvider` for in-memory and file-backed storage.
pub mod vector_store;

/// Project catalog implementations
pub mod catalog;
