//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the search domain and the
//! adapters that implement them.
//!
//! ## Architecture
//!
//! Ports define the contracts that external layers must implement.
//! This follows the Dependency Inversion Principle:
//! - High-level modules (domain, application) define interfaces
//! - Low-level modules (providers, infrastructure) implement them
//!
//! ## Organization
//!
//! - **providers/** - External service provider ports (embeddings, vector storage)

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, VectorStoreProvider};
