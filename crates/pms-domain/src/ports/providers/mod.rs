//! External Provider Ports
//!
//! Ports for external services the search core depends on.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation services |
//! | VectorStoreProvider | Durable project embedding storage |

/// Embedding provider port
pub mod embedding;
/// Vector store provider port
pub mod vector_store;

// Re-export provider ports for convenience
pub use embedding::EmbeddingProvider;
pub use vector_store::VectorStoreProvider;
