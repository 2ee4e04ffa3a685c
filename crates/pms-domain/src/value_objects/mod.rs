//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text for semantic search |
//! | [`ScoredProject`] | Project identifier with its similarity score |
//! | [`SearchHit`] | Resolved project with its similarity score |
//! | [`SearchServiceConfig`] | Limits and time budgets for the services |

/// Configuration value objects
pub mod config;
/// Semantic embedding value objects
pub mod embedding;
/// Search-related value objects
pub mod search;

pub use config::SearchServiceConfig;
pub use embedding::Embedding;
pub use search::{ScoredProject, SearchHit};
