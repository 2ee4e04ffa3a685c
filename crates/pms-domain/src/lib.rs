//! # Project Marketplace Search - Domain Layer
//!
//! Core types and contracts of the semantic project search subsystem:
//! turning a free-text query into a ranked list of marketplace projects by
//! comparing vector embeddings.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `Project` and `ProjectId` |
//! | [`value_objects`] | Embeddings, scored results, service configuration |
//! | [`ports`] | `EmbeddingProvider` and `VectorStoreProvider` contracts |
//! | [`repositories`] | `ProjectCatalog` lookup contract |
//! | [`similarity`] | Pure cosine-similarity ranking |
//! | [`error`] | Error taxonomy and `Result` alias |
//!
//! The domain has no knowledge of HTTP, files or configuration formats;
//! adapters for those live in `pms-providers` and `pms-infrastructure`.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod similarity;
pub mod value_objects;

pub use entities::{Project, ProjectId};
pub use error::{Error, Result};
pub use similarity::{SimilarityRanker, cosine_similarity, rank};
pub use value_objects::{Embedding, ScoredProject, SearchHit, SearchServiceConfig};
