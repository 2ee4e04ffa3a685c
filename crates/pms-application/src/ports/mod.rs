//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **services.rs** - Application service interfaces (search, indexing)
//! - Provider and repository ports are re-exported from `pms-domain`

/// Application service interfaces
pub mod services;

pub use pms_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};
pub use pms_domain::repositories::ProjectCatalog;
pub use services::{IndexingResult, IndexingServiceInterface, SearchServiceInterface};
