//! Domain Entities
//!
//! Entities with identity that the search core reads.

/// Marketplace project entity
pub mod project;

pub use project::{Project, ProjectId};
