//! Repository Ports
//!
//! Interfaces over stores owned outside the search core.

/// Project catalog lookups
pub mod project_catalog;

pub use project_catalog::ProjectCatalog;
