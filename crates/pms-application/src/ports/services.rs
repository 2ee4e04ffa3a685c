//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services.
//! The enclosing application's use cases call these.

use async_trait::async_trait;
use pms_domain::entities::{Project, ProjectId};
use pms_domain::error::Result;
use pms_domain::value_objects::SearchHit;

// ============================================================================
// Search Service Interface
// ============================================================================

/// Semantic Project Search Interface
///
/// Turns free-text queries into projects ranked by embedding similarity.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Projects most similar to `query`, best first, at most `limit` of them
    ///
    /// Fails with `InvalidQuery` when `query` is `None`,
    /// `SearchUnavailable` when the embedding provider fails and `Timeout`
    /// when a blocking step exceeds its budget.
    async fn search(&self, query: Option<&str>, limit: usize) -> Result<Vec<Project>>;

    /// Like [`search`](Self::search), keeping each project's score
    async fn search_scored(&self, query: Option<&str>, limit: usize) -> Result<Vec<SearchHit>>;

    /// [`search`](Self::search) with the configured default limit
    async fn search_default(&self, query: Option<&str>) -> Result<Vec<Project>>;
}

// ============================================================================
// Indexing Service Interface
// ============================================================================

/// Project Embedding Maintenance Interface
///
/// Keeps the vector store in step with catalog mutations. The caller
/// invokes these alongside its own catalog writes.
#[async_trait]
pub trait IndexingServiceInterface: Send + Sync {
    /// Embed a created or edited project and store its vector
    async fn index_project(&self, project: &Project) -> Result<()>;

    /// Embed several projects in one provider call and store them together
    async fn index_projects(&self, projects: &[Project]) -> Result<IndexingResult>;

    /// Drop the vector of a deleted project (idempotent)
    async fn remove_project(&self, id: ProjectId) -> Result<()>;

    /// Delete vectors whose project is not in `live_ids`
    ///
    /// Returns the removed identifiers in ascending order.
    async fn reconcile(&self, live_ids: &[ProjectId]) -> Result<Vec<ProjectId>>;
}

/// Result of a batch indexing operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexingResult {
    /// Number of project vectors written
    pub projects_indexed: usize,
    /// Dimension of the written vectors
    pub dimensions: Option<usize>,
}
