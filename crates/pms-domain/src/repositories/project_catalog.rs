//! Project Catalog Interface
//!
//! Read-only view of the project records owned by the enclosing
//! application. Any backing store satisfying this contract works.

use crate::entities::{Project, ProjectId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository: Project Record Lookup
///
/// The search core resolves ranked identifiers into full project records
/// through this port. It never mutates the catalog.
///
/// # Example
///
/// ```ignore
/// use pms_domain::repositories::ProjectCatalog;
///
/// let projects = catalog.get_by_ids(&[ProjectId(3), ProjectId(1)]).await?;
/// // Projects come back in the requested order; unknown ids are skipped
/// ```
#[async_trait]
pub trait ProjectCatalog: Send + Sync {
    /// Project with the given identifier, or `None` when absent
    async fn get_by_id(&self, id: ProjectId) -> Result<Option<Project>>;

    /// Projects for `ids`, preserving input order and omitting ids not found
    async fn get_by_ids(&self, ids: &[ProjectId]) -> Result<Vec<Project>> {
        let mut projects = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(project) = self.get_by_id(*id).await? {
                projects.push(project);
            }
        }
        Ok(projects)
    }
}
