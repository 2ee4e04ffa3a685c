//! In-memory project catalog

use async_trait::async_trait;
use dashmap::DashMap;
use pms_domain::entities::{Project, ProjectId};
use pms_domain::error::Result;
use pms_domain::repositories::ProjectCatalog;

/// In-memory project catalog
///
/// `insert` and `remove` are for the owning application; the search core
/// only uses the [`ProjectCatalog`] lookups.
#[derive(Debug, Default)]
pub struct InMemoryProjectCatalog {
    projects: DashMap<ProjectId, Project>,
}

impl InMemoryProjectCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `projects`
    ///
    /// A later project replaces an earlier one with the same id.
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let catalog = Self::new();
        for project in projects {
            catalog.projects.insert(project.id, project);
        }
        catalog
    }

    /// Insert or replace a project, returning the previous record
    ///
    /// The project is validated first; an invalid project leaves the
    /// catalog unchanged.
    pub fn insert(&self, project: Project) -> Result<Option<Project>> {
        project.validate()?;
        Ok(self.projects.insert(project.id, project))
    }

    /// Remove a project, returning it when it was present
    pub fn remove(&self, id: ProjectId) -> Option<Project> {
        self.projects.remove(&id).map(|(_, project)| project)
    }

    /// Identifiers of every project, ascending
    pub fn ids(&self) -> Vec<ProjectId> {
        let mut ids: Vec<ProjectId> = self.projects.iter().map(|e| *e.key()).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// True when the catalog holds no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[async_trait]
impl ProjectCatalog for InMemoryProjectCatalog {
    async fn get_by_id(&self, id: ProjectId) -> Result<Option<Project>> {
        Ok(self.projects.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_by_ids(&self, ids: &[ProjectId]) -> Result<Vec<Project>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.projects.get(id).map(|entry| entry.value().clone()))
            .collect())
    }
}
