//! Indexing Service Use Case
//!
//! Application service that keeps project embeddings in step with the
//! project catalog. The enclosing application calls it next to each
//! catalog create, edit and delete.

use crate::ports::services::{IndexingResult, IndexingServiceInterface};
use crate::ports::{EmbeddingProvider, VectorStoreProvider};
use crate::timeout::bounded;
use async_trait::async_trait;
use pms_domain::entities::{Project, ProjectId};
use pms_domain::error::{Error, Result};
use pms_domain::value_objects::SearchServiceConfig;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Indexing service implementation - embeds projects and stores their vectors
pub struct IndexingServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    config: SearchServiceConfig,
}

impl IndexingServiceImpl {
    /// Create new indexing service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
        config: SearchServiceConfig,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store,
            config,
        }
    }

    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let embeddings = bounded(
            "embedding provider call",
            self.config.embed_timeout,
            self.embedding_provider.embed_batch(texts),
        )
        .await?;

        if embeddings.len() != texts.len() {
            return Err(Error::embedding(format!(
                "Provider returned {} embeddings for {} texts",
                embeddings.len(),
                texts.len()
            )));
        }
        Ok(embeddings.into_iter().map(|e| e.vector).collect())
    }
}

#[async_trait]
impl IndexingServiceInterface for IndexingServiceImpl {
    async fn index_project(&self, project: &Project) -> Result<()> {
        project.validate()?;

        let embedding = bounded(
            "embedding provider call",
            self.config.embed_timeout,
            self.embedding_provider.embed(&project.embedding_text()),
        )
        .await?;

        bounded(
            "vector store write",
            self.config.store_timeout,
            self.vector_store.put(project.id, &embedding.vector),
        )
        .await?;

        debug!(project_id = %project.id, dimensions = embedding.dimensions, "Indexed project");
        Ok(())
    }

    async fn index_projects(&self, projects: &[Project]) -> Result<IndexingResult> {
        if projects.is_empty() {
            return Ok(IndexingResult::default());
        }
        for project in projects {
            project.validate()?;
        }

        let texts: Vec<String> = projects.iter().map(Project::embedding_text).collect();
        let vectors = self.embed_texts(&texts).await?;
        let dimensions = vectors.first().map(Vec::len);
        let entries: Vec<(ProjectId, Vec<f32>)> =
            projects.iter().map(|p| p.id).zip(vectors).collect();

        bounded(
            "vector store write",
            self.config.store_timeout,
            self.vector_store.put_all(&entries),
        )
        .await?;

        info!(count = entries.len(), "Indexed project batch");
        Ok(IndexingResult {
            projects_indexed: entries.len(),
            dimensions,
        })
    }

    async fn remove_project(&self, id: ProjectId) -> Result<()> {
        bounded(
            "vector store write",
            self.config.store_timeout,
            self.vector_store.delete(id),
        )
        .await?;
        debug!(project_id = %id, "Removed project vector");
        Ok(())
    }

    async fn reconcile(&self, live_ids: &[ProjectId]) -> Result<Vec<ProjectId>> {
        let live: HashSet<ProjectId> = live_ids.iter().copied().collect();
        let stored = bounded(
            "vector store read",
            self.config.store_timeout,
            self.vector_store.get_all(),
        )
        .await?;

        let mut stale: Vec<ProjectId> = stored
            .into_keys()
            .filter(|id| !live.contains(id))
            .collect();
        stale.sort_unstable();

        for id in &stale {
            self.remove_project(*id).await?;
        }
        if !stale.is_empty() {
            info!(removed = stale.len(), "Removed vectors of projects missing from the catalog");
        }
        Ok(stale)
    }
}
