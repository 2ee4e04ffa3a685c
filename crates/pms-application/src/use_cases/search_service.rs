//! Search Service Use Case
//!
//! Application service for semantic project search. Runs one sequential
//! pipeline per call: embed the query, snapshot the stored vectors, rank
//! them, resolve the winners through the project catalog.

use crate::ports::services::SearchServiceInterface;
use crate::ports::{EmbeddingProvider, ProjectCatalog, VectorStoreProvider};
use crate::timeout::bounded;
use async_trait::async_trait;
use pms_domain::entities::{Project, ProjectId};
use pms_domain::error::{Error, Result};
use pms_domain::similarity::SimilarityRanker;
use pms_domain::value_objects::{ScoredProject, SearchHit, SearchServiceConfig};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Search service implementation
///
/// Holds no mutable state; concurrent searches share one instance. The
/// service never writes to the vector store or the catalog.
pub struct SearchServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    catalog: Arc<dyn ProjectCatalog>,
    ranker: SimilarityRanker,
    config: SearchServiceConfig,
}

impl SearchServiceImpl {
    /// Create new search service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
        catalog: Arc<dyn ProjectCatalog>,
        config: SearchServiceConfig,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store,
            catalog,
            ranker: SimilarityRanker::new(),
            config,
        }
    }

    /// Configuration the service was built with
    pub fn config(&self) -> &SearchServiceConfig {
        &self.config
    }

    /// Embed the query text, mapping provider failures for the caller
    async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
        let embedding = bounded(
            "embedding provider call",
            self.config.embed_timeout,
            self.embedding_provider.embed(query),
        )
        .await
        .map_err(|e| {
            if e.is_provider_error() {
                warn!(provider = self.embedding_provider.provider_name(), error = %e, "Query embedding failed");
                Error::search_unavailable(e)
            } else {
                e
            }
        })?;
        Ok(embedding.vector)
    }

    /// Rank every stored vector against the query vector
    async fn rank_candidates(&self, query_vector: &[f32], limit: usize) -> Result<Vec<ScoredProject>> {
        let candidates = bounded(
            "vector store read",
            self.config.store_timeout,
            self.vector_store.get_all(),
        )
        .await?;

        if candidates.is_empty() {
            debug!("Vector store is empty, nothing to rank");
            return Ok(Vec::new());
        }

        if let Some(stored) = self.vector_store.dimensions()
            && stored != query_vector.len()
        {
            warn!(
                stored,
                query = query_vector.len(),
                "Query embedding dimension differs from stored vectors"
            );
            return Ok(Vec::new());
        }

        let ranked = self.ranker.rank(query_vector, &candidates, limit);
        debug!(
            candidates = candidates.len(),
            ranked = ranked.len(),
            "Ranked stored project vectors"
        );
        Ok(ranked)
    }

    /// Resolve ranked identifiers into projects, keeping rank order
    async fn resolve(&self, ranked: Vec<ScoredProject>) -> Result<Vec<SearchHit>> {
        let ids: Vec<ProjectId> = ranked.iter().map(|s| s.id).collect();
        let mut projects: HashMap<ProjectId, Project> = self
            .catalog
            .get_by_ids(&ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let hits: Vec<SearchHit> = ranked
            .into_iter()
            .filter_map(|scored| {
                projects.remove(&scored.id).map(|project| SearchHit {
                    project,
                    score: scored.score,
                })
            })
            .collect();

        if hits.len() < ids.len() {
            debug!(
                stale = ids.len() - hits.len(),
                "Dropped ranked ids missing from the project catalog"
            );
        }
        Ok(hits)
    }
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(&self, query: Option<&str>, limit: usize) -> Result<Vec<Project>> {
        let hits = self.search_scored(query, limit).await?;
        Ok(hits.into_iter().map(|hit| hit.project).collect())
    }

    async fn search_scored(&self, query: Option<&str>, limit: usize) -> Result<Vec<SearchHit>> {
        let query = query.ok_or_else(|| Error::invalid_query("query text is required"))?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self.embed_query(query).await?;
        let ranked = self.rank_candidates(&query_vector, limit).await?;
        if ranked.is_empty() {
            return Ok(Vec::new());
        }
        self.resolve(ranked).await
    }

    async fn search_default(&self, query: Option<&str>) -> Result<Vec<Project>> {
        self.search(query, self.config.default_limit).await
    }
}
