//! Composition root
//!
//! Builds the search and indexing services from an [`AppConfig`] and the
//! host application's project catalog. Every dependency is constructed
//! here and passed down explicitly; nothing is looked up globally.
//!
//! ```text
//! AppConfig ─┬─ EmbeddingProviderFactory ──┐
//!            ├─ VectorStoreProviderFactory ┼─> SearchServiceImpl
//!            └─ SearchConfig ──────────────┘   IndexingServiceImpl
//!                       ProjectCatalog ───┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_search(config, catalog).await?;
//! let projects = context.search().search(Some("rust web server"), 5).await?;
//! ```

use crate::config::AppConfig;
use crate::factory::{EmbeddingProviderFactory, VectorStoreProviderFactory};
use pms_application::ports::{
    EmbeddingProvider, IndexingServiceInterface, ProjectCatalog, SearchServiceInterface,
    VectorStoreProvider,
};
use pms_application::use_cases::{IndexingServiceImpl, SearchServiceImpl};
use pms_domain::error::Result;
use std::sync::Arc;
use tracing::info;

/// Wired search subsystem
///
/// Search and indexing share one embedding provider and one vector store,
/// so vectors written by indexing are the ones search ranks.
pub struct SearchContext {
    /// Configuration the context was built from
    pub config: Arc<AppConfig>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    search: Arc<dyn SearchServiceInterface>,
    indexing: Arc<dyn IndexingServiceInterface>,
}

impl SearchContext {
    /// Semantic search service
    pub fn search(&self) -> Arc<dyn SearchServiceInterface> {
        Arc::clone(&self.search)
    }

    /// Indexing service keeping embeddings in step with the catalog
    pub fn indexing(&self) -> Arc<dyn IndexingServiceInterface> {
        Arc::clone(&self.indexing)
    }

    /// Embedding provider shared by both services
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedding_provider)
    }

    /// Vector store shared by both services
    pub fn vector_store(&self) -> Arc<dyn VectorStoreProvider> {
        Arc::clone(&self.vector_store)
    }
}

impl std::fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchContext")
            .field("embedding_provider", &self.embedding_provider.provider_name())
            .field("vector_store", &self.vector_store.provider_name())
            .finish_non_exhaustive()
    }
}

/// Build the search subsystem from configuration
///
/// Fails with a configuration error for unknown providers and with a store
/// initialization error when persisted vectors cannot be loaded.
pub async fn init_search(
    config: AppConfig,
    catalog: Arc<dyn ProjectCatalog>,
) -> Result<SearchContext> {
    let embedding_provider = EmbeddingProviderFactory::create(&config.providers.embedding, None)?;
    let vector_store = VectorStoreProviderFactory::create(&config.providers.vector_store).await?;

    init_search_with_providers(config, embedding_provider, vector_store, catalog)
}

/// Build the search subsystem around already constructed providers
pub fn init_search_with_providers(
    config: AppConfig,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    catalog: Arc<dyn ProjectCatalog>,
) -> Result<SearchContext> {
    let service_config = config.search.service_config();

    let search: Arc<dyn SearchServiceInterface> = Arc::new(SearchServiceImpl::new(
        Arc::clone(&embedding_provider),
        Arc::clone(&vector_store),
        catalog,
        service_config.clone(),
    ));
    let indexing: Arc<dyn IndexingServiceInterface> = Arc::new(IndexingServiceImpl::new(
        Arc::clone(&embedding_provider),
        Arc::clone(&vector_store),
        service_config,
    ));

    info!(
        embedding = embedding_provider.provider_name(),
        dimensions = embedding_provider.dimensions(),
        vector_store = vector_store.provider_name(),
        "Search services initialized"
    );

    Ok(SearchContext {
        config: Arc::new(config),
        embedding_provider,
        vector_store,
        search,
        indexing,
    })
}
