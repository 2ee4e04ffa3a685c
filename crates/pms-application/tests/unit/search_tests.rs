//! Tests for the search use case
//!
//! Real providers (NullEmbeddingProvider, InMemoryVectorStoreProvider,
//! InMemoryProjectCatalog) drive the pipeline end to end; scripted
//! providers from `test_providers` cover failure and ordering cases.

use crate::test_providers::{
    FailingEmbeddingProvider, FixedEmbeddingProvider, SlowEmbeddingProvider, SlowVectorStore,
    TimedOutEmbeddingProvider, sample_projects,
};
use pms_application::ports::{
    EmbeddingProvider, IndexingServiceInterface, ProjectCatalog, SearchServiceInterface,
    VectorStoreProvider,
};
use pms_application::use_cases::{IndexingServiceImpl, SearchServiceImpl};
use pms_domain::error::Error;
use pms_domain::value_objects::SearchServiceConfig;
use pms_domain::{Project, ProjectId};
use pms_providers::catalog::InMemoryProjectCatalog;
use pms_providers::embedding::NullEmbeddingProvider;
use pms_providers::vector_store::{
    FilesystemVectorStore, FilesystemVectorStoreConfig, InMemoryVectorStoreProvider,
};
use std::sync::Arc;
use std::time::Duration;

fn titles(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.title.as_str()).collect()
}

fn ids(projects: &[Project]) -> Vec<u64> {
    projects.iter().map(|p| p.id.get()).collect()
}

/// Catalog holding the sample projects plus a store indexed from them
async fn seeded(
    embedding: Arc<dyn EmbeddingProvider>,
) -> (Arc<dyn VectorStoreProvider>, Arc<dyn ProjectCatalog>) {
    let store: Arc<dyn VectorStoreProvider> = Arc::new(InMemoryVectorStoreProvider::new());
    let catalog = InMemoryProjectCatalog::from_projects(sample_projects());

    let indexer = IndexingServiceImpl::new(
        embedding,
        Arc::clone(&store),
        SearchServiceConfig::default(),
    );
    indexer
        .index_projects(&sample_projects())
        .await
        .expect("Should index sample projects");

    (store, Arc::new(catalog))
}

/// Store with one 2-d vector per id and a catalog with the same ids
async fn scripted(
    vectors: &[(u64, [f32; 2])],
) -> (Arc<dyn VectorStoreProvider>, Arc<InMemoryProjectCatalog>) {
    let store = Arc::new(InMemoryVectorStoreProvider::new());
    let catalog = Arc::new(InMemoryProjectCatalog::new());
    for (id, vector) in vectors {
        store
            .put(ProjectId(*id), vector)
            .await
            .expect("Should store vector");
        let project = Project::new(
            ProjectId(*id),
            format!("Project {id}"),
            100.0,
            "desc",
            ["tag"],
            1,
        )
        .expect("valid project");
        catalog.insert(project).expect("Should insert project");
    }
    (store, catalog)
}

#[tokio::test]
async fn test_search_empty_store_returns_empty() {
    let service = SearchServiceImpl::new(
        Arc::new(NullEmbeddingProvider::new()),
        Arc::new(InMemoryVectorStoreProvider::new()),
        Arc::new(InMemoryProjectCatalog::new()),
        SearchServiceConfig::default(),
    );

    let results = service
        .search(Some("Frontend development projects"), 5)
        .await
        .expect("Search should succeed");
    assert!(results.is_empty(), "Empty store should return empty results");
}

#[tokio::test]
async fn test_search_returns_limit_and_is_deterministic() {
    let embedding: Arc<dyn EmbeddingProvider> = Arc::new(NullEmbeddingProvider::new());
    let (store, catalog) = seeded(Arc::clone(&embedding)).await;
    let service = SearchServiceImpl::new(embedding, store, catalog, SearchServiceConfig::default());

    let first = service
        .search(Some("Frontend development projects"), 3)
        .await
        .expect("Search should succeed");
    let second = service
        .search(Some("Frontend development projects"), 3)
        .await
        .expect("Search should succeed");

    assert_eq!(first.len(), 3);
    assert_eq!(ids(&first), ids(&second));
}

#[tokio::test]
async fn test_search_ranks_matching_project_first() {
    let embedding: Arc<dyn EmbeddingProvider> = Arc::new(NullEmbeddingProvider::new());
    let (store, catalog) = seeded(Arc::clone(&embedding)).await;
    let service = SearchServiceImpl::new(embedding, store, catalog, SearchServiceConfig::default());

    let results = service
        .search(Some("python scripts automating tasks"), 5)
        .await
        .expect("Search should succeed");

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].title, "Python Automation");
}

#[tokio::test]
async fn test_search_limit_above_store_size_returns_all_ranked() {
    let (store, catalog) = scripted(&[(1, [0.0, 1.0]), (2, [1.0, 0.0]), (3, [1.0, 1.0])]).await;
    let provider = FixedEmbeddingProvider::new(2).with("east", vec![1.0, 0.0]);
    let service = SearchServiceImpl::new(
        Arc::new(provider),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    let results = service.search(Some("east"), 50).await.expect("Search should succeed");
    assert_eq!(ids(&results), vec![2, 3, 1]);
}

#[tokio::test]
async fn test_search_scored_orders_by_score_then_id() {
    let (store, catalog) = scripted(&[
        (4, [1.0, 1.0]),
        (3, [2.0, 0.0]),
        (1, [1.0, 0.0]),
        (2, [0.0, 1.0]),
    ])
    .await;
    let provider = FixedEmbeddingProvider::new(2).with("east", vec![1.0, 0.0]);
    let service = SearchServiceImpl::new(
        Arc::new(provider),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    let hits = service
        .search_scored(Some("east"), 4)
        .await
        .expect("Search should succeed");

    let order: Vec<u64> = hits.iter().map(|h| h.project.id.get()).collect();
    assert_eq!(order, vec![1, 3, 4, 2]);
    assert_eq!(hits[0].score, hits[1].score);
    assert!(hits[1].score > hits[2].score);
    assert!(hits[2].score > hits[3].score);
}

#[tokio::test]
async fn test_search_provider_error_is_search_unavailable() {
    let (store, catalog) = scripted(&[(1, [1.0, 0.0])]).await;
    let service = SearchServiceImpl::new(
        Arc::new(FailingEmbeddingProvider),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    let err = service
        .search(Some("anything"), 5)
        .await
        .expect_err("Provider failure must fail the search");

    match err {
        Error::SearchUnavailable { source } => assert!(source.is_provider_error()),
        other => panic!("Expected SearchUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_missing_query_is_invalid() {
    let provider = Arc::new(FixedEmbeddingProvider::new(2));
    let (store, catalog) = scripted(&[(1, [1.0, 0.0])]).await;
    let service = SearchServiceImpl::new(
        provider.clone(),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    let err = service.search(None, 5).await.expect_err("None query must fail");
    assert!(matches!(err, Error::InvalidQuery { .. }));
    assert_eq!(provider.calls(), 0, "Provider must not be called");
}

#[tokio::test]
async fn test_search_empty_query_is_delegated_to_provider() {
    let provider = Arc::new(FixedEmbeddingProvider::new(2));
    let (store, catalog) = scripted(&[(2, [1.0, 0.0]), (1, [0.0, 1.0])]).await;
    let service = SearchServiceImpl::new(
        provider.clone(),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    // Unknown text embeds to the zero vector: every score is 0, ties by id
    let results = service.search(Some(""), 5).await.expect("Search should succeed");
    assert_eq!(provider.calls(), 1);
    assert_eq!(ids(&results), vec![1, 2]);
}

#[tokio::test]
async fn test_search_zero_limit_returns_empty() {
    let (store, catalog) = scripted(&[(1, [1.0, 0.0])]).await;
    let provider = FixedEmbeddingProvider::new(2).with("east", vec![1.0, 0.0]);
    let service = SearchServiceImpl::new(
        Arc::new(provider),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    let results = service.search(Some("east"), 0).await.expect("Search should succeed");
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_skips_ids_missing_from_catalog() {
    let (store, catalog) = scripted(&[(1, [1.0, 0.0]), (2, [0.9, 0.1]), (3, [0.0, 1.0])]).await;
    // Vector for a project the catalog no longer knows about
    store
        .put(ProjectId(99), &[1.0, 0.0])
        .await
        .expect("Should store vector");
    catalog.remove(ProjectId(2));

    let provider = FixedEmbeddingProvider::new(2).with("east", vec![1.0, 0.0]);
    let service = SearchServiceImpl::new(
        Arc::new(provider),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    let results = service.search(Some("east"), 10).await.expect("Search should succeed");
    assert_eq!(ids(&results), vec![1, 3]);
}

#[tokio::test]
async fn test_search_query_dimension_mismatch_returns_empty() {
    let (store, catalog) = scripted(&[(1, [1.0, 0.0])]).await;
    let provider = FixedEmbeddingProvider::new(3).with("east", vec![1.0, 0.0, 0.0]);
    let service = SearchServiceImpl::new(
        Arc::new(provider),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    let results = service.search(Some("east"), 10).await.expect("Search should succeed");
    assert!(results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_search_slow_provider_times_out() {
    let (store, catalog) = scripted(&[(1, [1.0, 0.0])]).await;
    let config = SearchServiceConfig::default().with_embed_timeout(Duration::from_millis(200));
    let service = SearchServiceImpl::new(
        Arc::new(SlowEmbeddingProvider {
            delay: Duration::from_secs(60),
        }),
        store,
        catalog,
        config,
    );

    let err = service
        .search(Some("east"), 5)
        .await
        .expect_err("Slow provider must time out");
    assert!(matches!(err, Error::Timeout { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_search_slow_store_read_times_out() {
    let (_, catalog) = scripted(&[(1, [1.0, 0.0])]).await;
    let config = SearchServiceConfig::default().with_store_timeout(Duration::from_millis(200));
    let service = SearchServiceImpl::new(
        Arc::new(FixedEmbeddingProvider::new(2)),
        Arc::new(SlowVectorStore {
            delay: Duration::from_secs(60),
        }),
        catalog,
        config,
    );

    let err = service
        .search(Some("east"), 5)
        .await
        .expect_err("Slow store must time out");
    match err {
        Error::Timeout { operation, timeout } => {
            assert_eq!(operation, "vector store read");
            assert_eq!(timeout, Duration::from_millis(200));
        }
        other => panic!("Expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_provider_request_timeout_stays_timeout() {
    let (store, catalog) = scripted(&[(1, [1.0, 0.0])]).await;
    let service = SearchServiceImpl::new(
        Arc::new(TimedOutEmbeddingProvider),
        store,
        catalog,
        SearchServiceConfig::default(),
    );

    let err = service
        .search(Some("east"), 5)
        .await
        .expect_err("Provider timeout must fail the search");
    assert!(
        matches!(&err, Error::Timeout { operation, .. } if operation == "OpenAI embedding request"),
        "Expected timeout, got {err:?}"
    );
}

#[tokio::test]
async fn test_search_default_uses_configured_limit() {
    let embedding: Arc<dyn EmbeddingProvider> = Arc::new(NullEmbeddingProvider::new());
    let (store, catalog) = seeded(Arc::clone(&embedding)).await;
    let config = SearchServiceConfig::default().with_default_limit(2);
    let service = SearchServiceImpl::new(embedding, store, catalog, config);

    let results = service
        .search_default(Some("database security"))
        .await
        .expect("Search should succeed");
    assert_eq!(results.len(), 2);
    assert_eq!(titles(&results)[0], "Database Management");
}

#[tokio::test]
async fn test_search_over_reopened_filesystem_store() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let config = FilesystemVectorStoreConfig::new(dir.path());
    let embedding: Arc<dyn EmbeddingProvider> = Arc::new(NullEmbeddingProvider::new());

    {
        let store = Arc::new(
            FilesystemVectorStore::open(config.clone())
                .await
                .expect("Should open store"),
        );
        let indexer =
            IndexingServiceImpl::new(Arc::clone(&embedding), store, SearchServiceConfig::default());
        indexer
            .index_projects(&sample_projects())
            .await
            .expect("Should index projects");
    }

    let store = Arc::new(FilesystemVectorStore::open(config).await.expect("Should reopen store"));
    let catalog = Arc::new(InMemoryProjectCatalog::from_projects(sample_projects()));
    let service = SearchServiceImpl::new(embedding, store, catalog, SearchServiceConfig::default());

    let results = service
        .search(Some("machine learning data trends"), 3)
        .await
        .expect("Search should succeed");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].title, "Machine Learning");
}
