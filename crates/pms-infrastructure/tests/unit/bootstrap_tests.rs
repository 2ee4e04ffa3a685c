//! Composition root tests
//!
//! Wire the services from configuration with the offline embedding
//! provider and a filesystem store in a temporary directory.

use pms_domain::error::Error;
use pms_domain::{Project, ProjectId};
use pms_infrastructure::config::{
    AppConfig, ConfigBuilder, EmbeddingProviderConfig, SearchConfig, VectorStoreProviderConfig,
};
use pms_infrastructure::{init_search, init_search_with_providers};
use pms_providers::catalog::InMemoryProjectCatalog;
use pms_providers::embedding::NullEmbeddingProvider;
use pms_providers::vector_store::InMemoryVectorStoreProvider;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn projects() -> Vec<Project> {
    vec![
        Project::new(
            ProjectId(1),
            "Office Automation",
            800.0,
            "Python scripts automating repetitive office tasks",
            ["python", "automation"],
            10,
        )
        .expect("project"),
        Project::new(
            ProjectId(2),
            "Fitness Tracker",
            2500.0,
            "Mobile app tracking workouts and heart rate",
            ["mobile", "fitness"],
            11,
        )
        .expect("project"),
        Project::new(
            ProjectId(3),
            "Database Hardening",
            1200.0,
            "Audit database security and migrate legacy schemas",
            ["database", "security"],
            12,
        )
        .expect("project"),
    ]
}

fn config(store_path: &Path) -> AppConfig {
    ConfigBuilder::new()
        .with_embedding(EmbeddingProviderConfig {
            provider: "null".to_string(),
            dimensions: Some(64),
            ..Default::default()
        })
        .with_vector_store(VectorStoreProviderConfig {
            provider: "filesystem".to_string(),
            path: Some(store_path.to_path_buf()),
        })
        .with_search(SearchConfig {
            default_limit: 2,
            ..Default::default()
        })
        .build()
}

fn catalog() -> Arc<InMemoryProjectCatalog> {
    Arc::new(InMemoryProjectCatalog::from_projects(projects()))
}

#[tokio::test]
async fn test_index_then_search_across_restart() {
    let dir = TempDir::new().expect("temp dir");
    let store_path = dir.path().join("embeds.csv");

    let context = init_search(config(&store_path), catalog())
        .await
        .expect("init");
    let result = context
        .indexing()
        .index_projects(&projects())
        .await
        .expect("index");
    assert_eq!(result.projects_indexed, 3);
    assert_eq!(context.vector_store().dimensions(), Some(64));

    let found = context
        .search()
        .search(Some("python automation scripts"), 3)
        .await
        .expect("search");
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].id, ProjectId(1));
    drop(context);

    // A fresh context reads the vectors written by the first one
    let restarted = init_search(config(&store_path), catalog())
        .await
        .expect("restart");
    assert_eq!(restarted.vector_store().len().await.expect("len"), 3);
    let found = restarted
        .search()
        .search_default(Some("database security audit"))
        .await
        .expect("search");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, ProjectId(3));
}

#[tokio::test]
async fn test_services_share_providers() {
    let dir = TempDir::new().expect("temp dir");
    let context = init_search(config(&dir.path().join("embeds.csv")), catalog())
        .await
        .expect("init");

    assert_eq!(context.config.search.default_limit, 2);
    assert_eq!(context.embedding_provider().provider_name(), "null");
    assert_eq!(context.embedding_provider().dimensions(), 64);

    context
        .indexing()
        .index_project(&projects()[1])
        .await
        .expect("index");
    assert!(
        context
            .vector_store()
            .get(ProjectId(2))
            .await
            .expect("get")
            .is_some()
    );

    let debug = format!("{context:?}");
    assert!(debug.contains("null"));
    assert!(debug.contains("filesystem"));
}

#[tokio::test]
async fn test_init_with_explicit_providers() {
    let context = init_search_with_providers(
        AppConfig::default(),
        Arc::new(NullEmbeddingProvider::with_dimensions(8)),
        Arc::new(InMemoryVectorStoreProvider::new()),
        catalog(),
    )
    .expect("init");

    let found = context
        .search()
        .search(Some("anything"), 5)
        .await
        .expect("search");
    assert!(found.is_empty());
    assert_eq!(context.vector_store().provider_name(), "memory");
}

#[tokio::test]
async fn test_init_fails_on_unreadable_store() {
    let dir = TempDir::new().expect("temp dir");
    let store_path = dir.path().join("embeds.csv");
    std::fs::write(&store_path, "id,embedding\n1,[0.5;oops]\n").expect("write");

    let err = init_search(config(&store_path), catalog())
        .await
        .err()
        .expect("corrupt store");
    assert!(matches!(err, Error::StoreInit { .. }));
}

#[tokio::test]
async fn test_init_fails_on_unknown_provider() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = config(&dir.path().join("embeds.csv"));
    config.providers.embedding.provider = "word2vec".to_string();

    let err = init_search(config, catalog())
        .await
        .err()
        .expect("unknown provider");
    assert!(matches!(err, Error::Configuration { .. }));
}
