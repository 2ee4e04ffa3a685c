//! Provider factory tests

use pms_domain::ProjectId;
use pms_domain::error::Error;
use pms_infrastructure::config::{EmbeddingProviderConfig, VectorStoreProviderConfig};
use pms_infrastructure::factory::{EmbeddingProviderFactory, VectorStoreProviderFactory};
use tempfile::TempDir;

fn embedding(provider: &str) -> EmbeddingProviderConfig {
    EmbeddingProviderConfig {
        provider: provider.to_string(),
        ..Default::default()
    }
}

fn store(provider: &str, path: Option<std::path::PathBuf>) -> VectorStoreProviderConfig {
    VectorStoreProviderConfig {
        provider: provider.to_string(),
        path,
    }
}

#[tokio::test]
async fn test_null_provider_uses_configured_dimensions() {
    let config = EmbeddingProviderConfig {
        dimensions: Some(16),
        ..embedding("null")
    };
    let provider = EmbeddingProviderFactory::create(&config, None).expect("null provider");

    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.dimensions(), 16);
    let vector = provider.embed("rust web server").await.expect("embed").vector;
    assert_eq!(vector.len(), 16);
}

#[test]
fn test_openai_provider() {
    let config = EmbeddingProviderConfig {
        api_key: Some("sk-test".to_string()),
        ..embedding("OpenAI")
    };
    let provider = EmbeddingProviderFactory::create(&config, Some(reqwest::Client::new()))
        .expect("openai provider");
    assert_eq!(provider.provider_name(), "openai");
    assert_eq!(provider.dimensions(), 1536);

    let shortened = EmbeddingProviderConfig {
        dimensions: Some(256),
        ..config
    };
    let provider = EmbeddingProviderFactory::create(&shortened, None).expect("openai provider");
    assert_eq!(provider.dimensions(), 256);
}

#[test]
fn test_openai_without_key_is_rejected() {
    let config = EmbeddingProviderConfig {
        api_key: Some("   ".to_string()),
        ..embedding("openai")
    };
    let err = EmbeddingProviderFactory::create(&config, None)
        .err()
        .expect("missing key");
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_ollama_provider_defaults() {
    let provider = EmbeddingProviderFactory::create(&embedding("ollama"), None).expect("ollama");
    assert_eq!(provider.provider_name(), "ollama");
    assert_eq!(provider.dimensions(), 768);
}

#[test]
fn test_unknown_embedding_provider() {
    let err = EmbeddingProviderFactory::create(&embedding("word2vec"), None)
        .err()
        .expect("unknown provider");
    assert!(err.to_string().contains("Unknown embedding provider: word2vec"));
}

#[tokio::test]
async fn test_memory_store_aliases() {
    for name in ["memory", "in_memory", "In_Memory"] {
        let provider = VectorStoreProviderFactory::create(&store(name, None))
            .await
            .expect("memory store");
        assert_eq!(provider.provider_name(), "memory");
        assert!(provider.is_empty().await.expect("len"));
    }
}

#[tokio::test]
async fn test_filesystem_store_persists_under_configured_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("index").join("vectors.csv");
    let config = store("filesystem", Some(path.clone()));

    let first = VectorStoreProviderFactory::create(&config)
        .await
        .expect("filesystem store");
    assert_eq!(first.provider_name(), "filesystem");
    first.put(ProjectId(4), &[0.5, 1.0]).await.expect("put");
    assert!(path.exists());

    let reopened = VectorStoreProviderFactory::create(&config)
        .await
        .expect("reopen");
    assert_eq!(
        reopened.get(ProjectId(4)).await.expect("get"),
        Some(vec![0.5, 1.0])
    );
    assert_eq!(reopened.dimensions(), Some(2));
}

#[tokio::test]
async fn test_filesystem_store_with_corrupt_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("embeds.csv");
    std::fs::write(&path, "project,vector\n1,[1;2]\n").expect("write");

    let err = VectorStoreProviderFactory::create(&store("filesystem", Some(path)))
        .await
        .err()
        .expect("corrupt file");
    assert!(matches!(err, Error::StoreInit { .. }));
}

#[tokio::test]
async fn test_store_configuration_errors() {
    let err = VectorStoreProviderFactory::create(&store("filesystem", None))
        .await
        .err()
        .expect("missing path");
    assert!(matches!(err, Error::Configuration { .. }));

    let err = VectorStoreProviderFactory::create(&store("milvus", None))
        .await
        .err()
        .expect("unknown provider");
    assert!(err.to_string().contains("Unknown vector store provider: milvus"));
}
