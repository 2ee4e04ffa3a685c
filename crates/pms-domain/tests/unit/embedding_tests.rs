//! Unit tests for Embedding value object

use async_trait::async_trait;
use pms_domain::Embedding;
use pms_domain::error::{Error, Result};
use pms_domain::ports::providers::EmbeddingProvider;

/// Implements only the required methods of the port
struct BatchOnlyProvider {
    returns_nothing: bool,
}

#[async_trait]
impl EmbeddingProvider for BatchOnlyProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if self.returns_nothing {
            return Ok(Vec::new());
        }
        Ok(texts
            .iter()
            .map(|text| Embedding::new(vec![text.len() as f32, 1.0], "batch-only"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn provider_name(&self) -> &str {
        "batch-only"
    }
}

#[test]
fn test_embedding_new_derives_dimensions() {
    let embedding = Embedding::new(vec![0.1, 0.2, 0.3, 0.4, 0.5], "text-embedding-3-small");

    assert_eq!(embedding.dimensions, 5);
    assert_eq!(embedding.model, "text-embedding-3-small");
    assert_eq!(embedding.vector[4], 0.5);
}

#[test]
fn test_embedding_magnitude() {
    let embedding = Embedding::new(vec![3.0, 4.0], "test-model");
    assert!((embedding.magnitude() - 5.0).abs() < 1e-9);
}

#[test]
fn test_embedding_empty_vector() {
    let embedding = Embedding::new(vec![], "test-model");

    assert!(embedding.vector.is_empty());
    assert_eq!(embedding.dimensions, 0);
    assert_eq!(embedding.magnitude(), 0.0);
}

#[test]
fn test_embedding_serialization() {
    let embedding = Embedding::new(vec![0.25, -0.5], "m");
    let json = serde_json::to_string(&embedding).expect("serialize");
    let back: Embedding = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, embedding);
}

#[tokio::test]
async fn test_default_embed_delegates_to_batch() {
    let provider: Box<dyn EmbeddingProvider> = Box::new(BatchOnlyProvider {
        returns_nothing: false,
    });

    let embedding = provider.embed("rust").await.expect("embed");
    assert_eq!(embedding.vector, vec![4.0, 1.0]);
    assert_eq!(embedding.dimensions, provider.dimensions());
}

#[tokio::test]
async fn test_default_embed_with_empty_batch_is_provider_error() {
    let provider = BatchOnlyProvider {
        returns_nothing: true,
    };

    let err = provider.embed("rust").await.expect_err("no embedding");
    assert!(matches!(err, Error::Embedding { .. }));
}
