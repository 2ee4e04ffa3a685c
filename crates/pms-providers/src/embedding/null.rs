//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use pms_domain::error::Result;
use pms_domain::ports::providers::EmbeddingProvider;
use pms_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_NULL, EMBEDDING_MODEL_NULL};

/// Null embedding provider for testing
///
/// Builds a bag-of-words vector: every lowercase alphanumeric token of the
/// input is hashed into one bucket with a sign of +1 or -1. Texts sharing
/// words therefore score higher under cosine similarity than unrelated
/// texts, which makes ranking tests meaningful without a network service.
/// Text without tokens (including the empty string) yields the zero vector.
///
/// # Example
///
/// ```rust
/// use pms_providers::embedding::NullEmbeddingProvider;
/// use pms_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider with the default dimension
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a null embedding provider producing `dimensions` components
    ///
    /// A dimension of zero is raised to one.
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        EMBEDDING_MODEL_NULL
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let digest = Sha256::digest(token.to_lowercase().as_bytes());
            let mut bucket_bytes = [0u8; 8];
            bucket_bytes.copy_from_slice(&digest[..8]);
            let bucket = u64::from_le_bytes(bucket_bytes) % self.dimensions as u64;
            let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
            // bucket < dimensions, so the cast back is lossless
            vector[bucket as usize] += sign;
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(self.embed_text(text), EMBEDDING_MODEL_NULL))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
