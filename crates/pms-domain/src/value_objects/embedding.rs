//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings produced by an
//! embedding provider.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic meaning.
/// Query embeddings live for a single search call; project embeddings are
/// persisted in the vector store keyed by project identifier.
///
/// ## Business Rules
///
/// - `dimensions` equals `vector.len()`
/// - All embeddings from one provider configuration share a dimension
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use pms_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "text-embedding-3-small");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding, deriving the dimension from the vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Euclidean magnitude of the vector
    pub fn magnitude(&self) -> f64 {
        crate::similarity::magnitude(&self.vector)
    }
}
