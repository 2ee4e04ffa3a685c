use crate::error::{Error, Result};
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Semantic Understanding Interface
///
/// Defines the contract for providers that transform text into semantic
/// embeddings. Implementations range from hosted APIs (OpenAI) to local
/// servers (Ollama) and the deterministic offline provider used in tests.
///
/// Failures of the underlying call (network, malformed response, rate
/// limiting, provider-side error status) are reported as
/// [`Error::Embedding`]. Repeated calls with identical text are not
/// required to return bit-identical vectors.
///
/// # Default Implementations
///
/// The `embed()` method has a default implementation that delegates to
/// `embed_batch()` with a single item. Providers only need to implement
/// `embed_batch()` unless custom single-item optimization is needed.
///
/// # Example
///
/// ```ignore
/// use pms_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("Frontend development projects").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "openai", "ollama", "null")
    fn provider_name(&self) -> &str;
}
