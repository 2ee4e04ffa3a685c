//! Embedding Provider Implementations
//!
//! Converts project descriptions and search queries into dense vectors.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | OllamaEmbeddingProvider | Local | Complete |
//! | OpenAIEmbeddingProvider | Cloud | Complete |
//!
//! ## Provider Selection Guide
//!
//! - **Tests and offline development**: `NullEmbeddingProvider`
//! - **Local/Privacy-First**: `OllamaEmbeddingProvider`
//! - **Production**: `OpenAIEmbeddingProvider`

pub mod helpers;
pub mod null;
#[cfg(feature = "embedding-ollama")]
pub mod ollama;
#[cfg(feature = "embedding-openai")]
pub mod openai;

// Re-export for convenience
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingProvider;
#[cfg(feature = "embedding-openai")]
pub use openai::OpenAIEmbeddingProvider;
