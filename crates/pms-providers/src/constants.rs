//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in pms-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider default dimension
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Null embedding provider model name
pub const EMBEDDING_MODEL_NULL: &str = "null-test";

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

// ============================================================================
// EMBEDDING API CONSTANTS
// ============================================================================

/// OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI default embedding model
pub const OPENAI_DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Ollama server default URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama default embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds (for embedding API calls)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Operation named in the timeout error of an embedding request
pub const EMBEDDING_REQUEST_OPERATION: &str = "embedding request";

// ============================================================================
// FILESYSTEM VECTOR STORE CONSTANTS
// ============================================================================

/// Default directory of the filesystem vector store
pub const FILESYSTEM_DEFAULT_BASE_PATH: &str = "./data";

/// Default file name of the filesystem vector store
pub const FILESYSTEM_DEFAULT_FILE_NAME: &str = "embeds.csv";

/// Header line of the vector record file
pub const VECTOR_FILE_HEADER: &str = "id,embedding";
