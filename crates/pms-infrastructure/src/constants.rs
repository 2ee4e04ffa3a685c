//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "pms.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Configuration directory name under the user config directory
pub const USER_CONFIG_DIR: &str = "pms";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PMS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Embedding provider names accepted in configuration
pub mod embedding_providers {
    /// OpenAI embeddings API
    pub const OPENAI: &str = "openai";
    /// Local Ollama server
    pub const OLLAMA: &str = "ollama";
    /// Deterministic offline provider
    pub const NULL: &str = "null";
}

/// Vector store provider names accepted in configuration
pub mod vector_store_providers {
    /// Non-persistent concurrent map
    pub const MEMORY: &str = "memory";
    /// Alias of [`MEMORY`]
    pub const IN_MEMORY: &str = "in_memory";
    /// Single record file on local disk
    pub const FILESYSTEM: &str = "filesystem";
}

/// Default embedding provider
pub const DEFAULT_EMBEDDING_PROVIDER: &str = embedding_providers::OLLAMA;

/// Default embedding request timeout in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

/// Default vector store provider
pub const DEFAULT_VECTOR_STORE_PROVIDER: &str = vector_store_providers::FILESYSTEM;

/// Default vector store location
pub const DEFAULT_VECTOR_STORE_PATH: &str = "./data/embeds.csv";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "PMS_LOG";

/// Log file name prefix when the configured path has no file stem
pub const LOG_FILE_PREFIX: &str = "pms";
