//! Domain layer constants
//!
//! Constants that are part of the search domain and are used by the
//! application layer. Provider-specific constants live in `pms-providers`.

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Results returned by a search when the caller does not choose a limit
pub const SEARCH_DEFAULT_LIMIT: usize = 10;

/// Default budget for one embedding provider call (milliseconds)
pub const SEARCH_EMBED_TIMEOUT_MS: u64 = 30_000;

/// Default budget for one vector store operation (milliseconds)
pub const SEARCH_STORE_TIMEOUT_MS: u64 = 5_000;
