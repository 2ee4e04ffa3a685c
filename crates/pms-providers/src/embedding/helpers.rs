//! Common helpers for embedding providers
//!
//! Shared functionality used across the HTTP embedding providers.

use pms_domain::error::{Error, Result};
use pms_domain::value_objects::Embedding;
use std::time::Duration;

/// Common constructor patterns used by embedding providers
pub mod constructor {
    use std::time::Duration;

    use crate::constants::HTTP_REQUEST_TIMEOUT_SECS;

    /// Trim surrounding whitespace from an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim surrounding whitespace and any trailing slash from a URL
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Default timeout when not specified
    pub fn default_timeout() -> Duration {
        Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS)
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_url.to_string())
    }
}

/// Build an HTTP client with the given request timeout
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))
}

/// Wrap a parsed vector, rejecting a length other than `expected`
pub fn checked_embedding(
    provider_name: &str,
    vector: Vec<f32>,
    model: &str,
    expected: usize,
) -> Result<Embedding> {
    if vector.len() != expected {
        return Err(Error::embedding(format!(
            "{provider_name} malformed response: expected {expected} components, got {}",
            vector.len()
        )));
    }
    Ok(Embedding::new(vector, model))
}
