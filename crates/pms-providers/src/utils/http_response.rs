//! HTTP Response Utilities
//!
//! Status and transport error handling shared by the HTTP embedding
//! providers. Failures map to [`Error::Embedding`] so the search service
//! can report them as unavailable; an expired request timeout maps to
//! [`Error::Timeout`] like any other exceeded time budget.

use crate::constants::EMBEDDING_REQUEST_OPERATION;
use pms_domain::error::{Error, Result};
use reqwest::Response;
use std::time::Duration;

/// Format error message for embedding provider
fn embedding_error(provider: &str, context: &str, details: &str) -> Error {
    Error::embedding(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// | Status | Error message |
    /// |--------|---------------|
    /// | 401 | authentication failed |
    /// | 429 | rate limit exceeded |
    /// | 5xx | server error |
    /// | other non-2xx | request failed |
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => embedding_error(provider_name, "authentication failed", &error_text),
                429 => embedding_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => embedding_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => embedding_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| embedding_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Map a transport error from `send()`
    pub fn transport_error(provider_name: &str, error: &reqwest::Error, timeout: Duration) -> Error {
        if error.is_timeout() {
            Error::timeout(
                format!("{provider_name} {EMBEDDING_REQUEST_OPERATION}"),
                timeout,
            )
        } else {
            embedding_error(provider_name, "HTTP request failed", &error.to_string())
        }
    }

    /// Parse a JSON array of numbers into a vector
    ///
    /// A missing array or a non-numeric component is a malformed response.
    pub fn parse_vector(
        provider_name: &str,
        value: &serde_json::Value,
        what: &str,
    ) -> Result<Vec<f32>> {
        let items = value.as_array().ok_or_else(|| {
            embedding_error(provider_name, "malformed response", &format!("missing {what}"))
        })?;

        items
            .iter()
            .map(|v| {
                v.as_f64().map(|f| f as f32).ok_or_else(|| {
                    embedding_error(
                        provider_name,
                        "malformed response",
                        &format!("non-numeric component in {what}"),
                    )
                })
            })
            .collect()
    }
}
