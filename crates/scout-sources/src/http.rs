//! Shared HTTP helpers for the crawlers.
//!
//! Centralizes client construction and status-code checks (429 rate limiting
//! with `Retry-After` parsing, non-success → [`SourceError::Api`]) so each
//! crawler stays focused on request construction and response mapping.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::SourceError;

/// Build a client with the given user agent and per-request timeout.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, SourceError> {
    Ok(reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?)
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`SourceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`SourceError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(SourceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(SourceError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a JSON body, reporting shape mismatches as [`SourceError::Parse`].
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, SourceError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| SourceError::Parse(e.to_string()))
}

/// First `max` characters of `text`, or `None` when it is empty.
pub fn preview(text: Option<&str>, max: usize) -> Option<String> {
    text.filter(|t| !t.is_empty())
        .map(|t| t.chars().take(max).collect())
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
