//! Shared reqwest client for the HTTP adapters.

use crate::domain::DomainError;
use reqwest::Client;
use std::time::Duration;

/// How much of an unexpected response body is kept in error messages.
const BODY_SNIPPET_CHARS: usize = 200;

/// Build the client used by both lookups. `timeout: None` leaves requests unbounded.
pub fn build_client(user_agent: &str, timeout: Option<Duration>) -> Result<Client, DomainError> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| DomainError::Transport(format!("failed to create HTTP client: {}", e)))
}

/// Truncate a response body for logging.
pub(crate) fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}
