//! Error types for the GitHub search backend.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the GitHub code search API.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The request could not be sent or the response body not read.
    #[error("request to GitHub failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-success status code.
    #[error("GitHub API returned an error: {status} (response: {body})")]
    UnexpectedStatus {
        /// HTTP status GitHub replied with.
        status: StatusCode,
        /// Response body, read best effort for diagnostics.
        body: String,
    },

    /// The response body is not the expected search envelope.
    #[error("failed to decode GitHub response: {0}")]
    Parse(#[from] serde_json::Error),
}
