//! HTTP client for the GitHub code search API.

use reqwest::header;
use reqwest::Client;

use crate::config::ServiceConfig;

use super::error::GithubError;
use super::types::{SearchCodeResponse, SearchItem};
use super::{BoxFuture, GithubClient, QueryParams};

/// Path of the code search endpoint, relative to the API base URL.
const SEARCH_CODE_PATH: &str = "/search/code";

/// Media type GitHub recommends for REST calls.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// REST API version pinned on every request.
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub client backed by a shared reqwest connection pool.
pub struct HttpGithubClient {
    client: Client,
    base_url: String,
}

impl HttpGithubClient {
    /// Build a client from the service configuration.
    pub fn new(config: &ServiceConfig) -> Result<Self, GithubError> {
        let client = Client::builder()
            .user_agent("ghsearch/0.1")
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.github_base_url.trim_end_matches('/').to_owned(),
        })
    }
}

impl GithubClient for HttpGithubClient {
    fn search_code<'a>(
        &'a self,
        term: &'a str,
        user: Option<&'a str>,
        token: &'a str,
        params: &'a QueryParams,
    ) -> BoxFuture<'a, Result<Vec<SearchItem>, GithubError>> {
        Box::pin(async move {
            let url = format!("{}{}", self.base_url, SEARCH_CODE_PATH);
            // GitHub scopes the search via a qualifier inside the q term
            // rather than a separate parameter.
            let query = match user {
                Some(user) => format!("{} user:{}", term, user),
                None => term.to_owned(),
            };

            tracing::debug!("GET {} q={:?}", url, query);

            let response = self
                .client
                .get(&url)
                .query(&[("q", query.as_str())])
                .query(params)
                .header(header::ACCEPT, GITHUB_ACCEPT)
                .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
                .bearer_auth(token)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "failed to read response body".to_owned());
                return Err(GithubError::UnexpectedStatus { status, body });
            }

            // Read the body first so a bad payload is reported as a decode
            // failure, not a transport one.
            let body = response.text().await?;
            let envelope: SearchCodeResponse = serde_json::from_str(&body)?;

            tracing::debug!(
                "GitHub reported {} total matches (incomplete: {})",
                envelope.total_count,
                envelope.incomplete_results
            );

            Ok(envelope.items)
        })
    }
}
