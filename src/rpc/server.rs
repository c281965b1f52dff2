//! gRPC server for the code search service
//!
//! Handles Search requests by forwarding them to GitHub with the caller's
//! own credential and projecting the hits into a minimal result list.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::config::ServiceConfig;
use crate::github::{GithubClient, GithubError, HttpGithubClient, SearchItem};

use super::auth;
use super::params;
use super::proto::github_search_server::{GithubSearch, GithubSearchServer};
use super::proto::{SearchRequest, SearchResponse, SearchResult};

/// gRPC service implementation
pub struct GithubSearchService {
    github: Arc<dyn GithubClient>,
}

impl GithubSearchService {
    pub fn new(github: Arc<dyn GithubClient>) -> Self {
        Self { github }
    }
}

#[tonic::async_trait]
impl GithubSearch for GithubSearchService {
    async fn search(
        &self,
        request: Request<SearchRequest>,
    ) -> Result<Response<SearchResponse>, Status> {
        let token = auth::token_from_metadata(request.metadata())?;
        let req = request.into_inner();

        tracing::info!(
            "RPC: search term={:?} user={:?}",
            req.search_term,
            req.user
        );

        if req.search_term.is_empty() {
            return Err(Status::invalid_argument("search_term must not be empty"));
        }
        let params = params::map_search_params(&req)?;
        let user = if req.user.is_empty() {
            None
        } else {
            Some(req.user.as_str())
        };

        let items = self
            .github
            .search_code(&req.search_term, user, &token, &params)
            .await
            .map_err(github_status)?;

        let results = project_results(items);
        tracing::info!("Found {} results", results.len());

        Ok(Response::new(SearchResponse { results }))
    }
}

/// Map raw search items onto the reply shape, in order.
///
/// Items missing the file URL or the repository name are dropped; partial
/// records are expected provider noise, not an error.
fn project_results(items: Vec<SearchItem>) -> Vec<SearchResult> {
    items
        .into_iter()
        .filter_map(|item| {
            let file_url = item.html_url.filter(|url| !url.is_empty());
            let full_name = item
                .repository
                .and_then(|repo| repo.full_name)
                .filter(|name| !name.is_empty());

            match (file_url, full_name) {
                (Some(file_url), Some(full_name)) => Some(SearchResult {
                    file_url,
                    repo: format!("https://github.com/{}", full_name),
                }),
                _ => {
                    tracing::debug!("Skipping incomplete search item: path={:?}", item.path);
                    None
                }
            }
        })
        .collect()
}

/// Classify a backend failure for the RPC surface.
///
/// The message keeps the backend's diagnostic detail; credentials never
/// appear in it.
fn github_status(err: GithubError) -> Status {
    let message = format!("failed to search files on GitHub: {}", err);
    match err {
        GithubError::UnexpectedStatus { .. } => Status::unavailable(message),
        GithubError::Parse(_) => Status::internal(message),
        GithubError::Http(_) => Status::unknown(message),
    }
}

/// Start the gRPC server and block until shutdown
pub async fn start_server(
    config: ServiceConfig,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = format!("0.0.0.0:{}", port).parse()?;
    let github = HttpGithubClient::new(&config)?;
    let service = GithubSearchService::new(Arc::new(github));

    tracing::info!("Starting gRPC server on {}", addr);

    tonic::transport::Server::builder()
        .add_service(GithubSearchServer::new(service))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    tracing::info!("gRPC server stopped");

    Ok(())
}

/// Resolve once SIGINT or SIGTERM arrives, letting in-flight calls drain.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = match signal(SignalKind::terminate()) {
            Ok(term) => term,
            Err(e) => {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                return;
            }
        };
        tokio::select! {
            _ = ctrl_c => {}
            _ = term.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = ctrl_c.await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
    }

    tracing::info!("Stopping gRPC server...");
}
