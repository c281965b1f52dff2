//! GitHub code search backend.
//!
//! The RPC layer talks to GitHub through the [`GithubClient`] trait so that
//! tests can swap in a stub. [`HttpGithubClient`] is the real thing.

pub mod api;
pub mod error;
pub mod types;

use std::future::Future;
use std::pin::Pin;

pub use api::HttpGithubClient;
pub use error::GithubError;
pub use types::SearchItem;

/// Query string parameters in the GitHub API's own vocabulary, in the
/// order they are appended to the request URL.
pub type QueryParams = Vec<(&'static str, String)>;

/// Boxed future used by the dyn-compatible client trait.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Searches code on GitHub on behalf of a single caller.
pub trait GithubClient: Send + Sync {
    /// Run one code search with the caller's credential.
    ///
    /// `token` is used for the outbound `Authorization` header only; it is
    /// never logged or retained.
    fn search_code<'a>(
        &'a self,
        term: &'a str,
        user: Option<&'a str>,
        token: &'a str,
        params: &'a QueryParams,
    ) -> BoxFuture<'a, Result<Vec<SearchItem>, GithubError>>;
}
