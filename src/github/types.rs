//! Wire shapes of the GitHub code search response.

use serde::Deserialize;

/// Envelope returned by `GET /search/code`.
///
/// The three envelope fields are required; a body without them is treated
/// as undecodable rather than silently empty. Item fields are optional
/// because the provider omits them for some match kinds.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCodeResponse {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<SearchItem>,
}

/// One matched file.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    /// Repository-relative path, kept for diagnostics.
    pub path: Option<String>,
    /// Browser URL of the matched file.
    pub html_url: Option<String>,
    /// Repository the file belongs to.
    pub repository: Option<Repository>,
}

/// Owning repository of a matched file.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: Option<String>,
}
