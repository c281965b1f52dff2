//! gRPC front end for the GitHub code search API.
//!
//! Exposes a single `Search` RPC. Each call authenticates with the
//! caller's own GitHub token (forwarded as `github-token` metadata), is
//! validated and mapped onto GitHub's query parameters, performs exactly
//! one outbound `/search/code` request, and returns the matched files as
//! `(file_url, repo)` pairs in provider order.

pub mod config;
pub mod github;
pub mod rpc;
