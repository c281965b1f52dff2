//! RPC module for the code search service
//!
//! Implements the GithubSearch gRPC service: credential extraction,
//! parameter mapping, and the Search handler itself.

pub mod auth;
pub mod params;
pub mod server;

// Include generated protobuf code
pub mod proto {
    tonic::include_proto!("githubsearch");
}

/// Default port for the search service
pub const DEFAULT_PORT: u16 = 50051;
