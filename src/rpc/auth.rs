//! Credential extraction from inbound call metadata.

use tonic::metadata::MetadataMap;
use tonic::Status;

/// Metadata key the caller's GitHub token travels under.
pub const TOKEN_METADATA_KEY: &str = "github-token";

/// Pull the GitHub token out of call metadata.
///
/// The first value wins when the key is repeated. The token is handed back
/// to the caller for explicit threading; it is never logged here or
/// anywhere downstream.
pub fn token_from_metadata(metadata: &MetadataMap) -> Result<String, Status> {
    let value = metadata
        .get(TOKEN_METADATA_KEY)
        .ok_or_else(|| Status::unauthenticated("github-token is required in metadata"))?;

    let token = value
        .to_str()
        .map_err(|_| Status::unauthenticated("github-token metadata value is not valid ASCII"))?;

    Ok(token.to_owned())
}
