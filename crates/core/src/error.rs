// Central Error Type for the Core

use thiserror::Error;

/// Why a queue mapping fetch produced no mapping.
///
/// All variants degrade to the same "unavailable" sentinel at the
/// service boundary; the tagged form exists so callers that care can
/// still tell a dead API from a malformed response.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport fault: {0}")]
    Transport(#[from] crate::port::ClientError),

    #[error("Response has no `data` field")]
    MissingData,

    #[error("Response `data` is not an array (found {found})")]
    MalformedData { found: &'static str },
}

/// Result type alias using FetchError
pub type FetchResult<T> = std::result::Result<T, FetchError>;
