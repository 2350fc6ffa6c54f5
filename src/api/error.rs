use thiserror::Error;

/// The one message end users ever see; the technical cause only goes to the log.
pub const USER_FACING_ERROR: &str =
    "Unable to connect to the API server. Please make sure the API is running and try again.";

/// Failure classes of a search request.
///
/// The user-facing presentation collapses both into [`USER_FACING_ERROR`],
/// but the distinction is kept here for operator diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The network call itself failed: connection refused, DNS failure,
    /// or the response body could not be read off the wire.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but its status was not 2xx.
    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),

    /// A response arrived but its body was not the expected JSON array.
    #[error("malformed response body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The configured base URL does not form a valid request URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}
