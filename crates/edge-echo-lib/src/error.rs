use thiserror::Error;

/// Convenient result alias for the edge-echo library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// No variant maps to a non-200 response: the handler only ever fails when the
/// host itself is broken, and such failures surface as invocation errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the diagnostic payload cannot be written into the response body.
    #[error("failed to serialize echo payload: {0}")]
    SerializePayload(#[source] serde_json::Error),

    /// Raised when a response body does not parse as the requested JSON type.
    #[error("response body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),
}
