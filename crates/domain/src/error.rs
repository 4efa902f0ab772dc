//! Error types shared across the workspace.
//!
//! Every failure of a poll ends up as a [`FetchError`]. Adapters convert
//! their transport errors into it; the application layer reports it and
//! keeps the previously rendered snapshot.

/// Why a snapshot could not be obtained from the server.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (offline, DNS, CORS, aborted…).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error text from the server's `{"error": …}` body, or the status line.
        message: String,
    },

    /// The body was not valid JSON or did not have the expected shape.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}
