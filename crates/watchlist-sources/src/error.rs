use thiserror::Error;

/// Errors raised while talking to an external catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure: connect, timeout, body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// The body was not the payload we expected.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Missing API key or similar setup problem.
    #[error("Catalog not configured: {0}")]
    NotConfigured(String),
}
