use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum AvError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was well-formed but missing an expected key or shaped
    /// differently than the documented response envelope.
    #[error("Unexpected response shape: {0}")]
    Data(String),

    /// A timestamp or numeric field failed to parse, or a timezone label
    /// was not recognized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An exchange code with no entry in the symbology table.
    #[error("Unknown exchange code: {0}")]
    UnknownExchange(String),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl AvError {
    /// Whether a batch download drops the affected ticker rather than
    /// failing the whole run. Transport, decode, and shape errors are
    /// per-ticker; parse errors indicate schema drift and surface.
    pub(crate) fn is_per_ticker(&self) -> bool {
        matches!(
            self,
            AvError::Http(_) | AvError::Status { .. } | AvError::Json(_) | AvError::Data(_)
        )
    }
}
