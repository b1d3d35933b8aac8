use thiserror::Error;

/// Errors that can occur while fetching a series through the proxy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No series identifier was given.
    #[error("series_id is required")]
    MissingSeriesId,

    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Http(String),

    /// The proxy answered with a non-success status.
    #[error("API error: {0}")]
    Status(u16),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}

/// Type alias for Result with ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
