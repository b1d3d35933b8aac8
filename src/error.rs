use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::schemas::ErrorResponse;

/// Errors the FRED proxy reports to its callers
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The request did not name a series
    #[error("series_id is required")]
    MissingSeriesId,

    /// The limit parameter is not a whole number
    #[error("limit must be a non-negative integer, got '{0}'")]
    InvalidLimit(String),

    /// The query string could not be read at all
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// No FRED API key was configured at startup
    #[error("FRED API key not configured")]
    ApiKeyNotConfigured,

    /// The upstream call failed (network, status or body)
    #[error("FRED API error: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingSeriesId
            | ProxyError::InvalidLimit(_)
            | ProxyError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ProxyError::ApiKeyNotConfigured | ProxyError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ProxyError::MissingSeriesId => "MISSING_SERIES_ID",
            ProxyError::InvalidLimit(_) => "INVALID_LIMIT",
            ProxyError::InvalidQuery(_) => "INVALID_QUERY",
            ProxyError::ApiKeyNotConfigured => "API_KEY_NOT_CONFIGURED",
            ProxyError::Upstream(_) => "UPSTREAM_FAILURE",
        }
    }

    /// Message sent to the client; upstream details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            ProxyError::Upstream(_) => "Failed to fetch FRED data".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL, it carries the API key.
        ProxyError::Upstream(err.without_url().to_string())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.public_message(), self.code());
        (self.status_code(), Json(body)).into_response()
    }
}
