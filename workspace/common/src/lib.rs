//! Common transport-layer types shared between the proxy server, the compute
//! pipeline and the fetch client.
//! These structs mirror the upstream observation payload and the server's
//! response shapes so every crate deserializes them without duplicating shapes.

mod indicator;
mod observation;

pub use indicator::{default_indicators, ChartKind, Indicator, FRED_SERIES_PAGE};
pub use observation::{
    MonthlyPoint, Observation, ObservationsResponse, RawObservation, MISSING_VALUE,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of raw observations requested when the caller has no preference.
pub const DEFAULT_LIMIT: u32 = 100;

/// Generic API response wrapper used by the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error body returned by the server for every rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}
