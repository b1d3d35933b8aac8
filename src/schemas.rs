use std::sync::Arc;

use common::{ChartKind, Indicator};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::config::ProxyConfig;

pub use common::{ApiResponse, ErrorResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Proxy configuration resolved at startup
    pub config: Arc<ProxyConfig>,
    /// HTTP client used for upstream requests
    pub http: reqwest::Client,
}

/// Query parameters for the FRED proxy endpoint
#[derive(Debug, Deserialize, Serialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct FredQuery {
    /// FRED series identifier (e.g., CPIAUCSL)
    pub series_id: Option<String>,
    /// Number of most recent observations to request (default 100)
    pub limit: Option<String>,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the FRED API key is configured
    pub api_key: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::fred::get_fred_observations,
        crate::handlers::indicators::get_indicators,
    ),
    components(
        schemas(
            ApiResponse<Vec<Indicator>>,
            ErrorResponse,
            HealthResponse,
            FredQuery,
            Indicator,
            ChartKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "fred", description = "FRED proxy endpoints"),
        (name = "indicators", description = "Dashboard indicator catalog"),
    ),
    info(
        title = "econdash API",
        description = "Economic indicators dashboard backend - proxies FRED series observations",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
