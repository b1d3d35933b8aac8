use axum::response::Json;
use common::{default_indicators, Indicator};
use tracing::instrument;
use crate::schemas::ApiResponse;

/// List the indicators shown on the dashboard
#[utoipa::path(
    get,
    path = "/api/v1/indicators",
    tag = "indicators",
    responses(
        (status = 200, description = "Indicators retrieved successfully", body = ApiResponse<Vec<Indicator>>)
    )
)]
#[instrument]
pub async fn get_indicators() -> Json<ApiResponse<Vec<Indicator>>> {
    Json(ApiResponse {
        data: default_indicators(),
        message: "Indicators retrieved successfully".to_string(),
        success: true,
    })
}
