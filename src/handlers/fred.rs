use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use common::DEFAULT_LIMIT;
use serde::de::IgnoredAny;
use tracing::{debug, error, instrument};

use crate::error::ProxyError;
use crate::schemas::{AppState, FredQuery};

/// Proxy a FRED series observations request.
///
/// Attaches the configured API key, asks for JSON in descending date order and
/// relays the upstream body unchanged.
#[utoipa::path(
    get,
    path = "/api/fred",
    tag = "fred",
    params(FredQuery),
    responses(
        (status = 200, description = "Upstream observations document, relayed verbatim"),
        (status = 400, description = "series_id is missing or limit is not a number", body = crate::schemas::ErrorResponse),
        (status = 500, description = "API key not configured or upstream failure", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_fred_observations(
    query: Result<Query<FredQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Response, ProxyError> {
    let Query(query) = query.map_err(|e| ProxyError::InvalidQuery(e.body_text()))?;

    let series_id = query
        .series_id
        .filter(|id| !id.is_empty())
        .ok_or(ProxyError::MissingSeriesId)?;
    let limit = parse_limit(query.limit.as_deref())?;

    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(ProxyError::ApiKeyNotConfigured)?;

    let result = fetch_upstream(&state, &series_id, api_key, limit).await;
    if let Err(ref e) = result {
        error!("Error fetching FRED data for {}: {}", series_id, e);
    }
    let body = result?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Absent or empty means the default; anything else must be a whole number.
fn parse_limit(raw: Option<&str>) -> Result<u32, ProxyError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LIMIT),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| ProxyError::InvalidLimit(value.to_string())),
    }
}

async fn fetch_upstream(
    state: &AppState,
    series_id: &str,
    api_key: &str,
    limit: u32,
) -> Result<Bytes, ProxyError> {
    debug!("Forwarding {} (limit {}) to {}", series_id, limit, state.config.upstream_base);

    let response = state
        .http
        .get(&state.config.upstream_base)
        .query(&[
            ("series_id", series_id.to_string()),
            ("api_key", api_key.to_string()),
            ("file_type", "json".to_string()),
            ("limit", limit.to_string()),
            ("sort_order", "desc".to_string()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ProxyError::Upstream(format!("status {}", response.status())));
    }

    let body = response.bytes().await?;
    // Relayed byte for byte, but only if it is JSON at all.
    serde_json::from_slice::<IgnoredAny>(&body)
        .map_err(|e| ProxyError::Upstream(format!("invalid JSON body: {}", e)))?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None).unwrap(), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("")).unwrap(), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some(" 12 ")).unwrap(), 12);
        assert!(matches!(parse_limit(Some("abc")), Err(ProxyError::InvalidLimit(v)) if v == "abc"));
        assert!(matches!(parse_limit(Some("-1")), Err(ProxyError::InvalidLimit(_))));
    }
}
