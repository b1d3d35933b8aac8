use common::{Observation, ObservationsResponse};
use compute::normalize;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info, instrument, trace};

use crate::error::{ClientError, Result};

/// Path of the proxy endpoint, relative to the proxy base URL.
pub const PROXY_PATH: &str = "/api/fred";

/// Result of a fetch that keeps "failed" apart from "no data".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    Loaded { observations: Vec<Observation> },
    Failed { reason: String },
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }

    /// The observations, or an empty series when the fetch failed.
    pub fn into_observations(self) -> Vec<Observation> {
        match self {
            FetchOutcome::Loaded { observations } => observations,
            FetchOutcome::Failed { .. } => Vec::new(),
        }
    }
}

impl From<Result<Vec<Observation>>> for FetchOutcome {
    fn from(result: Result<Vec<Observation>>) -> Self {
        match result {
            Ok(observations) => FetchOutcome::Loaded { observations },
            Err(e) => FetchOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Fetches FRED series through the same-origin proxy.
///
/// The proxy owns the API key; this client only sends the series id and the
/// number of points wanted.
#[derive(Debug, Clone)]
pub struct FredClient {
    http: Client,
    base_url: String,
}

impl FredClient {
    /// Create a client for the proxy at `base_url` (e.g. "http://localhost:3000").
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a series, oldest first, without missing values.
    ///
    /// Failures are logged and turned into an empty series so one broken
    /// indicator does not hold back the others.
    pub async fn fetch(&self, series_id: &str, limit: u32) -> Vec<Observation> {
        self.fetch_outcome(series_id, limit).await.into_observations()
    }

    /// Like [`FredClient::fetch`], but tells a failed fetch apart from an
    /// empty one.
    pub async fn fetch_outcome(&self, series_id: &str, limit: u32) -> FetchOutcome {
        let result = self.try_fetch(series_id, limit).await;
        if let Err(ref e) = result {
            error!("Error fetching FRED data for {}: {}", series_id, e);
        }
        result.into()
    }

    /// Fetch a series and return any failure to the caller.
    #[instrument(skip(self))]
    pub async fn try_fetch(&self, series_id: &str, limit: u32) -> Result<Vec<Observation>> {
        if series_id.trim().is_empty() {
            return Err(ClientError::MissingSeriesId);
        }

        let url = format!("{}{}", self.base_url, PROXY_PATH);
        debug!("GET request to: {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("series_id", series_id.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        trace!("GET {} - Response received, parsing JSON", url);
        let body: ObservationsResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let series = normalize(body.observations);
        info!("Fetched {} observations for {}", series.len(), series_id);
        Ok(series)
    }
}
