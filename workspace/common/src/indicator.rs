use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public page for a series on the FRED website.
pub const FRED_SERIES_PAGE: &str = "https://fred.stlouisfed.org/series";

/// How a panel draws its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Area,
}

/// A dashboard indicator backed by one FRED series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Indicator {
    /// FRED series identifier (e.g., "CPIAUCSL")
    pub series_id: String,
    /// Panel heading
    pub title: String,
    /// Series description shown under the heading
    pub description: String,
    pub chart: ChartKind,
}

impl Indicator {
    pub fn new(series_id: &str, title: &str, description: &str, chart: ChartKind) -> Self {
        Self {
            series_id: series_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            chart,
        }
    }

    /// Link to the series details page.
    pub fn details_url(&self) -> String {
        format!("{}/{}", FRED_SERIES_PAGE, self.series_id)
    }
}

/// Indicators shown on the dashboard, in display order.
pub fn default_indicators() -> Vec<Indicator> {
    vec![
        Indicator::new(
            "CPIAUCSL",
            "Consumer Price Index (CPI)",
            "FRED All Urban Consumers: All Items (CPIAUCSL)",
            ChartKind::Line,
        ),
        Indicator::new(
            "UNRATE",
            "Unemployment Rate",
            "FRED Civilian Unemployment Rate (UNRATE)",
            ChartKind::Area,
        ),
        Indicator::new(
            "DGS10",
            "10-Year Treasury Yield",
            "FRED Market Yield on U.S. Treasury Securities (DGS10)",
            ChartKind::Line,
        ),
        Indicator::new(
            "DGS3MO",
            "3-Month Treasury Yield",
            "FRED Market Yield on U.S. Treasury Securities (DGS3MO)",
            ChartKind::Line,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indicators_order() {
        let ids: Vec<_> = default_indicators().into_iter().map(|i| i.series_id).collect();
        assert_eq!(ids, ["CPIAUCSL", "UNRATE", "DGS10", "DGS3MO"]);
    }

    #[test]
    fn test_details_url() {
        assert_eq!(
            default_indicators()[1].details_url(),
            "https://fred.stlouisfed.org/series/UNRATE"
        );
    }
}
