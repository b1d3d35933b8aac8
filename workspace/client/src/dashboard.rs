use std::fmt;

use chrono::{Local, NaiveDate};
use common::{Indicator, MonthlyPoint, DEFAULT_LIMIT};
use compute::{aggregate, DEFAULT_MONTH_COUNT};
use futures_util::future::join_all;
use serde::Serialize;
use tracing::{info, instrument};

use crate::fred::{FetchOutcome, FredClient};

/// Text shown in place of a chart that has nothing to draw.
pub const NO_DATA_PLACEHOLDER: &str = "No data available";

/// How much history the dashboard loads and shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Raw observations requested per series
    pub limit: u32,
    /// Months kept per chart
    pub month_count: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            month_count: DEFAULT_MONTH_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PanelStatus {
    Ready,
    Empty,
    Failed { reason: String },
}

/// One indicator chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub indicator: Indicator,
    pub details_url: String,
    pub points: Vec<MonthlyPoint>,
    #[serde(flatten)]
    pub status: PanelStatus,
}

impl Panel {
    fn from_outcome(indicator: Indicator, outcome: FetchOutcome, month_count: usize) -> Self {
        let details_url = indicator.details_url();
        match outcome {
            FetchOutcome::Loaded { observations } => {
                let points = aggregate(&observations, month_count);
                let status = if points.is_empty() {
                    PanelStatus::Empty
                } else {
                    PanelStatus::Ready
                };
                Self {
                    indicator,
                    details_url,
                    points,
                    status,
                }
            }
            FetchOutcome::Failed { reason } => Self {
                indicator,
                details_url,
                points: Vec::new(),
                status: PanelStatus::Failed { reason },
            },
        }
    }

    pub fn has_data(&self) -> bool {
        !self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Day the dashboard was loaded ("Last Updated")
    pub generated_on: NaiveDate,
    pub panels: Vec<Panel>,
}

impl Dashboard {
    pub fn failed_panels(&self) -> usize {
        self.panels
            .iter()
            .filter(|p| matches!(p.status, PanelStatus::Failed { .. }))
            .count()
    }
}

/// Loads every indicator at once and waits for all of them to settle.
///
/// Each fetch writes only its own panel; a failed series becomes a
/// `Failed` panel and never affects the others.
#[instrument(skip(client, indicators), fields(indicators = indicators.len()))]
pub async fn load_dashboard(
    client: &FredClient,
    indicators: &[Indicator],
    options: DashboardOptions,
) -> Dashboard {
    let outcomes = join_all(
        indicators
            .iter()
            .map(|indicator| client.fetch_outcome(&indicator.series_id, options.limit)),
    )
    .await;

    let panels: Vec<Panel> = indicators
        .iter()
        .cloned()
        .zip(outcomes)
        .map(|(indicator, outcome)| Panel::from_outcome(indicator, outcome, options.month_count))
        .collect();

    let dashboard = Dashboard {
        generated_on: Local::now().date_naive(),
        panels,
    };
    info!(
        failed = dashboard.failed_panels(),
        "Dashboard loaded with {} panels",
        dashboard.panels.len()
    );
    dashboard
}

/// Plain-text rendering of the dashboard, one block per panel.
pub fn render_text(dashboard: &Dashboard) -> String {
    dashboard.to_string()
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Economic Indicators Dashboard")?;
        writeln!(
            f,
            "Real-time economic data from the Federal Reserve Economic Data (FRED) system"
        )?;

        for panel in &self.panels {
            writeln!(f)?;
            writeln!(f, "{}", panel.indicator.title)?;
            writeln!(f, "{}", panel.indicator.description)?;
            if panel.has_data() {
                for point in &panel.points {
                    writeln!(f, "  {:<8}{:>12.2}", point.label, point.value)?;
                }
            } else {
                writeln!(f, "  {}", NO_DATA_PLACEHOLDER)?;
            }
            writeln!(
                f,
                "Last Updated: {}  View Details: {}",
                self.generated_on, panel.details_url
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{default_indicators, Observation};

    fn observations() -> Vec<Observation> {
        vec![
            Observation::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 1.0),
            Observation::new(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(), 5.0),
        ]
    }

    #[test]
    fn test_panel_status_from_outcome() {
        let indicator = default_indicators().remove(0);

        let ready = Panel::from_outcome(
            indicator.clone(),
            FetchOutcome::Loaded { observations: observations() },
            24,
        );
        assert_eq!(ready.status, PanelStatus::Ready);
        assert_eq!(ready.points.len(), 2);

        let empty = Panel::from_outcome(
            indicator.clone(),
            FetchOutcome::Loaded { observations: vec![] },
            24,
        );
        assert_eq!(empty.status, PanelStatus::Empty);

        let failed = Panel::from_outcome(
            indicator,
            FetchOutcome::Failed { reason: "API error: 500".to_string() },
            24,
        );
        assert!(!failed.has_data());
        assert_eq!(
            failed.status,
            PanelStatus::Failed { reason: "API error: 500".to_string() }
        );
    }

    #[test]
    fn test_render_text_shows_placeholder_for_empty_panels() {
        let mut indicators = default_indicators().into_iter();
        let dashboard = Dashboard {
            generated_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            panels: vec![
                Panel::from_outcome(
                    indicators.next().unwrap(),
                    FetchOutcome::Loaded { observations: observations() },
                    24,
                ),
                Panel::from_outcome(
                    indicators.next().unwrap(),
                    FetchOutcome::Failed { reason: "boom".to_string() },
                    24,
                ),
            ],
        };

        let text = render_text(&dashboard);

        assert!(text.contains("Consumer Price Index (CPI)"));
        assert!(text.contains("Jan 24"));
        assert!(text.contains("Feb 24"));
        assert!(text.contains("Unemployment Rate"));
        assert_eq!(text.matches(NO_DATA_PLACEHOLDER).count(), 1);
        assert!(text.contains("https://fred.stlouisfed.org/series/UNRATE"));
        assert!(text.contains("Last Updated: 2024-03-01"));
        assert_eq!(text, dashboard.to_string());
    }

    #[test]
    fn test_render_text_point_layout() {
        let dashboard = Dashboard {
            generated_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            panels: vec![Panel::from_outcome(
                default_indicators().remove(0),
                FetchOutcome::Loaded { observations: observations() },
                24,
            )],
        };

        let rendered = render_text(&dashboard);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Economic Indicators Dashboard");
        assert_eq!(lines[2], "");
        assert_eq!(lines[5], "  Jan 24          1.00");
        assert_eq!(lines[6], "  Feb 24          5.00");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_default_options_use_shared_limit() {
        assert_eq!(DashboardOptions::default().limit, common::DEFAULT_LIMIT);
        assert_eq!(DashboardOptions::default().month_count, DEFAULT_MONTH_COUNT);
    }
}
