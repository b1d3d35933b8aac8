use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use common::{MonthlyPoint, Observation};
use tracing::{instrument, trace, warn};

use crate::error::{ComputeError, Result};

/// Number of months a dashboard chart shows by default.
pub const DEFAULT_MONTH_COUNT: usize = 24;

/// Display format for month labels, e.g. "Jan 24".
pub const LABEL_FORMAT: &str = "%b %y";

/// Collapses a chronological series to one point per calendar month.
///
/// Each month keeps the value of the first observation seen for it in input
/// order. Only the latest `month_count` months are returned, oldest first.
#[instrument(skip(series), fields(count = series.len()))]
pub fn aggregate(series: &[Observation], month_count: usize) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for obs in series {
        months
            .entry((obs.date.year(), obs.date.month()))
            .or_insert(obs.value);
    }

    let skip = months.len().saturating_sub(month_count);
    trace!(months = months.len(), skip, "Selecting trailing months");

    months
        .into_iter()
        .skip(skip)
        .filter_map(|((year, month), value)| match month_label(year, month) {
            Ok(label) => Some(MonthlyPoint::new(label, value)),
            Err(e) => {
                warn!(error = %e, "Skipping month without a label");
                None
            }
        })
        .collect()
}

/// Label for the month containing `date`.
pub fn format_label(date: NaiveDate) -> String {
    date.format(LABEL_FORMAT).to_string()
}

/// Label for a year-month pair, rendered from the first day of that month.
///
/// The two-digit year repeats every century.
pub fn month_label(year: i32, month: u32) -> Result<String> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(format_label)
        .ok_or(ComputeError::InvalidMonth { year, month })
}
