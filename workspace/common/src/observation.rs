use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder FRED reports instead of a number when a date has no measurement.
pub const MISSING_VALUE: &str = ".";

/// One entry of the upstream `observations` array, exactly as FRED sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RawObservation {
    /// Calendar day (YYYY-MM-DD)
    pub date: String,
    /// Numeric value encoded as a string, or "." when missing
    pub value: String,
}

impl RawObservation {
    pub fn new(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: value.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value == MISSING_VALUE
    }
}

/// The part of the upstream observations document the client reads.
///
/// FRED also returns paging and realtime metadata; those fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationsResponse {
    #[serde(default)]
    pub observations: Vec<RawObservation>,
}

/// A parsed data point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// One chart point per calendar month.
///
/// The label is serialized under `date` because chart consumers key the
/// x-axis on that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyPoint {
    /// Short display label such as "Jan 24"
    #[serde(rename = "date")]
    pub label: String,
    pub value: f64,
}

impl MonthlyPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
