pub mod error;
pub mod monthly;
pub mod normalize;

pub use monthly::{aggregate, format_label, month_label, DEFAULT_MONTH_COUNT};
pub use normalize::normalize;

use common::{MonthlyPoint, RawObservation};

/// Runs the whole pipeline on an upstream observation list: normalize, then
/// aggregate to the latest `month_count` months.
pub fn monthly_series(raw: Vec<RawObservation>, month_count: usize) -> Vec<MonthlyPoint> {
    let series = normalize(raw);
    aggregate(&series, month_count)
}
