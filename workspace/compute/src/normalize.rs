use chrono::NaiveDate;
use common::{Observation, RawObservation};
use tracing::{debug, instrument, warn};

/// Date format used by the upstream source for every observation.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turns the upstream observation list into a chronological series.
///
/// Missing values (".") are dropped. Entries whose date or value does not
/// parse are dropped as well and logged. The upstream sends newest-first, so
/// the list is reversed and then stable-sorted by date; for well-formed input
/// the sort is a no-op and the output is the reversed input.
#[instrument(skip(raw), fields(count = raw.len()))]
pub fn normalize(raw: Vec<RawObservation>) -> Vec<Observation> {
    let mut series: Vec<Observation> = raw
        .into_iter()
        .filter(|obs| !obs.is_missing())
        .filter_map(|obs| parse_observation(&obs))
        .collect();

    series.reverse();
    series.sort_by_key(|obs| obs.date);

    debug!(kept = series.len(), "Normalized observations");
    series
}

fn parse_observation(raw: &RawObservation) -> Option<Observation> {
    let date = match NaiveDate::parse_from_str(raw.date.trim(), DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            warn!(date = %raw.date, error = %e, "Dropping observation with malformed date");
            return None;
        }
    };

    match raw.value.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(Observation::new(date, value)),
        _ => {
            warn!(%date, value = %raw.value, "Dropping observation with non-numeric value");
            None
        }
    }
}
