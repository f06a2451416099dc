//! Total and mean trip duration.

use serde::Serialize;

use crate::model::Dataset;

/// Total and mean trip duration in seconds.
///
/// Records without a duration cell are excluded from both figures (never treated as
/// zero). When no record carries a duration, both are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    /// Sum of all present durations.
    pub total_secs: Option<f64>,
    /// Arithmetic mean of all present durations.
    pub mean_secs: Option<f64>,
}

/// Compute [`DurationStats`] for `dataset`.
pub fn compute_duration_stats(dataset: &Dataset) -> DurationStats {
    let mut total = 0.0;
    let mut count: u64 = 0;
    for secs in dataset.records.iter().filter_map(|r| r.trip_duration_secs) {
        total += secs;
        count += 1;
    }

    if count == 0 {
        return DurationStats {
            total_secs: None,
            mean_secs: None,
        };
    }
    DurationStats {
        total_secs: Some(total),
        mean_secs: Some(total / count as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CityId;
    use crate::model::TripRecord;
    use chrono::NaiveDate;

    fn record(duration: Option<f64>) -> TripRecord {
        TripRecord::new(
            NaiveDate::from_ymd_opt(2017, 1, 2)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            None,
            "A".to_string(),
            Some("B".to_string()),
            duration,
            "Subscriber".to_string(),
            None,
            None,
        )
    }

    #[test]
    fn sums_and_averages_present_durations() {
        let ds = Dataset::new(
            CityId::Chicago,
            vec![record(Some(100.0)), record(Some(300.0))],
            false,
        );
        let stats = compute_duration_stats(&ds);
        assert_eq!(stats.total_secs, Some(400.0));
        assert_eq!(stats.mean_secs, Some(200.0));
    }

    #[test]
    fn missing_durations_are_excluded_not_zeroed() {
        let ds = Dataset::new(
            CityId::Chicago,
            vec![record(Some(100.0)), record(None), record(Some(300.0))],
            false,
        );
        let stats = compute_duration_stats(&ds);
        assert_eq!(stats.total_secs, Some(400.0));
        // Mean over the two present values, not three.
        assert_eq!(stats.mean_secs, Some(200.0));
    }

    #[test]
    fn all_missing_reports_undefined_never_zero() {
        let ds = Dataset::new(CityId::Washington, vec![record(None), record(None)], false);
        let stats = compute_duration_stats(&ds);
        assert_eq!(stats.total_secs, None);
        assert_eq!(stats.mean_secs, None);
    }

    #[test]
    fn empty_dataset_reports_undefined() {
        let ds = Dataset::new(CityId::Washington, vec![], false);
        let stats = compute_duration_stats(&ds);
        assert_eq!(stats.total_secs, None);
        assert_eq!(stats.mean_secs, None);
    }
}
