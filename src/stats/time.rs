//! Most frequent times of travel.

use serde::Serialize;

use crate::model::Dataset;

use super::mode;

/// Most frequent month, weekday and start hour of a dataset.
///
/// Each field is `None` on an empty dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// Mode of the records' start month (full name).
    pub most_common_month: Option<&'static str>,
    /// Mode of the records' start weekday (full name).
    pub most_common_day: Option<&'static str>,
    /// Mode of the records' start hour (0-23).
    pub most_common_hour: Option<u32>,
}

/// Compute [`TimeStats`] for `dataset`.
///
/// Ties resolve to the value first seen in iteration order (see [`super::mode`]).
pub fn compute_time_stats(dataset: &Dataset) -> TimeStats {
    TimeStats {
        most_common_month: mode(dataset.records.iter().map(|r| r.month_name)),
        most_common_day: mode(dataset.records.iter().map(|r| r.day_name)),
        most_common_hour: mode(dataset.records.iter().map(|r| r.start_hour)),
    }
}
