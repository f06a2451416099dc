//! Most popular stations and routes.

use serde::Serialize;

use crate::model::Dataset;

use super::mode;

/// Most frequent start station, end station and route of a dataset.
///
/// Fields are `None` when no record carries the underlying value (empty dataset, or
/// no record with a defined route).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    /// Mode of `start_station`.
    pub most_common_start_station: Option<String>,
    /// Mode of `end_station`, over records that have one.
    pub most_common_end_station: Option<String>,
    /// Mode of `route`, over records that have one.
    ///
    /// Records without an end station have no route and do not participate here;
    /// they still count toward the other aggregations.
    pub most_common_route: Option<String>,
}

/// Compute [`StationStats`] for `dataset`.
///
/// Ties resolve to the value first seen in iteration order (see [`super::mode`]).
pub fn compute_station_stats(dataset: &Dataset) -> StationStats {
    StationStats {
        most_common_start_station: mode(dataset.records.iter().map(|r| &r.start_station)).cloned(),
        most_common_end_station: mode(dataset.records.iter().filter_map(|r| r.end_station.as_ref()))
            .cloned(),
        most_common_route: mode(dataset.records.iter().filter_map(|r| r.route.as_ref())).cloned(),
    }
}
