//! Rider demographics.

use serde::Serialize;

use crate::model::Dataset;

use super::{count_by, mode};

/// Gender and birth-year breakdown, available only when the city's export carries
/// the demographics columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Demographics {
    /// The source schema has no `Gender`/`Birth Year` columns. This is a normal
    /// per-city schema variant, not a fault.
    Unavailable,
    /// The columns exist; individual figures may still be `None` when every cell
    /// is empty.
    Available(DemographicStats),
}

/// Demographics figures for a dataset whose schema carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemographicStats {
    /// Gender frequency, descending count, ties in first-seen order. Records with
    /// an empty gender cell are not counted.
    pub gender_counts: Vec<(String, u64)>,
    /// Minimum of the present birth years.
    pub earliest_birth_year: Option<i32>,
    /// Maximum of the present birth years.
    pub most_recent_birth_year: Option<i32>,
    /// Mode of the present birth years, first-seen-among-tied-max.
    pub most_common_birth_year: Option<i32>,
}

/// User type and demographics breakdown of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// User type frequency, descending count, ties in first-seen order.
    pub user_type_counts: Vec<(String, u64)>,
    /// Demographics, or the unavailable marker for cities without those columns.
    pub demographics: Demographics,
}

/// Compute [`UserStats`] for `dataset`.
///
/// The demographics portion follows the dataset's schema capability flag: a city
/// without `Gender`/`Birth Year` columns yields [`Demographics::Unavailable`] while
/// `user_type_counts` is still computed normally.
pub fn compute_user_stats(dataset: &Dataset) -> UserStats {
    let user_type_counts = count_by(dataset.records.iter().map(|r| r.user_type.clone()));

    let demographics = if dataset.has_demographics {
        let years = || dataset.records.iter().filter_map(|r| r.birth_year);
        Demographics::Available(DemographicStats {
            gender_counts: count_by(dataset.records.iter().filter_map(|r| r.gender.clone())),
            earliest_birth_year: years().min(),
            most_recent_birth_year: years().max(),
            most_common_birth_year: mode(years()),
        })
    } else {
        Demographics::Unavailable
    };

    UserStats {
        user_type_counts,
        demographics,
    }
}
