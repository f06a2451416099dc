//! Descriptive statistics over a (possibly filtered) [`crate::model::Dataset`].
//!
//! Four independent aggregators, each pure and order-independent:
//!
//! - [`compute_time_stats`]: most common month / weekday / start hour
//! - [`compute_station_stats`]: most common start / end station and route
//! - [`compute_duration_stats`]: total and mean trip duration
//! - [`compute_user_stats`]: user type, gender and birth year breakdown
//!
//! Statistics that cannot be computed (empty dataset, schema without demographics
//! columns, all duration cells absent) come back as explicit `None`/unavailable
//! markers, never as zeros and never as errors.
//!
//! ## Mode tie-break
//!
//! Whenever several values share the maximum frequency, the one seen first in the
//! dataset's current iteration order wins. The same rule orders equal counts in the
//! frequency tables. Tests pin this down; naive mode implementations differ on ties.
//!
//! ## Example: filter → aggregate
//!
//! ```rust
//! use bikeshare_stats::filter::{filter_data, DayFilter, FilterSpec, MonthFilter};
//! use bikeshare_stats::loader::{load_from_reader, CityId};
//! use bikeshare_stats::stats::{compute_duration_stats, compute_time_stats};
//!
//! let csv = "\
//! Start Time,End Time,Trip Duration,Start Station,End Station,User Type
//! 2017-01-02 08:00:00,2017-01-02 08:05:00,300,A,B,Subscriber
//! 2017-02-07 17:30:00,2017-02-07 17:40:00,600,C,D,Customer
//! ";
//! let ds = load_from_reader(CityId::Chicago, csv.as_bytes()).unwrap();
//!
//! let spec = FilterSpec::new(MonthFilter::parse("january").unwrap(), DayFilter::All);
//! let january = filter_data(&ds, &spec);
//!
//! assert_eq!(compute_time_stats(&january).most_common_month, Some("January"));
//! assert_eq!(compute_duration_stats(&january).total_secs, Some(300.0));
//! ```

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{compute_duration_stats, DurationStats};
pub use station::{compute_station_stats, StationStats};
pub use time::{compute_time_stats, TimeStats};
pub use user::{compute_user_stats, DemographicStats, Demographics, UserStats};

use std::collections::HashMap;
use std::hash::Hash;

/// Frequency table over `values`, ordered by descending count.
///
/// Equal counts keep first-seen order, so the head of the table is the mode under
/// the first-seen tie-break rule.
pub fn count_by<T>(values: impl IntoIterator<Item = T>) -> Vec<(T, u64)>
where
    T: Eq + Hash + Clone,
{
    let mut order: Vec<(T, u64)> = Vec::new();
    let mut index: HashMap<T, usize> = HashMap::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(value.clone(), order.len());
                order.push((value, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

/// Most frequent value in `values`, first-seen-among-tied-max.
///
/// Returns `None` for an empty input.
pub fn mode<T>(values: impl IntoIterator<Item = T>) -> Option<T>
where
    T: Eq + Hash + Clone,
{
    count_by(values).into_iter().next().map(|(value, _)| value)
}
