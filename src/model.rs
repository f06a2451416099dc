//! Core data model: trip records and the in-memory [`Dataset`].
//!
//! The loader parses each CSV row into a fixed-shape [`TripRecord`] and computes the
//! time/route derived fields exactly once. Records are immutable after load, so the
//! derived fields are always consistent with `start_time` and the station names.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::loader::CityId;

/// Canonical full month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical full weekday names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Full month name for a timestamp (e.g. `"January"`).
pub fn month_name(ts: NaiveDateTime) -> &'static str {
    MONTH_NAMES[ts.month0() as usize]
}

/// Full weekday name for a timestamp (e.g. `"Monday"`).
pub fn day_name(ts: NaiveDateTime) -> &'static str {
    DAY_NAMES[ts.weekday().num_days_from_monday() as usize]
}

/// Route label for a start/end station pair.
///
/// The separator is the literal `" to "`; station names are joined verbatim, with no
/// trimming.
pub fn route(start_station: &str, end_station: &str) -> String {
    format!("{start_station} to {end_station}")
}

/// A single bicycle rental event with its derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Trip start timestamp.
    pub start_time: NaiveDateTime,
    /// Trip end timestamp, absent in some exports.
    pub end_time: Option<NaiveDateTime>,
    /// Station the trip started from.
    pub start_station: String,
    /// Station the trip ended at; absent for some rows.
    pub end_station: Option<String>,
    /// Trip duration in seconds; absent cells stay absent (never treated as zero).
    pub trip_duration_secs: Option<f64>,
    /// Rider category (e.g. "Subscriber", "Customer").
    pub user_type: String,
    /// Rider gender, if the city's export carries it.
    pub gender: Option<String>,
    /// Rider birth year, if the city's export carries it.
    pub birth_year: Option<i32>,

    /// Derived: full month name of `start_time`.
    pub month_name: &'static str,
    /// Derived: full weekday name of `start_time`.
    pub day_name: &'static str,
    /// Derived: hour of `start_time` (0-23).
    pub start_hour: u32,
    /// Derived: `"{start_station} to {end_station}"`, or `None` when the end station
    /// is unknown. Routeless records are excluded from route popularity only.
    pub route: Option<String>,
}

impl TripRecord {
    /// Build a record from raw fields, computing all derived fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        start_station: String,
        end_station: Option<String>,
        trip_duration_secs: Option<f64>,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        let route = end_station
            .as_deref()
            .map(|end| route(&start_station, end));
        Self {
            month_name: month_name(start_time),
            day_name: day_name(start_time),
            start_hour: start_time.hour(),
            route,
            start_time,
            end_time,
            start_station,
            end_station,
            trip_duration_secs,
            user_type,
            gender,
            birth_year,
        }
    }
}

/// In-memory trip dataset for one city.
///
/// Records are stored in source-file order. Order is preserved for raw-record
/// browsing and for the first-seen mode tie-break; the statistics themselves are
/// order-independent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// City this dataset was loaded for.
    pub city: CityId,
    /// Records in source-file order.
    pub records: Vec<TripRecord>,
    /// Whether the source schema carries `Gender` and `Birth Year` columns.
    ///
    /// Decided once at load time from the header; some cities ship without
    /// demographics, which is a normal schema variant rather than a fault.
    pub has_demographics: bool,
}

impl Dataset {
    /// Create a dataset from already-derived records.
    pub fn new(city: CityId, records: Vec<TripRecord>, has_demographics: bool) -> Self {
        Self {
            city,
            records,
            has_demographics,
        }
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a new dataset containing only records that match `predicate`.
    ///
    /// The returned dataset preserves record order and the schema capability flag;
    /// `self` is left untouched.
    pub fn retain_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&TripRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|rec| predicate(rec))
            .cloned()
            .collect();
        Self {
            city: self.city,
            records,
            has_demographics: self.has_demographics,
        }
    }
}
