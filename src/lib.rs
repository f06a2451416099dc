//! `bikeshare-stats` loads per-city bicycle-trip CSV logs into an in-memory
//! [`model::Dataset`], narrows it with month/day filters, and computes descriptive
//! statistics (popular times, popular stations, trip durations, user demographics).
//!
//! The pipeline is `load → filter → aggregate`: the loader parses every row into a
//! fixed-shape [`model::TripRecord`] and derives the time/route fields exactly once;
//! filtering produces a new dataset without touching the original; the four
//! aggregators are pure and order-independent. The interactive CLI shipped with the
//! crate is thin glue over these entry points.
//!
//! ## Quick example
//!
//! ```no_run
//! use bikeshare_stats::filter::{filter_data, DayFilter, FilterSpec, MonthFilter};
//! use bikeshare_stats::loader::{load_data, CityId};
//! use bikeshare_stats::stats::{
//!     compute_duration_stats, compute_station_stats, compute_time_stats, compute_user_stats,
//! };
//!
//! # fn main() -> bikeshare_stats::error::Result<()> {
//! let ds = load_data(CityId::Chicago, "data")?;
//!
//! let spec = FilterSpec::new(
//!     MonthFilter::parse("june").unwrap(),
//!     DayFilter::parse("all").unwrap(),
//! );
//! let june = filter_data(&ds, &spec);
//!
//! let times = compute_time_stats(&june);
//! let stations = compute_station_stats(&june);
//! let durations = compute_duration_stats(&june);
//! let users = compute_user_stats(&june);
//!
//! println!(
//!     "most common day: {}",
//!     times.most_common_day.unwrap_or("no data")
//! );
//! # let _ = (stations, durations, users);
//! # Ok(())
//! # }
//! ```
//!
//! ## Missing data is data
//!
//! Per-city schema differences and empty cells are normal, not faults:
//!
//! - a city without `Gender`/`Birth Year` columns yields
//!   [`stats::Demographics::Unavailable`] while user-type counts still compute
//! - a record without an end station has no route and is skipped by route
//!   popularity only
//! - statistics over an empty (e.g. over-filtered) dataset come back as `None`
//!   markers, never as zeros and never as errors
//!
//! Loading is the only fallible stage, and it is all-or-nothing: one unparsable
//! `Start Time` aborts the whole load so the aggregators never see a partially
//! valid dataset.
//!
//! ## Modules
//!
//! - [`loader`]: city identifiers and CSV ingestion into a [`model::Dataset`]
//! - [`model`]: trip records, derived fields, the dataset container
//! - [`filter`]: month/day filter specs and [`filter::filter_data`]
//! - [`stats`]: the four aggregators and their result types
//! - [`observe`]: load outcome observer seam
//! - [`error`]: error types used across loading

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod observe;
pub mod stats;

pub use error::{Error, Result};
