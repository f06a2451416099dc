//! Month/day filtering for a [`Dataset`].
//!
//! A [`FilterSpec`] pairs an optional month predicate with an optional day-of-week
//! predicate. Both apply conjunctively; the `All` sentinel matches every record.
//! [`filter_data`] is pure: it never mutates its input, preserves the relative order
//! of surviving records, and an empty result is normal (statistics on an empty
//! dataset report explicit undefined markers, not errors).

use crate::model::{Dataset, DAY_NAMES, MONTH_NAMES};

/// Month selection: a single canonical month, or every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    /// Match every record.
    #[default]
    All,
    /// Match records whose start month has this canonical name (e.g. `"January"`).
    Month(&'static str),
}

impl MonthFilter {
    /// Parse a month filter from free text (case-insensitive): `"all"` or a full
    /// month name. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        MONTH_NAMES
            .iter()
            .copied()
            .find(|name| name.eq_ignore_ascii_case(text))
            .map(Self::Month)
    }

    fn matches(self, month_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Month(name) => name == month_name,
        }
    }
}

/// Day-of-week selection: a single canonical weekday, or every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    /// Match every record.
    #[default]
    All,
    /// Match records whose start day has this canonical name (e.g. `"Monday"`).
    Day(&'static str),
}

impl DayFilter {
    /// Parse a day filter from free text (case-insensitive): `"all"` or a full
    /// weekday name. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        DAY_NAMES
            .iter()
            .copied()
            .find(|name| name.eq_ignore_ascii_case(text))
            .map(Self::Day)
    }

    fn matches(self, day_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Day(name) => name == day_name,
        }
    }
}

/// The (month, day) selection criteria for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Month predicate.
    pub month: MonthFilter,
    /// Day-of-week predicate.
    pub day: DayFilter,
}

impl FilterSpec {
    /// Create a spec from already-parsed filters.
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    /// Returns `true` if `spec` places no restriction on the dataset.
    pub fn is_all(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }
}

/// Returns a new [`Dataset`] containing the records that satisfy `spec`.
///
/// With `FilterSpec::default()` (month `All`, day `All`) the result is equal to the
/// input dataset.
pub fn filter_data(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    dataset.retain_records(|rec| spec.month.matches(rec.month_name) && spec.day.matches(rec.day_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CityId;
    use crate::model::TripRecord;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32) -> TripRecord {
        TripRecord::new(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            None,
            "A".to_string(),
            Some("B".to_string()),
            Some(60.0),
            "Subscriber".to_string(),
            None,
            None,
        )
    }

    fn sample_dataset() -> Dataset {
        // 2017-01-02 Monday, 2017-01-03 Tuesday, 2017-02-06 Monday.
        Dataset::new(
            CityId::Chicago,
            vec![record(2017, 1, 2), record(2017, 1, 3), record(2017, 2, 6)],
            false,
        )
    }

    #[test]
    fn parse_accepts_all_sentinel_and_canonical_names() {
        assert_eq!(MonthFilter::parse("all"), Some(MonthFilter::All));
        assert_eq!(MonthFilter::parse("january"), Some(MonthFilter::Month("January")));
        assert_eq!(MonthFilter::parse(" JUNE "), Some(MonthFilter::Month("June")));
        assert_eq!(MonthFilter::parse("janua"), None);

        assert_eq!(DayFilter::parse("ALL"), Some(DayFilter::All));
        assert_eq!(DayFilter::parse("monday"), Some(DayFilter::Day("Monday")));
        assert_eq!(DayFilter::parse("mon"), None);
    }

    #[test]
    fn all_all_spec_is_identity() {
        let ds = sample_dataset();
        let out = filter_data(&ds, &FilterSpec::default());
        assert_eq!(out, ds);
    }

    #[test]
    fn month_and_day_apply_conjunctively() {
        let ds = sample_dataset();
        let spec = FilterSpec::new(
            MonthFilter::parse("january").unwrap(),
            DayFilter::parse("monday").unwrap(),
        );
        let out = filter_data(&ds, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out.records[0].month_name, "January");
        assert_eq!(out.records[0].day_name, "Monday");
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let ds = sample_dataset();
        let spec = FilterSpec::new(MonthFilter::All, DayFilter::parse("monday").unwrap());
        let out = filter_data(&ds, &spec);
        assert_eq!(out.len(), 2);
        assert!(out.records[0].start_time < out.records[1].start_time);
    }

    #[test]
    fn no_match_yields_empty_dataset_not_error() {
        let ds = sample_dataset();
        let spec = FilterSpec::new(MonthFilter::parse("december").unwrap(), DayFilter::All);
        let out = filter_data(&ds, &spec);
        assert!(out.is_empty());
    }
}
