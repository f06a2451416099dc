//! Dataset loading: city identifiers, CSV ingestion, derived-field computation.
//!
//! Most callers should use [`load_data`], which resolves a [`CityId`] to its backing
//! CSV file and ingests it into an in-memory [`Dataset`] with all derived fields
//! populated. [`load_data_with`] additionally reports the outcome to a configured
//! [`LoadObserver`]; [`load_from_reader`] ingests from any `io::Read` source and is
//! the seam the integration tests use.
//!
//! Rules:
//!
//! - CSV must have headers. Required columns: `Start Time`, `Start Station`,
//!   `End Station`, `Trip Duration`, `User Type` (order can differ).
//! - `End Time`, `Gender` and `Birth Year` are optional columns; the dataset's
//!   `has_demographics` flag is set only when both demographics columns exist.
//! - An unparsable timestamp aborts the whole load. A partial dataset is never
//!   returned, so downstream statistics can assume a fully valid dataset.
//! - Empty cells in optional columns become `None`, never zero.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::model::{Dataset, TripRecord};
use crate::observe::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Cities with a known trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum CityId {
    /// Chicago, IL.
    Chicago,
    /// New York City, NY.
    NewYorkCity,
    /// Washington, DC.
    Washington,
}

impl CityId {
    /// All known cities, in canonical order.
    pub const ALL: [CityId; 3] = [CityId::Chicago, CityId::NewYorkCity, CityId::Washington];

    /// Parse a city from free text (case-insensitive, surrounding whitespace ignored).
    ///
    /// The interactive layer validates user input with this; the loader re-validates
    /// by construction since [`CityId`] is a closed enum.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chicago" => Ok(Self::Chicago),
            "new york city" | "new york" => Ok(Self::NewYorkCity),
            "washington" => Ok(Self::Washington),
            _ => Err(Error::UnknownCity {
                name: name.trim().to_string(),
            }),
        }
    }

    /// File name of the backing CSV inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }

    /// Human-readable city name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Options controlling load behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

const COL_START_TIME: &str = "Start Time";
const COL_END_TIME: &str = "End Time";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_TRIP_DURATION: &str = "Trip Duration";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Column indexes resolved from the CSV header.
struct ColumnMap {
    start_time: usize,
    end_time: Option<usize>,
    start_station: usize,
    end_station: usize,
    trip_duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| Error::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            end_time: find(COL_END_TIME),
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            trip_duration: require(COL_TRIP_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }

    fn has_demographics(&self) -> bool {
        self.gender.is_some() && self.birth_year.is_some()
    }
}

/// Load the trip dataset for `city` from `data_dir`.
///
/// Fails with [`Error::UnknownCity`] when the city's backing file is absent, and
/// never returns a partially loaded dataset.
///
/// # Examples
///
/// ```no_run
/// use bikeshare_stats::loader::{load_data, CityId};
///
/// # fn main() -> bikeshare_stats::error::Result<()> {
/// let ds = load_data(CityId::Chicago, "data")?;
/// println!("records={}", ds.len());
/// # Ok(())
/// # }
/// ```
pub fn load_data(city: CityId, data_dir: impl AsRef<Path>) -> Result<Dataset> {
    load_data_with(city, data_dir, &LoadOptions::default())
}

/// Load the trip dataset for `city`, reporting the outcome to any configured
/// observer.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with record count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
pub fn load_data_with(
    city: CityId,
    data_dir: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Dataset> {
    let path: PathBuf = data_dir.as_ref().join(city.file_name());
    let ctx = LoadContext {
        city,
        path: path.clone(),
    };

    let result = load_data_inner(city, &path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                LoadStats {
                    records: ds.len(),
                    has_demographics: ds.has_demographics,
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn load_data_inner(city: CityId, path: &Path) -> Result<Dataset> {
    // An absent backing file means the identifier does not resolve to a dataset.
    if !path.is_file() {
        return Err(Error::UnknownCity {
            name: city.display_name().to_string(),
        });
    }
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    load_from_csv_reader(city, &mut rdr)
}

/// Ingest trip data for `city` from any readable CSV source.
pub fn load_from_reader<R: std::io::Read>(city: CityId, reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    load_from_csv_reader(city, &mut rdr)
}

fn load_from_csv_reader<R: std::io::Read>(
    city: CityId,
    rdr: &mut csv::Reader<R>,
) -> Result<Dataset> {
    let headers = rdr.headers()?.clone();
    let cols = ColumnMap::from_headers(&headers)?;
    let has_demographics = cols.has_demographics();

    let mut records: Vec<TripRecord> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let row = result?;
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let start_time = parse_timestamp(user_row, cell(cols.start_time))?;
        let end_time = match cols.end_time.map(cell) {
            Some(raw) if !raw.is_empty() => Some(parse_timestamp(user_row, raw)?),
            _ => None,
        };

        let start_station = cell(cols.start_station).to_string();
        let end_station = non_empty(cell(cols.end_station));
        let trip_duration_secs =
            parse_opt_duration(user_row, COL_TRIP_DURATION, cell(cols.trip_duration))?;
        let user_type = cell(cols.user_type).to_string();
        let gender = cols.gender.map(cell).and_then(non_empty);
        let birth_year = match cols.birth_year.map(cell) {
            Some(raw) if !raw.is_empty() => Some(parse_birth_year(user_row, raw)?),
            _ => None,
        };

        records.push(TripRecord::new(
            start_time,
            end_time,
            start_station,
            end_station,
            trip_duration_secs,
            user_type,
            gender,
            birth_year,
        ));
    }

    Ok(Dataset::new(city, records, has_demographics))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

// The city exports write timestamps both with and without a seconds component.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

fn parse_timestamp(row: usize, raw: &str) -> Result<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(ts);
        }
    }
    Err(Error::MalformedTimestamp {
        row,
        raw: raw.to_string(),
        message: format!("expected format '{}'", TIMESTAMP_FORMATS[0]),
    })
}

fn parse_opt_duration(row: usize, column: &str, raw: &str) -> Result<Option<f64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let secs: f64 = raw.parse().map_err(|e: std::num::ParseFloatError| Error::Parse {
        row,
        column: column.to_string(),
        raw: raw.to_string(),
        message: e.to_string(),
    })?;
    if secs < 0.0 {
        return Err(Error::Parse {
            row,
            column: column.to_string(),
            raw: raw.to_string(),
            message: "trip duration must be non-negative".to_string(),
        });
    }
    Ok(Some(secs))
}

// Birth years come through as floats in the exports ("1992.0").
fn parse_birth_year(row: usize, raw: &str) -> Result<i32> {
    raw.parse::<f64>()
        .map(|y| y as i32)
        .map_err(|e| Error::Parse {
            row,
            column: COL_BIRTH_YEAR.to_string(),
            raw: raw.to_string(),
            message: e.to_string(),
        })
}

fn severity_for_error(e: &Error) -> LoadSeverity {
    match e {
        Error::Io(_) | Error::UnknownCity { .. } => LoadSeverity::Critical,
        Error::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        Error::SchemaMismatch { .. }
        | Error::MalformedTimestamp { .. }
        | Error::Parse { .. } => LoadSeverity::Error,
    }
}
