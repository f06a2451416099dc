use thiserror::Error;

/// Convenience result type for loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by the loading layer.
///
/// Aggregation never produces errors: statistics that cannot be computed for a
/// given dataset (empty after filtering, schema without demographics columns)
/// are reported as explicit `None`/unavailable markers in the result types.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O error (e.g. permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The city identifier does not resolve to a known dataset.
    #[error("unknown city '{name}' (expected one of: chicago, new york city, washington)")]
    UnknownCity { name: String },

    /// The input file does not conform to the expected column layout.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A timestamp cell could not be parsed. This aborts the whole load; a
    /// partial dataset is never returned.
    #[error("malformed timestamp at row {row}: {message} (raw='{raw}')")]
    MalformedTimestamp {
        row: usize,
        raw: String,
        message: String,
    },

    /// A non-empty value could not be parsed into its column's type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    Parse {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
