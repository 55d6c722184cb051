use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the library.
///
/// Rows carrying the `.` sentinel are not errors: parsers skip and report them.
/// A requested period with no record is not an error either; it is excluded
/// from rankings and trends, or masked in gap-filled series.
#[derive(Error, Debug)]
pub enum HpiError {
    #[error("cannot open {}: {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line_no}: expected at least 4 fields: {line:?}")]
    MalformedRow { line_no: usize, line: String },

    #[error("line {line_no}: invalid {field} {token:?}")]
    InvalidNumber {
        line_no: usize,
        field: &'static str,
        token: String,
    },

    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("region {0} has no records")]
    EmptyRegion(String),

    #[error("invalid precondition: {0}")]
    InvalidPrecondition(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HpiError>;
