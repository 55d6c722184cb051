//! Readers for the two whitespace-delimited HPI source tables.
//!
//! ### Layouts
//! - **State** (quarterly): header token `state`, rows `REGION YEAR QTR INDEX`.
//!   A `.` in any of the year/quarter/index columns marks the row incomplete.
//! - **ZIP5** (annual): header token `Five-Digit`, rows `REGION YEAR TOKEN INDEX ...`.
//!   A `.` in the year or index column marks the row incomplete.
//!
//! Incomplete rows are skipped and reported, never fatal. The first line is only
//! treated as a header when its first token matches; otherwise it is parsed as data.
//! Blank lines are ignored.
//!
//! Each file is read fully into memory before parsing.

use crate::aggregate::annualize;
use crate::error::{HpiError, Result};
use crate::models::{AnnualRecord, QuarterRecord, RegionSeries, SourceFormat};
use log::{info, warn};
use std::path::Path;

/// Token marking an unavailable value.
pub const MISSING: &str = ".";

const STATE_HEADER: &str = "state";
const ZIP_HEADER: &str = "Five-Digit";

/// Row accounting for one parsed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub accepted: usize,
    pub skipped: usize,
    /// Raw text of every skipped row, in file order.
    pub skipped_lines: Vec<String>,
}

impl ParseReport {
    fn skip(&mut self, line: &str) {
        self.skipped += 1;
        self.skipped_lines.push(line.to_string());
    }
}

/// Read a quarterly state table. Skipped rows are logged at `warn`.
pub fn read_state_file<P: AsRef<Path>>(path: P) -> Result<RegionSeries<QuarterRecord>> {
    read_state_file_with_report(path).map(|(series, _)| series)
}

/// Like [`read_state_file`], also returning the row accounting.
pub fn read_state_file_with_report<P: AsRef<Path>>(
    path: P,
) -> Result<(RegionSeries<QuarterRecord>, ParseReport)> {
    let text = read_source(path.as_ref())?;
    parse_state(&text)
}

/// Read an annual ZIP5 table. The accepted/skipped counts are logged at `info`.
pub fn read_zip_file<P: AsRef<Path>>(path: P) -> Result<RegionSeries<AnnualRecord>> {
    read_zip_file_with_report(path).map(|(series, _)| series)
}

/// Like [`read_zip_file`], also returning the row accounting.
pub fn read_zip_file_with_report<P: AsRef<Path>>(
    path: P,
) -> Result<(RegionSeries<AnnualRecord>, ParseReport)> {
    let text = read_source(path.as_ref())?;
    parse_zip(&text)
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| HpiError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse quarterly state data already in memory.
pub fn parse_state(text: &str) -> Result<(RegionSeries<QuarterRecord>, ParseReport)> {
    let mut series = RegionSeries::new();
    let mut report = ParseReport::default();

    for (line_no, line, tokens) in data_rows(text, STATE_HEADER) {
        let upto = tokens.len().min(4);
        if tokens[1..upto].contains(&MISSING) {
            warn!("data unavailable: {}", line);
            report.skip(line);
            continue;
        }
        if tokens.len() < 4 {
            return Err(malformed(line_no, line));
        }
        let record = QuarterRecord {
            year: parse_field(line_no, "year", tokens[1])?,
            quarter: parse_field(line_no, "quarter", tokens[2])?,
            index: parse_field(line_no, "index", tokens[3])?,
        };
        series
            .entry(tokens[0].to_string())
            .or_insert_with(Vec::new)
            .push(record);
        report.accepted += 1;
    }

    Ok((series, report))
}

/// Parse annual ZIP5 data already in memory.
pub fn parse_zip(text: &str) -> Result<(RegionSeries<AnnualRecord>, ParseReport)> {
    let mut series = RegionSeries::new();
    let mut report = ParseReport::default();

    for (line_no, line, tokens) in data_rows(text, ZIP_HEADER) {
        if tokens.get(1) == Some(&MISSING) {
            report.skip(line);
            continue;
        }
        if tokens.len() < 4 {
            return Err(malformed(line_no, line));
        }
        if tokens[3] == MISSING {
            report.skip(line);
            continue;
        }
        let record = AnnualRecord {
            year: parse_field(line_no, "year", tokens[1])?,
            index: parse_field(line_no, "index", tokens[3])?,
        };
        series
            .entry(tokens[0].to_string())
            .or_insert_with(Vec::new)
            .push(record);
        report.accepted += 1;
    }

    info!("count: {} uncounted: {}", report.accepted, report.skipped);
    Ok((series, report))
}

/// Non-blank lines with their 1-based line number and tokens, minus a leading
/// header line whose first token is `header`.
fn data_rows<'a>(
    text: &'a str,
    header: &'a str,
) -> impl Iterator<Item = (usize, &'a str, Vec<&'a str>)> + 'a {
    let mut first = true;
    text.lines()
        .enumerate()
        .filter_map(move |(i, raw)| {
            let line = raw.trim_end_matches('\r');
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                return None;
            }
            let is_header = first && tokens[0] == header;
            first = false;
            if is_header {
                None
            } else {
                Some((i + 1, line, tokens))
            }
        })
}

fn malformed(line_no: usize, line: &str) -> HpiError {
    HpiError::MalformedRow {
        line_no,
        line: line.to_string(),
    }
}

fn parse_field<T: std::str::FromStr>(line_no: usize, field: &'static str, token: &str) -> Result<T> {
    token.parse().map_err(|_| HpiError::InvalidNumber {
        line_no,
        field,
        token: token.to_string(),
    })
}

/// A source file after parsing and, for quarterly data, annualization.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    /// The raw quarterly records, only for state sources.
    pub quarterly: Option<RegionSeries<QuarterRecord>>,
    pub annual: RegionSeries<AnnualRecord>,
}

/// Parse `path` according to `format`; quarterly sources are annualized.
pub fn load<P: AsRef<Path>>(path: P, format: SourceFormat) -> Result<LoadedData> {
    match format {
        SourceFormat::State => {
            let quarterly = read_state_file(path)?;
            let annual = annualize(&quarterly);
            Ok(LoadedData {
                quarterly: Some(quarterly),
                annual,
            })
        }
        SourceFormat::Zip => Ok(LoadedData {
            quarterly: None,
            annual: read_zip_file(path)?,
        }),
    }
}
