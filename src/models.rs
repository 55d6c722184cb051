use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Region code → ordered records for that region.
///
/// Keys are case-sensitive (`"VT"` and `"vt"` are different regions). One
/// series never mixes quarterly and annual records.
pub type RegionSeries<R> = BTreeMap<String, Vec<R>>;

/// One region's price index for one quarter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuarterRecord {
    pub year: i32,
    pub quarter: u8,
    pub index: f64,
}

/// One region's price index for a full year, either native (ZIP5 tables)
/// or the mean of the quarters present for that year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualRecord {
    pub year: i32,
    pub index: f64,
}

/// Common read access over both record shapes.
pub trait HpiRecord {
    fn year(&self) -> i32;
    /// `None` for annual records.
    fn quarter(&self) -> Option<u8>;
    fn index(&self) -> f64;

    /// Whether this record belongs to `period`.
    ///
    /// A period without a quarter matches every quarter of its year; a period
    /// with a quarter matches annual records on the year alone.
    fn matches(&self, period: Period) -> bool {
        if self.year() != period.year {
            return false;
        }
        match (self.quarter(), period.quarter) {
            (Some(q), Some(want)) => q == want,
            _ => true,
        }
    }
}

impl HpiRecord for QuarterRecord {
    fn year(&self) -> i32 {
        self.year
    }
    fn quarter(&self) -> Option<u8> {
        Some(self.quarter)
    }
    fn index(&self) -> f64 {
        self.index
    }
}

impl HpiRecord for AnnualRecord {
    fn year(&self) -> i32 {
        self.year
    }
    fn quarter(&self) -> Option<u8> {
        None
    }
    fn index(&self) -> f64 {
        self.index
    }
}

/// A year, optionally narrowed to one quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub quarter: Option<u8>,
}

impl Period {
    pub fn year(year: i32) -> Self {
        Self { year, quarter: None }
    }

    pub fn quarter(year: i32, quarter: u8) -> Self {
        Self {
            year,
            quarter: Some(quarter),
        }
    }
}

/// Which of the two source table layouts a file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// `state year quarter index`, quarterly records.
    State,
    /// `Five-Digit ZIP ...`, annual records.
    Zip,
}

impl SourceFormat {
    /// Guess the layout from the file name: anything mentioning `state` is
    /// quarterly, everything else is treated as a ZIP5 table.
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.contains("state") {
            SourceFormat::State
        } else {
            SourceFormat::Zip
        }
    }
}

/// Tidy structure used for export (one row = one observation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub region: String,
    pub year: i32,
    pub quarter: Option<u8>,
    pub index: f64,
}

/// Flatten a series into tidy rows, regions in key order and records in
/// their stored order.
pub fn flatten<R: HpiRecord>(series: &RegionSeries<R>) -> Vec<Observation> {
    series
        .iter()
        .flat_map(|(region, records)| {
            records.iter().map(move |r| Observation {
                region: region.clone(),
                year: r.year(),
                quarter: r.quarter(),
                index: r.index(),
            })
        })
        .collect()
}
