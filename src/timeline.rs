//! Year filtering and contiguous-axis reconstruction for timeline rendering.

use crate::error::{HpiError, Result};
use crate::models::{AnnualRecord, HpiRecord, RegionSeries};
use serde::{Deserialize, Serialize};

/// Keep only records with `year_lo <= year <= year_hi`, sorted ascending by year.
///
/// The sort is stable, so records sharing a year keep their relative order.
/// Regions with nothing left in range stay present with an empty list.
/// Filtering an already filtered series with the same bounds is a no-op.
pub fn filter_years<R: HpiRecord>(
    mut series: RegionSeries<R>,
    year_lo: i32,
    year_hi: i32,
) -> Result<RegionSeries<R>> {
    if year_lo > year_hi {
        return Err(HpiError::InvalidPrecondition(format!(
            "year range {year_lo}..{year_hi} is reversed"
        )));
    }
    for records in series.values_mut() {
        records.retain(|r| (year_lo..=year_hi).contains(&r.year()));
        records.sort_by_key(|r| r.year());
    }
    Ok(series)
}

/// Copy the listed regions into a new series, in key order.
pub fn select_regions<R: Clone>(
    series: &RegionSeries<R>,
    regions: &[String],
) -> Result<RegionSeries<R>> {
    let mut out = RegionSeries::new();
    for region in regions {
        let records = series
            .get(region)
            .ok_or_else(|| HpiError::UnknownRegion(region.clone()))?;
        out.insert(region.clone(), records.clone());
    }
    Ok(out)
}

/// Lowest and highest year across every record in `series`.
pub fn year_span<R: HpiRecord>(series: &RegionSeries<R>) -> Option<(i32, i32)> {
    series
        .values()
        .flatten()
        .map(|r| r.year())
        .fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
}

/// Every year from `lo` to `hi` inclusive.
pub fn year_axis(lo: i32, hi: i32) -> Vec<i32> {
    (lo..=hi).collect()
}

/// One region's values aligned to an explicit year axis.
///
/// A year without a record holds `None`, which is distinct from a real 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapFilledSeries {
    pub years: Vec<i32>,
    pub values: Vec<Option<f64>>,
}

impl GapFilledSeries {
    /// `true` where a year has a value.
    pub fn presence_mask(&self) -> Vec<bool> {
        self.values.iter().map(Option::is_some).collect()
    }

    pub fn gap_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// `(year, value)` pairs for the years that have data.
    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years
            .iter()
            .zip(&self.values)
            .filter_map(|(y, v)| v.map(|v| (*y, v)))
    }
}

/// Align `records` to `years`. Records outside the axis are ignored; with
/// duplicate years the last record wins.
pub fn build_gap_filled_series(years: &[i32], records: &[AnnualRecord]) -> GapFilledSeries {
    let mut values = vec![None; years.len()];
    for r in records {
        if let Some(pos) = years.iter().position(|y| *y == r.year) {
            values[pos] = Some(r.index);
        }
    }
    GapFilledSeries {
        years: years.to_vec(),
        values,
    }
}
