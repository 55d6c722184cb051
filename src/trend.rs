use crate::error::{HpiError, Result};
use crate::models::{AnnualRecord, RegionSeries};
use crate::ranking::{RankEntry, Ranking};

/// Compound annual growth rate in percent: `((end / start)^(1 / periods) - 1) * 100`.
pub fn compound_growth(start_index: f64, end_index: f64, periods: i32) -> f64 {
    ((end_index / start_index).powf(1.0 / periods as f64) - 1.0) * 100.0
}

/// Index value for each of `years`, `None` where the region has no record.
/// With duplicate years the last record wins.
pub fn lookup_years(records: &[AnnualRecord], years: &[i32]) -> Vec<Option<f64>> {
    let mut out = vec![None; years.len()];
    for r in records {
        if let Some(pos) = years.iter().position(|y| *y == r.year) {
            out[pos] = Some(r.index);
        }
    }
    out
}

/// Growth rate of every region between `year_start` and `year_end`,
/// ascending by rate.
///
/// Regions missing either year are left out. The rate is computed as
/// `compound_growth(index[year_end], index[year_start], year_start - year_end)`;
/// the negative period count and the swapped endpoints cancel out, giving the
/// usual start-to-end growth rate.
pub fn calculate_trends(
    series: &RegionSeries<AnnualRecord>,
    year_start: i32,
    year_end: i32,
) -> Result<Ranking> {
    if year_start >= year_end {
        return Err(HpiError::InvalidPrecondition(format!(
            "start year {year_start} must be before end year {year_end}"
        )));
    }

    let mut ranking = Ranking::new();
    for (region, records) in series {
        let found = lookup_years(records, &[year_end, year_start]);
        if let [Some(at_end), Some(at_start)] = found.as_slice() {
            let rate = compound_growth(*at_end, *at_start, year_start - year_end);
            ranking.insert(RankEntry::new(region.as_str(), rate));
        }
    }
    Ok(ranking)
}
