use crate::models::{AnnualRecord, QuarterRecord, RegionSeries};
use std::collections::BTreeMap;

/// Collapse quarterly records into one annual record per (region, year).
///
/// The annual index is the mean of the quarters actually present, so a year
/// with only Q3 = 90.0 yields 90.0. Years come out ascending within each
/// region, though callers should not depend on that.
pub fn annualize(quarterly: &RegionSeries<QuarterRecord>) -> RegionSeries<AnnualRecord> {
    let mut out = RegionSeries::new();
    for (region, records) in quarterly {
        let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
        for r in records {
            let slot = sums.entry(r.year).or_insert((0.0, 0));
            slot.0 += r.index;
            slot.1 += 1;
        }
        let annual: Vec<AnnualRecord> = sums
            .into_iter()
            .map(|(year, (sum, n))| AnnualRecord {
                year,
                index: sum / n as f64,
            })
            .collect();
        if !annual.is_empty() {
            out.insert(region.clone(), annual);
        }
    }
    out
}
