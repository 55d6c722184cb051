use crate::error::{HpiError, Result};
use crate::models::{HpiRecord, RegionSeries};

/// Highest and lowest record of one region, as `(high, low)`.
///
/// Single pass seeded with the first record. A record replaces the low when
/// strictly lower, otherwise the high when strictly higher, so ties keep the
/// earliest occurrence.
pub fn extremes<'a, R: HpiRecord>(
    series: &'a RegionSeries<R>,
    region: &str,
) -> Result<(&'a R, &'a R)> {
    let records = series
        .get(region)
        .ok_or_else(|| HpiError::UnknownRegion(region.to_string()))?;
    let (first, rest) = records
        .split_first()
        .ok_or_else(|| HpiError::EmptyRegion(region.to_string()))?;

    let mut high = first;
    let mut low = first;
    for r in rest {
        if r.index() < low.index() {
            low = r;
        } else if r.index() > high.index() {
            high = r;
        }
    }
    Ok((high, low))
}

/// The `(high, low)` index values of one region.
pub fn index_range<R: HpiRecord>(series: &RegionSeries<R>, region: &str) -> Result<(f64, f64)> {
    let (high, low) = extremes(series, region)?;
    Ok((high.index(), low.index()))
}
