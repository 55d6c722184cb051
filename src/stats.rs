use crate::error::{HpiError, Result};
use crate::models::{HpiRecord, RegionSeries};
use serde::{Deserialize, Serialize};

/// Distribution of one region's index values, as drawn by a box plot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub count: usize,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// Summaries for `regions`, in the order requested.
pub fn region_summary<R: HpiRecord>(
    series: &RegionSeries<R>,
    regions: &[String],
) -> Result<Vec<RegionSummary>> {
    regions
        .iter()
        .map(|region| {
            let records = series
                .get(region)
                .ok_or_else(|| HpiError::UnknownRegion(region.clone()))?;
            let vals: Vec<f64> = records.iter().map(|r| r.index()).collect();
            Ok(summarize(region, vals))
        })
        .collect()
}

fn summarize(region: &str, mut vals: Vec<f64>) -> RegionSummary {
    vals.sort_by(|a, b| a.total_cmp(b));
    let count = vals.len();
    let mean = if count > 0 {
        Some(vals.iter().copied().sum::<f64>() / count as f64)
    } else {
        None
    };
    RegionSummary {
        region: region.to_string(),
        count,
        min: vals.first().copied(),
        q1: quantile(&vals, 0.25),
        median: quantile(&vals, 0.5),
        q3: quantile(&vals, 0.75),
        max: vals.last().copied(),
        mean,
    }
}

/// Linear-interpolated quantile of sorted values.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
