//! Cross-region rankings for a single period.
//!
//! Rankings are built incrementally with [`insert_sorted`] and are always
//! ascending by value. [`Ranking::top`] takes the *first* entries of that
//! ascending list and [`Ranking::bottom`] the last ones; for short lists the
//! two groups overlap.

use crate::models::{HpiRecord, Period, QuarterRecord, AnnualRecord, RegionSeries};
use serde::{Deserialize, Serialize};

/// Number of entries in each reported group.
pub const GROUP_SIZE: usize = 10;

/// Insert `item` into `list`, keeping `list` ascending by `key`.
///
/// The item lands after every element with a strictly lesser key and before
/// any element with an equal or greater key. Empty and single-element lists
/// skip the search.
pub fn insert_sorted<T, K, F>(list: &mut Vec<T>, item: T, key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    match list.len() {
        0 => list.push(item),
        1 => {
            if key(&list[0]) < key(&item) {
                list.push(item);
            } else {
                list.insert(0, item);
            }
        }
        _ => {
            let target = key(&item);
            let pos = list.partition_point(|e| key(e) < target);
            list.insert(pos, item);
        }
    }
}

/// One region's value in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub region: String,
    pub value: f64,
}

impl RankEntry {
    pub fn new(region: impl Into<String>, value: f64) -> Self {
        Self {
            region: region.into(),
            value,
        }
    }
}

/// Ascending list of (region, value) pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    entries: Vec<RankEntry>,
}

impl Ranking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: RankEntry) {
        insert_sorted(&mut self.entries, entry, |e| e.value);
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first `n` entries (lowest values), fewer if the ranking is short.
    pub fn top(&self, n: usize) -> &[RankEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The last `n` entries (highest values), fewer if the ranking is short.
    pub fn bottom(&self, n: usize) -> &[RankEntry] {
        let len = self.entries.len();
        &self.entries[len - n.min(len)..]
    }
}

impl FromIterator<RankEntry> for Ranking {
    fn from_iter<I: IntoIterator<Item = RankEntry>>(iter: I) -> Self {
        let mut ranking = Ranking::new();
        for e in iter {
            ranking.insert(e);
        }
        ranking
    }
}

/// Rank every region that has a record for `period`.
///
/// Regions without that period are left out. When `period` has no quarter,
/// every quarterly record of the year is ranked.
pub fn period_ranking<R: HpiRecord>(series: &RegionSeries<R>, period: Period) -> Ranking {
    series
        .iter()
        .flat_map(|(region, records)| {
            records
                .iter()
                .filter(move |r| r.matches(period))
                .map(move |r| RankEntry::new(region.as_str(), r.index()))
        })
        .collect()
}

pub fn annual_ranking(series: &RegionSeries<AnnualRecord>, year: i32) -> Ranking {
    period_ranking(series, Period::year(year))
}

pub fn quarter_ranking(series: &RegionSeries<QuarterRecord>, year: i32, quarter: u8) -> Ranking {
    period_ranking(series, Period::quarter(year, quarter))
}
