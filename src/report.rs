//! Plain-text renderings of query results, as printed by the `hpi` binary.

use crate::models::{AnnualRecord, HpiRecord};
use crate::ranking::{GROUP_SIZE, RankEntry};
use crate::timeline::GapFilledSeries;
use std::fmt::Write;

fn extreme_line<R: HpiRecord>(label: &str, r: &R) -> String {
    match r.quarter() {
        Some(q) => format!(
            "{label}: year/quarter/index: {} / {} / {:.2}",
            r.year(),
            q,
            r.index()
        ),
        None => format!("{label}: year/index: {} / {:.2}", r.year(), r.index()),
    }
}

/// `Region:` heading followed by the low and high lines.
pub fn format_range<R: HpiRecord>(region: &str, high: &R, low: &R) -> String {
    format!(
        "Region: {region}\n{}\n{}\n",
        extreme_line("Low", low),
        extreme_line("High", high)
    )
}

/// One line per year, ascending, with elision markers over missing years.
pub fn format_annual_listing(records: &[AnnualRecord]) -> String {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.year);

    let mut out = String::new();
    let mut prev: Option<i32> = None;
    for r in &sorted {
        if let Some(p) = prev {
            match r.year - p {
                2 => {
                    let _ = writeln!(out, "    . . . output elided for {}", r.year - 1);
                }
                gap if gap > 2 => {
                    let _ = writeln!(out, "    . . . output elided for {} - {}", p + 1, r.year - 1);
                }
                _ => {}
            }
        }
        let _ = writeln!(out, "{}  {:.2}", r.year, r.index);
        prev = Some(r.year);
    }
    out
}

fn entry_lines(out: &mut String, entries: &[RankEntry], first_pos: usize) {
    for (i, e) in entries.iter().enumerate() {
        let _ = writeln!(out, "{}: {} {:.4}", first_pos + i, e.region, e.value);
    }
}

/// Heading, then the first and last ten entries of an ascending list.
/// Positions are 1-based; short lists print overlapping groups.
pub fn format_ranking(entries: &[RankEntry], heading: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{heading}");
    let n = GROUP_SIZE.min(entries.len());
    let _ = writeln!(out, "The Top {GROUP_SIZE}:");
    entry_lines(&mut out, &entries[..n], 1);
    let _ = writeln!(out, "The Bottom {GROUP_SIZE}:");
    entry_lines(&mut out, &entries[entries.len() - n..], entries.len() - n + 1);
    out
}

/// Growth-rate listing; lists of ten or fewer are printed whole.
pub fn format_trends(entries: &[RankEntry], year_start: i32, year_end: i32) -> String {
    let heading = format!("{year_start}-{year_end} Compound Annual Growth Rate");
    if entries.len() <= GROUP_SIZE {
        let mut out = String::new();
        let _ = writeln!(out, "{heading}");
        entry_lines(&mut out, entries, 1);
        out
    } else {
        format_ranking(entries, &heading)
    }
}

/// `year value` lines with `-` for masked years.
pub fn format_gap_filled(region: &str, series: &GapFilledSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{region}");
    for (year, value) in series.years.iter().zip(&series.values) {
        match value {
            Some(v) => {
                let _ = writeln!(out, "  {year}  {v:.2}");
            }
            None => {
                let _ = writeln!(out, "  {year}  -");
            }
        }
    }
    out
}
