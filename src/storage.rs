use crate::error::Result;
use crate::models::Observation;
use csv::WriterBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix cells that a spreadsheet would read as a formula.
fn defuse(cell: &str) -> Cow<'_, str> {
    if cell.starts_with(['=', '+', '-', '@']) {
        Cow::Owned(format!("'{cell}"))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Save observations as CSV with header.
pub fn save_csv<P: AsRef<Path>>(rows: &[Observation], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("region", "year", "quarter", "index"))?;
    for r in rows {
        wtr.serialize((defuse(&r.region), r.year, r.quarter, r.index))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save observations as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(rows: &[Observation], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let rows = vec![Observation {
            region: "VT".into(),
            year: 1976,
            quarter: Some(1),
            index: 100.0,
        }];
        save_csv(&rows, &csvp).unwrap();
        save_json(&rows, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }

    #[test]
    fn defuse_only_touches_formula_starters() {
        assert_eq!(defuse("=1+1"), "'=1+1");
        assert_eq!(defuse("@x"), "'@x");
        assert_eq!(defuse("VT"), "VT");
    }
}
