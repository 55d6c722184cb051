use hpi_rs::HpiError;
use hpi_rs::extremes::{extremes, index_range};
use hpi_rs::models::{AnnualRecord, QuarterRecord, RegionSeries};
use hpi_rs::stats::region_summary;

fn q(year: i32, quarter: u8, index: f64) -> QuarterRecord {
    QuarterRecord { year, quarter, index }
}

#[test]
fn single_record_is_both_high_and_low() {
    let mut series = RegionSeries::new();
    series.insert("VT".to_string(), vec![q(1976, 1, 100.0)]);
    let (high, low) = extremes(&series, "VT").unwrap();
    assert_eq!(high, low);
    assert_eq!(*high, q(1976, 1, 100.0));
}

#[test]
fn ties_keep_first_occurrence() {
    let mut series = RegionSeries::new();
    series.insert(
        "VT".to_string(),
        vec![q(2000, 1, 50.0), q(2000, 2, 80.0), q(2000, 3, 40.0), q(2000, 4, 80.0), q(2001, 1, 40.0)],
    );
    let (high, low) = extremes(&series, "VT").unwrap();
    assert_eq!(*high, q(2000, 2, 80.0));
    assert_eq!(*low, q(2000, 3, 40.0));
    assert_eq!(index_range(&series, "VT").unwrap(), (80.0, 40.0));
}

#[test]
fn unknown_and_empty_regions_fail() {
    let mut series: RegionSeries<AnnualRecord> = RegionSeries::new();
    series.insert("EMPTY".to_string(), vec![]);
    assert!(matches!(extremes(&series, "vt"), Err(HpiError::UnknownRegion(_))));
    assert!(matches!(extremes(&series, "EMPTY"), Err(HpiError::EmptyRegion(_))));
}

#[test]
fn summary_quartiles_and_order() {
    let mut series = RegionSeries::new();
    series.insert(
        "B".to_string(),
        [4.0, 1.0, 3.0, 2.0, 5.0]
            .iter()
            .enumerate()
            .map(|(i, v)| AnnualRecord { year: 2000 + i as i32, index: *v })
            .collect::<Vec<_>>(),
    );
    series.insert("A".to_string(), vec![AnnualRecord { year: 2000, index: 7.0 }]);

    let got = region_summary(&series, &["B".to_string(), "A".to_string()]).unwrap();
    assert_eq!(got[0].region, "B");
    assert_eq!(got[0].count, 5);
    assert_eq!(got[0].min, Some(1.0));
    assert_eq!(got[0].q1, Some(2.0));
    assert_eq!(got[0].median, Some(3.0));
    assert_eq!(got[0].q3, Some(4.0));
    assert_eq!(got[0].max, Some(5.0));
    assert_eq!(got[0].mean, Some(3.0));

    assert_eq!(got[1].region, "A");
    assert_eq!(got[1].median, Some(7.0));

    assert!(matches!(
        region_summary(&series, &["C".to_string()]),
        Err(HpiError::UnknownRegion(_))
    ));
}
