use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const STATE: &str = "\
state yr qtr index
VT 1976 1 100.0
VT 1976 2 .
VT 1976 3 120.0
VT 1978 1 130.0
NH 1976 1 90.0
NH 1978 2 99.0
";

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("HPI_AT_state.txt"), STATE).unwrap();
    fs::write(
        dir.path().join("HPI_AT_ZIP5.txt"),
        "Five-Digit ZIP\n05001 2000 . 100.0\n05001 2001 . .\n05002 2000 . 90.0\n",
    )
    .unwrap();
    dir
}

fn hpi(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hpi").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("hpi").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hpi"));
}

#[test]
fn range_prints_quarterly_and_annual_extremes() {
    let dir = data_dir();
    hpi(&dir)
        .args(["range", "--file", "HPI_AT_state.txt", "--regions", "VT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Region: VT"))
        .stdout(predicate::str::contains("High: year/quarter/index: 1978 / 1 / 130.00"))
        .stdout(predicate::str::contains("Low: year/index: 1976 / 110.00"))
        .stdout(predicate::str::contains("output elided for 1977"));
}

#[test]
fn rank_short_list() {
    let dir = data_dir();
    hpi(&dir)
        .args(["rank", "--file", "HPI_AT_ZIP5.txt", "--year", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2000 Annual Ranking"))
        .stdout(predicate::str::contains("1: 05002 90.0000"));
}

#[test]
fn trend_rejects_reversed_years() {
    let dir = data_dir();
    hpi(&dir)
        .args(["trend", "--file", "HPI_AT_state.txt", "--start", "1978", "--end", "1976"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid precondition"));
}

#[test]
fn timeline_masks_missing_year() {
    let dir = data_dir();
    hpi(&dir)
        .args([
            "timeline", "--file", "HPI_AT_state.txt", "--start", "1970", "--end", "1990",
            "--regions", "VT,NH",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home Price Indexes: 1976-1978"))
        .stdout(predicate::str::contains("  1977  -"));
}

#[test]
fn unknown_region_fails() {
    let dir = data_dir();
    hpi(&dir)
        .args(["range", "--file", "HPI_AT_state.txt", "--regions", "vt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown region: vt"));
}

#[test]
fn export_writes_csv() {
    let dir = data_dir();
    let out = dir.path().join("out.csv");
    hpi(&dir)
        .args(["export", "--file", "HPI_AT_state.txt", "--out"])
        .arg(&out)
        .assert()
        .success();
    let txt = fs::read_to_string(&out).unwrap();
    assert!(txt.starts_with("region,year,quarter,index"));
    assert!(txt.contains("VT,1976,,110.0"));
}
