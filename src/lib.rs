//! hpi_rs
//!
//! A small Rust library for ingesting, ranking, and trending regional house
//! price index (HPI) data. Pairs with the `hpi` CLI.
//!
//! ### Features
//! - Read quarterly state tables and annual ZIP5 tables, skipping rows with missing values
//! - Collapse quarters into annual means
//! - Find per-region highs and lows
//! - Rank every region for one year (or quarter)
//! - Compound annual growth rates between two years
//! - Year filtering and gap-filled series for contiguous timeline rendering
//! - Save as CSV or JSON in a tidy schema
//!
//! ### Example
//! ```no_run
//! use hpi_rs::{aggregate, parser, ranking, trend};
//!
//! let quarterly = parser::read_state_file("data/HPI_AT_state.txt")?;
//! let annual = aggregate::annualize(&quarterly);
//! let ranked = ranking::annual_ranking(&annual, 2000);
//! println!("{:#?}", ranked.top(10));
//! let trends = trend::calculate_trends(&annual, 1990, 2000)?;
//! hpi_rs::storage::save_csv(&hpi_rs::models::flatten(&annual), "annual.csv")?;
//! # let _ = trends;
//! # Ok::<(), hpi_rs::HpiError>(())
//! ```

pub mod aggregate;
pub mod error;
pub mod extremes;
pub mod models;
pub mod parser;
pub mod ranking;
pub mod report;
pub mod stats;
pub mod storage;
pub mod timeline;
pub mod trend;

pub use error::{HpiError, Result};
pub use models::{AnnualRecord, HpiRecord, Period, QuarterRecord, RegionSeries, SourceFormat};
