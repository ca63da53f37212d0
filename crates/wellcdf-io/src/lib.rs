//! wellcdf-io - Tabular data I/O for well datasets
//!
//! This crate loads the tables that the analysis pipeline runs on:
//!
//! - **CSV/TSV**: delimited text with per-column type inference
//!
//! # Design
//!
//! Readers implement the `DataReader` trait for uniform access. Cells that
//! hold a missing-value token (empty, `NA`, `NaN`, ...) are kept as `None`
//! so that downstream filtering can decide what to drop.

pub mod reader;
pub mod schema;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use reader::*;
pub use schema::*;
