//! wellcdf-stats - Statistical primitives for quantile-segmented ECDFs
//!
//! This crate provides the numeric building blocks used by `wellcdf-core`:
//!
//! - **Quantiles**: linear interpolation between order statistics
//! - **Equal-frequency binning**: cut edges and bin assignment (`qcut`)
//! - **ECDF**: Empirical Cumulative Distribution Function over unique values
//!
//! All functions are pure and operate on in-memory slices.

pub mod ecdf;
pub mod error;
pub mod quantile;

pub use ecdf::*;
pub use error::*;
pub use quantile::*;
