//! wellcdf-core - Quartile-segmented ECDFs of well data
//!
//! Given a table of wells, this crate answers "how is parameter X
//! distributed among the worst, middling and best wells?" by splitting the
//! wells into quartiles of a performance measure and computing one ECDF of
//! X per quartile.
//!
//! # Key Components
//!
//! - **Dataset**: wells keyed by identifier, with typed feature columns
//! - **Quantile Binner** (`binning`): equal-frequency quartile labels
//! - **ECDF Builder** (`quantile_ecdf`): one ECDF per quartile
//! - **Plot Assembler** (`plot`): Plotly-compatible chart description
//! - **EcdfSession**: the loaded dataset plus the last successful run
//!
//! # Example
//!
//! ```no_run
//! use wellcdf_core::{Dataset, EcdfSession};
//!
//! let dataset = Dataset::from_path("completion_data.csv", "well_id")?;
//! let mut session = EcdfSession::new(dataset, "Gas Cum 365 / 100 m");
//! let run = session.select_parameter("lateral_length")?;
//! println!("{}", run.plot.to_json()?);
//! # Ok::<(), wellcdf_core::WellCdfError>(())
//! ```

pub mod binning;
pub mod config;
pub mod dataset;
pub mod error;
pub mod palette;
pub mod plot;
pub mod quantile_ecdf;
pub mod session;

pub use binning::{bin, BinnedDataset, MissingData, QuantileLabel};
pub use config::{ConfigError, WellCdfConfig};
pub use dataset::Dataset;
pub use error::{WellCdfError, WellCdfResult};
pub use plot::{assemble, assemble_with, format_field_title, PlotSpec, Series};
pub use quantile_ecdf::{build, QuantileEcdfs};
pub use session::{run_pipeline, EcdfSession, PipelineRun};

pub use wellcdf_io::DataColumn;
pub use wellcdf_stats::Ecdf;
