//! Analysis session: one dataset, many parameter selections
//!
//! The session owns the loaded dataset and the result of the last
//! successful run. Every call to `select_parameter` runs the full pipeline
//! (project, bin, build ECDFs, assemble) from scratch; a failed run leaves
//! the previous result in place.

use serde::{Deserialize, Serialize};

use crate::binning::{bin, MissingData};
use crate::config::{PlotConfig, WellCdfConfig};
use crate::dataset::Dataset;
use crate::error::WellCdfResult;
use crate::plot::{assemble_with, PlotSpec};
use crate::quantile_ecdf::{build, QuantileEcdfs};

/// Output of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Column used to form the quartiles
    pub performance_measure: String,
    /// Column whose distribution was examined
    pub parameter: String,
    /// Quartile cut points
    pub edges: Vec<f64>,
    /// Wells left out for missing values
    pub dropped: MissingData,
    /// Per-quartile ECDFs
    pub ecdfs: QuantileEcdfs,
    /// Chart description
    pub plot: PlotSpec,
}

/// Run the whole pipeline for one selection
///
/// Only the measure and parameter columns take part, so gaps in unrelated
/// columns never drop a well.
pub fn run_pipeline(
    dataset: &Dataset,
    performance_measure: &str,
    parameter: &str,
    style: &PlotConfig,
) -> WellCdfResult<PipelineRun> {
    let projected = dataset.select(&[performance_measure, parameter])?;
    let binned = bin(&projected, performance_measure)?;
    let ecdfs = build(&binned, parameter)?;
    let plot = assemble_with(&ecdfs, performance_measure, parameter, style);

    tracing::info!(
        measure = performance_measure,
        parameter,
        wells = binned.len(),
        dropped = binned.dropped().count(),
        sizes = ?ecdfs.sample_sizes(),
        "Built quartile ECDFs"
    );

    Ok(PipelineRun {
        performance_measure: performance_measure.to_string(),
        parameter: parameter.to_string(),
        edges: binned.edges().to_vec(),
        dropped: binned.dropped().clone(),
        ecdfs,
        plot,
    })
}

/// Explicit analysis context replacing a process-wide dataset
#[derive(Debug, Clone)]
pub struct EcdfSession {
    dataset: Dataset,
    performance_measure: String,
    style: PlotConfig,
    current: Option<PipelineRun>,
}

impl EcdfSession {
    /// Create a session with the default chart layout
    pub fn new(dataset: Dataset, performance_measure: impl Into<String>) -> Self {
        Self {
            dataset,
            performance_measure: performance_measure.into(),
            style: PlotConfig::default(),
            current: None,
        }
    }

    /// Create a session from configuration
    pub fn from_config(dataset: Dataset, config: &WellCdfConfig) -> WellCdfResult<Self> {
        config.validate()?;
        Ok(Self {
            dataset,
            performance_measure: config.analysis.performance_measure.clone(),
            style: config.plot,
            current: None,
        })
    }

    /// The read-only dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Column used to form the quartiles
    pub fn performance_measure(&self) -> &str {
        &self.performance_measure
    }

    /// Columns that can be selected as ECDF parameter
    pub fn parameter_options(&self) -> Vec<&str> {
        self.dataset.column_names()
    }

    /// Run the pipeline for a newly selected parameter
    ///
    /// On success the run becomes the current one. On failure the error is
    /// returned and the current run is left unchanged.
    pub fn select_parameter(&mut self, parameter: &str) -> WellCdfResult<&PipelineRun> {
        match run_pipeline(&self.dataset, &self.performance_measure, parameter, &self.style) {
            Ok(run) => Ok(&*self.current.insert(run)),
            Err(err) => {
                tracing::warn!(parameter, error = %err, "Parameter selection failed");
                Err(err)
            }
        }
    }

    /// Last successful run
    pub fn current(&self) -> Option<&PipelineRun> {
        self.current.as_ref()
    }

    /// Chart of the last successful run
    pub fn current_plot(&self) -> Option<&PlotSpec> {
        self.current.as_ref().map(|run| &run.plot)
    }
}
