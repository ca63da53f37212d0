//! ECDF Builder
//!
//! Computes one ECDF of the selected parameter per performance quartile.
//! Quartiles are built independently from the rows carrying their label.

use serde::{Deserialize, Serialize};
use wellcdf_stats::Ecdf;

use crate::binning::{BinnedDataset, QuantileLabel};
use crate::error::{WellCdfError, WellCdfResult};

/// One ECDF per performance quartile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantileEcdfs {
    pub q1: Ecdf,
    pub q2: Ecdf,
    pub q3: Ecdf,
    pub q4: Ecdf,
}

impl QuantileEcdfs {
    /// ECDF of a quartile
    pub fn get(&self, label: QuantileLabel) -> &Ecdf {
        match label {
            QuantileLabel::Q1 => &self.q1,
            QuantileLabel::Q2 => &self.q2,
            QuantileLabel::Q3 => &self.q3,
            QuantileLabel::Q4 => &self.q4,
        }
    }

    /// Quartiles and their ECDFs, lowest first
    pub fn iter(&self) -> impl Iterator<Item = (QuantileLabel, &Ecdf)> {
        QuantileLabel::ALL.into_iter().map(move |label| (label, self.get(label)))
    }

    /// Sizes of the four samples
    pub fn sample_sizes(&self) -> [usize; 4] {
        QuantileLabel::ALL.map(|label| self.get(label).len())
    }
}

/// Build the per-quartile ECDFs of `parameter`
///
/// Fails when the parameter column is absent or holds text. A quartile left
/// without rows yields an empty ECDF, which evaluates to 0 everywhere.
pub fn build(binned: &BinnedDataset, parameter: &str) -> WellCdfResult<QuantileEcdfs> {
    let values = binned
        .dataset()
        .column(parameter)?
        .to_f64()
        .ok_or_else(|| WellCdfError::NonNumericParameter {
            parameter: parameter.to_string(),
        })?;

    let mut samples: [Vec<f64>; 4] = Default::default();
    for (value, label) in values.iter().zip(binned.labels()) {
        if let Some(v) = value {
            samples[label.index()].push(*v);
        }
    }

    let [q1, q2, q3, q4] = samples.map(|sample| Ecdf::from_data(&sample));
    let ecdfs = QuantileEcdfs { q1, q2, q3, q4 };

    for (label, ecdf) in ecdfs.iter() {
        if ecdf.is_empty() {
            tracing::warn!(parameter, quartile = %label, "Quartile has no values");
        }
    }

    Ok(ecdfs)
}
