//! Quantile Binner
//!
//! Splits wells into performance quartiles. Cut points are the 0/25/50/75/100%
//! quantiles of the performance measure (linear interpolation), bins are
//! `(edge[k], edge[k + 1]]` with the lowest bin closed on the left. Labels are
//! attached by row position, never by value, so wells sharing a measure value
//! are still labelled independently.

use std::fmt;

use serde::{Deserialize, Serialize};
use wellcdf_stats::qcut;

use crate::dataset::Dataset;
use crate::error::{WellCdfError, WellCdfResult};

/// Performance quartile, Q1 holding the lowest measure values
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuantileLabel {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl QuantileLabel {
    /// All labels, lowest first
    pub const ALL: [QuantileLabel; 4] = [
        QuantileLabel::Q1,
        QuantileLabel::Q2,
        QuantileLabel::Q3,
        QuantileLabel::Q4,
    ];

    /// Zero-based bin index
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label for a zero-based bin index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            QuantileLabel::Q1 => "q1",
            QuantileLabel::Q2 => "q2",
            QuantileLabel::Q3 => "q3",
            QuantileLabel::Q4 => "q4",
        }
    }
}

impl fmt::Display for QuantileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Wells dropped from a run because a required value was missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingData {
    /// Keys of the dropped wells, in input order
    pub keys: Vec<String>,
}

impl MissingData {
    /// Number of dropped wells
    pub fn count(&self) -> usize {
        self.keys.len()
    }

    /// Check if nothing was dropped
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Dataset with one quartile label per retained well
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnedDataset {
    dataset: Dataset,
    labels: Vec<QuantileLabel>,
    measure: String,
    edges: Vec<f64>,
    dropped: MissingData,
}

impl BinnedDataset {
    /// Retained wells, ordered Q1 block first
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Label of each retained well, aligned with `dataset()` rows
    pub fn labels(&self) -> &[QuantileLabel] {
        &self.labels
    }

    /// Column the quartiles were computed over
    pub fn measure(&self) -> &str {
        &self.measure
    }

    /// Cut points (five values, strictly increasing)
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Wells dropped for missing values
    pub fn dropped(&self) -> &MissingData {
        &self.dropped
    }

    /// Number of retained wells
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if no wells were retained
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row positions carrying a label
    pub fn rows_for(&self, label: QuantileLabel) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == label)
            .map(|(i, _)| i)
            .collect()
    }

    /// Well keys carrying a label, in output order
    pub fn keys_for(&self, label: QuantileLabel) -> Vec<&str> {
        self.rows_for(label)
            .into_iter()
            .map(|i| self.dataset.keys()[i].as_str())
            .collect()
    }

    /// Label of a well by key
    pub fn label_of(&self, key: &str) -> Option<QuantileLabel> {
        self.dataset
            .keys()
            .iter()
            .position(|k| k == key)
            .map(|i| self.labels[i])
    }
}

/// Assign every well of `dataset` to a performance quartile
///
/// Edges are computed over all wells with a measure value. Wells missing
/// the measure, or missing any other column of `dataset`, are then dropped
/// and reported in `BinnedDataset::dropped`. Pass a projected dataset (see
/// `Dataset::select`) to restrict which columns take part in the drop.
pub fn bin(dataset: &Dataset, performance_measure: &str) -> WellCdfResult<BinnedDataset> {
    let values = dataset
        .column(performance_measure)?
        .to_f64()
        .ok_or_else(|| WellCdfError::NonNumericMeasure {
            measure: performance_measure.to_string(),
        })?;

    let cut = qcut(&values, QuantileLabel::ALL.len()).map_err(|e| {
        WellCdfError::DegenerateBinning {
            measure: performance_measure.to_string(),
            reason: e.to_string(),
        }
    })?;
    tracing::debug!(measure = performance_measure, edges = ?cut.edges, "Computed quartile edges");

    let mut kept: Vec<(usize, QuantileLabel)> = Vec::with_capacity(dataset.len());
    let mut dropped = MissingData::default();
    for (row, assignment) in cut.assignments.iter().enumerate() {
        match assignment.and_then(QuantileLabel::from_index) {
            Some(label) if !dataset.row_has_missing(row) => kept.push((row, label)),
            _ => dropped.keys.push(dataset.keys()[row].clone()),
        }
    }

    // Stable: wells keep their input order inside each quartile
    kept.sort_by_key(|&(_, label)| label);

    if !dropped.is_empty() {
        tracing::warn!(
            measure = performance_measure,
            dropped = dropped.count(),
            "Dropped wells with missing values"
        );
        tracing::debug!(keys = ?dropped.keys, "Dropped well keys");
    }

    let rows: Vec<usize> = kept.iter().map(|&(row, _)| row).collect();
    Ok(BinnedDataset {
        dataset: dataset.take(&rows),
        labels: kept.into_iter().map(|(_, label)| label).collect(),
        measure: performance_measure.to_string(),
        edges: cut.edges,
        dropped,
    })
}
