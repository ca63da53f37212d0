//! Quantiles and equal-frequency binning
//!
//! Quantiles use linear interpolation between order statistics: the
//! q-quantile of a sorted sample `v` of length n sits at position
//! `q * (n - 1)` and is interpolated between its two neighbours.
//!
//! `qcut` splits a sample into bins holding (roughly) equal counts. Bin `k`
//! covers the half-open interval `(edge[k], edge[k + 1]]`; the first bin
//! also includes its lower edge so that the sample minimum is assigned.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Compute the q-quantile of an already sorted sample
///
/// Returns `None` for an empty sample or a level outside [0, 1].
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let t = pos - lo as f64;

    Some(lerp(sorted[lo], sorted[hi], t))
}

/// Compute several quantile levels of an unsorted sample
///
/// Non-finite values are ignored.
pub fn quantiles(data: &[f64], levels: &[f64]) -> StatsResult<Vec<f64>> {
    let sorted = sorted_finite(data);
    if sorted.is_empty() {
        return Err(StatsError::EmptySample);
    }

    levels
        .iter()
        .map(|&q| quantile_sorted(&sorted, q).ok_or(StatsError::InvalidQuantile(q)))
        .collect()
}

/// Compute the edges of `bins` equal-frequency bins
///
/// Returns `bins + 1` edges, the first being the sample minimum and the
/// last the sample maximum. Fails when two edges coincide, since the bins
/// between them could never be told apart.
pub fn equal_frequency_edges(data: &[f64], bins: usize) -> StatsResult<Vec<f64>> {
    if bins == 0 {
        return Err(StatsError::InvalidBinCount(bins));
    }

    let levels: Vec<f64> = (0..=bins).map(|i| i as f64 / bins as f64).collect();
    let edges = quantiles(data, &levels)?;

    if edges.windows(2).any(|w| w[0] >= w[1]) {
        return Err(StatsError::DuplicateEdges { edges });
    }

    Ok(edges)
}

/// Assign a value to a bin given its edges
///
/// Returns `None` for non-finite values and values outside the edges.
pub fn assign_bin(edges: &[f64], x: f64) -> Option<usize> {
    if !x.is_finite() || edges.len() < 2 {
        return None;
    }

    // Index of the first edge >= x
    let idx = edges.partition_point(|&e| e < x);
    match idx {
        0 if x == edges[0] => Some(0),
        0 => None,
        i if i >= edges.len() => None,
        i => Some(i - 1),
    }
}

/// Result of cutting a sample into equal-frequency bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantileCut {
    /// Bin edges (`bins + 1` values, strictly increasing)
    pub edges: Vec<f64>,
    /// Bin index for each input position (`None` for missing values)
    pub assignments: Vec<Option<usize>>,
    /// Number of values in each bin
    pub counts: Vec<usize>,
}

impl QuantileCut {
    /// Number of bins
    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    /// Number of values that received a bin
    pub fn assigned(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Cut a sample with missing values into `bins` equal-frequency bins
///
/// Missing (`None`) and non-finite entries are left unassigned and do not
/// take part in the edge computation. Fails when the edges are not unique
/// or when any bin receives no values.
pub fn qcut(data: &[Option<f64>], bins: usize) -> StatsResult<QuantileCut> {
    let present: Vec<f64> = data
        .iter()
        .flatten()
        .copied()
        .filter(|x| x.is_finite())
        .collect();

    let edges = equal_frequency_edges(&present, bins)?;

    let mut counts = vec![0usize; bins];
    let assignments: Vec<Option<usize>> = data
        .iter()
        .map(|value| {
            let bin = value.and_then(|x| assign_bin(&edges, x));
            if let Some(b) = bin {
                counts[b] += 1;
            }
            bin
        })
        .collect();

    if let Some(bin) = counts.iter().position(|&c| c == 0) {
        return Err(StatsError::EmptyBin { bin, edges });
    }

    Ok(QuantileCut {
        edges,
        assignments,
        counts,
    })
}

/// Sort the finite values of a sample ascending
pub(crate) fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut values: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    values.sort_by(f64::total_cmp);
    values
}

// Interpolate from whichever end is closer to keep the result inside [a, b]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}
