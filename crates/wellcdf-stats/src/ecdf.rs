//! Empirical Cumulative Distribution Function (ECDF)
//!
//! The ECDF is a right-continuous step function that estimates the CDF of a
//! sample. For a sample of n values, ECDF(x) = (number of values <= x) / n.
//!
//! The function is stored as its jump points: the sorted unique sample
//! values `x` and the cumulative fractions `y` reached at each of them.
//! An empty sample yields an empty ECDF that evaluates to 0 everywhere.

use serde::{Deserialize, Serialize};

use crate::quantile::sorted_finite;

/// Empirical Cumulative Distribution Function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ecdf {
    /// Sorted unique sample values
    x: Vec<f64>,
    /// Fraction of the sample <= each value in `x`
    y: Vec<f64>,
    /// Number of samples
    n: usize,
}

impl Ecdf {
    /// Build an ECDF from data
    ///
    /// Non-finite values are ignored. Time complexity: O(n log n).
    pub fn from_data(data: &[f64]) -> Self {
        let values = sorted_finite(data);
        let n = values.len();
        if n == 0 {
            return Self::default();
        }

        let mut x: Vec<f64> = Vec::new();
        let mut y: Vec<f64> = Vec::new();
        for (i, &v) in values.iter().enumerate() {
            let fraction = (i + 1) as f64 / n as f64;
            match x.last() {
                Some(&last) if last == v => {
                    if let Some(top) = y.last_mut() {
                        *top = fraction;
                    }
                }
                _ => {
                    x.push(v);
                    y.push(fraction);
                }
            }
        }

        Self { x, y, n }
    }

    /// Evaluate the ECDF at a point
    ///
    /// Returns the proportion of values <= x. Time complexity: O(log n).
    pub fn evaluate(&self, x: f64) -> f64 {
        let idx = self.x.partition_point(|&v| v <= x);
        if idx == 0 {
            0.0
        } else {
            self.y[idx - 1]
        }
    }

    /// Get the quantile (inverse CDF)
    ///
    /// Returns the smallest sample value v such that ECDF(v) >= p.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if self.x.is_empty() || !(0.0..=1.0).contains(&p) {
            return None;
        }

        let idx = self.y.partition_point(|&c| c < p);
        Some(self.x[idx.min(self.x.len() - 1)])
    }

    /// Get the median
    pub fn median(&self) -> Option<f64> {
        self.quantile(0.5)
    }

    /// Smallest sample value
    pub fn min(&self) -> Option<f64> {
        self.x.first().copied()
    }

    /// Largest sample value
    pub fn max(&self) -> Option<f64> {
        self.x.last().copied()
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check if the ECDF is empty
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Sorted unique values (step locations)
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Cumulative fractions at each step location
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// (x, y) pairs of the step locations
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}
