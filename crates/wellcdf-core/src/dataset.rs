//! Well dataset: rows keyed by well identifier
//!
//! A `Dataset` is an ordered table whose rows are wells. The key column is
//! held apart from the feature columns so that every other column can be
//! selected as a performance measure or ECDF parameter.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use wellcdf_io::{open_file, DataColumn, DataReader, DataTable};

use crate::error::{WellCdfError, WellCdfResult};

/// Ordered collection of well records with unique keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    key_column: String,
    keys: Vec<String>,
    table: DataTable,
}

impl Dataset {
    /// Create a dataset from keys and feature columns
    ///
    /// Fails on duplicate keys, duplicate column names, a feature column
    /// named like the key column, or columns whose length differs from the
    /// number of keys.
    pub fn new(
        key_column: impl Into<String>,
        keys: Vec<String>,
        columns: Vec<(String, DataColumn)>,
    ) -> WellCdfResult<Self> {
        let key_column = key_column.into();

        let mut seen = HashSet::new();
        for key in &keys {
            if !seen.insert(key.as_str()) {
                return Err(WellCdfError::DuplicateKey { key: key.clone() });
            }
        }

        let mut names = HashSet::new();
        let mut table = DataTable::new();
        for (name, data) in columns {
            if name == key_column || !names.insert(name.clone()) {
                return Err(WellCdfError::InvalidDataset {
                    message: format!("duplicate column '{}'", name),
                });
            }
            if data.len() != keys.len() {
                return Err(WellCdfError::InvalidDataset {
                    message: format!(
                        "column '{}' has {} rows, expected {}",
                        name,
                        data.len(),
                        keys.len()
                    ),
                });
            }
            table.add_column(name, data);
        }
        table.num_rows = keys.len();

        Ok(Self {
            key_column,
            keys,
            table,
        })
    }

    /// Split a loaded table into keys and feature columns
    pub fn from_table(mut table: DataTable, key_column: &str) -> WellCdfResult<Self> {
        let key_data = table
            .remove_column(key_column)
            .ok_or_else(|| WellCdfError::ColumnNotFound {
                column: key_column.to_string(),
            })?;

        let keys = (0..key_data.len())
            .map(|row| {
                key_data
                    .cell_string(row)
                    .ok_or_else(|| WellCdfError::MissingKey {
                        row,
                        key_column: key_column.to_string(),
                    })
            })
            .collect::<WellCdfResult<Vec<_>>>()?;

        Self::new(key_column, keys, table.columns)
    }

    /// Read every column from a reader
    pub fn from_reader(reader: &dyn DataReader, key_column: &str) -> WellCdfResult<Self> {
        let dataset = Self::from_table(reader.read_table()?, key_column)?;
        tracing::info!(
            format = reader.format_name(),
            path = reader.path().unwrap_or("<memory>"),
            wells = dataset.len(),
            columns = dataset.table.num_columns(),
            "Loaded well dataset"
        );
        Ok(dataset)
    }

    /// Open a file by extension and load it
    pub fn from_path(path: &str, key_column: &str) -> WellCdfResult<Self> {
        let reader = open_file(path)?;
        Self::from_reader(reader.as_ref(), key_column)
    }

    /// Name of the key column
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// Well identifiers in row order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of wells
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the dataset has no wells
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Feature column names, in order
    pub fn column_names(&self) -> Vec<&str> {
        self.table.column_names()
    }

    /// Check whether a feature column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.table.column(name).is_some()
    }

    /// Get a feature column by name
    pub fn column(&self, name: &str) -> WellCdfResult<&DataColumn> {
        self.table
            .column(name)
            .ok_or_else(|| WellCdfError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Project onto a subset of feature columns
    ///
    /// Repeated names are kept once.
    pub fn select(&self, names: &[&str]) -> WellCdfResult<Dataset> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for &name in names {
            if seen.insert(name) {
                columns.push((name.to_string(), self.column(name)?.clone()));
            }
        }
        Self::new(self.key_column.clone(), self.keys.clone(), columns)
    }

    /// Gather rows by position into a new dataset
    ///
    /// Out-of-range positions are skipped so keys and columns stay aligned.
    pub(crate) fn take(&self, rows: &[usize]) -> Dataset {
        let rows: Vec<usize> = rows.iter().copied().filter(|&i| i < self.len()).collect();

        let mut table = DataTable::new();
        for (name, data) in &self.table.columns {
            table.add_column(name.clone(), data.take(&rows));
        }
        table.num_rows = rows.len();

        Dataset {
            key_column: self.key_column.clone(),
            keys: rows.iter().map(|&i| self.keys[i].clone()).collect(),
            table,
        }
    }

    /// Check whether any feature cell of a row is missing
    pub fn row_has_missing(&self, row: usize) -> bool {
        self.table.columns.iter().any(|(_, data)| data.is_missing(row))
    }
}
