//! Schema and column types for data representation

use serde::{Deserialize, Serialize};

/// Schema describing the structure of a dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Data type
    pub dtype: ColumnType,

    /// Number of missing cells
    pub missing: usize,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
            missing: 0,
        }
    }

    /// Set the missing cell count
    pub fn with_missing(mut self, missing: usize) -> Self {
        self.missing = missing;
        self
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Float64,
    Int64,
    Bool,
    String,
}

impl ColumnType {
    /// Check if this is a numeric type
    ///
    /// Booleans count as numeric (0/1), matching how array libraries
    /// coerce them.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::Float64 | ColumnType::Int64 | ColumnType::Bool
        )
    }

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Float64 => "float64",
            ColumnType::Int64 => "int64",
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
        }
    }
}

/// A column of data; `None` marks a missing cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataColumn {
    Float64(Vec<Option<f64>>),
    Int64(Vec<Option<i64>>),
    Bool(Vec<Option<bool>>),
    String(Vec<Option<String>>),
}

impl DataColumn {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            DataColumn::Float64(_) => ColumnType::Float64,
            DataColumn::Int64(_) => ColumnType::Int64,
            DataColumn::Bool(_) => ColumnType::Bool,
            DataColumn::String(_) => ColumnType::String,
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        match self {
            DataColumn::Float64(v) => v.len(),
            DataColumn::Int64(v) => v.len(),
            DataColumn::Bool(v) => v.len(),
            DataColumn::String(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether the cell at `index` is missing
    ///
    /// NaN floats count as missing. Out-of-range indices are missing too.
    pub fn is_missing(&self, index: usize) -> bool {
        match self {
            DataColumn::Float64(v) => !matches!(v.get(index), Some(Some(x)) if !x.is_nan()),
            DataColumn::Int64(v) => !matches!(v.get(index), Some(Some(_))),
            DataColumn::Bool(v) => !matches!(v.get(index), Some(Some(_))),
            DataColumn::String(v) => !matches!(v.get(index), Some(Some(_))),
        }
    }

    /// Number of missing cells
    pub fn missing_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_missing(i)).count()
    }

    /// Convert to f64 (for numeric types)
    ///
    /// Returns `None` for string columns; missing cells stay `None`.
    pub fn to_f64(&self) -> Option<Vec<Option<f64>>> {
        match self {
            DataColumn::Float64(v) => Some(v.iter().map(|x| x.filter(|x| !x.is_nan())).collect()),
            DataColumn::Int64(v) => Some(v.iter().map(|x| x.map(|x| x as f64)).collect()),
            DataColumn::Bool(v) => Some(
                v.iter()
                    .map(|x| x.map(|b| if b { 1.0 } else { 0.0 }))
                    .collect(),
            ),
            DataColumn::String(_) => None,
        }
    }

    /// Render the cell at `index` as text
    pub fn cell_string(&self, index: usize) -> Option<String> {
        if self.is_missing(index) {
            return None;
        }
        match self {
            DataColumn::Float64(v) => v.get(index).copied().flatten().map(|x| x.to_string()),
            DataColumn::Int64(v) => v.get(index).copied().flatten().map(|x| x.to_string()),
            DataColumn::Bool(v) => v.get(index).copied().flatten().map(|x| x.to_string()),
            DataColumn::String(v) => v.get(index).cloned().flatten(),
        }
    }

    /// Gather the rows at `indices` into a new column
    ///
    /// Out-of-range indices produce missing cells.
    pub fn take(&self, indices: &[usize]) -> DataColumn {
        fn gather<T: Clone>(v: &[Option<T>], indices: &[usize]) -> Vec<Option<T>> {
            indices
                .iter()
                .map(|&i| v.get(i).cloned().flatten())
                .collect()
        }

        match self {
            DataColumn::Float64(v) => DataColumn::Float64(gather(v, indices)),
            DataColumn::Int64(v) => DataColumn::Int64(gather(v, indices)),
            DataColumn::Bool(v) => DataColumn::Bool(gather(v, indices)),
            DataColumn::String(v) => DataColumn::String(gather(v, indices)),
        }
    }
}

/// An ordered set of equally long named columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Columns in insertion order
    pub columns: Vec<(String, DataColumn)>,

    /// Number of rows
    pub num_rows: usize,
}

impl DataTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column
    ///
    /// The first column fixes the row count.
    pub fn add_column(&mut self, name: impl Into<String>, data: DataColumn) {
        if self.columns.is_empty() {
            self.num_rows = data.len();
        }
        self.columns.push((name.into(), data));
    }

    /// Remove a column by name and return it
    pub fn remove_column(&mut self, name: &str) -> Option<DataColumn> {
        let idx = self.columns.iter().position(|(n, _)| n == name)?;
        Some(self.columns.remove(idx).1)
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&DataColumn> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
