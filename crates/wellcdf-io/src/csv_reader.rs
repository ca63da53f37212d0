//! CSV file reader with type inference

use crate::reader::{DataReader, IoError, IoResult};
use crate::schema::{ColumnDescriptor, ColumnType, DataColumn, DataSchema, DataTable};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Cell contents treated as missing values
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Check whether a raw cell holds a missing-value token
pub fn is_missing_token(value: &str) -> bool {
    MISSING_TOKENS.contains(&value.trim())
}

/// CSV file reader
pub struct CsvReader {
    path: String,
    schema: DataSchema,
    delimiter: u8,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_delimiter(path, b',')
    }

    /// Open a delimited file with a header row
    pub fn open_with_delimiter(path: &str, delimiter: u8) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let (headers, cells) = read_cells(path, delimiter)?;
        let columns = headers
            .into_iter()
            .zip(cells.iter())
            .map(|(name, values)| {
                let missing = values.iter().filter(|v| is_missing_token(v)).count();
                ColumnDescriptor::new(name, infer_type(values)).with_missing(missing)
            })
            .collect();
        let num_records = cells.first().map(|c| c.len()).unwrap_or(0);
        let schema = DataSchema::new(columns, num_records);

        tracing::debug!(
            path,
            columns = schema.num_columns(),
            records = num_records,
            "Inferred CSV schema"
        );

        Ok(Self {
            path: path.to_string(),
            schema,
            delimiter,
        })
    }
}

impl DataReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.schema.clone())
    }

    fn read_column(&self, name: &str) -> IoResult<DataColumn> {
        let col_index = self
            .schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;

        let (_, cells) = read_cells(&self.path, self.delimiter)?;
        let values = cells.get(col_index).map(Vec::as_slice).unwrap_or(&[]);

        Ok(parse_column(values, self.schema.columns[col_index].dtype))
    }

    fn read_table(&self) -> IoResult<DataTable> {
        let (_, cells) = read_cells(&self.path, self.delimiter)?;

        let mut table = DataTable::new();
        for (desc, values) in self.schema.columns.iter().zip(cells.iter()) {
            table.add_column(&desc.name, parse_column(values, desc.dtype));
        }

        Ok(table)
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Read the header and all cells, transposed into columns
fn read_cells(path: &str, delimiter: u8) -> IoResult<(Vec<String>, Vec<Vec<String>>)> {
    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .iter()
        .map(|s| s.trim().to_string())
        .collect();

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| match e.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => IoError::RaggedRecord {
                record: i + 1,
                expected: *expected_len as usize,
                found: *len as usize,
            },
            csv::ErrorKind::Io(err) => IoError::Io(err.to_string()),
            _ => IoError::InvalidFormat(e.to_string()),
        })?;

        for (j, value) in record.iter().enumerate() {
            if let Some(column) = columns.get_mut(j) {
                column.push(value.to_string());
            }
        }
    }

    Ok((headers, columns))
}

/// Infer column type from all of its values
///
/// Missing tokens are skipped; a column with no values at all is Float64.
fn infer_type(values: &[String]) -> ColumnType {
    let present: Vec<&str> = values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !is_missing_token(s))
        .collect();
    if present.is_empty() {
        return ColumnType::Float64;
    }

    if present.iter().all(|s| s.parse::<i64>().is_ok()) {
        return ColumnType::Int64;
    }

    if present.iter().all(|s| s.parse::<f64>().is_ok()) {
        return ColumnType::Float64;
    }

    if present
        .iter()
        .all(|s| matches!(s.to_lowercase().as_str(), "true" | "false"))
    {
        return ColumnType::Bool;
    }

    ColumnType::String
}

/// Parse column values into a DataColumn
fn parse_column(values: &[String], dtype: ColumnType) -> DataColumn {
    let cells = values.iter().map(|s| {
        let s = s.trim();
        if is_missing_token(s) {
            None
        } else {
            Some(s)
        }
    });

    match dtype {
        ColumnType::Float64 => DataColumn::Float64(cells.map(|c| c.and_then(|s| s.parse().ok())).collect()),
        ColumnType::Int64 => DataColumn::Int64(cells.map(|c| c.and_then(|s| s.parse().ok())).collect()),
        ColumnType::Bool => DataColumn::Bool(
            cells
                .map(|c| c.map(|s| s.eq_ignore_ascii_case("true")))
                .collect(),
        ),
        ColumnType::String => DataColumn::String(cells.map(|c| c.map(str::to_string)).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_type_int() {
        assert_eq!(infer_type(&strings(&["1", "2", "3"])), ColumnType::Int64);
    }

    #[test]
    fn test_infer_type_float() {
        assert_eq!(infer_type(&strings(&["1.5", "2", "3.14"])), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_skips_missing() {
        assert_eq!(infer_type(&strings(&["", "NA", "2.5"])), ColumnType::Float64);
        assert_eq!(infer_type(&strings(&["", "nan"])), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_bool() {
        assert_eq!(infer_type(&strings(&["true", "False"])), ColumnType::Bool);
    }

    #[test]
    fn test_infer_type_string() {
        assert_eq!(infer_type(&strings(&["slickwater", "2.0"])), ColumnType::String);
    }

    #[test]
    fn test_read_table() {
        let file = write_csv(
            "well_id,Gas Cum 365 / 100 m,fluid_system,stages\n\
             W-1,120.5,slickwater,30\n\
             W-2,,hybrid,NA\n\
             W-3,98.25,slickwater,28\n",
        );
        let reader = CsvReader::open(file.path().to_str().unwrap()).unwrap();

        let schema = reader.read_schema().unwrap();
        assert_eq!(schema.num_records, 3);
        assert_eq!(
            schema.column_names(),
            vec!["well_id", "Gas Cum 365 / 100 m", "fluid_system", "stages"]
        );
        assert_eq!(schema.column("Gas Cum 365 / 100 m").unwrap().dtype, ColumnType::Float64);
        assert_eq!(schema.column("Gas Cum 365 / 100 m").unwrap().missing, 1);
        assert_eq!(schema.column("stages").unwrap().dtype, ColumnType::Int64);
        assert_eq!(schema.column("fluid_system").unwrap().dtype, ColumnType::String);

        let table = reader.read_table().unwrap();
        assert_eq!(table.num_rows, 3);
        assert_eq!(
            table.column("Gas Cum 365 / 100 m"),
            Some(&DataColumn::Float64(vec![Some(120.5), None, Some(98.25)]))
        );
        assert_eq!(
            table.column("stages"),
            Some(&DataColumn::Int64(vec![Some(30), None, Some(28)]))
        );
    }

    #[test]
    fn test_read_column() {
        let file = write_csv("well_id,stages\nA,1\nB,2\n");
        let reader = CsvReader::open(file.path().to_str().unwrap()).unwrap();

        assert_eq!(
            reader.read_column("stages").unwrap(),
            DataColumn::Int64(vec![Some(1), Some(2)])
        );
        assert!(matches!(
            reader.read_column("proppant"),
            Err(IoError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_ragged_record() {
        let file = write_csv("well_id,stages\nA,1\nB\n");
        let err = CsvReader::open(file.path().to_str().unwrap()).err().unwrap();
        assert!(matches!(err, IoError::RaggedRecord { record: 2, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = CsvReader::open("/definitely/not/here.csv").err().unwrap();
        assert!(matches!(err, IoError::FileNotFound(_)));
    }

    #[test]
    fn test_tsv_delimiter() {
        let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
        file.write_all(b"well_id\tstages\nA\t7\n").unwrap();

        let reader = crate::reader::open_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(reader.format_name(), "CSV");
        assert_eq!(
            reader.read_column("stages").unwrap(),
            DataColumn::Int64(vec![Some(7)])
        );
    }
}
