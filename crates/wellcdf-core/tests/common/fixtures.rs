//! Test fixture loading utilities

use std::path::PathBuf;

use wellcdf_core::{DataColumn, Dataset};

/// Performance measure column of the completion fixture
pub const GAS_CUM: &str = "Gas Cum 365 / 100 m";

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load the completion data fixture
#[allow(dead_code)]
pub fn load_completion_data() -> Dataset {
    let path = fixture_path("completion_data.csv");
    Dataset::from_path(path.to_str().unwrap(), "well_id")
        .unwrap_or_else(|e| panic!("Failed to load fixture: {}", e))
}

/// Wells `W-1..W-n` with a float measure and a float parameter
#[allow(dead_code)]
pub fn wells(measure: &[f64], parameter: &[f64]) -> Dataset {
    assert_eq!(measure.len(), parameter.len());
    let keys = (1..=measure.len()).map(|i| format!("W-{}", i)).collect();
    Dataset::new(
        "well_id",
        keys,
        vec![
            (
                "cum_gas".to_string(),
                DataColumn::Float64(measure.iter().map(|&x| Some(x)).collect()),
            ),
            (
                "lateral_length".to_string(),
                DataColumn::Float64(parameter.iter().map(|&x| Some(x)).collect()),
            ),
        ],
    )
    .unwrap()
}
