//! End-to-end pipeline tests: binning, per-quartile ECDFs and chart assembly

mod common;

use common::fixtures::{load_completion_data, wells, GAS_CUM};
use proptest::prelude::*;
use rstest::rstest;
use wellcdf_core::config::PlotConfig;
use wellcdf_core::{bin, build, run_pipeline, EcdfSession, QuantileLabel, WellCdfError};

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{:?} vs {:?}", actual, expected);
    }
}

// === Eight-well scenario ===

#[test]
fn test_eight_wells_quartiles() {
    let measure: Vec<f64> = (1..=8).map(|x| x as f64).collect();
    let parameter: Vec<f64> = (1..=8).map(|x| (x * 10) as f64).collect();
    let binned = bin(&wells(&measure, &parameter), "cum_gas").unwrap();

    assert_eq!(binned.keys_for(QuantileLabel::Q1), vec!["W-1", "W-2"]);
    assert_eq!(binned.keys_for(QuantileLabel::Q2), vec!["W-3", "W-4"]);
    assert_eq!(binned.keys_for(QuantileLabel::Q3), vec!["W-5", "W-6"]);
    assert_eq!(binned.keys_for(QuantileLabel::Q4), vec!["W-7", "W-8"]);

    let ecdfs = build(&binned, "lateral_length").unwrap();
    assert_eq!(ecdfs.q1.x(), &[10.0, 20.0]);
    assert_eq!(ecdfs.q1.y(), &[0.5, 1.0]);
}

// === Failure scenarios ===

#[rstest]
#[case::all_equal(&[1.0, 1.0, 1.0, 1.0])]
#[case::three_values(&[1.0, 2.0, 3.0])]
#[case::two_distinct(&[1.0, 1.0, 2.0, 2.0])]
#[case::heavy_tie(&[5.0, 5.0, 5.0, 6.0, 7.0])]
fn test_degenerate_binning(#[case] measure: &[f64]) {
    let parameter = vec![1.0; measure.len()];
    let err = bin(&wells(measure, &parameter), "cum_gas").unwrap_err();
    assert!(
        matches!(err, WellCdfError::DegenerateBinning { .. }),
        "unexpected error: {err}"
    );
}

#[rstest]
#[case::text("fluid_system", true)]
#[case::float("proppant_intensity", false)]
#[case::integer_with_gaps("stages", false)]
fn test_parameter_type_check(#[case] parameter: &str, #[case] rejected: bool) {
    let mut session = EcdfSession::new(load_completion_data(), GAS_CUM);
    let result = session.select_parameter(parameter);
    assert_eq!(
        matches!(result, Err(WellCdfError::NonNumericParameter { .. })),
        rejected
    );
}

#[test]
fn test_non_numeric_selection_keeps_prior_plot() {
    let mut session = EcdfSession::new(load_completion_data(), GAS_CUM);
    let prior = session.select_parameter("lateral_length").unwrap().plot.clone();

    let err = session.select_parameter("fluid_system").unwrap_err();
    assert_eq!(err.user_message(), "Error: Selected parameter is not numeric.");
    assert_eq!(session.current_plot(), Some(&prior));
}

#[test]
fn test_unknown_parameter() {
    let mut session = EcdfSession::new(load_completion_data(), GAS_CUM);
    let err = session.select_parameter("frac_hits").unwrap_err();
    assert!(matches!(err, WellCdfError::ColumnNotFound { column } if column == "frac_hits"));
    assert!(session.current().is_none());
}

// === Completion data fixture ===

#[test]
fn test_fixture_loads() {
    let dataset = load_completion_data();
    assert_eq!(dataset.len(), 13);
    assert_eq!(
        dataset.column_names(),
        vec![
            GAS_CUM,
            "lateral_length",
            "proppant_intensity",
            "fluid_system",
            "stages"
        ]
    );
}

#[test]
fn test_fixture_lateral_length_run() {
    let mut session = EcdfSession::new(load_completion_data(), GAS_CUM);
    let run = session.select_parameter("lateral_length").unwrap();

    assert_close(&run.edges, &[95.0, 197.5, 292.5, 406.25, 520.0]);
    assert_eq!(run.dropped.keys, vec!["W04".to_string(), "W08".to_string()]);
    assert_eq!(run.ecdfs.sample_sizes(), [3, 2, 3, 3]);

    assert_close(run.ecdfs.q1.x(), &[1400.0, 1500.0, 1550.0]);
    assert_close(run.ecdfs.q1.y(), &[1.0 / 3.0, 2.0 / 3.0, 1.0]);
    assert_close(run.ecdfs.q2.x(), &[1650.0, 1750.0]);
    assert_close(run.ecdfs.q4.x(), &[2100.0, 2250.0, 2300.0]);

    let layout = &run.plot.layout;
    assert_eq!(layout.title.text, "ECDF Lateral length");
    assert_eq!(layout.annotations[0].text, "Quantiles: Gas cum 365 / 100 m");
    assert_eq!(layout.annotations[0].x, 2300.0);
}

#[test]
fn test_fixture_binned_order() {
    let dataset = load_completion_data()
        .select(&[GAS_CUM, "lateral_length"])
        .unwrap();
    let binned = bin(&dataset, GAS_CUM).unwrap();

    assert_eq!(
        binned.dataset().keys(),
        &["W02", "W07", "W10", "W05", "W12", "W01", "W06", "W11", "W03", "W09", "W13"]
    );
}

#[test]
fn test_fixture_stages_drops_na() {
    let run = run_pipeline(
        &load_completion_data(),
        GAS_CUM,
        "stages",
        &PlotConfig::default(),
    )
    .unwrap();
    assert_eq!(run.dropped.keys, vec!["W04".to_string(), "W11".to_string()]);
    assert_eq!(run.ecdfs.sample_sizes(), [3, 3, 2, 3]);
}

#[test]
fn test_pipeline_is_idempotent() {
    let dataset = load_completion_data();
    let style = PlotConfig::default();
    let first = run_pipeline(&dataset, GAS_CUM, "proppant_intensity", &style).unwrap();
    let second = run_pipeline(&dataset, GAS_CUM, "proppant_intensity", &style).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.plot.to_json().unwrap(), second.plot.to_json().unwrap());
}

#[test]
fn test_empty_quartile_after_drop() {
    // Both Q4 wells lack the parameter, so Q4 ends up without values
    let dataset = wellcdf_core::Dataset::new(
        "well_id",
        (1..=8).map(|i| format!("W-{}", i)).collect(),
        vec![
            (
                "cum_gas".to_string(),
                wellcdf_core::DataColumn::Float64((1..=8).map(|x| Some(x as f64)).collect()),
            ),
            (
                "lateral_length".to_string(),
                wellcdf_core::DataColumn::Float64(
                    (1..=8)
                        .map(|x| if x > 6 { None } else { Some(x as f64 * 100.0) })
                        .collect(),
                ),
            ),
        ],
    )
    .unwrap();

    let run = run_pipeline(&dataset, "cum_gas", "lateral_length", &PlotConfig::default()).unwrap();
    assert!(run.ecdfs.q4.is_empty());
    assert_eq!(run.ecdfs.q4.evaluate(1e9), 0.0);
    assert!(run.plot.series[3].x.is_empty());
    assert_eq!(run.plot.layout.annotations[0].x, 600.0);
}

#[test]
fn test_all_missing_parameter_column() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let mut contents = String::from("well_id,cum_gas,gaps\n");
    for i in 1..=8 {
        contents.push_str(&format!("W-{},{},\n", i, i * 10));
    }
    std::io::Write::write_all(&mut file, contents.as_bytes()).unwrap();

    let dataset =
        wellcdf_core::Dataset::from_path(file.path().to_str().unwrap(), "well_id").unwrap();
    let mut session = EcdfSession::new(dataset, "cum_gas");
    let run = session.select_parameter("gaps").unwrap();

    assert_eq!(run.ecdfs.sample_sizes(), [0, 0, 0, 0]);
    assert!(run.ecdfs.iter().all(|(_, ecdf)| ecdf.is_empty()));
    assert_eq!(run.dropped.count(), 8);
    assert!(run.plot.series.iter().all(|s| s.x.is_empty()));
    assert_eq!(run.plot.layout.annotations[0].x, 0.0);
}

// === Properties ===

proptest! {
    #[test]
    fn prop_binning_partitions_distinct_measures(
        values in proptest::collection::hash_set(-100_000i64..100_000, 4..120)
    ) {
        let measure: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        let parameter: Vec<f64> = (0..measure.len()).map(|i| i as f64).collect();
        let dataset = wells(&measure, &parameter);
        let binned = bin(&dataset, "cum_gas").unwrap();

        prop_assert_eq!(binned.len(), dataset.len());
        prop_assert!(binned.dropped().is_empty());
        for label in QuantileLabel::ALL {
            prop_assert!(!binned.keys_for(label).is_empty());
        }

        let mut keys: Vec<&str> = binned.dataset().keys().iter().map(String::as_str).collect();
        let mut expected: Vec<&str> = dataset.keys().iter().map(String::as_str).collect();
        keys.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(keys, expected);

        prop_assert!(binned.labels().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_quartile_ecdfs_are_cdfs(
        values in proptest::collection::hash_set(-100_000i64..100_000, 4..120),
        seed in any::<u64>()
    ) {
        let measure: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        let parameter: Vec<f64> = (0..measure.len())
            .map(|i| ((i as u64).wrapping_mul(seed) % 97) as f64)
            .collect();
        let run = run_pipeline(
            &wells(&measure, &parameter),
            "cum_gas",
            "lateral_length",
            &PlotConfig::default(),
        )
        .unwrap();

        for (_, ecdf) in run.ecdfs.iter() {
            prop_assert!(ecdf.y().windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(ecdf.y()[0] >= 0.0);
            prop_assert_eq!(*ecdf.y().last().unwrap(), 1.0);
        }
    }
}
