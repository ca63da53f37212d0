//! wellcdf - quartile ECDF charts from the command line
//!
//! Loads a CSV of wells, splits them into performance quartiles and writes
//! the per-quartile ECDF chart as Plotly figure JSON.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wellcdf_core::plot::QUARTILE_LABELS;
use wellcdf_core::{Dataset, EcdfSession, PipelineRun, WellCdfConfig, WellCdfError};

const DEFAULT_LOG_FILTER: &str = "wellcdf_core=info,wellcdf_io=info,wellcdf=info";

#[derive(Parser)]
#[command(name = "wellcdf", version, about = "Quartile-segmented ECDFs of well data")]
struct Cli {
    /// CSV or TSV file with one row per well
    data: PathBuf,

    /// Column whose distribution is plotted
    #[arg(short, long)]
    parameter: Option<String>,

    /// Column used to form the quartiles
    #[arg(short, long)]
    measure: Option<String>,

    /// Column holding the well identifiers
    #[arg(long)]
    key_column: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the figure JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List selectable parameters and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    finish(run(Cli::parse()), &mut std::io::stderr().lock())
}

/// Report the outcome of a run and pick the exit code
fn finish(result: anyhow::Result<()>, err_out: &mut impl Write) -> ExitCode {
    let Err(err) = result else {
        return ExitCode::SUCCESS;
    };
    let message = match err.downcast_ref::<WellCdfError>() {
        Some(pipeline_err) => pipeline_err.user_message(),
        None => format!("Error: {err:#}"),
    };
    // Nothing left to report to if stderr itself is gone
    let _ = writeln!(err_out, "{message}");
    ExitCode::FAILURE
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => WellCdfConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => WellCdfConfig::load_or_default().context("failed to load user config")?,
    };
    if let Some(measure) = cli.measure {
        config.analysis.performance_measure = measure;
    }
    if let Some(key_column) = cli.key_column {
        config.data.key_column = key_column;
    }

    let data_path = cli.data.to_string_lossy();
    let dataset = Dataset::from_path(&data_path, &config.data.key_column)?;
    let mut session = EcdfSession::from_config(dataset, &config)?;

    if cli.list {
        let mut stdout = std::io::stdout().lock();
        for name in session.parameter_options() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let Some(parameter) = cli.parameter else {
        anyhow::bail!("no parameter selected (use --parameter, or --list to see choices)");
    };
    let run = session.select_parameter(&parameter)?;

    let json = run.plot.to_json()?;
    match &cli.output {
        Some(path) => {
            print_summary(&mut std::io::stdout().lock(), run)?;
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote figure");
        }
        None => {
            // stdout carries the figure, so the summary goes to stderr
            print_summary(&mut std::io::stderr().lock(), run)?;
            writeln!(std::io::stdout().lock(), "{json}")?;
        }
    }
    Ok(())
}

fn print_summary(out: &mut impl Write, run: &PipelineRun) -> std::io::Result<()> {
    writeln!(
        out,
        "{} by quartile of {}",
        run.parameter, run.performance_measure
    )?;
    writeln!(
        out,
        "{:<4} {:<24} {:>6} {:>12} {:>12} {:>12}",
        "bin", "range", "wells", "min", "median", "max"
    )?;
    for (label, ecdf) in run.ecdfs.iter() {
        writeln!(
            out,
            "{:<4} {:<24} {:>6} {:>12} {:>12} {:>12}",
            label,
            QUARTILE_LABELS[label.index()],
            ecdf.len(),
            fmt_value(ecdf.min()),
            fmt_value(ecdf.median()),
            fmt_value(ecdf.max()),
        )?;
    }
    if !run.dropped.is_empty() {
        writeln!(
            out,
            "dropped {} well(s) with missing values: {}",
            run.dropped.count(),
            run.dropped.keys.join(", ")
        )?;
    }
    Ok(())
}

fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "-".to_string(),
    }
}
