//! FILENAME: app/dashboard/src/lib.rs
// PURPOSE: Main library entry point (presentation layer).
// CONTEXT: Loads the dataset once, resolves the filter selection from the
// config file and flags, runs the analytics pipeline and renders the result.

use std::io::Write;

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

pub use cli::{Args, OutputFormat};
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use logging::{init_log_file, next_seq, write_log};

use analytics_engine::{build_dashboard, DashboardView};
use engine::Dataset;

/// Runs the dashboard for parsed arguments, printing to stdout.
pub fn run(args: &Args) -> Result<(), DashboardError> {
    logging::init(args.verbose, args.log_file.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Same as `run` without touching the logger; output goes to `out`.
pub fn run_with_output<W: Write>(args: &Args, out: &mut W) -> Result<(), DashboardError> {
    log_enter!("CMD", "run", "data={:?}", args.data);

    let dataset = load(args)?;
    let view = compute(&dataset, args)?;

    match args.format {
        OutputFormat::Text => render::render_text(&view, out)?,
        OutputFormat::Json => render::render_json(&view, out)?,
    }

    log_exit!("CMD", "run", "rendered {} of {} records", view.record_count, view.total_records);
    Ok(())
}

fn load(args: &Args) -> Result<Dataset, DashboardError> {
    let dataset = persistence::load_dataset(&args.data)?;
    log_info!("LOAD", "{} records from {}", dataset.len(), dataset.source);
    Ok(dataset)
}

/// Resolves the selection for `args` and builds the dashboard view.
pub fn compute(dataset: &Dataset, args: &Args) -> Result<DashboardView, DashboardError> {
    let config = match &args.config {
        Some(path) => {
            log_debug!("CONFIG", "reading {:?}", path);
            DashboardConfig::load(path)?
        }
        None => DashboardConfig::default(),
    }
    .merge_args(args);

    let selection = config.selection(dataset)?;
    if selection.selects_nothing() {
        log_warn!(
            "FILTER",
            "a filter dimension has no selected values; the dashboard will be empty"
        );
    }

    Ok(build_dashboard(dataset, &selection, &config.options()))
}
