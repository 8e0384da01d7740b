//! Sales Dash - Terminal Dashboard
//!
//! Loads the orders CSV once and prints the sales & profit dashboard for a
//! date range, or keeps recomputing it for ranges typed on stdin.

use anyhow::{Context, Result};
use clap::Parser;
use sales_dash::stats::BOUND_DATE_FORMAT;
use sales_dash::view::render_table;
use sales_dash::{Dashboard, DashboardConfig, QueryResult};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sales & profit totals for an order-date range.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./dashboard.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Orders CSV, overrides `data_path` from the configuration.
    #[arg(long)]
    data: Option<PathBuf>,

    /// First order date to include (format: YYYY-MM-DD).
    #[arg(long)]
    start: Option<String>,

    /// Last order date to include (format: YYYY-MM-DD).
    #[arg(long)]
    end: Option<String>,

    /// Print the dashboard as JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// After the first result, read "<start> <end>" lines from stdin.
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config =
        DashboardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    let dashboard = Dashboard::initialize(&config)
        .with_context(|| format!("Cannot start dashboard from {}", config.data_path.display()))?;

    let default = dashboard.default_range();
    let start = cli
        .start
        .unwrap_or_else(|| default.start.format(BOUND_DATE_FORMAT).to_string());
    let end = cli
        .end
        .unwrap_or_else(|| default.end.format(BOUND_DATE_FORMAT).to_string());

    if let Some(result) = first_result(&dashboard, &start, &end, cli.interactive)? {
        print_result(&dashboard, &result, cli.json)?;
    }

    if cli.interactive {
        run_interactive(&dashboard, cli.json)?;
    }

    Ok(())
}

/// Result for the range given on the command line.
///
/// In interactive mode a bad range is only reported, since the next line on
/// stdin can still fix it; otherwise it ends the run.
fn first_result(
    dashboard: &Dashboard,
    start: &str,
    end: &str,
    interactive: bool,
) -> Result<Option<QueryResult>> {
    match dashboard.recompute(start, end) {
        Ok(result) => Ok(Some(result)),
        Err(e) if interactive => {
            eprintln!("Error: {}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Recompute for every "<start> <end>" line until EOF or an empty line.
///
/// A bad range is reported and the loop carries on with the same dataset.
fn run_interactive(dashboard: &Dashboard, json: bool) -> Result<()> {
    eprintln!("Enter '<start> <end>' (YYYY-MM-DD), empty line to quit");

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let mut parts = line.split_whitespace();
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            eprintln!("Expected two dates: <start> <end>");
            continue;
        };

        match dashboard.recompute(start, end) {
            Ok(result) => print_result(dashboard, &result, json)?,
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn print_result(dashboard: &Dashboard, result: &QueryResult, json: bool) -> Result<()> {
    let view = dashboard.view(result);
    let mut stdout = io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut stdout, &view)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_table(&view))?;
    }
    stdout.flush()?;
    Ok(())
}
