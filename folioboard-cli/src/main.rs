//! Folioboard CLI: print generated equity series and analytics tables.
//!
//! Commands:
//! - `series`: generate the strategy and benchmark curves as CSV or JSON
//! - `analytics`: print the metric cards, portfolio weights and sentiment

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use folioboard_core::analytics::AnalyticsSnapshot;
use folioboard_core::rng::Stream;
use folioboard_core::series::{generate_series_with, SeriesPoint, SeriesSummary};
use folioboard_core::{Asset, DashboardConfig, DashboardParams, Strategy};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "folioboard",
    about = "Folioboard CLI: mock strategy dashboard data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Parameter selection shared by both commands. Unset values come from the
/// config file's `[defaults]` table.
#[derive(clap::Args, Debug, Clone, Default)]
struct Selection {
    /// Asset symbol (SPY, QQQ, AAPL, MSFT, TSLA, GOOG).
    #[arg(long)]
    asset: Option<String>,

    /// Strategy label, e.g. "Momentum" or "ML + Sentiment".
    #[arg(long)]
    strategy: Option<String>,

    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD).
    #[arg(long)]
    end: Option<String>,

    /// Master seed; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject unknown labels and inverted ranges.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the equity curve and benchmark for a date range.
    Series {
        #[command(flatten)]
        selection: Selection,

        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print metrics, weights and sentiment for an asset and strategy.
    Analytics {
        #[command(flatten)]
        selection: Selection,

        /// Reference date for headline dates (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<String>,

        /// Emit the snapshot as JSON instead of tables.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Series {
            selection,
            format,
            output,
        } => run_series(&selection, format, output),
        Commands::Analytics {
            selection,
            today,
            json,
        } => run_analytics(&selection, today.as_deref(), json),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FOLIOBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

/// Merge the command line over the config file.
fn resolve(selection: &Selection) -> Result<(DashboardConfig, DashboardParams)> {
    let mut config = DashboardConfig::load(selection.config.as_deref())?;
    if selection.seed.is_some() {
        config.seed = selection.seed;
    }
    config.strict |= selection.strict;

    let mut params = config.defaults.clone();
    if let Some(symbol) = &selection.asset {
        params.asset = if config.strict {
            Asset::parse_strict(symbol)?
        } else {
            Asset::from(symbol.as_str())
        };
    }
    if let Some(label) = &selection.strategy {
        params.strategy = if config.strict {
            Strategy::parse_strict(label)?
        } else {
            Strategy::from(label.as_str())
        };
    }
    if let Some(s) = &selection.start {
        params.start_date = parse_date(s)?;
    }
    if let Some(s) = &selection.end {
        params.end_date = parse_date(s)?;
    }

    if config.strict {
        params.validate()?;
    } else if !params.has_valid_range() {
        tracing::warn!(
            start = %params.start_date,
            end = %params.end_date,
            "start is after end, series will be empty"
        );
    }
    Ok((config, params))
}

fn run_series(selection: &Selection, format: Format, output: Option<PathBuf>) -> Result<()> {
    let (config, params) = resolve(selection)?;
    let mut rng = config.seeds().rng_for(Stream::Series);
    let points = generate_series_with(
        &config.series_settings(),
        &params.asset,
        &params.strategy,
        params.start_date,
        params.end_date,
        &mut rng,
    );

    match output {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
            write_series(file, &points, format)?;
            eprintln!("Wrote {} points to {}", points.len(), path.display());
        }
        None => write_series(io::stdout().lock(), &points, format)?,
    }

    if let Some(summary) = SeriesSummary::from_points(&points, config.starting_capital) {
        print_series_summary(&params, &summary);
    }
    Ok(())
}

fn write_series<W: Write>(out: W, points: &[SeriesPoint], format: Format) -> Result<()> {
    match format {
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for point in points {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        Format::Json => {
            let mut out = out;
            serde_json::to_writer_pretty(&mut out, points)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn print_series_summary(params: &DashboardParams, summary: &SeriesSummary) {
    eprintln!();
    eprintln!("=== {} ===", params.series_label());
    eprintln!("Period:     {} to {}", summary.first_date, summary.last_date);
    eprintln!(
        "Strategy:   {} ({:+.2}%)",
        summary.final_equity,
        summary.equity_return * 100.0
    );
    eprintln!(
        "Benchmark:  {} ({:+.2}%)",
        summary.final_benchmark,
        summary.benchmark_return * 100.0
    );
    eprintln!("Excess:     {:+.2}%", summary.excess_return() * 100.0);
}

fn run_analytics(selection: &Selection, today: Option<&str>, json: bool) -> Result<()> {
    let (config, params) = resolve(selection)?;
    let today = match today {
        Some(s) => parse_date(s)?,
        None => folioboard_core::coordinator::utc_today(),
    };
    let mut rng = config.seeds().rng_for(Stream::Jitter);
    let snapshot = AnalyticsSnapshot::for_params(&params, today, &mut rng);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &snapshot)?;
        writeln!(out)?;
    } else {
        print_analytics(&mut out, &params, &snapshot)?;
    }
    Ok(())
}

fn print_analytics<W: Write>(out: &mut W, params: &DashboardParams, snapshot: &AnalyticsSnapshot) -> io::Result<()> {
    writeln!(out, "=== {} ===", params.series_label())?;
    writeln!(out)?;
    writeln!(out, "--- Metrics ---")?;
    for m in &snapshot.metrics {
        let arrow = if m.is_up() { '▲' } else { '▼' };
        writeln!(
            out,
            "{:<18} {:>8}   {} {:.1}%",
            m.name,
            m.value,
            arrow,
            (m.change * 100.0).abs()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "--- Weights ---")?;
    for w in &snapshot.weights {
        writeln!(out, "{:<8} {:>6.1}%  {}", w.asset, w.weight * 100.0, w.color.hex())?;
    }
    writeln!(out)?;
    writeln!(out, "--- Sentiment ---")?;
    for s in &snapshot.sentiment {
        writeln!(
            out,
            "{:>5.2}  {}  {} ({})",
            s.score,
            s.date.format("%Y-%m-%d"),
            s.headline,
            s.source
        )?;
    }
    Ok(())
}
