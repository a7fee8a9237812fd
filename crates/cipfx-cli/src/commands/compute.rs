//! Compute command implementation.
//!
//! Reads a CSV of daily swap quotes for one tenor and reports the implied
//! local rate for every row plus a summary.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cipfx_core::Date;
use cipfx_engine::batch::{run_batch, run_batch_parallel};
use cipfx_engine::{
    BatchPolicy, BatchReport, BatchSummary, ComputedResult, RateEngine, Tenor,
};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::columns::ColumnMapping;
use crate::commands::Context;
use crate::input::read_observations;
use crate::output::{
    cells, print_header, print_json, print_output, print_success, print_table, print_warning,
    write_csv, KeyValue,
};

/// Arguments for the compute command.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Observations CSV with trade date, reference rate, spot and forward points columns
    pub input: PathBuf,

    /// Tenor (1M, 3M, 6M). Overrides the config and the rate column header.
    #[arg(short, long)]
    pub tenor: Option<Tenor>,

    /// Also write results to a file (JSON for a .json extension, CSV otherwise)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// What to do with rows that cannot be computed [default: skip]
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Spread the rows across all cores
    #[arg(long)]
    pub parallel: bool,
}

/// Failure policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Report failed rows and keep going
    Skip,
    /// Stop at the first failed row
    Abort,
}

impl From<PolicyArg> for BatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Skip => BatchPolicy::SkipAndContinue,
            PolicyArg::Abort => BatchPolicy::AbortAll,
        }
    }
}

/// One computed row, as shown in a table.
#[derive(Debug, Tabled)]
struct ResultRow {
    #[tabled(rename = "Trade")]
    trade_date: Date,
    #[tabled(rename = "Spot Date")]
    spot_date: Date,
    #[tabled(rename = "Forward Date")]
    forward_date: Date,
    #[tabled(rename = "Days")]
    actual_days: i64,
    #[tabled(rename = "Ref %", display_with = "cells::dp4")]
    reference_rate_pct: f64,
    #[tabled(rename = "Spot", display_with = "cells::dp4")]
    spot_rate: f64,
    #[tabled(rename = "Points", display_with = "cells::dp2")]
    forward_points_pips: f64,
    #[tabled(rename = "Forward", display_with = "cells::dp6")]
    forward_rate: f64,
    #[tabled(rename = "Implied %", display_with = "cells::dp4")]
    implied_rate_pct: f64,
    #[tabled(rename = "Diff bps", display_with = "cells::dp2")]
    diff_bps: f64,
}

impl From<&ComputedResult> for ResultRow {
    fn from(r: &ComputedResult) -> Self {
        Self {
            trade_date: r.trade_date,
            spot_date: r.spot_date,
            forward_date: r.forward_date,
            actual_days: r.actual_days,
            reference_rate_pct: r.reference_rate_pct,
            spot_rate: r.spot_rate,
            forward_points_pips: r.forward_points_pips,
            forward_rate: r.forward_rate,
            implied_rate_pct: r.implied_rate_pct,
            diff_bps: r.diff_bps,
        }
    }
}

/// A row that could not be computed.
#[derive(Debug, Serialize, Tabled)]
struct FailureRow {
    #[tabled(rename = "Row")]
    row: usize,
    #[tabled(rename = "Trade", display_with = "display_trade_date")]
    trade_date: Option<Date>,
    #[tabled(rename = "Error")]
    error: String,
}

fn display_trade_date(date: &Option<Date>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// Everything the command produces, as written to JSON.
#[derive(Debug, Serialize)]
struct ComputeReport<'a> {
    input: &'a Path,
    tenor: Tenor,
    reference_column: &'a str,
    results: &'a [ComputedResult],
    summary: Option<BatchSummary>,
    failures: Vec<FailureRow>,
}

/// Execute the compute command.
pub fn execute(args: ComputeArgs, ctx: &Context) -> Result<()> {
    let mapping = ColumnMapping::from_config(&ctx.config.columns);
    let file = read_observations(&args.input, &mapping, args.tenor.or(ctx.config.tenor))?;

    let calendar = ctx.config.calendar.build()?;
    let engine = RateEngine::new(&calendar, file.tenor);
    let policy = args
        .policy
        .map(BatchPolicy::from)
        .or(ctx.config.policy)
        .unwrap_or_default();

    tracing::info!(
        input = %args.input.display(),
        tenor = %file.tenor,
        rows = file.observations.len(),
        ?policy,
        parallel = args.parallel,
        "Computing implied rates"
    );

    let batch = if args.parallel {
        run_batch_parallel(&engine, &file.observations, policy)
    } else {
        run_batch(&engine, &file.observations, policy)
    };
    let report = batch.context("Batch aborted")?;

    let failures = failure_rows(&report);
    let full = ComputeReport {
        input: &args.input,
        tenor: file.tenor,
        reference_column: &file.reference_column,
        results: &report.results,
        summary: report.summary(file.tenor),
        failures,
    };

    if let Some(path) = &args.output {
        write_report(path, &full)?;
        if !ctx.quiet && ctx.format == OutputFormat::Table {
            print_success(&format!(
                "Wrote {} results to {}",
                report.results.len(),
                path.display()
            ));
        }
        print_summary(&full, ctx.format)?;
    } else {
        match ctx.format {
            OutputFormat::Table => {
                let rows: Vec<ResultRow> = report.results.iter().map(ResultRow::from).collect();
                print_table(&rows)?;
                print_summary(&full, ctx.format)?;
            }
            OutputFormat::Json => print_json(&full)?,
            OutputFormat::Csv => write_csv(std::io::stdout(), &report.results)?,
        }
    }

    if !full.failures.is_empty() && ctx.format == OutputFormat::Table {
        if !ctx.quiet {
            print_header("Skipped Rows");
            print_table(&full.failures)?;
        }
        print_warning(&format!(
            "{} of {} rows skipped",
            full.failures.len(),
            file.observations.len()
        ));
    }

    Ok(())
}

fn failure_rows(report: &BatchReport) -> Vec<FailureRow> {
    report
        .failures
        .iter()
        .map(|f| FailureRow {
            row: f.index + 1,
            trade_date: f.error.trade_date(),
            error: f.error.root_cause().to_string(),
        })
        .collect()
}

fn write_report(path: &Path, report: &ComputeReport<'_>) -> Result<()> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(path, json).with_context(|| format!("Writing {}", path.display()))?;
    } else {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Creating {}", path.display()))?;
        write_csv(file, report.results)?;
    }
    tracing::debug!(path = %path.display(), "Results written");
    Ok(())
}

fn print_summary(report: &ComputeReport<'_>, format: OutputFormat) -> Result<()> {
    let Some(summary) = &report.summary else {
        if format == OutputFormat::Table {
            println!("No results.");
        }
        return Ok(());
    };

    match format {
        OutputFormat::Table => {
            print_header(&format!("Summary ({})", summary.tenor));
            print_output(&summary_rows(summary, report), format)
        }
        OutputFormat::Json => print_json(summary),
        OutputFormat::Csv => write_csv(std::io::stdout(), std::slice::from_ref(summary)),
    }
}

fn summary_rows(summary: &BatchSummary, report: &ComputeReport<'_>) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Reference column", report.reference_column),
        KeyValue::new("Rows computed", summary.count),
        KeyValue::new("Rows skipped", report.failures.len()),
        KeyValue::from_percent("Average reference rate", summary.mean_reference_pct),
        KeyValue::from_percent("Average implied rate", summary.mean_implied_pct),
        KeyValue::from_percent("Lowest implied rate", summary.min_implied_pct),
        KeyValue::from_percent("Highest implied rate", summary.max_implied_pct),
        KeyValue::from_bps("Average differential", summary.mean_diff_bps),
        KeyValue::new(
            "Days (min / avg / max)",
            format!(
                "{} / {:.1} / {}",
                summary.min_days, summary.mean_days, summary.max_days
            ),
        ),
    ]
}
