//! Forward points command implementation.
//!
//! Runs CIP forwards: given both money-market rates, what should the swap
//! points be? With `--quoted-points`, also shows the rate the quote implies.

use anyhow::Result;
use cipfx_core::{CipError, Date};
use cipfx_engine::cip::{forward_from_rates, theoretical_forward_points};
use cipfx_engine::{RateEngine, SwapObservation, Tenor};
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Context};
use crate::output::{print_json, print_output, write_csv, KeyValue};

/// Arguments for the forward-points command.
#[derive(Args, Debug)]
pub struct ForwardPointsArgs {
    /// Trade date (YYYY-MM-DD)
    #[arg(long)]
    pub trade_date: String,

    /// Spot FX rate (quote currency per base currency)
    #[arg(short, long)]
    pub spot: f64,

    /// Reference rate for the tenor (percent, ACT/360)
    #[arg(short, long, allow_hyphen_values = true)]
    pub reference_rate: f64,

    /// Local rate for the tenor (percent, ACT/365)
    #[arg(short, long, allow_hyphen_values = true)]
    pub local_rate: f64,

    /// Tenor (1M, 3M, 6M) [default: config tenor, else 1M]
    #[arg(short, long)]
    pub tenor: Option<Tenor>,

    /// Market forward points to compare against (pips)
    #[arg(long, allow_hyphen_values = true)]
    pub quoted_points: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ForwardPointsResult {
    trade_date: Date,
    tenor: Tenor,
    spot_date: Date,
    forward_date: Date,
    actual_days: i64,
    spot_rate: f64,
    reference_rate_pct: f64,
    local_rate_pct: f64,
    forward_rate: f64,
    forward_points_pips: f64,
    quoted_points_pips: Option<f64>,
    quoted_implied_rate_pct: Option<f64>,
}

/// Execute the forward-points command.
pub fn execute(args: ForwardPointsArgs, ctx: &Context) -> Result<()> {
    let trade_date = parse_date(&args.trade_date)?;
    if args.spot.is_nan() || args.spot <= 0.0 {
        return Err(CipError::NonPositiveSpotRate { value: args.spot }.into());
    }

    let tenor = args.tenor.or(ctx.config.tenor).unwrap_or(Tenor::OneMonth);
    let calendar = ctx.config.calendar.build()?;
    let engine = RateEngine::new(&calendar, tenor);
    let dates = engine.value_dates(trade_date)?;
    let days = dates.actual_days();

    let quoted_implied_rate_pct = args
        .quoted_points
        .map(|points| {
            engine
                .process(&SwapObservation::new(
                    trade_date,
                    args.reference_rate,
                    args.spot,
                    points,
                ))
                .map(|r| r.implied_rate_pct)
        })
        .transpose()?;

    let result = ForwardPointsResult {
        trade_date,
        tenor,
        spot_date: dates.spot_date,
        forward_date: dates.forward_date,
        actual_days: days,
        spot_rate: args.spot,
        reference_rate_pct: args.reference_rate,
        local_rate_pct: args.local_rate,
        forward_rate: forward_from_rates(args.spot, args.reference_rate, args.local_rate, days),
        forward_points_pips: theoretical_forward_points(
            args.spot,
            args.reference_rate,
            args.local_rate,
            days,
        ),
        quoted_points_pips: args.quoted_points,
        quoted_implied_rate_pct,
    };

    tracing::debug!(
        tenor = %tenor,
        days,
        points = result.forward_points_pips,
        "Theoretical forward points"
    );

    match ctx.format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Csv => write_csv(std::io::stdout(), &[result]),
        OutputFormat::Table => print_output(&table_rows(&result), ctx.format),
    }
}

fn table_rows(result: &ForwardPointsResult) -> Vec<KeyValue> {
    let mut rows = vec![
        KeyValue::new("Tenor", result.tenor),
        KeyValue::new("Spot date", result.spot_date),
        KeyValue::new("Forward date", result.forward_date),
        KeyValue::new("Days", result.actual_days),
        KeyValue::from_f64("Spot", result.spot_rate, 4),
        KeyValue::from_percent("Reference rate", result.reference_rate_pct),
        KeyValue::from_percent("Local rate", result.local_rate_pct),
        KeyValue::from_f64("Fair forward", result.forward_rate, 6),
        KeyValue::from_f64("Fair points (pips)", result.forward_points_pips, 2),
    ];

    if let (Some(quoted), Some(implied)) = (result.quoted_points_pips, result.quoted_implied_rate_pct) {
        rows.push(KeyValue::from_f64("Quoted points (pips)", quoted, 2));
        rows.push(KeyValue::from_f64(
            "Quoted - fair (pips)",
            quoted - result.forward_points_pips,
            2,
        ));
        rows.push(KeyValue::from_percent("Rate implied by quote", implied));
    }
    rows
}
