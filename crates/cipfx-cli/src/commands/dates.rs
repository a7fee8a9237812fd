//! Dates command implementation.
//!
//! Shows how a trade date resolves to spot and forward value dates, and which
//! days were stepped over on the way.

use anyhow::Result;
use cipfx_core::calendars::{DayStatus, JointCalendar};
use cipfx_core::Date;
use cipfx_engine::{RateEngine, Tenor, ValueDates};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Context};
use crate::output::{print_header, print_json, print_output, print_table};

/// Arguments for the dates command.
#[derive(Args, Debug)]
pub struct DatesArgs {
    /// Trade date (YYYY-MM-DD)
    pub trade_date: String,

    /// Tenor (1M, 3M, 6M). All tenors when omitted.
    #[arg(short, long)]
    pub tenor: Option<Tenor>,
}

/// Value dates for one tenor.
#[derive(Debug, Serialize, Tabled)]
struct DatesRow {
    #[tabled(rename = "Tenor")]
    tenor: Tenor,
    #[tabled(rename = "Trade")]
    trade_date: Date,
    #[tabled(rename = "Spot")]
    spot_date: Date,
    #[tabled(rename = "Anniversary")]
    unadjusted_forward_date: Date,
    #[tabled(rename = "Forward")]
    forward_date: Date,
    #[tabled(rename = "Days")]
    actual_days: i64,
}

/// A day that was not a joint business day.
#[derive(Debug, Serialize, Tabled)]
struct SkippedDay {
    #[tabled(rename = "Leg")]
    leg: String,
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Reason")]
    status: DayStatus,
}

#[derive(Debug, Serialize)]
struct DatesReport {
    trade_date: Date,
    tenors: Vec<DatesRow>,
    skipped: Vec<SkippedDay>,
}

/// Execute the dates command.
pub fn execute(args: DatesArgs, ctx: &Context) -> Result<()> {
    let trade_date = parse_date(&args.trade_date)?;
    let tenor = args.tenor.or(ctx.config.tenor);
    let tenors: Vec<Tenor> = match tenor {
        Some(t) => vec![t],
        None => Tenor::ALL.to_vec(),
    };
    let calendar = ctx.config.calendar.build()?;

    let mut report = DatesReport {
        trade_date,
        tenors: Vec::new(),
        skipped: Vec::new(),
    };

    for (i, tenor) in tenors.into_iter().enumerate() {
        let dates = RateEngine::new(&calendar, tenor).value_dates(trade_date)?;

        if i == 0 {
            let spot_leg = trade_date.add_days(1)..=dates.spot_date;
            report
                .skipped
                .extend(skipped_days(&calendar, "spot", spot_leg)?);
        }
        let forward_leg = dates.unadjusted_forward_date..=dates.forward_date;
        report
            .skipped
            .extend(skipped_days(&calendar, tenor.code(), forward_leg)?);

        report.tenors.push(row(trade_date, tenor, &dates));
    }

    match ctx.format {
        OutputFormat::Table => {
            print_table(&report.tenors)?;
            if !report.skipped.is_empty() && !ctx.quiet {
                print_header("Skipped Days");
                print_table(&report.skipped)?;
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&report),
        OutputFormat::Csv => print_output(&report.tenors, ctx.format),
    }
}

fn row(trade_date: Date, tenor: Tenor, dates: &ValueDates) -> DatesRow {
    DatesRow {
        tenor,
        trade_date,
        spot_date: dates.spot_date,
        unadjusted_forward_date: dates.unadjusted_forward_date,
        forward_date: dates.forward_date,
        actual_days: dates.actual_days(),
    }
}

/// Non-business days in `range`, with the reason each one was skipped.
fn skipped_days(
    calendar: &JointCalendar,
    leg: &str,
    range: std::ops::RangeInclusive<Date>,
) -> Result<Vec<SkippedDay>> {
    let (start, end) = range.into_inner();
    let mut skipped = Vec::new();
    let mut date = start;

    while date <= end {
        let status = calendar.day_status(date)?;
        if !status.is_business_day() {
            skipped.push(SkippedDay {
                leg: leg.to_string(),
                date,
                weekday: date.weekday().to_string(),
                status,
            });
        }
        date = date.add_days(1);
    }
    Ok(skipped)
}
