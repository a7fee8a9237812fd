//! Check command implementation.

use anyhow::Result;
use cipfx_core::calendars::{Calendar, DayStatus};
use cipfx_core::Date;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Context};
use crate::output::{print_json, print_output, write_csv, KeyValue};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Date to check (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    date: Date,
    weekday: String,
    calendar: String,
    status: DayStatus,
    business_day: bool,
    /// `None` when the neighbour falls in a year without holiday data.
    previous_business_day: Option<Date>,
    next_business_day: Option<Date>,
}

fn display(date: Option<Date>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// Execute the check command.
pub fn execute(args: CheckArgs, ctx: &Context) -> Result<()> {
    let date = parse_date(&args.date)?;
    let calendar = ctx.config.calendar.build()?;
    let status = calendar.day_status(date)?;

    let result = CheckResult {
        date,
        weekday: date.weekday().to_string(),
        calendar: calendar.name().to_string(),
        status,
        business_day: status.is_business_day(),
        previous_business_day: calendar.previous_business_day(date).ok(),
        next_business_day: calendar.next_business_day(date).ok(),
    };

    match ctx.format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Csv => write_csv(std::io::stdout(), &[result]),
        OutputFormat::Table => {
            let rows = vec![
                KeyValue::new("Date", format!("{} ({})", result.date, result.weekday)),
                KeyValue::new("Calendar", &result.calendar),
                KeyValue::new("Status", result.status),
                KeyValue::new("Business day", if result.business_day { "yes" } else { "no" }),
                KeyValue::new("Previous business day", display(result.previous_business_day)),
                KeyValue::new("Next business day", display(result.next_business_day)),
            ];
            print_output(&rows, ctx.format)
        }
    }
}
