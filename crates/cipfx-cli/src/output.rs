//! Output formatting utilities.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => write_csv(std::io::stdout(), data),
    }
}

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Writes rows as CSV with a header line.
pub fn write_csv<W: Write, T: Serialize>(writer: W, data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// Creates a key-value pair with fixed decimal places.
    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.prec$}", value, prec = precision),
        }
    }

    /// Creates a key-value pair formatted as a percentage.
    pub fn from_percent(key: impl Into<String>, value_pct: f64) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.4}%", value_pct),
        }
    }

    /// Creates a key-value pair formatted as basis points.
    pub fn from_bps(key: impl Into<String>, value_bps: f64) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.2} bps", value_bps),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Table cell formatters for `#[tabled(display_with = ...)]`.
pub mod cells {
    /// Two decimal places.
    pub fn dp2(value: &f64) -> String {
        format!("{:.2}", value)
    }

    /// Four decimal places.
    pub fn dp4(value: &f64) -> String {
        format!("{:.4}", value)
    }

    /// Six decimal places.
    pub fn dp6(value: &f64) -> String {
        format!("{:.6}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        date: &'static str,
        value: f64,
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(
            &mut buf,
            &[
                Row { date: "2026-01-06", value: 1.5 },
                Row { date: "2026-01-07", value: -2.25 },
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "date,value\n2026-01-06,1.5\n2026-01-07,-2.25\n"
        );
    }

    #[test]
    fn test_key_value_formatting() {
        assert_eq!(KeyValue::from_percent("Implied", 1.3161030249).value, "1.3161%");
        assert_eq!(KeyValue::from_bps("Diff", -236.1277).value, "-236.13 bps");
        assert_eq!(KeyValue::from_f64("Forward", 1.342253, 6).value, "1.342253");
        assert_eq!(cells::dp4(&0.12346), "0.1235");
    }
}
