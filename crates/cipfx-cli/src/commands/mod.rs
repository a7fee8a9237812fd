//! CLI command implementations.

pub mod check;
pub mod compute;
pub mod dates;
pub mod forward_points;

pub use check::CheckArgs;
pub use compute::ComputeArgs;
pub use dates::DatesArgs;
pub use forward_points::ForwardPointsArgs;

use cipfx_core::Date;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Effective output format.
    pub format: OutputFormat,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl Context {
    /// `--format` wins over the config file, which wins over the default.
    pub fn new(config: AppConfig, format: Option<OutputFormat>, quiet: bool) -> Self {
        let format = format.or(config.output.format).unwrap_or_default();
        Self {
            config,
            format,
            quiet,
        }
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-04-03").unwrap(), Date::from_ymd(2026, 4, 3).unwrap());
        assert!(matches!(parse_date("03/04/2026"), Err(CliError::InvalidDate(_))));
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn test_format_precedence() {
        let config = AppConfig {
            output: OutputConfig {
                format: Some(OutputFormat::Csv),
            },
            ..Default::default()
        };

        let ctx = Context::new(config.clone(), Some(OutputFormat::Json), false);
        assert_eq!(ctx.format, OutputFormat::Json);

        let ctx = Context::new(config, None, false);
        assert_eq!(ctx.format, OutputFormat::Csv);

        let ctx = Context::new(AppConfig::default(), None, true);
        assert_eq!(ctx.format, OutputFormat::Table);
    }
}
