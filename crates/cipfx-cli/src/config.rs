//! Configuration file.
//!
//! Looked up from `--config` (or `CIPFX_CONFIG`), then
//! `<config dir>/cipfx/config.toml`. A missing default file means defaults.
//!
//! ```toml
//! tenor = "3M"
//! policy = "skip-and-continue"
//!
//! [calendar]
//! domestic_file = "holidays/us-2026.json"
//! foreign_file = "holidays/sg-2026.json"
//!
//! [columns]
//! spot = ["USDSGD_FX", "Spot"]
//!
//! [output]
//! format = "json"
//! ```
//!
//! Relative holiday file paths resolve against the config file's directory.

use std::path::{Path, PathBuf};

use cipfx_core::calendars::{Calendar, HolidaySet, JointCalendar};
use cipfx_engine::presets;
use cipfx_engine::{BatchPolicy, Tenor};
use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Name of the built-in USD/SGD holiday data.
pub const USD_SGD_PRESET: &str = "usd-sgd";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Tenor used when `--tenor` is not given.
    pub tenor: Option<Tenor>,
    /// Failure policy used when `--policy` is not given.
    pub policy: Option<BatchPolicy>,
    /// Holiday data.
    pub calendar: CalendarConfig,
    /// Column alias overrides.
    pub columns: ColumnsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Where holiday data comes from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Built-in holiday data. Defaults to `usd-sgd` when no files are set.
    pub preset: Option<String>,
    /// Holiday JSON for the reference (domestic) market.
    pub domestic_file: Option<PathBuf>,
    /// Holiday JSON for the local (foreign) market.
    pub foreign_file: Option<PathBuf>,
}

/// Header aliases per input column. An empty list keeps the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnsConfig {
    /// Trade date column.
    pub date: Vec<String>,
    /// Reference rate column (also matched with a `<n>M` prefix).
    pub reference_rate: Vec<String>,
    /// Spot FX column.
    pub spot: Vec<String>,
    /// Forward points column.
    pub forward_points: Vec<String>,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    pub format: Option<OutputFormat>,
}

impl AppConfig {
    /// Loads the explicit config file, or the default one if it exists.
    pub fn discover(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads and parses a config file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))?;
        let mut config = Self::from_toml(&content)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))?;

        if let Some(base) = path.parent() {
            config.calendar.resolve_paths(base);
        }
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses config text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl CalendarConfig {
    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.domestic_file, &mut self.foreign_file]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Builds the joint calendar this configuration describes.
    pub fn build(&self) -> CliResult<JointCalendar> {
        match (&self.domestic_file, &self.foreign_file) {
            (Some(domestic), Some(foreign)) => {
                if let Some(preset) = &self.preset {
                    return Err(CliError::config(format!(
                        "calendar.preset = {preset:?} cannot be combined with holiday files"
                    )));
                }
                let calendar = JointCalendar::new(
                    HolidaySet::from_json_file(domestic)?,
                    HolidaySet::from_json_file(foreign)?,
                );
                tracing::debug!(calendar = calendar.name(), "Loaded holiday files");
                Ok(calendar)
            }
            (None, None) => {
                let preset = self.preset.as_deref().unwrap_or(USD_SGD_PRESET);
                if preset != USD_SGD_PRESET {
                    return Err(CliError::config(format!(
                        "unknown calendar preset {preset:?} (available: {USD_SGD_PRESET})"
                    )));
                }
                let years: Vec<i32> = presets::us_holidays()?.years().collect();
                Ok(presets::usd_sgd_calendar(years)?)
            }
            _ => Err(CliError::config(
                "calendar.domestic_file and calendar.foreign_file must be set together",
            )),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cipfx").join("config.toml"))
}
