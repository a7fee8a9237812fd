//! Input column resolution.
//!
//! Headers are matched against explicit aliases after normalisation (case and
//! whitespace are ignored). The reference rate column may carry a tenor
//! prefix, e.g. `3mSOFR` for the `SOFR` alias, which is the only place a tenor
//! is ever read from a header.

use cipfx_engine::Tenor;

use crate::config::ColumnsConfig;
use crate::error::{CliError, CliResult};

const DEFAULT_DATE: &[&str] = &["Date", "Trade Date"];
const DEFAULT_REFERENCE_RATE: &[&str] = &["SOFR", "Reference Rate"];
const DEFAULT_SPOT: &[&str] = &["USDSGD_FX", "Spot"];
const DEFAULT_FORWARD_POINTS: &[&str] = &["Forward Points"];

/// Header aliases for each input column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    date: Vec<String>,
    reference_rate: Vec<String>,
    spot: Vec<String>,
    forward_points: Vec<String>,
}

/// Column positions found in a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    /// Trade date.
    pub date: usize,
    /// Reference rate.
    pub reference_rate: usize,
    /// Spot FX.
    pub spot: usize,
    /// Forward points.
    pub forward_points: usize,
    /// Tenor taken from the reference rate header prefix, if any.
    pub header_tenor: Option<Tenor>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date: owned(DEFAULT_DATE),
            reference_rate: owned(DEFAULT_REFERENCE_RATE),
            spot: owned(DEFAULT_SPOT),
            forward_points: owned(DEFAULT_FORWARD_POINTS),
        }
    }
}

impl ColumnMapping {
    /// Default aliases with any configured overrides applied.
    pub fn from_config(config: &ColumnsConfig) -> Self {
        let defaults = Self::default();
        let pick = |custom: &Vec<String>, default: Vec<String>| {
            if custom.is_empty() {
                default
            } else {
                custom.clone()
            }
        };

        Self {
            date: pick(&config.date, defaults.date),
            reference_rate: pick(&config.reference_rate, defaults.reference_rate),
            spot: pick(&config.spot, defaults.spot),
            forward_points: pick(&config.forward_points, defaults.forward_points),
        }
    }

    /// Locates every column in `headers`.
    ///
    /// With a known `tenor`, the reference rate header must be a plain alias
    /// or carry that tenor's prefix; headers for other tenors are ignored. With
    /// no tenor, a prefixed header supplies it.
    pub fn resolve(&self, headers: &[&str], tenor: Option<Tenor>) -> CliResult<ResolvedColumns> {
        let date = find_one("trade date", headers, &self.date, |h| {
            self.date.iter().any(|a| normalize(a) == h)
        })?;
        let spot = find_one("spot rate", headers, &self.spot, |h| {
            self.spot.iter().any(|a| normalize(a) == h)
        })?;
        let forward_points = find_one("forward points", headers, &self.forward_points, |h| {
            self.forward_points.iter().any(|a| normalize(a) == h)
        })?;
        let reference_rate = find_one("reference rate", headers, &self.reference_rate, |h| {
            self.reference_rate_tenor(h)
                .is_some_and(|found| match (found, tenor) {
                    (None, _) | (_, None) => true,
                    (Some(prefix), Some(wanted)) => prefix == wanted,
                })
        })?;

        let header_tenor = self
            .reference_rate_tenor(&normalize(headers[reference_rate]))
            .flatten();

        Ok(ResolvedColumns {
            date,
            reference_rate,
            spot,
            forward_points,
            header_tenor,
        })
    }

    /// `Some(None)` for a plain alias, `Some(Some(tenor))` for a prefixed one.
    fn reference_rate_tenor(&self, header: &str) -> Option<Option<Tenor>> {
        self.reference_rate.iter().find_map(|alias| {
            let alias = normalize(alias);
            if header == alias {
                return Some(None);
            }
            Tenor::ALL
                .into_iter()
                .find(|t| header == format!("{}{}", t.code().to_lowercase(), alias))
                .map(Some)
        })
    }
}

fn find_one(
    role: &'static str,
    headers: &[&str],
    aliases: &[String],
    matches: impl Fn(&str) -> bool,
) -> CliResult<usize> {
    let found: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| matches(&normalize(h)))
        .map(|(i, _)| i)
        .collect();

    match found.as_slice() {
        [index] => Ok(*index),
        [] => Err(CliError::MissingColumn {
            role,
            aliases: aliases.to_vec(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
        }),
        _ => Err(CliError::AmbiguousColumn {
            role,
            candidates: found.iter().map(|&i| headers[i].to_string()).collect(),
        }),
    }
}

fn normalize(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn owned(aliases: &[&str]) -> Vec<String> {
    aliases.iter().map(|a| a.to_string()).collect()
}
