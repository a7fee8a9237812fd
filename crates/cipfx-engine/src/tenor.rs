//! Swap tenors.

use std::fmt;
use std::str::FromStr;

use cipfx_core::{CipError, CipResult};
use serde::{Deserialize, Serialize};

/// Length of the forward leg.
///
/// A closed set: only 1, 3 and 6 month swaps are quoted for this market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tenor {
    /// One month.
    OneMonth,
    /// Three months.
    ThreeMonths,
    /// Six months.
    SixMonths,
}

impl Tenor {
    /// All supported tenors, shortest first.
    pub const ALL: [Tenor; 3] = [Tenor::OneMonth, Tenor::ThreeMonths, Tenor::SixMonths];

    /// Number of calendar months added to the spot date.
    #[must_use]
    pub fn months(self) -> u32 {
        match self {
            Tenor::OneMonth => 1,
            Tenor::ThreeMonths => 3,
            Tenor::SixMonths => 6,
        }
    }

    /// Looks a tenor up by its month count.
    ///
    /// # Errors
    ///
    /// Returns `CipError::UnsupportedTenor` for anything but 1, 3 or 6.
    pub fn from_months(months: u32) -> CipResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.months() == months)
            .ok_or_else(|| CipError::unsupported_tenor(format!("{months}M")))
    }

    /// Market code ("1M", "3M", "6M").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Tenor::OneMonth => "1M",
            Tenor::ThreeMonths => "3M",
            Tenor::SixMonths => "6M",
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Tenor {
    type Err = CipError;

    /// Parses "1M", "3m", " 6M " and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CipError::unsupported_tenor(trimmed))
    }
}

impl TryFrom<String> for Tenor {
    type Error = CipError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.code().to_string()
    }
}
