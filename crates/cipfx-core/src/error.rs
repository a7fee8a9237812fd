//! Error types for the cipfx library.
//!
//! Every failure is a local validation failure on otherwise well-formed
//! input. Nothing here is transient, so callers decide whether to skip the
//! offending observation or abort the whole batch.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for cipfx operations.
pub type CipResult<T> = Result<T, CipError>;

/// The main error type for cipfx operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Tenor outside the supported set (1M, 3M, 6M).
    #[error("Unsupported tenor: {tenor} (expected one of 1M, 3M, 6M)")]
    UnsupportedTenor {
        /// The tenor as it was supplied.
        tenor: String,
    },

    /// No holiday data was supplied for the year being resolved.
    #[error("No {jurisdiction} holiday data for year {year}")]
    UnresolvedCalendarYear {
        /// The year that could not be resolved.
        year: i32,
        /// Jurisdiction missing the data.
        jurisdiction: String,
    },

    /// Spot FX rate was zero, negative or not a number.
    #[error("Spot FX rate must be positive, got {value}")]
    NonPositiveSpotRate {
        /// The rejected spot rate.
        value: f64,
    },

    /// Forward value date does not fall after the spot value date.
    #[error("Forward date {forward_date} is not after spot date {spot_date}")]
    NonPositiveDays {
        /// Resolved spot value date.
        spot_date: Date,
        /// Resolved forward value date.
        forward_date: Date,
    },

    /// A business-day walk found no qualifying day within the scan bound.
    #[error("No joint business day within {limit} calendar days after {start}")]
    CalendarScanExceeded {
        /// Date the scan started from.
        start: Date,
        /// Number of calendar days scanned.
        limit: u32,
    },

    /// Calendar construction or holiday data error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// A failure while processing a single observation.
    #[error("Observation traded {trade_date}: {source}")]
    Observation {
        /// Trade date of the offending observation.
        trade_date: Date,
        /// The underlying failure.
        #[source]
        source: Box<CipError>,
    },
}

impl CipError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported tenor error.
    #[must_use]
    pub fn unsupported_tenor(tenor: impl Into<String>) -> Self {
        Self::UnsupportedTenor {
            tenor: tenor.into(),
        }
    }

    /// Creates an unresolved calendar year error.
    #[must_use]
    pub fn unresolved_year(year: i32, jurisdiction: impl Into<String>) -> Self {
        Self::UnresolvedCalendarYear {
            year,
            jurisdiction: jurisdiction.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Tags this error with the trade date of the observation that caused it.
    ///
    /// Already-tagged errors are returned unchanged.
    #[must_use]
    pub fn for_trade(self, trade_date: Date) -> Self {
        match self {
            tagged @ Self::Observation { .. } => tagged,
            other => Self::Observation {
                trade_date,
                source: Box::new(other),
            },
        }
    }

    /// Returns the trade date of the offending observation, if tagged.
    #[must_use]
    pub fn trade_date(&self) -> Option<Date> {
        match self {
            Self::Observation { trade_date, .. } => Some(*trade_date),
            _ => None,
        }
    }

    /// Returns the underlying failure, unwrapping any observation tag.
    #[must_use]
    pub fn root_cause(&self) -> &CipError {
        match self {
            Self::Observation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
