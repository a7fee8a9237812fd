//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::{Calendar, MAX_SCAN_DAYS};
use crate::error::{CipError, CipResult};
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day. FX forward value dates use this.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> CipResult<Date> {
    if convention == BusinessDayConvention::Unadjusted || calendar.is_business_day(date)? {
        return Ok(date);
    }

    match convention {
        BusinessDayConvention::Unadjusted => Ok(date),

        BusinessDayConvention::Following => following(date, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar)?;
            if adjusted.month() != date.month() {
                preceding(date, calendar)
            } else {
                Ok(adjusted)
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = preceding(date, calendar)?;
            if adjusted.month() != date.month() {
                following(date, calendar)
            } else {
                Ok(adjusted)
            }
        }
    }
}

/// Returns the first business day on or after `date`.
pub(crate) fn following<C: Calendar + ?Sized>(date: Date, calendar: &C) -> CipResult<Date> {
    scan(date, 1, calendar)
}

/// Returns the last business day on or before `date`.
pub(crate) fn preceding<C: Calendar + ?Sized>(date: Date, calendar: &C) -> CipResult<Date> {
    scan(date, -1, calendar)
}

/// Walks from `start` (inclusive) in `step` increments until a business day
/// is found, giving up after `MAX_SCAN_DAYS` further calendar days.
fn scan<C: Calendar + ?Sized>(start: Date, step: i64, calendar: &C) -> CipResult<Date> {
    let mut current = start;
    for _ in 0..=MAX_SCAN_DAYS {
        if calendar.is_business_day(current)? {
            return Ok(current);
        }
        current = current.add_days(step);
    }
    Err(CipError::CalendarScanExceeded {
        start,
        limit: MAX_SCAN_DAYS,
    })
}
