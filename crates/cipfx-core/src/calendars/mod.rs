//! Business day calendars and conventions.
//!
//! This module provides:
//! - Year-scoped holiday sets for a single jurisdiction
//! - A joint calendar over two jurisdictions for FX settlement
//! - Business day adjustment conventions
//! - Holiday sources that provision holiday sets per year
//!
//! Every calendar knows which years it has data for. Asking about any other
//! year is an error (`CipError::UnresolvedCalendarYear`); an unknown year is
//! never treated as holiday-free.

mod conventions;
mod holiday_set;
mod joint;
mod source;

pub use conventions::{adjust, BusinessDayConvention};
pub use holiday_set::{HolidaySet, HolidaySetData};
pub use joint::{DayStatus, JointCalendar};
pub use source::{HolidaySource, LoaderHolidaySource, StaticHolidaySource};

use crate::error::CipResult;
use crate::types::Date;

/// Maximum calendar days scanned for a single business-day step.
///
/// Realistic holiday densities never need more than a handful of days; a
/// longer run means the holiday data is broken.
pub const MAX_SCAN_DAYS: u32 = 30;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days for a specific market,
/// or jointly for several markets.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    ///
    /// # Errors
    ///
    /// Returns `CipError::UnresolvedCalendarYear` if the calendar has no
    /// holiday data for the date's year.
    fn is_business_day(&self, date: Date) -> CipResult<bool>;

    /// Returns true if the date is not a business day.
    fn is_holiday(&self, date: Date) -> CipResult<bool> {
        Ok(!self.is_business_day(date)?)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> CipResult<Date> {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by `days` business days.
    ///
    /// The walk starts strictly after `start` and returns the `days`-th
    /// business day; `days == 0` returns `start` unchanged.
    fn add_business_days(&self, start: Date, days: u32) -> CipResult<Date> {
        let mut result = start;
        for _ in 0..days {
            result = conventions::following(result.add_days(1), self)?;
        }
        Ok(result)
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> CipResult<Date> {
        conventions::following(date, self)
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> CipResult<Date> {
        conventions::preceding(date, self)
    }

    /// Counts business days between two dates (exclusive of start, inclusive of end).
    fn business_days_between(&self, start: Date, end: Date) -> CipResult<u32> {
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_business_day(current)? {
                count += 1;
            }
            current = current.add_days(1);
        }

        Ok(count)
    }
}

/// A weekend-only calendar with no holidays, valid for every year.
///
/// Only for tests and synthetic runs; it must be chosen explicitly and is
/// never a fallback for missing holiday data.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> CipResult<bool> {
        Ok(date.is_weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;
        assert!(cal.is_business_day(date(2026, 1, 5)).unwrap());
        assert!(!cal.is_business_day(date(2026, 1, 3)).unwrap());
        assert!(cal.is_holiday(date(2026, 1, 4)).unwrap());
    }

    #[test]
    fn test_add_business_days() {
        let cal = WeekendCalendar;

        // Friday + 2 business days = Tuesday
        let friday = date(2026, 1, 2);
        assert_eq!(cal.add_business_days(friday, 2).unwrap(), date(2026, 1, 6));

        // Starting on a Saturday still counts from the following day
        let saturday = date(2026, 1, 3);
        assert_eq!(cal.add_business_days(saturday, 1).unwrap(), date(2026, 1, 5));
    }

    #[test]
    fn test_add_zero_business_days_is_noop() {
        let saturday = date(2026, 1, 3);
        assert_eq!(WeekendCalendar.add_business_days(saturday, 0).unwrap(), saturday);
    }

    #[test]
    fn test_business_days_between() {
        let cal = WeekendCalendar;

        // Monday to Friday = 4 business days (Tue, Wed, Thu, Fri)
        let monday = date(2026, 1, 5);
        let friday = date(2026, 1, 9);
        assert_eq!(cal.business_days_between(monday, friday).unwrap(), 4);
        assert_eq!(cal.business_days_between(friday, monday).unwrap(), 0);
    }

    #[test]
    fn test_next_and_previous() {
        let cal = WeekendCalendar;
        let sunday = date(2026, 1, 4);
        assert_eq!(cal.next_business_day(sunday).unwrap(), date(2026, 1, 5));
        assert_eq!(cal.previous_business_day(sunday).unwrap(), date(2026, 1, 2));
    }
}
