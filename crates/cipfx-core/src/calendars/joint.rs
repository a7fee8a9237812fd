//! Joint business-day calendar over two jurisdictions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Calendar, HolidaySet};
use crate::error::CipResult;
use crate::types::Date;

/// Why a date is or is not a joint business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    /// Open in both markets.
    BusinessDay,
    /// Saturday or Sunday.
    Weekend,
    /// Holiday in the domestic market only.
    DomesticHoliday,
    /// Holiday in the foreign market only.
    ForeignHoliday,
    /// Holiday in both markets.
    JointHoliday,
}

impl DayStatus {
    /// Returns true for a joint business day.
    pub fn is_business_day(self) -> bool {
        self == DayStatus::BusinessDay
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayStatus::BusinessDay => "business day",
            DayStatus::Weekend => "weekend",
            DayStatus::DomesticHoliday => "domestic holiday",
            DayStatus::ForeignHoliday => "foreign holiday",
            DayStatus::JointHoliday => "holiday in both markets",
        };
        write!(f, "{label}")
    }
}

/// Calendar where a day is a business day only if it is one in both markets.
///
/// A joint business day is a weekday that is in neither holiday set. The
/// calendar is immutable once built and is `Send + Sync`, so one instance can
/// serve any number of concurrent value-date resolutions.
///
/// # Example
///
/// ```
/// use cipfx_core::calendars::{Calendar, DayStatus, HolidaySet, JointCalendar};
/// use cipfx_core::types::Date;
///
/// let us = HolidaySet::for_year("US", 2026, [Date::from_ymd(2026, 1, 19).unwrap()]).unwrap();
/// let sg = HolidaySet::for_year("SG", 2026, [Date::from_ymd(2026, 2, 17).unwrap()]).unwrap();
/// let cal = JointCalendar::new(us, sg);
///
/// let mlk = Date::from_ymd(2026, 1, 19).unwrap();
/// assert_eq!(cal.day_status(mlk).unwrap(), DayStatus::DomesticHoliday);
/// assert!(!cal.is_business_day(mlk).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointCalendar {
    domestic: HolidaySet,
    foreign: HolidaySet,
    name: String,
}

impl JointCalendar {
    /// Creates a joint calendar from the domestic and foreign holiday sets.
    pub fn new(domestic: HolidaySet, foreign: HolidaySet) -> Self {
        let name = format!("{}+{}", domestic.jurisdiction(), foreign.jurisdiction());
        Self {
            domestic,
            foreign,
            name,
        }
    }

    /// Domestic (reference-rate) market holidays.
    pub fn domestic(&self) -> &HolidaySet {
        &self.domestic
    }

    /// Foreign (local-rate) market holidays.
    pub fn foreign(&self) -> &HolidaySet {
        &self.foreign
    }

    /// Returns true if both holiday sets have data for `year`.
    pub fn covers_year(&self, year: i32) -> bool {
        self.domestic.covers_year(year) && self.foreign.covers_year(year)
    }

    /// Classifies a date.
    ///
    /// # Errors
    ///
    /// Returns `CipError::UnresolvedCalendarYear` naming the first
    /// jurisdiction without data for the date's year, even for weekends.
    pub fn day_status(&self, date: Date) -> CipResult<DayStatus> {
        self.domestic.check_year(date.year())?;
        self.foreign.check_year(date.year())?;

        if date.is_weekend() {
            return Ok(DayStatus::Weekend);
        }

        let status = match (self.domestic.contains(date), self.foreign.contains(date)) {
            (false, false) => DayStatus::BusinessDay,
            (true, false) => DayStatus::DomesticHoliday,
            (false, true) => DayStatus::ForeignHoliday,
            (true, true) => DayStatus::JointHoliday,
        };
        Ok(status)
    }
}

impl Calendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> CipResult<bool> {
        Ok(self.day_status(date)?.is_business_day())
    }
}
