//! Built-in holiday data for the USD/SGD market.
//!
//! Year-scoped tables only. A year that is not listed here is not covered,
//! and provisioning a calendar for it fails instead of assuming no holidays.

use cipfx_core::calendars::{HolidaySet, JointCalendar, StaticHolidaySource};
use cipfx_core::{CipResult, Date};

/// US banking holidays (SIFMA recommended calendar), by year.
const US_HOLIDAYS: &[(i32, &[(u32, u32)])] = &[(
    2026,
    &[
        (1, 1),   // New Year's Day
        (1, 19),  // Martin Luther King Jr. Day
        (2, 16),  // Presidents Day
        (4, 3),   // Good Friday
        (5, 25),  // Memorial Day
        (7, 3),   // Independence Day (observed)
        (9, 7),   // Labor Day
        (10, 12), // Columbus Day
        (11, 11), // Veterans Day
        (11, 26), // Thanksgiving
        (12, 25), // Christmas
    ],
)];

/// Singapore public holidays (Ministry of Manpower), by year.
const SG_HOLIDAYS: &[(i32, &[(u32, u32)])] = &[(
    2026,
    &[
        (1, 1),   // New Year's Day
        (2, 17),  // Chinese New Year
        (2, 18),  // Chinese New Year
        (4, 3),   // Good Friday
        (5, 1),   // Labour Day
        (5, 27),  // Hari Raya Haji
        (6, 1),   // Vesak Day (observed)
        (8, 10),  // National Day (observed)
        (11, 9),  // Deepavali (observed)
        (12, 25), // Christmas Day
    ],
)];

/// Jurisdiction code of the reference (USD) market.
pub const US: &str = "US";

/// Jurisdiction code of the local (SGD) market.
pub const SG: &str = "SG";

fn build_source(jurisdiction: &str, table: &[(i32, &[(u32, u32)])]) -> CipResult<StaticHolidaySource> {
    let mut source = StaticHolidaySource::new(jurisdiction);
    for (year, days) in table {
        let holidays = days
            .iter()
            .map(|&(month, day)| Date::from_ymd(*year, month, day))
            .collect::<CipResult<Vec<_>>>()?;
        source = source.with_year(*year, holidays);
    }
    Ok(source)
}

/// US banking holiday source.
pub fn us_holidays() -> CipResult<StaticHolidaySource> {
    build_source(US, US_HOLIDAYS)
}

/// Singapore public holiday source.
pub fn sg_holidays() -> CipResult<StaticHolidaySource> {
    build_source(SG, SG_HOLIDAYS)
}

/// Joint USD/SGD calendar covering `years`.
///
/// # Errors
///
/// Returns `CipError::UnresolvedCalendarYear` if either market has no
/// built-in data for one of the years.
pub fn usd_sgd_calendar(years: impl IntoIterator<Item = i32> + Clone) -> CipResult<JointCalendar> {
    let domestic = HolidaySet::provision(&us_holidays()?, years.clone())?;
    let foreign = HolidaySet::provision(&sg_holidays()?, years)?;
    Ok(JointCalendar::new(domestic, foreign))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipfx_core::calendars::DayStatus;
    use cipfx_core::CipError;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_holiday_counts() {
        let us = HolidaySet::provision(&us_holidays().unwrap(), [2026]).unwrap();
        let sg = HolidaySet::provision(&sg_holidays().unwrap(), [2026]).unwrap();
        assert_eq!(us.len(), 11);
        assert_eq!(sg.len(), 10);
    }

    #[test]
    fn test_usd_sgd_2026() {
        let cal = usd_sgd_calendar([2026]).unwrap();
        assert_eq!(cal.day_status(date(2026, 4, 3)).unwrap(), DayStatus::JointHoliday);
        assert_eq!(cal.day_status(date(2026, 1, 19)).unwrap(), DayStatus::DomesticHoliday);
        assert_eq!(cal.day_status(date(2026, 8, 10)).unwrap(), DayStatus::ForeignHoliday);
    }

    #[test]
    fn test_other_years_fail() {
        let err = usd_sgd_calendar([2026, 2027]).unwrap_err();
        assert_eq!(err, CipError::unresolved_year(2027, US));
    }
}
