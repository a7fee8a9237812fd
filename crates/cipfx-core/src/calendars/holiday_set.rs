//! Year-scoped holiday sets for a single jurisdiction.
//!
//! # Example
//!
//! ```
//! use cipfx_core::calendars::{Calendar, HolidaySet};
//! use cipfx_core::types::Date;
//!
//! let us = HolidaySet::for_year(
//!     "US",
//!     2026,
//!     [Date::from_ymd(2026, 1, 19).unwrap()],
//! )
//! .unwrap();
//!
//! assert!(!us.is_business_day(Date::from_ymd(2026, 1, 19).unwrap()).unwrap());
//! assert!(us.is_business_day(Date::from_ymd(2026, 1, 20).unwrap()).unwrap());
//! // No data for 2027: this is an error, not a business day.
//! assert!(us.is_business_day(Date::from_ymd(2027, 1, 20).unwrap()).is_err());
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Calendar, HolidaySource};
use crate::error::{CipError, CipResult};
use crate::types::Date;

/// An immutable set of holidays for one jurisdiction.
///
/// A holiday set is scoped to an explicit set of years. A holiday outside
/// those years is rejected at construction, and lookups for any other year
/// fail with `CipError::UnresolvedCalendarYear`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HolidaySetData", into = "HolidaySetData")]
pub struct HolidaySet {
    jurisdiction: String,
    years: BTreeSet<i32>,
    holidays: BTreeSet<Date>,
}

impl std::fmt::Debug for HolidaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidaySet")
            .field("jurisdiction", &self.jurisdiction)
            .field("years", &self.years)
            .field("holiday_count", &self.holidays.len())
            .finish()
    }
}

impl HolidaySet {
    /// Creates a holiday set covering `years`.
    ///
    /// # Errors
    ///
    /// Returns `CipError::CalendarError` if no year is given or a holiday
    /// falls outside the covered years.
    pub fn new(
        jurisdiction: impl Into<String>,
        years: impl IntoIterator<Item = i32>,
        holidays: impl IntoIterator<Item = Date>,
    ) -> CipResult<Self> {
        let jurisdiction = jurisdiction.into();
        let years: BTreeSet<i32> = years.into_iter().collect();
        if years.is_empty() {
            return Err(CipError::calendar_error(format!(
                "{jurisdiction} holiday set covers no years"
            )));
        }

        let holidays: BTreeSet<Date> = holidays.into_iter().collect();
        if let Some(stray) = holidays.iter().find(|d| !years.contains(&d.year())) {
            return Err(CipError::calendar_error(format!(
                "{jurisdiction} holiday {stray} is outside the covered years {years:?}"
            )));
        }

        Ok(Self {
            jurisdiction,
            years,
            holidays,
        })
    }

    /// Creates a holiday set for a single year.
    pub fn for_year(
        jurisdiction: impl Into<String>,
        year: i32,
        holidays: impl IntoIterator<Item = Date>,
    ) -> CipResult<Self> {
        Self::new(jurisdiction, [year], holidays)
    }

    /// Builds a holiday set for `years` from a holiday source.
    ///
    /// # Errors
    ///
    /// Returns `CipError::UnresolvedCalendarYear` for the first requested year
    /// the source has no data for.
    pub fn provision<S: HolidaySource + ?Sized>(
        source: &S,
        years: impl IntoIterator<Item = i32>,
    ) -> CipResult<Self> {
        let mut covered = BTreeSet::new();
        let mut holidays = Vec::new();

        for year in years {
            let dates = source
                .holidays_for_year(year)
                .ok_or_else(|| CipError::unresolved_year(year, source.jurisdiction()))?;
            covered.insert(year);
            holidays.extend(dates);
        }

        Self::new(source.jurisdiction(), covered, holidays)
    }

    /// Load a holiday set from JSON data.
    ///
    /// # JSON Format
    ///
    /// ```json
    /// {
    ///   "jurisdiction": "SG",
    ///   "years": [2026],
    ///   "holidays": ["2026-01-01", "2026-02-17"]
    /// }
    /// ```
    pub fn from_json(json: &str) -> CipResult<Self> {
        let data: HolidaySetData = serde_json::from_str(json)
            .map_err(|e| CipError::calendar_error(format!("Failed to parse JSON: {}", e)))?;
        Self::try_from(data)
    }

    /// Load a holiday set from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CipResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CipError::calendar_error(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Export to a pretty-printed JSON string.
    pub fn to_json(&self) -> CipResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CipError::calendar_error(format!("Failed to serialize: {}", e)))
    }

    /// Combines two holiday sets of the same jurisdiction covering disjoint years.
    ///
    /// # Errors
    ///
    /// Returns `CipError::CalendarError` if the jurisdictions differ or a year
    /// is covered by both sets.
    pub fn merge(mut self, other: HolidaySet) -> CipResult<Self> {
        if self.jurisdiction != other.jurisdiction {
            return Err(CipError::calendar_error(format!(
                "Cannot merge {} holidays into {}",
                other.jurisdiction, self.jurisdiction
            )));
        }
        if let Some(year) = self.years.intersection(&other.years).next() {
            return Err(CipError::calendar_error(format!(
                "{} holidays for {} supplied twice",
                self.jurisdiction, year
            )));
        }

        self.years.extend(other.years);
        self.holidays.extend(other.holidays);
        Ok(self)
    }

    /// Jurisdiction code (e.g. "US", "SG").
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    /// Years this set has data for.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied()
    }

    /// Returns true if the set has data for `year`.
    pub fn covers_year(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Fails unless the set has data for `year`.
    pub fn check_year(&self, year: i32) -> CipResult<()> {
        if self.covers_year(year) {
            Ok(())
        } else {
            Err(CipError::unresolved_year(year, &self.jurisdiction))
        }
    }

    /// Returns true if `date` is listed as a holiday.
    ///
    /// This is a raw membership test with no year check.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Number of listed holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if no holidays are listed.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterates the holidays in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }
}

impl Calendar for HolidaySet {
    fn name(&self) -> &str {
        &self.jurisdiction
    }

    fn is_business_day(&self, date: Date) -> CipResult<bool> {
        self.check_year(date.year())?;
        Ok(date.is_weekday() && !self.contains(date))
    }
}

/// Serialized form of a [`HolidaySet`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaySetData {
    /// Jurisdiction code.
    pub jurisdiction: String,
    /// Years the holiday list is complete for.
    pub years: Vec<i32>,
    /// Holiday dates (YYYY-MM-DD).
    #[serde(default)]
    pub holidays: Vec<Date>,
}

impl TryFrom<HolidaySetData> for HolidaySet {
    type Error = CipError;

    fn try_from(data: HolidaySetData) -> Result<Self, Self::Error> {
        HolidaySet::new(data.jurisdiction, data.years, data.holidays)
    }
}

impl From<HolidaySet> for HolidaySetData {
    fn from(set: HolidaySet) -> Self {
        HolidaySetData {
            jurisdiction: set.jurisdiction,
            years: set.years.into_iter().collect(),
            holidays: set.holidays.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::StaticHolidaySource;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_rejects_holiday_outside_years() {
        let err = HolidaySet::for_year("US", 2026, [date(2027, 1, 1)]).unwrap_err();
        assert!(matches!(err, CipError::CalendarError { .. }));
    }

    #[test]
    fn test_rejects_empty_years() {
        assert!(HolidaySet::new("US", [], []).is_err());
    }

    #[test]
    fn test_unknown_year_is_error() {
        let set = HolidaySet::for_year("SG", 2026, []).unwrap();
        let err = set.is_business_day(date(2025, 12, 31)).unwrap_err();
        assert_eq!(err, CipError::unresolved_year(2025, "SG"));
    }

    #[test]
    fn test_holiday_and_weekend() {
        let set = HolidaySet::for_year("SG", 2026, [date(2026, 2, 17)]).unwrap();
        assert!(!set.is_business_day(date(2026, 2, 17)).unwrap());
        assert!(!set.is_business_day(date(2026, 2, 14)).unwrap());
        assert!(set.is_business_day(date(2026, 2, 19)).unwrap());
    }

    #[test]
    fn test_merge() {
        let a = HolidaySet::for_year("US", 2026, [date(2026, 1, 1)]).unwrap();
        let b = HolidaySet::for_year("US", 2027, [date(2027, 1, 1)]).unwrap();
        let merged = a.clone().merge(b).unwrap();

        assert!(merged.covers_year(2026));
        assert!(merged.covers_year(2027));
        assert_eq!(merged.len(), 2);

        assert!(a.clone().merge(a.clone()).is_err());
        let sg = HolidaySet::for_year("SG", 2027, []).unwrap();
        assert!(a.merge(sg).is_err());
    }

    #[test]
    fn test_provision_fails_on_missing_year() {
        let source = StaticHolidaySource::new("US").with_year(2026, vec![date(2026, 1, 1)]);

        let set = HolidaySet::provision(&source, [2026]).unwrap();
        assert!(set.contains(date(2026, 1, 1)));

        let err = HolidaySet::provision(&source, [2026, 2027]).unwrap_err();
        assert_eq!(err, CipError::unresolved_year(2027, "US"));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "jurisdiction": "SG",
            "years": [2026],
            "holidays": ["2026-01-01", "2026-02-17", "2026-02-18"]
        }"#;
        let set = HolidaySet::from_json(json).unwrap();
        assert_eq!(set.jurisdiction(), "SG");
        assert_eq!(set.len(), 3);

        let back = HolidaySet::from_json(&set.to_json().unwrap()).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_json_rejects_stray_year() {
        let json = r#"{"jurisdiction": "SG", "years": [2026], "holidays": ["2025-12-25"]}"#;
        assert!(HolidaySet::from_json(json).is_err());
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("us.json");
        let set = HolidaySet::for_year("US", 2026, [date(2026, 7, 3)]).unwrap();
        std::fs::write(&path, set.to_json().unwrap()).unwrap();

        assert_eq!(HolidaySet::from_json_file(&path).unwrap(), set);
        assert!(HolidaySet::from_json_file(dir.path().join("missing.json")).is_err());
    }
}
