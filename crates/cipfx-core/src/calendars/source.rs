//! Holiday sources.
//!
//! A holiday source is the external collaborator that knows a jurisdiction's
//! holidays. The calendar never derives holidays itself; it asks a source for
//! each year it needs and fails if the source has nothing for that year.

use std::collections::BTreeMap;

use crate::types::Date;

/// Supplies the holidays of one jurisdiction, one year at a time.
pub trait HolidaySource: Send + Sync {
    /// Jurisdiction code (e.g. "US", "SG").
    fn jurisdiction(&self) -> &str;

    /// Holidays for `year`, or `None` if the source has no data for it.
    ///
    /// `Some(vec![])` means the year is known and has no holidays.
    fn holidays_for_year(&self, year: i32) -> Option<Vec<Date>>;
}

/// A source backed by a fixed table of years.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    jurisdiction: String,
    years: BTreeMap<i32, Vec<Date>>,
}

impl StaticHolidaySource {
    /// Creates an empty source for a jurisdiction.
    pub fn new(jurisdiction: impl Into<String>) -> Self {
        Self {
            jurisdiction: jurisdiction.into(),
            years: BTreeMap::new(),
        }
    }

    /// Adds the holiday list for one year.
    #[must_use]
    pub fn with_year(mut self, year: i32, holidays: Vec<Date>) -> Self {
        self.years.insert(year, holidays);
        self
    }

    /// Years the source has data for.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }
}

impl HolidaySource for StaticHolidaySource {
    fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    fn holidays_for_year(&self, year: i32) -> Option<Vec<Date>> {
        self.years.get(&year).cloned()
    }
}

/// A source that calls a loader function per year.
///
/// Lets holidays come from a database, a rules engine, or a data feed.
///
/// # Example
///
/// ```
/// use cipfx_core::calendars::{HolidaySet, LoaderHolidaySource};
/// use cipfx_core::types::Date;
///
/// let source = LoaderHolidaySource::new("US", |year| {
///     (year >= 2026).then(|| vec![Date::from_ymd(year, 1, 1).unwrap()])
/// });
///
/// assert!(HolidaySet::provision(&source, [2026, 2027]).is_ok());
/// assert!(HolidaySet::provision(&source, [2025]).is_err());
/// ```
pub struct LoaderHolidaySource<F> {
    jurisdiction: String,
    loader: F,
}

impl<F> LoaderHolidaySource<F>
where
    F: Fn(i32) -> Option<Vec<Date>> + Send + Sync,
{
    /// Creates a source from a loader function.
    pub fn new(jurisdiction: impl Into<String>, loader: F) -> Self {
        Self {
            jurisdiction: jurisdiction.into(),
            loader,
        }
    }
}

impl<F> HolidaySource for LoaderHolidaySource<F>
where
    F: Fn(i32) -> Option<Vec<Date>> + Send + Sync,
{
    fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    fn holidays_for_year(&self, year: i32) -> Option<Vec<Date>> {
        (self.loader)(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source() {
        let new_year = Date::from_ymd(2026, 1, 1).unwrap();
        let source = StaticHolidaySource::new("SG")
            .with_year(2026, vec![new_year])
            .with_year(2027, vec![]);

        assert_eq!(source.jurisdiction(), "SG");
        assert_eq!(source.holidays_for_year(2026), Some(vec![new_year]));
        assert_eq!(source.holidays_for_year(2027), Some(vec![]));
        assert_eq!(source.holidays_for_year(2028), None);
        assert_eq!(source.years().collect::<Vec<_>>(), vec![2026, 2027]);
    }
}
