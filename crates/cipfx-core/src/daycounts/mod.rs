//! Day count conventions for money-market rates.
//!
//! Day count conventions determine how a quoted annual rate is scaled to an
//! accrual period: the actual number of days between two dates divided by a
//! fixed year basis.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - USD money market (SOFR, term SOFR)
//! - [`Act365Fixed`]: Actual/365 Fixed - SGD, GBP and most Commonwealth markets
//!
//! # Usage
//!
//! ```rust
//! use cipfx_core::daycounts::{Act360, DayCount};
//! use cipfx_core::types::Date;
//!
//! let start = Date::from_ymd(2026, 1, 6).unwrap();
//! let end = Date::from_ymd(2026, 2, 6).unwrap();
//!
//! assert_eq!(Act360.day_count(start, end), 31);
//! assert!((Act360.year_fraction(start, end) - 31.0 / 360.0).abs() < 1e-15);
//! ```

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365Fixed;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so a single
/// convention value can be shared across a parallel batch.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Returns the year basis in days.
    fn basis(&self) -> f64;

    /// Calculates the day count between two dates.
    ///
    /// Negative when `end` is before `start`.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.year_fraction_for_days(self.day_count(start, end))
    }

    /// Year fraction of an already counted number of days.
    fn year_fraction_for_days(&self, days: i64) -> f64 {
        days as f64 / self.basis()
    }
}
