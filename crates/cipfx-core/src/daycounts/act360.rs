//! Actual/360 day count convention.
//!
//! Used for the reference (USD) leg of the swap.

use super::DayCount;

/// Actual/360 day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 360 days.
///
/// # Usage
///
/// - SOFR and term SOFR fixings
/// - USD money market deposits
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn basis(&self) -> f64 {
        360.0
    }
}
