//! Actual/365 Fixed day count convention.

use super::DayCount;

/// Actual/365 Fixed day count convention.
///
/// The year basis is always 365 days, leap years included. This is the
/// basis the implied local-currency rate is quoted on.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn basis(&self) -> f64 {
        365.0
    }
}
