//! Covered Interest Parity.
//!
//! The no-arbitrage relation between spot, forward and the two money-market
//! rates over the same period:
//!
//! $$\frac{F}{S} = \frac{1 + r_{loc} \cdot d/365}{1 + r_{ref} \cdot d/360}$$
//!
//! The reference leg accrues ACT/360 and the local leg ACT/365 Fixed. These
//! bases belong to the USD/SGD market and are not parameters.
//! Rates are in percent throughout, FX in quote currency per base currency.
//!
//! The functions here are the bare algebra; they do not validate their
//! inputs. [`RateEngine`](crate::RateEngine) checks `spot > 0` and `days > 0`
//! before calling them.

use cipfx_core::daycounts::{Act360, Act365Fixed, DayCount};

/// Pips per unit of the quote currency (1 pip = 0.0001).
pub const PIPS_PER_UNIT: f64 = 10_000.0;

/// Basis points per percentage point.
pub const BPS_PER_PERCENT: f64 = 100.0;

/// Day count of the reference (USD) leg.
pub const REFERENCE_DAY_COUNT: Act360 = Act360;

/// Day count of the local (implied) leg.
pub const LOCAL_DAY_COUNT: Act365Fixed = Act365Fixed;

/// Forward outright rate from spot and forward points.
///
/// Points may be negative (forward discount) or positive (forward premium).
#[must_use]
pub fn forward_outright(spot_rate: f64, forward_points_pips: f64) -> f64 {
    spot_rate + forward_points_pips / PIPS_PER_UNIT
}

/// Growth factor of the reference leg over `days`: `1 + r/100 × days/360`.
#[must_use]
pub fn reference_factor(reference_rate_pct: f64, days: i64) -> f64 {
    1.0 + reference_rate_pct / 100.0 * REFERENCE_DAY_COUNT.year_fraction_for_days(days)
}

/// Growth factor of the local leg over `days`: `1 + r/100 × days/365`.
#[must_use]
pub fn local_factor(local_rate_pct: f64, days: i64) -> f64 {
    1.0 + local_rate_pct / 100.0 * LOCAL_DAY_COUNT.year_fraction_for_days(days)
}

/// Implied local rate (percent, ACT/365) from the CIP relation.
///
/// $$r_{loc} = \left[\frac{F}{S}\left(1 + r_{ref}\frac{d}{360}\right) - 1\right]\frac{365}{d}$$
#[must_use]
pub fn implied_local_rate(spot_rate: f64, forward_rate: f64, reference_rate_pct: f64, days: i64) -> f64 {
    let growth = forward_rate / spot_rate * reference_factor(reference_rate_pct, days);
    (growth - 1.0) * (LOCAL_DAY_COUNT.basis() / days as f64) * 100.0
}

/// Rate differential in basis points (implied minus reference).
#[must_use]
pub fn rate_differential_bps(implied_rate_pct: f64, reference_rate_pct: f64) -> f64 {
    (implied_rate_pct - reference_rate_pct) * BPS_PER_PERCENT
}

/// Forward outright implied by both rates: the forward direction of CIP.
#[must_use]
pub fn forward_from_rates(spot_rate: f64, reference_rate_pct: f64, local_rate_pct: f64, days: i64) -> f64 {
    spot_rate * local_factor(local_rate_pct, days) / reference_factor(reference_rate_pct, days)
}

/// Fair forward points (pips) implied by both rates.
#[must_use]
pub fn theoretical_forward_points(
    spot_rate: f64,
    reference_rate_pct: f64,
    local_rate_pct: f64,
    days: i64,
) -> f64 {
    (forward_from_rates(spot_rate, reference_rate_pct, local_rate_pct, days) - spot_rate)
        * PIPS_PER_UNIT
}
