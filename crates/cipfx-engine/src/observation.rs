//! Observation and result records.

use cipfx_core::Date;
use serde::{Deserialize, Serialize};

use crate::cip;
use crate::tenor::Tenor;

/// One market observation for a single tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapObservation {
    /// Trade date.
    pub trade_date: Date,
    /// Reference-market rate for the tenor, percent, ACT/360 (e.g. term SOFR).
    pub reference_rate_pct: f64,
    /// Spot FX rate, quote currency per base currency. Must be positive.
    pub spot_rate: f64,
    /// Forward points in pips (1 pip = 0.0001).
    pub forward_points_pips: f64,
}

impl SwapObservation {
    /// Creates an observation.
    #[must_use]
    pub fn new(
        trade_date: Date,
        reference_rate_pct: f64,
        spot_rate: f64,
        forward_points_pips: f64,
    ) -> Self {
        Self {
            trade_date,
            reference_rate_pct,
            spot_rate,
            forward_points_pips,
        }
    }

    /// Forward outright rate (`spot + points / 10000`).
    #[must_use]
    pub fn forward_rate(&self) -> f64 {
        cip::forward_outright(self.spot_rate, self.forward_points_pips)
    }
}

/// Value dates resolved for one trade date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDates {
    /// Spot value date (T+2 joint business days).
    pub spot_date: Date,
    /// Month-clamped anniversary of the spot date, before business-day rolling.
    pub unadjusted_forward_date: Date,
    /// Forward value date after the Following roll.
    pub forward_date: Date,
}

impl ValueDates {
    /// Actual calendar days from spot to forward.
    #[must_use]
    pub fn actual_days(&self) -> i64 {
        self.spot_date.days_between(&self.forward_date)
    }
}

/// Everything computed for one observation.
///
/// Echoes the inputs so a row can be written out on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedResult {
    /// Trade date of the observation.
    pub trade_date: Date,
    /// Tenor the dates were resolved for.
    pub tenor: Tenor,
    /// Spot value date.
    pub spot_date: Date,
    /// Forward value date.
    pub forward_date: Date,
    /// Actual days between spot and forward; always positive.
    pub actual_days: i64,
    /// Reference rate, percent ACT/360.
    pub reference_rate_pct: f64,
    /// Spot FX rate.
    pub spot_rate: f64,
    /// Forward points in pips.
    pub forward_points_pips: f64,
    /// Forward outright rate.
    pub forward_rate: f64,
    /// Implied local rate, percent ACT/365.
    pub implied_rate_pct: f64,
    /// Implied minus reference, basis points.
    pub diff_bps: f64,
}
