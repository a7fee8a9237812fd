//! Value-date resolution and the implied-rate solve.

use cipfx_core::calendars::{BusinessDayConvention, Calendar, JointCalendar};
use cipfx_core::{CipError, CipResult, Date};

use crate::cip;
use crate::observation::{ComputedResult, SwapObservation, ValueDates};
use crate::tenor::Tenor;

/// Spot lag in joint business days. Structural for FX swaps, not configurable.
pub const SPOT_LAG_DAYS: u32 = 2;

/// Convention used to roll the forward value date.
pub const FORWARD_ROLL: BusinessDayConvention = BusinessDayConvention::Following;

/// Resolves value dates and inverts CIP for one tenor over one calendar.
///
/// The engine is a pair of borrowed calendar and tenor. It holds no mutable
/// state, so one engine (or many engines over the same calendar) can process
/// observations from any number of threads.
///
/// # Example
///
/// ```rust
/// use cipfx_core::calendars::{HolidaySet, JointCalendar};
/// use cipfx_core::Date;
/// use cipfx_engine::{RateEngine, SwapObservation, Tenor};
///
/// let calendar = JointCalendar::new(
///     HolidaySet::for_year("US", 2026, []).unwrap(),
///     HolidaySet::for_year("SG", 2026, []).unwrap(),
/// );
/// let engine = RateEngine::new(&calendar, Tenor::OneMonth);
///
/// let trade = Date::from_ymd(2026, 1, 2).unwrap();
/// let result = engine
///     .process(&SwapObservation::new(trade, 3.67738, 1.3450, -27.47))
///     .unwrap();
///
/// assert_eq!(result.spot_date, Date::from_ymd(2026, 1, 6).unwrap());
/// assert_eq!(result.forward_date, Date::from_ymd(2026, 2, 6).unwrap());
/// assert_eq!(result.actual_days, 31);
/// ```
#[derive(Debug)]
pub struct RateEngine<'c, C: Calendar + ?Sized = JointCalendar> {
    calendar: &'c C,
    tenor: Tenor,
}

impl<C: Calendar + ?Sized> Clone for RateEngine<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Calendar + ?Sized> Copy for RateEngine<'_, C> {}

impl<'c, C: Calendar + ?Sized> RateEngine<'c, C> {
    /// Creates an engine for `tenor` over `calendar`.
    pub fn new(calendar: &'c C, tenor: Tenor) -> Self {
        Self { calendar, tenor }
    }

    /// The tenor this engine resolves.
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// The calendar this engine resolves against.
    pub fn calendar(&self) -> &'c C {
        self.calendar
    }

    /// Spot value date: two joint business days after the trade date.
    pub fn spot_date(&self, trade_date: Date) -> CipResult<Date> {
        self.calendar.add_business_days(trade_date, SPOT_LAG_DAYS)
    }

    /// Month-clamped anniversary of the spot date, before rolling.
    ///
    /// Jan 31 + 1M is Feb 28 (Feb 29 in a leap year), never a March date.
    pub fn unadjusted_forward_date(&self, spot_date: Date) -> CipResult<Date> {
        spot_date.add_months(self.tenor.months() as i32)
    }

    /// Forward value date: the clamped anniversary rolled Following.
    ///
    /// The roll only ever moves forward, even past a month end; the clamp
    /// happens once, before rolling.
    pub fn forward_date(&self, spot_date: Date) -> CipResult<Date> {
        let candidate = self.unadjusted_forward_date(spot_date)?;
        self.calendar.adjust(candidate, FORWARD_ROLL)
    }

    /// Resolves spot and forward value dates for a trade date.
    pub fn value_dates(&self, trade_date: Date) -> CipResult<ValueDates> {
        let spot_date = self.spot_date(trade_date)?;
        let unadjusted_forward_date = self.unadjusted_forward_date(spot_date)?;
        let forward_date = self.calendar.adjust(unadjusted_forward_date, FORWARD_ROLL)?;

        Ok(ValueDates {
            spot_date,
            unadjusted_forward_date,
            forward_date,
        })
    }

    /// Computes the full result for one observation.
    ///
    /// Spot date, forward date, forward outright, implied rate and
    /// differential, in that order. Any failure is tagged with the
    /// observation's trade date.
    pub fn process(&self, observation: &SwapObservation) -> CipResult<ComputedResult> {
        self.compute(observation)
            .map_err(|e| e.for_trade(observation.trade_date))
    }

    fn compute(&self, observation: &SwapObservation) -> CipResult<ComputedResult> {
        let spot_rate = observation.spot_rate;
        if spot_rate.is_nan() || spot_rate <= 0.0 {
            return Err(CipError::NonPositiveSpotRate { value: spot_rate });
        }

        let dates = self.value_dates(observation.trade_date)?;
        let actual_days = dates.actual_days();
        if actual_days <= 0 {
            return Err(CipError::NonPositiveDays {
                spot_date: dates.spot_date,
                forward_date: dates.forward_date,
            });
        }

        let forward_rate = observation.forward_rate();
        let implied_rate_pct = cip::implied_local_rate(
            spot_rate,
            forward_rate,
            observation.reference_rate_pct,
            actual_days,
        );
        let diff_bps = cip::rate_differential_bps(implied_rate_pct, observation.reference_rate_pct);

        Ok(ComputedResult {
            trade_date: observation.trade_date,
            tenor: self.tenor,
            spot_date: dates.spot_date,
            forward_date: dates.forward_date,
            actual_days,
            reference_rate_pct: observation.reference_rate_pct,
            spot_rate,
            forward_points_pips: observation.forward_points_pips,
            forward_rate,
            implied_rate_pct,
            diff_bps,
        })
    }
}
