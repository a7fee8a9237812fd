//! # cipfx Engine
//!
//! Implied interest rates from FX swap quotes via Covered Interest Parity.
//!
//! Given a joint calendar for two markets, a tenor and one observation
//! (trade date, reference rate, spot, forward points), the engine:
//!
//! 1. resolves the spot value date (T+2 joint business days),
//! 2. resolves the forward value date (tenor months, month-end clamp, Following),
//! 3. builds the forward outright from spot and points,
//! 4. inverts CIP for the implied local rate (ACT/365 against ACT/360),
//! 5. reports the differential to the reference rate in basis points.
//!
//! The engine is pure: it never logs, reads files or touches the network.
//! The [`batch`] module drives many observations and is where observability
//! lives.
//!
//! ## Usage
//!
//! ```rust
//! use cipfx_engine::prelude::*;
//! use cipfx_engine::presets::usd_sgd_calendar;
//!
//! let calendar = usd_sgd_calendar([2026]).unwrap();
//! let engine = RateEngine::new(&calendar, Tenor::OneMonth);
//!
//! let trade = Date::from_ymd(2026, 1, 2).unwrap();
//! let result = engine
//!     .process(&SwapObservation::new(trade, 3.67738, 1.3450, -27.47))
//!     .unwrap();
//!
//! assert!(result.implied_rate_pct < result.reference_rate_pct);
//! ```
//!
//! ## Features
//!
//! - `parallel`: enables [`batch::run_batch_parallel`] on the rayon pool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

pub mod batch;
pub mod cip;
pub mod engine;
pub mod observation;
pub mod presets;
pub mod tenor;

pub use batch::{BatchFailure, BatchPolicy, BatchReport, BatchSummary};
pub use engine::{RateEngine, SPOT_LAG_DAYS};
pub use observation::{ComputedResult, SwapObservation, ValueDates};
pub use tenor::Tenor;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{run_batch, BatchPolicy, BatchReport, BatchSummary};
    pub use crate::engine::RateEngine;
    pub use crate::observation::{ComputedResult, SwapObservation, ValueDates};
    pub use crate::tenor::Tenor;
    pub use cipfx_core::calendars::{Calendar, HolidaySet, JointCalendar};
    pub use cipfx_core::{CipError, CipResult, Date};
}
