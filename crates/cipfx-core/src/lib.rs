//! # cipfx Core
//!
//! Dates, day counts and business-day calendars for the cipfx implied-rate
//! engine.
//!
//! - **Types**: [`Date`], a plain calendar date with month-end aware arithmetic
//! - **Day Count Conventions**: ACT/360 and ACT/365 Fixed
//! - **Business Day Calendars**: year-scoped holiday sets and a joint
//!   two-market calendar for FX settlement
//! - **Errors**: [`CipError`], shared by every cipfx crate
//!
//! ## Example
//!
//! ```rust
//! use cipfx_core::prelude::*;
//!
//! let us = HolidaySet::for_year("US", 2026, []).unwrap();
//! let sg = HolidaySet::for_year("SG", 2026, []).unwrap();
//! let calendar = JointCalendar::new(us, sg);
//!
//! let trade = Date::from_ymd(2026, 1, 2).unwrap();
//! let spot = calendar.add_business_days(trade, 2).unwrap();
//! assert_eq!(spot, Date::from_ymd(2026, 1, 6).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, DayStatus, HolidaySet, HolidaySource, JointCalendar,
        StaticHolidaySource, WeekendCalendar,
    };
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount};
    pub use crate::error::{CipError, CipResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CipError, CipResult};
pub use types::Date;
