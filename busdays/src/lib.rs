//! # busdays
//!
//! Count weekdays and business days between two dates, with public holidays
//! given either as explicit dates or as recurring rules.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use busdays::{BusinessDayCounter, Date, HolidayRule, Weekday};
//!
//! let counter = BusinessDayCounter::new();
//! let first = Date::from_ymd(2013, 10, 7)?;
//! let second = Date::from_ymd(2014, 1, 1)?;
//! assert_eq!(counter.weekdays_between(first, second), 61);
//!
//! let christmas = [
//!     Date::from_ymd(2013, 12, 25)?,
//!     Date::from_ymd(2013, 12, 26)?,
//!     Date::from_ymd(2014, 1, 1)?,
//! ];
//! assert_eq!(counter.business_days_between(first, second, &christmas), 59);
//!
//! let rules = [
//!     HolidayRule::sliding(25, 12)?,
//!     HolidayRule::nth_weekday(1, Weekday::Monday, 10)?,
//! ];
//! assert_eq!(counter.business_days_between_rules(first, second, &rules), 60);
//! # Ok::<(), busdays::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and type aliases.
pub use bd_core as core;

/// Dates, holiday rules and counting.
pub use bd_time as time;

pub use bd_core::{Error, Result};
pub use bd_time::{BusinessDayCounter, Date, HolidayRule, MonthDay, NthWeekdayOfMonth, Weekday};
