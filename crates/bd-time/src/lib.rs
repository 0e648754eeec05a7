//! # bd-time
//!
//! Dates, recurring holiday rules, and weekday / business-day counting.
//!
//! ```
//! use bd_time::{BusinessDayCounter, Date, HolidayRule, Weekday};
//!
//! let rules = [
//!     HolidayRule::fixed(25, 4).unwrap(),
//!     HolidayRule::sliding(9, 3).unwrap(),
//!     HolidayRule::nth_weekday(2, Weekday::Monday, 6).unwrap(),
//! ];
//! let first = Date::from_ymd(2019, 1, 1).unwrap();
//! let second = Date::from_ymd(2019, 7, 1).unwrap();
//!
//! let counter = BusinessDayCounter::new();
//! let weekdays = counter.weekdays_between(first, second);
//! let business_days = counter.business_days_between_rules(first, second, &rules);
//! assert_eq!(weekdays - business_days, 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Weekday and business-day counting.
pub mod counter;

/// `Date` type.
pub mod date;

/// Recurring public-holiday rules.
pub mod holiday;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use counter::BusinessDayCounter;
pub use date::Date;
pub use holiday::{HolidayRule, MonthDay, NthWeekdayOfMonth};
pub use weekday::Weekday;
