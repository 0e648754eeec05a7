//! `Date` type.
//!
//! Dates are stored as a serial day number in the proleptic Gregorian
//! calendar, counted from **January 1, year 1** (serial 0, a Monday).
//! There is no time-of-day and no timezone, so equality, ordering and
//! hashing are all by calendar date.
//!
//! The supported range is 0001-01-01 to 9999-12-31.

use std::str::FromStr;

use bd_core::errors::{Error, Result};
use bd_core::{fail, Year};

use crate::weekday::Weekday;

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

/// Serial of 1970-01-01 relative to 0001-01-01.
const UNIX_EPOCH_SERIAL: i32 = 719_162;

/// First supported year.
pub const MIN_YEAR: Year = 1;

/// Last supported year.
pub const MAX_YEAR: Year = 9999;

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(0);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(MAX_YEAR, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the triple is not a valid date in the
    /// supported range.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            fail!(Date, "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]");
        }
        if !(1..=12).contains(&month) {
            fail!(Date, "month {month} out of range [1, 12]");
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            fail!(
                Date,
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            );
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Same as [`Date::from_ymd`] but returns `None` instead of an error.
    pub fn from_ymd_opt(year: Year, month: u8, day: u8) -> Option<Self> {
        Self::from_ymd(year, month, day).ok()
    }

    /// Create a date from a serial number (days since 0001-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            fail!(Date, "serial {serial} out of range");
        }
        Ok(Date(serial))
    }

    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        weekday_from_serial(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative to go back).
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => fail!(Date, "date arithmetic overflow: {self} + {n} days"),
        }
    }

    /// The following day, if any.
    pub fn succ(self) -> Option<Self> {
        self.add_days(1).ok()
    }

    /// The preceding day, if any.
    pub fn pred(self) -> Option<Self> {
        self.add_days(-1).ok()
    }

    /// Number of calendar days from `self` to `other`; positive if
    /// `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `nth_weekday(2, Weekday::Monday, 2019, 6)` is the second
    /// Monday of June 2019 (2019-06-10).
    ///
    /// Returns `None` when `n` is zero, the month or year is invalid, or the
    /// month has fewer than `n` such weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Option<Self> {
        if n == 0 {
            return None;
        }
        let first = Date::from_ymd_opt(year, month, 1)?;
        let skip = first.weekday().days_until(weekday) as u32;
        let day = 1 + skip + 7 * (n as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            return None;
        }
        Some(Date(first.0 + day as i32 - 1))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

/// ISO 8601 (`YYYY-MM-DD`).
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

/// Parses ISO 8601 (`YYYY-MM-DD`), surrounding whitespace ignored.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = parts.as_slice() else {
            fail!(Parse, "expected YYYY-MM-DD, got {s:?}");
        };
        let year: Year = y
            .parse()
            .map_err(|_| Error::Parse(format!("invalid year in {s:?}")))?;
        let month: u8 = m
            .parse()
            .map_err(|_| Error::Parse(format!("invalid month in {s:?}")))?;
        let day: u8 = d
            .parse()
            .map_err(|_| Error::Parse(format!("invalid day in {s:?}")))?;
        Date::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

/// The time-of-day is discarded; only the calendar date is kept.
#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDateTime> for Date {
    type Error = Error;

    fn try_from(dt: chrono::NaiveDateTime) -> Result<Self> {
        Date::try_from(dt.date())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(y, m as u32, day as u32)
            .ok_or_else(|| Error::Date(format!("{d} not representable as chrono::NaiveDate")))
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month (1–12) of `year`; 0 for an invalid month.
pub const fn days_in_month(year: Year, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Maximum length of a month in any year (February counts 29).
pub const fn max_days_in_month(month: u8) -> u8 {
    days_in_month(2000, month)
}

pub(crate) fn weekday_from_serial(serial: i32) -> Weekday {
    // serial 0 (0001-01-01) is a Monday
    match serial.rem_euclid(7) {
        0 => Weekday::Monday,
        1 => Weekday::Tuesday,
        2 => Weekday::Wednesday,
        3 => Weekday::Thursday,
        4 => Weekday::Friday,
        5 => Weekday::Saturday,
        _ => Weekday::Sunday,
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Counts days via 400-year eras with the year shifted to start in March, so
/// the leap day falls at the end of the shifted year.
const fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let m = month as i32;
    let y = if m <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_SERIAL
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    let z = serial - UNIX_EPOCH_SERIAL + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
