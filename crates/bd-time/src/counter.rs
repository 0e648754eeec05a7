//! Weekday and business-day counting between two dates.
//!
//! All counts are over the **open** interval `(first, second)`: neither
//! endpoint is counted.  An empty or inverted range (`first >= second`) is
//! not an error and counts zero.

use std::collections::BTreeSet;

use bd_core::DayCount;
use tracing::debug;

use crate::date::{weekday_from_serial, Date};
use crate::holiday::HolidayRule;

/// Counts weekdays (Monday–Friday) and business days (weekdays that are not
/// public holidays) strictly between two dates.
///
/// ```
/// use bd_time::{BusinessDayCounter, Date};
///
/// let counter = BusinessDayCounter::new();
/// let first = Date::from_ymd(2013, 10, 7).unwrap();
/// let second = Date::from_ymd(2013, 10, 9).unwrap();
/// assert_eq!(counter.weekdays_between(first, second), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessDayCounter;

impl BusinessDayCounter {
    /// Create a counter.
    pub fn new() -> Self {
        Self
    }

    /// Number of Monday–Friday dates strictly between `first` and `second`.
    pub fn weekdays_between(&self, first: Date, second: Date) -> DayCount {
        let count = count_weekdays(first, second);
        debug!(%first, %second, count, "counted weekdays");
        count
    }

    /// Number of weekdays strictly between `first` and `second` that are not
    /// in `holidays`.
    ///
    /// Holidays falling on weekends or outside the range are ignored, and
    /// duplicates count once.
    pub fn business_days_between(&self, first: Date, second: Date, holidays: &[Date]) -> DayCount {
        let count = count_business_days(first, second, holidays.iter().copied());
        debug!(
            %first,
            %second,
            holidays = holidays.len(),
            count,
            "counted business days"
        );
        count
    }

    /// Number of weekdays strictly between `first` and `second` that are not
    /// public holidays under any of `rules`.
    ///
    /// Every rule is evaluated for every year from `first.year()` to
    /// `second.year()` inclusive.
    pub fn business_days_between_rules(
        &self,
        first: Date,
        second: Date,
        rules: &[HolidayRule],
    ) -> DayCount {
        if first >= second {
            return 0;
        }
        let holidays = self.holidays_between(first, second, rules);
        let count = count_business_days(first, second, holidays);
        debug!(
            %first,
            %second,
            rules = rules.len(),
            count,
            "counted business days from holiday rules"
        );
        count
    }

    /// The distinct dates produced by `rules` over the years spanned by
    /// `first..=second`.
    ///
    /// Dates are not filtered by weekday or by the exact range: a rule that
    /// falls on 1 January is returned even if `first` is in December.  An
    /// empty or inverted range (`first >= second`) yields no dates, as it
    /// does for the counts.
    pub fn holidays_between(
        &self,
        first: Date,
        second: Date,
        rules: &[HolidayRule],
    ) -> BTreeSet<Date> {
        if first >= second {
            return BTreeSet::new();
        }
        rules
            .iter()
            .flat_map(|rule| rule.dates_between(first.year(), second.year()))
            .collect()
    }
}

/// Weekdays in `(first, second)`, in closed form: whole weeks contribute five
/// each, the remaining fewer-than-seven days are checked one by one.
fn count_weekdays(first: Date, second: Date) -> DayCount {
    if first >= second {
        return 0;
    }
    let start = first.serial() as DayCount + 1;
    let days = (second.serial() - first.serial()) as DayCount - 1;
    let full_weeks = days / 7;
    let rest = (0..days % 7)
        .filter(|offset| {
            let serial = (start + full_weeks * 7 + offset) as i32;
            weekday_from_serial(serial).is_weekday()
        })
        .count() as DayCount;
    full_weeks * 5 + rest
}

fn count_business_days(
    first: Date,
    second: Date,
    holidays: impl IntoIterator<Item = Date>,
) -> DayCount {
    let weekdays = count_weekdays(first, second);
    if weekdays == 0 {
        return 0;
    }
    let excluded: BTreeSet<Date> = holidays
        .into_iter()
        .filter(|h| first < *h && *h < second && h.weekday().is_weekday())
        .collect();
    weekdays - excluded.len() as DayCount
}
