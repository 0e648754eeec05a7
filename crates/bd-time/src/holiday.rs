//! Recurring public-holiday rules.
//!
//! A [`HolidayRule`] turns a year into the concrete date on which the holiday
//! is observed that year, or `None` when the rule has no date in that year
//! (29 February in a common year, a fifth Monday that the month lacks).
//!
//! Three kinds of rule are supported:
//!
//! * **Fixed** — the same day and month every year (25 April).
//! * **Sliding** — a fixed day that moves to the following Monday when it
//!   falls on a weekend.
//! * **Nth weekday** — the *n*-th occurrence of a weekday within a month
//!   (second Monday of June).
//!
//! Rules validate their arguments on construction, so every value of these
//! types describes a date that exists in at least one year.

use bd_core::errors::Result;
use bd_core::{fail, Year};
use tracing::trace;

use crate::date::{max_days_in_month, Date};
use crate::weekday::Weekday;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[month as usize - 1]
}

fn check_month(month: u8) -> Result<()> {
    if !(1..=12).contains(&month) {
        fail!(InvalidHolidayRule, "month {month} out of range [1, 12]");
    }
    Ok(())
}

// ── MonthDay ──────────────────────────────────────────────────────────────────

/// A day and month without a year, e.g. 25 April.
///
/// The day must exist in that month in a leap year: 29 February is allowed,
/// 30 February and 31 April are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_repr::MonthDayRepr"))]
pub struct MonthDay {
    day: u8,
    month: u8,
}

impl MonthDay {
    /// Create a validated day/month pair.
    ///
    /// # Errors
    /// [`Error::InvalidHolidayRule`](bd_core::Error::InvalidHolidayRule) if
    /// `month` is outside 1–12 or `day` does not exist in `month`.
    pub fn new(day: u8, month: u8) -> Result<Self> {
        check_month(month)?;
        let max = max_days_in_month(month);
        if day == 0 || day > max {
            fail!(
                InvalidHolidayRule,
                "day {day} out of range [1, {max}] for {}",
                month_name(month)
            );
        }
        Ok(Self { day, month })
    }

    /// Day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The date in `year`, or `None` if the day does not exist that year.
    pub fn in_year(&self, year: Year) -> Option<Date> {
        Date::from_ymd_opt(year, self.month, self.day)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, month_name(self.month))
    }
}

// ── NthWeekdayOfMonth ─────────────────────────────────────────────────────────

/// The *n*-th occurrence (1–5) of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_repr::NthWeekdayRepr"))]
pub struct NthWeekdayOfMonth {
    occurrence: u8,
    weekday: Weekday,
    month: u8,
}

impl NthWeekdayOfMonth {
    /// Create a validated rule.
    ///
    /// # Errors
    /// [`Error::InvalidHolidayRule`](bd_core::Error::InvalidHolidayRule) if
    /// `occurrence` is outside 1–5 or `month` is outside 1–12.
    pub fn new(occurrence: u8, weekday: Weekday, month: u8) -> Result<Self> {
        if !(1..=5).contains(&occurrence) {
            fail!(
                InvalidHolidayRule,
                "occurrence {occurrence} out of range [1, 5]"
            );
        }
        check_month(month)?;
        Ok(Self {
            occurrence,
            weekday,
            month,
        })
    }

    /// Which occurrence (1–5).
    pub fn occurrence(&self) -> u8 {
        self.occurrence
    }

    /// The weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The date in `year`, or `None` if the month has no such occurrence.
    pub fn in_year(&self, year: Year) -> Option<Date> {
        Date::nth_weekday(self.occurrence, self.weekday, year, self.month)
    }
}

impl std::fmt::Display for NthWeekdayOfMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = match self.occurrence {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        write!(
            f,
            "{}{suffix} {} of {}",
            self.occurrence,
            self.weekday,
            month_name(self.month)
        )
    }
}

// ── HolidayRule ───────────────────────────────────────────────────────────────

/// A recurring public holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum HolidayRule {
    /// Same day every year.
    Fixed(MonthDay),
    /// Same day every year, moved to Monday when it falls on a weekend.
    Sliding(MonthDay),
    /// *n*-th weekday of a month.
    NthWeekday(NthWeekdayOfMonth),
}

impl HolidayRule {
    /// A fixed-date holiday on `day`/`month`.
    pub fn fixed(day: u8, month: u8) -> Result<Self> {
        MonthDay::new(day, month).map(HolidayRule::Fixed)
    }

    /// A fixed-date holiday on `day`/`month` that slides off weekends.
    pub fn sliding(day: u8, month: u8) -> Result<Self> {
        MonthDay::new(day, month).map(HolidayRule::Sliding)
    }

    /// The `occurrence`-th `weekday` of `month`.
    pub fn nth_weekday(occurrence: u8, weekday: Weekday, month: u8) -> Result<Self> {
        NthWeekdayOfMonth::new(occurrence, weekday, month).map(HolidayRule::NthWeekday)
    }

    /// The date on which the holiday falls in `year`, if any.
    ///
    /// ```
    /// use bd_time::{Date, HolidayRule};
    ///
    /// let anzac = HolidayRule::fixed(25, 4).unwrap();
    /// assert_eq!(anzac.holiday_date(2019), Date::from_ymd_opt(2019, 4, 25));
    ///
    /// let leap_day = HolidayRule::fixed(29, 2).unwrap();
    /// assert_eq!(leap_day.holiday_date(2019), None);
    /// ```
    pub fn holiday_date(&self, year: Year) -> Option<Date> {
        let date = match self {
            HolidayRule::Fixed(md) => md.in_year(year),
            HolidayRule::Sliding(md) => md.in_year(year).map(slide_off_weekend),
            HolidayRule::NthWeekday(nth) => nth.in_year(year),
        };
        trace!(rule = %self, year, date = ?date, "evaluated holiday rule");
        date
    }

    /// Dates of the holiday in every year of `first_year..=last_year`,
    /// skipping years in which the rule has no date.
    pub fn dates_between(
        &self,
        first_year: Year,
        last_year: Year,
    ) -> impl Iterator<Item = Date> + '_ {
        (first_year..=last_year).filter_map(move |y| self.holiday_date(y))
    }
}

impl std::fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayRule::Fixed(md) => write!(f, "{md}"),
            HolidayRule::Sliding(md) => write!(f, "{md} (sliding)"),
            HolidayRule::NthWeekday(nth) => write!(f, "{nth}"),
        }
    }
}

impl From<MonthDay> for HolidayRule {
    fn from(md: MonthDay) -> Self {
        HolidayRule::Fixed(md)
    }
}

impl From<NthWeekdayOfMonth> for HolidayRule {
    fn from(nth: NthWeekdayOfMonth) -> Self {
        HolidayRule::NthWeekday(nth)
    }
}

/// Saturday moves forward two days and Sunday one, landing on Monday.
fn slide_off_weekend(date: Date) -> Date {
    let shift = match date.weekday() {
        Weekday::Saturday => 2,
        Weekday::Sunday => 1,
        _ => return date,
    };
    // Date::MAX (9999-12-31) is a Friday, so a weekend always has a Monday after it.
    Date::from_serial_unchecked(date.serial() + shift)
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_repr {
    use super::*;
    use bd_core::errors::Error;

    #[derive(serde::Deserialize)]
    pub(super) struct MonthDayRepr {
        day: u8,
        month: u8,
    }

    impl TryFrom<MonthDayRepr> for MonthDay {
        type Error = Error;

        fn try_from(r: MonthDayRepr) -> Result<Self> {
            MonthDay::new(r.day, r.month)
        }
    }

    #[derive(serde::Deserialize)]
    pub(super) struct NthWeekdayRepr {
        occurrence: u8,
        weekday: Weekday,
        month: u8,
    }

    impl TryFrom<NthWeekdayRepr> for NthWeekdayOfMonth {
        type Error = Error;

        fn try_from(r: NthWeekdayRepr) -> Result<Self> {
            NthWeekdayOfMonth::new(r.occurrence, r.weekday, r.month)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bd_core::errors::Error;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn month_day_validation() {
        assert!(MonthDay::new(29, 2).is_ok());
        assert!(MonthDay::new(31, 12).is_ok());
        assert!(MonthDay::new(30, 2).is_err());
        assert!(MonthDay::new(31, 4).is_err());
        assert!(MonthDay::new(31, 6).is_err());
        assert!(MonthDay::new(31, 9).is_err());
        assert!(MonthDay::new(31, 11).is_err());
        assert!(MonthDay::new(0, 1).is_err());
        assert!(MonthDay::new(32, 1).is_err());
        assert!(MonthDay::new(1, 0).is_err());
        assert!(MonthDay::new(1, 13).is_err());
    }

    #[test]
    fn invalid_rule_error_kind() {
        assert_eq!(
            HolidayRule::fixed(31, 4),
            Err(Error::InvalidHolidayRule(
                "day 31 out of range [1, 30] for April".into()
            ))
        );
        assert_eq!(
            HolidayRule::nth_weekday(0, Weekday::Monday, 6),
            Err(Error::InvalidHolidayRule(
                "occurrence 0 out of range [1, 5]".into()
            ))
        );
        assert!(HolidayRule::nth_weekday(6, Weekday::Monday, 6).is_err());
        assert!(HolidayRule::nth_weekday(1, Weekday::Monday, 13).is_err());
    }

    #[test]
    fn slide_shifts_weekends_only() {
        // 2019-03-09 Saturday, 2019-03-10 Sunday, 2019-03-11 Monday
        assert_eq!(slide_off_weekend(date(2019, 3, 9)), date(2019, 3, 11));
        assert_eq!(slide_off_weekend(date(2019, 3, 10)), date(2019, 3, 11));
        assert_eq!(slide_off_weekend(date(2019, 3, 11)), date(2019, 3, 11));
        assert_eq!(slide_off_weekend(date(2019, 3, 15)), date(2019, 3, 15));
    }

    #[test]
    fn sliding_at_end_of_range_stays_in_range() {
        assert_eq!(Date::MAX.weekday(), Weekday::Friday);
        let new_year_eve = HolidayRule::sliding(31, 12).unwrap();
        assert_eq!(new_year_eve.holiday_date(9999), Some(Date::MAX));
        // 9999-12-25 is a Saturday
        let christmas = HolidayRule::sliding(25, 12).unwrap();
        assert_eq!(date(9999, 12, 25).weekday(), Weekday::Saturday);
        assert_eq!(christmas.holiday_date(9999), Some(date(9999, 12, 27)));
    }

    #[test]
    fn sliding_propagates_missing_date() {
        let rule = HolidayRule::sliding(29, 2).unwrap();
        assert_eq!(rule.holiday_date(2019), None);
        // 2020-02-29 is a Saturday
        assert_eq!(rule.holiday_date(2020), Some(date(2020, 3, 2)));
    }

    #[test]
    fn dates_between_skips_missing_years() {
        let rule = HolidayRule::fixed(29, 2).unwrap();
        let dates: Vec<_> = rule.dates_between(2019, 2024).collect();
        assert_eq!(dates, vec![date(2020, 2, 29), date(2024, 2, 29)]);
    }

    #[test]
    fn years_outside_range_have_no_date() {
        let rule = HolidayRule::fixed(1, 1).unwrap();
        assert_eq!(rule.holiday_date(0), None);
        assert_eq!(rule.holiday_date(10_000), None);
    }

    #[test]
    fn display() {
        assert_eq!(HolidayRule::fixed(25, 4).unwrap().to_string(), "25 April");
        assert_eq!(
            HolidayRule::sliding(9, 3).unwrap().to_string(),
            "9 March (sliding)"
        );
        assert_eq!(
            HolidayRule::nth_weekday(2, Weekday::Monday, 6)
                .unwrap()
                .to_string(),
            "2nd Monday of June"
        );
        assert_eq!(
            HolidayRule::nth_weekday(3, Weekday::Tuesday, 11)
                .unwrap()
                .to_string(),
            "3rd Tuesday of November"
        );
    }
}
