//! Date construction, arithmetic and the optional serde / chrono integrations.

use std::collections::HashSet;

use bd_time::date::{days_in_month, is_leap_year};
use bd_time::{Date, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consistency_over_four_centuries() {
    let mut d = date(1900, 1, 1);
    let end = date(2300, 1, 1);
    let mut expected_weekday = d.weekday().ordinal();
    let mut count = 0;
    while d < end {
        let (y, m, day) = d.ymd();
        assert!(day >= 1 && day <= days_in_month(y, m), "{d}");
        assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
        assert_eq!(d.weekday().ordinal(), expected_weekday, "{d}");
        expected_weekday = expected_weekday % 7 + 1;
        count += 1;
        d = d.succ().unwrap();
    }
    let leap_years = (1900..2300).filter(|&y| is_leap_year(y)).count();
    assert_eq!(count, 400 * 365 + leap_years);
}

#[test]
fn known_weekdays() {
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2013, 10, 5).weekday(), Weekday::Saturday);
    assert_eq!(date(2014, 1, 1).weekday(), Weekday::Wednesday);
}

#[test]
fn dates_hash_by_calendar_day() {
    let set: HashSet<Date> = [date(2013, 12, 25), "2013-12-25".parse().unwrap(), date(2013, 12, 26)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn ordering_and_difference() {
    let a = date(2013, 10, 7);
    let b = date(2014, 1, 1);
    assert!(a < b);
    assert_eq!(a.days_between(b), 86);
    assert_eq!(b - a, 86);
    assert_eq!(a.add_days(86), Ok(b));
    assert_eq!(b.add_days(-86), Ok(a));
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use bd_time::HolidayRule;

    #[test]
    fn date_serialises_as_iso_string() {
        let d = date(2019, 4, 25);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2019-04-25\"");
        assert_eq!(serde_json::from_str::<Date>("\"2019-04-25\"").unwrap(), d);
        assert!(serde_json::from_str::<Date>("\"2019-02-29\"").is_err());
    }

    #[test]
    fn holiday_rules_deserialise_with_validation() {
        let json = r#"[
            {"kind": "fixed", "day": 25, "month": 4},
            {"kind": "sliding", "day": 9, "month": 3},
            {"kind": "nth_weekday", "occurrence": 2, "weekday": "Monday", "month": 6}
        ]"#;
        let rules: Vec<HolidayRule> = serde_json::from_str(json).unwrap();
        assert_eq!(
            rules,
            vec![
                HolidayRule::fixed(25, 4).unwrap(),
                HolidayRule::sliding(9, 3).unwrap(),
                HolidayRule::nth_weekday(2, Weekday::Monday, 6).unwrap(),
            ]
        );
        let back: Vec<HolidayRule> =
            serde_json::from_str(&serde_json::to_string(&rules).unwrap()).unwrap();
        assert_eq!(back, rules);

        assert!(serde_json::from_str::<HolidayRule>(r#"{"kind": "fixed", "day": 31, "month": 4}"#).is_err());
        assert!(serde_json::from_str::<HolidayRule>(
            r#"{"kind": "nth_weekday", "occurrence": 0, "weekday": "Monday", "month": 6}"#
        )
        .is_err());
    }
}

#[cfg(feature = "chrono")]
mod chrono_support {
    use super::*;

    #[test]
    fn time_of_day_is_ignored() {
        let dt = chrono::NaiveDate::from_ymd_opt(2013, 12, 25)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(Date::try_from(dt).unwrap(), date(2013, 12, 25));
    }

    #[test]
    fn naive_date_conversions() {
        let nd = chrono::NaiveDate::from_ymd_opt(2019, 6, 10).unwrap();
        let d = Date::try_from(nd).unwrap();
        assert_eq!(d, date(2019, 6, 10));
        assert_eq!(chrono::NaiveDate::try_from(d).unwrap(), nd);
        assert_eq!(Weekday::from(chrono::Datelike::weekday(&nd)), d.weekday());
        assert!(Date::try_from(chrono::NaiveDate::from_ymd_opt(-5, 1, 1).unwrap()).is_err());
    }
}
