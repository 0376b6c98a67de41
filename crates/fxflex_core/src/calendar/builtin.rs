//! Rule-based calendars shipped with the crate.

use chrono::Weekday;

use super::HolidayCalendar;
use crate::types::Date;

/// Every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "NoHolidays"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

/// Saturdays and Sundays are the only non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct SatSun;

impl HolidayCalendar for SatSun {
    fn name(&self) -> &str {
        "SatSun"
    }

    fn is_holiday(&self, date: Date) -> bool {
        date.is_weekend()
    }
}

/// New York banking holidays.
///
/// New Year's Day and Veterans Day move from Sunday to Monday;
/// Juneteenth (from 2022), Independence Day and Christmas move to the
/// Friday or Monday when they fall on a weekend. Good Friday is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Usny;

impl Usny {
    fn is_bank_holiday(date: Date) -> bool {
        let year = date.year();
        match date.month() {
            1 => {
                observed(date, 1, 1, false)
                    || (year >= 1986 && is_nth_weekday(date, Weekday::Mon, 3))
            }
            2 => is_nth_weekday(date, Weekday::Mon, 3),
            5 => is_last_weekday(date, Weekday::Mon),
            6 => year >= 2022 && observed(date, 6, 19, true),
            7 => observed(date, 7, 4, true),
            9 => is_nth_weekday(date, Weekday::Mon, 1),
            10 => is_nth_weekday(date, Weekday::Mon, 2),
            11 => observed(date, 11, 11, false) || is_nth_weekday(date, Weekday::Thu, 4),
            12 => observed(date, 12, 25, true),
            _ => false,
        }
    }
}

impl HolidayCalendar for Usny {
    fn name(&self) -> &str {
        "USNY"
    }

    fn is_holiday(&self, date: Date) -> bool {
        date.is_weekend() || Usny::is_bank_holiday(date)
    }
}

/// TARGET settlement calendar for euro payments.
///
/// Holidays are never moved when they fall on a weekend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euta;

impl HolidayCalendar for Euta {
    fn name(&self) -> &str {
        "EUTA"
    }

    fn is_holiday(&self, date: Date) -> bool {
        if date.is_weekend() {
            return true;
        }
        match (date.month(), date.day()) {
            (1, 1) | (5, 1) | (12, 25) | (12, 26) => return true,
            _ => {}
        }
        match easter_sunday(date.year()) {
            Some(easter) => {
                let offset = date - easter;
                offset == -2 || offset == 1
            }
            None => false,
        }
    }
}

/// True if `date` is the observed date of the holiday on `month`/`day`
/// of the same year.
///
/// Sunday holidays move to Monday; Saturday holidays move to Friday only
/// when `saturday_to_friday` is set.
fn observed(date: Date, month: u32, day: u32, saturday_to_friday: bool) -> bool {
    let Ok(actual) = Date::from_ymd(date.year(), month, day) else {
        return false;
    };
    let shift = match actual.weekday() {
        Weekday::Sat if saturday_to_friday => -1,
        Weekday::Sun => 1,
        _ => 0,
    };
    actual.plus_days(shift).map_or(false, |d| d == date)
}

/// Returns true if date is the nth occurrence of weekday in its month.
fn is_nth_weekday(date: Date, weekday: Weekday, n: u32) -> bool {
    date.weekday() == weekday && (date.day() - 1) / 7 + 1 == n
}

/// Returns true if date is the last occurrence of weekday in its month.
fn is_last_weekday(date: Date, weekday: Weekday) -> bool {
    date.weekday() == weekday
        && date
            .plus_days(7)
            .map_or(false, |next_week| next_week.month() != date.month())
}

/// Gregorian Easter Sunday.
pub(crate) fn easter_sunday(year: i32) -> Option<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u32, day as u32).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_no_holidays_and_sat_sun() {
        let saturday = date(2018, 6, 30);
        assert!(NoHolidays.is_business_day(saturday));
        assert!(!SatSun.is_business_day(saturday));
        assert!(SatSun.is_business_day(date(2018, 5, 28)));
    }

    #[test]
    fn test_usny_2018_holidays() {
        let holidays = [
            date(2018, 1, 1),
            date(2018, 1, 15),
            date(2018, 2, 19),
            date(2018, 5, 28),
            date(2018, 7, 4),
            date(2018, 9, 3),
            date(2018, 10, 8),
            date(2018, 11, 12),
            date(2018, 11, 22),
            date(2018, 12, 25),
        ];
        for h in holidays {
            assert!(Usny.is_holiday(h), "{} should be a USNY holiday", h);
        }
        // Good Friday and Juneteenth before 2022 are business days
        assert!(Usny.is_business_day(date(2018, 3, 30)));
        assert!(Usny.is_business_day(date(2018, 6, 19)));
        assert!(Usny.is_business_day(date(2018, 11, 9)));
    }

    #[test]
    fn test_usny_observance() {
        // Juneteenth 2022 fell on a Sunday
        assert!(Usny.is_holiday(date(2022, 6, 20)));
        // Christmas 2021 fell on a Saturday
        assert!(Usny.is_holiday(date(2021, 12, 24)));
        // New Year 2022 fell on a Saturday and is not moved
        assert!(Usny.is_business_day(date(2021, 12, 31)));
        // New Year 2017 fell on a Sunday
        assert!(Usny.is_holiday(date(2017, 1, 2)));
    }

    #[test]
    fn test_euta_holidays() {
        assert!(Euta.is_holiday(date(2018, 3, 30)));
        assert!(Euta.is_holiday(date(2018, 4, 2)));
        assert!(Euta.is_holiday(date(2018, 5, 1)));
        assert!(Euta.is_holiday(date(2018, 12, 26)));
        assert!(Euta.is_business_day(date(2018, 5, 28)));
    }

    #[test]
    fn test_easter_sunday() {
        assert_eq!(easter_sunday(2018), Some(date(2018, 4, 1)));
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
    }

    #[test]
    fn test_nth_and_last_weekday() {
        assert!(is_nth_weekday(date(2018, 1, 15), Weekday::Mon, 3));
        assert!(!is_nth_weekday(date(2018, 1, 8), Weekday::Mon, 3));
        assert!(is_last_weekday(date(2018, 5, 28), Weekday::Mon));
        assert!(!is_last_weekday(date(2018, 5, 21), Weekday::Mon));
    }
}
