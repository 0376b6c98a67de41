//! Data-driven and combined calendars.

use chrono::Weekday;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::HolidayCalendar;
use crate::types::Date;

/// A calendar defined by an explicit list of holidays and weekend days.
///
/// # Examples
///
/// ```
/// use fxflex_core::calendar::{ExplicitHolidayCalendar, HolidayCalendar};
/// use fxflex_core::types::Date;
///
/// let chuseok = Date::from_ymd(2018, 9, 24).unwrap();
/// let cal = ExplicitHolidayCalendar::sat_sun("KRSE", [chuseok]);
/// assert!(cal.is_holiday(chuseok));
/// assert!(cal.is_business_day(Date::from_ymd(2018, 9, 27).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct ExplicitHolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
    weekend: Vec<Weekday>,
}

impl ExplicitHolidayCalendar {
    /// Creates a calendar with custom weekend days.
    pub fn new(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = Date>,
        weekend: impl IntoIterator<Item = Weekday>,
    ) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
            weekend: weekend.into_iter().collect(),
        }
    }

    /// Creates a calendar with a Saturday/Sunday weekend.
    pub fn sat_sun(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self::new(name, holidays, [Weekday::Sat, Weekday::Sun])
    }

    /// Number of listed holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl HolidayCalendar for ExplicitHolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.weekend.contains(&date.weekday()) || self.holidays.contains(&date)
    }
}

/// A calendar whose holidays are the union of its members' holidays.
#[derive(Clone)]
pub struct JointCalendar {
    name: String,
    calendars: Vec<Arc<dyn HolidayCalendar>>,
}

impl JointCalendar {
    /// Combines calendars; the name joins the members' names with `+`.
    pub fn new(calendars: Vec<Arc<dyn HolidayCalendar>>) -> Self {
        let name = calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("+");
        Self { name, calendars }
    }
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar").field("name", &self.name).finish()
    }
}

impl HolidayCalendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.calendars.iter().any(|cal| cal.is_holiday(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Euta, Usny};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_custom_weekend() {
        let cal = ExplicitHolidayCalendar::new("FRISAT", [], [Weekday::Fri, Weekday::Sat]);
        assert!(cal.is_holiday(date(2018, 6, 29)));
        assert!(cal.is_business_day(date(2018, 7, 1)));
        assert_eq!(cal.holiday_count(), 0);
    }

    #[test]
    fn test_joint_calendar_is_union() {
        let joint = JointCalendar::new(vec![Arc::new(Usny), Arc::new(Euta)]);
        assert_eq!(joint.name(), "USNY+EUTA");
        // Memorial Day (USNY only) and Good Friday (EUTA only)
        assert!(joint.is_holiday(date(2018, 5, 28)));
        assert!(joint.is_holiday(date(2018, 3, 30)));
        assert!(joint.is_business_day(date(2018, 3, 29)));
    }

    #[test]
    fn test_roll_over_long_holiday_run() {
        let holidays = date(2018, 12, 24)
            .days_until(date(2019, 1, 3))
            .collect::<Vec<_>>();
        let cal = ExplicitHolidayCalendar::sat_sun("XMAS", holidays);
        assert_eq!(cal.next_or_same(date(2018, 12, 24)).unwrap(), date(2019, 1, 3));
        assert_eq!(cal.previous_or_same(date(2019, 1, 1)).unwrap(), date(2018, 12, 21));
    }

    #[test]
    fn test_roll_fails_without_business_days() {
        let all_week = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        let cal = ExplicitHolidayCalendar::new("CLOSED", [], all_week);
        assert!(cal.next_or_same(date(2018, 1, 1)).is_err());
    }
}
