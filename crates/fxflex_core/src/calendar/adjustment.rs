//! Business day adjustment: a rolling convention bound to a calendar.

use std::fmt;

use super::{CalendarError, HolidayCalendar, HolidayCalendarId, ReferenceData};
use crate::types::{BusinessDayConvention, Date};

/// A business day convention applied against a holiday calendar.
///
/// # Examples
///
/// ```
/// use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId, ReferenceData};
/// use fxflex_core::types::{BusinessDayConvention, Date};
///
/// let ref_data = ReferenceData::standard();
/// let following =
///     BusinessDayAdjustment::new(BusinessDayConvention::Following, HolidayCalendarId::USNY);
///
/// let saturday = Date::from_ymd(2018, 6, 30).unwrap();
/// assert_eq!(following.adjust(saturday, &ref_data).unwrap(), Date::from_ymd(2018, 7, 2).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusinessDayAdjustment {
    convention: BusinessDayConvention,
    calendar: HolidayCalendarId,
}

impl BusinessDayAdjustment {
    /// No adjustment at all.
    pub const NONE: Self = Self {
        convention: BusinessDayConvention::Unadjusted,
        calendar: HolidayCalendarId::NO_HOLIDAYS,
    };

    /// Creates an adjustment.
    pub fn new(convention: BusinessDayConvention, calendar: HolidayCalendarId) -> Self {
        Self {
            convention,
            calendar,
        }
    }

    /// The rolling convention.
    #[inline]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// The calendar identifier.
    #[inline]
    pub fn calendar(&self) -> &HolidayCalendarId {
        &self.calendar
    }

    /// Resolves the calendar and adjusts a single date.
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownCalendar` if the calendar is not in the
    /// reference data, or a rolling error from the calendar.
    pub fn adjust(&self, date: Date, ref_data: &ReferenceData) -> Result<Date, CalendarError> {
        if self.convention == BusinessDayConvention::Unadjusted {
            return Ok(date);
        }
        let calendar = ref_data.holiday_calendar(&self.calendar)?;
        self.adjust_with(date, calendar.as_ref())
    }

    /// Adjusts a date against an already resolved calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::NoBusinessDay` if the calendar never reaches a business day.
    pub fn adjust_with(
        &self,
        date: Date,
        calendar: &dyn HolidayCalendar,
    ) -> Result<Date, CalendarError> {
        if calendar.is_business_day(date) {
            return Ok(date);
        }
        match self.convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => calendar.next_or_same(date),
            BusinessDayConvention::Preceding => calendar.previous_or_same(date),
            BusinessDayConvention::ModifiedFollowing => {
                let next = calendar.next_or_same(date)?;
                if next.month() != date.month() {
                    calendar.previous_or_same(date)
                } else {
                    Ok(next)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let previous = calendar.previous_or_same(date)?;
                if previous.month() != date.month() {
                    calendar.next_or_same(date)
                } else {
                    Ok(previous)
                }
            }
        }
    }
}

impl Default for BusinessDayAdjustment {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for BusinessDayAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            return write!(f, "None");
        }
        write!(f, "{} using calendar {}", self.convention, self.calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Usny;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn adjustment(convention: BusinessDayConvention) -> BusinessDayAdjustment {
        BusinessDayAdjustment::new(convention, HolidayCalendarId::USNY)
    }

    #[test]
    fn test_business_day_unchanged() {
        let ref_data = ReferenceData::standard();
        let d = date(2018, 6, 29);
        for conv in [
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
        ] {
            assert_eq!(adjustment(conv).adjust(d, &ref_data).unwrap(), d);
        }
    }

    #[test]
    fn test_following_and_preceding_over_holiday() {
        let ref_data = ReferenceData::standard();
        let memorial = date(2018, 5, 28);
        assert_eq!(
            adjustment(BusinessDayConvention::Following)
                .adjust(memorial, &ref_data)
                .unwrap(),
            date(2018, 5, 29)
        );
        assert_eq!(
            adjustment(BusinessDayConvention::Preceding)
                .adjust(memorial, &ref_data)
                .unwrap(),
            date(2018, 5, 25)
        );
    }

    #[test]
    fn test_modified_following_at_month_end() {
        // Saturday 2018-06-30 would roll into July
        let d = date(2018, 6, 30);
        let adj = adjustment(BusinessDayConvention::ModifiedFollowing);
        assert_eq!(adj.adjust_with(d, &Usny).unwrap(), date(2018, 6, 29));
    }

    #[test]
    fn test_modified_preceding_at_month_start() {
        // Sunday 2018-07-01 would roll into June
        let d = date(2018, 7, 1);
        let adj = adjustment(BusinessDayConvention::ModifiedPreceding);
        assert_eq!(adj.adjust_with(d, &Usny).unwrap(), date(2018, 7, 2));
    }

    #[test]
    fn test_none_never_touches_calendar() {
        let empty = ReferenceData::empty();
        let saturday = date(2018, 6, 30);
        assert_eq!(BusinessDayAdjustment::NONE.adjust(saturday, &empty).unwrap(), saturday);
        let unknown = BusinessDayAdjustment::new(
            BusinessDayConvention::Unadjusted,
            HolidayCalendarId::JPTO,
        );
        assert_eq!(unknown.adjust(saturday, &empty).unwrap(), saturday);
    }

    #[test]
    fn test_unknown_calendar_fails() {
        let adj = BusinessDayAdjustment::new(
            BusinessDayConvention::Following,
            HolidayCalendarId::GBLO,
        );
        match adj.adjust(date(2018, 6, 30), &ReferenceData::standard()) {
            Err(CalendarError::UnknownCalendar(name)) => assert_eq!(name, "GBLO"),
            other => panic!("Expected UnknownCalendar, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BusinessDayAdjustment::NONE.to_string(), "None");
        assert_eq!(
            adjustment(BusinessDayConvention::Following).to_string(),
            "Following using calendar USNY"
        );
    }
}
