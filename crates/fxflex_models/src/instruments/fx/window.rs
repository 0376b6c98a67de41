//! Observation windows of a window forward.

use std::fmt;

use fxflex_core::calendar::{BusinessDayAdjustment, CalendarError, ReferenceData};
use fxflex_core::types::{BusinessDayConvention, Date};

/// A single allowed observation date within the window.
///
/// Window dates order by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WindowDate(Date);

impl WindowDate {
    /// Wraps a date.
    #[inline]
    pub fn of(date: Date) -> Self {
        Self(date)
    }

    /// The observation date.
    #[inline]
    pub fn date(&self) -> Date {
        self.0
    }
}

impl From<Date> for WindowDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl fmt::Display for WindowDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The validated window specification: a date range or an explicit list.
///
/// # Examples
///
/// ```
/// use fxflex_core::calendar::{BusinessDayAdjustment, HolidayCalendarId, ReferenceData};
/// use fxflex_core::types::{BusinessDayConvention, Date};
/// use fxflex_models::instruments::fx::ExecutionWindow;
///
/// let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
/// let following =
///     BusinessDayAdjustment::new(BusinessDayConvention::Following, HolidayCalendarId::SAT_SUN);
///
/// // Friday to Tuesday: the weekend rolls onto Monday
/// let window = ExecutionWindow::period(date(2018, 6, 1), date(2018, 6, 5));
/// let dates = window.resolve(&following, &ReferenceData::standard()).unwrap();
/// assert_eq!(dates, vec![date(2018, 6, 1), date(2018, 6, 4)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionWindow {
    /// Every calendar day from `start` (inclusive) to `end` (exclusive).
    Period {
        /// First day of the period
        start: Date,
        /// Day after the last day of the period
        end: Date,
    },
    /// An explicit list of observation dates.
    Dates(Vec<WindowDate>),
}

impl ExecutionWindow {
    /// A half-open execution period.
    pub fn period(start: Date, end: Date) -> Self {
        ExecutionWindow::Period { start, end }
    }

    /// An explicit list of observation dates.
    pub fn dates(dates: impl IntoIterator<Item = Date>) -> Self {
        ExecutionWindow::Dates(dates.into_iter().map(WindowDate::of).collect())
    }

    /// Start of the execution period, if this is a period.
    pub fn execution_period_start(&self) -> Option<Date> {
        match self {
            ExecutionWindow::Period { start, .. } => Some(*start),
            ExecutionWindow::Dates(_) => None,
        }
    }

    /// End of the execution period, if this is a period.
    pub fn execution_period_end(&self) -> Option<Date> {
        match self {
            ExecutionWindow::Period { end, .. } => Some(*end),
            ExecutionWindow::Dates(_) => None,
        }
    }

    /// Explicit window dates, if this is a list.
    pub fn execution_period_dates(&self) -> Option<&[WindowDate]> {
        match self {
            ExecutionWindow::Period { .. } => None,
            ExecutionWindow::Dates(dates) => Some(dates),
        }
    }

    /// Expands the window into adjusted, ascending, duplicate-free dates.
    ///
    /// # Errors
    /// Returns a `CalendarError` if the adjustment calendar cannot be resolved.
    pub fn resolve(
        &self,
        adjustment: &BusinessDayAdjustment,
        ref_data: &ReferenceData,
    ) -> Result<Vec<Date>, CalendarError> {
        let calendar = match adjustment.convention() {
            BusinessDayConvention::Unadjusted => None,
            _ => Some(ref_data.holiday_calendar(adjustment.calendar())?),
        };
        let adjust = |date: Date| -> Result<Date, CalendarError> {
            match &calendar {
                Some(calendar) => adjustment.adjust_with(date, calendar.as_ref()),
                None => Ok(date),
            }
        };

        let mut dates = match self {
            ExecutionWindow::Period { start, end } => {
                start.days_until(*end).map(adjust).collect::<Result<Vec<_>, _>>()?
            }
            ExecutionWindow::Dates(dates) => dates
                .iter()
                .map(|d| adjust(d.date()))
                .collect::<Result<Vec<_>, _>>()?,
        };
        dates.sort_unstable();
        dates.dedup();
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxflex_core::calendar::HolidayCalendarId;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn usny_following() -> BusinessDayAdjustment {
        BusinessDayAdjustment::new(BusinessDayConvention::Following, HolidayCalendarId::USNY)
    }

    #[test]
    fn test_window_date_ordering() {
        let mut dates = vec![
            WindowDate::of(date(2018, 6, 30)),
            WindowDate::of(date(2018, 3, 30)),
        ];
        dates.sort();
        assert_eq!(dates[0].date(), date(2018, 3, 30));
        assert_eq!(format!("{}", dates[1]), "2018-06-30");
    }

    #[test]
    fn test_period_excludes_end() {
        let window = ExecutionWindow::period(date(2018, 6, 25), date(2018, 6, 29));
        let dates = window
            .resolve(&usny_following(), &ReferenceData::standard())
            .unwrap();
        assert_eq!(dates.len(), 4);
        assert_eq!(*dates.last().unwrap(), date(2018, 6, 28));
    }

    #[test]
    fn test_period_collapsing_to_single_date() {
        // Saturday and Sunday both roll onto Monday
        let window = ExecutionWindow::period(date(2018, 6, 30), date(2018, 7, 2));
        let dates = window
            .resolve(&usny_following(), &ReferenceData::standard())
            .unwrap();
        assert_eq!(dates, vec![date(2018, 7, 2)]);
    }

    #[test]
    fn test_explicit_dates_adjusted_and_deduplicated() {
        let window = ExecutionWindow::dates([
            date(2018, 5, 26),
            date(2018, 5, 28),
            date(2018, 5, 29),
        ]);
        let dates = window
            .resolve(&usny_following(), &ReferenceData::standard())
            .unwrap();
        assert_eq!(dates, vec![date(2018, 5, 29)]);
    }

    #[test]
    fn test_unadjusted_never_resolves_calendar() {
        let adjustment =
            BusinessDayAdjustment::new(BusinessDayConvention::Unadjusted, HolidayCalendarId::GBLO);
        let window = ExecutionWindow::dates([date(2018, 6, 30)]);
        let dates = window.resolve(&adjustment, &ReferenceData::empty()).unwrap();
        assert_eq!(dates, vec![date(2018, 6, 30)]);
    }

    #[test]
    fn test_unknown_calendar_fails() {
        let adjustment =
            BusinessDayAdjustment::new(BusinessDayConvention::Following, HolidayCalendarId::JPTO);
        let window = ExecutionWindow::dates([date(2018, 6, 30)]);
        assert!(matches!(
            window.resolve(&adjustment, &ReferenceData::standard()),
            Err(CalendarError::UnknownCalendar(_))
        ));
    }

    #[test]
    fn test_accessors() {
        let period = ExecutionWindow::period(date(2018, 3, 30), date(2018, 6, 30));
        assert_eq!(period.execution_period_start(), Some(date(2018, 3, 30)));
        assert_eq!(period.execution_period_end(), Some(date(2018, 6, 30)));
        assert!(period.execution_period_dates().is_none());

        let list = ExecutionWindow::dates([date(2018, 3, 30)]);
        assert_eq!(list.execution_period_dates().unwrap().len(), 1);
        assert!(list.execution_period_start().is_none());
    }
}
