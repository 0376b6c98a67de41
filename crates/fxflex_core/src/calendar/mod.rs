//! Holiday calendars, business day adjustment and reference data.
//!
//! This module provides:
//! - [`HolidayCalendar`]: the business day predicate and date rolling
//! - [`HolidayCalendarId`]: named calendar identifiers, combinable with `+`
//! - Built-in calendars: [`NoHolidays`], [`SatSun`], [`Usny`], [`Euta`]
//! - [`ExplicitHolidayCalendar`] and [`JointCalendar`] for user-supplied data
//! - [`ReferenceData`]: resolves identifiers to calendars
//! - [`BusinessDayAdjustment`]: a convention applied against a calendar
//!
//! # Examples
//!
//! ```
//! use fxflex_core::calendar::{HolidayCalendar, Usny};
//! use fxflex_core::types::Date;
//!
//! let cal = Usny;
//! let july_fourth = Date::from_ymd(2018, 7, 4).unwrap();
//! assert!(!cal.is_business_day(july_fourth));
//! assert_eq!(cal.next_or_same(july_fourth).unwrap(), Date::from_ymd(2018, 7, 5).unwrap());
//! ```

mod adjustment;
mod builtin;
mod error;
mod explicit;
mod id;
mod reference_data;

pub use adjustment::BusinessDayAdjustment;
pub use builtin::{Euta, NoHolidays, SatSun, Usny};
pub use error::CalendarError;
pub use explicit::{ExplicitHolidayCalendar, JointCalendar};
pub use id::HolidayCalendarId;
pub use reference_data::ReferenceData;

use crate::types::Date;

/// Longest run of consecutive non-business days a calendar may contain.
pub const MAX_HOLIDAY_RUN: i64 = 366;

/// Trait for business day calendars.
///
/// Implementations are immutable and shared across threads.
pub trait HolidayCalendar: Send + Sync {
    /// Returns the calendar identifier name, e.g. "USNY".
    fn name(&self) -> &str;

    /// Returns true if the date is a weekend day or a holiday.
    fn is_holiday(&self, date: Date) -> bool;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_holiday(date)
    }

    /// Returns the first business day on or after `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::NoBusinessDay` if no business day exists
    /// within [`MAX_HOLIDAY_RUN`] days.
    fn next_or_same(&self, date: Date) -> Result<Date, CalendarError> {
        roll(self, date, 1)
    }

    /// Returns the last business day on or before `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::NoBusinessDay` if no business day exists
    /// within [`MAX_HOLIDAY_RUN`] days.
    fn previous_or_same(&self, date: Date) -> Result<Date, CalendarError> {
        roll(self, date, -1)
    }
}

fn roll<C: HolidayCalendar + ?Sized>(
    calendar: &C,
    date: Date,
    step: i64,
) -> Result<Date, CalendarError> {
    let mut current = date;
    for _ in 0..=MAX_HOLIDAY_RUN {
        if calendar.is_business_day(current) {
            return Ok(current);
        }
        current = current.plus_days(step)?;
    }
    Err(CalendarError::NoBusinessDay {
        calendar: calendar.name().to_string(),
        date,
    })
}
