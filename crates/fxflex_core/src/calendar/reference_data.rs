//! Reference data: the registry that resolves calendar identifiers.

use std::collections::HashMap;
use std::sync::Arc;

use super::{
    CalendarError, Euta, HolidayCalendar, HolidayCalendarId, JointCalendar, NoHolidays, SatSun,
    Usny,
};

/// Immutable lookup from [`HolidayCalendarId`] to calendar.
///
/// Combined identifiers resolve to a [`JointCalendar`] of their parts.
/// Cloning shares the registered calendars.
///
/// # Examples
///
/// ```
/// use fxflex_core::calendar::{
///     ExplicitHolidayCalendar, HolidayCalendar, HolidayCalendarId, ReferenceData,
/// };
/// use fxflex_core::types::Date;
///
/// let diwali = Date::from_ymd(2018, 11, 7).unwrap();
/// let ref_data = ReferenceData::standard()
///     .with_calendar(HolidayCalendarId::INMU, ExplicitHolidayCalendar::sat_sun("INMU", [diwali]));
///
/// let joint = HolidayCalendarId::USNY.combined_with(&HolidayCalendarId::INMU);
/// let calendar = ref_data.holiday_calendar(&joint).unwrap();
/// assert!(calendar.is_holiday(diwali));
/// assert!(ref_data.holiday_calendar(&HolidayCalendarId::JPTO).is_err());
/// ```
#[derive(Clone, Default)]
pub struct ReferenceData {
    calendars: HashMap<HolidayCalendarId, Arc<dyn HolidayCalendar>>,
}

impl ReferenceData {
    /// Reference data with no calendars registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reference data with the built-in calendars: NoHolidays, SatSun, USNY and EUTA.
    pub fn standard() -> Self {
        Self::empty()
            .with_calendar(HolidayCalendarId::NO_HOLIDAYS, NoHolidays)
            .with_calendar(HolidayCalendarId::SAT_SUN, SatSun)
            .with_calendar(HolidayCalendarId::USNY, Usny)
            .with_calendar(HolidayCalendarId::EUTA, Euta)
    }

    /// Registers or replaces a calendar.
    pub fn with_calendar<C>(mut self, id: HolidayCalendarId, calendar: C) -> Self
    where
        C: HolidayCalendar + 'static,
    {
        self.calendars.insert(id, Arc::new(calendar));
        self
    }

    /// Returns true if the identifier (or every part of a combined one) is registered.
    pub fn contains(&self, id: &HolidayCalendarId) -> bool {
        *id == HolidayCalendarId::NO_HOLIDAYS
            || id.parts().iter().all(|part| self.calendars.contains_key(part))
    }

    /// Resolves an identifier.
    ///
    /// `NoHolidays` always resolves, even when not registered.
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownCalendar` naming the first unregistered part.
    pub fn holiday_calendar(
        &self,
        id: &HolidayCalendarId,
    ) -> Result<Arc<dyn HolidayCalendar>, CalendarError> {
        if !id.is_combined() {
            return self.lookup(id);
        }
        let members = id
            .parts()
            .iter()
            .map(|part| self.lookup(part))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Arc::new(JointCalendar::new(members)))
    }

    fn lookup(&self, id: &HolidayCalendarId) -> Result<Arc<dyn HolidayCalendar>, CalendarError> {
        match self.calendars.get(id) {
            Some(calendar) => Ok(Arc::clone(calendar)),
            None if *id == HolidayCalendarId::NO_HOLIDAYS => Ok(Arc::new(NoHolidays)),
            None => Err(CalendarError::UnknownCalendar(id.name().to_string())),
        }
    }
}

impl std::fmt::Debug for ReferenceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.calendars.keys().map(|id| id.name()).collect();
        ids.sort_unstable();
        f.debug_struct("ReferenceData").field("calendars", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Date;

    #[test]
    fn test_standard_contains_builtins() {
        let ref_data = ReferenceData::standard();
        for id in [
            HolidayCalendarId::NO_HOLIDAYS,
            HolidayCalendarId::SAT_SUN,
            HolidayCalendarId::USNY,
            HolidayCalendarId::EUTA,
        ] {
            assert!(ref_data.contains(&id), "{} missing", id);
            assert_eq!(ref_data.holiday_calendar(&id).unwrap().name(), id.name());
        }
        assert!(!ref_data.contains(&HolidayCalendarId::GBLO));
    }

    #[test]
    fn test_empty_still_resolves_no_holidays() {
        let ref_data = ReferenceData::empty();
        let cal = ref_data
            .holiday_calendar(&HolidayCalendarId::NO_HOLIDAYS)
            .unwrap();
        assert!(cal.is_business_day(Date::from_ymd(2018, 6, 30).unwrap()));
    }

    #[test]
    fn test_unknown_part_of_combined_id() {
        let ref_data = ReferenceData::standard();
        let id = HolidayCalendarId::USNY.combined_with(&HolidayCalendarId::HKHK);
        match ref_data.holiday_calendar(&id) {
            Err(CalendarError::UnknownCalendar(name)) => assert_eq!(name, "HKHK"),
            Err(other) => panic!("Expected UnknownCalendar, got {:?}", other),
            Ok(_) => panic!("Expected UnknownCalendar"),
        }
    }

    #[test]
    fn test_with_calendar_replaces() {
        let ref_data = ReferenceData::standard().with_calendar(HolidayCalendarId::USNY, SatSun);
        let cal = ref_data.holiday_calendar(&HolidayCalendarId::USNY).unwrap();
        assert!(cal.is_business_day(Date::from_ymd(2018, 5, 28).unwrap()));
    }
}
