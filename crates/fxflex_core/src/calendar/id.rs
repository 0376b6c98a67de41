//! Holiday calendar identifiers.

use std::borrow::Cow;
use std::fmt;

/// Identifier of a holiday calendar, resolved through [`super::ReferenceData`].
///
/// Combined calendars are written with `+`, e.g. `USNY+EUTA`; the parts are
/// kept sorted and unique so equal combinations compare equal.
///
/// # Examples
///
/// ```
/// use fxflex_core::calendar::HolidayCalendarId;
///
/// let joint = HolidayCalendarId::USNY.combined_with(&HolidayCalendarId::EUTA);
/// assert_eq!(joint.name(), "EUTA+USNY");
/// assert_eq!(joint, HolidayCalendarId::EUTA.combined_with(&HolidayCalendarId::USNY));
/// assert_eq!(
///     HolidayCalendarId::NO_HOLIDAYS.combined_with(&HolidayCalendarId::USNY),
///     HolidayCalendarId::USNY
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HolidayCalendarId(Cow<'static, str>);

impl HolidayCalendarId {
    /// Every day is a business day.
    pub const NO_HOLIDAYS: Self = Self(Cow::Borrowed("NoHolidays"));
    /// Saturday/Sunday weekends only.
    pub const SAT_SUN: Self = Self(Cow::Borrowed("SatSun"));
    /// New York.
    pub const USNY: Self = Self(Cow::Borrowed("USNY"));
    /// TARGET (euro settlement).
    pub const EUTA: Self = Self(Cow::Borrowed("EUTA"));
    /// London.
    pub const GBLO: Self = Self(Cow::Borrowed("GBLO"));
    /// Tokyo.
    pub const JPTO: Self = Self(Cow::Borrowed("JPTO"));
    /// Hong Kong.
    pub const HKHK: Self = Self(Cow::Borrowed("HKHK"));
    /// Mumbai.
    pub const INMU: Self = Self(Cow::Borrowed("INMU"));
    /// Seoul.
    pub const KRSE: Self = Self(Cow::Borrowed("KRSE"));
    /// Kuala Lumpur.
    pub const MYKL: Self = Self(Cow::Borrowed("MYKL"));

    /// Creates an identifier from a name.
    ///
    /// Names containing `+` are normalised into a combined identifier.
    pub fn of(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.contains('+') {
            let parts: Vec<HolidayCalendarId> = name
                .split('+')
                .map(|part| Self(Cow::Owned(part.trim().to_string())))
                .collect();
            Self::join(parts)
        } else {
            Self(Cow::Owned(name.trim().to_string()))
        }
    }

    /// Returns the identifier name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if this identifier combines several calendars.
    pub fn is_combined(&self) -> bool {
        self.0.contains('+')
    }

    /// Individual calendar identifiers making up this one.
    pub fn parts(&self) -> Vec<HolidayCalendarId> {
        self.0
            .split('+')
            .map(|part| Self(Cow::Owned(part.to_string())))
            .collect()
    }

    /// Combines two identifiers into one whose holidays are the union.
    pub fn combined_with(&self, other: &HolidayCalendarId) -> Self {
        let mut parts = self.parts();
        parts.extend(other.parts());
        Self::join(parts)
    }

    fn join(mut parts: Vec<HolidayCalendarId>) -> Self {
        parts.retain(|p| *p != Self::NO_HOLIDAYS && !p.name().is_empty());
        parts.sort();
        parts.dedup();
        match parts.len() {
            0 => Self::NO_HOLIDAYS,
            1 => parts.remove(0),
            _ => Self(Cow::Owned(
                parts
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join("+"),
            )),
        }
    }
}

impl fmt::Display for HolidayCalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::HolidayCalendarId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for HolidayCalendarId {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for HolidayCalendarId {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Ok(HolidayCalendarId::of(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_normalises_combined_names() {
        let id = HolidayCalendarId::of("USNY + GBLO+USNY");
        assert_eq!(id.name(), "GBLO+USNY");
        assert!(id.is_combined());
        assert_eq!(id.parts(), vec![HolidayCalendarId::GBLO, HolidayCalendarId::USNY]);
    }

    #[test]
    fn test_owned_and_borrowed_compare_equal() {
        assert_eq!(HolidayCalendarId::of("USNY"), HolidayCalendarId::USNY);
        assert!(!HolidayCalendarId::USNY.is_combined());
    }

    #[test]
    fn test_combined_with_no_holidays() {
        let id = HolidayCalendarId::NO_HOLIDAYS.combined_with(&HolidayCalendarId::NO_HOLIDAYS);
        assert_eq!(id, HolidayCalendarId::NO_HOLIDAYS);
    }
}
