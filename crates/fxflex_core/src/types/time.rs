//! Dates, day counts and business day conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Year fraction conventions used by rates providers
//! - `BusinessDayConvention`: Rolling rules applied by business day adjustments
//!
//! # Examples
//!
//! ```
//! use fxflex_core::types::time::{Date, DayCountConvention};
//!
//! let valuation = Date::from_ymd(2018, 1, 1).unwrap();
//! let payment = Date::from_ymd(2018, 6, 30).unwrap();
//!
//! let t = DayCountConvention::Act365Fixed.year_fraction(valuation, payment);
//! assert!((t - 180.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use fxflex_core::types::time::Date;
///
/// let date = Date::from_ymd(2018, 6, 30).unwrap();
/// let parsed: Date = "2018-06-30".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2018, 3, 30).unwrap();
/// assert_eq!(date - start, 92);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the components do not form a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Errors
    /// Returns `DateError::ParseError` if the string is not a valid date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    #[inline]
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true for Saturday and Sunday.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Shifts the date by a signed number of calendar days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is outside chrono's supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxflex_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2018, 6, 30).unwrap();
    /// assert_eq!(date.plus_days(2).unwrap(), Date::from_ymd(2018, 7, 2).unwrap());
    /// assert_eq!(date.plus_days(-30).unwrap(), Date::from_ymd(2018, 5, 31).unwrap());
    /// ```
    pub fn plus_days(self, days: i64) -> Result<Self, DateError> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or(DateError::OutOfRange { date: self, days })
    }

    /// Iterates every calendar day in the half-open range `[self, end)`.
    ///
    /// Returns an empty iterator if `end <= self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxflex_core::types::time::Date;
    ///
    /// let start = Date::from_ymd(2018, 3, 30).unwrap();
    /// let end = Date::from_ymd(2018, 4, 2).unwrap();
    /// let days: Vec<Date> = start.days_until(end).collect();
    /// assert_eq!(days.len(), 3);
    /// assert_eq!(days[2], Date::from_ymd(2018, 4, 1).unwrap());
    /// ```
    pub fn days_until(self, end: Date) -> impl Iterator<Item = Date> {
        self.0
            .iter_days()
            .take_while(move |day| *day < end.0)
            .map(Date)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of calendar days from `rhs` to `self`.
    fn sub(self, rhs: Self) -> Self::Output {
        (self.0 - rhs.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count convention used to turn dates into curve times.
///
/// # Examples
///
/// ```
/// use fxflex_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2018, 1, 1).unwrap();
/// let end = Date::from_ymd(2019, 1, 1).unwrap();
/// assert_eq!(DayCountConvention::Act365Fixed.year_fraction(start, end), 1.0);
/// assert!(DayCountConvention::Act360.year_fraction(start, end) > 1.0);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual days divided by 365.
    #[default]
    Act365Fixed,
    /// Actual days divided by 360.
    Act360,
}

impl DayCountConvention {
    /// Returns the market name of the convention.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Act360 => "ACT/360",
        }
    }

    /// Signed year fraction between two dates.
    ///
    /// Negative when `end` is before `start`.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = (end - start) as f64;
        match self {
            DayCountConvention::Act365Fixed => days / 365.0,
            DayCountConvention::Act360 => days / 360.0,
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = DateError;

    /// Parses "ACT/365F", "Act365", "A365F", "ACT/360", "A360" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365F" | "ACT365" | "ACTUAL365FIXED" | "A365F" | "A365" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Act360),
            _ => Err(DateError::UnknownConvention(s.to_string())),
        }
    }
}

/// Business Day Convention for date adjustments.
///
/// Defines how to roll dates that fall on non-business days. The rolling
/// itself is performed by [`crate::calendar::BusinessDayAdjustment`].
///
/// # Examples
///
/// ```
/// use fxflex_core::types::time::BusinessDayConvention;
///
/// let conv: BusinessDayConvention = "MF".parse().unwrap();
/// assert_eq!(conv, BusinessDayConvention::ModifiedFollowing);
/// assert_eq!(conv.name(), "Modified Following");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Move to the next business day.
    Following,

    /// Move to the next business day, unless that crosses a month boundary,
    /// in which case move to the previous business day.
    ModifiedFollowing,

    /// Move to the previous business day.
    Preceding,

    /// Move to the previous business day, unless that crosses a month
    /// boundary, in which case move to the next business day.
    ModifiedPreceding,

    /// Do not adjust the date.
    Unadjusted,
}

impl BusinessDayConvention {
    /// Returns the standard name for this convention.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        }
    }

    /// Returns a short code for this convention.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Unadjusted => "U",
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = DateError;

    /// Parses full names and short codes (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "unadjusted" | "u" | "none" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(DateError::UnknownConvention(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{BusinessDayConvention, DayCountConvention};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for BusinessDayConvention {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for BusinessDayConvention {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            BusinessDayConvention::from_str(&s).map_err(de::Error::custom)
        }
    }

    impl Serialize for DayCountConvention {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}
