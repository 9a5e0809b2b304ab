// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-parameterised date triple.
//!
//! [`Date<C>`] stores a `(year, month, day)` triple whose *meaning* is
//! determined by the compile-time marker `C: Calendar`. Conversion between
//! calendars always routes through the [`JulianDayNumber`]:
//!
//! ```text
//! Date<A> → JDN → Date<B>
//! ```
//!
//! [`Date::new`] stores whatever it is given. A triple such as
//! `Date::<Gregorian>::new(2023, 2, 29)` is kept verbatim and denotes the day
//! its JDN lands on (1 March 2023); [`Date::normalized`] makes that explicit
//! and [`Date::try_new`] refuses it.

use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{Calendar, Gregorian, Iranian};
use crate::error::DateError;
use crate::jdn::JulianDayNumber;

/// A date in calendar `C`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date<C: Calendar> {
    year: i32,
    month: i32,
    day: i32,
    _calendar: PhantomData<C>,
}

/// A proleptic Gregorian date.
pub type GregorianDate = Date<Gregorian>;

/// An Iranian (Solar Hijri) date.
pub type IranianDate = Date<Iranian>;

impl<C: Calendar> Date<C> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw triple without validation.
    #[inline]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            _calendar: PhantomData,
        }
    }

    /// Create from a triple, rejecting months outside `1..=12` and days
    /// beyond the length of the month in that year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] describing the first invalid component.
    ///
    /// # Example
    ///
    /// ```
    /// use tarikh::{DateError, IranianDate};
    ///
    /// assert!(IranianDate::try_new(1403, 12, 30).is_ok());
    /// assert_eq!(
    ///     IranianDate::try_new(1404, 12, 30),
    ///     Err(DateError::InvalidDay { day: 30, month: 12, max_day: 29 })
    /// );
    /// ```
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        let max_day = C::month_length(year, month).ok_or(DateError::InvalidMonth { month })?;
        if day < 1 || day > i32::from(max_day) {
            return Err(DateError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self::new(year, month, day))
    }

    /// The date in this calendar on which `jdn` falls.
    #[inline]
    pub fn from_jdn(jdn: JulianDayNumber) -> Self {
        C::from_jdn(jdn)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// `(year, month, day)` as a tuple.
    #[inline]
    pub const fn ymd(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// Julian Day Number of this date.
    #[inline]
    pub fn jdn(&self) -> JulianDayNumber {
        C::to_jdn(self.year, self.month, self.day)
    }

    /// `true` if the month is `1..=12` and the day exists in that month.
    pub fn is_valid(&self) -> bool {
        C::month_length(self.year, self.month)
            .is_some_and(|max| self.day >= 1 && self.day <= i32::from(max))
    }

    /// The canonical triple for the same day, with any overflowing month or
    /// day rolled into the following month or year.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::from_jdn(self.jdn())
    }

    // ── cross-calendar conversion ─────────────────────────────────────

    /// Convert this date to another calendar.
    #[inline]
    pub fn to<T: Calendar>(&self) -> Date<T> {
        T::from_jdn(self.jdn())
    }
}

impl<C: Calendar> std::fmt::Display for Date<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl<C: Calendar> From<Date<C>> for JulianDayNumber {
    #[inline]
    fn from(date: Date<C>) -> Self {
        date.jdn()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for Date<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Date", 3)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, C: Calendar> Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: i32,
            day: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.year, raw.month, raw.day))
    }
}
