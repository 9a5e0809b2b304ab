// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day Number — the calendar-agnostic day index.
//!
//! [`JulianDayNumber`] is the single source of truth for "which day this is".
//! Every calendar in the crate converts *to* and *from* it and never to one
//! another directly, so two representations of the same day cannot disagree.
//!
//! The number is a plain signed integer: JDN 0 is Monday, 24 November 4714 BC
//! (proleptic Gregorian), and JDN 2 451 545 is Saturday, 1 January 2000.
//! It carries no time of day; see [`JulianDayNumber::julian_date`] for the
//! bridge to the continuous Julian Date used by astronomical code.

use chrono::{Datelike, NaiveDate};
use qtty::Days;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::gregorian::{civil_from_jdn, gregorian_to_jdn};
use crate::names::Weekday;

/// An integer count of days since the Julian Period epoch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    /// 1970-01-01, the Unix epoch day.
    pub const UNIX_EPOCH: Self = Self::new(2_440_588);

    /// 2000-01-01 (the civil day of J2000.0).
    pub const J2000: Self = Self::new(2_451_545);

    /// 1 March −100 100, the first day the Gregorian formulas invert exactly.
    pub const MIN_SUPPORTED: Self = Self::new(-34_839_655);

    /// 31 December of Gregorian year `i32::MAX`.
    pub const MAX_SUPPORTED: Self = Self::new(784_354_017_364);

    /// Milliseconds in one civil day.
    const MILLIS_PER_DAY: i64 = 86_400_000;

    // ── constructors ──────────────────────────────────────────────────

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The day containing the continuous Julian Date `jd`.
    ///
    /// Julian Dates start at noon, so the civil day of `jd` is
    /// `floor(jd + 0.5)`.
    #[inline]
    pub fn from_julian_date(jd: Days) -> Self {
        Self((jd.value() + 0.5).floor() as i64)
    }

    /// The UTC day containing the instant `millis` milliseconds after the
    /// Unix epoch. Instants before the epoch round towards the earlier day.
    #[inline]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(Self::UNIX_EPOCH.0 + millis.div_euclid(Self::MILLIS_PER_DAY))
    }

    /// The JDN of a `chrono` calendar date.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        gregorian_to_jdn(date.year(), date.month() as i32, date.day() as i32)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Whether this day lies in
    /// [`MIN_SUPPORTED`](Self::MIN_SUPPORTED) ..= [`MAX_SUPPORTED`](Self::MAX_SUPPORTED),
    /// where both calendars can name it with `i32` fields.
    #[inline]
    pub const fn is_supported(&self) -> bool {
        self.0 >= Self::MIN_SUPPORTED.0 && self.0 <= Self::MAX_SUPPORTED.0
    }

    /// The nearest supported day.
    ///
    /// Returns `self` unchanged when it is already supported.
    pub fn clamp_supported(self) -> Self {
        if self.is_supported() {
            return self;
        }
        let clamped = self.clamp(Self::MIN_SUPPORTED, Self::MAX_SUPPORTED);
        debug!(
            jdn = self.0,
            clamped = clamped.0,
            "JDN outside the supported range"
        );
        clamped
    }

    /// Continuous Julian Date at noon of this day.
    ///
    /// Noon is where the Julian Date and the JDN coincide numerically.
    #[inline]
    pub fn julian_date(&self) -> Days {
        Days::new(self.0 as f64)
    }

    /// Day of the week as `0..=6`, where `0` is Monday and `6` is Sunday.
    ///
    /// Negative JDNs use Euclidean remainder, so the sequence never breaks
    /// across JDN 0.
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        self.0.rem_euclid(7) as u8
    }

    /// Day of the week as a [`Weekday`].
    #[inline]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(self.day_of_week())
    }

    /// Convert to a `chrono` date.
    ///
    /// Returns `None` if the day falls outside chrono's representable range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if !self.is_supported() {
            return None;
        }
        let (year, month, day) = civil_from_jdn(self.0);
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month as u32, day as u32)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl std::fmt::Display for JulianDayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JDN {}", self.0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDayNumber {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDayNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl Add<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn add(self, days: i64) -> Self::Output {
        Self(self.0 + days)
    }
}

impl AddAssign<i64> for JulianDayNumber {
    #[inline]
    fn add_assign(&mut self, days: i64) {
        self.0 += days;
    }
}

impl Sub<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn sub(self, days: i64) -> Self::Output {
        Self(self.0 - days)
    }
}

impl SubAssign<i64> for JulianDayNumber {
    #[inline]
    fn sub_assign(&mut self, days: i64) {
        self.0 -= days;
    }
}

/// Signed number of days from `rhs` to `self`.
impl Sub for JulianDayNumber {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl From<i64> for JulianDayNumber {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<JulianDayNumber> for i64 {
    #[inline]
    fn from(jdn: JulianDayNumber) -> Self {
        jdn.0
    }
}

impl From<NaiveDate> for JulianDayNumber {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::from_naive_date(date)
    }
}
