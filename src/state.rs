// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! A day seen through both calendars at once.
//!
//! [`CalendarState`] owns one [`JulianDayNumber`] and the Gregorian and
//! Iranian triples derived from it. The JDN is the only independently
//! mutable field: every setter and every step forwards or backwards first
//! moves the JDN and then re-derives both triples, so for any reachable
//! state
//!
//! ```text
//! gregorian.jdn() == jdn == iranian.jdn()
//! ```
//!
//! The Gregorian half of that equation holds for every state. The Iranian
//! half holds for days inside
//! [`VALID_IRANIAN_YEARS`](crate::VALID_IRANIAN_YEARS). The JDN itself is
//! kept within [`JulianDayNumber::MIN_SUPPORTED`] ..=
//! [`JulianDayNumber::MAX_SUPPORTED`]: setting or stepping past either end
//! stops at that end.
//!
//! Quantities such as the month length or the weekday are computed on
//! demand from the current fields and are never cached.
//!
//! A time of day may ride along with the date. It is stored as given and
//! is never interpreted by the calendar arithmetic.
//!
//! The type is a plain value: share it across threads behind your own
//! lock if it must be mutated concurrently.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::date::{GregorianDate, IranianDate};
use crate::error::ParseError;
use crate::gregorian::{gregorian_to_jdn, jdn_to_gregorian};
use crate::iranian::{iranian_to_jdn, jdn_to_iranian};
use crate::jdn::JulianDayNumber;
use crate::leap::is_iranian_leap_year;
use crate::names::{IranianMonth, Weekday};

/// Date-time layouts tried by [`CalendarState::from_str`] before the date-only ones.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// One day expressed as a JDN together with its Gregorian and Iranian dates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarState {
    jdn: JulianDayNumber,
    time_of_day: Option<NaiveTime>,
    gregorian: GregorianDate,
    iranian: IranianDate,
}

impl CalendarState {
    // ── constructors ──────────────────────────────────────────────────

    /// State for the day `jdn`.
    pub fn from_jdn(jdn: JulianDayNumber) -> Self {
        let mut state = Self {
            jdn,
            time_of_day: None,
            gregorian: GregorianDate::new(0, 0, 0),
            iranian: IranianDate::new(0, 0, 0),
        };
        state.rederive();
        state
    }

    /// State for a Gregorian date. Overflowing months and days roll over.
    ///
    /// # Example
    ///
    /// ```
    /// use tarikh::CalendarState;
    ///
    /// let state = CalendarState::from_gregorian(2024, 3, 20);
    /// assert_eq!(state.iranian().ymd(), (1403, 1, 1));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Self {
        Self::from_jdn(gregorian_to_jdn(year, month, day))
    }

    /// State for an Iranian date. Overflowing months and days roll over.
    pub fn from_iranian(year: i32, month: i32, day: i32) -> Self {
        Self::from_jdn(iranian_to_jdn(year, month, day))
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::from_jdn(JulianDayNumber::from_naive_date(date))
    }

    /// State for the date of `datetime`, keeping its time of day.
    pub fn from_naive_datetime(datetime: NaiveDateTime) -> Self {
        let mut state = Self::from_naive_date(datetime.date());
        state.time_of_day = Some(datetime.time());
        state
    }

    /// State for the local wall-clock date and time of `datetime` in its
    /// own time zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_naive_datetime(datetime.naive_local())
    }

    /// State for the instant `millis` milliseconds after the Unix epoch, as
    /// seen on a wall clock in `tz`.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnixMillisOutOfRange`] if chrono cannot represent the
    /// instant.
    pub fn from_unix_millis<Tz: TimeZone>(millis: i64, tz: &Tz) -> Result<Self, ParseError> {
        let utc = DateTime::from_timestamp_millis(millis)
            .ok_or(ParseError::UnixMillisOutOfRange { millis })?;
        Ok(Self::from_datetime(&utc.with_timezone(tz)))
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn jdn(&self) -> JulianDayNumber {
        self.jdn
    }

    #[inline]
    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    #[inline]
    pub const fn iranian(&self) -> IranianDate {
        self.iranian
    }

    /// The time of day supplied at construction, if any.
    #[inline]
    pub const fn time_of_day(&self) -> Option<NaiveTime> {
        self.time_of_day
    }

    /// Gregorian date and time of day as a `chrono` value.
    ///
    /// Returns `None` outside chrono's range. A missing time of day is
    /// taken as midnight.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let date = self.jdn.to_naive_date()?;
        Some(date.and_time(self.time_of_day.unwrap_or_default()))
    }

    // ── mutation ──────────────────────────────────────────────────────

    /// Move to a Gregorian date.
    pub fn set_by_gregorian(&mut self, year: i32, month: i32, day: i32) -> &mut Self {
        self.set_jdn(gregorian_to_jdn(year, month, day))
    }

    /// Move to an Iranian date.
    pub fn set_by_iranian(&mut self, year: i32, month: i32, day: i32) -> &mut Self {
        self.set_jdn(iranian_to_jdn(year, month, day))
    }

    pub fn set_jdn(&mut self, jdn: JulianDayNumber) -> &mut Self {
        self.jdn = jdn;
        self.rederive();
        self
    }

    pub fn set_time_of_day(&mut self, time: Option<NaiveTime>) -> &mut Self {
        self.time_of_day = time;
        self
    }

    /// Step `days` days forward; negative values step backward.
    ///
    /// Any `days` is accepted. Steps past the supported JDN range stop at
    /// its end.
    pub fn advance(&mut self, days: i64) -> &mut Self {
        self.set_jdn(JulianDayNumber::new(self.jdn.value().saturating_add(days)))
    }

    /// Step `days` days backward; negative values step forward.
    ///
    /// Any `days` is accepted. Steps past the supported JDN range stop at
    /// its end.
    pub fn retreat(&mut self, days: i64) -> &mut Self {
        self.set_jdn(JulianDayNumber::new(self.jdn.value().saturating_sub(days)))
    }

    fn rederive(&mut self) {
        self.jdn = self.jdn.clamp_supported();
        self.gregorian = jdn_to_gregorian(self.jdn);
        self.iranian = jdn_to_iranian(self.jdn);
        trace!(
            jdn = self.jdn.value(),
            gregorian = %self.gregorian,
            iranian = %self.iranian,
            "calendar state re-derived"
        );
    }

    // ── derived queries ───────────────────────────────────────────────

    /// Whether the current Iranian year has 366 days.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        is_iranian_leap_year(self.iranian.year())
    }

    /// Days in the current Iranian month.
    pub fn month_length(&self) -> u8 {
        match self.iranian.month() {
            1..=6 => 31,
            12 if self.is_leap_year() => 30,
            12 => 29,
            _ => 30,
        }
    }

    /// The current Iranian month.
    ///
    /// `None` only for days far outside the reliable range of the leap
    /// table, where the derived month number can leave `1..=12`.
    #[inline]
    pub fn iranian_month(&self) -> Option<IranianMonth> {
        IranianMonth::from_number(self.iranian.month())
    }

    /// Day of the Iranian year, starting at 1 on 1 Farvardin.
    pub fn day_of_year(&self) -> i64 {
        self.jdn - iranian_to_jdn(self.iranian.year(), 1, 1) + 1
    }

    /// Day of the week as `0..=6` (`0` = Monday).
    #[inline]
    pub fn day_of_week(&self) -> u8 {
        self.jdn.day_of_week()
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.jdn.weekday()
    }
}

impl Default for CalendarState {
    /// 1 Farvardin 1 (22 March 622).
    fn default() -> Self {
        Self::from_iranian(1, 1, 1)
    }
}

impl std::fmt::Display for CalendarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iranian)?;
        if let Some(time) = self.time_of_day {
            write!(f, " {}", time.format("%H:%M:%S"))?;
        }
        Ok(())
    }
}

/// Parse a Gregorian timestamp: `YYYY-MM-DD` or `YYYY/MM/DD`, optionally
/// followed by ` HH:MM[:SS[.fff]]` or `THH:MM[:SS[.fff]]`.
impl FromStr for CalendarState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Some(datetime) = DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        {
            return Ok(Self::from_naive_datetime(datetime));
        }
        // Report the error of the canonical layout, not of the fallback.
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .or_else(|e| NaiveDate::parse_from_str(input, "%Y/%m/%d").map_err(|_| e))
            .map(Self::from_naive_date)
            .map_err(|source| ParseError::InvalidTimestamp {
                input: s.to_owned(),
                source,
            })
    }
}

impl From<JulianDayNumber> for CalendarState {
    #[inline]
    fn from(jdn: JulianDayNumber) -> Self {
        Self::from_jdn(jdn)
    }
}

impl From<GregorianDate> for CalendarState {
    #[inline]
    fn from(date: GregorianDate) -> Self {
        Self::from_jdn(date.jdn())
    }
}

impl From<IranianDate> for CalendarState {
    #[inline]
    fn from(date: IranianDate) -> Self {
        Self::from_jdn(date.jdn())
    }
}

impl From<NaiveDate> for CalendarState {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::from_naive_date(date)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// Only the JDN and the time of day are stored; the triples are re-derived on
// load so a document cannot describe an inconsistent state.

#[cfg(feature = "serde")]
impl Serialize for CalendarState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("CalendarState", 2)?;
        s.serialize_field("jdn", &self.jdn)?;
        s.serialize_field("time_of_day", &self.time_of_day)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CalendarState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            jdn: JulianDayNumber,
            #[serde(default)]
            time_of_day: Option<NaiveTime>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut state = Self::from_jdn(raw.jdn);
        state.time_of_day = raw.time_of_day;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leap::VALID_IRANIAN_YEARS;
    use chrono::{FixedOffset, Utc};

    fn assert_consistent(state: &CalendarState) {
        assert_eq!(state.gregorian().jdn(), state.jdn());
        assert_eq!(state.iranian().jdn(), state.jdn());
    }

    #[test]
    fn nowruz_1403() {
        let state = CalendarState::from_gregorian(2024, 3, 20);
        assert_eq!(state.iranian().ymd(), (1403, 1, 1));
        assert_eq!(state.jdn().value(), 2_460_390);
        assert_eq!(state.weekday(), Weekday::Wednesday);
        assert_eq!(state.iranian_month(), Some(IranianMonth::Farvardin));
        assert_eq!(state.day_of_year(), 1);
        assert_consistent(&state);
    }

    #[test]
    fn setters_rederive_both_triples() {
        let mut state = CalendarState::from_jdn(JulianDayNumber::J2000);
        state.set_by_iranian(1404, 1, 1);
        assert_eq!(state.gregorian().ymd(), (2025, 3, 21));
        assert_consistent(&state);

        state.set_by_gregorian(1979, 2, 11);
        assert_eq!(state.iranian().ymd(), (1357, 11, 22));
        assert_consistent(&state);
    }

    #[test]
    fn setters_accept_overflowing_input() {
        let mut state = CalendarState::default();
        state.set_by_iranian(1403, 1, 35);
        assert_eq!(state.iranian().ymd(), (1403, 2, 4));
        state.set_by_gregorian(2023, 2, 29);
        assert_eq!(state.gregorian().ymd(), (2023, 3, 1));
        assert_consistent(&state);
    }

    #[test]
    fn advance_and_retreat_are_symmetric() {
        let original = CalendarState::from_iranian(1402, 12, 29);
        for n in [0, 1, 2, 30, 365, 10_000, 1_000_000] {
            let mut state = original;
            state.advance(n).retreat(n);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn negative_steps_reverse_direction() {
        let mut a = CalendarState::from_iranian(1403, 6, 31);
        let mut b = a;
        a.advance(-3);
        b.retreat(3);
        assert_eq!(a, b);
        assert_eq!(a.iranian().ymd(), (1403, 6, 28));
    }

    #[test]
    fn advance_crosses_esfand() {
        let mut state = CalendarState::from_iranian(1403, 12, 29);
        state.advance(1);
        assert_eq!(state.iranian().ymd(), (1403, 12, 30));
        state.advance(1);
        assert_eq!(state.iranian().ymd(), (1404, 1, 1));

        state.set_by_iranian(1404, 12, 29).advance(1);
        assert_eq!(state.iranian().ymd(), (1405, 1, 1));
    }

    #[test]
    fn advance_increments_weekday() {
        let mut state = CalendarState::from_gregorian(2024, 1, 1);
        for _ in 0..100 {
            let before = state.day_of_week();
            state.advance(1);
            assert_eq!(state.day_of_week(), (before + 1) % 7);
        }
    }

    #[test]
    fn month_length_follows_current_month() {
        let mut state = CalendarState::from_iranian(1403, 6, 1);
        assert_eq!(state.month_length(), 31);
        state.advance(31);
        assert_eq!(state.iranian().month(), 7);
        assert_eq!(state.month_length(), 30);
        state.set_by_iranian(1403, 12, 1);
        assert_eq!(state.month_length(), 30);
        assert!(state.is_leap_year());
        state.set_by_iranian(1404, 12, 1);
        assert_eq!(state.month_length(), 29);
        assert!(!state.is_leap_year());
    }

    #[test]
    fn day_of_year_counts_from_nowruz() {
        assert_eq!(CalendarState::from_iranian(1403, 7, 1).day_of_year(), 187);
        assert_eq!(CalendarState::from_iranian(1403, 12, 30).day_of_year(), 366);
        assert_eq!(CalendarState::from_iranian(1404, 12, 29).day_of_year(), 365);
    }

    #[test]
    fn consistent_across_the_valid_range() {
        let start = iranian_to_jdn(*VALID_IRANIAN_YEARS.start(), 1, 1);
        let end = iranian_to_jdn(*VALID_IRANIAN_YEARS.end(), 12, 29);
        let mut state = CalendarState::from_jdn(start);
        while state.jdn() < end {
            assert_consistent(&state);
            state.advance(37);
        }
    }

    #[test]
    fn parses_timestamps() {
        let state: CalendarState = "2024-03-20".parse().unwrap();
        assert_eq!(state.iranian().ymd(), (1403, 1, 1));
        assert_eq!(state.time_of_day(), None);

        let state: CalendarState = "2024/03/20".parse().unwrap();
        assert_eq!(state.iranian().ymd(), (1403, 1, 1));

        let state: CalendarState = "2024-03-20T06:36:26".parse().unwrap();
        assert_eq!(state.time_of_day(), NaiveTime::from_hms_opt(6, 36, 26));

        let state: CalendarState = " 2024-03-20 06:36 ".parse().unwrap();
        assert_eq!(state.time_of_day(), NaiveTime::from_hms_opt(6, 36, 0));
    }

    #[test]
    fn rejects_malformed_timestamps() {
        let err = "20-03-2024x".parse::<CalendarState>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidTimestamp { ref input, .. } if input == "20-03-2024x"));
        assert!("2024-02-30".parse::<CalendarState>().is_err());
    }

    #[test]
    fn time_of_day_survives_steps() {
        let mut state: CalendarState = "2024-03-20 23:59:59".parse().unwrap();
        state.advance(400).set_by_iranian(1300, 1, 1);
        assert_eq!(state.time_of_day(), NaiveTime::from_hms_opt(23, 59, 59));
        state.set_time_of_day(None);
        assert_eq!(state.time_of_day(), None);
    }

    #[test]
    fn unix_millis_in_time_zone() {
        // 2024-03-19T21:00:00Z is already Nowruz in Tehran (+03:30).
        let millis = 1_710_882_000_000;
        let utc = CalendarState::from_unix_millis(millis, &Utc).unwrap();
        assert_eq!(utc.iranian().ymd(), (1402, 12, 29));

        let tehran = FixedOffset::east_opt(3 * 3600 + 1800).unwrap();
        let local = CalendarState::from_unix_millis(millis, &tehran).unwrap();
        assert_eq!(local.iranian().ymd(), (1403, 1, 1));
        assert_eq!(local.time_of_day(), NaiveTime::from_hms_opt(0, 30, 0));

        assert_eq!(
            CalendarState::from_unix_millis(i64::MAX, &Utc),
            Err(ParseError::UnixMillisOutOfRange { millis: i64::MAX })
        );
    }

    #[test]
    fn naive_datetime_roundtrip() {
        let datetime = NaiveDate::from_ymd_opt(2025, 3, 21)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let state = CalendarState::from_naive_datetime(datetime);
        assert_eq!(state.iranian().ymd(), (1404, 1, 1));
        assert_eq!(state.to_naive_datetime(), Some(datetime));
    }

    #[test]
    fn display() {
        assert_eq!(CalendarState::from_iranian(1403, 1, 1).to_string(), "1403-01-01");
        let state: CalendarState = "2024-03-20 06:36:26".parse().unwrap();
        assert_eq!(state.to_string(), "1403-01-01 06:36:26");
    }

    #[test]
    fn integer_extreme_dates_clamp_to_supported_range() {
        let state = CalendarState::from_gregorian(i32::MAX, 13, 1);
        assert_eq!(state.jdn(), JulianDayNumber::MAX_SUPPORTED);
        assert_eq!(state.gregorian().ymd(), (i32::MAX, 12, 31));
        assert_eq!(state.gregorian().jdn(), state.jdn());

        for year in [i32::MIN, i32::MAX] {
            let state = CalendarState::from_iranian(year, 1, 1);
            assert!(state.jdn().is_supported());
            assert_eq!(state.gregorian().jdn(), state.jdn());
            let _ = state.is_leap_year();
            let _ = state.month_length();
            let _ = state.day_of_year();
        }

        let bottom = CalendarState::from_gregorian(i32::MIN, 1, 1);
        assert_eq!(bottom.jdn(), JulianDayNumber::MIN_SUPPORTED);
        assert_eq!(bottom.gregorian().ymd(), (-100_100, 3, 1));
    }

    #[test]
    fn huge_steps_stop_at_the_range_ends() {
        let mut state = CalendarState::from_iranian(1403, 1, 1);
        state.advance(1_000_000_000_000);
        assert_eq!(state.jdn(), JulianDayNumber::MAX_SUPPORTED);
        assert_eq!(state.gregorian().jdn(), state.jdn());

        state.advance(i64::MAX).advance(i64::MAX);
        assert_eq!(state.jdn(), JulianDayNumber::MAX_SUPPORTED);

        state.retreat(i64::MAX).retreat(i64::MAX);
        assert_eq!(state.jdn(), JulianDayNumber::MIN_SUPPORTED);
        assert_eq!(state.gregorian().jdn(), state.jdn());

        state.advance(i64::MIN);
        assert_eq!(state.jdn(), JulianDayNumber::MIN_SUPPORTED);
    }

    #[test]
    fn out_of_range_jdn_is_clamped_on_construction() {
        let state = CalendarState::from_jdn(JulianDayNumber::new(i64::MAX));
        assert_eq!(state.jdn(), JulianDayNumber::MAX_SUPPORTED);
        assert_eq!(state.to_naive_datetime(), None);
    }

    #[test]
    fn conversions_into_state() {
        let a = CalendarState::from(IranianDate::new(1403, 1, 1));
        let b = CalendarState::from(GregorianDate::new(2024, 3, 20));
        let c = CalendarState::from(JulianDayNumber::new(2_460_390));
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
