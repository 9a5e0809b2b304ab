// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar ⇄ Julian Day Number.
//!
//! Both directions are closed-form integer formulas in the Hatcher/Borkowski
//! family. The year is shifted by 100 100 before any division so the
//! intermediate terms stay positive for every year from −100 100 onwards;
//! all arithmetic is done in `i64` so the `(year + 100 100) × 1461` term
//! cannot overflow for any `i32` year.
//!
//! The functions are total: month and day values outside their calendrical
//! range are accepted and roll over into neighbouring months and years
//! (`2023-02-29` is the JDN of `2023-03-01`).
//!
//! ## Supported range
//! Round trips are exact for every JDN in
//! [`JulianDayNumber::MIN_SUPPORTED`] ..= [`JulianDayNumber::MAX_SUPPORTED`],
//! that is from 1 March −100 100 to 31 December of year `i32::MAX`.
//! [`jdn_to_gregorian`] clamps JDNs outside that range to its nearest end.

use crate::date::GregorianDate;
use crate::jdn::JulianDayNumber;

/// Offset applied to the year so the four-year and century terms are
/// computed on positive numbers.
const YEAR_SHIFT: i64 = 100_100;

/// Julian Day Number of a proleptic Gregorian `(year, month, day)`.
///
/// `year` is astronomical (1 BC is `0`).
///
/// # Example
///
/// ```
/// use tarikh::gregorian_to_jdn;
///
/// assert_eq!(gregorian_to_jdn(2000, 1, 1).value(), 2_451_545);
/// ```
pub fn gregorian_to_jdn(year: i32, month: i32, day: i32) -> JulianDayNumber {
    JulianDayNumber::new(jdn_from_civil(
        i64::from(year),
        i64::from(month),
        i64::from(day),
    ))
}

/// JDN of `(year, month, day)` at full `i64` width.
///
/// Inputs of roughly `i32` magnitude keep the `× 1461` term far from
/// `i64` overflow.
pub(crate) fn jdn_from_civil(year: i64, month: i64, day: i64) -> i64 {
    // −1 for January..February: the formula counts years from March.
    let march_year = year + (month - 8) / 6 + YEAR_SHIFT;
    let jdn = march_year * 1461 / 4 + (153 * ((month + 9) % 12) + 2) / 5 + day - 34_840_408;
    jdn - march_year / 100 * 3 / 4 + 752
}

/// Proleptic Gregorian date of a Julian Day Number.
///
/// Exact inverse of [`gregorian_to_jdn`] over the supported range. A JDN
/// outside it is first clamped to [`JulianDayNumber::MIN_SUPPORTED`] or
/// [`JulianDayNumber::MAX_SUPPORTED`].
///
/// # Example
///
/// ```
/// use tarikh::{jdn_to_gregorian, JulianDayNumber};
///
/// let date = jdn_to_gregorian(JulianDayNumber::new(2_460_390));
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 20));
/// ```
pub fn jdn_to_gregorian(jdn: JulianDayNumber) -> GregorianDate {
    let (year, month, day) = civil_from_jdn(jdn.clamp_supported().value());
    GregorianDate::new(narrow(year), narrow(month), narrow(day))
}

/// Saturating `i64` → `i32`. Lossless for every field of a supported JDN.
#[inline]
pub(crate) fn narrow(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// `(year, month, day)` of `jdn` at full `i64` width.
///
/// `jdn` must lie within the supported range; outside it `4 × jdn` can
/// overflow.
pub(crate) fn civil_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let mut j = 4 * jdn + 139_361_631;
    j += (4 * jdn + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let day = i % 153 / 5 + 1;
    let month = i / 153 % 12 + 1;
    let year = j / 1461 - YEAR_SHIFT + (8 - month) / 6;
    (year, month, day)
}

/// Whether `year` has a 29 February in the proleptic Gregorian calendar.
#[inline]
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if `month` is not `1..=12`.
pub fn gregorian_month_length(year: i32, month: i32) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_gregorian_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}
