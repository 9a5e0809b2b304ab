// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Iranian leap years and the Nowruz anchor
//!
//! The Iranian (Solar Hijri) year starts at the March equinox, so its leap
//! years do not follow a fixed rule. This module uses the break-year
//! approximation of the astronomical calendar: between consecutive
//! [`BREAK_YEARS`] the leap years follow a 33-year sub-cycle (eight leap
//! years per cycle), and each break shifts the phase of that sub-cycle.
//!
//! For an Iranian year `Y` the calculator returns an [`IranianLeapInfo`]:
//!
//! * whether `Y` has 366 days,
//! * the Gregorian year in which `Y` begins (`Y + 621`),
//! * the day of March of 1 Farvardin `Y`.
//!
//! The calculation is a pure function of `Y`. Nothing is cached and no
//! state is shared between calls.
//!
//! ## Valid range
//! Results are reliable for [`VALID_IRANIAN_YEARS`] (−61 ..= 3177). Outside
//! that range the computation still terminates with a deterministic answer,
//! but it is not claimed to match the astronomical calendar.

use std::ops::RangeInclusive;

use tracing::debug;

/// Years at which the 33-year sub-cycle pattern shifts, ascending.
pub const BREAK_YEARS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Iranian years for which the leap and Nowruz results are reliable.
pub const VALID_IRANIAN_YEARS: RangeInclusive<i32> = -61..=3177;

/// Offset between an Iranian year and the Gregorian year in which it begins.
const GREGORIAN_OFFSET: i64 = 621;

/// Leap-cycle facts about one Iranian year.
///
/// The anchor fields are `i64`: for years near the ends of `i32` the
/// Gregorian year is out of `i32` reach.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IranianLeapInfo {
    /// `true` if Esfand has 30 days.
    pub is_leap: bool,
    /// Years since the last leap year (`0..=4`); `0` means this year is leap.
    pub cycle_position: u8,
    /// Day of March (Gregorian) on which 1 Farvardin falls.
    pub march_day_of_farvardin1: i64,
    /// Gregorian year in which this Iranian year begins.
    pub gregorian_year_at_new_year: i64,
}

/// Leap status and Nowruz anchor of Iranian year `year`.
///
/// # Example
///
/// ```
/// use tarikh::iranian_leap_info;
///
/// let info = iranian_leap_info(1403);
/// assert!(info.is_leap);
/// assert_eq!(info.gregorian_year_at_new_year, 2024);
/// assert_eq!(info.march_day_of_farvardin1, 20);
/// ```
#[inline]
pub fn iranian_leap_info(year: i32) -> IranianLeapInfo {
    leap_info(i64::from(year))
}

/// [`iranian_leap_info`] for a year that may sit just past the `i32` range.
pub(crate) fn leap_info(year: i64) -> IranianLeapInfo {
    let first = i64::from(*VALID_IRANIAN_YEARS.start());
    let last = i64::from(*VALID_IRANIAN_YEARS.end());
    if year < first || year > last {
        debug!(year, "Iranian year outside the reliable leap-table range");
    }

    let gregorian_year = year + GREGORIAN_OFFSET;

    // Leap days accumulated by the Iranian calendar since the first break.
    let mut leap_j: i64 = -14;
    let mut jp = i64::from(BREAK_YEARS[0]);
    let mut jump = 0;
    for jm in BREAK_YEARS[1..].iter().map(|&b| i64::from(b)) {
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }

    let mut n = year - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Leap days the Gregorian calendar has accumulated by the same point.
    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day_of_farvardin1 = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut position = ((n + 1) % 33 - 1) % 4;
    if position == -1 {
        position = 4;
    }

    IranianLeapInfo {
        is_leap: position == 0,
        // Truncating remainders can leave other negatives below the range.
        cycle_position: position.rem_euclid(5) as u8,
        march_day_of_farvardin1,
        gregorian_year_at_new_year: gregorian_year,
    }
}

/// Whether Iranian year `year` has 366 days.
#[inline]
pub fn is_iranian_leap_year(year: i32) -> bool {
    iranian_leap_info(year).is_leap
}
