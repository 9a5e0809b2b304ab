// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Iranian (Solar Hijri) calendar ⇄ Julian Day Number.
//!
//! The Iranian year has six 31-day months, five 30-day months and a last
//! month (Esfand) of 29 days, or 30 in a leap year. Each year is anchored
//! on the Gregorian date of 1 Farvardin supplied by
//! [`iranian_leap_info`](crate::iranian_leap_info); days within the year are
//! then plain offsets from that anchor.
//!
//! As with the Gregorian formulas, out-of-range months and days are not
//! rejected: they produce the JDN obtained by counting forward from the
//! start of the year. Every `i32` year is accepted; outside
//! [`VALID_IRANIAN_YEARS`](crate::VALID_IRANIAN_YEARS) the answer is
//! deterministic but not astronomical.

use crate::date::IranianDate;
use crate::gregorian::{civil_from_jdn, jdn_from_civil, narrow};
use crate::jdn::JulianDayNumber;
use crate::leap::{iranian_leap_info, leap_info, IranianLeapInfo};

/// Days in Farvardin..Shahrivar combined (6 × 31).
const FIRST_HALF_DAYS: i64 = 186;

/// JDN of 1 Farvardin of the year described by `info`.
#[inline]
fn new_year_jdn(info: &IranianLeapInfo) -> JulianDayNumber {
    JulianDayNumber::new(jdn_from_civil(
        info.gregorian_year_at_new_year,
        3,
        info.march_day_of_farvardin1,
    ))
}

/// Julian Day Number of an Iranian `(year, month, day)`.
///
/// # Example
///
/// ```
/// use tarikh::{gregorian_to_jdn, iranian_to_jdn};
///
/// assert_eq!(iranian_to_jdn(1403, 1, 1), gregorian_to_jdn(2024, 3, 20));
/// ```
pub fn iranian_to_jdn(year: i32, month: i32, day: i32) -> JulianDayNumber {
    let start = new_year_jdn(&iranian_leap_info(year));
    let (m, d) = (i64::from(month), i64::from(day));
    // Months 7..=12 are one day shorter; integer division selects them.
    start + ((m - 1) * 31 - (m / 7) * (m - 7) + d - 1)
}

/// Iranian date of a Julian Day Number.
///
/// Exact inverse of [`iranian_to_jdn`] for calendrically valid dates in
/// [`VALID_IRANIAN_YEARS`](crate::VALID_IRANIAN_YEARS). A JDN outside
/// [`JulianDayNumber::MIN_SUPPORTED`] ..= [`JulianDayNumber::MAX_SUPPORTED`]
/// is first clamped into that range.
///
/// # Example
///
/// ```
/// use tarikh::{jdn_to_iranian, JulianDayNumber};
///
/// let date = jdn_to_iranian(JulianDayNumber::new(2_460_390));
/// assert_eq!((date.year(), date.month(), date.day()), (1403, 1, 1));
/// ```
pub fn jdn_to_iranian(jdn: JulianDayNumber) -> IranianDate {
    let jdn = jdn.clamp_supported();
    // Trial year: the one whose Nowruz falls in the same Gregorian year.
    let (gregorian_year, _, _) = civil_from_jdn(jdn.value());
    let mut year = gregorian_year - 621;
    let info = leap_info(year);
    let mut k = jdn - new_year_jdn(&info);

    if k >= 0 {
        if k < FIRST_HALF_DAYS {
            return IranianDate::new(narrow(year), narrow(1 + k / 31), narrow(k % 31 + 1));
        }
        k -= FIRST_HALF_DAYS;
    } else {
        // Before Nowruz: the tail of the previous year, whose Esfand has an
        // extra day when that year was leap (one year before this anchor).
        year -= 1;
        k += 179;
        if info.cycle_position == 1 {
            k += 1;
        }
    }
    IranianDate::new(narrow(year), narrow(7 + k / 30), narrow(k % 30 + 1))
}

/// Number of days in `month` of Iranian year `year`, or `None` if `month`
/// is not `1..=12`.
pub fn iranian_month_length(year: i32, month: i32) -> Option<u8> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        12 if iranian_leap_info(year).is_leap => Some(30),
        12 => Some(29),
        _ => None,
    }
}

/// Number of days in Iranian year `year`: 365, or 366 for a leap year.
#[inline]
pub fn iranian_year_length(year: i32) -> u16 {
    if iranian_leap_info(year).is_leap {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::gregorian_to_jdn;
    use crate::leap::VALID_IRANIAN_YEARS;

    fn ymd(date: IranianDate) -> (i32, i32, i32) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn nowruz_1403_is_2024_03_20() {
        let jdn = gregorian_to_jdn(2024, 3, 20);
        assert_eq!(iranian_to_jdn(1403, 1, 1), jdn);
        assert_eq!(ymd(jdn_to_iranian(jdn)), (1403, 1, 1));
    }

    #[test]
    fn known_correspondences() {
        let cases = [
            ((1979, 2, 11), (1357, 11, 22)),
            ((2000, 1, 1), (1378, 10, 11)),
            ((2023, 3, 20), (1401, 12, 29)),
            ((2023, 3, 21), (1402, 1, 1)),
            ((2024, 3, 19), (1402, 12, 29)),
            ((2025, 3, 20), (1403, 12, 30)),
            ((2025, 3, 21), (1404, 1, 1)),
            ((2024, 9, 21), (1403, 6, 31)),
            ((2024, 9, 22), (1403, 7, 1)),
        ];
        for ((gy, gm, gd), (iy, im, id)) in cases {
            let jdn = gregorian_to_jdn(gy, gm, gd);
            assert_eq!(ymd(jdn_to_iranian(jdn)), (iy, im, id), "{gy}-{gm}-{gd}");
            assert_eq!(iranian_to_jdn(iy, im, id), jdn, "{iy}-{im}-{id}");
        }
    }

    #[test]
    fn roundtrip_every_valid_date() {
        for year in VALID_IRANIAN_YEARS {
            for month in 1..=12 {
                let length = iranian_month_length(year, month).unwrap();
                for day in 1..=i32::from(length) {
                    let back = jdn_to_iranian(iranian_to_jdn(year, month, day));
                    assert_eq!(ymd(back), (year, month, day));
                }
            }
        }
    }

    #[test]
    fn year_length_matches_nowruz_spacing() {
        for year in VALID_IRANIAN_YEARS.take(3_000) {
            let span = iranian_to_jdn(year + 1, 1, 1) - iranian_to_jdn(year, 1, 1);
            assert_eq!(span, i64::from(iranian_year_length(year)), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(iranian_month_length(1403, 1), Some(31));
        assert_eq!(iranian_month_length(1403, 6), Some(31));
        assert_eq!(iranian_month_length(1403, 7), Some(30));
        assert_eq!(iranian_month_length(1403, 11), Some(30));
        assert_eq!(iranian_month_length(1403, 12), Some(30));
        assert_eq!(iranian_month_length(1404, 12), Some(29));
        assert_eq!(iranian_month_length(1404, 0), None);
        assert_eq!(iranian_month_length(1404, 13), None);
    }

    #[test]
    fn out_of_range_day_rolls_over() {
        let jdn = iranian_to_jdn(1403, 1, 35);
        assert_eq!(jdn, iranian_to_jdn(1403, 2, 4));
        assert_eq!(ymd(jdn_to_iranian(jdn)), (1403, 2, 4));
        assert_eq!(ymd(jdn_to_iranian(iranian_to_jdn(1404, 12, 30))), (1405, 1, 1));
    }

    #[test]
    fn integer_extremes_do_not_panic() {
        for year in [i32::MIN, i32::MAX] {
            for (month, day) in [(i32::MIN, i32::MIN), (1, 1), (i32::MAX, i32::MAX)] {
                let _ = iranian_to_jdn(year, month, day);
            }
            let _ = iranian_month_length(year, 12);
            let _ = iranian_year_length(year);
        }
        for jdn in [i64::MIN, i64::MAX] {
            let _ = jdn_to_iranian(JulianDayNumber::new(jdn));
        }
    }

    #[test]
    fn clamped_jdns_are_deterministic() {
        let top = jdn_to_iranian(JulianDayNumber::new(i64::MAX));
        assert_eq!(top, jdn_to_iranian(JulianDayNumber::MAX_SUPPORTED));
        let bottom = jdn_to_iranian(JulianDayNumber::new(i64::MIN));
        assert_eq!(bottom, jdn_to_iranian(JulianDayNumber::MIN_SUPPORTED));
        assert_eq!(bottom.year(), -100_722);
    }
}
