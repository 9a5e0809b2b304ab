// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar marker types.
//!
//! Each zero-sized type identifies a calendar and encodes how a
//! `(year, month, day)` triple in that calendar maps to and from the
//! canonical [`JulianDayNumber`].
//!
//! | Marker | Calendar | Months |
//! |--------|----------|--------|
//! | [`Gregorian`] | Proleptic Gregorian | Jan..Dec |
//! | [`Iranian`] | Iranian / Solar Hijri | Farvardin..Esfand |

use crate::date::Date;
use crate::gregorian::{gregorian_month_length, gregorian_to_jdn, jdn_to_gregorian};
use crate::iranian::{iranian_month_length, iranian_to_jdn, jdn_to_iranian};
use crate::jdn::JulianDayNumber;

/// Marker trait for calendars.
///
/// A **calendar** defines:
///
/// 1. A human-readable **label** used in debug output.
/// 2. A pair of total conversion functions between its date triples and the
///    [`JulianDayNumber`].
/// 3. The length of each month, for callers that want to validate input.
pub trait Calendar:
    Copy + Clone + std::fmt::Debug + PartialEq + Eq + PartialOrd + Ord + std::hash::Hash + 'static
{
    /// Display label (e.g. `"Gregorian"`).
    const LABEL: &'static str;

    /// Julian Day Number of `(year, month, day)`. Never fails; out-of-range
    /// months and days roll over.
    fn to_jdn(year: i32, month: i32, day: i32) -> JulianDayNumber;

    /// Date triple of `jdn` in this calendar.
    fn from_jdn(jdn: JulianDayNumber) -> Date<Self>;

    /// Days in `month` of `year`, or `None` if `month` is not `1..=12`.
    fn month_length(year: i32, month: i32) -> Option<u8>;
}

/// Proleptic Gregorian calendar with astronomical year numbering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gregorian;

impl Calendar for Gregorian {
    const LABEL: &'static str = "Gregorian";

    #[inline]
    fn to_jdn(year: i32, month: i32, day: i32) -> JulianDayNumber {
        gregorian_to_jdn(year, month, day)
    }

    #[inline]
    fn from_jdn(jdn: JulianDayNumber) -> Date<Self> {
        jdn_to_gregorian(jdn)
    }

    #[inline]
    fn month_length(year: i32, month: i32) -> Option<u8> {
        gregorian_month_length(year, month)
    }
}

/// Iranian (Jalali / Solar Hijri) calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iranian;

impl Calendar for Iranian {
    const LABEL: &'static str = "Iranian";

    #[inline]
    fn to_jdn(year: i32, month: i32, day: i32) -> JulianDayNumber {
        iranian_to_jdn(year, month, day)
    }

    #[inline]
    fn from_jdn(jdn: JulianDayNumber) -> Date<Self> {
        jdn_to_iranian(jdn)
    }

    #[inline]
    fn month_length(year: i32, month: i32) -> Option<u8> {
        iranian_month_length(year, month)
    }
}

/// Generate pairwise `From<Date<A>> for Date<B>` implementations.
macro_rules! impl_calendar_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<Date<$first>> for Date<$rest> {
                #[inline]
                fn from(date: Date<$first>) -> Self {
                    date.to::<$rest>()
                }
            }

            impl From<Date<$rest>> for Date<$first> {
                #[inline]
                fn from(date: Date<$rest>) -> Self {
                    date.to::<$first>()
                }
            }
        )+

        impl_calendar_conversions!($($rest),+);
    };
}

impl_calendar_conversions!(Gregorian, Iranian);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Gregorian::LABEL, "Gregorian");
        assert_eq!(Iranian::LABEL, "Iranian");
    }

    #[test]
    fn markers_route_through_jdn() {
        let jdn = Gregorian::to_jdn(2024, 3, 20);
        assert_eq!(Iranian::to_jdn(1403, 1, 1), jdn);
        assert_eq!(Iranian::from_jdn(jdn), Date::<Iranian>::new(1403, 1, 1));
        assert_eq!(Gregorian::from_jdn(jdn), Date::<Gregorian>::new(2024, 3, 20));
    }

    #[test]
    fn from_into_between_calendars() {
        let gregorian = Date::<Gregorian>::new(2025, 3, 21);
        let iranian: Date<Iranian> = gregorian.into();
        assert_eq!(iranian, Date::<Iranian>::new(1404, 1, 1));
        let back: Date<Gregorian> = Date::from(iranian);
        assert_eq!(back, gregorian);
    }

    #[test]
    fn month_lengths_by_marker() {
        assert_eq!(Gregorian::month_length(2024, 2), Some(29));
        assert_eq!(Iranian::month_length(1403, 12), Some(30));
        assert_eq!(Iranian::month_length(1404, 12), Some(29));
    }
}
