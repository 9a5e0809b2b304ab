// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar Module
//!
//! Conversion between the proleptic Gregorian calendar and the Iranian
//! (Jalali / Solar Hijri) calendar, using the integer Julian Day Number as
//! the common intermediate.
//!
//! # Core types
//!
//! - [`JulianDayNumber`] — integer day index; the single source of truth.
//! - [`Calendar`] — trait that defines a calendar (triple ⇄ JDN).
//! - [`Date<C>`] — `(year, month, day)` parameterised by a [`Calendar`] marker.
//! - [`GregorianDate`] / [`IranianDate`] — aliases for `Date<Gregorian>` and `Date<Iranian>`.
//! - [`IranianLeapInfo`] — leap status and Nowruz anchor of an Iranian year.
//! - [`CalendarState`] — one day seen in both calendars, with set / advance / retreat.
//!
//! # Pure conversion functions
//!
//! | Function | Direction |
//! |----------|-----------|
//! | [`gregorian_to_jdn`] | Gregorian → JDN |
//! | [`jdn_to_gregorian`] | JDN → Gregorian |
//! | [`iranian_leap_info`] | Iranian year → leap status, Nowruz date |
//! | [`iranian_to_jdn`] | Iranian → JDN |
//! | [`jdn_to_iranian`] | JDN → Iranian |
//!
//! All of them are total integer functions with no shared state, safe to
//! call from any thread. Month and day values are not validated: they roll
//! over into the adjacent month or year. Use [`Date::try_new`] for a
//! rejecting constructor.
//!
//! # Example
//!
//! ```
//! use tarikh::{CalendarState, Script};
//!
//! let mut day = CalendarState::from_gregorian(2024, 3, 20);
//! assert_eq!(day.iranian().to_string(), "1403-01-01");
//! assert!(day.is_leap_year());
//!
//! day.retreat(1);
//! assert_eq!(day.format("%d %B %Y", Script::Latin), "29 Esfand 1402");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`JulianDayNumber`], [`Date`]
//!   and [`CalendarState`].

mod calendar;
mod date;
mod error;
mod format;
pub(crate) mod gregorian;
pub(crate) mod iranian;
mod jdn;
pub(crate) mod leap;
mod names;
mod state;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{Calendar, Gregorian, Iranian};
pub use date::{Date, GregorianDate, IranianDate};
pub use error::{DateError, ParseError};
pub use gregorian::{
    gregorian_month_length, gregorian_to_jdn, is_gregorian_leap_year, jdn_to_gregorian,
};
pub use iranian::{iranian_month_length, iranian_to_jdn, iranian_year_length, jdn_to_iranian};
pub use jdn::JulianDayNumber;
pub use leap::{
    iranian_leap_info, is_iranian_leap_year, IranianLeapInfo, BREAK_YEARS, VALID_IRANIAN_YEARS,
};
pub use names::{IranianMonth, Script, Weekday};
pub use state::CalendarState;
