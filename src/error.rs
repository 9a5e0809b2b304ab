// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! The conversion formulas themselves are total and never fail. Errors only
//! arise at the edges: strict date construction and the string / epoch
//! entry points of [`CalendarState`](crate::CalendarState).

/// Rejection of a calendrically invalid date by
/// [`Date::try_new`](crate::Date::try_new).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: i32 },

    /// Day outside `1..=max_day` for the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay { day: i32, month: i32, max_day: u8 },
}

/// Failure to build a [`CalendarState`](crate::CalendarState) from an
/// external representation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The text matches none of the accepted timestamp layouts.
    #[error("invalid timestamp {input:?}: {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The epoch offset cannot be represented as a `chrono` date-time.
    #[error("unix timestamp {millis} ms is out of range")]
    UnixMillisOutOfRange { millis: i64 },
}
