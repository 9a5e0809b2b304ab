// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pattern-based rendering of a [`CalendarState`].
//!
//! | Token | Output |
//! |-------|--------|
//! | `%Y` | Iranian year |
//! | `%m` | Iranian month, two digits |
//! | `%d` | Iranian day of month, two digits |
//! | `%B` | Iranian month name |
//! | `%A` | Weekday name |
//! | `%j` | Day of the Iranian year, three digits |
//! | `%H` `%M` `%S` | Time of day (`00` when absent) |
//! | `%G` | Gregorian date, `YYYY-MM-DD` |
//! | `%J` | Julian Day Number |
//! | `%%` | A literal `%` |
//!
//! Unknown tokens are copied through unchanged. With [`Script::Persian`]
//! names come from the Persian tables and every ASCII digit in the result
//! is replaced by its Persian counterpart.

use chrono::Timelike;

use crate::names::{to_persian_digits, Script};
use crate::state::CalendarState;

impl CalendarState {
    /// Render this state according to `pattern`.
    ///
    /// # Example
    ///
    /// ```
    /// use tarikh::{CalendarState, Script};
    ///
    /// let state = CalendarState::from_gregorian(2024, 3, 20);
    /// assert_eq!(
    ///     state.format("%A %d %B %Y", Script::Latin),
    ///     "Chaharshanbeh 01 Farvardin 1403"
    /// );
    /// assert_eq!(state.format("%Y/%m/%d", Script::Persian), "۱۴۰۳/۰۱/۰۱");
    /// ```
    pub fn format(&self, pattern: &str, script: Script) -> String {
        let iranian = self.iranian();
        let (hour, minute, second) = self
            .time_of_day()
            .map_or((0, 0, 0), |t| (t.hour(), t.minute(), t.second()));

        let mut out = String::with_capacity(pattern.len() * 2);
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('Y') => out.push_str(&iranian.year().to_string()),
                Some('m') => out.push_str(&format!("{:02}", iranian.month())),
                Some('d') => out.push_str(&format!("{:02}", iranian.day())),
                Some('B') => match self.iranian_month() {
                    Some(month) => out.push_str(month.name(script)),
                    None => out.push_str(&iranian.month().to_string()),
                },
                Some('A') => out.push_str(self.weekday().name(script)),
                Some('j') => out.push_str(&format!("{:03}", self.day_of_year())),
                Some('H') => out.push_str(&format!("{hour:02}")),
                Some('M') => out.push_str(&format!("{minute:02}")),
                Some('S') => out.push_str(&format!("{second:02}")),
                Some('G') => out.push_str(&self.gregorian().to_string()),
                Some('J') => out.push_str(&self.jdn().value().to_string()),
                Some('%') | None => out.push('%'),
                Some(other) => {
                    out.push('%');
                    out.push(other);
                }
            }
        }

        match script {
            Script::Latin => out,
            Script::Persian => to_persian_digits(&out),
        }
    }
}
