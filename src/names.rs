// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Month and weekday name tables.
//!
//! Indexed by the numbers the core produces: months `1..=12` and the
//! day-of-week index `0..=6` of [`JulianDayNumber::day_of_week`]
//! (`0` = Monday).
//!
//! [`JulianDayNumber::day_of_week`]: crate::JulianDayNumber::day_of_week

/// Writing system used for names and digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Script {
    /// Latin transliteration ("Farvardin", "Shanbeh").
    #[default]
    Latin,
    /// Persian script ("فروردین", "شنبه") with Persian digits.
    Persian,
}

/// The twelve months of the Iranian calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IranianMonth {
    Farvardin = 1,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

impl IranianMonth {
    pub const ALL: [Self; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    const LATIN: [&'static str; 12] = [
        "Farvardin",
        "Ordibehesht",
        "Khordad",
        "Tir",
        "Mordad",
        "Shahrivar",
        "Mehr",
        "Aban",
        "Azar",
        "Dey",
        "Bahman",
        "Esfand",
    ];

    const PERSIAN: [&'static str; 12] = [
        "فروردین",
        "اردیبهشت",
        "خرداد",
        "تیر",
        "مرداد",
        "شهریور",
        "مهر",
        "آبان",
        "آذر",
        "دی",
        "بهمن",
        "اسفند",
    ];

    /// Month `1..=12`, or `None` for any other number.
    pub fn from_number(month: i32) -> Option<Self> {
        usize::try_from(month)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// The month number, `1..=12`.
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32
    }

    pub fn name(self, script: Script) -> &'static str {
        let i = self as usize - 1;
        match script {
            Script::Latin => Self::LATIN[i],
            Script::Persian => Self::PERSIAN[i],
        }
    }
}

impl std::fmt::Display for IranianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Script::Latin))
    }
}

/// Day of the week, ordered as [`JulianDayNumber::day_of_week`] counts them.
///
/// [`JulianDayNumber::day_of_week`]: crate::JulianDayNumber::day_of_week
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday = 0,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    const LATIN: [&'static str; 7] = [
        "Doshanbeh",
        "Seshanbeh",
        "Chaharshanbeh",
        "Panjshanbeh",
        "Jomeh",
        "Shanbeh",
        "Yekshanbeh",
    ];

    const PERSIAN: [&'static str; 7] = [
        "دوشنبه",
        "سه‌شنبه",
        "چهارشنبه",
        "پنجشنبه",
        "جمعه",
        "شنبه",
        "یکشنبه",
    ];

    /// Weekday for a day-of-week index; wraps modulo 7.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % 7)]
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self, script: Script) -> &'static str {
        match script {
            Script::Latin => Self::LATIN[self as usize],
            Script::Persian => Self::PERSIAN[self as usize],
        }
    }

    /// Friday, the weekly holiday in Iran.
    #[inline]
    pub fn is_weekend(self) -> bool {
        self == Self::Friday
    }

    /// The following day.
    #[inline]
    pub fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Script::Latin))
    }
}

/// Replace ASCII digits with Persian digits (U+06F0..U+06F9).
pub(crate) fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
