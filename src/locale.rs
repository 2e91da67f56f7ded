// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use log::trace;

use crate::builtin::BUILT_IN_LOCALES;
use crate::humanize::{Fixed, Scale};
use crate::unit::{Unit, UNIT_COUNT};

/// Singular and plural forms of one name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forms {
    pub one: &'static str,
    pub other: &'static str,
}

impl Forms {
    /// Choose the form for `value`: singular only when `value` is exactly 1.
    pub fn select(&self, value: f64) -> &'static str {
        if value == 1.0 {
            self.one
        } else {
            self.other
        }
    }
}

/// Phrase templates for `humanize`.
///
/// `{}` in a template is replaced by the count or by the inner phrase.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrases {
    pub now: &'static str,
    pub moment: &'static str,

    pub about_a_minute: &'static str,
    pub over_a_minute: &'static str,
    pub under_two_minutes: &'static str,
    pub about_an_hour: &'static str,
    pub over_an_hour: &'static str,
    pub about_a_day: &'static str,
    pub about_a_month: &'static str,
    pub about_a_year: &'static str,

    pub seconds: Forms,
    pub minutes: Forms,
    pub hours: Forms,
    pub days: Forms,
    pub months: Forms,
    pub years: Forms,

    /// Wraps a count whose rounding error is large.
    pub about: &'static str,
    /// Wraps a phrase for a non-negative magnitude.
    pub future: &'static str,
    /// Wraps a phrase for a negative magnitude.
    pub past: &'static str,
}

impl Phrases {
    pub fn fixed(&self, fixed: Fixed) -> &'static str {
        match fixed {
            Fixed::AboutAMinute => self.about_a_minute,
            Fixed::OverAMinute => self.over_a_minute,
            Fixed::UnderTwoMinutes => self.under_two_minutes,
            Fixed::AboutAnHour => self.about_an_hour,
            Fixed::OverAnHour => self.over_an_hour,
            Fixed::AboutADay => self.about_a_day,
            Fixed::AboutAMonth => self.about_a_month,
            Fixed::AboutAYear => self.about_a_year,
        }
    }

    pub fn count(&self, scale: Scale) -> Forms {
        match scale {
            Scale::Seconds => self.seconds,
            Scale::Minutes => self.minutes,
            Scale::Hours => self.hours,
            Scale::Days => self.days,
            Scale::Months => self.months,
            Scale::Years => self.years,
        }
    }
}

/// Locale
///
/// `Locale` holds every literal token the formatter and humanizer emit in
/// one language. Entries are complete: there is no per-field fallback.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    /// Primary language subtag, lowercase.
    pub tag: &'static str,

    /// Unit markers for the narrow and digital styles, indexed by `Unit`.
    pub narrow: [&'static str; UNIT_COUNT],

    /// Unit names for the long style, indexed by `Unit`.
    pub long: [Forms; UNIT_COUNT],

    /// Unit names for the short style, indexed by `Unit`.
    pub short: [Forms; UNIT_COUNT],

    pub phrases: Phrases,
}

impl Locale {
    /// Find the built-in locale for a tag such as `en`, `fr-CA`, or `es_MX`.
    ///
    /// Only the primary language subtag is matched. Unsupported tags fall
    /// back to English.
    ///
    pub fn lookup(tag: &str) -> &'static Locale {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if let Some(locale) = BUILT_IN_LOCALES.iter().find(|l| l.tag == language) {
            locale
        } else {
            let fallback = &BUILT_IN_LOCALES[0];
            trace!(
                "Locale '{tag}' is not one of {}, using '{}'.",
                Self::supported().collect::<Vec<_>>().join(", "),
                fallback.tag
            );
            fallback
        }
    }

    /// The tags of every built-in locale.
    pub fn supported() -> impl Iterator<Item = &'static str> {
        BUILT_IN_LOCALES.iter().map(|l| l.tag)
    }

    pub fn narrow_marker(&self, unit: Unit) -> &'static str {
        self.narrow[unit.index()]
    }

    pub fn long_name(&self, unit: Unit, value: f64) -> &'static str {
        self.long[unit.index()].select(value)
    }

    pub fn short_name(&self, unit: Unit, value: f64) -> &'static str {
        self.short[unit.index()].select(value)
    }
}
