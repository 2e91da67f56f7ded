// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use crate::config::Configuration;
use crate::locale::{Forms, Locale, Phrases};
use crate::options::{FormatOptions, Style, DEFAULT_LOCALE};

pub(crate) trait BuiltIn {
    fn built_in() -> Self;
}

impl BuiltIn for Configuration {
    /// Construct the built-in configuration
    ///
    fn built_in() -> Self {
        Self {
            locale: DEFAULT_LOCALE.into(),
            style: Style::Narrow,
            suffix: false,
            format: FormatOptions::default(),
        }
    }
}

/// Every built-in locale. The first entry is the fallback.
pub(crate) static BUILT_IN_LOCALES: [Locale; 3] = [ENGLISH, FRENCH, SPANISH];

const fn forms(one: &'static str, other: &'static str) -> Forms {
    Forms { one, other }
}

////////////////////////////////////////////////////////////////////////////////////////
// English
pub(crate) const ENGLISH: Locale = Locale {
    tag: "en",
    narrow: ["y", "d", "h", "m", "s", "ms", "µs", "ns"],
    long: [
        forms("year", "years"),
        forms("day", "days"),
        forms("hour", "hours"),
        forms("minute", "minutes"),
        forms("second", "seconds"),
        forms("millisecond", "milliseconds"),
        forms("microsecond", "microseconds"),
        forms("nanosecond", "nanoseconds"),
    ],
    short: [
        forms("yr", "yrs"),
        forms("day", "days"),
        forms("hr", "hrs"),
        forms("min", "mins"),
        forms("sec", "secs"),
        // Abbreviated sub-second units do not pluralize.
        forms("ms", "ms"),
        forms("µs", "µs"),
        forms("ns", "ns"),
    ],
    phrases: Phrases {
        now: "now",
        moment: "a moment",
        about_a_minute: "about a minute",
        over_a_minute: "over a minute",
        under_two_minutes: "under 2 minutes",
        about_an_hour: "about an hour",
        over_an_hour: "over an hour",
        about_a_day: "about a day",
        about_a_month: "about a month",
        about_a_year: "about a year",
        seconds: forms("a second", "{} seconds"),
        minutes: forms("a minute", "{} minutes"),
        hours: forms("an hour", "{} hours"),
        days: forms("a day", "{} days"),
        months: forms("a month", "{} months"),
        years: forms("a year", "{} years"),
        about: "about {}",
        future: "in {}",
        past: "{} ago",
    },
};

////////////////////////////////////////////////////////////////////////////////////////
// French
const FRENCH: Locale = Locale {
    tag: "fr",
    narrow: ["a", "j", "h", "m", "s", "ms", "µs", "ns"],
    long: [
        forms("an", "ans"),
        forms("jour", "jours"),
        forms("heure", "heures"),
        forms("minute", "minutes"),
        forms("seconde", "secondes"),
        forms("milliseconde", "millisecondes"),
        forms("microseconde", "microsecondes"),
        forms("nanoseconde", "nanosecondes"),
    ],
    short: [
        forms("an", "ans"),
        forms("j", "j"),
        forms("h", "h"),
        forms("min", "min"),
        forms("s", "s"),
        forms("ms", "ms"),
        forms("µs", "µs"),
        forms("ns", "ns"),
    ],
    phrases: Phrases {
        now: "maintenant",
        moment: "un instant",
        about_a_minute: "environ une minute",
        over_a_minute: "plus d'une minute",
        under_two_minutes: "moins de 2 minutes",
        about_an_hour: "environ une heure",
        over_an_hour: "plus d'une heure",
        about_a_day: "environ un jour",
        about_a_month: "environ un mois",
        about_a_year: "environ un an",
        seconds: forms("une seconde", "{} secondes"),
        minutes: forms("une minute", "{} minutes"),
        hours: forms("une heure", "{} heures"),
        days: forms("un jour", "{} jours"),
        months: forms("un mois", "{} mois"),
        years: forms("un an", "{} ans"),
        about: "environ {}",
        future: "dans {}",
        past: "il y a {}",
    },
};

////////////////////////////////////////////////////////////////////////////////////////
// Spanish
const SPANISH: Locale = Locale {
    tag: "es",
    narrow: ["a", "d", "h", "m", "s", "ms", "µs", "ns"],
    long: [
        forms("año", "años"),
        forms("día", "días"),
        forms("hora", "horas"),
        forms("minuto", "minutos"),
        forms("segundo", "segundos"),
        forms("milisegundo", "milisegundos"),
        forms("microsegundo", "microsegundos"),
        forms("nanosegundo", "nanosegundos"),
    ],
    short: [
        forms("a", "a"),
        forms("d", "d"),
        forms("h", "h"),
        forms("min", "min"),
        forms("s", "s"),
        forms("ms", "ms"),
        forms("µs", "µs"),
        forms("ns", "ns"),
    ],
    phrases: Phrases {
        now: "ahora",
        moment: "un momento",
        about_a_minute: "alrededor de un minuto",
        over_a_minute: "más de un minuto",
        under_two_minutes: "menos de 2 minutos",
        about_an_hour: "alrededor de una hora",
        over_an_hour: "más de una hora",
        about_a_day: "alrededor de un día",
        about_a_month: "alrededor de un mes",
        about_a_year: "alrededor de un año",
        seconds: forms("un segundo", "{} segundos"),
        minutes: forms("un minuto", "{} minutos"),
        hours: forms("una hora", "{} horas"),
        days: forms("un día", "{} días"),
        months: forms("un mes", "{} meses"),
        years: forms("un año", "{} años"),
        about: "alrededor de {}",
        future: "en {}",
        past: "hace {}",
    },
};
