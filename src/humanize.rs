// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use serde::{Deserialize, Serialize};

use crate::locale::{Forms, Locale, Phrases};
use crate::options::DEFAULT_LOCALE;
use crate::unit::{DAY_MS, HOUR_MS, MINUTE_MS, SECOND_MS, YEAR_MS};

/// Counts that round by more than this relative error are prefixed with "about".
const ABOUT_THRESHOLD: f64 = 0.2;

/// Qualitative phrases that do not depend on the exact magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixed {
    AboutAMinute,
    OverAMinute,
    UnderTwoMinutes,
    AboutAnHour,
    OverAnHour,
    AboutADay,
    AboutAMonth,
    AboutAYear,
}

/// Units counted by humanized phrases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl Scale {
    /// Milliseconds in one of this scale. A month is one twelfth of a year.
    pub fn millis(self) -> f64 {
        match self {
            Self::Seconds => SECOND_MS,
            Self::Minutes => MINUTE_MS,
            Self::Hours => HOUR_MS,
            Self::Days => DAY_MS,
            Self::Months => YEAR_MS / 12.0,
            Self::Years => YEAR_MS,
        }
    }
}

/// The kinds of phrase a threshold entry produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phrase {
    /// The zero phrase. Never takes a suffix.
    Now,
    /// Anything up to one second.
    Moment,
    Fixed(Fixed),
    /// A rounded count of `Scale` units.
    Count(Scale),
}

/// Thresholds (inclusive upper bounds in milliseconds), ascending.
pub const THRESHOLDS: [(f64, Phrase); 16] = [
    (0.0, Phrase::Now),
    (SECOND_MS, Phrase::Moment),
    (45.0 * SECOND_MS - 1.0, Phrase::Count(Scale::Seconds)),
    (75.0 * SECOND_MS - 1.0, Phrase::Fixed(Fixed::AboutAMinute)),
    (90.0 * SECOND_MS - 1.0, Phrase::Fixed(Fixed::OverAMinute)),
    (105.0 * SECOND_MS - 1.0, Phrase::Count(Scale::Minutes)),
    (2.0 * MINUTE_MS - 1.0, Phrase::Fixed(Fixed::UnderTwoMinutes)),
    (45.0 * MINUTE_MS - 1.0, Phrase::Count(Scale::Minutes)),
    (75.0 * MINUTE_MS - 1.0, Phrase::Fixed(Fixed::AboutAnHour)),
    (90.0 * MINUTE_MS - 1.0, Phrase::Fixed(Fixed::OverAnHour)),
    (22.0 * HOUR_MS - 1.0, Phrase::Count(Scale::Hours)),
    (36.0 * HOUR_MS - 1.0, Phrase::Fixed(Fixed::AboutADay)),
    (25.0 * DAY_MS, Phrase::Count(Scale::Days)),
    (45.0 * DAY_MS, Phrase::Fixed(Fixed::AboutAMonth)),
    (319.0 * DAY_MS, Phrase::Count(Scale::Months)),
    (1.25 * YEAR_MS, Phrase::Fixed(Fixed::AboutAYear)),
];

/// Options that control `humanize`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct HumanizeOptions {
    /// Locale tag used to look up phrases.
    pub locale: String,

    /// Wrap the phrase in "in ..." or "... ago".
    pub with_suffix: bool,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.into(),
            with_suffix: false,
        }
    }
}

impl HumanizeOptions {
    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_suffix(mut self, with_suffix: bool) -> Self {
        self.with_suffix = with_suffix;
        self
    }
}

/// Describe a signed magnitude in milliseconds in natural language.
///
/// Returns phrases like "now", "about 2 minutes", or (with a suffix)
/// "in a moment" and "3 days ago". Never fails: NaN input produces a
/// "NaN years" phrase.
///
pub fn humanize(millis: f64, options: &HumanizeOptions) -> String {
    let phrases = &Locale::lookup(&options.locale).phrases;
    let absolute = millis.abs();

    let kind = THRESHOLDS
        .iter()
        .find(|(threshold, _)| *threshold >= absolute)
        .map(|(_, phrase)| *phrase);

    let base = match kind {
        Some(phrase) => build(phrases, phrase, absolute),
        None => {
            let years = (absolute / YEAR_MS).round();
            fill(phrases.years, years)
        }
    };

    if !options.with_suffix || kind == Some(Phrase::Now) {
        return base;
    }

    let template = if millis < 0.0 {
        phrases.past
    } else {
        phrases.future
    };
    template.replacen("{}", &base, 1)
}

/// Build the phrase for one threshold entry.
fn build(phrases: &Phrases, phrase: Phrase, absolute: f64) -> String {
    match phrase {
        Phrase::Now => phrases.now.to_string(),
        Phrase::Moment => phrases.moment.to_string(),
        Phrase::Fixed(fixed) => phrases.fixed(fixed).to_string(),
        Phrase::Count(scale) => {
            let exact = absolute / scale.millis();
            let rounded = exact.round();
            let counted = fill(phrases.count(scale), rounded);

            if ((rounded - exact) / exact).abs() > ABOUT_THRESHOLD {
                phrases.about.replacen("{}", &counted, 1)
            } else {
                counted
            }
        }
    }
}

fn fill(forms: Forms, count: f64) -> String {
    forms.select(count).replacen("{}", &count.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use serial_test::parallel;

    use super::*;

    fn en(millis: f64) -> String {
        humanize(millis, &HumanizeOptions::default())
    }

    fn en_suffix(millis: f64) -> String {
        humanize(millis, &HumanizeOptions::default().with_suffix(true))
    }

    #[test]
    #[parallel]
    fn thresholds_ascending() {
        for pair in THRESHOLDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    #[parallel]
    fn now() {
        assert_eq!(en(0.0), "now");
        assert_eq!(en(-0.0), "now");
        assert_eq!(en_suffix(0.0), "now");
        assert_eq!(en_suffix(-0.0), "now");
    }

    #[test]
    #[parallel]
    fn moment() {
        assert_eq!(en(0.5), "a moment");
        assert_eq!(en(500.0), "a moment");
        assert_eq!(en(1000.0), "a moment");
        assert_eq!(en_suffix(500.0), "in a moment");
        assert_eq!(en_suffix(-500.0), "a moment ago");
    }

    #[test]
    #[parallel]
    fn seconds() {
        assert_eq!(en(1200.0), "a second");
        assert_eq!(en(2000.0), "2 seconds");
        assert_eq!(en(10_000.0), "10 seconds");
        assert_eq!(en(44_000.0), "44 seconds");
        // 1.5 seconds rounds to 2 with a 33% error.
        assert_eq!(en(1500.0), "about 2 seconds");
    }

    #[test]
    #[parallel]
    fn minutes() {
        assert_eq!(en(45_000.0), "about a minute");
        assert_eq!(en(74_999.0), "about a minute");
        assert_eq!(en(75_000.0), "over a minute");
        assert_eq!(en(90_000.0), "about 2 minutes");
        assert_eq!(en(110_000.0), "under 2 minutes");
        assert_eq!(en(120_000.0), "2 minutes");
        assert_eq!(en(30.0 * MINUTE_MS), "30 minutes");
        assert_eq!(en(44.0 * MINUTE_MS), "44 minutes");
    }

    #[test]
    #[parallel]
    fn hours() {
        assert_eq!(en(45.0 * MINUTE_MS), "about an hour");
        assert_eq!(en(80.0 * MINUTE_MS), "over an hour");
        assert_eq!(en(90.0 * MINUTE_MS), "about 2 hours");
        assert_eq!(en(2.0 * HOUR_MS), "2 hours");
        assert_eq!(en(21.0 * HOUR_MS), "21 hours");
    }

    #[test]
    #[parallel]
    fn days() {
        assert_eq!(en(22.0 * HOUR_MS), "about a day");
        assert_eq!(en(36.0 * HOUR_MS), "about 2 days");
        assert_eq!(en(3.0 * DAY_MS), "3 days");
        assert_eq!(en(25.0 * DAY_MS), "25 days");
    }

    #[test]
    #[parallel]
    fn months_and_years() {
        assert_eq!(en(30.0 * DAY_MS), "about a month");
        assert_eq!(en(3.0 * YEAR_MS / 12.0), "3 months");
        assert_eq!(en(319.0 * DAY_MS), "10 months");
        assert_eq!(en(YEAR_MS), "about a year");
        assert_eq!(en(1.3 * YEAR_MS), "a year");
        assert_eq!(en(2.0 * YEAR_MS), "2 years");
        assert_eq!(en(10.4 * YEAR_MS), "10 years");
        assert_eq!(en_suffix(-2.0 * YEAR_MS), "2 years ago");
    }

    #[test]
    #[parallel]
    fn sign_symmetry() {
        let mut millis = 1.0;
        while millis < 1e12 {
            let future = en_suffix(millis);
            let past = en_suffix(-millis);
            let base = en(millis);
            assert_eq!(future, format!("in {base}"), "{millis}");
            assert_eq!(past, format!("{base} ago"), "{millis}");
            assert_eq!(en(-millis), base);
            millis = millis * 1.7 + 3.0;
        }
    }

    #[test]
    #[parallel]
    fn non_finite() {
        assert_eq!(en(f64::NAN), "NaN years");
        assert_eq!(en(f64::INFINITY), "inf years");
        assert_eq!(en_suffix(f64::NEG_INFINITY), "inf years ago");
    }

    #[test]
    #[parallel]
    fn locales() {
        let fr = HumanizeOptions::default().with_locale("fr");
        assert_eq!(humanize(0.0, &fr), "maintenant");
        assert_eq!(humanize(90_000.0, &fr), "environ 2 minutes");
        assert_eq!(
            humanize(-3.0 * DAY_MS, &fr.clone().with_suffix(true)),
            "il y a 3 jours"
        );

        let es = HumanizeOptions::default()
            .with_locale("es-MX")
            .with_suffix(true);
        assert_eq!(humanize(500.0, &es), "en un momento");
        assert_eq!(humanize(-2.0 * HOUR_MS, &es), "hace 2 horas");

        let unknown = HumanizeOptions::default().with_locale("tlh");
        assert_eq!(humanize(90_000.0, &unknown), "about 2 minutes");
    }
}
