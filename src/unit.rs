// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Milliseconds in one average (365.25 day) year.
pub const YEAR_MS: f64 = 365.25 * DAY_MS;

/// Milliseconds in one day.
pub const DAY_MS: f64 = 24.0 * HOUR_MS;

/// Milliseconds in one hour.
pub const HOUR_MS: f64 = 60.0 * MINUTE_MS;

/// Milliseconds in one minute.
pub const MINUTE_MS: f64 = 60.0 * SECOND_MS;

/// Milliseconds in one second.
pub const SECOND_MS: f64 = 1000.0;

/// Number of units in the table.
pub const UNIT_COUNT: usize = 8;

/// Every unit, ordered from the coarsest to the finest.
pub const UNITS: [Unit; UNIT_COUNT] = [
    Unit::Years,
    Unit::Days,
    Unit::Hours,
    Unit::Minutes,
    Unit::Seconds,
    Unit::Milliseconds,
    Unit::Microseconds,
    Unit::Nanoseconds,
];

/// A unit of elapsed time.
///
/// Units are ordered from the coarsest (`Years`) to the finest
/// (`Nanoseconds`), so `Unit::Hours < Unit::Minutes`.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Years,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl Unit {
    /// The number of milliseconds in one of this unit.
    pub const fn measure(self) -> f64 {
        match self {
            Self::Years => YEAR_MS,
            Self::Days => DAY_MS,
            Self::Hours => HOUR_MS,
            Self::Minutes => MINUTE_MS,
            Self::Seconds => SECOND_MS,
            Self::Milliseconds => 1.0,
            Self::Microseconds => 1e-3,
            Self::Nanoseconds => 1e-6,
        }
    }

    /// The modulo base that extracts this unit from a coarser accumulator.
    ///
    /// Years are never wrapped. Days wrap at the average year length.
    pub const fn ratio(self) -> f64 {
        match self {
            Self::Years => f64::INFINITY,
            Self::Days => 365.25,
            Self::Hours => 24.0,
            Self::Minutes | Self::Seconds => 60.0,
            Self::Milliseconds | Self::Microseconds | Self::Nanoseconds => 1000.0,
        }
    }

    /// Position of the unit in `UNITS`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The number of this unit in `millis` milliseconds.
    ///
    /// Sub-millisecond units multiply rather than divide so that whole
    /// milliseconds convert exactly.
    pub fn count(self, millis: f64) -> f64 {
        match self {
            Self::Microseconds => millis * 1e3,
            Self::Nanoseconds => millis * 1e6,
            _ => millis / self.measure(),
        }
    }

    /// True for milliseconds, microseconds, and nanoseconds.
    pub const fn is_subsecond(self) -> bool {
        matches!(
            self,
            Self::Milliseconds | Self::Microseconds | Self::Nanoseconds
        )
    }

    /// The canonical (plural, lowercase) name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
            Self::Nanoseconds => "nanoseconds",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Parse a unit from its plural or singular name (case insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        UNITS
            .into_iter()
            .find(|unit| {
                let name = unit.name();
                lower == name || lower == name[..name.len() - 1]
            })
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serial_test::parallel;

    use super::*;

    #[test]
    #[parallel]
    fn measures() {
        assert_eq!(Unit::Years.measure(), 31_557_600_000.0);
        assert_eq!(Unit::Days.measure(), 86_400_000.0);
        assert_eq!(Unit::Hours.measure(), 3_600_000.0);
        assert_eq!(Unit::Minutes.measure(), 60_000.0);
        assert_eq!(Unit::Seconds.measure(), 1000.0);
        assert_eq!(Unit::Milliseconds.measure(), 1.0);
    }

    #[test]
    #[parallel]
    fn order() {
        for pair in UNITS.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].measure() > pair[1].measure());
        }

        for (i, unit) in UNITS.iter().enumerate() {
            assert_eq!(unit.index(), i);
        }
    }

    #[test]
    #[parallel]
    fn ratios_match_measures() {
        // Every ratio except the one for days is the exact quotient of adjacent measures.
        for pair in UNITS[1..].windows(2) {
            assert_eq!(
                (pair[0].measure() / pair[1].measure()).round(),
                pair[1].ratio()
            );
        }
        assert_eq!(Unit::Days.ratio(), Unit::Years.measure() / Unit::Days.measure());
        assert!(Unit::Years.ratio().is_infinite());
    }

    #[test]
    #[parallel]
    fn count() {
        assert_eq!(Unit::Hours.count(7_200_000.0), 2.0);
        assert_eq!(Unit::Microseconds.count(4_443_454.0), 4_443_454_000.0);
        assert_eq!(Unit::Nanoseconds.count(2.0), 2_000_000.0);
        assert!(Unit::Seconds.count(f64::NAN).is_nan());
    }

    #[test]
    #[parallel]
    fn parse() {
        assert_eq!("hours".parse::<Unit>().unwrap(), Unit::Hours);
        assert_eq!("Minute".parse::<Unit>().unwrap(), Unit::Minutes);
        assert_eq!(" nanoseconds ".parse::<Unit>().unwrap(), Unit::Nanoseconds);
        assert!(matches!(
            "fortnight".parse::<Unit>(),
            Err(Error::UnknownUnit(_))
        ));
    }

    #[test]
    #[parallel]
    fn subsecond() {
        assert!(!Unit::Seconds.is_subsecond());
        assert!(Unit::Milliseconds.is_subsecond());
        assert!(Unit::Nanoseconds.is_subsecond());
    }
}
