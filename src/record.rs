// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::unit::{Unit, UNITS, UNIT_COUNT, YEAR_MS};

/// Largest sub-millisecond remainder, in nanoseconds.
const MAX_SUBMILLISECOND_NANOS: f64 = 999_999.0;

/// Duration record
///
/// `DurationRecord` breaks a non-negative magnitude (in milliseconds) into
/// one field per `Unit`. The sign is not stored: callers decide how to
/// display negative durations.
///
/// The pruning methods mutate the record in place and return it so that
/// calls may be chained.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DurationRecord {
    fields: [f64; UNIT_COUNT],
    total: f64,
}

/// Explicit field values for `DurationRecord::from_fields`.
///
/// Unset fields are 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialRecord {
    pub years: Option<f64>,
    pub days: Option<f64>,
    pub hours: Option<f64>,
    pub minutes: Option<f64>,
    pub seconds: Option<f64>,
    pub milliseconds: Option<f64>,
    pub microseconds: Option<f64>,
    pub nanoseconds: Option<f64>,
}

impl PartialRecord {
    fn get(&self, unit: Unit) -> Option<f64> {
        match unit {
            Unit::Years => self.years,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
            Unit::Milliseconds => self.milliseconds,
            Unit::Microseconds => self.microseconds,
            Unit::Nanoseconds => self.nanoseconds,
        }
    }
}

impl DurationRecord {
    /// Decompose a magnitude in milliseconds.
    ///
    /// `millis` should be non-negative. NaN and infinite input is not
    /// rejected: it produces NaN fields.
    ///
    pub fn from_millis(millis: f64) -> Self {
        let mut record = Self {
            fields: [0.0; UNIT_COUNT],
            total: millis,
        };

        let (years, remainder) = split_years(millis);
        record.fields[Unit::Years.index()] = years;
        for unit in &UNITS[Unit::Days.index()..=Unit::Milliseconds.index()] {
            record.fields[unit.index()] = (unit.count(remainder) % unit.ratio()).floor();
        }

        // Round the fractional millisecond to whole nanoseconds.
        let mut nanos = Unit::Nanoseconds.count(remainder - remainder.floor()).round();
        if nanos > MAX_SUBMILLISECOND_NANOS {
            nanos = MAX_SUBMILLISECOND_NANOS;
        }
        record.fields[Unit::Microseconds.index()] = (nanos / 1000.0).floor();
        record.fields[Unit::Nanoseconds.index()] = nanos % 1000.0;

        record
    }

    /// Build a record from explicit field values.
    ///
    /// The fields are stored as given (not normalized). The total magnitude
    /// is the weighted sum of the fields.
    ///
    /// Pruning assumes normalized fields: `prune_min` recomputes its unit
    /// from the total, so a field above its ratio (90 minutes) is not carried
    /// into the coarser fields. Use `from_millis(record.total())` to
    /// normalize first.
    ///
    pub fn from_fields(partial: &PartialRecord) -> Self {
        let mut fields = [0.0; UNIT_COUNT];
        for unit in UNITS {
            fields[unit.index()] = partial.get(unit).unwrap_or(0.0);
        }

        let mut record = Self { fields, total: 0.0 };
        record.total = record.to_millis();
        record
    }

    /// The value of one field.
    pub fn get(&self, unit: Unit) -> f64 {
        self.fields[unit.index()]
    }

    /// The magnitude this record was created from.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Reconstruct the magnitude from the fields.
    pub fn to_millis(&self) -> f64 {
        UNITS
            .iter()
            .map(|unit| self.fields[unit.index()] * unit.measure())
            .sum()
    }

    /// Check if every field is exactly 0.
    pub fn is_zero(&self) -> bool {
        self.fields.iter().all(|field| *field == 0.0)
    }

    /// The coarsest unit with a non-zero field.
    pub fn first_non_zero(&self) -> Option<Unit> {
        UNITS
            .into_iter()
            .find(|unit| self.fields[unit.index()] != 0.0)
    }

    /// Discard every unit finer than `unit`.
    ///
    /// The field for `unit` absorbs the discarded precision and may become
    /// fractional.
    ///
    pub fn prune_min(&mut self, unit: Unit) -> &mut Self {
        for finer in &UNITS[unit.index() + 1..] {
            self.fields[finer.index()] = 0.0;
        }
        self.fields[unit.index()] = self.extract(unit);
        self
    }

    /// Fold every unit coarser than `unit` into `unit`.
    pub fn prune_max(&mut self, unit: Unit) -> &mut Self {
        for coarser in &UNITS[..unit.index()] {
            let value = self.fields[coarser.index()];
            if value != 0.0 {
                self.fields[unit.index()] += value * (coarser.measure() / unit.measure());
                self.fields[coarser.index()] = 0.0;
            }
        }
        self
    }

    /// Keep only the `n` units starting at the first non-zero field.
    ///
    /// `n = 0` disables adaptive pruning. A zero record is left unchanged.
    ///
    pub fn prune_adaptive(&mut self, n: usize) -> &mut Self {
        if let Some((first, last)) = self.adaptive_window(n) {
            for unit in UNITS {
                if unit < first || unit > last {
                    self.fields[unit.index()] = 0.0;
                }
            }
        }
        self
    }

    /// The inclusive range of units that `prune_adaptive(n)` keeps.
    ///
    /// `None` when `n = 0` or the record is zero.
    pub fn adaptive_window(&self, n: usize) -> Option<(Unit, Unit)> {
        if n == 0 {
            return None;
        }

        let first = self.first_non_zero()?;
        let last = UNITS[first.index().saturating_add(n - 1).min(UNIT_COUNT - 1)];
        Some((first, last))
    }

    /// Zero one field.
    pub(crate) fn clear(&mut self, unit: Unit) {
        self.fields[unit.index()] = 0.0;
    }

    /// The unfloored value of `unit` in the total magnitude.
    ///
    /// Every unit other than years comes from the remainder after whole
    /// years, so days never exceed the length of one year.
    ///
    fn extract(&self, unit: Unit) -> f64 {
        let (_, remainder) = split_years(self.total);

        match unit {
            Unit::Years => self.total / YEAR_MS,
            Unit::Microseconds | Unit::Nanoseconds => {
                unit.count(remainder - remainder.floor()) % unit.ratio()
            }
            _ => unit.count(remainder) % unit.ratio(),
        }
    }
}

/// Split a magnitude into whole years and the remaining milliseconds.
fn split_years(millis: f64) -> (f64, f64) {
    let mut years = (millis / YEAR_MS).floor();
    let mut remainder = millis - years * YEAR_MS;
    if remainder < 0.0 {
        years -= 1.0;
        remainder += YEAR_MS;
    }
    (years, remainder)
}

impl Serialize for DurationRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DurationRecord", UNIT_COUNT)?;
        for unit in UNITS {
            state.serialize_field(unit.name(), &self.fields[unit.index()])?;
        }
        state.end()
    }
}
