// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use std::cmp;

use crate::locale::Locale;
use crate::options::{AdaptiveDisplay, FormatOptions, Style, MAX_FRACTIONAL_DIGITS};
use crate::record::DurationRecord;
use crate::unit::{Unit, UNITS};

/// Units that the digital and narrow styles show as whole numbers.
const CLOCK_UNITS: [Unit; 5] = [
    Unit::Years,
    Unit::Days,
    Unit::Hours,
    Unit::Minutes,
    Unit::Seconds,
];

/// Format a signed magnitude in milliseconds.
///
/// The sign is dropped unless `options.signed` is set. Formatting never
/// fails: unknown locales use English and NaN input renders as `NaN`.
///
/// # Examples
///
/// ```
/// use durfmt::{format, FormatOptions, Style};
///
/// let options = FormatOptions::default();
/// assert_eq!(format(-4_443_454.0, Style::Digital, &options), "1:14:03.454");
/// assert_eq!(format(982_440_990.0, Style::Narrow, &options), "11d08h54m00.990s");
///
/// let options = options.with_adaptive_units(2);
/// assert_eq!(format(7_323_000.0, Style::Narrow, &options), "2h02m");
/// ```
///
pub fn format(millis: f64, style: Style, options: &FormatOptions) -> String {
    let layout = Layout::new(millis, style, options);

    let body = match style {
        Style::Digital => layout.digital(),
        Style::Narrow => layout.narrow(),
        Style::Long | Style::Short => layout.list(style),
    };

    if options.signed && millis < 0.0 && !layout.record.is_zero() {
        format!("-{body}")
    } else {
        body
    }
}

/// A pruned record and everything needed to assemble its parts.
struct Layout<'a> {
    record: DurationRecord,
    options: &'a FormatOptions,
    locale: &'static Locale,
    window: Option<(Unit, Unit)>,
    fractional_digits: usize,
}

impl<'a> Layout<'a> {
    fn new(millis: f64, style: Style, options: &'a FormatOptions) -> Self {
        let mut record = DurationRecord::from_millis(millis.abs());

        if let Some(unit) = options.min_display_unit {
            record.prune_min(unit);
        }
        if let Some(unit) = options.max_display_unit {
            record.prune_max(max_unit_for(style, unit));
        }

        let mut fractional_digits = options.fractional_digits.min(MAX_FRACTIONAL_DIGITS);
        let window = record.adaptive_window(options.adaptive_units);
        if let Some((first, _)) = window {
            record.prune_adaptive(options.adaptive_units);
            if options.adaptive_display == AdaptiveDisplay::Always && first == Unit::Seconds {
                fractional_digits = 0;
            }
        }

        truncate_subseconds(&mut record, fractional_digits);

        Self {
            record,
            options,
            locale: Locale::lookup(&options.locale),
            window,
            fractional_digits,
        }
    }

    /// The finest whole unit shown by the digital and narrow styles.
    fn clock_end(&self) -> Unit {
        cmp::min(
            self.options.min_display_unit.unwrap_or(Unit::Seconds),
            Unit::Seconds,
        )
    }

    /// Check if `unit` is shown under the adaptive window.
    ///
    /// Every unit is shown when there is no window.
    fn displays(&self, unit: Unit) -> bool {
        match self.window {
            Some((first, last)) => {
                first <= unit
                    && unit <= last
                    && (self.options.adaptive_display == AdaptiveDisplay::Always
                        || self.record.get(unit).floor() != 0.0)
            }
            None => true,
        }
    }

    fn has_subseconds(&self) -> bool {
        UNITS
            .into_iter()
            .filter(|unit| unit.is_subsecond())
            .any(|unit| self.record.get(unit) != 0.0)
    }

    /// Number of digits to show after the decimal point of seconds.
    fn visible_digits(&self) -> usize {
        let finest = [self.window.map(|(_, last)| last), self.options.min_display_unit]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(Unit::Nanoseconds);

        let available = match finest {
            Unit::Milliseconds => 3,
            Unit::Microseconds => 6,
            Unit::Nanoseconds => MAX_FRACTIONAL_DIGITS,
            _ => 0,
        };

        cmp::min(self.fractional_digits, available)
    }

    /// The decimal point and sub-second digits, or an empty string.
    ///
    /// Digits are truncated, never rounded.
    fn fraction(&self) -> String {
        let digits = self.visible_digits();
        if digits == 0 {
            return String::new();
        }
        if self.window.is_some()
            && self.options.adaptive_display == AdaptiveDisplay::Auto
            && !self.has_subseconds()
        {
            return String::new();
        }

        let mut fraction = format!(
            "{:03}{:03}{:03}",
            self.record.get(Unit::Milliseconds).floor(),
            self.record.get(Unit::Microseconds).floor(),
            self.record.get(Unit::Nanoseconds).floor()
        );
        fraction.truncate(digits);
        format!(".{fraction}")
    }

    /// `D+HH:MM:SS.fff`
    ///
    /// Clock parts finer than the adaptive window are dropped. Zero parts
    /// inside the window are always shown.
    fn digital(&self) -> String {
        let last = match self.window {
            Some((_, window_last)) => cmp::min(self.clock_end(), window_last),
            None => self.clock_end(),
        };
        let years = self.record.get(Unit::Years);
        let days = self.record.get(Unit::Days);

        let mut result = String::new();
        if years != 0.0 || last == Unit::Years {
            result.push_str(&pad(years, 1));
            result.push_str(self.locale.narrow_marker(Unit::Years));
        }
        if last >= Unit::Days && (years != 0.0 || days != 0.0 || last == Unit::Days) {
            result.push_str(&pad(days, 1));
            result.push_str(self.locale.narrow_marker(Unit::Days));
        }
        let prefixed = !result.is_empty();

        let mut parts = Vec::with_capacity(3);
        let hours = self.record.get(Unit::Hours);
        if last >= Unit::Hours && (hours != 0.0 || prefixed || last == Unit::Hours) {
            parts.push(pad(hours, if prefixed { 2 } else { 1 }));
        }
        if last >= Unit::Minutes {
            parts.push(pad(self.record.get(Unit::Minutes), 2));
        }
        if last >= Unit::Seconds {
            let mut seconds = pad(self.record.get(Unit::Seconds), 2);
            seconds.push_str(&self.fraction());
            parts.push(seconds);
        }

        result.push_str(&parts.join(self.options.separator_for(Style::Digital)));
        result
    }

    /// `11d08h54m00.990s`
    ///
    /// The first unit is not padded. Padding cascades: without years or
    /// days the hours are bare, without hours the minutes are bare, and so
    /// on.
    fn narrow(&self) -> String {
        let last = self.clock_end();
        let candidates = CLOCK_UNITS.into_iter().filter(|unit| *unit <= last);

        let mut units: Vec<Unit> = if self.window.is_some() {
            let mut units: Vec<Unit> = candidates.filter(|unit| self.displays(*unit)).collect();
            if last == Unit::Seconds
                && !units.contains(&Unit::Seconds)
                && !self.fraction().is_empty()
            {
                units.push(Unit::Seconds);
            }
            units
        } else {
            let first = candidates
                .clone()
                .find(|unit| self.record.get(*unit) != 0.0)
                .unwrap_or(last);
            candidates.filter(|unit| *unit >= first).collect()
        };

        if units.is_empty() {
            units.push(last);
        }

        let parts: Vec<String> = units
            .iter()
            .enumerate()
            .map(|(i, unit)| {
                let width = match unit {
                    Unit::Years | Unit::Days => 1,
                    _ if i == 0 => 1,
                    _ => 2,
                };

                let mut part = pad(self.record.get(*unit), width);
                if *unit == Unit::Seconds {
                    part.push_str(&self.fraction());
                }
                part.push_str(self.locale.narrow_marker(*unit));
                part
            })
            .collect();

        parts.join(self.options.separator_for(Style::Narrow))
    }

    /// `1 hour, 14 minutes, 3 seconds, 454 milliseconds`
    fn list(&self, style: Style) -> String {
        let last = self
            .options
            .min_display_unit
            .unwrap_or(Unit::Nanoseconds);
        let name = |unit: Unit, value: f64| match style {
            Style::Short => self.locale.short_name(unit, value),
            _ => self.locale.long_name(unit, value),
        };

        let parts: Vec<String> = UNITS
            .into_iter()
            .filter(|unit| *unit <= last)
            .filter_map(|unit| {
                let value = self.record.get(unit).floor();
                let shown = if self.window.is_some() {
                    self.displays(unit)
                } else {
                    value != 0.0
                };
                shown.then(|| format!("{value} {}", name(unit, value)))
            })
            .collect();

        if parts.is_empty() {
            let unit = cmp::min(last, Unit::Seconds);
            return format!("0 {}", name(unit, 0.0));
        }

        parts.join(self.options.separator_for(style))
    }
}

/// The unit that `max_display_unit` folds into for `style`.
///
/// The digital and narrow styles show sub-second units only as a fraction
/// of seconds, so they fold into seconds instead.
fn max_unit_for(style: Style, unit: Unit) -> Unit {
    match style {
        Style::Digital | Style::Narrow => cmp::min(unit, Unit::Seconds),
        Style::Long | Style::Short => unit,
    }
}

/// Drop sub-second units that `fractional_digits` cannot show.
///
/// 0 digits drop milliseconds, 3 or fewer drop microseconds, and fewer
/// than 7 drop nanoseconds.
fn truncate_subseconds(record: &mut DurationRecord, fractional_digits: usize) {
    if fractional_digits == 0 {
        record.clear(Unit::Milliseconds);
    }
    if fractional_digits <= 3 {
        record.clear(Unit::Microseconds);
    }
    if fractional_digits < 7 {
        record.clear(Unit::Nanoseconds);
    }
}

/// Format the whole part of `value` with at least `width` digits.
fn pad(value: f64, width: usize) -> String {
    format!("{:0width$}", value.floor())
}

#[cfg(test)]
mod tests {
    use serial_test::parallel;

    use super::*;
    use crate::unit::{DAY_MS, HOUR_MS, MINUTE_MS, UNIT_COUNT, YEAR_MS};

    const STYLES: [Style; 4] = [Style::Digital, Style::Narrow, Style::Long, Style::Short];

    fn narrow(millis: f64, options: &FormatOptions) -> String {
        format(millis, Style::Narrow, options)
    }

    fn default_options() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    #[parallel]
    fn digital() {
        let options = default_options();
        assert_eq!(format(-4_443_454.0, Style::Digital, &options), "1:14:03.454");
        assert_eq!(format(0.0, Style::Digital, &options), "00:00.000");
        assert_eq!(format(59_000.0, Style::Digital, &options), "00:59.000");
        assert_eq!(format(61_500.0, Style::Digital, &options), "01:01.500");
        assert_eq!(
            format(982_440_990.0, Style::Digital, &options),
            "11d08:54:00.990"
        );
        assert_eq!(
            format(YEAR_MS + 2.0 * HOUR_MS, Style::Digital, &options),
            "1y0d02:00:00.000"
        );
    }

    #[test]
    #[parallel]
    fn digital_separator() {
        let options = default_options()
            .with_separator(".")
            .with_fractional_digits(0);
        assert_eq!(format(4_443_454.0, Style::Digital, &options), "1.14.03");
    }

    #[test]
    #[parallel]
    fn narrow_cascade() {
        let options = default_options();
        assert_eq!(narrow(982_440_990.0, &options), "11d08h54m00.990s");
        assert_eq!(narrow(4_443_454.0, &options), "1h14m03.454s");
        assert_eq!(narrow(843_454.0, &options), "14m03.454s");
        assert_eq!(narrow(3_454.0, &options), "3.454s");
        assert_eq!(narrow(DAY_MS + 5.0 * MINUTE_MS, &options), "1d00h05m00.000s");
        assert_eq!(
            narrow(2.0 * YEAR_MS + 3.0 * DAY_MS, &options),
            "2y3d00h00m00.000s"
        );
    }

    #[test]
    #[parallel]
    fn narrow_adaptive() {
        let options = default_options().with_adaptive_units(2);
        assert_eq!(narrow(7_323_000.0, &options), "2h02m");
        assert_eq!(narrow(3_600_000.0, &options), "1h");
        assert_eq!(narrow(3_603_000.0, &options), "1h");
        assert_eq!(narrow(63_500.0, &options), "1m03s");
        assert_eq!(narrow(3_500.0, &options), "3.500s");
        assert_eq!(narrow(3_000.0, &options), "3s");
        assert_eq!(narrow(500.0, &options), "0.500s");
        assert_eq!(narrow(982_440_990.0, &options), "11d08h");
        assert_eq!(narrow(0.0, &options), "0.000s");

        let options = default_options().with_adaptive_units(3);
        assert_eq!(narrow(63_500.0, &options), "1m03.500s");
        assert_eq!(narrow(7_323_000.0, &options), "2h02m03s");
    }

    #[test]
    #[parallel]
    fn narrow_adaptive_always() {
        let options = default_options()
            .with_adaptive_units(2)
            .with_adaptive_display(AdaptiveDisplay::Always);
        assert_eq!(narrow(3_600_000.0, &options), "1h00m");
        assert_eq!(narrow(DAY_MS, &options), "1d00h");
        // Seconds lead the window, so they are shown whole.
        assert_eq!(narrow(3_500.0, &options), "3s");

        let options = options.with_adaptive_units(3);
        assert_eq!(narrow(63_000.0, &options), "1m03.000s");
    }

    #[test]
    #[parallel]
    fn adaptive_large_window() {
        let options = default_options().with_adaptive_units(usize::MAX);
        let all = default_options().with_adaptive_units(UNIT_COUNT);
        for style in STYLES {
            assert_eq!(
                format(7_323_000.5, style, &options),
                format(7_323_000.5, style, &all)
            );
        }
        assert_eq!(narrow(7_323_000.5, &options), "2h02m03s");
    }

    #[test]
    #[parallel]
    fn digital_adaptive() {
        let options = default_options().with_adaptive_units(2);
        assert_eq!(format(3_600_000.0, Style::Digital, &options), "1:00");
        assert_eq!(format(7_323_000.0, Style::Digital, &options), "2:02");
        assert_eq!(format(63_500.0, Style::Digital, &options), "01:03");
        assert_eq!(format(982_440_990.0, Style::Digital, &options), "11d08");

        let options = default_options().with_adaptive_units(4);
        assert_eq!(format(63_500.0, Style::Digital, &options), "01:03.500");
    }

    #[test]
    #[parallel]
    fn fractional_digits() {
        let options = default_options();
        assert_eq!(
            narrow(982_440_990.0, &options.clone().with_fractional_digits(2)),
            "11d08h54m00.99s"
        );
        assert_eq!(
            narrow(982_440_990.0, &options.clone().with_fractional_digits(0)),
            "11d08h54m00s"
        );
        assert_eq!(
            narrow(1.234_567, &options.clone().with_fractional_digits(4)),
            "0.0012s"
        );
        assert_eq!(
            narrow(1.234_567, &options.clone().with_fractional_digits(6)),
            "0.001234s"
        );
        assert_eq!(
            narrow(1.234_567, &options.clone().with_fractional_digits(9)),
            "0.001234567s"
        );
        assert_eq!(
            narrow(1.234_567, &options.clone().with_fractional_digits(20)),
            "0.001234567s"
        );
        // Truncation, not rounding.
        assert_eq!(
            narrow(1_999.0, &options.clone().with_fractional_digits(1)),
            "1.9s"
        );
    }

    #[test]
    #[parallel]
    fn long_and_short() {
        let options = default_options();
        assert_eq!(
            format(4_443_454.0, Style::Long, &options),
            "1 hour, 14 minutes, 3 seconds, 454 milliseconds"
        );
        assert_eq!(
            format(4_443_454.0, Style::Short, &options),
            "1 hr 14 mins 3 secs 454 ms"
        );
        assert_eq!(format(DAY_MS + 1000.0, Style::Long, &options), "1 day, 1 second");
        assert_eq!(
            format(2.0 * YEAR_MS, Style::Long, &options),
            "2 years"
        );
        assert_eq!(
            format(1.5, Style::Long, &options.clone().with_fractional_digits(6)),
            "1 millisecond, 500 microseconds"
        );
        assert_eq!(
            format(
                4_443_454.0,
                Style::Long,
                &options.clone().with_separator(" and ")
            ),
            "1 hour and 14 minutes and 3 seconds and 454 milliseconds"
        );
    }

    #[test]
    #[parallel]
    fn long_adaptive() {
        let options = default_options().with_adaptive_units(2);
        assert_eq!(format(7_323_000.0, Style::Long, &options), "2 hours, 2 minutes");
        assert_eq!(format(3_600_000.0, Style::Long, &options), "1 hour");

        let options = options.with_adaptive_display(AdaptiveDisplay::Always);
        assert_eq!(
            format(3_600_000.0, Style::Long, &options),
            "1 hour, 0 minutes"
        );
    }

    #[test]
    #[parallel]
    fn zero() {
        let options = default_options();
        assert_eq!(format(0.0, Style::Digital, &options), "00:00.000");
        assert_eq!(format(0.0, Style::Narrow, &options), "0.000s");
        assert_eq!(format(0.0, Style::Long, &options), "0 seconds");
        assert_eq!(format(0.0, Style::Short, &options), "0 secs");

        // Anything that truncates to zero renders the same way.
        for style in STYLES {
            assert_eq!(
                format(0.000_4, style, &options),
                format(0.0, style, &options)
            );
            assert_eq!(
                format(-0.0, style, &options.clone().with_adaptive_units(2)),
                format(0.0, style, &options)
            );
        }
    }

    #[test]
    #[parallel]
    fn min_display_unit() {
        let options = default_options().with_min_display_unit(Unit::Minutes);
        assert_eq!(narrow(4_443_454.0, &options), "1h14m");
        assert_eq!(format(4_443_454.0, Style::Digital, &options), "1:14");
        assert_eq!(
            format(4_443_454.0, Style::Long, &options),
            "1 hour, 14 minutes"
        );
        assert_eq!(narrow(0.0, &options), "0m");
        assert_eq!(format(0.0, Style::Long, &options), "0 minutes");

        let options = default_options().with_min_display_unit(Unit::Seconds);
        assert_eq!(narrow(4_443_454.0, &options), "1h14m03s");
        assert_eq!(format(4_443_454.0, Style::Digital, &options), "1:14:03");

        let options = default_options().with_min_display_unit(Unit::Milliseconds);
        assert_eq!(narrow(1.5, &options), "0.001s");
    }

    #[test]
    #[parallel]
    fn max_display_unit() {
        let options = default_options().with_max_display_unit(Unit::Hours);
        assert_eq!(narrow(982_440_990.0, &options), "272h54m00.990s");
        assert_eq!(
            format(982_440_990.0, Style::Digital, &options),
            "272:54:00.990"
        );

        let options = default_options().with_max_display_unit(Unit::Seconds);
        assert_eq!(narrow(4_443_454.0, &options), "4443.454s");
        assert_eq!(format(4_443_454.0, Style::Digital, &options), "00:4443.454");
        assert_eq!(
            format(4_443_454.0, Style::Short, &options),
            "4443 secs 454 ms"
        );
    }

    #[test]
    #[parallel]
    fn subsecond_max_display_unit() {
        for unit in [Unit::Milliseconds, Unit::Microseconds, Unit::Nanoseconds] {
            let options = default_options().with_max_display_unit(unit);
            assert_eq!(narrow(4_443_454.0, &options), "4443.454s");
            assert_eq!(
                format(4_443_454.0, Style::Digital, &options),
                "00:4443.454"
            );
        }

        let options = default_options().with_max_display_unit(Unit::Milliseconds);
        assert_eq!(
            format(4_443_454.0, Style::Long, &options),
            "4443454 milliseconds"
        );
        assert_eq!(format(4_443_454.0, Style::Short, &options), "4443454 ms");
    }

    #[test]
    #[parallel]
    fn signed() {
        let options = default_options().with_signed(true);
        assert_eq!(format(-4_443_454.0, Style::Digital, &options), "-1:14:03.454");
        assert_eq!(format(4_443_454.0, Style::Digital, &options), "1:14:03.454");
        assert_eq!(format(-0.0, Style::Narrow, &options), "0.000s");
        assert_eq!(format(-0.000_1, Style::Narrow, &options), "0.000s");
        assert_eq!(format(-2_000.0, Style::Long, &options), "-2 seconds");
    }

    #[test]
    #[parallel]
    fn locales() {
        let fr = default_options().with_locale("fr-FR");
        assert_eq!(narrow(982_440_990.0, &fr), "11j08h54m00.990s");
        assert_eq!(
            format(4_443_454.0, Style::Long, &fr),
            "1 heure, 14 minutes, 3 secondes, 454 millisecondes"
        );

        let es = default_options().with_locale("es");
        assert_eq!(format(2.0 * DAY_MS, Style::Long, &es), "2 días");

        let unknown = default_options().with_locale("tlh");
        assert_eq!(
            narrow(982_440_990.0, &unknown),
            narrow(982_440_990.0, &default_options())
        );
    }

    #[test]
    #[parallel]
    fn non_finite() {
        let options = default_options();
        for style in STYLES {
            let text = format(f64::NAN, style, &options);
            assert!(text.contains("NaN"), "{text}");
        }
        assert!(format(f64::INFINITY, Style::Narrow, &options).starts_with("inf"));
    }

    #[test]
    #[parallel]
    fn pure() {
        let options = default_options().with_adaptive_units(3);
        for style in STYLES {
            assert_eq!(
                format(123_456_789.0, style, &options),
                format(123_456_789.0, style, &options)
            );
        }
    }
}
