// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, GlobalOptions};
use durfmt::format::FormattedDuration;
use durfmt::{AdaptiveDisplay, FormatOptions, Style, Unit};

#[derive(Args, Debug)]
pub struct Arguments {
    /// The duration in milliseconds.
    #[arg(allow_negative_numbers = true)]
    millis: String,

    /// Output style: digital, narrow, long, or short.
    #[arg(long, display_order = 0)]
    style: Option<Style>,

    /// Digits to show after the decimal point of seconds (0-9).
    #[arg(long, value_name = "DIGITS", display_order = 0)]
    fractional_digits: Option<usize>,

    /// The finest unit to display.
    #[arg(long, value_name = "UNIT", display_order = 0)]
    min_unit: Option<Unit>,

    /// The coarsest unit to display. Coarser units fold into it.
    #[arg(long, value_name = "UNIT", display_order = 0)]
    max_unit: Option<Unit>,

    /// Show at most this many units (0 shows all).
    #[arg(long, value_name = "N", display_order = 0)]
    adaptive_units: Option<usize>,

    /// Zero handling inside the adaptive window: auto or always.
    #[arg(long, value_name = "WHEN", display_order = 0)]
    adaptive_display: Option<AdaptiveDisplay>,

    /// Separator placed between units.
    #[arg(long, display_order = 0)]
    separator: Option<String>,

    /// Prefix negative durations with '-'.
    #[arg(long, display_order = 0)]
    signed: bool,
}

impl Arguments {
    /// Apply the command line options on top of `options`.
    fn apply(&self, mut options: FormatOptions) -> FormatOptions {
        if let Some(fractional_digits) = self.fractional_digits {
            options = options.with_fractional_digits(fractional_digits);
        }
        if let Some(unit) = self.min_unit {
            options = options.with_min_display_unit(unit);
        }
        if let Some(unit) = self.max_unit {
            options = options.with_max_display_unit(unit);
        }
        if let Some(adaptive_units) = self.adaptive_units {
            options = options.with_adaptive_units(adaptive_units);
        }
        if let Some(adaptive_display) = self.adaptive_display {
            options = options.with_adaptive_display(adaptive_display);
        }
        if let Some(separator) = &self.separator {
            options = options.with_separator(separator.clone());
        }
        if self.signed {
            options = options.with_signed(true);
        }
        options
    }
}

/// Format a duration.
///
/// Print the formatted duration to stdout.
///
pub fn format<W: Write>(
    options: &GlobalOptions,
    args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Formatting '{}'.", args.millis);

    let configuration = options.configuration()?;
    let millis = cli::parse_magnitude(&args.millis)?;
    let style = args.style.unwrap_or(configuration.style);
    let format_options = args.apply(configuration.format_options());

    writeln!(
        output,
        "{}",
        FormattedDuration {
            millis,
            style,
            options: &format_options,
        }
    )?;

    Ok(())
}
