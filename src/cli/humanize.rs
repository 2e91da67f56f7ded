// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, GlobalOptions};

#[derive(Args, Debug)]
pub struct Arguments {
    /// The duration in milliseconds. Negative values are in the past.
    #[arg(allow_negative_numbers = true)]
    millis: String,

    /// Phrase the duration relative to now ("in ..." or "... ago").
    #[arg(long, display_order = 0)]
    suffix: bool,
}

/// Humanize a duration.
///
/// Print the phrase to stdout.
///
pub fn humanize<W: Write>(
    options: &GlobalOptions,
    args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Humanizing '{}'.", args.millis);

    let configuration = options.configuration()?;
    let millis = cli::parse_magnitude(&args.millis)?;

    let mut humanize_options = configuration.humanize_options();
    if args.suffix {
        humanize_options = humanize_options.with_suffix(true);
    }

    writeln!(output, "{}", durfmt::humanize(millis, &humanize_options))?;

    Ok(())
}
