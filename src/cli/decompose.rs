// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use clap::Args;
use log::debug;
use std::error::Error;
use std::io::Write;

use crate::cli::{self, GlobalOptions};
use durfmt::{DurationRecord, Unit};

#[derive(Args, Debug)]
pub struct Arguments {
    /// The duration in milliseconds.
    #[arg(allow_negative_numbers = true)]
    millis: String,

    /// Fold finer units into this unit.
    #[arg(long, value_name = "UNIT", display_order = 0)]
    min_unit: Option<Unit>,

    /// Fold coarser units into this unit.
    #[arg(long, value_name = "UNIT", display_order = 0)]
    max_unit: Option<Unit>,

    /// Keep only this many units, starting at the most significant one.
    #[arg(long, value_name = "N", display_order = 0)]
    adaptive_units: Option<usize>,

    /// Print compact JSON on one line.
    #[arg(long, display_order = 0)]
    compact: bool,
}

/// Decompose a duration.
///
/// Print the duration record to stdout in JSON format.
///
pub fn decompose<W: Write>(
    _options: &GlobalOptions,
    args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Decomposing '{}'.", args.millis);

    let millis = cli::parse_magnitude(&args.millis)?;
    let mut record = DurationRecord::from_millis(millis);

    if let Some(unit) = args.min_unit {
        record.prune_min(unit);
    }
    if let Some(unit) = args.max_unit {
        record.prune_max(unit);
    }
    if let Some(n) = args.adaptive_units {
        record.prune_adaptive(n);
    }

    let json = if args.compact {
        serde_json::to_string(&record).map_err(durfmt::Error::from)?
    } else {
        serde_json::to_string_pretty(&record).map_err(durfmt::Error::from)?
    };
    writeln!(output, "{json}")?;

    Ok(())
}
