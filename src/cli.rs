// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

pub mod config;
pub mod decompose;
pub mod format;
pub mod humanize;
pub mod table;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::trace;
use std::io;

use durfmt::config::Configuration;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, subcommand_required = true)]
pub struct Options {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// When to print colored output.
    #[arg(long, value_name="WHEN", value_enum, default_value_t=ColorMode::Auto, global=true, env="DURFMT_COLOR", display_order=2)]
    pub color: ColorMode,

    /// Locale for unit names and phrases (en, fr, es).
    ///
    /// Defaults to the configuration file's locale. Unknown locales fall
    /// back to English.
    #[arg(long, value_name = "TAG", global = true, env = "DURFMT_LOCALE", display_order = 2)]
    pub locale: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ColorMode {
    /// Automatically detect when to print colored output.
    Auto,

    /// Always print colored output.
    Always,

    /// Never print colored output.
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a duration given in milliseconds.
    ///
    /// `durfmt format` decomposes MS into years, days, hours, minutes,
    /// seconds, and sub-second units and prints it in the selected style.
    /// Options not given on the command line are taken from the
    /// configuration file.
    ///
    /// EXAMPLES
    ///
    /// * Print a clock-like duration:
    ///
    ///   durfmt format 4443454 --style=digital
    ///
    /// * Spell out the two most significant units:
    ///
    ///   durfmt format 4443454 --style=long --adaptive-units=2
    ///
    /// * Show whole seconds only:
    ///
    ///   durfmt format 65432 --min-unit=seconds
    ///
    /// * Format a negative duration with its sign:
    ///
    ///   durfmt format -1500 --signed
    ///
    Format(format::Arguments),

    /// Describe a duration in natural language.
    ///
    /// `durfmt humanize` prints phrases like "about 2 minutes". Pass
    /// `--suffix` to describe the duration relative to now: non-negative
    /// values are in the future and negative values are in the past.
    ///
    /// EXAMPLES
    ///
    /// * Describe 90 seconds:
    ///
    ///   durfmt humanize 90000
    ///
    /// * Describe three days ago in French:
    ///
    ///   durfmt humanize -259200000 --suffix --locale=fr
    ///
    Humanize(humanize::Arguments),

    /// Print the decomposed duration record as JSON.
    ///
    /// `durfmt decompose` prints each unit field of MS and the total. Use
    /// `--min-unit`, `--max-unit`, and `--adaptive-units` to see how the
    /// record is pruned before display.
    ///
    /// EXAMPLES
    ///
    /// * Decompose an hour and a bit:
    ///
    ///   durfmt decompose 4443454
    ///
    /// * Fold everything into minutes:
    ///
    ///   durfmt decompose 4443454 --max-unit=minutes
    ///
    Decompose(decompose::Arguments),

    /// Show durations in every style.
    ///
    /// `durfmt table` prints one row for each given value with the digital,
    /// narrow, short, and long formats and the humanized phrase.
    ///
    /// EXAMPLES
    ///
    /// * Compare styles for several values:
    ///
    ///   durfmt table 0 1500 4443454
    ///
    /// * Read values from stdin, one per line:
    ///
    ///   seq 0 1000 5000 | durfmt table -
    ///
    Table(table::Arguments),

    /// Show the configuration.
    ///
    /// Print the effective configuration in TOML format. This includes the
    /// user-provided `config.toml` (when present) and the `--locale` option.
    ///
    /// EXAMPLES
    ///
    /// * Show the configuration:
    ///
    ///   durfmt config
    ///
    Config(config::Arguments),
}

impl GlobalOptions {
    /// Open the configuration and apply the global options to it.
    ///
    /// # Errors
    /// `Err(durfmt::Error)` when the configuration file cannot be read.
    ///
    pub fn configuration(&self) -> Result<Configuration, durfmt::Error> {
        let mut configuration = Configuration::open()?;
        if let Some(locale) = &self.locale {
            trace!("Using locale '{locale}' from the command line.");
            configuration.locale.clone_from(locale);
            configuration.format.locale.clone_from(locale);
        }
        Ok(configuration)
    }
}

/// Parse one magnitude in milliseconds.
///
/// Accepts anything `f64` parses, including `NaN` and `inf`.
///
pub fn parse_magnitude(value: &str) -> Result<f64, durfmt::Error> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| durfmt::Error::InvalidMagnitude(value.to_string()))
}

/// Parse magnitudes passed in on the command line.
///
/// # Returns
/// `Ok(Vec<f64>)` listing all the given magnitudes.
/// - One "-" input reads magnitudes from stdin, one per line. Blank lines
///   are skipped.
/// - Otherwise, parse the given values from the command line.
///
/// `Err(durfmt::Error)` when there is an error reading from stdin or a value
/// is not a number.
///
pub fn parse_magnitudes(values: &[String]) -> Result<Vec<f64>, durfmt::Error> {
    let mut magnitudes = Vec::with_capacity(values.len());

    if values.len() == 1 && values[0] == "-" {
        trace!("Reading magnitudes from stdin.");
        for line in io::stdin().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            magnitudes.push(parse_magnitude(&line)?);
        }
    } else {
        for value in values {
            magnitudes.push(parse_magnitude(value)?);
        }
    }

    Ok(magnitudes)
}
