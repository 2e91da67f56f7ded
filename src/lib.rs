// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

pub(crate) mod builtin;
pub mod config;
pub mod format;
pub mod formatter;
pub mod humanize;
pub mod locale;
pub mod options;
pub mod record;
pub mod unit;

use std::io;
use std::path::PathBuf;

pub use formatter::format;
pub use humanize::{humanize, HumanizeOptions};
pub use options::{AdaptiveDisplay, FormatOptions, Style};
pub use record::{DurationRecord, PartialRecord};
pub use unit::Unit;

/// Errors that may be encountered when using the durfmt crate.
///
/// Formatting and humanizing never fail. These errors come from the edges:
/// reading configuration files and parsing user input.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No home directory")]
    NoHome(),

    // IO errors
    #[error("I/O error: {0}")]
    IO(#[from] io::Error),

    #[error("Unable to read '{0}': {1}")]
    FileRead(PathBuf, #[source] io::Error),

    // serialization errors
    #[error("Unable to parse '{0}'.\n{1}")]
    TOMLParse(PathBuf, #[source] toml::de::Error),

    #[error("Unable to serialize the configuration: {0}")]
    TOMLSerialize(#[from] toml::ser::Error),

    #[error("Unable to serialize the duration record: {0}")]
    JSONSerialize(#[from] serde_json::Error),

    // input errors
    #[error("Unknown unit '{0}': expected one of years, days, hours, minutes, seconds, milliseconds, microseconds, or nanoseconds.")]
    UnknownUnit(String),

    #[error("Unable to parse '{0}' as a number of milliseconds.")]
    InvalidMagnitude(String),
}
