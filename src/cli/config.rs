// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use clap::Args;
use log::{debug, info};
use std::error::Error;
use std::io::Write;

use crate::cli::GlobalOptions;

#[derive(Args, Debug)]
pub struct Arguments {}

/// Show the configuration.
///
/// Print the configuration to stdout in toml format.
///
pub fn config<W: Write>(
    options: &GlobalOptions,
    _args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing the configuration.");

    let configuration = options.configuration()?;

    info!("Effective configuration:");
    write!(output, "{}", configuration.to_toml()?)?;

    Ok(())
}
