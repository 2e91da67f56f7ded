// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use clap::Args;
use console::Style;
use log::{debug, warn};
use std::error::Error;
use std::io::Write;

use crate::cli::{self, GlobalOptions};
use crate::ui::{Alignment, Item, Table};
use durfmt::{FormatOptions, HumanizeOptions};

#[derive(Args, Debug)]
pub struct Arguments {
    /// Durations in milliseconds. Use 'table -' to read from stdin.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    /// Hide the table header.
    #[arg(long, display_order = 0)]
    no_header: bool,
}

/// Format one row of the table.
fn make_row(millis: f64, format: &FormatOptions, humanize: &HumanizeOptions) -> Vec<Item> {
    let mut result = Vec::with_capacity(6);
    result.push(
        Item::new(millis.to_string(), Style::new().bold()).with_alignment(Alignment::Right),
    );
    result.push(
        Item::new(
            durfmt::format(millis, durfmt::Style::Digital, format),
            Style::new().green(),
        )
        .with_alignment(Alignment::Right),
    );
    result.push(
        Item::new(
            durfmt::format(millis, durfmt::Style::Narrow, format),
            Style::new().yellow(),
        )
        .with_alignment(Alignment::Right),
    );
    result.push(Item::new(
        durfmt::format(millis, durfmt::Style::Short, format),
        Style::new().blue(),
    ));
    result.push(Item::new(
        durfmt::format(millis, durfmt::Style::Long, format),
        Style::new().cyan(),
    ));
    result.push(Item::new(
        durfmt::humanize(millis, humanize),
        Style::new().italic().dim(),
    ));
    result
}

/// Show durations in every style.
///
/// Print a table with one row per value to stdout.
///
pub fn table<W: Write>(
    options: &GlobalOptions,
    args: &Arguments,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    debug!("Showing the duration table.");

    let configuration = options.configuration()?;
    let format = configuration.format_options();
    let humanize = configuration.humanize_options();

    let magnitudes = cli::parse_magnitudes(&args.values)?;
    if magnitudes.is_empty() {
        warn!("No durations given.");
        return Ok(());
    }

    let mut table = Table::new().with_hide_header(args.no_header);
    table.header = vec![
        Item::new("Milliseconds".to_string(), Style::new().underlined())
            .with_alignment(Alignment::Right),
        Item::new("Digital".to_string(), Style::new().underlined())
            .with_alignment(Alignment::Right),
        Item::new("Narrow".to_string(), Style::new().underlined())
            .with_alignment(Alignment::Right),
        Item::new("Short".to_string(), Style::new().underlined()),
        Item::new("Long".to_string(), Style::new().underlined()),
        Item::new("Human".to_string(), Style::new().underlined()),
    ];

    for millis in magnitudes {
        table.items.push(make_row(millis, &format, &humanize));
    }

    table.write(output)?;
    output.flush()?;

    Ok(())
}
