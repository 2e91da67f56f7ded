// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use std::fmt;
use std::time::Duration;

use crate::formatter;
use crate::humanize::{self, HumanizeOptions};
use crate::options::{FormatOptions, Style};

/// Display a signed millisecond magnitude in a given style.
#[derive(Debug)]
pub struct FormattedDuration<'a> {
    pub millis: f64,
    pub style: Style,
    pub options: &'a FormatOptions,
}

impl fmt::Display for FormattedDuration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::format(self.millis, self.style, self.options))
    }
}

/// Display a `std::time::Duration` for people.
///
/// `{}` writes a phrase such as "about 2 minutes". The alternate form `{:#}`
/// writes the two most significant units in the narrow style, such as
/// `2m05s` or `0.125s`.
#[derive(Debug)]
pub struct HumanDuration(pub Duration);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_precision_loss)]
        let millis = self.0.as_nanos() as f64 / 1e6;

        if f.alternate() {
            let options = FormatOptions::default().with_adaptive_units(2);
            f.write_str(&formatter::format(millis, Style::Narrow, &options))
        } else {
            f.write_str(&humanize::humanize(millis, &HumanizeOptions::default()))
        }
    }
}
