// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use log::trace;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use crate::unit::Unit;

/// The default number of digits after the decimal point.
pub const DEFAULT_FRACTIONAL_DIGITS: usize = 3;

/// The largest number of fractional digits that carry information.
pub const MAX_FRACTIONAL_DIGITS: usize = 9;

/// The locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en";

/// Output shapes.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Clock-like: `1:14:03.454`.
    #[default]
    Digital,

    /// Compact with unit markers: `1h14m03.454s`.
    Narrow,

    /// Spelled out: `1 hour, 14 minutes, 3 seconds, 454 milliseconds`.
    Long,

    /// Abbreviated: `1 hr 14 mins 3 secs 454 ms`.
    Short,
}

/// How zero units inside the adaptive window are displayed.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptiveDisplay {
    /// Omit zero units.
    #[default]
    Auto,

    /// Show every unit in the window, even when zero.
    Always,
}

/// Options that control `format`.
///
/// Construct with `FormatOptions::default()` and the `with_*` methods, or
/// with struct update syntax.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Locale tag used to look up unit names and markers.
    #[serde(skip, default = "default_locale")]
    pub locale: String,

    /// Number of digits shown after the decimal point of seconds.
    pub fractional_digits: usize,

    /// The finest unit to display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_display_unit: Option<Unit>,

    /// The coarsest unit to display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_display_unit: Option<Unit>,

    /// Show at most this many units, starting at the most significant one.
    /// 0 disables the adaptive window.
    pub adaptive_units: usize,

    /// Zero handling inside the adaptive window.
    pub adaptive_display: AdaptiveDisplay,

    /// Replace the style's default separator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Prefix negative durations with `-`.
    pub signed: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            fractional_digits: DEFAULT_FRACTIONAL_DIGITS,
            min_display_unit: None,
            max_display_unit: None,
            adaptive_units: 0,
            adaptive_display: AdaptiveDisplay::Auto,
            separator: None,
            signed: false,
        }
    }
}

impl FormatOptions {
    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_fractional_digits(mut self, fractional_digits: usize) -> Self {
        self.fractional_digits = fractional_digits;
        self
    }

    pub fn with_min_display_unit(mut self, unit: Unit) -> Self {
        self.min_display_unit = Some(unit);
        self
    }

    pub fn with_max_display_unit(mut self, unit: Unit) -> Self {
        self.max_display_unit = Some(unit);
        self
    }

    pub fn with_adaptive_units(mut self, adaptive_units: usize) -> Self {
        self.adaptive_units = adaptive_units;
        self
    }

    pub fn with_adaptive_display(mut self, adaptive_display: AdaptiveDisplay) -> Self {
        self.adaptive_display = adaptive_display;
        self
    }

    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn with_signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    /// The separator to place between parts in the given style.
    pub(crate) fn separator_for(&self, style: Style) -> &str {
        if let Some(separator) = &self.separator {
            return separator;
        }

        match style {
            Style::Digital => ":",
            Style::Narrow => "",
            Style::Long => ", ",
            Style::Short => " ",
        }
    }
}

impl FromStr for Style {
    type Err = Infallible;

    /// Parse a style name. Unknown names select `Style::Digital`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "digital" => Self::Digital,
            "narrow" => Self::Narrow,
            "long" => Self::Long,
            "short" => Self::Short,
            _ => {
                trace!("Unknown style '{s}', using digital.");
                Self::Digital
            }
        })
    }
}

impl FromStr for AdaptiveDisplay {
    type Err = Infallible;

    /// Parse a display policy. Unknown names select `AdaptiveDisplay::Auto`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "always" => Self::Always,
            "auto" => Self::Auto,
            _ => {
                trace!("Unknown adaptive display '{s}', using auto.");
                Self::Auto
            }
        })
    }
}

/// The default value for locale.
fn default_locale() -> String {
    DEFAULT_LOCALE.into()
}
