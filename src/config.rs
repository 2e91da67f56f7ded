// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use log::trace;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::builtin::BuiltIn;
use crate::humanize::HumanizeOptions;
use crate::options::{FormatOptions, Style};
use crate::Error;

/// User configuration
///
/// `Configuration` stores the defaults that the `durfmt` command applies
/// before command line options. It is read from `config.toml`.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Locale tag for formatted and humanized output.
    pub locale: String,

    /// Default style for `durfmt format` and `durfmt table`.
    pub style: Style,

    /// Add "in ..." / "... ago" to humanized output.
    pub suffix: bool,

    /// Default format options.
    pub format: FormatOptions,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::built_in()
    }
}

impl Configuration {
    /// Open the user configuration
    ///
    /// Open `$HOME/.config/durfmt/config.toml` if it exists. `DURFMT_HOME`
    /// replaces `$HOME` when set.
    ///
    /// # Errors
    /// Returns `Err(durfmt::Error)` when the file cannot be read or if there
    /// is a parse error.
    ///
    pub fn open() -> Result<Self, Error> {
        let home = match env::var("DURFMT_HOME") {
            Ok(durfmt_home) => PathBuf::from(durfmt_home),
            Err(_) => home::home_dir().ok_or_else(Error::NoHome)?,
        };
        let config_toml_path = home.join(".config").join("durfmt").join("config.toml");
        Self::open_from_path(config_toml_path)
    }

    fn open_from_path(config_toml_path: PathBuf) -> Result<Self, Error> {
        let config_file = match File::open(&config_toml_path) {
            Ok(file) => file,
            Err(error) => match error.kind() {
                io::ErrorKind::NotFound => {
                    trace!(
                        "'{}' does not exist, using the built-in configuration.",
                        &config_toml_path.display()
                    );
                    return Ok(Self::built_in());
                }
                _ => return Err(Error::FileRead(config_toml_path, error)),
            },
        };

        let mut buffer = BufReader::new(config_file);
        let mut config_string = String::new();
        buffer
            .read_to_string(&mut config_string)
            .map_err(|e| Error::FileRead(config_toml_path.clone(), e))?;

        trace!("Parsing '{}'.", &config_toml_path.display());
        Self::parse_str(&config_toml_path, &config_string)
    }

    /// Parse a `Configuration` from a TOML string
    ///
    /// Fields missing from the string take their built-in values.
    ///
    pub(crate) fn parse_str(path: &Path, toml: &str) -> Result<Self, Error> {
        let mut configuration: Configuration =
            toml::from_str(toml).map_err(|e| Error::TOMLParse(path.to_path_buf(), e))?;
        configuration.format.locale.clone_from(&configuration.locale);
        Ok(configuration)
    }

    /// The format options with this configuration's locale.
    pub fn format_options(&self) -> FormatOptions {
        self.format.clone().with_locale(self.locale.clone())
    }

    /// The humanize options with this configuration's locale and suffix.
    pub fn humanize_options(&self) -> HumanizeOptions {
        HumanizeOptions::default()
            .with_locale(self.locale.clone())
            .with_suffix(self.suffix)
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    /// Returns `Err(durfmt::Error::TOMLSerialize)` when serialization fails.
    ///
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }
}
