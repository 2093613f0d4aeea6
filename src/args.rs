//! Command-line flag scanning
//!
//! Flags use a single leading dash and are consumed strictly in pairs:
//! the token at an even index names the flag, the following token is its
//! value. Unknown flags are reported and skipped together with their value.

use crate::error::{CipherError, Result};
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;

/// Flag names `parse_args` understands
const KNOWN_FLAGS: [&str; 6] = ["-key", "-data", "-mode", "-in", "-out", "-alg"];

/// Direction of the transform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Only `dec` selects decryption; anything else encrypts.
    fn from_flag(value: &str) -> Self {
        if value == "dec" {
            Mode::Decrypt
        } else {
            Mode::Encrypt
        }
    }
}

/// Which cipher to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Caesar shift over ASCII letters
    #[default]
    Shift,
    /// Shift of every UTF-16 code unit
    Unicode,
}

impl Algorithm {
    /// Only `unicode` selects the code point shift; anything else is `shift`.
    fn from_flag(value: &str) -> Self {
        if value == "unicode" {
            Algorithm::Unicode
        } else {
            Algorithm::Shift
        }
    }
}

/// Everything a single run needs, built once from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub key: i32,
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub inline_data: Option<String>,
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

/// Scan `tokens` (program name already stripped) into a [`Config`].
///
/// `on_unknown` is called with each unrecognized flag name, in the order
/// the flags appear, before any later error is returned.
pub fn parse_args<I, F>(tokens: I, mut on_unknown: F) -> Result<Config>
where
    I: IntoIterator<Item = OsString>,
    F: FnMut(&str),
{
    let tokens = tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            token.into_string().map_err(|_| {
                CipherError::ArgumentParse(format!("argument {} is not valid UTF-8", i + 1))
            })
        })
        .collect::<Result<Vec<String>>>()?;

    let mut config = Config::default();

    for pair in tokens.chunks(2) {
        let flag = pair[0].as_str();
        let Some(value) = pair.get(1) else {
            if KNOWN_FLAGS.contains(&flag) {
                debug!("ignoring trailing flag {} without a value", flag);
            } else {
                on_unknown(flag);
            }
            break;
        };

        match flag {
            "-key" => config.key = value.parse().map_err(|_| CipherError::InvalidKey)?,
            "-data" => config.inline_data = non_empty(value).map(str::to_owned),
            "-mode" => config.mode = Mode::from_flag(value),
            "-in" => config.input_path = non_empty(value).map(PathBuf::from),
            "-out" => config.output_path = non_empty(value).map(PathBuf::from),
            "-alg" => config.algorithm = Algorithm::from_flag(value),
            unknown => on_unknown(unknown),
        }
    }

    debug!("parsed configuration: {:?}", config);
    Ok(config)
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
