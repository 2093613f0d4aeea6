//! The whole run: parse arguments, resolve input, transform, emit output

use crate::args;
use crate::cipher;
use crate::error::{CipherError, Result};
use crate::file_ops;
use log::debug;
use std::ffi::OsString;
use std::io::Write;

/// Execute one invocation against `console` (standard output in the binary)
///
/// Every user-facing message, warnings and errors alike, is written to
/// `console` as a single line. Recoverable errors are reported there and
/// the run returns `Ok(())`. Only failures to deliver output are returned
/// as `Err`.
pub fn run<I>(tokens: I, console: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
{
    match execute(tokens, console) {
        Err(e) if e.is_recoverable() => {
            debug!("aborting run ({:?} error): {:?}", e.category(), e);
            writeln!(console, "{}", e).map_err(CipherError::Console)
        }
        result => result,
    }
}

fn execute<I>(tokens: I, console: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
{
    // Warnings are printed as they are found, so a console failure here is
    // held until scanning completes.
    let mut console_error = None;
    let parsed = args::parse_args(tokens, |flag| {
        if console_error.is_none() {
            if let Err(e) = writeln!(console, "Unknown argument {}", flag) {
                console_error = Some(e);
            }
        }
    });
    if let Some(e) = console_error {
        return Err(CipherError::Console(e));
    }
    let config = parsed?;

    let input = file_ops::resolve_input(&config)?;
    let output = cipher::transform(&input, config.key, config.algorithm, config.mode)?;
    file_ops::emit_output(&config, &output, console)
}
