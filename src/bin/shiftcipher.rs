//! shiftcipher CLI - shift-cipher text transformer
//!
//! Usage: shiftcipher -key N [-mode enc|dec] [-alg shift|unicode]
//!                    (-data TEXT | -in FILE) [-out FILE]
//!
//! Diagnostics go to stderr through `RUST_LOG`; everything meant for the
//! user, including error messages, goes to stdout.

use std::io;
use std::process;

use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut console = stdout.lock();

    if let Err(e) = shiftcipher::app::run(std::env::args_os().skip(1), &mut console) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
