//! shiftcipher - reversible shift-cipher text transforms

#![forbid(unsafe_code)]

pub mod app;
pub mod args;
pub mod cipher;
pub mod error;
pub mod file_ops;
