//! Shift ciphers
//!
//! Two stateless transforms, each with an encrypt and a decrypt direction
//! where decrypt is the exact inverse of encrypt under the same key:
//!
//! - the alphabetic shift (Caesar cipher) moves ASCII letters within their
//!   own case and leaves every other character alone;
//! - the code point shift adds the key to every UTF-16 code unit, so a
//!   character outside the basic multilingual plane shifts as its two
//!   surrogate halves.
//!
//! Neither is secure in any sense. They are text transforms.

use crate::args::{Algorithm, Mode};
use crate::error::{CipherError, Result};

/// Number of letters in each case of the ASCII alphabet
const ALPHABET_SIZE: i64 = 26;

/// Encrypt with the alphabetic shift
pub fn encrypt_shift(message: &str, key: i32) -> String {
    shift_letters(message, i64::from(key))
}

/// Decrypt text produced by [`encrypt_shift`] with the same key
pub fn decrypt_shift(message: &str, key: i32) -> String {
    shift_letters(message, -i64::from(key))
}

/// Encrypt by adding `key` to every UTF-16 code unit
///
/// Fails if a shifted unit leaves the 16-bit range or the shifted units do
/// not form valid UTF-16 (a lone surrogate). No wraparound or clamping is
/// attempted; such results simply cannot be represented.
pub fn encrypt_unicode(message: &str, key: i32) -> Result<String> {
    shift_code_units(message, i64::from(key))
}

/// Decrypt text produced by [`encrypt_unicode`] with the same key
pub fn decrypt_unicode(message: &str, key: i32) -> Result<String> {
    shift_code_units(message, -i64::from(key))
}

/// Apply the selected algorithm in the selected direction
pub fn transform(message: &str, key: i32, algorithm: Algorithm, mode: Mode) -> Result<String> {
    match (algorithm, mode) {
        (Algorithm::Shift, Mode::Encrypt) => Ok(encrypt_shift(message, key)),
        (Algorithm::Shift, Mode::Decrypt) => Ok(decrypt_shift(message, key)),
        (Algorithm::Unicode, Mode::Encrypt) => encrypt_unicode(message, key),
        (Algorithm::Unicode, Mode::Decrypt) => decrypt_unicode(message, key),
    }
}

fn shift_letters(message: &str, shift: i64) -> String {
    message
        .chars()
        .map(|symbol| {
            let base = if symbol.is_ascii_uppercase() {
                b'A'
            } else if symbol.is_ascii_lowercase() {
                b'a'
            } else {
                return symbol;
            };
            let offset = (i64::from(symbol as u8 - base) + shift).rem_euclid(ALPHABET_SIZE);
            // offset is in [0, 26)
            char::from(base + offset as u8)
        })
        .collect()
}

fn shift_code_units(message: &str, shift: i64) -> Result<String> {
    let units = message
        .encode_utf16()
        .enumerate()
        .map(|(position, unit)| {
            let shifted = i64::from(unit) + shift;
            u16::try_from(shifted).map_err(|_| {
                CipherError::Transform(format!(
                    "shifted code unit {} at position {} is outside the UTF-16 range",
                    shifted, position
                ))
            })
        })
        .collect::<Result<Vec<u16>>>()?;

    String::from_utf16(&units)
        .map_err(|e| CipherError::Transform(format!("shifted text is not valid UTF-16: {}", e)))
}
