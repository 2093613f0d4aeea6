use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to the user.
    Internal,

    /// The user provided invalid input or asked for something impossible
    /// to complete.
    User,
}

/// Every way a run can fail.
///
/// The `Display` output of each variant is the exact line printed to the
/// user, so golden-output tests can compare against it directly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CipherError {
    /// `-key` was not a 32-bit signed integer.
    #[error("Error: Key must be a number.")]
    InvalidKey,

    /// The argument list could not be scanned at all.
    #[error("Error parsing arguments: {0}")]
    ArgumentParse(String),

    /// Neither inline data nor an input file was given.
    #[error("Error: No input data provided.")]
    MissingInput,

    /// The input file could not be read as UTF-8 text.
    #[error("Error reading file: {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cipher could not produce a valid string.
    #[error("Error in encrypt/decrypt: {0}")]
    Transform(String),

    /// The output file could not be created or written.
    #[error("Error writing file: {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard output went away underneath us.
    #[error("Error writing to console: {0}")]
    Console(#[source] io::Error),
}

impl CipherError {
    /// Broad category of the failure.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CipherError::InvalidKey
            | CipherError::ArgumentParse(_)
            | CipherError::MissingInput
            | CipherError::WriteOutput { .. } => ErrorCategory::User,
            CipherError::ReadInput { source, .. } => {
                if source.kind() == io::ErrorKind::NotFound
                    || source.kind() == io::ErrorKind::InvalidData
                {
                    ErrorCategory::User
                } else {
                    ErrorCategory::Internal
                }
            }
            CipherError::Transform(_) | CipherError::Console(_) => ErrorCategory::Internal,
        }
    }

    /// Whether the run can report this error and return normally.
    ///
    /// Output failures are the only ones that are not: there is nowhere
    /// left to put the result.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CipherError::WriteOutput { .. } | CipherError::Console(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CipherError>;
