//! Input resolution and output emission
//!
//! Text is always handled whole: files are read fully into memory as UTF-8
//! and written in a single pass.

use crate::args::Config;
use crate::error::{CipherError, Result};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Read an entire file as UTF-8 text
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CipherError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` to `path`, creating the file or truncating an existing one
///
/// The text is written exactly; no trailing newline is added.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    let write_error = |source| CipherError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    Ok(())
}

/// Obtain the text to transform
///
/// Inline data wins over an input file. An input file that exists but is
/// empty yields empty text rather than an error.
pub fn resolve_input(config: &Config) -> Result<String> {
    if let Some(data) = &config.inline_data {
        debug!("using {} bytes of inline data", data.len());
        return Ok(data.clone());
    }

    match &config.input_path {
        Some(path) => {
            let text = read_text_file(path)?;
            debug!("read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        None => Err(CipherError::MissingInput),
    }
}

/// Send the result to the output file if one was given, otherwise print it
/// to `console` followed by a newline
pub fn emit_output(config: &Config, text: &str, console: &mut dyn Write) -> Result<()> {
    match &config.output_path {
        Some(path) => {
            write_text_file(path, text)?;
            debug!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => writeln!(console, "{}", text).map_err(CipherError::Console)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("text.txt");

        write_text_file(&path, "Hello File!").unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "Hello File!");
        assert_eq!(fs::read(&path).unwrap(), b"Hello File!");
    }

    #[test]
    fn test_write_truncates_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("text.txt");

        fs::write(&path, "a much longer previous content").unwrap();
        write_text_file(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent_file_123.txt");

        let err = read_text_file(&path).unwrap_err();
        match err {
            CipherError::ReadInput { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.bin");
        fs::write(&path, [0x61, 0xff, 0xfe]).unwrap();

        let err = read_text_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Error reading file: "));
    }

    #[test]
    fn test_write_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        let err = write_text_file(temp_dir.path(), "content").unwrap_err();
        assert!(matches!(err, CipherError::WriteOutput { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_resolve_prefers_inline_data() {
        let config = Config {
            inline_data: Some("inline".into()),
            input_path: Some(PathBuf::from("does-not-exist.txt")),
            ..Config::default()
        };
        assert_eq!(resolve_input(&config).unwrap(), "inline");
    }

    #[test]
    fn test_resolve_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "xyz").unwrap();

        let config = Config {
            input_path: Some(path),
            ..Config::default()
        };
        assert_eq!(resolve_input(&config).unwrap(), "xyz");
    }

    #[test]
    fn test_resolve_empty_file_is_empty_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let config = Config {
            input_path: Some(path),
            ..Config::default()
        };
        assert_eq!(resolve_input(&config).unwrap(), "");
    }

    #[test]
    fn test_resolve_without_input() {
        let err = resolve_input(&Config::default()).unwrap_err();
        assert!(matches!(err, CipherError::MissingInput));
    }

    #[test]
    fn test_emit_to_console_appends_newline() {
        let mut console = Vec::new();
        emit_output(&Config::default(), "bcd", &mut console).unwrap();
        assert_eq!(console, b"bcd\n");
    }

    #[test]
    fn test_emit_to_file_has_no_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        let config = Config {
            output_path: Some(path.clone()),
            ..Config::default()
        };

        let mut console = Vec::new();
        emit_output(&config, "cde", &mut console).unwrap();
        assert!(console.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "cde");
    }
}
