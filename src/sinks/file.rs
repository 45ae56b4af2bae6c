//! Scoped append-to-file writes.

use super::console::{LineSink, emit};
use crate::error::{NotifyError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append one line to the file at `path`, creating the file if needed.
///
/// The file is opened, written and closed within this call; no handle is
/// kept between calls.
///
/// # Errors
///
/// Returns [`NotifyError::Open`] if the file cannot be opened for appending
/// (missing parent directory, a directory at `path`, no permission) and
/// [`NotifyError::Write`] if the write fails after opening.
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| NotifyError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    writeln!(file, "{}", line).map_err(|source| NotifyError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Append one line to `path`, reporting failures to `diagnostics`.
///
/// Never fails: an unopenable file produces `Failed to open file: <path>` on
/// the diagnostics sink and leaves the file system untouched.
pub fn append_or_report(path: &Path, line: &str, diagnostics: &dyn LineSink) {
    if let Err(err) = append_line(path, line) {
        #[cfg(feature = "tracing")]
        tracing::warn!(path = %path.display(), error = ?err, "log file append failed");

        emit(diagnostics, &err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");

        append_line(&path, "Error: one").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Error: one\n");
    }

    #[test]
    fn test_append_preserves_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        fs::write(&path, "existing\n").unwrap();

        append_line(&path, "Error: one").unwrap();
        append_line(&path, "Error: two").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "existing\nError: one\nError: two\n"
        );
    }

    #[test]
    fn test_append_to_directory_is_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = append_line(temp_dir.path(), "Error: nope");
        assert!(matches!(result, Err(NotifyError::Open { .. })));
    }

    #[test]
    fn test_append_or_report_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("log.txt");
        let diagnostics = MemorySink::new();

        append_or_report(&path, "Error: nope", &diagnostics);

        assert_eq!(
            diagnostics.lines(),
            vec![format!("Failed to open file: {}", path.display())]
        );
        assert!(!path.exists());
    }

    #[test]
    fn test_append_or_report_success_is_silent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        let diagnostics = MemorySink::new();

        append_or_report(&path, "Error: fine", &diagnostics);

        assert!(diagnostics.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "Error: fine\n");
    }
}
