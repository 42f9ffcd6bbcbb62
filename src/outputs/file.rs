//! File output implementation
//!
//! Appends `<timestamp> <message>` lines to a file. There is no rotation and
//! no size cap; external tools are expected to rotate.

use crate::core::color::strip_ansi;
use crate::core::{timestamp, LogLevel, LogOutput, LoggerError, Result};
use fs2::FileExt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// One lock per destination file, shared by every `FileOutput` in the
/// process. Entries live for the rest of the process.
static PATH_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

/// Registry key for `path`: the canonical parent directory joined with the
/// file name, so `./a.log` and `a.log` share a lock. Falls back to the path
/// as given when the parent cannot be resolved.
fn lock_key(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

fn lock_for(path: &Path) -> Arc<Mutex<()>> {
    let locks = PATH_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    Arc::clone(locks.lock().entry(lock_key(path)).or_default())
}

pub struct FileOutput {
    path: PathBuf,
    name: String,
    lock: Arc<Mutex<()>>,
}

impl FileOutput {
    /// Create an output for `path`. The file is opened on each write, so a
    /// missing directory or bad permission shows up as a write failure.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: format!("file:{}", path.display()),
            lock: lock_for(&path),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep every entry on one line: drop color codes and escape line breaks
    fn sanitize(message: &str) -> String {
        strip_ansi(message)
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn append(&self, line: &str) -> Result<()> {
        let path = self.path.display().to_string();
        let _guard = self.lock.lock();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::file_output(&path, "cannot open for append", e))?;

        FileExt::lock_exclusive(&file).map_err(|e| LoggerError::file_lock(&path, e))?;
        let written = file
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::file_output(&path, "append failed", e));
        let _ = FileExt::unlock(&file);
        written
    }
}

impl LogOutput for FileOutput {
    fn write(&self, message: &str, _level: LogLevel) -> Result<()> {
        let line = format!("{} {}\n", timestamp::now(), Self::sanitize(message));
        self.append(&line)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_appends_without_truncating() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        fs::write(&log_path, "existing line\n")?;

        let output = FileOutput::new(&log_path);
        output.write("first", LogLevel::Info)?;
        output.write("second", LogLevel::Error)?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "existing line");
        assert!(lines[1].ends_with(" first"));
        assert!(lines[2].ends_with(" second"));
        Ok(())
    }

    #[test]
    fn test_line_is_sanitized() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        let output = FileOutput::new(&log_path);

        output.write("\x1b[31mred\x1b[0m\nforged line", LogLevel::Info)?;

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content.lines().count(), 1);
        assert!(content.trim_end().ends_with("red\\nforged line"));
        assert!(!content.contains('\x1b'));
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let output = FileOutput::new(dir.path().join("missing").join("app.log"));

        let err = output.write("lost", LogLevel::Info).unwrap_err();
        assert!(matches!(err, LoggerError::FileOutputError { .. }));
    }

    #[test]
    fn test_same_path_shares_lock() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.log");
        let a = FileOutput::new(&path);
        let b = FileOutput::new(&path);
        assert!(Arc::ptr_eq(&a.lock, &b.lock));
        assert_eq!(a.name(), format!("file:{}", path.display()));
    }

    #[test]
    fn test_equivalent_paths_share_lock() {
        let dir = tempdir().unwrap();
        let plain = FileOutput::new(dir.path().join("app.log"));
        let dotted = FileOutput::new(dir.path().join(".").join("app.log"));
        let other = FileOutput::new(dir.path().join("other.log"));

        assert!(Arc::ptr_eq(&plain.lock, &dotted.lock));
        assert!(!Arc::ptr_eq(&plain.lock, &other.lock));
        fs::create_dir(dir.path().join("sub")).unwrap();
        assert_eq!(
            lock_key(&dir.path().join("sub").join("..").join("app.log")),
            lock_key(&dir.path().join("app.log"))
        );
    }
}
