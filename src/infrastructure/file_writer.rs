//! Append-only line writer with size-based rotation.
//!
//! Shared by the JSON-lines metrics sink and the trace exporter. When the
//! active file grows past its limit it is shifted to `<name>.1`, older backups
//! move up by one (`.1` → `.2`, ...) and the oldest beyond the retention count
//! is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size threshold before rotation (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated files kept next to the active one.
pub const DEFAULT_BACKUPS: usize = 3;

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write, so constructing a writer for
/// a path that cannot be created yet does not fail.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors while rotating, opening or writing, or if a
    /// previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| std::io::Error::new(ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| std::io::Error::new(ErrorKind::Other, "no file available"))?;

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() >= self.max_bytes)
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> std::io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        fs::rename(&self.file_path, self.backup_path(1))
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}
