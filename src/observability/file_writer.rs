//! Rotating log file with size-based rotation and backup retention.
//!
//! [`RotatingFile`] is a plain [`io::Write`] sink. Wrapped in a `Mutex` it
//! becomes a `tracing-subscriber` writer, so the fmt layer never has to know
//! about rotation.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Size-rotated append-only file.
///
/// When a write would push the file past its size limit, the file is renamed
/// to `<name>.1`, older backups shift up by one (`.1` → `.2` …), and anything
/// beyond the retention count is removed. The file is opened lazily on the
/// first write, so construction never fails.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use tickoff::observability::RotatingFile;
///
/// let dir = tempfile::tempdir()?;
/// let mut file = RotatingFile::new(dir.path().join("tickoff.log"));
/// writeln!(file, "started")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Option<File>,
    len: u64,
}

impl RotatingFile {
    /// Creates a writer for `path` with the default limits.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: None,
            len: 0,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `n`th backup, `n >= 1`.
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            self.len = file.metadata()?.len();
            self.file = Some(file);
        }
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file not open"))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;
        self.len = 0;

        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.file.is_none() {
            self.open()?;
        }
        let incoming = buf.len() as u64;
        if self.len > 0 && self.len.saturating_add(incoming) > self.max_bytes {
            self.rotate()?;
        }

        let file = self.open()?;
        let written = file.write(buf)?;
        self.len += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_when_the_limit_is_crossed() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RotatingFile::with_limits(dir.path().join("app.log"), 10, 2);

        file.write_all(b"aaaaaaaa").unwrap();
        file.write_all(b"bbbbbbbb").unwrap();
        file.write_all(b"cccccccc").unwrap();
        file.flush().unwrap();

        assert_eq!(fs::read(file.path()).unwrap(), b"cccccccc");
        assert_eq!(fs::read(file.backup_path(1)).unwrap(), b"bbbbbbbb");
        assert_eq!(fs::read(file.backup_path(2)).unwrap(), b"aaaaaaaa");
    }

    #[test]
    fn keeps_only_the_configured_backups() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RotatingFile::with_limits(dir.path().join("app.log"), 4, 1);

        for chunk in [b"1111", b"2222", b"3333"] {
            file.write_all(chunk).unwrap();
        }

        assert_eq!(fs::read(file.backup_path(1)).unwrap(), b"2222");
        assert!(!file.backup_path(2).exists());
    }

    #[test]
    fn appends_to_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, b"old\n").unwrap();

        let mut file = RotatingFile::new(path.clone());
        file.write_all(b"new\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "old\nnew\n");
    }
}
