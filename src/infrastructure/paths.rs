//! Path utilities for locating tickoff's files on the host.
//!
//! Handles tilde expansion and the default data directory, where relative log
//! file paths are resolved.

use std::path::{Path, PathBuf};

/// Directory name used under the platform data directory.
const APP_DIR: &str = "tickoff";

/// Returns the data directory for tickoff files.
///
/// Resolves to the platform data directory (`$XDG_DATA_HOME` or
/// `~/.local/share` on Linux, `~/Library/Application Support` on macOS) joined
/// with `tickoff`. Falls back to `~/.tickoff`, and finally to a relative
/// `.tickoff` when no home directory is known.
///
/// # Examples
///
/// ```
/// use tickoff::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("tickoff") || data_dir.ends_with(".tickoff"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            dirs::home_dir()
                .unwrap_or_default()
                .join(format!(".{APP_DIR}"))
        },
        |dir| dir.join(APP_DIR),
    )
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading `~`, and every path when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tickoff::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde(Path::new("/var/log/tickoff.log")), Path::new("/var/log/tickoff.log"));
/// assert_eq!(expand_tilde(Path::new("logs/tickoff.log")), Path::new("logs/tickoff.log"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Resolves a configured file path.
///
/// `~` is expanded; a path that is still relative is placed under
/// [`get_data_dir`].
#[must_use]
pub fn resolve_in_data_dir(path: &Path) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        get_data_dir().join(expanded)
    }
}
