//! File system utilities.

use filetime::FileTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A file modification time with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModTime {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,
    /// Nanoseconds past `seconds`.
    pub nanos: u32,
}

impl ModTime {
    /// Reads the modification time of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub fn of(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(FileTime::from_last_modification_time(&metadata).into())
    }
}

impl From<FileTime> for ModTime {
    fn from(time: FileTime) -> Self {
        Self {
            seconds: time.unix_seconds(),
            nanos: time.nanoseconds(),
        }
    }
}

/// Returns the canonical form of `path`, or `path` unchanged if it cannot be
/// resolved (for example because it does not exist).
pub fn canonical_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file gets a unique name in the same directory as the target, so
/// the rename stays on one filesystem and concurrent writers never share a
/// temp file. A reader sees either the old content or the new content, never
/// a partial write. The temp file is removed if any step fails.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::Builder::new()
        .prefix(".langpack-")
        .suffix(".tmp")
        .tempfile_in(parent)?;
    temp.write_all(content)?;
    temp.persist(path).map_err(|err| err.error)?;

    Ok(())
}
