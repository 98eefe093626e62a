//! The persisted compile result and its validity rules.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::fs::{ModTime, canonical_path};
use crate::table::TranslationTable;

/// Magic bytes identifying a langpack cache artifact.
pub(crate) const ARTIFACT_MAGIC: [u8; 4] = *b"LPAK";

/// Current artifact format version. Increment on breaking changes to
/// [`CacheArtifact`] or the envelope.
pub(crate) const ARTIFACT_FORMAT_VERSION: u32 = 2;

/// Compiled translations plus the timestamps they were compiled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheArtifact {
    /// The compiled key/value table.
    pub translations: TranslationTable,

    /// Modification time of the primary source at compile time.
    pub timestamp: ModTime,

    /// Parent file named by an `{inherits ...}` directive, if any.
    #[serde(rename = "parent-filename")]
    pub parent_filename: Option<PathBuf>,

    /// Modification time of the parent at compile time.
    #[serde(rename = "parent-timestamp")]
    pub parent_timestamp: Option<ModTime>,

    /// Canonical path of the primary source the table was compiled from.
    #[serde(rename = "source-filename")]
    pub source_filename: PathBuf,
}

/// Why a stored artifact no longer matches its sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// The primary source changed, is a different file, or can no longer be
    /// read.
    Primary,
    /// The recorded parent changed, or can no longer be read.
    Parent,
}

impl CacheArtifact {
    /// Checks the artifact against the live modification times.
    ///
    /// Valid iff `primary` is the file the artifact was compiled from, its
    /// mtime equals `timestamp` and, when a parent is recorded, the parent's
    /// mtime equals `parent_timestamp`.
    pub fn check(&self, primary: &Path) -> Result<(), Staleness> {
        if canonical_path(primary) != self.source_filename
            || ModTime::of(primary).ok() != Some(self.timestamp)
        {
            return Err(Staleness::Primary);
        }

        if let Some(parent) = &self.parent_filename
            && ModTime::of(parent).ok() != self.parent_timestamp
        {
            return Err(Staleness::Parent);
        }

        Ok(())
    }

    pub fn is_valid_for(&self, primary: &Path) -> bool {
        self.check(primary).is_ok()
    }
}

/// On-disk wrapper carrying format identification.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope {
    pub magic: [u8; 4],
    pub format_version: u32,
    pub artifact: CacheArtifact,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use filetime::FileTime;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path, seconds: i64) {
        filetime::set_file_mtime(path, FileTime::from_unix_time(seconds, 0)).unwrap();
    }

    fn artifact_for(primary: &Path, parent: Option<&Path>) -> CacheArtifact {
        CacheArtifact {
            translations: [("a", "1")].into_iter().collect(),
            timestamp: ModTime::of(primary).unwrap(),
            parent_filename: parent.map(Path::to_path_buf),
            parent_timestamp: parent.map(|p| ModTime::of(p).unwrap()),
            source_filename: canonical_path(primary),
        }
    }

    #[test]
    fn test_valid_when_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let primary = temp_dir.path().join("en.tpl");
        fs::write(&primary, "a = 1").unwrap();

        let artifact = artifact_for(&primary, None);

        assert_eq!(artifact.check(&primary), Ok(()));
        assert!(artifact.is_valid_for(&primary));
    }

    #[test]
    fn test_stale_when_primary_touched() {
        let temp_dir = TempDir::new().unwrap();
        let primary = temp_dir.path().join("en.tpl");
        fs::write(&primary, "a = 1").unwrap();
        touch(&primary, 1_600_000_000);

        let artifact = artifact_for(&primary, None);
        touch(&primary, 1_600_000_100);

        assert_eq!(artifact.check(&primary), Err(Staleness::Primary));
    }

    #[test]
    fn test_stale_when_parent_touched() {
        let temp_dir = TempDir::new().unwrap();
        let primary = temp_dir.path().join("en-GB.tpl");
        let parent = temp_dir.path().join("en.tpl");
        fs::write(&primary, "{inherits en}").unwrap();
        fs::write(&parent, "a = 1").unwrap();
        touch(&parent, 1_600_000_000);

        let artifact = artifact_for(&primary, Some(&parent));
        touch(&parent, 1_600_000_100);

        assert_eq!(artifact.check(&primary), Err(Staleness::Parent));
    }

    #[test]
    fn test_stale_when_parent_removed() {
        let temp_dir = TempDir::new().unwrap();
        let primary = temp_dir.path().join("en-GB.tpl");
        let parent = temp_dir.path().join("en.tpl");
        fs::write(&primary, "{inherits en}").unwrap();
        fs::write(&parent, "a = 1").unwrap();

        let artifact = artifact_for(&primary, Some(&parent));
        fs::remove_file(&parent).unwrap();

        assert_eq!(artifact.check(&primary), Err(Staleness::Parent));
    }

    #[test]
    fn test_stale_for_other_file_with_same_mtime() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("a").join("en.tpl");
        let second = temp_dir.path().join("b").join("en.tpl");
        for path in [&first, &second] {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "a = 1").unwrap();
            touch(path, 1_600_000_000);
        }

        let artifact = artifact_for(&first, None);

        assert!(artifact.is_valid_for(&first));
        assert_eq!(artifact.check(&second), Err(Staleness::Primary));
    }

    #[test]
    fn test_stale_when_primary_removed() {
        let temp_dir = TempDir::new().unwrap();
        let primary = temp_dir.path().join("en.tpl");
        fs::write(&primary, "a = 1").unwrap();

        let artifact = artifact_for(&primary, None);
        fs::remove_file(&primary).unwrap();

        assert_eq!(artifact.check(&primary), Err(Staleness::Primary));
    }
}
