use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::artifact::{ARTIFACT_FORMAT_VERSION, ARTIFACT_MAGIC, CacheArtifact, Envelope, Staleness};
use crate::error::LangError;
use crate::fs::atomic_write;

/// File extension for cache artifacts.
const CACHE_EXT: &str = "cache";

/// Upper bound on an artifact's encoded size. Larger files are a miss.
const MAX_ARTIFACT_BYTES: usize = 64 * 1024 * 1024;

/// Why a cache lookup did not produce a usable artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheMiss {
    /// No artifact exists for the language.
    Absent,
    /// The artifact exists but could not be read.
    Unreadable(String),
    /// The artifact could not be decoded.
    Corrupt(String),
    /// The artifact was written by an incompatible format version.
    FormatVersion(u32),
    /// The artifact decoded but its sources changed.
    Stale(Staleness),
}

impl std::fmt::Display for CacheMiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "no cache"),
            Self::Unreadable(reason) => write!(f, "cache unreadable ({reason})"),
            Self::Corrupt(reason) => write!(f, "cache corrupt ({reason})"),
            Self::FormatVersion(version) => write!(f, "cache format v{version} is outdated"),
            Self::Stale(Staleness::Primary) => write!(f, "source file changed"),
            Self::Stale(Staleness::Parent) => write!(f, "inherited file changed"),
        }
    }
}

/// Outcome of [`CacheManager::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Hit(CacheArtifact),
    Miss(CacheMiss),
}

/// Reads and writes one artifact per language identifier.
///
/// All reads are fail-safe: missing, corrupt or stale artifacts are
/// reported as a [`CacheMiss`], never as an error.
#[derive(Debug, Clone)]
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns `<cache_dir>/<hex sha256 of language>.cache`.
    pub fn artifact_path(&self, language: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(language.as_bytes());
        let key = hex::encode(hasher.finalize());
        self.cache_dir.join(format!("{key}.{CACHE_EXT}"))
    }

    /// Loads the artifact for `language` if it is still valid for `primary`.
    pub fn load(&self, language: &str, primary: &Path) -> CacheLookup {
        let artifact = match self.read(language) {
            Ok(artifact) => artifact,
            Err(miss) => return CacheLookup::Miss(miss),
        };

        match artifact.check(primary) {
            Ok(()) => CacheLookup::Hit(artifact),
            Err(staleness) => CacheLookup::Miss(CacheMiss::Stale(staleness)),
        }
    }

    /// Reads and decodes the artifact for `language` without validating it.
    pub fn read(&self, language: &str) -> Result<CacheArtifact, CacheMiss> {
        let path = self.artifact_path(language);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(CacheMiss::Absent),
            Err(e) => return Err(CacheMiss::Unreadable(e.to_string())),
        };

        if raw.len() > MAX_ARTIFACT_BYTES {
            return Err(CacheMiss::Corrupt(format!(
                "{} bytes exceeds the artifact size limit",
                raw.len()
            )));
        }

        // Length prefixes are checked against the limit before allocating.
        let config = bincode::config::standard().with_limit::<MAX_ARTIFACT_BYTES>();
        let (envelope, read): (Envelope, usize) = bincode::serde::decode_from_slice(&raw, config)
            .map_err(|e| CacheMiss::Corrupt(e.to_string()))?;

        if envelope.magic != ARTIFACT_MAGIC {
            return Err(CacheMiss::Corrupt("bad magic bytes".to_string()));
        }
        if envelope.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(CacheMiss::FormatVersion(envelope.format_version));
        }
        if read != raw.len() {
            return Err(CacheMiss::Corrupt(format!(
                "{} trailing bytes",
                raw.len() - read
            )));
        }

        Ok(envelope.artifact)
    }

    /// Writes `artifact` as the cache for `language`, replacing any prior
    /// artifact. Returns the artifact path.
    pub fn store(&self, language: &str, artifact: &CacheArtifact) -> Result<PathBuf, LangError> {
        fs::create_dir_all(&self.cache_dir).map_err(|source| LangError::CacheIo {
            path: self.cache_dir.clone(),
            source,
        })?;

        let envelope = Envelope {
            magic: ARTIFACT_MAGIC,
            format_version: ARTIFACT_FORMAT_VERSION,
            artifact: artifact.clone(),
        };
        let bytes = bincode::serde::encode_to_vec(&envelope, bincode::config::standard())
            .map_err(|e| LangError::Serialization {
                reason: e.to_string(),
            })?;

        let path = self.artifact_path(language);
        atomic_write(&path, &bytes).map_err(|source| LangError::CacheIo {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Deletes the artifact for `language`. Returns `false` if none existed.
    pub fn remove(&self, language: &str) -> Result<bool, LangError> {
        let path = self.artifact_path(language);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(LangError::CacheIo { path, source }),
        }
    }
}
