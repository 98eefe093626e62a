//! Locating and reading translation source files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LangError;
use crate::fs::ModTime;
use crate::language::validate_language;

/// A translation file on disk as seen at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Path of the file.
    pub path: PathBuf,
    /// Whether the file existed when described.
    pub exists: bool,
    /// Modification time, if the file exists.
    pub modified: Option<ModTime>,
}

impl SourceDescriptor {
    /// Describes the file at `path`.
    pub fn describe(path: PathBuf) -> Self {
        let modified = if path.is_file() {
            ModTime::of(&path).ok()
        } else {
            None
        };

        Self {
            exists: modified.is_some(),
            modified,
            path,
        }
    }
}

/// Which file a language load reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceResolution {
    /// The requested language file exists.
    Requested(SourceDescriptor),
    /// The requested file is missing; the default-language file is used.
    Fallback {
        /// The requested (missing) file.
        requested: SourceDescriptor,
        /// The default-language file that will be read.
        fallback: SourceDescriptor,
    },
}

impl SourceResolution {
    /// The file that will be compiled.
    pub fn source(&self) -> &SourceDescriptor {
        match self {
            Self::Requested(source) | Self::Fallback { fallback: source, .. } => source,
        }
    }

    /// Path of the file that will be compiled.
    pub fn path(&self) -> &Path {
        &self.source().path
    }

    /// Returns `true` if the default-language file replaced the requested one.
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Returns `<dir>/<name>.<extension>`.
pub fn source_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}

/// Resolves the file to compile for `language`.
///
/// Falls back to `<default_language>.<extension>` in the same directory when
/// the requested file does not exist.
///
/// # Errors
///
/// Returns [`LangError::InvalidLanguage`] for a bad identifier and
/// [`LangError::NoTranslationSource`] when neither file exists.
pub fn resolve_source(
    dir: &Path,
    language: &str,
    default_language: &str,
    extension: &str,
) -> Result<SourceResolution, LangError> {
    validate_language(language)?;
    validate_language(default_language)?;

    let requested = SourceDescriptor::describe(source_path(dir, language, extension));
    if requested.exists {
        return Ok(SourceResolution::Requested(requested));
    }

    let fallback = SourceDescriptor::describe(source_path(dir, default_language, extension));
    if fallback.exists {
        return Ok(SourceResolution::Fallback {
            requested,
            fallback,
        });
    }

    Err(LangError::NoTranslationSource {
        language: language.to_string(),
        requested: requested.path,
        fallback: fallback.path,
    })
}

/// Reads a translation file as UTF-8, dropping a leading byte-order mark.
pub(crate) fn read_source(path: &Path) -> Result<String, LangError> {
    let content = fs::read_to_string(path).map_err(|source| LangError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}
