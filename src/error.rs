//! Error types for loading, compiling and caching translations.

use std::path::PathBuf;

/// Errors raised while resolving, compiling or persisting translations.
///
/// Cache reads never produce these: a corrupt or unreadable artifact is a
/// cache miss. Malformed translation lines are skipped, not reported.
#[derive(Debug, thiserror::Error)]
pub enum LangError {
    /// A language identifier contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid language identifier '{name}'")]
    InvalidLanguage {
        /// The rejected identifier.
        name: String,
    },

    /// Neither the requested language file nor the default-language file exists.
    #[error(
        "no translation source available for '{language}': neither {requested} nor {fallback} exists"
    )]
    NoTranslationSource {
        /// The requested language identifier.
        language: String,
        /// Path of the requested language file.
        requested: PathBuf,
        /// Path of the default-language file.
        fallback: PathBuf,
    },

    /// An `{inherits ...}` directive names a file that does not exist.
    #[error("missing inheritance target '{name}' referenced by {child}: {parent} does not exist")]
    MissingInheritanceTarget {
        /// The name given in the directive.
        name: String,
        /// The file containing the directive.
        child: PathBuf,
        /// The parent path the name resolved to.
        parent: PathBuf,
    },

    /// A translation source file could not be read.
    #[error("failed to read translation file {path}: {source}")]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Writing or removing a cache artifact failed.
    #[error("cache I/O error at {path}: {source}")]
    CacheIo {
        /// The artifact path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The artifact could not be encoded.
    #[error("cache serialization error: {reason}")]
    Serialization {
        /// Description of the encoding failure.
        reason: String,
    },
}
