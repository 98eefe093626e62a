use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::language::DEFAULT_LANGUAGE;

/// Default translation file extension.
pub const DEFAULT_EXTENSION: &str = "tpl";

/// Default translations directory, relative to the working directory.
pub const DEFAULT_TRANSLATIONS_DIR: &str = "language";

/// Whether the show-keys debug override is permitted by default.
pub const DEFAULT_ALLOW_SHOW_KEYS: bool = true;

/// Fully resolved settings used to open a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Language used when the requested file is missing.
    pub default_language: String,
    /// Translation file extension, without the dot.
    pub extension: String,
    /// Directory holding `<language>.<extension>` files.
    pub translations_dir: PathBuf,
    /// Directory holding compiled artifacts.
    pub cache_dir: PathBuf,
    /// Whether callers may request keys instead of translations.
    pub allow_show_keys: bool,
}

impl Settings {
    /// Settings with the built-in defaults for everything but the directories.
    pub fn new(translations_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            translations_dir: translations_dir.into(),
            cache_dir: cache_dir.into(),
            allow_show_keys: DEFAULT_ALLOW_SHOW_KEYS,
        }
    }

    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub const fn with_show_keys(mut self, allow: bool) -> Self {
        self.allow_show_keys = allow;
        self
    }
}
