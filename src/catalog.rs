//! Loading a language: cache first, compiler on a miss.

use std::fmt;
use std::path::PathBuf;

use crate::cache::{CacheLookup, CacheManager, CacheMiss};
use crate::compiler::{Compiler, ParseSummary, SourceResolution, resolve_source};
use crate::config::Settings;
use crate::error::LangError;
use crate::lookup::{KeyDisplay, Substitution, Translator};

/// Where a catalog's table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// A valid cache artifact was reused.
    Cache,
    /// The sources were compiled.
    Compiled {
        /// Why the cache was not used; `None` for a forced rebuild.
        miss: Option<CacheMiss>,
        summary: ParseSummary,
    },
}

/// A non-fatal problem encountered while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The compiled table could not be persisted. It is still usable.
    CacheWrite { path: PathBuf, reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CacheWrite { path, reason } => write!(
                f,
                "could not write translation cache {}: {reason}",
                path.display()
            ),
        }
    }
}

/// The compiled translations for one language.
#[derive(Debug, Clone)]
pub struct Catalog {
    language: String,
    resolution: SourceResolution,
    origin: LoadOrigin,
    warnings: Vec<LoadWarning>,
    translator: Translator,
}

impl Catalog {
    /// Loads `language`, reusing a valid cache artifact when there is one.
    ///
    /// The cache is keyed by `language` even when the default-language file
    /// is read in its place.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid identifier, when no source file
    /// exists, or when compiling fails. Cache problems are never errors.
    pub fn open(settings: &Settings, language: &str) -> Result<Self, LangError> {
        Self::load(settings, language, false)
    }

    /// Compiles `language` unconditionally and refreshes its cache artifact.
    pub fn rebuild(settings: &Settings, language: &str) -> Result<Self, LangError> {
        Self::load(settings, language, true)
    }

    fn load(settings: &Settings, language: &str, force: bool) -> Result<Self, LangError> {
        let resolution = resolve_source(
            &settings.translations_dir,
            language,
            &settings.default_language,
            &settings.extension,
        )?;
        let cache = CacheManager::new(&settings.cache_dir);

        let miss = if force {
            None
        } else {
            match cache.load(language, resolution.path()) {
                CacheLookup::Hit(artifact) => {
                    return Ok(Self {
                        language: language.to_string(),
                        resolution,
                        origin: LoadOrigin::Cache,
                        warnings: Vec::new(),
                        translator: Translator::new(
                            artifact.translations,
                            settings.allow_show_keys,
                        ),
                    });
                }
                CacheLookup::Miss(miss) => Some(miss),
            }
        };

        let compiled = Compiler::new(&settings.extension).compile(resolution.path())?;

        let mut warnings = Vec::new();
        if let Err(err) = cache.store(language, &compiled.artifact) {
            warnings.push(LoadWarning::CacheWrite {
                path: cache.artifact_path(language),
                reason: err.to_string(),
            });
        }

        Ok(Self {
            language: language.to_string(),
            resolution,
            origin: LoadOrigin::Compiled {
                miss,
                summary: compiled.summary,
            },
            warnings,
            translator: Translator::new(compiled.into_table(), settings.allow_show_keys),
        })
    }

    /// The requested language identifier.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub const fn resolution(&self) -> &SourceResolution {
        &self.resolution
    }

    pub const fn origin(&self) -> &LoadOrigin {
        &self.origin
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    /// See [`Translator::get`].
    pub fn get(&self, key: &str) -> String {
        self.translator.get(key)
    }

    /// See [`Translator::format`].
    pub fn format(&self, key: &str, substitution: &Substitution, display: KeyDisplay) -> String {
        self.translator.format(key, substitution, display)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> (TempDir, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let lang_dir = temp_dir.path().join("language");
        fs::create_dir_all(&lang_dir).unwrap();
        for (name, content) in files {
            fs::write(lang_dir.join(name), content).unwrap();
        }
        let settings = Settings::new(lang_dir, temp_dir.path().join("cache"));
        (temp_dir, settings)
    }

    #[test]
    fn test_first_open_compiles_then_hits_cache() {
        let (_dir, settings) = setup(&[("en.tpl", "greeting = Hello\n")]);

        let first = Catalog::open(&settings, "en").unwrap();
        assert!(matches!(
            first.origin(),
            LoadOrigin::Compiled {
                miss: Some(CacheMiss::Absent),
                ..
            }
        ));
        assert!(first.warnings().is_empty());

        let second = Catalog::open(&settings, "en").unwrap();
        assert_eq!(second.origin(), &LoadOrigin::Cache);
        assert_eq!(second.get("greeting"), "Hello");
        assert_eq!(second.translator().table(), first.translator().table());
    }

    #[test]
    fn test_rebuild_ignores_valid_cache() {
        let (_dir, settings) = setup(&[("en.tpl", "greeting = Hello\n")]);
        Catalog::open(&settings, "en").unwrap();

        let rebuilt = Catalog::rebuild(&settings, "en").unwrap();

        assert!(matches!(
            rebuilt.origin(),
            LoadOrigin::Compiled { miss: None, .. }
        ));
    }

    #[test]
    fn test_fallback_to_default_language() {
        let (_dir, settings) = setup(&[("en.tpl", "greeting = Hello\n")]);

        let catalog = Catalog::open(&settings, "fr").unwrap();

        assert!(catalog.resolution().is_fallback());
        assert_eq!(catalog.language(), "fr");
        assert_eq!(catalog.get("greeting"), "Hello");
        // Cached under the requested identifier.
        let cache = CacheManager::new(&settings.cache_dir);
        assert!(cache.artifact_path("fr").exists());
        assert!(!cache.artifact_path("en").exists());
    }

    #[test]
    fn test_no_source_is_error() {
        let (_dir, settings) = setup(&[]);

        let err = Catalog::open(&settings, "fr").unwrap_err();

        assert!(matches!(err, LangError::NoTranslationSource { .. }));
    }

    #[test]
    fn test_cache_write_failure_is_warning() {
        let (dir, mut settings) = setup(&[("en.tpl", "greeting = Hello\n")]);
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        settings.cache_dir = blocker;

        let catalog = Catalog::open(&settings, "en").unwrap();

        assert_eq!(catalog.get("greeting"), "Hello");
        assert_eq!(catalog.warnings().len(), 1);
        assert!(matches!(
            catalog.warnings()[0],
            LoadWarning::CacheWrite { .. }
        ));
    }

    #[test]
    fn test_show_keys_capability_from_settings() {
        let (_dir, settings) = setup(&[("en.tpl", "greeting = Hi {name}\n")]);
        let subst = Substitution::named([("name", "Ann")]);

        let allowed = Catalog::open(&settings, "en").unwrap();
        assert_eq!(
            allowed.format("greeting", &subst, KeyDisplay::ShowKeys),
            "greeting"
        );

        let denied = Catalog::open(&settings.clone().with_show_keys(false), "en").unwrap();
        assert_eq!(
            denied.format("greeting", &subst, KeyDisplay::ShowKeys),
            "Hi Ann"
        );
    }
}
