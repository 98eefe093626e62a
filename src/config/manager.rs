use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::{
    DEFAULT_ALLOW_SHOW_KEYS, DEFAULT_EXTENSION, DEFAULT_TRANSLATIONS_DIR, Settings,
};
use crate::language::{DEFAULT_LANGUAGE, validate_language};
use crate::paths;

/// The `[translations]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationsConfig {
    /// Fallback language identifier.
    pub default_language: Option<String>,
    /// Source file extension, without the dot.
    pub extension: Option<String>,
    /// Directory holding translation files.
    pub directory: Option<PathBuf>,
    /// Whether `--show-keys` is honored.
    pub allow_show_keys: Option<bool>,
}

/// The `[cache]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding compiled artifacts.
    pub directory: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/langpack/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translations: TranslationsConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Translations directory override.
    pub translations_dir: Option<PathBuf>,
    /// Cache directory override.
    pub cache_dir: Option<PathBuf>,
    /// Default language override.
    pub default_language: Option<String>,
}

/// Resolves settings by merging CLI options, the config file and built-in
/// defaults, in that order of precedence.
///
/// # Errors
///
/// Returns an error if the default language or extension is unusable, or if
/// no cache directory is configured and the home directory is unknown.
pub fn resolve_settings(options: &ResolveOptions, config_file: &ConfigFile) -> Result<Settings> {
    let default_language = options
        .default_language
        .as_ref()
        .or(config_file.translations.default_language.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    validate_language(&default_language).with_context(|| {
        format!(
            "Invalid default language '{default_language}'\n\n\
             Use letters, digits, '_' or '-' (e.g. en, pt-BR)."
        )
    })?;

    let extension = config_file
        .translations
        .extension
        .clone()
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    if extension.is_empty() || extension.contains(['.', '/', '\\']) {
        bail!(
            "Invalid extension '{extension}'\n\n\
             Set [translations] extension without a leading dot, e.g. \"tpl\"."
        );
    }

    let translations_dir = options
        .translations_dir
        .as_ref()
        .or(config_file.translations.directory.as_ref())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSLATIONS_DIR));

    let cache_dir = match options
        .cache_dir
        .as_ref()
        .or(config_file.cache.directory.as_ref())
    {
        Some(dir) => dir.clone(),
        None => paths::cache_dir()?,
    };

    Ok(Settings {
        default_language,
        extension,
        translations_dir,
        cache_dir,
        allow_show_keys: config_file
            .translations
            .allow_show_keys
            .unwrap_or(DEFAULT_ALLOW_SHOW_KEYS),
    })
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the default location.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/langpack/config.toml`
    /// or `~/.config/langpack/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, or the defaults if it does not exist.
    ///
    /// Unlike a missing file, an unreadable or invalid file is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}
