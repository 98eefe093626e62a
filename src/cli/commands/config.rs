//! Config command handler for showing and initializing settings.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::load_settings;
use crate::cli::SourceArgs;
use crate::config::{
    CacheConfig, ConfigFile, ConfigManager, DEFAULT_ALLOW_SHOW_KEYS, DEFAULT_EXTENSION,
    DEFAULT_TRANSLATIONS_DIR, TranslationsConfig,
};
use crate::language::DEFAULT_LANGUAGE;
use crate::paths;
use crate::status;
use crate::ui::Style;

/// Prints the resolved settings as TOML.
pub fn show_config(config_path: Option<&Path>, source: &SourceArgs) -> Result<()> {
    let settings = load_settings(config_path, source)?;
    let rendered = toml::to_string_pretty(&settings).context("Failed to serialize settings")?;
    print!("{rendered}");
    Ok(())
}

/// Writes a config file containing the built-in defaults.
pub fn init_config(config_path: Option<&Path>) -> Result<()> {
    let manager = match config_path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };

    if manager.config_path().exists() {
        bail!(
            "Config file already exists: {}\n\n\
             Edit it directly or remove it first.",
            manager.config_path().display()
        );
    }

    manager.save(&default_config_file()?)?;

    status!(
        "{} {}",
        Style::success("created:"),
        Style::secondary(manager.config_path().display())
    );
    Ok(())
}

fn default_config_file() -> Result<ConfigFile> {
    Ok(ConfigFile {
        translations: TranslationsConfig {
            default_language: Some(DEFAULT_LANGUAGE.to_string()),
            extension: Some(DEFAULT_EXTENSION.to_string()),
            directory: Some(DEFAULT_TRANSLATIONS_DIR.into()),
            allow_show_keys: Some(DEFAULT_ALLOW_SHOW_KEYS),
        },
        cache: CacheConfig {
            directory: Some(paths::cache_dir()?),
        },
    })
}
