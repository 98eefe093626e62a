//! Subcommand implementations.

/// Clean command handler.
pub mod clean;

/// Compile command handler.
pub mod compile;

/// Config command handler.
pub mod config;

/// Dump command handler.
pub mod dump;

/// Get command handler.
pub mod get;

use anyhow::Result;
use std::path::Path;

use crate::catalog::Catalog;
use crate::cli::SourceArgs;
use crate::config::{ConfigManager, ResolveOptions, Settings, resolve_settings};
use crate::warn;

/// Loads the config file and merges it with the CLI source options.
pub(crate) fn load_settings(config_path: Option<&Path>, source: &SourceArgs) -> Result<Settings> {
    let manager = match config_path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let config_file = manager.load_or_default()?;

    let options = ResolveOptions {
        translations_dir: source.dir.clone(),
        cache_dir: source.cache_dir.clone(),
        default_language: source.default_lang.clone(),
    };

    resolve_settings(&options, &config_file)
}

/// The requested language, or the default language if none was given.
pub(crate) fn requested_language(source: &SourceArgs, settings: &Settings) -> String {
    source
        .lang
        .clone()
        .unwrap_or_else(|| settings.default_language.clone())
}

/// Opens the catalog for the requested language and reports load warnings.
pub(crate) fn open_catalog(config_path: Option<&Path>, source: &SourceArgs) -> Result<Catalog> {
    let settings = load_settings(config_path, source)?;
    let language = requested_language(source, &settings);
    let catalog = Catalog::open(&settings, &language)?;
    report_warnings(&catalog);
    Ok(catalog)
}

pub(crate) fn report_warnings(catalog: &Catalog) {
    for warning in catalog.warnings() {
        warn!("{warning}");
    }
}
