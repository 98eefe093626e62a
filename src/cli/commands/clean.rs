use anyhow::Result;
use std::path::Path;

use super::{load_settings, requested_language};
use crate::cache::CacheManager;
use crate::cli::SourceArgs;
use crate::language::validate_language;
use crate::status;
use crate::ui::Style;

/// Removes the cache artifact for a language.
pub fn run_clean(config_path: Option<&Path>, source: &SourceArgs) -> Result<()> {
    let settings = load_settings(config_path, source)?;
    let language = requested_language(source, &settings);
    validate_language(&language)?;

    let cache = CacheManager::new(&settings.cache_dir);
    let path = cache.artifact_path(&language);

    if cache.remove(&language)? {
        status!(
            "{} {} ({})",
            Style::success("removed:"),
            Style::code(&language),
            Style::secondary(path.display())
        );
    } else {
        status!("No cache for {}", Style::code(&language));
    }

    Ok(())
}
