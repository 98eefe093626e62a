use anyhow::Result;
use std::path::Path;

use super::{load_settings, report_warnings, requested_language};
use crate::catalog::{Catalog, LoadOrigin};
use crate::cli::SourceArgs;
use crate::compiler::SourceResolution;
use crate::status;
use crate::ui::Style;

/// Loads a language, compiling it if the cache is missing or stale.
pub fn run_compile(config_path: Option<&Path>, source: &SourceArgs, force: bool) -> Result<()> {
    let settings = load_settings(config_path, source)?;
    let language = requested_language(source, &settings);

    let catalog = if force {
        Catalog::rebuild(&settings, &language)?
    } else {
        Catalog::open(&settings, &language)?
    };

    if let SourceResolution::Fallback {
        requested,
        fallback,
    } = catalog.resolution()
    {
        status!(
            "{} {} not found, using {}",
            Style::label("fallback:"),
            requested.path.display(),
            fallback.path.display()
        );
    }

    let entries = catalog.translator().table().len();
    match catalog.origin() {
        LoadOrigin::Cache => {
            status!(
                "{} {} is up to date ({entries} entries)",
                Style::success("cached:"),
                Style::code(catalog.language())
            );
        }
        LoadOrigin::Compiled { miss, summary } => {
            let reason = miss
                .as_ref()
                .map_or_else(|| "forced".to_string(), ToString::to_string);
            status!(
                "{} {} from {} ({entries} entries, {} overridden, {} lines skipped; {reason})",
                Style::success("compiled:"),
                Style::code(catalog.language()),
                Style::secondary(catalog.resolution().path().display()),
                summary.overridden,
                summary.skipped,
            );
        }
    }

    report_warnings(&catalog);

    Ok(())
}
