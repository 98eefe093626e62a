use anyhow::{Context, Result};
use std::path::Path;

use super::open_catalog;
use crate::cli::SourceArgs;
use crate::table::TranslationTable;

/// Prints the compiled table for a language.
pub fn run_dump(config_path: Option<&Path>, source: &SourceArgs, json: bool) -> Result<()> {
    let catalog = open_catalog(config_path, source)?;
    let table = catalog.translator().table();

    if json {
        let rendered =
            serde_json::to_string_pretty(table).context("Failed to serialize translations")?;
        println!("{rendered}");
    } else {
        print!("{}", render_lines(table));
    }

    Ok(())
}

/// Renders the table in source-file syntax, re-escaping `#`.
fn render_lines(table: &TranslationTable) -> String {
    table
        .iter()
        .map(|(key, value)| format!("{key} = {}\n", value.replace('#', "\\#")))
        .collect()
}
