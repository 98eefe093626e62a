use anyhow::Result;
use std::path::Path;

use super::open_catalog;
use crate::cli::SourceArgs;
use crate::lookup::{KeyDisplay, Substitution};
use crate::warn;

pub struct GetOptions {
    pub key: String,
    pub source: SourceArgs,
    pub args: Vec<String>,
    pub set: Vec<(String, String)>,
    pub show_keys: bool,
}

impl GetOptions {
    fn substitution(&self) -> Substitution {
        if !self.set.is_empty() {
            Substitution::named(self.set.iter().cloned())
        } else if !self.args.is_empty() {
            Substitution::positional(self.args.iter().cloned())
        } else {
            Substitution::None
        }
    }
}

/// Prints the translation for a key.
pub fn run_get(config_path: Option<&Path>, options: &GetOptions) -> Result<()> {
    let catalog = open_catalog(config_path, &options.source)?;
    if options.show_keys && !catalog.translator().allows_show_keys() {
        warn!("--show-keys is disabled by allow_show_keys = false");
    }

    let text = catalog.format(
        &options.key,
        &options.substitution(),
        KeyDisplay::from(options.show_keys),
    );
    println!("{text}");

    Ok(())
}
