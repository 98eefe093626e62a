//! Key lookup with placeholder substitution.

mod substitution;

pub use substitution::Substitution;

use crate::table::TranslationTable;

/// Per-call request for how a key is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyDisplay {
    /// Return the translated, substituted text.
    #[default]
    Resolved,
    /// Return the key itself, if the translator allows it.
    ShowKeys,
}

impl From<bool> for KeyDisplay {
    fn from(show_keys: bool) -> Self {
        if show_keys {
            Self::ShowKeys
        } else {
            Self::Resolved
        }
    }
}

/// Read-only view over a compiled table.
#[derive(Debug, Clone)]
pub struct Translator {
    table: TranslationTable,
    allow_show_keys: bool,
}

impl Translator {
    /// Wraps `table`. `allow_show_keys` gates [`KeyDisplay::ShowKeys`].
    pub const fn new(table: TranslationTable, allow_show_keys: bool) -> Self {
        Self {
            table,
            allow_show_keys,
        }
    }

    pub const fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub const fn allows_show_keys(&self) -> bool {
        self.allow_show_keys
    }

    /// Returns the value for `key`, or `key` itself when it is unknown.
    pub fn get(&self, key: &str) -> String {
        self.format(key, &Substitution::None, KeyDisplay::Resolved)
    }

    /// Returns the value for `key` with `substitution` applied.
    ///
    /// Unknown keys come back unchanged and unsubstituted. With the
    /// show-keys capability enabled, [`KeyDisplay::ShowKeys`] returns the
    /// key instead of the text so key placement can be inspected.
    pub fn format(&self, key: &str, substitution: &Substitution, display: KeyDisplay) -> String {
        if self.allow_show_keys && display == KeyDisplay::ShowKeys {
            return key.to_string();
        }

        self.table
            .get(key)
            .map_or_else(|| key.to_string(), |template| substitution.apply(template))
    }
}
