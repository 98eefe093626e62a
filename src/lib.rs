//! # langpack - cached translation files
//!
//! `langpack` reads line-oriented `key = value` translation files, resolves
//! single-level `{inherits <name>}` directives, and keeps the compiled table
//! in a binary cache that is reused until a source file's modification time
//! changes.
//!
//! ## File format
//!
//! ```text
//! {inherits en}
//! # comments start with a hash
//! greeting = Hello {name}      # trailing comments are dropped
//! item.price = Item \#{0}       # \# is a literal hash
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use langpack_cli::catalog::Catalog;
//! use langpack_cli::config::Settings;
//! use langpack_cli::lookup::{KeyDisplay, Substitution};
//!
//! let settings = Settings::new("language", "/tmp/langpack-cache");
//! let catalog = Catalog::open(&settings, "fr")?;
//!
//! let text = catalog.format(
//!     "greeting",
//!     &Substitution::named([("name", "Ann")]),
//!     KeyDisplay::Resolved,
//! );
//! # Ok::<(), langpack_cli::error::LangError>(())
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/langpack/config.toml`:
//!
//! ```toml
//! [translations]
//! default_language = "en"
//! extension = "tpl"
//! directory = "language"
//! allow_show_keys = true
//!
//! [cache]
//! directory = "/var/cache/langpack"
//! ```

/// Binary cache of compiled tables.
pub mod cache;

/// Cache-or-compile loading of one language.
pub mod catalog;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Translation file parsing and compilation.
pub mod compiler;

/// Configuration file management and resolved settings.
pub mod config;

/// Library error type.
pub mod error;

/// File system utilities.
pub mod fs;

/// Language identifier validation.
pub mod language;

/// Key lookup and placeholder substitution.
pub mod lookup;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// The compiled translation table.
pub mod table;

/// Terminal styling.
pub mod ui;

pub use catalog::Catalog;
pub use error::LangError;
