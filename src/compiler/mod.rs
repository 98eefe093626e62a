//! Translation file compiler.
//!
//! Turns a source file (and the single parent it may inherit from) into a
//! [`CacheArtifact`]. Parent lines are applied first, so the child's entries
//! override them through ordinary last-write-wins.

mod parser;
mod source;

pub use parser::{ParseOutcome, parse_inherits, parse_line};
pub use source::{SourceDescriptor, SourceResolution, resolve_source, source_path};

use std::path::{Path, PathBuf};

use crate::cache::CacheArtifact;
use crate::error::LangError;
use crate::fs::{ModTime, canonical_path};
use crate::language::validate_parent_name;
use crate::table::TranslationTable;
use source::read_source;

/// Counters collected while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines that produced an entry.
    pub entries: usize,
    /// Lines that did not match the grammar.
    pub skipped: usize,
    /// Entries that replaced an earlier value for the same key.
    pub overridden: usize,
}

/// Output of a successful compile.
#[derive(Debug, Clone)]
pub struct Compiled {
    /// The table and source timestamps, ready to be stored.
    pub artifact: CacheArtifact,
    /// Line counters from parsing the parent and the primary.
    pub summary: ParseSummary,
}

impl Compiled {
    /// The compiled translations.
    pub const fn table(&self) -> &TranslationTable {
        &self.artifact.translations
    }

    /// Consumes the result, keeping only the translations.
    pub fn into_table(self) -> TranslationTable {
        self.artifact.translations
    }
}

/// Compiles translation files with a given extension.
#[derive(Debug, Clone)]
pub struct Compiler {
    extension: String,
}

impl Compiler {
    /// Creates a compiler resolving parent names to `<name>.<extension>`.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Compiles `primary` and, if its first line is an `{inherits ...}`
    /// directive, the sibling parent file it names.
    ///
    /// Modification times are read before content so an edit racing the
    /// compile leaves a stale artifact rather than a falsely fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`LangError::Read`] if a file cannot be read,
    /// [`LangError::InvalidLanguage`] for an unusable parent name and
    /// [`LangError::MissingInheritanceTarget`] if the parent does not exist.
    pub fn compile(&self, primary: &Path) -> Result<Compiled, LangError> {
        let timestamp = ModTime::of(primary).map_err(|source| LangError::Read {
            path: primary.to_path_buf(),
            source,
        })?;
        let content = read_source(primary)?;

        let mut table = TranslationTable::new();
        let mut summary = ParseSummary::default();
        let mut parent_filename = None;
        let mut parent_timestamp = None;

        if let Some(name) = content.lines().next().and_then(parse_inherits) {
            let parent = self.parent_path(primary, name)?;
            let modified = ModTime::of(&parent).map_err(|source| LangError::Read {
                path: parent.clone(),
                source,
            })?;
            let parent_content = read_source(&parent)?;

            absorb(&parent_content, &mut table, &mut summary);
            parent_filename = Some(canonical_path(&parent));
            parent_timestamp = Some(modified);
        }

        absorb(&content, &mut table, &mut summary);

        Ok(Compiled {
            artifact: CacheArtifact {
                translations: table,
                timestamp,
                parent_filename,
                parent_timestamp,
                source_filename: canonical_path(primary),
            },
            summary,
        })
    }

    fn parent_path(&self, primary: &Path, name: &str) -> Result<PathBuf, LangError> {
        validate_parent_name(name)?;

        let dir = primary.parent().unwrap_or_else(|| Path::new("."));
        let parent = source_path(dir, name, &self.extension);
        if !parent.is_file() {
            return Err(LangError::MissingInheritanceTarget {
                name: name.to_string(),
                child: primary.to_path_buf(),
                parent,
            });
        }

        Ok(parent)
    }
}

fn absorb(content: &str, table: &mut TranslationTable, summary: &mut ParseSummary) {
    for line in content.lines() {
        match parse_line(line) {
            ParseOutcome::Entry { key, value } => {
                summary.entries += 1;
                if table.insert(key, value).is_some() {
                    summary.overridden += 1;
                }
            }
            ParseOutcome::Skipped => summary.skipped += 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_compile_plain_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "en.tpl",
            "# Navigation\nnav.home = Home\n\nnav.about = About us # footer too\n",
        );

        let compiled = Compiler::new("tpl").compile(&path).unwrap();

        assert_eq!(compiled.table().get("nav.home"), Some("Home"));
        assert_eq!(compiled.table().get("nav.about"), Some("About us"));
        assert_eq!(compiled.table().len(), 2);
        assert_eq!(compiled.summary.entries, 2);
        assert_eq!(compiled.summary.skipped, 2);
        assert!(compiled.artifact.parent_filename.is_none());
        assert!(compiled.artifact.parent_timestamp.is_none());
        assert_eq!(compiled.artifact.timestamp, ModTime::of(&path).unwrap());
    }

    #[test]
    fn test_compile_later_line_wins() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "en.tpl", "a = first\na = second\n");

        let compiled = Compiler::new("tpl").compile(&path).unwrap();

        assert_eq!(compiled.table().get("a"), Some("second"));
        assert_eq!(compiled.summary.overridden, 1);
    }

    #[test]
    fn test_compile_child_overrides_parent() {
        let temp_dir = TempDir::new().unwrap();
        let parent = write(&temp_dir, "en.tpl", "a = 1\n");
        let child = write(&temp_dir, "en-GB.tpl", "{inherits en}\na = 2\nb = 3\n");

        let compiled = Compiler::new("tpl").compile(&child).unwrap();

        let expected: TranslationTable = [("a", "2"), ("b", "3")].into_iter().collect();
        assert_eq!(compiled.table(), &expected);
        assert_eq!(
            compiled.artifact.parent_filename,
            Some(fs::canonicalize(&parent).unwrap())
        );
        assert_eq!(
            compiled.artifact.source_filename,
            fs::canonicalize(&child).unwrap()
        );
        assert_eq!(
            compiled.artifact.parent_timestamp,
            Some(ModTime::of(&parent).unwrap())
        );
    }

    #[test]
    fn test_compile_parent_keys_survive() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "base.tpl", "shared = From parent\nkept = Parent only\n");
        let child = write(&temp_dir, "en.tpl", "{inherits base}\nshared = From child\n");

        let compiled = Compiler::new("tpl").compile(&child).unwrap();

        assert_eq!(compiled.table().get("shared"), Some("From child"));
        assert_eq!(compiled.table().get("kept"), Some("Parent only"));
    }

    #[test]
    fn test_compile_inheritance_is_single_level() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "root.tpl", "deep = never read\n");
        write(&temp_dir, "base.tpl", "{inherits root}\nmiddle = yes\n");
        let child = write(&temp_dir, "en.tpl", "{inherits base}\ntop = yes\n");

        let compiled = Compiler::new("tpl").compile(&child).unwrap();

        assert_eq!(compiled.table().get("middle"), Some("yes"));
        assert_eq!(compiled.table().get("top"), Some("yes"));
        assert!(!compiled.table().contains_key("deep"));
        assert_eq!(
            compiled.artifact.parent_filename,
            Some(fs::canonicalize(temp_dir.path().join("base.tpl")).unwrap())
        );
    }

    #[test]
    fn test_compile_directive_only_on_first_line() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "base.tpl", "from.parent = yes\n");
        let child = write(&temp_dir, "en.tpl", "a = 1\n{inherits base}\n");

        let compiled = Compiler::new("tpl").compile(&child).unwrap();

        assert!(!compiled.table().contains_key("from.parent"));
        assert!(compiled.artifact.parent_filename.is_none());
    }

    #[test]
    fn test_compile_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let child = write(&temp_dir, "en.tpl", "{inherits ghost}\na = 1\n");

        let err = Compiler::new("tpl").compile(&child).unwrap_err();

        let LangError::MissingInheritanceTarget { name, parent, .. } = err else {
            panic!("expected missing inheritance target, got {err:?}");
        };
        assert_eq!(name, "ghost");
        assert_eq!(parent, temp_dir.path().join("ghost.tpl"));
    }

    #[test]
    fn test_compile_rejects_parent_outside_directory() {
        let temp_dir = TempDir::new().unwrap();
        let child = write(&temp_dir, "en.tpl", "{inherits ../other}\n");

        let err = Compiler::new("tpl").compile(&child).unwrap_err();

        assert!(matches!(err, LangError::InvalidLanguage { .. }));
    }

    #[test]
    fn test_compile_dotted_parent_name() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "en.old.tpl", "legacy = kept\n");
        let child = write(&temp_dir, "en.tpl", "{inherits en.old}\nfresh = yes\n");

        let compiled = Compiler::new("tpl").compile(&child).unwrap();

        assert_eq!(compiled.table().get("legacy"), Some("kept"));
        assert_eq!(compiled.table().get("fresh"), Some("yes"));
    }

    #[test]
    fn test_compile_uses_extension_for_parent() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "base.lang", "a = parent\n");
        let child = write(&temp_dir, "en.lang", "{inherits base}\n");

        let compiled = Compiler::new("lang").compile(&child).unwrap();

        assert_eq!(compiled.table().get("a"), Some("parent"));
    }

    #[test]
    fn test_compile_crlf_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "en.tpl", "a = one\r\nb = two \\# x # note\r\n");

        let compiled = Compiler::new("tpl").compile(&path).unwrap();

        assert_eq!(compiled.table().get("a"), Some("one"));
        assert_eq!(compiled.table().get("b"), Some("two # x"));
    }

    #[test]
    fn test_compile_missing_primary_fails() {
        let temp_dir = TempDir::new().unwrap();

        let err = Compiler::new("tpl")
            .compile(&temp_dir.path().join("en.tpl"))
            .unwrap_err();

        assert!(matches!(err, LangError::Read { .. }));
    }
}
