//! Language identifier validation.

use crate::error::LangError;

/// The language used when none is requested and as the fallback source.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Validates that `name` can be used as a language identifier.
///
/// Identifiers name files inside the translations directory, so only ASCII
/// letters, digits, `_` and `-` are accepted (`en`, `pt-BR`, `zh_TW`).
///
/// # Errors
///
/// Returns [`LangError::InvalidLanguage`] for empty identifiers or any other
/// character, including path separators and dots.
pub fn validate_language(name: &str) -> Result<(), LangError> {
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');

    if valid {
        Ok(())
    } else {
        Err(LangError::InvalidLanguage {
            name: name.to_string(),
        })
    }
}

/// Validates the name given in an `{inherits <name>}` directive.
///
/// Parent files share the child's directory, so besides the characters of a
/// language identifier, dots are allowed (`en.old`). Path separators and the
/// names `.` and `..` are not.
///
/// # Errors
///
/// Returns [`LangError::InvalidLanguage`] for any other name.
pub fn validate_parent_name(name: &str) -> Result<(), LangError> {
    let valid = !matches!(name, "" | "." | "..")
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'));

    if valid {
        Ok(())
    } else {
        Err(LangError::InvalidLanguage {
            name: name.to_string(),
        })
    }
}
