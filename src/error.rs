//! Crate-level error types.

use std::fmt;

use crate::preferences::PreferenceKind;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Generic I/O failure while reading or writing an options file.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// JSON encoding failure at the presentation bridge.
    Json(serde_json::Error),
    /// A preference with the same category and name is already registered.
    DuplicatePreference {
        /// Category of the rejected preference.
        category: String,
        /// Name of the rejected preference.
        name: String,
    },
    /// No registered preference matches the given category and name.
    UnknownPreference {
        /// Requested category.
        category: String,
        /// Requested name.
        name: String,
    },
    /// A value of the wrong type was written to a preference.
    TypeMismatch {
        /// Value type the preference holds.
        expected: &'static str,
        /// Value type that was supplied.
        found: &'static str,
    },
    /// The preference kind carries no value (buttons, untyped entries).
    NotValued(PreferenceKind),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::DuplicatePreference { category, name } => {
                write!(f, "duplicate preference '{category}/{name}'")
            }
            Self::UnknownPreference { category, name } => {
                write!(f, "unknown preference '{category}/{name}'")
            }
            Self::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            Self::NotValued(kind) => {
                write!(f, "{kind:?} preference has no value")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for VantageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_preference() {
        let err = VantageError::DuplicatePreference {
            category: "Avatar".into(),
            name: "Display name".into(),
        };
        assert_eq!(err.to_string(), "duplicate preference 'Avatar/Display name'");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;

        let err = VantageError::from(std::io::Error::other("disk gone"));
        assert!(err.source().is_some());
        assert!(VantageError::NotValued(PreferenceKind::Button)
            .source()
            .is_none());
    }
}
