use std::fmt;

use thiserror::Error;

use crate::entry::EntryKind;

/// The type a field value was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A string.
    String,
    /// An integer, or a value which can be coerced to one.
    Integer,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::String => f.write_str("a string"),
            Expected::Integer => f.write_str("an integer"),
        }
    }
}

/// Reasons an author name is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Fewer than two whitespace separated parts.
    #[error("first name and surname are required, found {found} name part(s)")]
    TooFewParts { found: usize },
    /// A part contains a char which is not an ASCII letter.
    #[error("name part '{part}' must consist only of alphabet letters")]
    NonAlphabetic { part: String },
}

/// Errors which result while attempting to construct an entry.
///
/// Construction stops at the first violated rule, so an error always describes exactly one
/// field and one rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not have the declared type, or cannot be coerced to it.
    #[error("field '{field}' expected {expected}, found {found}")]
    InvalidType {
        field: &'static str,
        expected: Expected,
        found: &'static str,
    },
    /// The value is not a valid author name.
    #[error("field '{field}' has an invalid name: {reason}")]
    InvalidName {
        field: &'static str,
        reason: NameError,
    },
    /// The year is outside of the accepted range.
    #[error("field '{field}': year {year} is not in range [{min}, {max}]")]
    InvalidYear {
        field: &'static str,
        year: i64,
        min: i32,
        max: i32,
    },
    /// The string exceeds the BibTeX field character limit.
    #[error("field '{field}' has {len} characters, exceeding the BibTeX field limit of {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    /// A required field was not supplied.
    #[error("missing required field '{0}'")]
    MissingRequiredField(&'static str),
    /// A field which is not part of the entry type was supplied.
    #[error("unknown field '{field}' for entry type '{entry_type}'")]
    UnknownField {
        entry_type: &'static str,
        field: String,
    },
    /// The entry type is not a BibTeX entry type.
    #[error("unknown entry type '{0}'")]
    UnknownEntryType(String),
    /// The entry type is a BibTeX entry type without a record representation.
    #[error("entry type '{0}' is not supported")]
    UnsupportedEntryType(EntryKind),
}

impl ValidationError {
    /// The name of the offending field, if the error concerns a single schema field.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidType { field, .. }
            | Self::InvalidName { field, .. }
            | Self::InvalidYear { field, .. }
            | Self::FieldTooLong { field, .. }
            | Self::MissingRequiredField(field) => Some(*field),
            Self::UnknownField { field, .. } => Some(field.as_str()),
            Self::UnknownEntryType(_) | Self::UnsupportedEntryType(_) => None,
        }
    }
}
