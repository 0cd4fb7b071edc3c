//! # Built-in entry types
//! Each record type validates its fields on construction and cannot be modified afterwards.
//!
//! | Type              | Required fields                 |
//! |-------------------|---------------------------------|
//! | [`Book`]          | author, title, year, publisher  |
//! | [`Article`]       | author, journal, title, year    |
//! | [`InProceedings`] | author, title, year, booktitle  |
//!
//! [`Entry`] wraps the three record types and dispatches on a BibTeX entry type name.
mod kind;
mod macros;
mod types;

use serde::{Deserialize, Serialize};

pub use kind::EntryKind;
pub use types::{Article, Book, InProceedings};

use crate::error::ValidationError;
use crate::fields::Fields;
use crate::schema::{Clock, Validator};

/// Any supported entry.
///
/// Serialized with an `entry_type` tag alongside the fields.
/// ```
/// use bibtex_record::{fields, Entry, EntryKind};
///
/// let entry = Entry::new(
///     "ARTICLE",
///     fields! {
///         "author" => "Allan Collins",
///         "journal" => "American Educator",
///         "title" => "Cognitive apprenticeship",
///         "year" => 1991,
///     },
/// )?;
/// assert_eq!(entry.kind(), EntryKind::Article);
/// assert_eq!(entry.year(), 1991);
/// # Ok::<(), bibtex_record::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entry_type", rename_all = "lowercase")]
pub enum Entry {
    Book(Book),
    Article(Article),
    InProceedings(InProceedings),
}

impl Entry {
    /// Construct an entry of the named type against the local system clock.
    pub fn new(entry_type: &str, fields: Fields) -> Result<Self, ValidationError> {
        Self::new_with(entry_type, fields, &Validator::new())
    }

    /// Construct an entry of the named type with the provided validator.
    ///
    /// The entry type is matched case-insensitively. Standard BibTeX types without a record
    /// representation fail with [`ValidationError::UnsupportedEntryType`].
    pub fn new_with<C: Clock>(
        entry_type: &str,
        fields: Fields,
        validator: &Validator<C>,
    ) -> Result<Self, ValidationError> {
        let kind = EntryKind::from_name(entry_type)
            .ok_or_else(|| ValidationError::UnknownEntryType(entry_type.to_owned()))?;
        Self::from_kind(kind, fields, validator)
    }

    /// Construct an entry of the given kind.
    pub fn from_kind<C: Clock>(
        kind: EntryKind,
        fields: Fields,
        validator: &Validator<C>,
    ) -> Result<Self, ValidationError> {
        match kind {
            EntryKind::Book => Book::new_with(fields, validator).map(Self::Book),
            EntryKind::Article => Article::new_with(fields, validator).map(Self::Article),
            EntryKind::InProceedings => {
                InProceedings::new_with(fields, validator).map(Self::InProceedings)
            }
            other => {
                tracing::debug!(entry_type = %other, "entry type has no record representation");
                Err(ValidationError::UnsupportedEntryType(other))
            }
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Book(_) => Book::KIND,
            Self::Article(_) => Article::KIND,
            Self::InProceedings(_) => InProceedings::KIND,
        }
    }

    pub fn author(&self) -> &str {
        match self {
            Self::Book(book) => book.author(),
            Self::Article(article) => article.author(),
            Self::InProceedings(entry) => entry.author(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Book(book) => book.title(),
            Self::Article(article) => article.title(),
            Self::InProceedings(entry) => entry.title(),
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            Self::Book(book) => book.year(),
            Self::Article(article) => article.year(),
            Self::InProceedings(entry) => entry.year(),
        }
    }

    /// The field values of the wrapped entry.
    pub fn to_fields(&self) -> Fields {
        match self {
            Self::Book(book) => book.to_fields(),
            Self::Article(article) => article.to_fields(),
            Self::InProceedings(entry) => entry.to_fields(),
        }
    }
}

impl From<Book> for Entry {
    fn from(book: Book) -> Self {
        Self::Book(book)
    }
}

impl From<Article> for Entry {
    fn from(article: Article) -> Self {
        Self::Article(article)
    }
}

impl From<InProceedings> for Entry {
    fn from(entry: InProceedings) -> Self {
        Self::InProceedings(entry)
    }
}
