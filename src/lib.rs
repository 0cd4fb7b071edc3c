//! # Validated BibTeX records
//! This crate provides record types for the BibTeX entry types `@book`, `@article` and
//! `@inproceedings`. A record can only be obtained by validating a [`Fields`] map, so every
//! instance satisfies the following, for its entire lifetime:
//!
//! 1. `author` consists of at least two whitespace separated parts, each made only of ASCII
//!    letters.
//! 2. `year` is an integer in `[500, current year + 5]`. The current year is read when the
//!    record is validated.
//! 3. No string field is longer than 5000 characters.
//! 4. Optional fields are either absent or strings.
//!
//! ```
//! use bibtex_record::{fields, Book, ValidationError};
//!
//! let book = Book::new(fields! {
//!     "author" => "Robert Martin",
//!     "title" => "Clean Code",
//!     "year" => "2008",
//!     "publisher" => "Prentice Hall",
//! })?;
//! assert_eq!(book.year(), 2008);
//! assert_eq!(book.series(), None);
//!
//! let err = Book::new(fields! {
//!     "author" => "Martin",
//!     "title" => "Clean Code",
//!     "year" => 2008,
//!     "publisher" => "Prentice Hall",
//! })
//! .unwrap_err();
//! assert_eq!(err.field(), Some("author"));
//! # Ok::<(), ValidationError>(())
//! ```
//!
//! Validation stops at the first violated rule; see [`ValidationError`] for the possible
//! failures. The individual predicates are available in the [`validate`] module, and the
//! declarative description of each entry type as `Book::SCHEMA` and so on.
//!
//! ## Serde
//! Records implement `Deserialize` by validating the deserialized field map, so a record
//! deserialized from any self-describing format upholds the same invariants. Records
//! serialize as a flat map of their present fields.
//! ```
//! use bibtex_record::Article;
//!
//! let article: Article = serde_json::from_str(
//!     r#"{"author": "Allan Collins", "journal": "American Educator",
//!         "title": "Cognitive apprenticeship", "year": "1991"}"#,
//! )?;
//! assert_eq!(article.year(), 1991);
//! assert_eq!(
//!     serde_json::to_string(&article)?,
//!     r#"{"author":"Allan Collins","journal":"American Educator","title":"Cognitive apprenticeship","year":1991}"#
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod entry;
/// Error types for validation.
pub mod error;
pub mod fields;
pub mod schema;
pub mod validate;
pub mod value;

// re-exports
pub use entry::{Article, Book, Entry, EntryKind, InProceedings};
pub use error::{Expected, NameError, ValidationError};
pub use fields::Fields;
pub use schema::{Clock, FieldSpec, FixedClock, Rule, Schema, SystemClock, Validator};
pub use value::FieldValue;
