use super::EntryKind;
use super::macros::{bib_entry, field_type};
use crate::error::ValidationError;
use crate::fields::Fields;
use crate::schema::{Clock, Schema, Validator};

bib_entry! {
    /// A book with an explicit publisher.
    ///
    /// ```bib
    /// @book{Martin09,
    ///   author = {Robert Martin},
    ///   title = {Clean Code: A Handbook of Agile Software Craftsmanship},
    ///   year = {2008},
    ///   publisher = {Prentice Hall},
    /// }
    /// ```
    pub struct Book => Book {
        required {
            author: Name,
            title: Text,
            year: Year,
            publisher: Text,
        }
        optional {
            address,
            edition,
            editor,
            month,
            note,
            number,
            series,
            volume,
        }
    }
}

bib_entry! {
    /// An article from a journal or magazine.
    ///
    /// ```bib
    /// @article{CBH91,
    ///   author = {Allan Collins},
    ///   title = {Cognitive apprenticeship: making thinking visible},
    ///   journal = {American Educator},
    ///   year = {1991},
    ///   volume = {6},
    ///   pages = {38--46},
    /// }
    /// ```
    pub struct Article => Article {
        required {
            author: Name,
            journal: Text,
            title: Text,
            year: Year,
        }
        optional {
            month,
            note,
            number,
            pages,
            volume,
        }
    }
}

bib_entry! {
    /// An article in a conference proceedings.
    pub struct InProceedings => InProceedings {
        required {
            author: Name,
            title: Text,
            year: Year,
            booktitle: Text,
        }
        optional {
            address,
            editor,
            month,
            note,
            number,
            organization,
            pages,
            publisher,
            series,
            volume,
        }
    }
}
