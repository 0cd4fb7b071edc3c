//! Property tests for entry validation.
//!
//! All tests use a frozen clock so that the accepted year range is fixed at `[500, 2029]`.
use proptest::prelude::*;

use bibtex_record::validate::{MAX_FIELD_LEN, MIN_YEAR};
use bibtex_record::{
    Article, Book, FieldValue, Fields, FixedClock, InProceedings, ValidationError, Validator,
    fields,
};

const CURRENT_YEAR: i32 = 2024;
const MAX_YEAR: i32 = CURRENT_YEAR + 5;

fn validator() -> Validator<FixedClock> {
    Validator::with_clock(FixedClock(CURRENT_YEAR))
}

fn book_with(author: &str, year: impl Into<FieldValue>) -> Fields {
    fields! {
        "author" => author,
        "title" => "Clean Code",
        "year" => year,
        "publisher" => "Prentice Hall",
    }
}

/// Names made of two to four ASCII-alphabetic parts.
fn valid_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z]{1,12}", 2..5).prop_map(|parts| parts.join(" "))
}

/// Strings of printable chars, valid names included.
fn any_name() -> impl Strategy<Value = String> {
    prop_oneof![valid_name(), "\\PC{0,40}", "[A-Za-z ,.'-]{0,30}"]
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("\\PC{0,30}")
}

proptest! {
    #[test]
    fn valid_inputs_are_stored(
        author in valid_name(),
        title in "\\PC{0,60}",
        journal in "\\PC{0,60}",
        year in MIN_YEAR..=MAX_YEAR,
        volume in optional_text(),
        pages in optional_text(),
    ) {
        let fields = fields! {
            "author" => author.as_str(),
            "title" => title.as_str(),
            "journal" => journal.as_str(),
            "year" => year,
            "volume" => volume.clone(),
            "pages" => pages.clone(),
        };
        let article = Article::new_with(fields, &validator()).unwrap();
        prop_assert_eq!(article.author(), author.as_str());
        prop_assert_eq!(article.title(), title.as_str());
        prop_assert_eq!(article.journal(), journal.as_str());
        prop_assert_eq!(article.year(), year);
        prop_assert_eq!(article.volume(), volume.as_deref());
        prop_assert_eq!(article.pages(), pages.as_deref());
    }

    #[test]
    fn year_accepted_iff_in_range(year in -5000i64..5000) {
        let result = Book::new_with(book_with("Robert Martin", year), &validator());
        let in_range = (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year);
        prop_assert_eq!(result.is_ok(), in_range);
        if !in_range {
            let is_year_error = matches!(result, Err(ValidationError::InvalidYear { .. }));
            prop_assert!(is_year_error);
        }
    }

    #[test]
    fn string_year_matches_integer_year(year in -5000i64..5000) {
        let from_int = Book::new_with(book_with("Robert Martin", year), &validator());
        let from_str = Book::new_with(book_with("Robert Martin", year.to_string()), &validator());
        prop_assert_eq!(from_int, from_str);
    }

    #[test]
    fn author_accepted_iff_alphabetic_parts(author in any_name()) {
        let parts: Vec<&str> = author.split_whitespace().collect();
        let expected = parts.len() >= 2
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_alphabetic()));
        let result = Book::new_with(book_with(&author, 2008), &validator());
        prop_assert_eq!(result.is_ok(), expected);
        if !expected {
            let is_name_error = matches!(result, Err(ValidationError::InvalidName { .. }));
            prop_assert!(is_name_error);
        }
    }

    #[test]
    fn long_fields_rejected(
        field in prop::sample::select(vec!["title", "booktitle", "note", "series", "pages"]),
        extra in 1usize..50,
        ch in prop::char::any(),
    ) {
        let mut fields = fields! {
            "author" => "Arto Vihavainen",
            "title" => "Extreme Apprenticeship",
            "year" => 2011,
            "booktitle" => "SIGCSE",
        };
        let len = MAX_FIELD_LEN + extra;
        fields.insert(field, ch.to_string().repeat(len));
        prop_assert_eq!(
            InProceedings::new_with(fields, &validator()),
            Err(ValidationError::FieldTooLong { field, len, max: MAX_FIELD_LEN })
        );
    }

    #[test]
    fn long_author_rejected(first in "[A-Za-z]{1,12}", extra in 1usize..50) {
        let author = format!("{first} {}", "x".repeat(MAX_FIELD_LEN + extra));
        let len = author.len();
        prop_assert_eq!(
            Book::new_with(book_with(&author, 2008), &validator()),
            Err(ValidationError::FieldTooLong { field: "author", len, max: MAX_FIELD_LEN })
        );
    }

    #[test]
    fn null_optional_is_omission(
        field in prop::sample::select(vec!["address", "edition", "editor", "month", "note", "number", "series", "volume"]),
    ) {
        let mut with_null = book_with("Robert Martin", 2008);
        with_null.insert(field, FieldValue::Null);
        prop_assert_eq!(
            Book::new_with(with_null, &validator()),
            Book::new_with(book_with("Robert Martin", 2008), &validator())
        );
    }

    #[test]
    fn reconstruction_is_idempotent(
        author in valid_name(),
        year in MIN_YEAR..=MAX_YEAR,
        note in optional_text(),
    ) {
        let mut fields = book_with(&author, year.to_string());
        fields.insert("note", note);
        let book = Book::new_with(fields, &validator()).unwrap();
        let again = Book::new_with(book.to_fields(), &validator());
        prop_assert_eq!(again, Ok(book));
    }
}
