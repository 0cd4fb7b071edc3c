use bibtex_record::{Article, Book, Entry, EntryKind, InProceedings};

#[test]
fn test_deserialize_book() {
    let book: Book = serde_json::from_str(
        r#"{
            "author": "Robert Martin",
            "title": "Clean Code",
            "year": 2008,
            "publisher": "Prentice Hall",
            "edition": null
        }"#,
    )
    .unwrap();
    assert_eq!(book.year(), 2008);
    assert_eq!(book.edition(), None);
}

#[test]
fn test_deserialize_rejects_invalid() {
    let err = serde_json::from_str::<Book>(
        r#"{
            "author": "Robert Martin",
            "title": "Clean Code",
            "year": 2008,
            "publisher": "Prentice Hall",
            "address": 42
        }"#,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("field 'address' expected a string, found integer")
    );

    let err = serde_json::from_str::<Article>(
        r#"{"author": "Allan Collins", "title": "Cognitive apprenticeship", "year": 1991}"#,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("missing required field 'journal'"));

    let err = serde_json::from_str::<Article>(
        r#"{"author": ["Allan", "Collins"], "journal": "J", "title": "T", "year": 1991}"#,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("field 'author' expected a string, found list")
    );

    let err = serde_json::from_str::<Book>(
        r#"{"author": "Robert Martin", "title": "Clean Code", "year": 2008, "publisher": "Prentice Hall", "note": {"a": 1}}"#,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("field 'note' expected a string, found map")
    );

    let err = serde_json::from_str::<Book>(
        r#"{"author": "Robert Martin", "title": "Clean Code", "year": 18446744073709551615, "publisher": "Prentice Hall"}"#,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("field 'year': year 9223372036854775807 is not in range")
    );
}

#[test]
fn test_serialize_skips_absent() {
    let json = r#"{"author":"Arto Vihavainen","title":"Extreme Apprenticeship","year":2011,"booktitle":"SIGCSE","pages":"93--98"}"#;
    let entry: InProceedings = serde_json::from_str(json).unwrap();
    assert_eq!(serde_json::to_string(&entry).unwrap(), json);
}

#[test]
fn test_roundtrip() {
    let article: Article = serde_json::from_str(
        r#"{"author": "Allan Collins", "journal": "American Educator",
            "title": "Cognitive apprenticeship", "year": " 1991 ", "volume": "6"}"#,
    )
    .unwrap();
    let json = serde_json::to_string(&article).unwrap();
    assert_eq!(serde_json::from_str::<Article>(&json).unwrap(), article);
}

#[test]
fn test_tagged_entry() {
    let entry: Entry = serde_json::from_str(
        r#"{"entry_type": "inproceedings", "author": "Arto Vihavainen",
            "title": "Extreme Apprenticeship", "year": 2011, "booktitle": "SIGCSE"}"#,
    )
    .unwrap();
    assert_eq!(entry.kind(), EntryKind::InProceedings);

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["entry_type"], "inproceedings");
    assert_eq!(json["year"], 2011);
    assert_eq!(serde_json::from_value::<Entry>(json).unwrap(), entry);

    assert!(
        serde_json::from_str::<Entry>(
            r#"{"entry_type": "manual", "title": "The TeXbook"}"#
        )
        .is_err()
    );
}
