use bibirble::scripture::{
    classify, extract_passages, Element, PassageExtractor, SectionsError, Testament,
};

#[test]
fn test_single_long_element_becomes_passage() {
    let elements = vec![paragraph(
        1,
        1,
        1,
        "In the beginning God created the heaven and the earth",
    )];

    let passages = extract_passages("genesis", &elements).unwrap();
    assert_eq!(passages.len(), 1);

    let passage = &passages[0];
    assert_eq!(passage.testament, Testament::Old);
    assert_eq!(passage.area, "Torah");
    assert_eq!(passage.book, "genesis");
    assert_eq!(passage.chapter, 1);
    assert_eq!(passage.verse, 1);
    assert_eq!(
        passage.text,
        "In the beginning God created the heaven and the earth"
    );
}

#[test]
fn test_short_text_is_not_emitted() {
    let elements = vec![paragraph(1, 1, 1, "Too short")];
    let passages = extract_passages("genesis", &elements).unwrap();
    assert!(passages.is_empty());
}

#[test]
fn test_non_paragraph_elements_are_skipped() {
    let heading = Element {
        kind: "heading".to_string(),
        value: Some("The Creation of the World and everything in it".to_string()),
        ..Default::default()
    };
    let elements = vec![heading];

    let passages = extract_passages("genesis", &elements).unwrap();
    assert!(passages.is_empty());
}

#[test]
fn test_heading_does_not_touch_open_section() {
    let elements = vec![
        paragraph(1, 1, 1, "And God said"),
        Element {
            kind: "heading".to_string(),
            section_number: Some(1),
            ..Default::default()
        },
        paragraph(1, 3, 2, "Let there be light and"),
    ];

    let passages = extract_passages("genesis", &elements).unwrap();
    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].text, "And God said Let there be light and");
    assert_eq!(passages[0].verse, 3);
}

#[test]
fn test_fragments_accumulate_until_long_enough() {
    let elements = vec![
        paragraph(3, 16, 1, "For God so loved"),
        paragraph(3, 16, 2, "the world,"),
        paragraph(3, 16, 3, "that he gave his only begotten Son"),
        paragraph(3, 17, 1, "For God sent not his Son"),
        paragraph(3, 17, 2, "into the world to condemn the world"),
    ];

    let passages = extract_passages("john", &elements).unwrap();
    assert_eq!(passages.len(), 2);

    assert_eq!(
        passages[0].text,
        "For God so loved the world, that he gave his only begotten Son"
    );
    assert_eq!((passages[0].chapter, passages[0].verse), (3, 16));
    assert_eq!(passages[0].testament, Testament::New);
    assert_eq!(passages[0].area, "Gospel");

    assert_eq!(
        passages[1].text,
        "For God sent not his Son into the world to condemn the world"
    );
    assert_eq!((passages[1].chapter, passages[1].verse), (3, 17));
}

#[test]
fn test_restart_while_open_discards_group() {
    let elements = vec![
        paragraph(1, 1, 1, "Paul an apostle"),
        paragraph(1, 1, 2, "of Jesus Christ"),
        // Restart while a group is open: the six words above are lost
        paragraph(1, 2, 1, "unto the church"),
        // Nothing open now, so this starts a fresh group
        paragraph(1, 3, 1, "Grace be unto you and peace from God"),
    ];

    let passages = extract_passages("1corinthians", &elements).unwrap();
    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].text, "Grace be unto you and peace from God");
    assert_eq!((passages[0].chapter, passages[0].verse), (1, 3));
    assert_eq!(passages[0].area, "Pauls letters");
}

#[test]
fn test_restart_drops_group_that_never_qualified() {
    let elements = vec![
        paragraph(1, 1, 1, "one"),
        paragraph(1, 1, 2, "two"),
        paragraph(1, 2, 1, "three"),
        paragraph(1, 2, 2, "four five"),
        paragraph(1, 2, 3, "six"),
        paragraph(1, 3, 1, "seven eight nine ten eleven twelve thirteen"),
    ];

    // The final start arrives while [2, 3] is still open, so it discards too.
    let passages = extract_passages("romans", &elements).unwrap();
    assert!(passages.is_empty());
}

#[test]
fn test_sentinel_trigger_is_rejected() {
    let elements = vec![paragraph(99, 99, 1, "This footer line has more than seven words")];
    let passages = extract_passages("psalms", &elements).unwrap();
    assert!(passages.is_empty());

    let elements = vec![paragraph(99, 1, 1, "This footer line has more than seven words")];
    let passages = extract_passages("psalms", &elements).unwrap();
    assert_eq!(passages.len(), 1);
}

#[test]
fn test_sentinel_keeps_text_for_next_trigger() {
    let elements = vec![
        paragraph(99, 99, 1, "one two three four five six seven"),
        paragraph(2, 4, 2, "eight"),
    ];

    let passages = extract_passages("psalms", &elements).unwrap();
    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].text, "one two three four five six seven eight");
    assert_eq!((passages[0].chapter, passages[0].verse), (2, 4));
}

#[test]
fn test_word_count_ignores_extra_whitespace() {
    let elements = vec![paragraph(1, 1, 1, "  one   two three\tfour five  six  ")];
    let passages = extract_passages("ruth", &elements).unwrap();
    assert!(passages.is_empty());

    let elements = vec![paragraph(1, 1, 1, "  one   two three\tfour five  six seven ")];
    let passages = extract_passages("ruth", &elements).unwrap();
    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].text, "one   two three\tfour five  six seven");
}

#[test]
fn test_missing_field_is_an_error() {
    let elements = vec![
        paragraph(1, 1, 1, "In the beginning God created the heaven and the earth"),
        Element {
            kind: "paragraph text".to_string(),
            chapter_number: Some(1),
            verse_number: Some(2),
            section_number: Some(1),
            value: None,
        },
    ];

    let mut extractor = PassageExtractor::new("genesis", &elements);
    assert!(matches!(extractor.next(), Some(Ok(_))));
    match extractor.next() {
        Some(Err(SectionsError::MissingField { book, index, field })) => {
            assert_eq!(book, "genesis");
            assert_eq!(index, 1);
            assert_eq!(field, "value");
        }
        other => panic!("expected missing field error, got {other:?}"),
    }
    assert!(extractor.next().is_none());

    assert!(extract_passages("genesis", &elements).is_err());
}

#[test]
fn test_unknown_book_is_an_error() {
    let elements = vec![paragraph(1, 1, 1, "one two three four five six seven")];
    let result = extract_passages("enoch", &elements);
    assert!(matches!(result, Err(SectionsError::UnknownBook(book)) if book == "enoch"));

    // Books without paragraph text are never classified
    assert!(extract_passages("enoch", &[]).unwrap().is_empty());
}

#[test]
fn test_every_passage_matches_catalog() {
    let elements = vec![
        paragraph(1, 1, 1, "The words of Amos, who was among the herdmen"),
        paragraph(1, 2, 1, "And he said, The LORD will roar from Zion"),
    ];

    for passage in extract_passages("amos", &elements).unwrap() {
        let info = classify(&passage.book).unwrap();
        assert_eq!(passage.testament, info.testament);
        assert_eq!(passage.area, info.area);
        assert!(passage.word_count() >= 7);
    }
}

#[test]
fn test_elements_parse_from_book_json() {
    let json = r#"[
        {"type": "heading", "value": "Chapter 1"},
        {"type": "paragraph text", "chapterNumber": 1, "verseNumber": 1,
         "sectionNumber": 1, "value": "The book of the generation of Jesus Christ", "extra": true}
    ]"#;

    let elements: Vec<Element> = serde_json::from_str(json).unwrap();
    assert_eq!(elements.len(), 2);
    assert!(!elements[0].is_paragraph_text());
    assert!(elements[1].is_paragraph_text());

    let passages = extract_passages("matthew", &elements).unwrap();
    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].text, "The book of the generation of Jesus Christ");
}

// Helper functions to create test elements

fn paragraph(chapter: i64, verse: i64, section: i64, value: &str) -> Element {
    Element {
        kind: "paragraph text".to_string(),
        chapter_number: Some(chapter),
        verse_number: Some(verse),
        section_number: Some(section),
        value: Some(value.to_string()),
    }
}
