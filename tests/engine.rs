//! Integration tests for the public reference engine API.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::cmp::Ordering;

use lectio::{
    compare, contains, format_range, format_reference, next_chapter, parse, prev_chapter,
    sort_canonical, BookId, NavigationStep, ParseError, Range, Reference, Registry,
};

fn step(book: &str, chapter: u32) -> Option<NavigationStep> {
    Some(NavigationStep {
        book_id: BookId::new(book),
        chapter,
    })
}

#[test]
fn test_round_trip_branches() {
    let registry = Registry::standard();
    for reference in [
        Reference::chapter("ROM", 8),
        Reference::verse("ROM", 8, 28),
        Reference::verses("ROM", 8, 28, 30),
        Reference::span("ROM", 7, 24, 8, 2),
    ] {
        let text = format_reference(&registry, &reference);
        assert_eq!(parse(&registry, &text).unwrap().reference, reference, "via {text:?}");
    }
}

#[test]
fn test_containment_boundaries() {
    let registry = Registry::standard();
    let rom = Range::parse(&registry, "ROM 1:1-7").unwrap();
    assert!(contains(1, 1, &rom));
    assert!(contains(1, 7, &rom));
    assert!(!contains(1, 8, &rom));
    assert!(!contains(2, 1, &rom));

    let genesis = Range::parse(&registry, "GEN 1:20-3:10").unwrap();
    assert!(!contains(1, 19, &genesis));
    assert!(contains(1, 20, &genesis));
    assert!(contains(2, 42, &genesis));
    assert!(contains(3, 10, &genesis));
    assert!(!contains(3, 11, &genesis));
}

#[test]
fn test_canonical_ordering() {
    let registry = Registry::standard();
    let mal = parse(&registry, "MAL 4:6").unwrap();
    let mat = parse(&registry, "MAT 1:1").unwrap();
    assert_eq!(compare(&registry, &mal, &mat), Ordering::Less);

    let mut notes = vec![
        Range::new("REV", 1, 1, 1, 3),
        Range::new("EXO", 1, 1, 1, 1),
        Range::new("ROM", 1, 1, 1, 1),
        Range::new("GEN", 1, 1, 1, 1),
    ];
    sort_canonical(&registry, &mut notes);
    let books: Vec<_> = notes.iter().map(|n| n.book.as_str()).collect();
    assert_eq!(books, ["GEN", "EXO", "ROM", "REV"]);
}

#[test]
fn test_navigation_boundaries() {
    let registry = Registry::standard();
    assert_eq!(next_chapter(&registry, &BookId::new("REV"), 22), None);
    assert_eq!(prev_chapter(&registry, &BookId::new("GEN"), 1), None);
    assert_eq!(next_chapter(&registry, &BookId::new("ROM"), 16), step("1CO", 1));
    assert_eq!(prev_chapter(&registry, &BookId::new("EXO"), 1), step("GEN", 50));
}

#[test]
fn test_alias_resolution() {
    let registry = Registry::standard();
    let a = parse(&registry, "rom 1:1-7").unwrap();
    let b = parse(&registry, "Romans 1:1-7").unwrap();
    let c = parse(&registry, "ROM 1:1-7").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_malformed_input() {
    let registry = Registry::standard();
    assert!(matches!(parse(&registry, "not a reference"), Err(ParseError::Unrecognized(_))));
    assert!(matches!(parse(&registry, "Rom 999:1"), Err(ParseError::InvalidReference { .. })));
    assert!(matches!(parse(&registry, "Rom 5:10-3"), Err(ParseError::InvalidReference { .. })));
}

#[test]
fn test_stored_records_round_trip_through_json() {
    let registry = Registry::standard();
    let stored = r#"[
        {"book": "1CO", "startChapter": 13, "startVerse": 4, "endChapter": 13, "endVerse": 7},
        {"book": "gen", "startChapter": 1, "startVerse": 1, "endChapter": 2, "endVerse": 3},
        {"book": "XXX", "startChapter": 1, "startVerse": 1, "endChapter": 1, "endVerse": 1}
    ]"#;
    let mut ranges: Vec<Range> = serde_json::from_str(stored).unwrap();
    sort_canonical(&registry, &mut ranges);

    let text: Vec<String> = ranges.iter().map(|r| format_range(&registry, r)).collect();
    assert_eq!(text, ["", "Genesis 1:1-2:3", "1 Corinthians 13:4-7"]);
}
