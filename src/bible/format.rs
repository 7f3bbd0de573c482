//! Reference and range formatting.
//!
//! Output is the shortest text that parses back to the same reference.

use super::range::Range;
use super::reference::Reference;
use super::registry::Registry;

/// Format a reference (e.g. "Romans 1:1-7", "Psalms 23").
///
/// Returns an empty string when the book id is not in the registry, so
/// corrupted or foreign records simply display nothing.
pub fn format_reference(registry: &Registry, reference: &Reference) -> String {
    let Some(book) = registry.get(&reference.book_id) else {
        return String::new();
    };

    match (reference.start_verse, reference.end_verse) {
        (Some(start_verse), Some(end_verse)) => format_span(
            &book.name,
            reference.start_chapter,
            start_verse,
            reference.end_chapter,
            end_verse,
        ),
        _ => format!("{} {}", book.name, reference.start_chapter),
    }
}

/// Format a stored range. Empty string for an unknown book.
pub fn format_range(registry: &Registry, range: &Range) -> String {
    registry.get(&range.book).map_or_else(String::new, |book| {
        format_span(
            &book.name,
            range.start_chapter,
            range.start_verse,
            range.end_chapter,
            range.end_verse,
        )
    })
}

/// Collapse a verse span to its shortest form.
pub(crate) fn format_span(
    book_name: &str,
    start_chapter: u32,
    start_verse: u32,
    end_chapter: u32,
    end_verse: u32,
) -> String {
    if start_chapter != end_chapter {
        format!("{book_name} {start_chapter}:{start_verse}-{end_chapter}:{end_verse}")
    } else if start_verse == end_verse {
        format!("{book_name} {start_chapter}:{start_verse}")
    } else {
        format!("{book_name} {start_chapter}:{start_verse}-{end_verse}")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::reference::parse;

    #[test]
    fn test_collapsing_rules() {
        let registry = Registry::standard();
        assert_eq!(format_reference(&registry, &Reference::chapter("PSA", 23)), "Psalms 23");
        assert_eq!(format_reference(&registry, &Reference::verse("JHN", 3, 16)), "John 3:16");
        assert_eq!(format_reference(&registry, &Reference::verses("ROM", 1, 1, 7)), "Romans 1:1-7");
        assert_eq!(
            format_reference(&registry, &Reference::span("GEN", 1, 20, 3, 10)),
            "Genesis 1:20-3:10"
        );
    }

    #[test]
    fn test_format_range() {
        let registry = Registry::standard();
        assert_eq!(
            format_range(&registry, &Range::new("1CO", 13, 4, 13, 7)),
            "1 Corinthians 13:4-7"
        );
        assert_eq!(format_range(&registry, &Range::new("1CO", 13, 4, 13, 4)), "1 Corinthians 13:4");
    }

    #[test]
    fn test_unknown_book_formats_empty() {
        let registry = Registry::standard();
        assert_eq!(format_reference(&registry, &Reference::verse("XYZ", 1, 1)), "");
        assert_eq!(format_range(&registry, &Range::new("TOB", 1, 1, 2, 2)), "");
    }

    #[test]
    fn test_round_trip_every_branch() {
        let registry = Registry::standard();
        let cases = [
            Reference::chapter("OBA", 1),
            Reference::verse("REV", 22, 21),
            Reference::verses("SNG", 2, 1, 4),
            Reference::span("1SA", 16, 14, 17, 58),
            Reference::span("3JN", 1, 1, 1, 14),
        ];

        for reference in cases {
            let text = format_reference(&registry, &reference);
            let parsed = parse(&registry, &text).unwrap();
            assert_eq!(parsed.reference, reference, "round trip through {text:?}");
        }
    }

    #[test]
    fn test_round_trip_every_book() {
        let registry = Registry::standard();
        for book in registry.books() {
            let last = book.chapter_count;
            let mut cases = vec![
                Reference::chapter(book.id.clone(), last),
                Reference::verse(book.id.clone(), 1, 1),
                Reference::verses(book.id.clone(), last, 2, 9),
            ];
            if last > 1 {
                cases.push(Reference::span(book.id.clone(), 1, 5, last, 3));
            }
            for reference in cases {
                let text = format_reference(&registry, &reference);
                let parsed = parse(&registry, &text).unwrap();
                assert_eq!(parsed.reference, reference, "round trip through {text:?}");
                assert_eq!(parsed.book_name, book.name);
            }
        }
    }
}
