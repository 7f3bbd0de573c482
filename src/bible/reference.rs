//! Scripture reference parsing.
//!
//! Turns text like "Romans 1:1-7", "1 Jn 3:16" or "Gen 1:20-3:10" into a
//! structured [`Reference`] checked against the registry.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::format::format_span;
use super::registry::Registry;
use crate::error::ParseError;
use crate::types::BookId;

/// Book name: optional leading numeral, then letters, spaces, periods.
const BOOK: &str = r"(?P<book>(?:[1-3]\s*)?\p{L}[\p{L}.' ]*?)";

/// Reference shapes in precedence order; the first that matches wins.
const GRAMMAR_PATTERNS: [&str; 4] = [
    // Book C:V-C:V
    r"^{book}\s*(?P<sc>\d+)\s*:\s*(?P<sv>\d+)\s*[-–—]\s*(?P<ec>\d+)\s*:\s*(?P<ev>\d+)$",
    // Book C:V-V
    r"^{book}\s*(?P<sc>\d+)\s*:\s*(?P<sv>\d+)\s*[-–—]\s*(?P<ev>\d+)$",
    // Book C:V
    r"^{book}\s*(?P<sc>\d+)\s*:\s*(?P<sv>\d+)$",
    // Book C
    r"^{book}\s*(?P<sc>\d+)$",
];

/// Compiled reference grammar.
#[allow(clippy::expect_used)]
static GRAMMAR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    GRAMMAR_PATTERNS
        .iter()
        .map(|pattern| Regex::new(&pattern.replace("{book}", BOOK)).expect("valid regex: GRAMMAR"))
        .collect()
});

/// A book/chapter/verse locator, possibly spanning chapters.
///
/// `start_verse == None` together with `end_verse == None` means the whole
/// chapter `start_chapter`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Canonical book code.
    pub book_id: BookId,
    /// First chapter.
    pub start_chapter: u32,
    /// First verse, `None` for a whole chapter.
    pub start_verse: Option<u32>,
    /// Last chapter.
    pub end_chapter: u32,
    /// Last verse, `None` for a whole chapter.
    pub end_verse: Option<u32>,
}

impl Reference {
    /// An entire chapter.
    pub fn chapter(book_id: impl Into<BookId>, chapter: u32) -> Self {
        Self {
            book_id: book_id.into(),
            start_chapter: chapter,
            start_verse: None,
            end_chapter: chapter,
            end_verse: None,
        }
    }

    /// A single verse.
    pub fn verse(book_id: impl Into<BookId>, chapter: u32, verse: u32) -> Self {
        Self::span(book_id, chapter, verse, chapter, verse)
    }

    /// A run of verses within one chapter.
    pub fn verses(book_id: impl Into<BookId>, chapter: u32, start: u32, end: u32) -> Self {
        Self::span(book_id, chapter, start, chapter, end)
    }

    /// A span that may cross chapter boundaries.
    pub fn span(
        book_id: impl Into<BookId>,
        start_chapter: u32,
        start_verse: u32,
        end_chapter: u32,
        end_verse: u32,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            start_chapter,
            start_verse: Some(start_verse),
            end_chapter,
            end_verse: Some(end_verse),
        }
    }

    /// Whether this names a chapter rather than specific verses.
    pub const fn is_whole_chapter(&self) -> bool {
        self.start_verse.is_none() && self.end_verse.is_none()
    }

    /// Check the structural invariants against the registry.
    ///
    /// Returns the violated constraint on failure. Verse numbers have no upper
    /// bound here; per-chapter verse counts are not modeled.
    pub fn validate(&self, registry: &Registry) -> Result<(), &'static str> {
        let book = registry.get(&self.book_id).ok_or("book is not in the registry")?;

        if self.start_chapter < 1 {
            return Err("chapters start at 1");
        }
        if self.end_chapter > book.chapter_count {
            return Err("chapter beyond the end of the book");
        }
        if self.start_chapter > self.end_chapter {
            return Err("end chapter before start chapter");
        }

        match (self.start_verse, self.end_verse) {
            (None, None) if self.start_chapter == self.end_chapter => Ok(()),
            (None, None) => Err("whole-chapter reference must name a single chapter"),
            (Some(start), Some(end)) => {
                if start < 1 || end < 1 {
                    Err("verses start at 1")
                } else if self.start_chapter == self.end_chapter && start > end {
                    Err("end verse before start verse")
                } else {
                    Ok(())
                }
            }
            _ => Err("start and end verse must both be present or both absent"),
        }
    }

    /// Whether `chapter:verse` falls inside this reference.
    ///
    /// A whole-chapter reference contains every verse of its chapter.
    pub fn contains(&self, chapter: u32, verse: u32) -> bool {
        match (self.start_verse, self.end_verse) {
            (Some(start_verse), Some(end_verse)) => super::range::span_contains(
                (self.start_chapter, start_verse),
                (self.end_chapter, end_verse),
                chapter,
                verse,
            ),
            _ => chapter == self.start_chapter,
        }
    }
}

/// A successfully parsed reference and the display name of its book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReference {
    /// The structured reference.
    #[serde(flatten)]
    pub reference: Reference,
    /// Canonical display name of the book (e.g. "Romans").
    pub book_name: String,
}

impl ParsedReference {
    /// The canonical book code.
    pub const fn book_id(&self) -> &BookId {
        &self.reference.book_id
    }
}

impl fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.reference;
        match (r.start_verse, r.end_verse) {
            (Some(sv), Some(ev)) => {
                let text = format_span(&self.book_name, r.start_chapter, sv, r.end_chapter, ev);
                f.write_str(&text)
            }
            _ => write!(f, "{} {}", self.book_name, r.start_chapter),
        }
    }
}

/// Parse a single scripture reference.
///
/// Supported shapes, tried in this order:
/// - "Gen 1:20-3:10" (cross-chapter)
/// - "Rom 1:1-7" (verses in one chapter)
/// - "John 3:16" (one verse)
/// - "Psalm 23" (whole chapter)
///
/// Never returns a partial result: the text either yields a valid reference or
/// an error.
pub fn parse(registry: &Registry, text: &str) -> Result<ParsedReference, ParseError> {
    let input = text.trim();

    let Some(caps) = GRAMMAR.iter().find_map(|re| re.captures(input)) else {
        tracing::debug!("No reference shape matches {input:?}");
        return Err(ParseError::Unrecognized(input.to_string()));
    };

    let book_text = group(&caps, "book").unwrap_or_default();
    let Some(book) = registry.resolve_book(book_text) else {
        tracing::debug!("Book {book_text:?} did not resolve");
        return Err(ParseError::UnknownBook(book_text.trim().to_string()));
    };

    let invalid = |reason| ParseError::InvalidReference { input: input.to_string(), reason };
    let number = |name| -> Result<Option<u32>, ParseError> {
        group(&caps, name)
            .map(|digits| digits.parse::<u32>().map_err(|_| invalid("number too large")))
            .transpose()
    };

    let start_chapter = number("sc")?.ok_or_else(|| invalid("missing chapter"))?;
    let start_verse = number("sv")?;
    let end_chapter = number("ec")?.unwrap_or(start_chapter);
    let end_verse = number("ev")?.or(start_verse);

    let reference = Reference {
        book_id: book.id.clone(),
        start_chapter,
        start_verse,
        end_chapter,
        end_verse,
    };

    if let Err(reason) = reference.validate(registry) {
        tracing::debug!("Rejected {input:?}: {reason}");
        return Err(invalid(reason));
    }

    Ok(ParsedReference {
        reference,
        book_name: book.name.clone(),
    })
}

/// Parse a list like "Isaiah 32:15-17; Luke 1:76-79".
///
/// Pieces are separated by `;` or `,`. Pieces that do not parse are skipped.
pub fn parse_many(registry: &Registry, text: &str) -> Vec<ParsedReference> {
    text.split([';', ','])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match parse(registry, part) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!("Skipping list item {part:?}: {e}");
                None
            }
        })
        .collect()
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}
