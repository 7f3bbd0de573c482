//! Stored verse ranges: containment and canonical ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::reference::{parse, Reference};
use super::registry::Registry;
use crate::error::ParseError;
use crate::types::BookId;

/// A verse range as persisted with a note or annotation.
///
/// Serializes to exactly `{ book, startChapter, startVerse, endChapter, endVerse }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// Canonical book code.
    pub book: BookId,
    /// First chapter.
    pub start_chapter: u32,
    /// First verse.
    pub start_verse: u32,
    /// Last chapter.
    pub end_chapter: u32,
    /// Last verse.
    pub end_verse: u32,
}

impl Range {
    /// Create a range. No validation; see [`Range::validate`].
    pub fn new(
        book: impl Into<BookId>,
        start_chapter: u32,
        start_verse: u32,
        end_chapter: u32,
        end_verse: u32,
    ) -> Self {
        Self {
            book: book.into(),
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
        }
    }

    /// Parse text into a range. Whole-chapter references are rejected since a
    /// stored range always names concrete verses.
    pub fn parse(registry: &Registry, text: &str) -> Result<Self, ParseError> {
        let parsed = parse(registry, text)?;
        parsed.reference.to_range().ok_or_else(|| ParseError::InvalidReference {
            input: text.trim().to_string(),
            reason: "a range needs start and end verses",
        })
    }

    /// Check the same invariants a parsed reference satisfies.
    pub fn validate(&self, registry: &Registry) -> Result<(), &'static str> {
        Reference::from(self.clone()).validate(registry)
    }

    /// Whether `chapter:verse` falls inside this range.
    ///
    /// Interior chapters of a multi-chapter range accept any verse, since verse
    /// counts per chapter are unknown here.
    pub fn contains(&self, chapter: u32, verse: u32) -> bool {
        span_contains(
            (self.start_chapter, self.start_verse),
            (self.end_chapter, self.end_verse),
            chapter,
            verse,
        )
    }
}

impl From<Range> for Reference {
    fn from(range: Range) -> Self {
        Self::span(
            range.book,
            range.start_chapter,
            range.start_verse,
            range.end_chapter,
            range.end_verse,
        )
    }
}

impl Reference {
    /// Convert to a stored range; `None` for whole-chapter references.
    pub fn to_range(&self) -> Option<Range> {
        Some(Range {
            book: self.book_id.clone(),
            start_chapter: self.start_chapter,
            start_verse: self.start_verse?,
            end_chapter: self.end_chapter,
            end_verse: self.end_verse?,
        })
    }
}

/// Free-function form of [`Range::contains`].
pub fn contains(chapter: u32, verse: u32, range: &Range) -> bool {
    range.contains(chapter, verse)
}

pub(crate) const fn span_contains(
    start: (u32, u32),
    end: (u32, u32),
    chapter: u32,
    verse: u32,
) -> bool {
    let (start_chapter, start_verse) = start;
    let (end_chapter, end_verse) = end;

    if start_chapter == end_chapter {
        return chapter == start_chapter && start_verse <= verse && verse <= end_verse;
    }
    if chapter < start_chapter || chapter > end_chapter {
        return false;
    }
    if chapter == start_chapter {
        return verse >= start_verse;
    }
    if chapter == end_chapter {
        return verse <= end_verse;
    }
    true
}

/// Anything with a canonical position: a book, a chapter and maybe a verse.
pub trait Located {
    /// Book code.
    fn book(&self) -> &BookId;
    /// Starting chapter.
    fn start_chapter(&self) -> u32;
    /// Starting verse; `None` sorts before verse 1.
    fn start_verse(&self) -> Option<u32>;
}

impl Located for Range {
    fn book(&self) -> &BookId {
        &self.book
    }

    fn start_chapter(&self) -> u32 {
        self.start_chapter
    }

    fn start_verse(&self) -> Option<u32> {
        Some(self.start_verse)
    }
}

impl Located for Reference {
    fn book(&self) -> &BookId {
        &self.book_id
    }

    fn start_chapter(&self) -> u32 {
        self.start_chapter
    }

    fn start_verse(&self) -> Option<u32> {
        self.start_verse
    }
}

impl Located for super::reference::ParsedReference {
    fn book(&self) -> &BookId {
        &self.reference.book_id
    }

    fn start_chapter(&self) -> u32 {
        self.reference.start_chapter
    }

    fn start_verse(&self) -> Option<u32> {
        self.reference.start_verse
    }
}

/// Compare two locations in Bible order: book, then start chapter, then start verse.
///
/// A book the registry does not know sorts before Genesis.
pub fn compare<A, B>(registry: &Registry, a: &A, b: &B) -> Ordering
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    let key = |item_book: &BookId| registry.index_of(item_book);

    key(a.book())
        .cmp(&key(b.book()))
        .then_with(|| a.start_chapter().cmp(&b.start_chapter()))
        .then_with(|| a.start_verse().cmp(&b.start_verse()))
}

/// Stable sort into Bible order.
pub fn sort_canonical<T: Located>(registry: &Registry, items: &mut [T]) {
    items.sort_by(|a, b| compare(registry, a, b));
}
