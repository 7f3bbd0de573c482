//! Chapter-by-chapter navigation across book boundaries.

use serde::{Deserialize, Serialize};

use super::reference::Reference;
use super::registry::{BookEntry, Registry};
use crate::types::BookId;

/// A chapter to move to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationStep {
    /// Book code.
    pub book_id: BookId,
    /// Chapter within that book.
    pub chapter: u32,
}

impl NavigationStep {
    fn to(book: &BookEntry, chapter: u32) -> Self {
        Self {
            book_id: book.id.clone(),
            chapter,
        }
    }

    /// The whole chapter this step lands on.
    pub fn reference(&self) -> Reference {
        Reference::chapter(self.book_id.clone(), self.chapter)
    }
}

/// The chapter after `book_id chapter`, rolling into the next book.
///
/// `None` after the last chapter of Revelation, or for an unknown book.
pub fn next_chapter(registry: &Registry, book_id: &BookId, chapter: u32) -> Option<NavigationStep> {
    let index = registry.index_of(book_id)?;
    let book = registry.by_index(index)?;

    if chapter < book.chapter_count {
        return Some(NavigationStep::to(book, chapter + 1));
    }
    registry.by_index(index + 1).map(|next| NavigationStep::to(next, 1))
}

/// The chapter before `book_id chapter`, rolling into the previous book's last chapter.
///
/// `None` before Genesis 1, or for an unknown book. A chapter past the end of
/// the book steps back to the book's last chapter.
pub fn prev_chapter(registry: &Registry, book_id: &BookId, chapter: u32) -> Option<NavigationStep> {
    let index = registry.index_of(book_id)?;
    let book = registry.by_index(index)?;

    if chapter > 1 {
        return Some(NavigationStep::to(book, (chapter - 1).min(book.chapter_count)));
    }
    let previous = registry.by_index(index.checked_sub(1)?)?;
    Some(NavigationStep::to(previous, previous.chapter_count))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn step(book: &str, chapter: u32) -> Option<NavigationStep> {
        Some(NavigationStep { book_id: BookId::new(book), chapter })
    }

    #[test]
    fn test_next_within_and_across_books() {
        let registry = Registry::standard();
        assert_eq!(next_chapter(&registry, &BookId::new("GEN"), 1), step("GEN", 2));
        assert_eq!(next_chapter(&registry, &BookId::new("ROM"), 16), step("1CO", 1));
        assert_eq!(next_chapter(&registry, &BookId::new("MAL"), 4), step("MAT", 1));
        assert_eq!(next_chapter(&registry, &BookId::new("OBA"), 1), step("JON", 1));
    }

    #[test]
    fn test_prev_within_and_across_books() {
        let registry = Registry::standard();
        assert_eq!(prev_chapter(&registry, &BookId::new("GEN"), 2), step("GEN", 1));
        assert_eq!(prev_chapter(&registry, &BookId::new("EXO"), 1), step("GEN", 50));
        assert_eq!(prev_chapter(&registry, &BookId::new("MAT"), 1), step("MAL", 4));
        assert_eq!(prev_chapter(&registry, &BookId::new("RUT"), 40), step("RUT", 4));
    }

    #[test]
    fn test_corpus_boundaries() {
        let registry = Registry::standard();
        assert_eq!(next_chapter(&registry, &BookId::new("REV"), 22), None);
        assert_eq!(prev_chapter(&registry, &BookId::new("GEN"), 1), None);
    }

    #[test]
    fn test_unknown_book() {
        let registry = Registry::standard();
        assert_eq!(next_chapter(&registry, &BookId::new("TOB"), 1), None);
        assert_eq!(prev_chapter(&registry, &BookId::new("TOB"), 2), None);
    }

    #[test]
    fn test_walk_whole_bible() {
        let registry = Registry::standard();
        let mut current = step("GEN", 1);
        let mut count = 1;
        while let Some(here) = current {
            current = next_chapter(&registry, &here.book_id, here.chapter);
            if current.is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 1189);
    }

    #[test]
    fn test_step_serializes_with_book_id() {
        let json = serde_json::to_value(step("1CO", 1).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "bookId": "1CO", "chapter": 1 }));
        assert_eq!(step("PSA", 23).unwrap().reference(), Reference::chapter("PSA", 23));
    }
}
