//! Canonical book registry.
//!
//! The 66 books in canonical order with their chapter counts, plus the alias
//! table used to resolve typed book names.

use std::collections::HashMap;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;

use super::aliases::{normalize_key, AliasTable};
use crate::error::RegistryError;
use crate::types::{BookId, Testament};

/// (code, display name, chapter count) in canonical order.
const CANON: [(&str, &str, u32); 66] = [
    ("GEN", "Genesis", 50),
    ("EXO", "Exodus", 40),
    ("LEV", "Leviticus", 27),
    ("NUM", "Numbers", 36),
    ("DEU", "Deuteronomy", 34),
    ("JOS", "Joshua", 24),
    ("JDG", "Judges", 21),
    ("RUT", "Ruth", 4),
    ("1SA", "1 Samuel", 31),
    ("2SA", "2 Samuel", 24),
    ("1KI", "1 Kings", 22),
    ("2KI", "2 Kings", 25),
    ("1CH", "1 Chronicles", 29),
    ("2CH", "2 Chronicles", 36),
    ("EZR", "Ezra", 10),
    ("NEH", "Nehemiah", 13),
    ("EST", "Esther", 10),
    ("JOB", "Job", 42),
    ("PSA", "Psalms", 150),
    ("PRO", "Proverbs", 31),
    ("ECC", "Ecclesiastes", 12),
    ("SNG", "Song of Solomon", 8),
    ("ISA", "Isaiah", 66),
    ("JER", "Jeremiah", 52),
    ("LAM", "Lamentations", 5),
    ("EZK", "Ezekiel", 48),
    ("DAN", "Daniel", 12),
    ("HOS", "Hosea", 14),
    ("JOL", "Joel", 3),
    ("AMO", "Amos", 9),
    ("OBA", "Obadiah", 1),
    ("JON", "Jonah", 4),
    ("MIC", "Micah", 7),
    ("NAM", "Nahum", 3),
    ("HAB", "Habakkuk", 3),
    ("ZEP", "Zephaniah", 3),
    ("HAG", "Haggai", 2),
    ("ZEC", "Zechariah", 14),
    ("MAL", "Malachi", 4),
    ("MAT", "Matthew", 28),
    ("MRK", "Mark", 16),
    ("LUK", "Luke", 24),
    ("JHN", "John", 21),
    ("ACT", "Acts", 28),
    ("ROM", "Romans", 16),
    ("1CO", "1 Corinthians", 16),
    ("2CO", "2 Corinthians", 13),
    ("GAL", "Galatians", 6),
    ("EPH", "Ephesians", 6),
    ("PHP", "Philippians", 4),
    ("COL", "Colossians", 4),
    ("1TH", "1 Thessalonians", 5),
    ("2TH", "2 Thessalonians", 3),
    ("1TI", "1 Timothy", 6),
    ("2TI", "2 Timothy", 4),
    ("TIT", "Titus", 3),
    ("PHM", "Philemon", 1),
    ("HEB", "Hebrews", 13),
    ("JAS", "James", 5),
    ("1PE", "1 Peter", 5),
    ("2PE", "2 Peter", 3),
    ("1JN", "1 John", 5),
    ("2JN", "2 John", 1),
    ("3JN", "3 John", 1),
    ("JUD", "Jude", 1),
    ("REV", "Revelation", 22),
];

/// Index of Matthew, the first New Testament book.
const FIRST_NEW_TESTAMENT_INDEX: usize = 39;

/// One book of the canon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntry {
    /// Canonical code.
    pub id: BookId,
    /// Display name (e.g. "1 Corinthians").
    pub name: String,
    /// Number of chapters, always at least 1.
    pub chapter_count: u32,
    /// Old or New Testament.
    pub testament: Testament,
}

/// Immutable catalog of books and aliases.
///
/// Build it once at startup and pass `&Registry` to the parser, formatter,
/// comparator and navigation functions.
#[derive(Debug, Clone)]
pub struct Registry {
    books: Vec<BookEntry>,
    by_id: HashMap<BookId, usize>,
    /// Normalized display names, parallel to `books`.
    name_keys: Vec<String>,
    aliases: AliasTable,
}

impl Registry {
    /// The standard 66-book Protestant canon with built-in aliases.
    pub fn standard() -> Self {
        let books: Vec<BookEntry> = CANON
            .iter()
            .enumerate()
            .map(|(idx, (code, name, chapters))| BookEntry {
                id: BookId::new(code),
                name: (*name).to_string(),
                chapter_count: *chapters,
                testament: if idx < FIRST_NEW_TESTAMENT_INDEX {
                    Testament::Old
                } else {
                    Testament::New
                },
            })
            .collect();

        let by_id = books
            .iter()
            .enumerate()
            .map(|(idx, book)| (book.id.clone(), idx))
            .collect();
        let name_keys = books.iter().map(|book| normalize_key(&book.name)).collect();

        Self {
            books,
            by_id,
            name_keys,
            aliases: AliasTable::builtin(),
        }
    }

    /// The standard registry extended with user aliases.
    ///
    /// Every target must be a known book id. User aliases override built-in
    /// ones with the same key, but may not take over another book's canonical
    /// name or id, since formatted text has to parse back to the same book.
    pub fn with_extra_aliases<'a, I>(extra: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut registry = Self::standard();
        for (alias, target) in extra {
            let id = BookId::new(target);
            if !registry.by_id.contains_key(&id) {
                return Err(RegistryError::UnknownAliasTarget {
                    alias: alias.to_string(),
                    target: target.to_string(),
                });
            }
            if let Some(owner) = registry.canonical_owner(&normalize_key(alias)) {
                if owner.id != id {
                    return Err(RegistryError::ShadowsCanonicalName {
                        alias: alias.to_string(),
                        book: owner.id.to_string(),
                    });
                }
            }
            if !registry.aliases.insert(alias, id) {
                return Err(RegistryError::EmptyAlias(alias.to_string()));
            }
        }
        Ok(registry)
    }

    /// The book whose canonical name or id normalizes to `key`.
    fn canonical_owner(&self, key: &str) -> Option<&BookEntry> {
        self.books
            .iter()
            .zip(&self.name_keys)
            .find(|(book, name)| **name == key || book.id.as_str().eq_ignore_ascii_case(key))
            .map(|(book, _)| book)
    }

    /// Look up a book by id.
    pub fn get(&self, id: &BookId) -> Option<&BookEntry> {
        self.index_of(id).and_then(|idx| self.books.get(idx))
    }

    /// The book at a 0-based canonical position.
    pub fn by_index(&self, index: usize) -> Option<&BookEntry> {
        self.books.get(index)
    }

    /// Canonical position of a book, or `None` if the id is unknown.
    pub fn index_of(&self, id: &BookId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Books in canonical order.
    pub fn books(&self) -> impl Iterator<Item = &BookEntry> {
        self.books.iter()
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the registry has no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The alias table.
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Resolve typed book text to an entry.
    ///
    /// Tries, in order: the alias table, an exact canonical name or id, then a
    /// prefix match in either direction against canonical names. The prefix
    /// step takes the first hit in canonical order, so "jo" lands on Joshua
    /// even though Job, Joel, Jonah and John also start that way.
    pub fn resolve_book(&self, text: &str) -> Option<&BookEntry> {
        let key = normalize_key(text);
        if key.is_empty() {
            return None;
        }

        if let Some(id) = self.aliases.get_key(&key) {
            return self.get(id);
        }

        if let Some(book) = self.canonical_owner(&key) {
            return Some(book);
        }

        self.books
            .iter()
            .zip(&self.name_keys)
            .find(|(_, name)| name.starts_with(&key) || key.starts_with(name.as_str()))
            .map(|(book, _)| book)
    }

    /// Book names that look like `query`, best first.
    pub fn suggest_books(&self, query: &str, limit: usize) -> Vec<&BookEntry> {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .books
            .iter()
            .enumerate()
            .filter_map(|(idx, book)| {
                matcher
                    .fuzzy_match(&book.name, query.trim())
                    .map(|score| (score, idx))
            })
            .collect();

        // Highest score first; ties keep canonical order.
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored
            .into_iter()
            .take(limit)
            .filter_map(|(_, idx)| self.books.get(idx))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
