//! Book name aliases and key normalization.

use std::collections::HashMap;

use crate::types::BookId;

/// Common abbreviations and variations, keyed by book code.
///
/// Full canonical names and codes resolve without an entry here; this list only
/// needs the spellings that differ from both.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    // Old Testament
    ("gen", "GEN"), ("ge", "GEN"), ("gn", "GEN"),
    ("ex", "EXO"), ("exod", "EXO"), ("exo", "EXO"),
    ("lev", "LEV"), ("lv", "LEV"),
    ("num", "NUM"), ("nm", "NUM"), ("nb", "NUM"),
    ("deut", "DEU"), ("dt", "DEU"),
    ("josh", "JOS"), ("jos", "JOS"),
    ("judg", "JDG"), ("jdg", "JDG"), ("jg", "JDG"),
    ("ru", "RUT"), ("rth", "RUT"),
    ("1 sam", "1SA"), ("1sa", "1SA"), ("1 sm", "1SA"), ("i samuel", "1SA"),
    ("2 sam", "2SA"), ("2sa", "2SA"), ("2 sm", "2SA"), ("ii samuel", "2SA"),
    ("1 kgs", "1KI"), ("1ki", "1KI"), ("i kings", "1KI"),
    ("2 kgs", "2KI"), ("2ki", "2KI"), ("ii kings", "2KI"),
    ("1 chr", "1CH"), ("1ch", "1CH"), ("1 chron", "1CH"), ("i chronicles", "1CH"),
    ("2 chr", "2CH"), ("2ch", "2CH"), ("2 chron", "2CH"), ("ii chronicles", "2CH"),
    ("ezr", "EZR"),
    ("neh", "NEH"), ("ne", "NEH"),
    ("esth", "EST"), ("es", "EST"),
    ("jb", "JOB"),
    ("ps", "PSA"), ("psa", "PSA"), ("psalm", "PSA"), ("pss", "PSA"), ("psm", "PSA"),
    ("prov", "PRO"), ("prv", "PRO"), ("pr", "PRO"),
    ("eccl", "ECC"), ("eccles", "ECC"), ("qoh", "ECC"), ("qoheleth", "ECC"),
    ("song", "SNG"), ("song of songs", "SNG"), ("sos", "SNG"), ("canticles", "SNG"),
    ("isa", "ISA"), ("is", "ISA"),
    ("jer", "JER"), ("jr", "JER"),
    ("lam", "LAM"), ("la", "LAM"),
    ("ezek", "EZK"), ("eze", "EZK"), ("ezk", "EZK"),
    ("dan", "DAN"), ("dn", "DAN"),
    ("hos", "HOS"), ("ho", "HOS"),
    ("jl", "JOL"), ("jol", "JOL"),
    ("am", "AMO"), ("amo", "AMO"),
    ("obad", "OBA"), ("ob", "OBA"),
    ("jnh", "JON"), ("jon", "JON"),
    ("mic", "MIC"), ("mc", "MIC"),
    ("nah", "NAM"), ("na", "NAM"),
    ("hab", "HAB"), ("hb", "HAB"),
    ("zeph", "ZEP"), ("zep", "ZEP"), ("zp", "ZEP"),
    ("hag", "HAG"), ("hg", "HAG"),
    ("zech", "ZEC"), ("zec", "ZEC"), ("zc", "ZEC"),
    ("mal", "MAL"), ("ml", "MAL"),
    // New Testament
    ("matt", "MAT"), ("mt", "MAT"),
    ("mrk", "MRK"), ("mk", "MRK"), ("mr", "MRK"),
    ("luk", "LUK"), ("lk", "LUK"),
    ("jhn", "JHN"), ("jn", "JHN"),
    ("act", "ACT"), ("ac", "ACT"),
    ("rom", "ROM"), ("ro", "ROM"), ("rm", "ROM"),
    ("1 cor", "1CO"), ("1co", "1CO"), ("i corinthians", "1CO"),
    ("2 cor", "2CO"), ("2co", "2CO"), ("ii corinthians", "2CO"),
    ("gal", "GAL"), ("ga", "GAL"),
    ("eph", "EPH"), ("ephes", "EPH"),
    ("phil", "PHP"), ("php", "PHP"), ("pp", "PHP"),
    ("col", "COL"),
    ("1 thess", "1TH"), ("1th", "1TH"), ("i thessalonians", "1TH"),
    ("2 thess", "2TH"), ("2th", "2TH"), ("ii thessalonians", "2TH"),
    ("1 tim", "1TI"), ("1ti", "1TI"), ("i timothy", "1TI"),
    ("2 tim", "2TI"), ("2ti", "2TI"), ("ii timothy", "2TI"),
    ("tit", "TIT"),
    ("philem", "PHM"), ("phm", "PHM"), ("phlm", "PHM"),
    ("heb", "HEB"),
    ("jas", "JAS"), ("jm", "JAS"),
    ("1 pet", "1PE"), ("1pe", "1PE"), ("1pt", "1PE"), ("i peter", "1PE"),
    ("2 pet", "2PE"), ("2pe", "2PE"), ("2pt", "2PE"), ("ii peter", "2PE"),
    ("1jn", "1JN"), ("1jo", "1JN"), ("i john", "1JN"),
    ("2jn", "2JN"), ("2jo", "2JN"), ("ii john", "2JN"),
    ("3jn", "3JN"), ("3jo", "3JN"), ("iii john", "3JN"),
    ("jud", "JUD"), ("jde", "JUD"),
    ("rev", "REV"), ("re", "REV"), ("revelations", "REV"), ("apocalypse", "REV"),
];

/// Normalize free text into an alias key.
///
/// Lower-cases, turns periods into spaces, collapses whitespace and drops the
/// space after a single leading numeral, so "1 John", "1John" and "1 john."
/// all become `1john`.
pub fn normalize_key(text: &str) -> String {
    let lower = text.to_lowercase().replace('.', " ");
    let mut key = lower.split_whitespace().collect::<Vec<_>>().join(" ");

    let bytes = key.as_bytes();
    if bytes.len() > 2 && bytes[0].is_ascii_digit() && bytes[1] == b' ' {
        key.remove(1);
    }
    key
}

/// Mapping from normalized alias keys to canonical book ids.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, BookId>,
}

impl AliasTable {
    /// Build the table of built-in abbreviations.
    pub(crate) fn builtin() -> Self {
        let mut table = Self::default();
        for (alias, code) in DEFAULT_ALIASES {
            table.entries.insert(normalize_key(alias), BookId::new(code));
        }
        table
    }

    /// Insert an alias under its normalized key. Returns `false` if the key is empty.
    ///
    /// Target validation is the registry's job.
    pub(crate) fn insert(&mut self, alias: &str, id: BookId) -> bool {
        let key = normalize_key(alias);
        if key.is_empty() {
            return false;
        }
        self.entries.insert(key, id);
        true
    }

    /// Look up raw text (normalized first).
    pub fn get(&self, text: &str) -> Option<&BookId> {
        self.get_key(&normalize_key(text))
    }

    /// Look up an already-normalized key.
    pub(crate) fn get_key(&self, key: &str) -> Option<&BookId> {
        self.entries.get(key)
    }

    /// Iterate over every (key, id) pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BookId)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
