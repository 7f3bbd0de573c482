//! `Lectio` - scripture reference engine.
//!
//! Parses, validates, formats, orders and steps through Bible references for
//! note and annotation tooling. Text and storage records go in, plain values go
//! out; nothing here does I/O except [`config`].

pub mod bible;
pub mod config;
pub mod error;
pub mod types;

pub use bible::{
    compare, contains, format_range, format_reference, next_chapter, parse, parse_many,
    prev_chapter, sort_canonical, BookEntry, Located, NavigationStep, ParsedReference, Range,
    Reference, Registry,
};
pub use error::{Error, ParseError, RegistryError, Result};
pub use types::{BookId, Testament};
