//! Scripture reference engine.
//!
//! - [`registry`]: the 66 books in canonical order and their aliases.
//! - [`reference`]: parsing free text into a [`Reference`].
//! - [`format`]: back to the shortest display text.
//! - [`range`]: stored ranges, containment and Bible-order sorting.
//! - [`navigation`]: stepping chapter by chapter across books.
//!
//! Everything here is pure; build a [`Registry`] once and pass it by reference.

pub mod aliases;
pub mod format;
pub mod navigation;
pub mod range;
pub mod reference;
pub mod registry;

pub use aliases::AliasTable;
pub use format::{format_range, format_reference};
pub use navigation::{next_chapter, prev_chapter, NavigationStep};
pub use range::{compare, contains, sort_canonical, Located, Range};
pub use reference::{parse, parse_many, ParsedReference, Reference};
pub use registry::{BookEntry, Registry};
