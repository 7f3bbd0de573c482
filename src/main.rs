//! `Lectio` command-line tool.
//!
//! Usage:
//!   `lectio parse <reference...>`
//!   `lectio format <range-json>`
//!   `lectio next <BOOK> <chapter>` / `lectio prev <BOOK> <chapter>`
//!   `lectio contains <range...> <chapter> <verse>`
//!   `lectio sort <ranges.json>`
//!   `lectio books`

use std::env;
use std::path::Path;

use anyhow::{bail, Context, Result};
use lectio::config::Config;
use lectio::{
    format_range, next_chapter, parse, prev_chapter, sort_canonical, BookId, NavigationStep,
    ParseError, Range, Registry,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage:
  lectio parse <reference...>
  lectio format <range-json>
  lectio next <BOOK> <chapter>
  lectio prev <BOOK> <chapter>
  lectio contains <range...> <chapter> <verse>
  lectio sort <ranges.json>
  lectio books";

fn main() -> Result<()> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = config.build_registry()?;
    let args: Vec<String> = env::args().skip(1).collect();

    let Some((command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };

    match command.as_str() {
        "parse" => cmd_parse(&registry, &config, &rest.join(" ")),
        "format" => cmd_format(&registry, &rest.join(" ")),
        "next" | "prev" => cmd_step(&registry, command == "next", rest),
        "contains" => cmd_contains(&registry, rest),
        "sort" => match rest {
            [path] => cmd_sort(&registry, Path::new(path)),
            _ => bail!("sort takes exactly one file\n\n{USAGE}"),
        },
        "books" => {
            for book in registry.books() {
                println!(
                    "{:<4} {:<16} {:>3}  {}",
                    book.id,
                    book.name,
                    book.chapter_count,
                    book.testament.name()
                );
            }
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        other => bail!("unknown command {other:?}\n\n{USAGE}"),
    }
}

fn cmd_parse(registry: &Registry, config: &Config, text: &str) -> Result<()> {
    match parse(registry, text) {
        Ok(parsed) => {
            println!("{parsed}");
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            Ok(())
        }
        Err(ParseError::UnknownBook(book)) => {
            bail!("{}", unknown_book_message(registry, &book, config.max_suggestions))
        }
        Err(e) => Err(e).context("couldn't understand reference"),
    }
}

fn unknown_book_message(registry: &Registry, book: &str, limit: usize) -> String {
    let suggestions: Vec<&str> = registry
        .suggest_books(book, limit)
        .into_iter()
        .map(|b| b.name.as_str())
        .collect();

    if suggestions.is_empty() {
        format!("couldn't understand reference: unknown book {book:?}")
    } else {
        format!(
            "couldn't understand reference: unknown book {book:?} (did you mean {}?)",
            suggestions.join(", ")
        )
    }
}

fn cmd_format(registry: &Registry, json: &str) -> Result<()> {
    let range: Range = serde_json::from_str(json)
        .context("expected a range object such as {\"book\":\"ROM\",...}")?;
    println!("{}", format_range(registry, &range));
    Ok(())
}

fn cmd_step(registry: &Registry, forward: bool, rest: &[String]) -> Result<()> {
    let (book, chapter) = step_args(rest)?;
    let step = if forward {
        next_chapter(registry, &book, chapter)
    } else {
        prev_chapter(registry, &book, chapter)
    };
    println!("{}", describe_step(registry, step.as_ref()));
    Ok(())
}

fn step_args(rest: &[String]) -> Result<(BookId, u32)> {
    let [book, chapter] = rest else {
        bail!("expected <BOOK> <chapter>\n\n{USAGE}");
    };
    Ok((BookId::new(book), number(chapter, "chapter")?))
}

fn describe_step(registry: &Registry, step: Option<&NavigationStep>) -> String {
    step.and_then(|s| registry.get(&s.book_id).map(|book| (book, s.chapter)))
        .map_or_else(|| "(none)".to_string(), |(book, chapter)| format!("{} {chapter}", book.name))
}

fn cmd_contains(registry: &Registry, rest: &[String]) -> Result<()> {
    let (range_text, chapter, verse) = contains_args(rest)?;
    let range = Range::parse(registry, &range_text).context("couldn't understand range")?;
    println!("{}", range.contains(chapter, verse));
    Ok(())
}

/// Split `<range...> <chapter> <verse>`; the range may span several words.
fn contains_args(rest: &[String]) -> Result<(String, u32, u32)> {
    let [range_words @ .., chapter, verse] = rest else {
        bail!("expected <range...> <chapter> <verse>\n\n{USAGE}");
    };
    if range_words.is_empty() {
        bail!("expected <range...> <chapter> <verse>\n\n{USAGE}");
    }
    Ok((range_words.join(" "), number(chapter, "chapter")?, number(verse, "verse")?))
}

fn number(text: &str, what: &str) -> Result<u32> {
    text.parse().with_context(|| format!("{what} {text:?} is not a number"))
}

fn cmd_sort(registry: &Registry, path: &Path) -> Result<()> {
    let content = fs_err::read_to_string(path)?;
    let ranges: Vec<Range> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of ranges", path.display()))?;

    for line in sorted_lines(registry, ranges) {
        println!("{line}");
    }
    Ok(())
}

/// Ranges in Bible order as display text, dropping ones with unknown books.
fn sorted_lines(registry: &Registry, mut ranges: Vec<Range>) -> Vec<String> {
    sort_canonical(registry, &mut ranges);
    ranges
        .iter()
        .filter_map(|range| {
            let text = format_range(registry, range);
            if text.is_empty() {
                tracing::warn!("Skipping range with unknown book {}", range.book);
                return None;
            }
            Some(text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_contains_args_joins_range_words() {
        let words = args(&["1", "Cor", "13:4-7", "13", "5"]);
        let (range, chapter, verse) = contains_args(&words).unwrap();
        assert_eq!(range, "1 Cor 13:4-7");
        assert_eq!((chapter, verse), (13, 5));
    }

    #[test]
    fn test_contains_args_rejects_short_or_bad_input() {
        assert!(contains_args(&args(&["13", "5"])).is_err());
        assert!(contains_args(&args(&["Rom", "1:1-7", "one", "2"])).is_err());
        assert!(contains_args(&[]).is_err());
    }

    #[test]
    fn test_step_args() {
        let (book, chapter) = step_args(&args(&["rom", "16"])).unwrap();
        assert_eq!(book, BookId::new("ROM"));
        assert_eq!(chapter, 16);
        assert!(step_args(&args(&["rom"])).is_err());
        assert!(step_args(&args(&["rom", "x"])).is_err());
    }

    #[test]
    fn test_describe_step() {
        let registry = Registry::standard();
        let step = next_chapter(&registry, &BookId::new("ROM"), 16);
        assert_eq!(describe_step(&registry, step.as_ref()), "1 Corinthians 1");
        assert_eq!(describe_step(&registry, None), "(none)");
    }

    #[test]
    fn test_sorted_lines_skips_unknown_books() {
        let registry = Registry::standard();
        let ranges = vec![
            Range::new("REV", 1, 1, 1, 3),
            Range::new("TOB", 1, 1, 1, 1),
            Range::new("GEN", 1, 1, 2, 3),
        ];
        assert_eq!(sorted_lines(&registry, ranges), ["Genesis 1:1-2:3", "Revelation 1:1-3"]);
    }

    #[test]
    fn test_unknown_book_message_offers_suggestions() {
        let registry = Registry::standard();
        let message = unknown_book_message(&registry, "Corinth", 2);
        assert!(message.contains("did you mean"), "{message}");
        assert!(message.contains("1 Corinthians"), "{message}");
        assert!(message.contains("2 Corinthians"), "{message}");

        let message = unknown_book_message(&registry, "qqqqqq", 3);
        assert!(!message.contains("did you mean"), "{message}");
    }
}
