//! Lexicon text format.
//!
//! ```text
//! # comment
//! [verb]
//! fix use try run
//! write = wrote:past written:past
//! [noun]
//! child = children:plural
//! ```
//!
//! - `#` starts a comment that runs to the end of the line.
//! - `[name]` opens a section; `name` is a category (`verb`, `noun`,
//!   `adjective`, `exclaim`).
//! - A plain line lists canonical words separated by whitespace.
//! - A line containing `=` declares one word and its irregular variants. A
//!   variant may carry a `:shape` tag (`plural`, `past`, `gerund`,
//!   `comparative`, `superlative`).
//!
//! Words are case-folded to lowercase. Only letters and word-internal
//! apostrophes are accepted.

use crate::{Category, Error, Result, Shape, WordEntry};

pub(super) fn parse_entries(text: &str) -> Result<Vec<WordEntry>> {
    let mut entries = Vec::new();
    let mut section: Option<Category> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('[') {
            let name = name
                .strip_suffix(']')
                .ok_or_else(|| Error::lexicon(line_no, format!("unterminated section header '{line}'")))?
                .trim()
                .to_lowercase();
            section = Some(
                Category::from_name(&name)
                    .ok_or_else(|| Error::lexicon(line_no, format!("unknown section '{name}'")))?,
            );
            continue;
        }

        let category = section.ok_or_else(|| Error::lexicon(line_no, "word listed before any section header"))?;

        match line.split_once('=') {
            Some((head, tail)) => {
                let canonical = head.trim();
                if canonical.split_whitespace().count() != 1 {
                    return Err(Error::lexicon(line_no, format!("expected one word before '=', got '{canonical}'")));
                }
                check_word(canonical, line_no)?;

                let mut entry = WordEntry::new(canonical, category);
                for item in tail.split_whitespace() {
                    let (form, shape) = parse_variant(item, line_no)?;
                    entry = entry.with_variant(form, shape);
                }
                entries.push(entry);
            }
            None => {
                for word in line.split_whitespace() {
                    check_word(word, line_no)?;
                    entries.push(WordEntry::new(word, category));
                }
            }
        }
    }

    Ok(entries)
}

fn parse_variant(item: &str, line_no: usize) -> Result<(&str, Option<Shape>)> {
    let (form, shape) = match item.split_once(':') {
        Some((form, tag)) => {
            let shape = Shape::from_tag(&tag.to_lowercase())
                .ok_or_else(|| Error::lexicon(line_no, format!("unknown shape tag '{tag}' on '{form}'")))?;
            (form, Some(shape))
        }
        None => (item, None),
    };
    check_word(form, line_no)?;
    Ok((form, shape))
}

fn check_word(word: &str, line_no: usize) -> Result<()> {
    if !regex!(r"^\p{L}+(?:['’]\p{L}+)*$").is_match(word) {
        return Err(Error::lexicon(line_no, format!("invalid word '{word}'")));
    }
    Ok(())
}
