//! Regular English inflections used to pre-index lexicon entries.
//!
//! Generation is deliberately generous: where a spelling rule is ambiguous
//! (consonant doubling in "open" vs "stop") both spellings are produced.
//! A spurious form only ever maps back to the word it came from.

use crate::{Category, Shape};

/// All regular surface forms of `word` for its category, each with the shape
/// it spells (the canonical form itself excluded by the caller).
pub(super) fn derive(word: &str, category: Category) -> Vec<(String, Shape)> {
    if !word.chars().all(|c| c.is_ascii_alphabetic()) || word.len() < 2 {
        return Vec::new();
    }

    let shaped = |forms: Vec<String>, shape: Shape| forms.into_iter().map(move |f| (f, shape));
    let mut out = Vec::new();
    match category {
        Category::Verb => {
            out.extend(shaped(plural(word), Shape::Plural));
            out.extend(shaped(suffixed(word, "ed"), Shape::Past));
            out.extend(shaped(suffixed(word, "ing"), Shape::Gerund));
        }
        Category::Noun => out.extend(shaped(plural(word), Shape::Plural)),
        Category::Adjective => {
            out.extend(shaped(suffixed(word, "er"), Shape::Comparative));
            out.extend(shaped(suffixed(word, "est"), Shape::Superlative));
        }
        Category::Exclaim => {}
    }
    out.dedup();
    out
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// "-s" / "-es" / "-ies" forms.
fn plural(word: &str) -> Vec<String> {
    let b = word.as_bytes();
    let last = b[b.len() - 1];
    let prev = b[b.len() - 2];

    if last == b'y' && !is_vowel(prev) {
        return vec![format!("{}ies", &word[..word.len() - 1])];
    }
    if matches!(last, b's' | b'x' | b'z') || word.ends_with("ch") || word.ends_with("sh") {
        return vec![format!("{word}es")];
    }
    if last == b'o' {
        return vec![format!("{word}es"), format!("{word}s")];
    }
    vec![format!("{word}s")]
}

/// Consonant-vowel-consonant ending whose last consonant may double
/// ("stop" -> "stopped").
fn doubles(word: &str) -> bool {
    let b = word.as_bytes();
    if b.len() < 3 {
        return false;
    }
    let (c1, v, c2) = (b[b.len() - 3], b[b.len() - 2], b[b.len() - 1]);
    !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, b'w' | b'x' | b'y')
}

/// Attach a vowel-initial suffix ("ed", "ing", "er", "est").
fn suffixed(word: &str, suffix: &str) -> Vec<String> {
    let b = word.as_bytes();
    let last = b[b.len() - 1];
    let prev = b[b.len() - 2];
    let stem = &word[..word.len() - 1];

    if suffix == "ing" {
        if word.ends_with("ie") {
            return vec![format!("{}ying", &word[..word.len() - 2])];
        }
        if last == b'e' && !matches!(prev, b'e' | b'o' | b'y') {
            return vec![format!("{stem}ing")];
        }
        if doubles(word) {
            return vec![format!("{word}{}ing", last as char), format!("{word}ing")];
        }
        return vec![format!("{word}ing")];
    }

    // "ed", "er", "est" all start with 'e'.
    if last == b'e' {
        return vec![format!("{word}{}", &suffix[1..])];
    }
    if last == b'y' && !is_vowel(prev) {
        return vec![format!("{stem}i{suffix}")];
    }
    if doubles(word) {
        return vec![format!("{word}{}{suffix}", last as char), format!("{word}{suffix}")];
    }
    vec![format!("{word}{suffix}")]
}
