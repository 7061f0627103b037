//! Line substitution.
//!
//! A [`Substitutor`] borrows an immutable [`Lexicon`] and owns a random
//! source. Processing a line is a straight pipeline with no backtracking:
//!
//! ```text
//! line ── tokenize ──> pieces (word | separator)
//!                        │
//!            per word:   ├─ lexicon hit  -> inflect        (inflect.rs)
//!                        ├─ chaos roll   -> chaos_form     (chaos.rs)
//!                        └─ otherwise    -> unchanged
//!                        │
//!         phrase rules ──┤  optional vetoes                (phrase.rs)
//!                        │
//!              reassemble: separators copied verbatim
//! ```
//!
//! Randomness is drawn in a fixed order (chaos rolls left to right, then
//! phrase-rule coins), so a seeded substitutor is fully deterministic.
//!
//! ## Debugging
//!
//! Setting `SMURFIFY_DEBUG=1` prints one trace line per decision to stderr.

use super::chaos::{self, chaos_form, chaos_shape};
use super::inflect::inflect_shaped;
use super::metrics::{Decision, LineDetails, Reason};
use super::phrase;
use super::tokenizer::tokenize;
use crate::{Lexicon, Options, Piece, Result, Token};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead};
use std::time::Instant;

/// Word-level result before reassembly.
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    pub replacement: Option<String>,
    pub reason: Reason,
}

/// Substitution engine for one worker.
///
/// The lexicon is shared read-only; the RNG is owned, so give each thread its
/// own `Substitutor` (they can all borrow the same lexicon).
#[derive(Debug)]
pub struct Substitutor<'l, R = ChaCha8Rng> {
    lexicon: &'l Lexicon,
    options: Options,
    rng: R,
    debug: bool,
}

impl<'l> Substitutor<'l, ChaCha8Rng> {
    /// Validate `options` and seed the RNG from `options.rng_seed`, or from
    /// OS entropy when no seed is given.
    pub fn new(lexicon: &'l Lexicon, options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self::new_unchecked(lexicon, options))
    }

    pub(crate) fn new_unchecked(lexicon: &'l Lexicon, options: Options) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Substitutor { lexicon, options, rng, debug: debug_enabled() }
    }
}

impl<'l, R: Rng> Substitutor<'l, R> {
    /// Use a caller-supplied random source. `options.rng_seed` is ignored.
    pub fn with_rng(lexicon: &'l Lexicon, options: Options, rng: R) -> Result<Self> {
        options.validate()?;
        Ok(Substitutor { lexicon, options, rng, debug: debug_enabled() })
    }

    pub fn lexicon(&self) -> &'l Lexicon {
        self.lexicon
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replacement for a single token, ignoring phrase rules. `None` means
    /// the token passes through unchanged.
    pub fn smurf_token(&mut self, token: &Token<'_>) -> Option<String> {
        self.decide(token).replacement
    }

    /// Substitute every word of `line`; separators are copied verbatim.
    pub fn smurf_line(&mut self, line: &str) -> String {
        self.process(line).0
    }

    /// Like [`smurf_line`](Self::smurf_line), also returning a per-word trace.
    pub fn smurf_line_verbose(&mut self, line: &str) -> (String, LineDetails) {
        let started = Instant::now();
        let (out, words, outcomes) = self.process(line);

        let decisions = words
            .iter()
            .zip(outcomes)
            .map(|(token, outcome)| Decision {
                start: token.range.start,
                end: token.range.end,
                surface: token.text.to_string(),
                replacement: outcome.replacement,
                reason: outcome.reason,
            })
            .collect();

        (out, LineDetails { total: started.elapsed(), decisions })
    }

    /// Lazily substitute a sequence of lines.
    pub fn lines<I>(&mut self, lines: I) -> SmurfLines<'_, 'l, R, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        SmurfLines { substitutor: self, lines: lines.into_iter() }
    }

    /// Lazily substitute the lines of a reader. Line terminators are
    /// stripped, as with [`BufRead::lines`].
    pub fn reader<B: BufRead>(&mut self, reader: B) -> ReaderLines<'_, 'l, R, B> {
        ReaderLines { substitutor: self, lines: reader.lines() }
    }

    fn process<'a>(&mut self, line: &'a str) -> (String, Vec<Token<'a>>, Vec<Outcome>) {
        let pieces = tokenize(line);
        let words: Vec<Token<'a>> = pieces
            .iter()
            .filter_map(|piece| match piece {
                Piece::Word(token) => Some(*token),
                Piece::Separator(_) => None,
            })
            .collect();

        let mut outcomes: Vec<Outcome> = words.iter().map(|token| self.decide(token)).collect();

        if self.options.phrase_rules {
            phrase::apply(&words, &mut outcomes, self.lexicon, &mut self.rng, self.debug);
        }

        let mut out = String::with_capacity(line.len() + 8 * outcomes.len());
        let mut next_word = 0;
        for piece in &pieces {
            match piece {
                Piece::Separator(text) => out.push_str(text),
                Piece::Word(token) => {
                    out.push_str(outcomes[next_word].replacement.as_deref().unwrap_or(token.text));
                    next_word += 1;
                }
            }
        }

        (out, words, outcomes)
    }

    fn decide(&mut self, token: &Token<'_>) -> Outcome {
        if let Some(matched) = self.lexicon.lookup(token.text) {
            let (shape, replacement) = inflect_shaped(token, &matched);
            if self.debug {
                eprintln!(
                    "[lookup] '{}' -> {} '{}' ({}) => '{}'",
                    token.text,
                    matched.category(),
                    matched.entry.canonical,
                    shape.tag(),
                    replacement
                );
            }
            return Outcome {
                replacement: Some(replacement),
                reason: Reason::Lexicon { category: matched.category(), shape },
            };
        }

        if chaos::roll(&mut self.rng, &self.options, token) {
            let replacement = chaos_form(token);
            if self.debug {
                eprintln!("[chaos] '{}' => '{}'", token.text, replacement);
            }
            return Outcome {
                replacement: Some(replacement),
                reason: Reason::Chaos { shape: chaos_shape(&token.text.to_lowercase()) },
            };
        }

        Outcome { replacement: None, reason: Reason::Unmatched }
    }
}

fn debug_enabled() -> bool {
    std::env::var_os("SMURFIFY_DEBUG").is_some()
}

/// Iterator returned by [`Substitutor::lines`].
#[derive(Debug)]
pub struct SmurfLines<'s, 'l, R, I> {
    substitutor: &'s mut Substitutor<'l, R>,
    lines: I,
}

impl<R, I> Iterator for SmurfLines<'_, '_, R, I>
where
    R: Rng,
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = self.lines.next()?;
        Some(self.substitutor.smurf_line(line.as_ref()))
    }
}

/// Iterator returned by [`Substitutor::reader`].
#[derive(Debug)]
pub struct ReaderLines<'s, 'l, R, B> {
    substitutor: &'s mut Substitutor<'l, R>,
    lines: io::Lines<B>,
}

impl<R: Rng, B: BufRead> Iterator for ReaderLines<'_, '_, R, B> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<io::Result<String>> {
        let line = self.lines.next()?;
        Some(line.map(|line| self.substitutor.smurf_line(&line)))
    }
}
