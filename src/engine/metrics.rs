//! Per-line decision traces.
//!
//! [`Substitutor::smurf_line`](crate::Substitutor::smurf_line) keeps only the
//! output text. The verbose path additionally returns a [`LineDetails`] with
//! one [`Decision`] per word token, used by the CLI `--explain` report and by
//! tests that need to see *why* a word was (not) replaced.

use crate::{Category, Shape};
use std::time::Duration;

/// Phrase-level rule that can veto a word substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseRule {
    /// "fix some bugs": only the verb or the noun is replaced.
    VerbSomeNoun,
    /// "bugs and features": two replacements joined by "and" or "," keep only one.
    Connector,
}

impl PhraseRule {
    pub fn name(self) -> &'static str {
        match self {
            PhraseRule::VerbSomeNoun => "verb-some-noun",
            PhraseRule::Connector => "connector",
        }
    }
}

/// Why a word token ended up the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Matched the lexicon and was inflected.
    Lexicon { category: Category, shape: Shape },
    /// Unknown word picked by chaos mode.
    Chaos { shape: Shape },
    /// Unknown word left alone.
    Unmatched,
    /// Would have been replaced, but a phrase rule kept the original.
    Suppressed { rule: PhraseRule },
}

/// Outcome for one word token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Start byte index of the word in the line.
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
    pub surface: String,
    /// `None` when the word passes through unchanged.
    pub replacement: Option<String>,
    pub reason: Reason,
}

/// Trace of one processed line.
#[derive(Debug, Clone, Default)]
pub struct LineDetails {
    /// Elapsed time for tokenizing, substituting and reassembling the line.
    pub total: Duration,
    pub decisions: Vec<Decision>,
}

impl LineDetails {
    /// Number of word tokens in the line.
    pub fn words(&self) -> usize {
        self.decisions.len()
    }

    pub fn substituted(&self) -> usize {
        self.decisions.iter().filter(|d| d.replacement.is_some()).count()
    }

    pub fn from_lexicon(&self) -> usize {
        self.decisions.iter().filter(|d| matches!(d.reason, Reason::Lexicon { .. })).count()
    }

    pub fn from_chaos(&self) -> usize {
        self.decisions.iter().filter(|d| matches!(d.reason, Reason::Chaos { .. })).count()
    }

    pub fn suppressed(&self) -> usize {
        self.decisions.iter().filter(|d| matches!(d.reason, Reason::Suppressed { .. })).count()
    }
}
