//! Chaos mode: random substitution of words the lexicon does not know.

use super::inflect::{CasePattern, looks_plural, verb_tense};
use crate::{Options, Shape, Token};
use rand::Rng;

/// Roll the dice for an unmatched token. Only letter-only words are eligible,
/// and no randomness is consumed when chaos is off or the word is ineligible.
pub(crate) fn roll<R: Rng>(rng: &mut R, options: &Options, token: &Token<'_>) -> bool {
    options.chaos_enabled && token.is_plain() && rng.gen_bool(options.chaos_probability)
}

/// Shape of an unknown word, read from its suffix alone.
pub(crate) fn chaos_shape(lower: &str) -> Shape {
    if looks_plural(lower) { Shape::Plural } else { verb_tense(lower) }
}

/// Generic smurf form for a word with no lexicon entry: the same suffix
/// rules as for verbs, case mirrored.
pub fn chaos_form(token: &Token<'_>) -> String {
    let base = match chaos_shape(&token.text.to_lowercase()) {
        Shape::Plural => "smurfs",
        Shape::Past => "smurfed",
        Shape::Gerund => "smurfing",
        _ => "smurf",
    };
    CasePattern::of(token.text).apply(base)
}
