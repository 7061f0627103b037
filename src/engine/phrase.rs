//! Phrase rules: vetoes that look at neighbouring words.
//!
//! Word-level decisions are made first; these rules then walk the word tokens
//! left to right and may revert some replacements so that a phrase does not
//! turn into a wall of smurfs:
//!
//! ```text
//! verb-some-noun   "fix some bugs"      -> "smurf some bugs" | "fix some smurfs"
//! connector        "bugs and features"  -> "smurfs and features" | "bugs and smurfs"
//!                  "bugs, features"     -> "smurfs, features" | "bugs, smurfs"
//! ```
//!
//! Which side keeps its replacement is a fair coin from the substitutor's RNG.
//! Words matched by a rule are consumed; scanning resumes after them.

use super::metrics::{PhraseRule, Reason};
use super::substitutor::Outcome;
use crate::{CategorySet, Lexicon, Token};
use rand::Rng;

pub(crate) fn apply<R: Rng>(
    words: &[Token<'_>],
    outcomes: &mut [Outcome],
    lexicon: &Lexicon,
    rng: &mut R,
    debug: bool,
) {
    let mut i = 0;
    while i < words.len() {
        if is_verb_some_noun(words, lexicon, i) {
            let keep_verb = rng.gen_bool(0.5);
            suppress(&mut outcomes[i + 1], PhraseRule::VerbSomeNoun);
            suppress(&mut outcomes[if keep_verb { i + 2 } else { i }], PhraseRule::VerbSomeNoun);
            if debug {
                eprintln!(
                    "[phrase] verb-some-noun '{} {} {}' keeps {}",
                    words[i].text,
                    words[i + 1].text,
                    words[i + 2].text,
                    if keep_verb { "verb" } else { "noun" }
                );
            }
            i += 3;
            continue;
        }

        if let Some(j) = connected_to(words, i) {
            if outcomes[i].replacement.is_some() && outcomes[j].replacement.is_some() {
                let keep_first = rng.gen_bool(0.5);
                for between in i + 1..j {
                    suppress(&mut outcomes[between], PhraseRule::Connector);
                }
                suppress(&mut outcomes[if keep_first { j } else { i }], PhraseRule::Connector);
                if debug {
                    eprintln!(
                        "[phrase] connector '{}' / '{}' keeps {}",
                        words[i].text,
                        words[j].text,
                        if keep_first { "first" } else { "second" }
                    );
                }
                i = j + 1;
                continue;
            }
        }

        i += 1;
    }
}

fn is_verb_some_noun(words: &[Token<'_>], lexicon: &Lexicon, i: usize) -> bool {
    i + 2 < words.len()
        && words[i + 1].text.eq_ignore_ascii_case("some")
        && lexicon.categories(words[i].text).contains(CategorySet::VERB)
        && lexicon.categories(words[i + 2].text).contains(CategorySet::NOUN)
}

/// Index of the word joined to `words[i]` by a connector, if any.
fn connected_to(words: &[Token<'_>], i: usize) -> Option<usize> {
    if i + 2 < words.len() && words[i + 1].text.eq_ignore_ascii_case("and") {
        return Some(i + 2);
    }
    if i + 1 < words.len() && words[i].trailing.trim() == "," {
        return Some(i + 1);
    }
    None
}

fn suppress(outcome: &mut Outcome, rule: PhraseRule) {
    if outcome.replacement.take().is_some() {
        outcome.reason = Reason::Suppressed { rule };
    }
}
