//! Inflection-aware word substitution.
//!
//! `smurfify` replaces verbs, nouns, adjectives and exclamations found in a
//! static [`Lexicon`] with inflected forms of "smurf", mirroring the shape of
//! the word it replaces:
//!
//! ```
//! use smurfify::smurfify;
//!
//! assert_eq!(smurfify("Damn, the builds are BROKEN!"), "Smurf, the smurfs are SMURFY!");
//! ```
//!
//! For anything beyond the built-in lexicon and default [`Options`], build a
//! [`Substitutor`] explicitly. It borrows an immutable lexicon and owns its
//! random source, so several configurations can coexist.

extern crate self as smurfify;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod lexicon;

pub use api::{Options, SmurfResult, SmurfResultVerbose, smurfify, smurfify_verbose_with, smurfify_with};
pub use engine::{
    CasePattern, Decision, LineDetails, PhraseRule, Reason, ReaderLines, SmurfLines, Substitutor, chaos_form,
    inflect, tokenize,
};
pub use error::{Error, Result};
pub use lexicon::{FormKind, LexMatch, Lexicon, LexiconBuilder, Variant, WordEntry};

// --- Word categories --------------------------------------------------------

/// Grammatical role of a lexicon entry.
///
/// Variants are declared in resolution priority order: when a surface form
/// belongs to several categories, the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Verb,
    Noun,
    Adjective,
    Exclaim,
}

impl Category {
    /// All categories, highest priority first.
    pub const ALL: [Category; 4] = [Category::Verb, Category::Noun, Category::Adjective, Category::Exclaim];

    /// Section name used by the lexicon data format.
    pub fn name(self) -> &'static str {
        match self {
            Category::Verb => "verb",
            Category::Noun => "noun",
            Category::Adjective => "adjective",
            Category::Exclaim => "exclaim",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    pub(crate) fn flag(self) -> CategorySet {
        match self {
            Category::Verb => CategorySet::VERB,
            Category::Noun => CategorySet::NOUN,
            Category::Adjective => CategorySet::ADJECTIVE,
            Category::Exclaim => CategorySet::EXCLAIM,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Every category a surface form belongs to, regardless of priority.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategorySet: u8 {
        const VERB      = 1 << 0;
        const NOUN      = 1 << 1;
        const ADJECTIVE = 1 << 2;
        const EXCLAIM   = 1 << 3;
    }
}

/// Grammatical shape a replacement mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Base,
    Plural,
    Past,
    Gerund,
    Comparative,
    Superlative,
}

impl Shape {
    /// Tag used for explicit variants in the lexicon data format.
    pub fn tag(self) -> &'static str {
        match self {
            Shape::Base => "base",
            Shape::Plural => "plural",
            Shape::Past => "past",
            Shape::Gerund => "gerund",
            Shape::Comparative => "comparative",
            Shape::Superlative => "superlative",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Shape> {
        [Shape::Base, Shape::Plural, Shape::Past, Shape::Gerund, Shape::Comparative, Shape::Superlative]
            .into_iter()
            .find(|s| s.tag() == tag)
    }
}

// --- Tokens -----------------------------------------------------------------

/// Byte span into the original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// A word extracted from a line: a maximal run of letters, optionally joined
/// by word-internal apostrophes (`you're`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Original surface form.
    pub text: &'a str,
    pub range: Range,
    /// Separator text that directly follows the word (possibly empty).
    pub trailing: &'a str,
}

impl<'a> Token<'a> {
    /// A free-standing token, mostly useful for calling the inflector directly.
    pub fn new(text: &'a str) -> Self {
        Token { text, range: Range { start: 0, end: text.len() }, trailing: "" }
    }

    /// Same token with the given trailing separator.
    pub fn followed_by(self, trailing: &'a str) -> Self {
        Token { trailing, ..self }
    }

    /// True when the word consists of letters only.
    pub fn is_plain(&self) -> bool {
        self.text.chars().all(char::is_alphabetic)
    }

    /// True when the separator after the word starts with sentence punctuation.
    pub fn has_trailing_punct(&self) -> bool {
        matches!(self.trailing.chars().next(), Some('.' | ',' | '!' | '?' | ';' | ':' | '…'))
    }
}

/// One piece of a tokenized line. Concatenating every piece's text restores
/// the line exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Word(Token<'a>),
    Separator(&'a str),
}

impl<'a> Piece<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Piece::Word(token) => token.text,
            Piece::Separator(text) => *text,
        }
    }
}
