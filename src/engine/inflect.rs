//! Inflection: shaping a replacement after the word it replaces.
//!
//! Replacement selection runs in a fixed order:
//!
//! ```text
//! 1. plural       VERB|NOUN ending in "s" (not "ss")     -> smurfs
//! 2. tense        VERB ending in "ed" / "ing"            -> smurfed / smurfing
//! 3. degree       ADJECTIVE ending in "er" / "est"       -> smurfier / smurfiest
//!                 other ADJECTIVE                        -> smurfy
//! 4. exclamation  EXCLAIM                                -> smurf! (the '!' yields
//!                                                           to punctuation already
//!                                                           following the word)
//! 5. case         mirror ALL-CAPS / Title / lower onto the result
//! ```
//!
//! Shape is read from the token's own suffix, so "need" reads as past and
//! "sing" as a gerund. Only a listed irregular variant with a shape tag
//! overrides the suffix ("children" -> plural, "ran" -> past).

use crate::{Category, FormKind, LexMatch, Shape, Token};

/// Case pattern of a surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// Two or more letters, every cased letter uppercase ("DAMN").
    Upper,
    /// First letter uppercase ("Damn", "McFly", "I").
    Title,
    /// Anything else ("damn", "iPhone").
    Lower,
}

impl CasePattern {
    pub fn of(surface: &str) -> CasePattern {
        let letters = surface.chars().filter(|c| c.is_alphabetic()).count();
        let mut cased = surface.chars().filter(|c| c.is_uppercase() || c.is_lowercase()).peekable();

        if letters > 1 && cased.peek().is_some() && cased.all(char::is_uppercase) {
            return CasePattern::Upper;
        }
        match surface.chars().next() {
            Some(c) if c.is_uppercase() => CasePattern::Title,
            _ => CasePattern::Lower,
        }
    }

    /// Re-case a lowercase replacement.
    pub fn apply(self, replacement: &str) -> String {
        match self {
            CasePattern::Upper => replacement.to_uppercase(),
            CasePattern::Title => {
                let mut chars = replacement.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            CasePattern::Lower => replacement.to_string(),
        }
    }
}

/// Plural reading of a lowercase surface form.
pub(crate) fn looks_plural(lower: &str) -> bool {
    lower.ends_with('s') && !lower.ends_with("ss")
}

/// Shape of a token matched to a lexicon entry.
fn shape_of(lower: &str, matched: &LexMatch<'_>) -> Shape {
    if let FormKind::Listed(Some(shape)) = matched.form {
        return shape;
    }

    match matched.category() {
        Category::Verb | Category::Noun if looks_plural(lower) => Shape::Plural,
        Category::Verb => verb_tense(lower),
        Category::Adjective if lower.ends_with("est") => Shape::Superlative,
        Category::Adjective if lower.ends_with("er") => Shape::Comparative,
        _ => Shape::Base,
    }
}

/// Tense reading used for verbs and for chaos-mode words.
pub(crate) fn verb_tense(lower: &str) -> Shape {
    if lower.ends_with("ed") {
        Shape::Past
    } else if lower.ends_with("ing") {
        Shape::Gerund
    } else {
        Shape::Base
    }
}

/// Lowercase replacement word for a category/shape pair.
pub(crate) fn stem(category: Category, shape: Shape) -> &'static str {
    match (category, shape) {
        (Category::Adjective, Shape::Comparative) => "smurfier",
        (Category::Adjective, Shape::Superlative) => "smurfiest",
        (Category::Adjective, _) => "smurfy",
        (Category::Exclaim, _) => "smurf!",
        (_, Shape::Plural) => "smurfs",
        (_, Shape::Past) => "smurfed",
        (_, Shape::Gerund) => "smurfing",
        _ => "smurf",
    }
}

/// Replacement for `token`, which the lexicon resolved to `matched`.
pub fn inflect(token: &Token<'_>, matched: &LexMatch<'_>) -> String {
    inflect_shaped(token, matched).1
}

/// Like [`inflect`], also returning the shape the replacement mirrors.
pub(crate) fn inflect_shaped(token: &Token<'_>, matched: &LexMatch<'_>) -> (Shape, String) {
    let shape = shape_of(&token.text.to_lowercase(), matched);
    let category = matched.category();
    let mut base = stem(category, shape);

    if category == Category::Exclaim && token.has_trailing_punct() {
        base = "smurf";
    }

    (shape, CasePattern::of(token.text).apply(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lexicon, WordEntry};

    fn lexicon() -> Lexicon {
        Lexicon::builder()
            .words(Category::Verb, &["damn", "jump", "need", "sing", "help"])
            .words(Category::Noun, &["torpedo", "windows", "class", "hope", "help"])
            .words(Category::Adjective, &["only", "smart", "clever"])
            .words(Category::Exclaim, &["wow", "damn", "oops"])
            .entry(WordEntry::new("child", Category::Noun).with_variant("children", Some(Shape::Plural)))
            .entry(WordEntry::new("run", Category::Verb).with_variant("ran", Some(Shape::Past)))
            .build()
    }

    fn smurf(lex: &Lexicon, word: &str) -> String {
        smurf_before(lex, word, "")
    }

    fn smurf_before(lex: &Lexicon, word: &str, trailing: &str) -> String {
        let token = Token::new(word).followed_by(trailing);
        let matched = lex.lookup(word).unwrap_or_else(|| panic!("'{word}' not in fixture lexicon"));
        inflect(&token, &matched)
    }

    #[test]
    fn capitalization_is_mirrored() {
        let lex = lexicon();
        assert_eq!(smurf(&lex, "DAMN"), "SMURF");
        assert_eq!(smurf(&lex, "Damn"), "Smurf");
        assert_eq!(smurf(&lex, "damn"), "smurf");
        assert_eq!(smurf(&lex, "JUMPING"), "SMURFING");
        assert_eq!(smurf(&lex, "Only"), "Smurfy");
    }

    #[test]
    fn case_patterns() {
        assert_eq!(CasePattern::of("DAMN"), CasePattern::Upper);
        assert_eq!(CasePattern::of("Damn"), CasePattern::Title);
        assert_eq!(CasePattern::of("McFly"), CasePattern::Title);
        assert_eq!(CasePattern::of("I"), CasePattern::Title);
        assert_eq!(CasePattern::of("damn"), CasePattern::Lower);
        assert_eq!(CasePattern::of("iPhone"), CasePattern::Lower);
        assert_eq!(CasePattern::of("DON'T"), CasePattern::Upper);
        assert_eq!(CasePattern::Title.apply("smurf!"), "Smurf!");
        assert_eq!(CasePattern::Upper.apply("smurfy"), "SMURFY");
    }

    #[test]
    fn plurals() {
        let lex = lexicon();
        assert_eq!(smurf(&lex, "torpedoes"), "smurfs");
        assert_eq!(smurf(&lex, "torpedos"), "smurfs");
        assert_eq!(smurf(&lex, "torpedo"), "smurf");
        assert_eq!(smurf(&lex, "Windows"), "Smurfs");
        assert_eq!(smurf(&lex, "jumps"), "smurfs");
        assert_eq!(smurf(&lex, "children"), "smurfs");
    }

    #[test]
    fn double_s_is_not_plural() {
        let lex = lexicon();
        assert_eq!(smurf(&lex, "class"), "smurf");
        assert_eq!(smurf(&lex, "classes"), "smurfs");
    }

    #[test]
    fn tenses() {
        let lex = lexicon();
        assert_eq!(smurf(&lex, "jumped"), "smurfed");
        assert_eq!(smurf(&lex, "jumping"), "smurfing");
        assert_eq!(smurf(&lex, "jump"), "smurf");
        assert_eq!(smurf(&lex, "Ran"), "Smurfed");
    }

    #[test]
    fn suffix_decides_even_for_canonical_words() {
        let lex = lexicon();
        assert_eq!(smurf(&lex, "need"), "smurfed");
        assert_eq!(smurf(&lex, "needed"), "smurfed");
        assert_eq!(smurf(&lex, "sing"), "smurfing");
        assert_eq!(smurf(&lex, "singing"), "smurfing");
        assert_eq!(smurf(&lex, "clever"), "smurfier");
        assert_eq!(smurf(&lex, "cleverest"), "smurfiest");
    }

    #[test]
    fn inflect_shaped_reports_the_mirrored_shape() {
        let lex = lexicon();
        let shaped = |word: &str| inflect_shaped(&Token::new(word), &lex.lookup(word).unwrap());
        assert_eq!(shaped("Ran"), (Shape::Past, "Smurfed".to_string()));
        assert_eq!(shaped("need"), (Shape::Past, "smurfed".to_string()));
        assert_eq!(shaped("children"), (Shape::Plural, "smurfs".to_string()));
        assert_eq!(shaped("wow"), (Shape::Base, "smurf!".to_string()));
    }

    #[test]
    fn adjectives() {
        let lex = lexicon();
        assert_eq!(smurf(&lex, "only"), "smurfy");
        assert_eq!(smurf(&lex, "smart"), "smurfy");
        assert_eq!(smurf(&lex, "smarter"), "smurfier");
        assert_eq!(smurf(&lex, "Smartest"), "Smurfiest");
    }

    #[test]
    fn exclamations_keep_original_punctuation() {
        let lex = lexicon();
        assert_eq!(smurf(&lex, "wow"), "smurf!");
        assert_eq!(smurf(&lex, "Wow"), "Smurf!");
        assert_eq!(smurf(&lex, "WOW"), "SMURF!");
        assert_eq!(smurf_before(&lex, "Wow", "!"), "Smurf");
        assert_eq!(smurf_before(&lex, "Wow", ", "), "Smurf");
        assert_eq!(smurf_before(&lex, "Wow", " "), "Smurf!");
        // Exclamations are never pluralized.
        assert_eq!(smurf(&lex, "Oops"), "Smurf!");
    }

    #[test]
    fn verb_reading_wins_for_ambiguous_words() {
        let lex = lexicon();
        // "damn" is both VERB and EXCLAIM; "help" both VERB and NOUN.
        assert_eq!(lex.lookup("damn").unwrap().category(), Category::Verb);
        assert_eq!(smurf_before(&lex, "Damn", "!"), "Smurf");
        assert_eq!(smurf_before(&lex, "Damn", ","), "Smurf");
        assert_eq!(smurf(&lex, "helped"), "smurfed");
        for _ in 0..10 {
            assert_eq!(lex.lookup("help").unwrap().category(), Category::Verb);
        }
    }
}
