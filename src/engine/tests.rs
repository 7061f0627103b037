use crate::{Category, Lexicon, Options, PhraseRule, Reason, Substitutor, Token};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

/// Small pinned lexicon so expectations do not move with `data/lexicon.txt`.
fn fixture() -> Lexicon {
    Lexicon::builder()
        .words(Category::Verb, &["help", "run", "damn", "jump", "fix"])
        .words(Category::Noun, &["world", "stage", "hope", "help", "torpedo", "bug", "feature"])
        .words(Category::Adjective, &["only", "full"])
        .words(Category::Exclaim, &["damn", "wow"])
        .build()
}

fn plain(lexicon: &Lexicon) -> Substitutor<'_> {
    Substitutor::new(lexicon, Options::default()).unwrap()
}

#[test]
fn end_to_end_example() {
    let lex = fixture();
    let mut sub = plain(&lex);
    assert_eq!(
        sub.smurf_line("Help me, Obi-Wan Kenobi, you're my only hope"),
        "Smurf me, Obi-Wan Kenobi, you're my smurfy smurf"
    );
}

#[test]
fn builtin_lexicon_end_to_end() {
    let mut sub = plain(Lexicon::builtin());
    assert_eq!(
        sub.smurf_line("Help me, Obi-Wan Kenobi, you're my only hope"),
        "Smurf me, Obi-Wan Kenobi, you're my smurfy smurf"
    );
    assert_eq!(
        sub.smurf_line("The children jumped... no, they RAN to the cities!"),
        "The smurfs jumped... no, they SMURFED to the smurfs!"
    );
}

#[test]
fn builtin_reads_shape_from_the_surface() {
    let mut sub = plain(Lexicon::builtin());
    assert_eq!(
        sub.smurf_line("I need to sing and bring clever code"),
        "I smurfed to smurfing and smurfing smurfier smurf"
    );
    assert_eq!(
        sub.smurf_line("plant a seed, turn left at the better road"),
        "plant a seed, turn left at the smurfier smurf"
    );
}

#[test]
fn documented_examples_through_whole_lines() {
    let lex = fixture();
    let mut sub = plain(&lex);
    assert_eq!(sub.smurf_line("DAMN Damn damn"), "SMURF Smurf smurf");
    assert_eq!(sub.smurf_line("two torpedoes"), "two smurfs");
    assert_eq!(sub.smurf_line("I jumped, I'm jumping"), "I smurfed, I'm smurfing");
    assert_eq!(sub.smurf_line("Damn! Damn, wow"), "Smurf! Smurf, smurf!");
    assert_eq!(sub.smurf_line("Wow!!! WOW?"), "Smurf!!! SMURF?");
}

#[test]
fn ambiguous_words_resolve_to_verb_reproducibly() {
    let lex = fixture();
    for _ in 0..5 {
        let mut sub = plain(&lex);
        let (out, details) = sub.smurf_line_verbose("helps");
        assert_eq!(out, "smurfs");
        assert!(matches!(details.decisions[0].reason, Reason::Lexicon { category: Category::Verb, .. }));
    }
}

#[test]
fn empty_and_wordless_lines_pass_through() {
    let lex = fixture();
    let mut sub = plain(&lex);
    assert_eq!(sub.smurf_line(""), "");
    assert_eq!(sub.smurf_line("   "), "   ");
    assert_eq!(sub.smurf_line("42 + 7 = 49 :-)"), "42 + 7 = 49 :-)");
}

#[test]
fn separators_are_never_touched() {
    let lex = fixture();
    let mut sub = plain(&lex);
    assert_eq!(sub.smurf_line("\t«help»—(world)…\u{a0}hope\r"), "\t«smurf»—(smurf)…\u{a0}smurf\r");
}

#[test]
fn smurf_token_without_context() {
    let lex = fixture();
    let mut sub = plain(&lex);
    assert_eq!(sub.smurf_token(&Token::new("Worlds")).as_deref(), Some("Smurfs"));
    assert_eq!(sub.smurf_token(&Token::new("Kenobi")), None);
}

// --- Chaos mode ---------------------------------------------------------------

fn unknown_words(n: usize) -> String {
    vec!["blorp"; n].join(" ")
}

#[test]
fn chaos_fraction_converges_to_probability() {
    let lex = Lexicon::builder().build();
    let n = 10_000;
    let line = unknown_words(n);

    for p in [0.05, 0.3, 0.9] {
        let mut sub = Substitutor::new(&lex, Options::default().with_chaos(p).with_seed(1)).unwrap();
        let (_, details) = sub.smurf_line_verbose(&line);
        assert_eq!(details.words(), n);
        let fraction = details.from_chaos() as f64 / n as f64;
        assert!((fraction - p).abs() < 0.02, "p={p} fraction={fraction}");
    }
}

#[test]
fn chaos_with_zero_probability_never_substitutes() {
    let lex = Lexicon::builder().build();
    let line = unknown_words(5_000);
    let mut sub = Substitutor::new(&lex, Options::default().with_chaos(0.0).with_seed(3)).unwrap();
    assert_eq!(sub.smurf_line(&line), line);
}

#[test]
fn chaos_uses_the_surface_suffix() {
    let lex = Lexicon::builder().build();
    let mut sub = Substitutor::new(&lex, Options::default().with_chaos(1.0)).unwrap();
    assert_eq!(sub.smurf_line("Walking dogs barked, Kenobi"), "Smurfing smurfs smurfed, Smurf");
    // Contractions are never chaos candidates.
    assert_eq!(sub.smurf_line("you're"), "you're");
}

#[test]
fn chaos_does_not_touch_lexicon_words() {
    let lex = fixture();
    let mut sub = Substitutor::new(&lex, Options::default().with_chaos(1.0)).unwrap();
    let (out, details) = sub.smurf_line_verbose("only hope");
    assert_eq!(out, "smurfy smurf");
    assert_eq!(details.from_lexicon(), 2);
    assert_eq!(details.from_chaos(), 0);
}

#[test]
fn seeded_runs_are_deterministic() {
    let lex = fixture();
    let text = "The quick brown fox jumps over the lazy dog while the world keeps turning and hoping";
    let opts = Options::playful().with_chaos(0.5).with_seed(2024);

    let mut a = Substitutor::new(&lex, opts.clone()).unwrap();
    let mut b = Substitutor::new(&lex, opts).unwrap();
    for _ in 0..20 {
        assert_eq!(a.smurf_line(text), b.smurf_line(text));
    }
}

#[test]
fn injected_rng_matches_seeded_rng() {
    let lex = fixture();
    let opts = Options::default().with_chaos(0.5);
    let line = unknown_words(200);

    let mut seeded = Substitutor::new(&lex, opts.clone().with_seed(9)).unwrap();
    let mut injected = Substitutor::with_rng(&lex, opts, ChaCha8Rng::seed_from_u64(9)).unwrap();
    assert_eq!(seeded.smurf_line(&line), injected.smurf_line(&line));
}

#[test]
fn with_rng_still_validates() {
    let lex = fixture();
    let opts = Options::default().with_chaos(7.0);
    assert!(Substitutor::with_rng(&lex, opts, ChaCha8Rng::seed_from_u64(0)).is_err());
}

// --- Phrase rules ---------------------------------------------------------------

fn phrased(lexicon: &Lexicon, seed: u64) -> Substitutor<'_> {
    let opts = Options { phrase_rules: true, rng_seed: Some(seed), ..Options::default() };
    Substitutor::new(lexicon, opts).unwrap()
}

#[test]
fn verb_some_noun_replaces_exactly_one_side() {
    let lex = fixture();
    let mut seen = std::collections::HashSet::new();

    for seed in 0..64 {
        let mut sub = phrased(&lex, seed);
        let (out, details) = sub.smurf_line_verbose("fix some bugs");
        assert!(out == "smurf some bugs" || out == "fix some smurfs", "unexpected '{out}'");
        assert_eq!(details.substituted(), 1);
        assert_eq!(details.suppressed(), 1);
        assert!(
            details
                .decisions
                .iter()
                .any(|d| d.reason == Reason::Suppressed { rule: PhraseRule::VerbSomeNoun })
        );
        seen.insert(out);
    }

    assert_eq!(seen.len(), 2, "both sides should win for some seed");
}

#[test]
fn connectors_avoid_smurf_collisions() {
    let lex = fixture();

    for seed in 0..16 {
        let mut sub = phrased(&lex, seed);
        let out = sub.smurf_line("bugs and features");
        assert!(out == "smurfs and features" || out == "bugs and smurfs", "unexpected '{out}'");

        let out = sub.smurf_line("bugs, features");
        assert!(out == "smurfs, features" || out == "bugs, smurfs", "unexpected '{out}'");
    }
}

#[test]
fn connectors_leave_single_replacements_alone() {
    let lex = fixture();
    let mut sub = phrased(&lex, 0);
    assert_eq!(sub.smurf_line("bugs and cats"), "smurfs and cats");
    assert_eq!(sub.smurf_line("cats, bugs"), "cats, smurfs");
}

#[test]
fn phrase_rules_are_off_by_default() {
    let lex = fixture();
    let mut sub = plain(&lex);
    assert_eq!(sub.smurf_line("fix some bugs and features"), "smurf some smurfs and smurfs");
}

// --- Line iterators ---------------------------------------------------------------

#[test]
fn lines_are_processed_lazily() {
    let lex = fixture();
    let mut sub = plain(&lex);
    let out: Vec<String> = sub.lines(std::iter::repeat("hello world")).take(3).collect();
    assert_eq!(out, vec!["hello smurf"; 3]);
}

#[test]
fn reader_strips_terminators_and_keeps_order() {
    let lex = fixture();
    let mut sub = plain(&lex);
    let input = Cursor::new("help\r\nno match\n\nWorlds\n");
    let out: Vec<String> = sub.reader(input).collect::<std::io::Result<_>>().unwrap();
    assert_eq!(out, ["smurf", "no match", "", "Smurfs"]);
}

#[test]
fn one_lexicon_many_workers() {
    let lex = fixture();
    let opts = Options::default().with_chaos(0.5).with_seed(11);
    let line = "help the world, zorp blorp fizz";

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let lex = &lex;
                let opts = opts.clone();
                scope.spawn(move || Substitutor::new(lex, opts).unwrap().smurf_line(line))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}

// --- Properties ---------------------------------------------------------------

fn non_letters(s: &str) -> String {
    s.chars().filter(|c| !c.is_alphabetic()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Whatever gets replaced, every non-letter character survives in order.
    #[test]
    fn non_letter_characters_survive(input in any::<String>(), seed in any::<u64>()) {
        // No exclamations: their "!" is the only non-letter a replacement can add.
        let lex = Lexicon::builder()
            .words(Category::Verb, &["help", "run"])
            .words(Category::Noun, &["world"])
            .words(Category::Adjective, &["only"])
            .build();
        let mut sub = Substitutor::new(&lex, Options::playful().with_chaos(1.0).with_seed(seed)).unwrap();
        let out = sub.smurf_line(&input);
        prop_assert_eq!(non_letters(&out), non_letters(&input));
    }

    /// With nothing to match and chaos off, output is the input.
    #[test]
    fn identity_without_matches(input in "\\PC{0,80}") {
        let lex = Lexicon::builder().build();
        let mut sub = Substitutor::new(&lex, Options::default()).unwrap();
        prop_assert_eq!(sub.smurf_line(&input), input);
    }
}
