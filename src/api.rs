use crate::{Error, LineDetails, Lexicon, Result, Substitutor};
use std::time::{Duration, Instant};

/// Substitution options.
///
/// The defaults are deterministic: chaos mode and phrase rules are off, so
/// the output depends only on the input and the lexicon.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Replace unknown words at random.
    pub chaos_enabled: bool,
    /// Per-word chance of a chaos replacement, within `[0, 1]`.
    pub chaos_probability: f64,
    /// Seed for the random source; `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
    /// Apply the verb-some-noun and connector phrase rules.
    pub phrase_rules: bool,
}

impl Options {
    pub const DEFAULT_CHAOS_PROBABILITY: f64 = 0.05;

    /// Options matching the classic command-line behavior: chaos mode at 5%
    /// and phrase rules on.
    pub fn playful() -> Self {
        Options { chaos_enabled: true, phrase_rules: true, ..Options::default() }
    }

    pub fn with_chaos(mut self, probability: f64) -> Self {
        self.chaos_enabled = true;
        self.chaos_probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Reject values the engine cannot honor. Out-of-range probabilities are
    /// an error even when chaos mode is disabled.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.chaos_probability) {
            return Err(Error::InvalidChaosProbability(self.chaos_probability));
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            chaos_enabled: false,
            chaos_probability: Self::DEFAULT_CHAOS_PROBABILITY,
            rng_seed: None,
            phrase_rules: false,
        }
    }
}

/// Result from [`smurfify_with`].
#[derive(Debug, Clone)]
pub struct SmurfResult {
    /// Transformed text, same line structure as the input.
    pub text: String,
    pub elapsed: Duration,
}

/// Result from [`smurfify_verbose_with`].
#[derive(Debug, Clone)]
pub struct SmurfResultVerbose {
    pub text: String,
    pub elapsed: Duration,
    /// One entry per input line.
    pub lines: Vec<LineDetails>,
}

/// Smurfify `text` with the built-in lexicon and default [`Options`].
///
/// # Example
/// ```
/// use smurfify::smurfify;
///
/// assert_eq!(smurfify("Help me, I want some hope!"), "Smurf me, I smurf some smurf!");
/// ```
pub fn smurfify(text: &str) -> String {
    let mut substitutor = Substitutor::new_unchecked(Lexicon::builtin(), Options::default());
    text.split('\n').map(|line| substitutor.smurf_line(line)).collect::<Vec<_>>().join("\n")
}

/// Smurfify `text` with an explicit lexicon and options.
///
/// Lines are separated by `'\n'` and processed in order with one random
/// source, so a seeded run is reproducible.
pub fn smurfify_with(text: &str, lexicon: &Lexicon, options: &Options) -> Result<SmurfResult> {
    let started = Instant::now();
    let mut substitutor = Substitutor::new(lexicon, options.clone())?;
    let out = substitutor.lines(text.split('\n')).collect::<Vec<_>>().join("\n");
    Ok(SmurfResult { text: out, elapsed: started.elapsed() })
}

/// Like [`smurfify_with`], also returning a per-line decision trace.
pub fn smurfify_verbose_with(text: &str, lexicon: &Lexicon, options: &Options) -> Result<SmurfResultVerbose> {
    let started = Instant::now();
    let mut substitutor = Substitutor::new(lexicon, options.clone())?;

    let mut out = Vec::new();
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let (smurfed, details) = substitutor.smurf_line_verbose(line);
        out.push(smurfed);
        lines.push(details);
    }

    Ok(SmurfResultVerbose { text: out.join("\n"), elapsed: started.elapsed(), lines })
}
