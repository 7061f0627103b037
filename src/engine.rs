//! Substitution engine.
//!
//! ## How the parts work together
//!
//! ```text
//! Lexicon (immutable, shared) ─────────────┐
//!                                          │
//! line ── tokenize (tokenizer.rs) ──> pieces
//!                                          │
//!                     Substitutor::process (substitutor.rs)
//!                       - lexicon lookup -> inflect     (inflect.rs)
//!                       - unmatched      -> chaos roll  (chaos.rs)
//!                       - phrase vetoes                 (phrase.rs)
//!                                          │
//!                                          v
//!                          output line [+ LineDetails]  (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tokenizer.rs`: lossless split of a line into word and separator pieces.
//! - `inflect.rs`: category/suffix rules and case mirroring for lexicon hits.
//! - `chaos.rs`: probabilistic replacement of unknown words.
//! - `phrase.rs`: neighbour-aware rules that revert some replacements.
//! - `substitutor.rs`: owns options + RNG, drives the pipeline, lazy line
//!   iterators.
//! - `metrics.rs`: per-word decision traces for the verbose path.
//!
//! ## Debugging
//!
//! Set `SMURFIFY_DEBUG=1` to print lookup, chaos and phrase traces.

#[path = "engine/chaos.rs"]
mod chaos;
#[path = "engine/inflect.rs"]
mod inflect;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/phrase.rs"]
mod phrase;
#[path = "engine/substitutor.rs"]
mod substitutor;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use chaos::chaos_form;
pub use inflect::{CasePattern, inflect};
pub use metrics::{Decision, LineDetails, PhraseRule, Reason};
pub use substitutor::{ReaderLines, SmurfLines, Substitutor};
pub use tokenizer::tokenize;
