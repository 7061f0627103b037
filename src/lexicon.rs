//! Static word lists and case-insensitive lookup.
//!
//! A [`Lexicon`] is built once from [`WordEntry`]s and never mutated. At build
//! time every entry contributes three kinds of surface forms to a single hash
//! index:
//!
//! ```text
//! canonical   "jump"                     FormKind::Canonical
//! listed      "ran:past"                 FormKind::Listed(Some(Past))
//! derived     "jumps" "jumped" "jumping" FormKind::Derived      (variants.rs)
//! ```
//!
//! A regular form is not derived for a shape the entry already lists, so
//! `see = saw:past` indexes "saw" but never "seed".
//!
//! When two entries claim the same form, the slot keeps the match with the
//! higher category priority (VERB > NOUN > ADJECTIVE > EXCLAIM). Within one
//! category a canonical or listed form beats a derived one; remaining ties go
//! to the entry inserted first. The set of *all* categories of a form is kept
//! alongside, for rules that care about membership rather than priority.
//!
//! ## Data format
//!
//! See `parse.rs`. The built-in table lives in `data/lexicon.txt` and is
//! compiled into the binary.

#[path = "lexicon/parse.rs"]
mod parse;
#[path = "lexicon/variants.rs"]
mod variants;

use crate::{Category, CategorySet, Result, Shape};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

const BUILTIN_DATA: &str = include_str!("../data/lexicon.txt");

static BUILTIN: Lazy<Lexicon> =
    Lazy::new(|| Lexicon::parse(BUILTIN_DATA).unwrap_or_else(|err| panic!("built-in lexicon is invalid: {err}")));

/// An irregular surface form listed explicitly for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub form: String,
    /// Shape the form stands for; `None` lets the inflector read it from the suffix.
    pub shape: Option<Shape>,
}

/// A canonical word, its category and its irregular forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub canonical: String,
    pub category: Category,
    pub variants: Vec<Variant>,
}

impl WordEntry {
    pub fn new(canonical: &str, category: Category) -> Self {
        WordEntry { canonical: canonical.to_lowercase(), category, variants: Vec::new() }
    }

    pub fn with_variant(mut self, form: &str, shape: Option<Shape>) -> Self {
        self.variants.push(Variant { form: form.to_lowercase(), shape });
        self
    }
}

/// How a surface form relates to the entry it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// The form is the entry's canonical word.
    Canonical,
    /// The form was listed explicitly, with an optional shape tag.
    Listed(Option<Shape>),
    /// The form was derived by a regular inflection rule.
    Derived,
}

impl FormKind {
    fn is_derived(self) -> bool {
        matches!(self, FormKind::Derived)
    }
}

/// Result of [`Lexicon::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexMatch<'l> {
    pub entry: &'l WordEntry,
    pub form: FormKind,
}

impl<'l> LexMatch<'l> {
    pub fn category(&self) -> Category {
        self.entry.category
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    entry: usize,
    form: FormKind,
    categories: CategorySet,
}

/// Immutable mapping from lowercase surface forms to word entries.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<WordEntry>,
    index: HashMap<String, Slot>,
}

impl Lexicon {
    /// The lexicon compiled into the crate from `data/lexicon.txt`.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parse lexicon text (see the module docs for the format).
    pub fn parse(text: &str) -> Result<Lexicon> {
        Ok(parse::parse_entries(text)?.into_iter().fold(Lexicon::builder(), LexiconBuilder::entry).build())
    }

    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Case-insensitive lookup of a surface form.
    pub fn lookup(&self, word: &str) -> Option<LexMatch<'_>> {
        let slot = self.index.get(&word.to_lowercase())?;
        Some(LexMatch { entry: &self.entries[slot.entry], form: slot.form })
    }

    /// Every category the surface form belongs to.
    pub fn categories(&self, word: &str) -> CategorySet {
        self.index.get(&word.to_lowercase()).map_or(CategorySet::empty(), |slot| slot.categories)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&word.to_lowercase())
    }

    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    /// Number of entries (not surface forms).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct surface forms in the index.
    pub fn form_count(&self) -> usize {
        self.index.len()
    }

    fn insert(&mut self, form: String, entry: usize, kind: FormKind) {
        let category = self.entries[entry].category;
        match self.index.entry(form) {
            Entry::Vacant(vacant) => {
                vacant.insert(Slot { entry, form: kind, categories: category.flag() });
            }
            Entry::Occupied(mut occupied) => {
                let slot = occupied.get_mut();
                slot.categories |= category.flag();
                let held = self.entries[slot.entry].category;
                let wins = category < held || (category == held && slot.form.is_derived() && !kind.is_derived());
                if wins {
                    slot.entry = entry;
                    slot.form = kind;
                }
            }
        }
    }
}

/// Collects entries and indexes them into a [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    entries: Vec<WordEntry>,
}

impl LexiconBuilder {
    /// Add a plain word with no irregular forms.
    pub fn word(self, category: Category, canonical: &str) -> Self {
        self.entry(WordEntry::new(canonical, category))
    }

    /// Add several plain words of one category.
    pub fn words(self, category: Category, canonicals: &[&str]) -> Self {
        canonicals.iter().fold(self, |b, w| b.word(category, w))
    }

    pub fn entry(mut self, entry: WordEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Lexicon {
        let mut lexicon = Lexicon { entries: self.entries, index: HashMap::new() };

        for id in 0..lexicon.entries.len() {
            let entry = lexicon.entries[id].clone();
            lexicon.insert(entry.canonical.clone(), id, FormKind::Canonical);
            for variant in &entry.variants {
                lexicon.insert(variant.form.clone(), id, FormKind::Listed(variant.shape));
            }
            // Listed irregular shapes replace the regular spelling ("saw", not "seed").
            let listed: Vec<Shape> = entry.variants.iter().filter_map(|v| v.shape).collect();
            for (form, shape) in variants::derive(&entry.canonical, entry.category) {
                if form != entry.canonical && !listed.contains(&shape) {
                    lexicon.insert(form, id, FormKind::Derived);
                }
            }
        }

        lexicon
    }
}
