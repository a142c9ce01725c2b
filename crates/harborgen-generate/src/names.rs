//! Boat-name synthesis: template grammar with a bounded uniqueness search.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_ADJECTIVES: &[&str] = &[
    "Blue", "Golden", "Crimson", "Quiet", "Misty", "Lone", "La", "El", "Velho", "Nova", "Serene",
];
const DEFAULT_NOUNS: &[&str] = &[
    "Wind", "Dream", "Voyager", "Sirena", "Spirit", "Whisper", "Odyssey", "Vento", "Esperanza",
    "Breeze",
];
const DEFAULT_MYTHICAL: &[&str] = &[
    "Zephyr", "Nautilus", "Poseidon", "Athena", "Calypso", "Orion", "Aphrodite",
];
const DEFAULT_NATURE: &[&str] = &[
    "Sea Breeze", "Ocean Mist", "Morning Star", "Sunset Sail", "Storm Breaker", "Deep Blue",
];
const DEFAULT_SUFFIXES: &[&str] = &[
    "II", "III", "IV", "of the Sea", "del Mar", "dos Mares", "of Avalon",
];

/// Word banks feeding the boat-name templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBanks {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
    pub mythical: Vec<String>,
    pub nature: Vec<String>,
    pub suffixes: Vec<String>,
}

impl WordBanks {
    /// True if any bank has no words to draw from.
    pub fn has_empty_bank(&self) -> bool {
        self.adjectives.is_empty()
            || self.nouns.is_empty()
            || self.mythical.is_empty()
            || self.nature.is_empty()
            || self.suffixes.is_empty()
    }
}

impl Default for WordBanks {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|word| word.to_string()).collect();
        Self {
            adjectives: owned(DEFAULT_ADJECTIVES),
            nouns: owned(DEFAULT_NOUNS),
            mythical: owned(DEFAULT_MYTHICAL),
            nature: owned(DEFAULT_NATURE),
            suffixes: owned(DEFAULT_SUFFIXES),
        }
    }
}

/// Boat-name template identifiers; one is chosen uniformly per attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    AdjectiveNoun,
    Mythical,
    NaturePhrase,
    AdjectiveMythical,
    NounSuffix,
    AdjectiveNounNumber,
    MythicalNumber,
}

impl Template {
    /// Full grammar, numbered variants included.
    pub const ALL: [Template; 7] = [
        Template::AdjectiveNoun,
        Template::Mythical,
        Template::NaturePhrase,
        Template::AdjectiveMythical,
        Template::NounSuffix,
        Template::AdjectiveNounNumber,
        Template::MythicalNumber,
    ];

    fn render(self, banks: &WordBanks, rng: &mut dyn RngCore) -> String {
        match self {
            Template::AdjectiveNoun => {
                format!("{} {}", pick(&banks.adjectives, rng), pick(&banks.nouns, rng))
            }
            Template::Mythical => pick(&banks.mythical, rng).to_string(),
            Template::NaturePhrase => pick(&banks.nature, rng).to_string(),
            Template::AdjectiveMythical => {
                format!(
                    "{} {}",
                    pick(&banks.adjectives, rng),
                    pick(&banks.mythical, rng)
                )
            }
            Template::NounSuffix => {
                format!("{} {}", pick(&banks.nouns, rng), pick(&banks.suffixes, rng))
            }
            Template::AdjectiveNounNumber => {
                format!(
                    "{} {} {}",
                    pick(&banks.adjectives, rng),
                    pick(&banks.nouns, rng),
                    rng.random_range(1..=999)
                )
            }
            Template::MythicalNumber => {
                format!("{} {}", pick(&banks.mythical, rng), rng.random_range(100..=999))
            }
        }
    }
}

fn pick<'a>(bank: &'a [String], rng: &mut dyn RngCore) -> &'a str {
    bank.choose(rng).map(String::as_str).unwrap_or_default()
}

/// Produces run-unique boat names from the template grammar.
///
/// Owns the used-name set for one run. When the attempt budget runs dry the
/// namer switches to sequential `Boat_{n}` fallbacks instead of failing.
pub struct BoatNamer {
    banks: WordBanks,
    templates: Vec<Template>,
    max_attempts: u32,
    used: HashSet<String>,
    retries: u64,
    fallbacks: u64,
}

impl BoatNamer {
    pub fn new(banks: WordBanks, max_attempts: u32) -> Self {
        Self::with_templates(banks, Template::ALL.to_vec(), max_attempts)
    }

    /// Namer restricted to a subset of the grammar.
    pub fn with_templates(banks: WordBanks, templates: Vec<Template>, max_attempts: u32) -> Self {
        Self {
            banks,
            templates,
            max_attempts,
            used: HashSet::new(),
            retries: 0,
            fallbacks: 0,
        }
    }

    /// First unseen rendered name within the attempt budget, else the next
    /// `Boat_{n}` fallback where `n` counts names handed out so far.
    pub fn next_name(&mut self, rng: &mut dyn RngCore) -> String {
        for _ in 0..self.max_attempts {
            let template = self
                .templates
                .choose(rng)
                .copied()
                .unwrap_or(Template::Mythical);
            let name = template.render(&self.banks, rng).trim().to_string();
            if self.used.insert(name.clone()) {
                return name;
            }
            self.retries += 1;
        }

        self.fallbacks += 1;
        let fallback = format!("Boat_{}", self.used.len() + 1);
        warn!(name = %fallback, attempts = self.max_attempts, "boat name budget exhausted, falling back");
        self.used.insert(fallback.clone());
        fallback
    }

    /// Rejected renders so far.
    pub fn retries(&self) -> u64 {
        self.retries
    }

    /// Fallback names handed out so far.
    pub fn fallbacks(&self) -> u64 {
        self.fallbacks
    }
}
