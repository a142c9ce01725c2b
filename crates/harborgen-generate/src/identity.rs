//! Unique person identities: name pairs and derived emails.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::errors::GenerationError;

/// Raw (first, last) pair drawn from a name source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub first: String,
    pub last: String,
}

/// On-demand source of plausible person names.
///
/// The source is not required to produce unique pairs; the allocator rejects
/// duplicates. Its effective cardinality must stay well above the requested
/// row count or allocation exhausts its attempt budget.
pub trait NamePairSource {
    fn draw(&mut self, rng: &mut dyn RngCore) -> NamePair;
}

/// Name source backed by the `fake` crate's English name fakers.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakerNameSource;

impl NamePairSource for FakerNameSource {
    fn draw(&mut self, rng: &mut dyn RngCore) -> NamePair {
        let first: String = FirstName().fake_with_rng(rng);
        let last: String = LastName().fake_with_rng(rng);
        NamePair { first, last }
    }
}

/// Allocated identity, distinct from every earlier one in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Produces run-unique (name, email) triples by rejection sampling.
///
/// Owns the used-key and used-email sets for one run; callers keep a single
/// allocator alive for the whole batch.
pub struct IdentityAllocator<S> {
    source: S,
    domains: Vec<String>,
    max_name_attempts: u32,
    max_email_attempts: u32,
    used_keys: HashSet<(String, String)>,
    used_emails: HashSet<String>,
    name_retries: u64,
    email_retries: u64,
}

impl<S: NamePairSource> IdentityAllocator<S> {
    pub fn new(
        source: S,
        domains: Vec<String>,
        max_name_attempts: u32,
        max_email_attempts: u32,
    ) -> Self {
        Self {
            source,
            domains,
            max_name_attempts,
            max_email_attempts,
            used_keys: HashSet::new(),
            used_emails: HashSet::new(),
            name_retries: 0,
            email_retries: 0,
        }
    }

    /// Draw name pairs until one normalizes to an unseen key, then derive an
    /// unseen email from that key.
    pub fn allocate(&mut self, rng: &mut dyn RngCore) -> Result<Identity, GenerationError> {
        let (pair, key) = self.allocate_name(rng)?;
        let email = self.allocate_email(&key, rng)?;
        Ok(Identity {
            first_name: pair.first,
            last_name: pair.last,
            email,
        })
    }

    /// Rejected name draws so far.
    pub fn name_retries(&self) -> u64 {
        self.name_retries
    }

    /// Rejected email candidates so far.
    pub fn email_retries(&self) -> u64 {
        self.email_retries
    }

    fn allocate_name(
        &mut self,
        rng: &mut dyn RngCore,
    ) -> Result<(NamePair, (String, String)), GenerationError> {
        for _ in 0..self.max_name_attempts {
            let pair = self.source.draw(rng);
            let key = (normalize(&pair.first), normalize(&pair.last));
            if self.used_keys.insert(key.clone()) {
                return Ok((pair, key));
            }
            self.name_retries += 1;
        }
        Err(GenerationError::Exhausted {
            space: "name",
            attempts: self.max_name_attempts,
        })
    }

    fn allocate_email(
        &mut self,
        key: &(String, String),
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        for _ in 0..self.max_email_attempts {
            let suffix = rng.random_range(1..=999);
            let domain = self.domains.choose(rng).ok_or_else(|| {
                GenerationError::InvalidOptions("email domain list is empty".to_string())
            })?;
            let candidate = format!("{}.{}{}@{}", key.0, key.1, suffix, domain);
            if self.used_emails.insert(candidate.clone()) {
                return Ok(candidate);
            }
            self.email_retries += 1;
        }
        Err(GenerationError::Exhausted {
            space: "email",
            attempts: self.max_email_attempts,
        })
    }
}

/// Lowercase projection keeping only alphanumeric characters.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}
