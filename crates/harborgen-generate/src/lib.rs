//! Roster generation engine for harborgen.
//!
//! This crate turns `GenerateOptions` into a boat-owner CSV whose person
//! names, emails, and boat names are each unique within the run.

pub mod engine;
pub mod errors;
pub mod identity;
pub mod model;
pub mod names;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use identity::{FakerNameSource, Identity, IdentityAllocator, NamePair, NamePairSource};
pub use model::{DEFAULT_EMAIL_DOMAINS, GenerateOptions, GenerationReport};
pub use names::{BoatNamer, Template, WordBanks};
