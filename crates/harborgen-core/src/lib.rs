//! Core contracts for harborgen.
//!
//! This crate defines the flat owner record and the static reference tables
//! shared by the generation engine and the CLI.

pub mod record;
pub mod reference;

pub use record::OwnerRecord;
pub use reference::{BOAT_SPECS, BoatSpec, COUNTRIES, Country, country_code};
