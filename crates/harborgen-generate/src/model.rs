use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::names::WordBanks;

/// Domains used when the caller configures none.
pub const DEFAULT_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "mail.com"];

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of owner records to generate.
    pub rows: u64,
    /// Seed for the shared random source.
    pub seed: u64,
    /// Output CSV path.
    pub out_path: PathBuf,
    /// Earliest join date (inclusive).
    pub join_date_start: NaiveDate,
    /// Latest join date (inclusive).
    pub join_date_end: NaiveDate,
    /// Domains drawn uniformly for the email host part.
    pub email_domains: Vec<String>,
    /// Word banks feeding the boat-name grammar.
    pub word_banks: WordBanks,
    /// Maximum draws for an unseen name pair.
    pub max_name_attempts: u32,
    /// Maximum draws for an unseen email.
    pub max_email_attempts: u32,
    /// Render cycles before the boat namer falls back to a synthetic name.
    pub max_boat_name_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rows: 2000,
            seed: 42,
            out_path: PathBuf::from("boat_owners.csv"),
            join_date_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            join_date_end: NaiveDate::from_ymd_opt(2025, 4, 18).unwrap_or_default(),
            email_domains: DEFAULT_EMAIL_DOMAINS
                .iter()
                .map(|domain| domain.to_string())
                .collect(),
            word_banks: WordBanks::default(),
            max_name_attempts: 10_000,
            max_email_attempts: 1_000,
            max_boat_name_attempts: 1_000,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub rows_generated: u64,
    pub name_retries: u64,
    pub email_retries: u64,
    pub boat_name_retries: u64,
    pub fallback_boat_names: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
