use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use harborgen_core::{BOAT_SPECS, COUNTRIES, OwnerRecord};

use crate::errors::GenerationError;
use crate::identity::{FakerNameSource, IdentityAllocator, NamePairSource};
use crate::model::{GenerateOptions, GenerationReport};
use crate::names::BoatNamer;
use crate::output::csv::write_owner_records;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_path: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating an owner roster from options.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run with the faker-backed name source.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        self.run_with_source(FakerNameSource)
    }

    /// Run with a caller-supplied name source.
    ///
    /// The whole batch is assembled in memory and flushed once; a failure
    /// mid-run leaves no output file behind.
    pub fn run_with_source<S: NamePairSource>(
        &self,
        source: S,
    ) -> Result<GenerationResult, GenerationError> {
        self.validate()?;

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let options = &self.options;

        let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
        let mut allocator = IdentityAllocator::new(
            source,
            options.email_domains.clone(),
            options.max_name_attempts,
            options.max_email_attempts,
        );
        let mut namer = BoatNamer::new(options.word_banks.clone(), options.max_boat_name_attempts);

        info!(
            run_id = %run_id,
            rows = options.rows,
            seed = options.seed,
            out_path = %options.out_path.display(),
            "generation started"
        );

        let mut records = Vec::with_capacity(options.rows as usize);
        for _ in 0..options.rows {
            records.push(assemble_record(&mut allocator, &mut namer, options, &mut rng)?);
        }

        let bytes_written = write_owner_records(&options.out_path, &records)?;

        let report = GenerationReport {
            run_id: run_id.clone(),
            rows_generated: records.len() as u64,
            name_retries: allocator.name_retries(),
            email_retries: allocator.email_retries(),
            boat_name_retries: namer.retries(),
            fallback_boat_names: namer.fallbacks(),
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            run_id = %run_id,
            rows_generated = report.rows_generated,
            name_retries = report.name_retries,
            email_retries = report.email_retries,
            boat_name_retries = report.boat_name_retries,
            fallback_boat_names = report.fallback_boat_names,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_path: options.out_path.clone(),
            report,
        })
    }

    fn validate(&self) -> Result<(), GenerationError> {
        let options = &self.options;
        if options.rows == 0 {
            return Err(GenerationError::InvalidOptions(
                "rows must be positive".to_string(),
            ));
        }
        if options.email_domains.is_empty() {
            return Err(GenerationError::InvalidOptions(
                "email domain list is empty".to_string(),
            ));
        }
        if options.word_banks.has_empty_bank() {
            return Err(GenerationError::InvalidOptions(
                "every word bank needs at least one entry".to_string(),
            ));
        }
        if options.join_date_start > options.join_date_end {
            return Err(GenerationError::InvalidOptions(
                "join date range starts after it ends".to_string(),
            ));
        }
        Ok(())
    }
}

fn assemble_record<S: NamePairSource>(
    allocator: &mut IdentityAllocator<S>,
    namer: &mut BoatNamer,
    options: &GenerateOptions,
    rng: &mut ChaCha8Rng,
) -> Result<OwnerRecord, GenerationError> {
    let identity = allocator.allocate(rng)?;
    let boat_name = namer.next_name(rng);

    let spec = BOAT_SPECS
        .choose(rng)
        .ok_or_else(|| GenerationError::InvalidOptions("boat spec table is empty".to_string()))?;
    let country = COUNTRIES
        .choose(rng)
        .ok_or_else(|| GenerationError::InvalidOptions("country table is empty".to_string()))?;
    let date_joined = random_join_date(options.join_date_start, options.join_date_end, rng);

    let full_name = format!("{} {}", identity.first_name, identity.last_name);
    Ok(OwnerRecord {
        first_name: identity.first_name,
        last_name: identity.last_name,
        full_name,
        boat_name,
        make: spec.make.to_string(),
        model: spec.model.to_string(),
        loa_ft: spec.loa_ft.to_string(),
        country: country.name.to_string(),
        country_code: country.code.to_string(),
        email: identity.email,
        date_joined: date_joined.format("%Y-%m-%d").to_string(),
    })
}

/// Uniform day within the inclusive range.
fn random_join_date(start: NaiveDate, end: NaiveDate, rng: &mut impl Rng) -> NaiveDate {
    let span = (end - start).num_days();
    let offset = rng.random_range(0..=span);
    start + chrono::Duration::days(offset)
}
