use std::fs;
use std::path::PathBuf;

use harborgen_generate::{GenerateOptions, GenerationEngine, GenerationError};

fn temp_csv_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("harborgen_{label}_{}.csv", uuid::Uuid::new_v4()));
    path
}

#[test]
fn generate_is_deterministic() {
    let path_a = temp_csv_path("run_a");
    let path_b = temp_csv_path("run_b");

    let options = GenerateOptions {
        rows: 200,
        out_path: path_a.clone(),
        ..GenerateOptions::default()
    };
    GenerationEngine::new(options).run().expect("run generation A");

    let options = GenerateOptions {
        rows: 200,
        out_path: path_b.clone(),
        ..GenerateOptions::default()
    };
    GenerationEngine::new(options).run().expect("run generation B");

    let roster_a = fs::read_to_string(&path_a).expect("read roster A");
    let roster_b = fs::read_to_string(&path_b).expect("read roster B");
    assert_eq!(roster_a, roster_b, "same seed should reproduce the same roster");
}

#[test]
fn generate_respects_row_count() {
    let path = temp_csv_path("rows");
    let options = GenerateOptions {
        rows: 150,
        out_path: path.clone(),
        ..GenerateOptions::default()
    };

    let result = GenerationEngine::new(options).run().expect("run generation");
    assert_eq!(result.report.rows_generated, 150);
    assert!(result.report.bytes_written > 0);

    let contents = fs::read_to_string(&path).expect("read roster");
    // header plus one line per record
    assert_eq!(contents.lines().count(), 151);
}

#[test]
fn generate_rejects_zero_rows() {
    let path = temp_csv_path("zero");
    let options = GenerateOptions {
        rows: 0,
        out_path: path.clone(),
        ..GenerateOptions::default()
    };

    let result = GenerationEngine::new(options).run();
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
    assert!(!path.exists(), "rejected run must not create a file");
}

#[test]
fn generate_rejects_reversed_date_range() {
    let path = temp_csv_path("dates");
    let defaults = GenerateOptions::default();
    let options = GenerateOptions {
        rows: 10,
        out_path: path.clone(),
        join_date_start: defaults.join_date_end,
        join_date_end: defaults.join_date_start,
        ..defaults
    };

    let result = GenerationEngine::new(options).run();
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
    assert!(!path.exists());
}

#[test]
fn generate_rejects_empty_word_bank() {
    let path = temp_csv_path("banks");
    let mut options = GenerateOptions {
        rows: 10,
        out_path: path.clone(),
        ..GenerateOptions::default()
    };
    options.word_banks.nouns.clear();

    let result = GenerationEngine::new(options).run();
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
    assert!(!path.exists());
}
