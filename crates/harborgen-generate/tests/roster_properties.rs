use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use harborgen_core::{BOAT_SPECS, OwnerRecord, country_code};
use harborgen_generate::identity::normalize;
use harborgen_generate::{DEFAULT_EMAIL_DOMAINS, GenerateOptions, GenerationEngine};
use regex::Regex;

const EXPECTED_HEADER: &[&str] = &[
    "first_name",
    "last_name",
    "full_name",
    "boat_name",
    "make",
    "model",
    "loa_ft",
    "country",
    "country_code",
    "email",
    "date_joined",
];

fn generate_roster(rows: u64, label: &str) -> (PathBuf, Vec<OwnerRecord>) {
    let mut path = std::env::temp_dir();
    path.push(format!("harborgen_{label}_{}.csv", uuid::Uuid::new_v4()));

    let options = GenerateOptions {
        rows,
        out_path: path.clone(),
        ..GenerateOptions::default()
    };
    GenerationEngine::new(options).run().expect("run generation");

    let mut reader = csv::Reader::from_path(&path).expect("open roster");
    let records = reader
        .deserialize()
        .collect::<Result<Vec<OwnerRecord>, _>>()
        .expect("parse roster rows");
    (path, records)
}

#[test]
fn roster_header_matches_record_fields() {
    let (path, records) = generate_roster(5, "header");
    assert_eq!(records.len(), 5);

    let mut reader = csv::Reader::from_path(&path).expect("open roster");
    let header = reader.headers().expect("read header").clone();
    let fields: Vec<&str> = header.iter().collect();
    assert_eq!(fields, EXPECTED_HEADER);
}

#[test]
fn roster_keys_emails_and_boat_names_are_unique() {
    let (_path, records) = generate_roster(400, "unique");

    let mut keys = HashSet::new();
    let mut emails = HashSet::new();
    let mut boat_names = HashSet::new();
    for record in &records {
        let key = (normalize(&record.first_name), normalize(&record.last_name));
        assert!(keys.insert(key), "duplicate name key: {}", record.full_name);
        assert!(emails.insert(record.email.clone()), "duplicate email: {}", record.email);
        assert!(
            boat_names.insert(record.boat_name.clone()),
            "duplicate boat name: {}",
            record.boat_name
        );
    }
}

#[test]
fn roster_emails_follow_the_address_pattern() {
    let (_path, records) = generate_roster(300, "emails");

    let domains = DEFAULT_EMAIL_DOMAINS
        .iter()
        .map(|domain| domain.replace('.', r"\."))
        .collect::<Vec<_>>()
        .join("|");
    let pattern =
        Regex::new(&format!(r"^[a-z0-9]+\.[a-z0-9]+[1-9][0-9]{{0,2}}@({domains})$")).expect("compile pattern");

    for record in &records {
        assert!(
            pattern.is_match(&record.email),
            "email does not match pattern: {}",
            record.email
        );

        let prefix = format!(
            "{}.{}",
            normalize(&record.first_name),
            normalize(&record.last_name)
        );
        assert!(
            record.email.starts_with(&prefix),
            "email {} does not derive from {}",
            record.email,
            record.full_name
        );
    }
}

#[test]
fn roster_dates_fall_inside_the_configured_range() {
    let (_path, records) = generate_roster(300, "dates");
    let defaults = GenerateOptions::default();

    for record in &records {
        let date = NaiveDate::parse_from_str(&record.date_joined, "%Y-%m-%d")
            .unwrap_or_else(|_| panic!("unparseable date: {}", record.date_joined));
        assert!(date >= defaults.join_date_start, "date too early: {date}");
        assert!(date <= defaults.join_date_end, "date too late: {date}");
    }
}

#[test]
fn roster_rows_come_from_the_reference_tables() {
    let (_path, records) = generate_roster(300, "tables");

    let spec_tuples: HashSet<(&str, &str, &str)> = BOAT_SPECS
        .iter()
        .map(|spec| (spec.make, spec.model, spec.loa_ft))
        .collect();

    for record in &records {
        let tuple = (
            record.make.as_str(),
            record.model.as_str(),
            record.loa_ft.as_str(),
        );
        assert!(spec_tuples.contains(&tuple), "unknown boat spec: {tuple:?}");

        let code = country_code(&record.country)
            .unwrap_or_else(|| panic!("unknown country: {}", record.country));
        assert_eq!(record.country_code, code);

        assert_eq!(
            record.full_name,
            format!("{} {}", record.first_name, record.last_name)
        );
    }
}
