//! # LDAP Schema Definition Validator
//!
//! A command-line utility for checking files of LDAP schema element
//! definitions before they are loaded into an application.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin schema-validator definitions/core.json
//! cargo run --bin schema-validator ./definitions/
//! ```
//!
//! Each file must hold a JSON array of element definitions:
//!
//! ```json
//! [
//!   {"oid": "2.5.6.0", "names": "'top'", "description": "top of the superclass chain"},
//!   {"oid": "2.5.4.3", "names": "('cn' 'commonName')"}
//! ]
//! ```
//!
//! ## Output Example
//!
//! ```text
//! Validating definition file: definitions/core.json
//!   ❌ #2: Invalid value '01' for schema field 'oid': ...
//!   ✓ 2.5.6.0 'top'
//!   ✓ 2.5.4.3 ('cn' 'commonname')
//!   Elements registered: 2
//!
//! Validation Summary:
//!   Valid elements: 2
//!   Invalid elements: 1
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Every definition in every file is valid
//! - `1`: A file could not be read or parsed, or a definition is invalid

use ldap_schema::schema::{LoadReport, NamedSchemaElement, SchemaLoader, SchemaModel};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

#[derive(Default)]
struct Totals {
    valid: usize,
    invalid: usize,
    unreadable: usize,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <definition-file-or-directory>", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} definitions/core.json", args[0]);
        eprintln!("  {} ./definitions/", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    let mut totals = Totals::default();

    if path.is_file() {
        validate_file(path, &mut totals);
    } else if path.is_dir() {
        validate_directory(path, &mut totals);
    } else {
        eprintln!(
            "Error: '{}' is not a valid file or directory",
            path.display()
        );
        process::exit(1);
    }

    println!("\nValidation Summary:");
    println!("  Valid elements: {}", totals.valid);
    println!("  Invalid elements: {}", totals.invalid);
    if totals.unreadable > 0 {
        println!("  Unreadable files: {}", totals.unreadable);
    }

    if totals.invalid > 0 || totals.unreadable > 0 {
        process::exit(1);
    }
}

fn validate_directory(dir_path: &Path, totals: &mut Totals) {
    println!("Validating definitions in directory: {}", dir_path.display());

    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory: {}", e);
            process::exit(1);
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    for path in paths {
        println!();
        validate_file(&path, totals);
    }
}

fn validate_file(file_path: &Path, totals: &mut Totals) {
    println!("Validating definition file: {}", file_path.display());

    let report = match load_file(file_path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("  ❌ Could not load file: {}", e);
            totals.unreadable += 1;
            return;
        }
    };

    for rejected in &report.rejected {
        eprintln!("  ❌ #{}: {}", rejected.index, rejected.error);
    }
    totals.invalid += report.rejected.len();

    // Elements that are individually valid may still clash with each other
    let model = register(report.loaded, totals);
    println!("  Elements registered: {}", model.len());
}

fn register(elements: Vec<NamedSchemaElement>, totals: &mut Totals) -> SchemaModel {
    let mut model = SchemaModel::new();
    for element in elements {
        let summary = format!("{} {}", element.oid(), element.descriptors());
        match model.add(element) {
            Ok(()) => {
                println!("  ✓ {}", summary);
                totals.valid += 1;
            }
            Err(e) => {
                eprintln!("  ❌ {}: {}", summary, e);
                totals.invalid += 1;
            }
        }
    }
    model
}

fn load_file(file_path: &Path) -> ldap_schema::LdapResult<LoadReport> {
    let content = fs::read_to_string(file_path)?;
    SchemaLoader::new().load_str(&content)
}
