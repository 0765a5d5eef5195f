//! Centralized validation of command-line inputs.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::parsing::fasta::STDIN_PATH;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Target taxon must not be empty")]
    EmptyTaxon,
    #[error("Target taxon must be a single line")]
    MultilineTaxon,
    #[error("{0} and {1} must be different files: {2}")]
    SamePath(&'static str, &'static str, PathBuf),
}

/// Validate a target taxon given on the command line.
///
/// Surrounding whitespace is kept: headers are stripped before matching, so a
/// taxon like `" Rhizobium"` can still match mid-header.
///
/// # Errors
///
/// Returns `ValidationError::EmptyTaxon` for an empty value, or
/// `ValidationError::MultilineTaxon` if it contains a line break (a stripped
/// header never does, so it could not match).
pub fn validate_target_taxon(taxon: &str) -> Result<String, ValidationError> {
    if taxon.is_empty() {
        return Err(ValidationError::EmptyTaxon);
    }
    if taxon.contains(['\n', '\r']) {
        return Err(ValidationError::MultilineTaxon);
    }
    Ok(taxon.to_string())
}

/// Ensure no two of the input, output and summary paths name the same file.
///
/// Opening an output truncates it, so sharing a path with the input would
/// destroy the data before it is read.
///
/// # Errors
///
/// Returns `ValidationError::SamePath` naming the first clashing pair.
pub fn check_distinct_paths(
    input: &Path,
    output: &Path,
    summary: &Path,
) -> Result<(), ValidationError> {
    let pairs = [
        ("input file", input, "output file", output),
        ("input file", input, "summary file", summary),
        ("output file", output, "summary file", summary),
    ];

    for (name_a, a, name_b, b) in pairs {
        if name_a == "input file" && a.as_os_str() == STDIN_PATH {
            continue;
        }
        if same_file(a, b) {
            return Err(ValidationError::SamePath(name_a, name_b, b.to_path_buf()));
        }
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    resolve(a) == resolve(b)
}

/// Absolute form of a path that may not exist yet.
///
/// Outputs are usually created by the run itself, so only the parent
/// directory can be resolved; failing that, `.` components are dropped.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect(),
    }
}
