use crate::error::{FastaError, Result};
use crate::status::ValidationStatus;
use crate::validator::ValidationSummary;
use std::io::{self, Write};

/// Writes the human-readable diagnostic for `err`. Duplicates name both the
/// identifier just read and the one stored earlier.
pub fn write_diagnostic<W: Write>(out: &mut W, err: &FastaError) -> io::Result<()> {
    match err {
        FastaError::DuplicateIdentifier { line, id, previous } => {
            writeln!(
                out,
                "ERROR: Found a duplicate id at line {}: |{}|",
                line,
                String::from_utf8_lossy(id)
            )?;
            writeln!(
                out,
                "ERROR: Found a duplicate id: |{}|",
                String::from_utf8_lossy(previous)
            )
        }
        FastaError::EmptySequence { line: 0, .. } => {
            writeln!(out, "ERROR: At end: We have an empty sequence (no records)")
        }
        other => writeln!(out, "ERROR: {}", other),
    }
}

/// Collapses a validation outcome to its status, printing the diagnostic to
/// stderr when `verbose` is set.
pub fn resolve(outcome: &Result<ValidationSummary>, verbose: bool) -> ValidationStatus {
    match outcome {
        Ok(_) => ValidationStatus::Valid,
        Err(err) => {
            if !err.is_content_error() {
                log::error!("{}", err);
            }
            if verbose {
                let stderr = io::stderr();
                let mut handle = stderr.lock();
                // Nothing sensible to do if stderr itself is gone.
                let _ = write_diagnostic(&mut handle, err);
            }
            err.status()
        }
    }
}
