//! Streaming validation of FASTA files, plain or gzip-compressed.
//!
//! Internal events go through the `log` facade and are dropped unless the
//! host installs a logger; the `fasta-validator` binary does not. The
//! verbose `ERROR:` diagnostics are written to stderr independently of it.
//!
//! ```no_run
//! let status = fasta_validator::validate("reads.fa.gz", true);
//! std::process::exit(status.code() as i32);
//! ```

pub mod alphabet;
pub mod config;
pub mod error;
pub mod identifier;
pub mod report;
pub mod simd;
pub mod source;
pub mod status;
pub mod validator;

pub use alphabet::CharacterViolation;
pub use config::{OverlongLines, ValidatorBuilder, ValidatorConfig};
pub use error::{FastaError, Result};
pub use source::{FastaInput, LineReader, LineSource};
pub use status::ValidationStatus;
pub use validator::{FastaValidator, ValidationSummary};

use std::io::BufRead;
use std::path::Path;

/// Validates `filename` and returns its exit status. Names ending in `.gz`
/// are decompressed on the fly. With `verbose` set the reason for a failure
/// is written to stderr.
pub fn validate<P: AsRef<Path>>(filename: P, verbose: bool) -> ValidationStatus {
    validate_with(filename, &ValidatorConfig::verbose(verbose))
}

pub fn validate_with<P: AsRef<Path>>(filename: P, config: &ValidatorConfig) -> ValidationStatus {
    let outcome = validate_path(filename, config);
    report::resolve(&outcome, config.verbose)
}

/// Like [`validate_with`] but returns the error itself, or the summary of a
/// valid file.
pub fn validate_path<P: AsRef<Path>>(
    filename: P,
    config: &ValidatorConfig,
) -> Result<ValidationSummary> {
    let validator = FastaValidator::new(config)?;
    let input = FastaInput::from_path(filename, config.max_line_len)?;
    validator.run(input)
}

pub fn validate_reader<R: BufRead>(reader: R, config: &ValidatorConfig) -> Result<ValidationSummary> {
    let validator = FastaValidator::new(config)?;
    validator.run(LineReader::with_max_line_len(config.max_line_len, reader))
}

pub fn validate_bytes(data: &[u8], config: &ValidatorConfig) -> Result<ValidationSummary> {
    validate_reader(data, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(data: &[u8]) -> u8 {
        match validate_bytes(data, &ValidatorConfig::default()) {
            Ok(_) => 0,
            Err(e) => e.status().code(),
        }
    }

    #[test]
    fn test_status_scenarios() {
        assert_eq!(status_of(b">seq1\nACGT\n"), 0);
        assert_eq!(status_of(b"ACGT\n>seq1\nACGT\n"), 1);
        assert_eq!(status_of(b">seq1\nACGT\n>seq1\nACGT\n"), 2);
        assert_eq!(status_of(b">seq1\nACG1\n"), 4);
        assert_eq!(status_of(b">seq1\n>seq2\nACGT\n"), 8);
        assert_eq!(
            status_of(b">seq1 description here\nACGT\n>seq1 other text\nACGT\n"),
            2
        );
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(validate("/no/such/file.fa", false), ValidationStatus::MissingHeader);
        assert_eq!(validate("/no/such/file.fa.gz", false), ValidationStatus::MissingHeader);
    }
}
