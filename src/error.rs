use crate::alphabet::CharacterViolation;
use crate::status::ValidationStatus;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Can't open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("The first line should start with a > (line {line})")]
    MissingHeader { line: usize },

    #[error("Found a duplicate id at line {line}: |{}|", String::from_utf8_lossy(id))]
    DuplicateIdentifier {
        line: usize,
        id: Vec<u8>,
        previous: Vec<u8>,
    },

    #[error("We have a non word character at line {line}: {violation}")]
    InvalidCharacter {
        line: usize,
        violation: CharacterViolation,
    },

    #[error("We have an empty sequence for |{}| (line {line})", String::from_utf8_lossy(id))]
    EmptySequence { line: usize, id: Vec<u8> },

    #[error("Line {line} is longer than the limit of {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    #[error("Unable to allocate the identifier index")]
    IndexAllocation,
}

impl FastaError {
    /// The exit status this failure is reported with.
    pub fn status(&self) -> ValidationStatus {
        match self {
            FastaError::Open { .. } | FastaError::Io(_) | FastaError::MissingHeader { .. } => {
                ValidationStatus::MissingHeader
            }
            FastaError::DuplicateIdentifier { .. } => ValidationStatus::DuplicateIdentifier,
            FastaError::InvalidCharacter { .. } => ValidationStatus::InvalidCharacter,
            FastaError::EmptySequence { .. } => ValidationStatus::EmptySequence,
            FastaError::LineTooLong { .. } => ValidationStatus::LineTooLong,
            FastaError::IndexAllocation => ValidationStatus::Internal,
        }
    }

    /// Content errors are problems with the records themselves, as opposed
    /// to failures to open or read the file, or to allocate resources for
    /// checking it.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            FastaError::MissingHeader { .. }
                | FastaError::DuplicateIdentifier { .. }
                | FastaError::InvalidCharacter { .. }
                | FastaError::EmptySequence { .. }
                | FastaError::LineTooLong { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FastaError>;
