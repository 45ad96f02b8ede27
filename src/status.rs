use std::fmt;

/// Outcome of a validation run, encoded as the process exit code.
///
/// The numeric values are a compatibility contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValidationStatus {
    Valid = 0,
    /// The first line is not a header, or the file could not be opened.
    MissingHeader = 1,
    DuplicateIdentifier = 2,
    InvalidCharacter = 4,
    EmptySequence = 8,
    /// Only produced when overlong lines are configured as faults.
    LineTooLong = 16,
    /// Resource failure inside the validator, e.g. the identifier index
    /// could not be allocated.
    Internal = 255,
}

impl ValidationStatus {
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self == ValidationStatus::Valid
    }

    pub fn description(self) -> &'static str {
        match self {
            ValidationStatus::Valid => "this is a valid fasta file",
            ValidationStatus::MissingHeader => "the first line does not start with a >",
            ValidationStatus::DuplicateIdentifier => "the ids are not unique",
            ValidationStatus::InvalidCharacter => {
                "lines in the sequence (that do not start >) contain characters that do not match [A-Za-z]"
            }
            ValidationStatus::EmptySequence => "there is a sequence with zero length in it",
            ValidationStatus::LineTooLong => "a line is longer than the configured maximum",
            ValidationStatus::Internal => "internal error, eg. unable to allocate memory",
        }
    }

    pub fn all() -> [ValidationStatus; 7] {
        [
            ValidationStatus::Valid,
            ValidationStatus::MissingHeader,
            ValidationStatus::DuplicateIdentifier,
            ValidationStatus::InvalidCharacter,
            ValidationStatus::EmptySequence,
            ValidationStatus::LineTooLong,
            ValidationStatus::Internal,
        ]
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

impl From<ValidationStatus> for std::process::ExitCode {
    fn from(status: ValidationStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}
