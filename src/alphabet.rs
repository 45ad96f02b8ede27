//! Character-class checks for sequence lines.
//!
//! A sequence line may contain ASCII letters (`[A-Za-z]`) and the line
//! terminator bytes `\n` and `\r`. The check is done with range comparisons
//! on raw bytes rather than a biological alphabet, so `J` or `x` pass while
//! digits, punctuation and non-ASCII bytes do not.

use std::fmt;

const LINE_FEED: u8 = 10;
const CARRIAGE_RETURN: u8 = 13;

/// Why a byte was rejected. Each variant carries the offending byte and its
/// zero-based column within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterViolation {
    /// Below `A` (65) and not a line terminator: digits, whitespace,
    /// most punctuation and control bytes.
    BelowLetters { byte: u8, column: usize },
    /// Between `Z` and `a` (91..=96): brackets, backslash, caret,
    /// underscore and backtick.
    BetweenCases { byte: u8, column: usize },
    /// Above `z` (122): `{ | } ~`, DEL and every non-ASCII byte.
    AboveLetters { byte: u8, column: usize },
}

impl CharacterViolation {
    pub fn byte(&self) -> u8 {
        match *self {
            CharacterViolation::BelowLetters { byte, .. }
            | CharacterViolation::BetweenCases { byte, .. }
            | CharacterViolation::AboveLetters { byte, .. } => byte,
        }
    }

    pub fn column(&self) -> usize {
        match *self {
            CharacterViolation::BelowLetters { column, .. }
            | CharacterViolation::BetweenCases { column, .. }
            | CharacterViolation::AboveLetters { column, .. } => column,
        }
    }

    /// Moves the column right by `by`, for checks run on part of a line.
    pub fn shifted(self, by: usize) -> Self {
        match self {
            CharacterViolation::BelowLetters { byte, column } => {
                CharacterViolation::BelowLetters { byte, column: column + by }
            }
            CharacterViolation::BetweenCases { byte, column } => {
                CharacterViolation::BetweenCases { byte, column: column + by }
            }
            CharacterViolation::AboveLetters { byte, column } => {
                CharacterViolation::AboveLetters { byte, column: column + by }
            }
        }
    }
}

impl fmt::Display for CharacterViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self {
            CharacterViolation::BelowLetters { .. } => "below 'A'",
            CharacterViolation::BetweenCases { .. } => "between 'Z' and 'a'",
            CharacterViolation::AboveLetters { .. } => "above 'z'",
        };
        let byte = self.byte();
        if byte.is_ascii_graphic() {
            write!(f, "'{}' (byte {}, {}) at column {}", byte as char, byte, class, self.column() + 1)
        } else {
            write!(f, "byte {} ({}) at column {}", byte, class, self.column() + 1)
        }
    }
}

/// Classifies a single byte. `column` is only recorded in the violation.
#[inline]
pub fn classify(byte: u8, column: usize) -> Option<CharacterViolation> {
    if byte < 65 {
        if byte != LINE_FEED && byte != CARRIAGE_RETURN {
            return Some(CharacterViolation::BelowLetters { byte, column });
        }
    } else if byte > 90 && byte < 97 {
        return Some(CharacterViolation::BetweenCases { byte, column });
    } else if byte > 122 {
        return Some(CharacterViolation::AboveLetters { byte, column });
    }
    None
}

/// Scalar check of a whole line, terminator included. Returns the first
/// rejected byte.
pub fn check_line_scalar(line: &[u8]) -> Result<(), CharacterViolation> {
    for (column, &byte) in line.iter().enumerate() {
        if let Some(violation) = classify(byte, column) {
            return Err(violation);
        }
    }
    Ok(())
}

/// Checks a sequence line. Lines made only of letters take the vectorised
/// path; anything else, including lines that still carry their terminator,
/// falls back to the scalar scan which decides the exact violation.
#[inline]
pub fn check_line(line: &[u8]) -> Result<(), CharacterViolation> {
    if crate::simd::all_letters(line) {
        return Ok(());
    }
    check_line_scalar(line)
}

/// Number of residue bytes in a line, i.e. everything except `\n` and `\r`.
#[inline]
pub fn residue_count(line: &[u8]) -> usize {
    line.len() - crate::simd::count_terminators(line)
}
