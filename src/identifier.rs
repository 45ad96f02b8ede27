use crate::simd::find_token_end;

pub const RECORD_MARKER: u8 = b'>';

#[inline]
pub fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&RECORD_MARKER)
}

/// The identifier of a header line: everything from the marker up to the
/// first space or line terminator. The marker is part of the identifier.
///
/// ```
/// use fasta_validator::identifier::extract_identifier;
///
/// assert_eq!(extract_identifier(b">seq1 some description\n"), b">seq1");
/// assert_eq!(extract_identifier(b">seq1\n"), b">seq1");
/// ```
#[inline]
pub fn extract_identifier(line: &[u8]) -> &[u8] {
    identifier_token(line).0
}

/// Splits off the identifier token and reports whether it was terminated
/// inside `part`. An unterminated token may continue in the next piece of
/// the same line.
#[inline]
pub fn identifier_token(part: &[u8]) -> (&[u8], bool) {
    match find_token_end(part) {
        Some(end) => (&part[..end], true),
        None => (part, false),
    }
}
