use crate::alphabet::{check_line, residue_count};
use crate::config::{OverlongLines, ValidatorConfig};
use crate::error::{FastaError, Result};
use crate::identifier::{identifier_token, is_header};
use crate::source::{LineChunk, LineSource};
use std::collections::HashSet;

/// Identifiers seen so far in one file. Owned by a single validation run.
#[derive(Debug, Default)]
pub struct IdentifierIndex {
    ids: HashSet<Vec<u8>>,
}

impl IdentifierIndex {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut ids = HashSet::new();
        ids.try_reserve(capacity)
            .map_err(|_| FastaError::IndexAllocation)?;
        Ok(IdentifierIndex { ids })
    }

    /// The stored identifier equal to `id`, if any.
    #[inline]
    pub fn get(&self, id: &[u8]) -> Option<&[u8]> {
        self.ids.get(id).map(Vec::as_slice)
    }

    pub fn insert(&mut self, id: &[u8]) -> Result<()> {
        self.ids
            .try_reserve(1)
            .map_err(|_| FastaError::IndexAllocation)?;
        self.ids.insert(id.to_vec());
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    ExpectingFirstLine,
    InRecord,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub records: usize,
    /// Sequence bytes, line terminators excluded.
    pub residues: usize,
    pub lines: usize,
}

/// Single-pass FASTA checker. Feed it lines in order, then call
/// [`FastaValidator::finish`]. The first violation is returned and the
/// validator should not be used afterwards.
#[derive(Debug)]
pub struct FastaValidator {
    overlong: OverlongLines,
    max_line_len: usize,
    state: ScanState,
    index: IdentifierIndex,
    current_id: Vec<u8>,
    header_line: usize,
    record_len: usize,
    in_header_line: bool,
    id_pending: bool,
    summary: ValidationSummary,
}

impl FastaValidator {
    pub fn new(config: &ValidatorConfig) -> Result<Self> {
        Ok(FastaValidator {
            overlong: config.overlong,
            max_line_len: config.max_line_len.max(1),
            state: ScanState::ExpectingFirstLine,
            index: IdentifierIndex::with_capacity(config.index_capacity)?,
            current_id: Vec::new(),
            header_line: 0,
            record_len: 0,
            in_header_line: false,
            id_pending: false,
            summary: ValidationSummary::default(),
        })
    }

    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[inline]
    pub fn summary(&self) -> ValidationSummary {
        self.summary
    }

    /// Feeds one complete line, terminator optional.
    pub fn feed_line(&mut self, line: &[u8]) -> Result<()> {
        let chunk = LineChunk {
            line: self.summary.lines + 1,
            offset: 0,
            ends_line: true,
        };
        self.feed(line, chunk)
    }

    /// Feeds one chunk as produced by a [`LineSource`].
    pub fn feed(&mut self, bytes: &[u8], chunk: LineChunk) -> Result<()> {
        if !chunk.ends_line && self.overlong == OverlongLines::Reject {
            return Err(FastaError::LineTooLong {
                line: chunk.line,
                limit: self.max_line_len,
            });
        }

        if chunk.is_continuation() {
            if self.in_header_line {
                return self.header_continuation(bytes, chunk);
            }
            return self.sequence_line(bytes, chunk);
        }

        self.summary.lines += 1;
        if is_header(bytes) {
            self.header_line(bytes, chunk)
        } else {
            self.sequence_line(bytes, chunk)
        }
    }

    fn header_line(&mut self, line: &[u8], chunk: LineChunk) -> Result<()> {
        if self.state == ScanState::InRecord && self.record_len == 0 {
            return Err(self.empty_sequence());
        }

        let (id, complete) = identifier_token(line);
        self.current_id.clear();
        self.current_id.extend_from_slice(id);
        self.header_line = chunk.line;
        self.record_len = 0;
        self.state = ScanState::InRecord;
        self.in_header_line = !chunk.ends_line;
        self.summary.records += 1;

        self.id_pending = true;
        if complete || chunk.ends_line {
            self.commit_identifier()?;
        }
        Ok(())
    }

    /// Later pieces of an overlong header. Only an identifier still being
    /// read matters; the rest is description text.
    fn header_continuation(&mut self, part: &[u8], chunk: LineChunk) -> Result<()> {
        self.in_header_line = !chunk.ends_line;
        if self.id_pending {
            let (id, complete) = identifier_token(part);
            self.current_id.extend_from_slice(id);
            if complete || chunk.ends_line {
                self.commit_identifier()?;
            }
        }
        Ok(())
    }

    fn commit_identifier(&mut self) -> Result<()> {
        self.id_pending = false;
        if let Some(previous) = self.index.get(&self.current_id) {
            return Err(FastaError::DuplicateIdentifier {
                line: self.header_line,
                id: self.current_id.clone(),
                previous: previous.to_vec(),
            });
        }
        self.index.insert(&self.current_id)
    }

    fn sequence_line(&mut self, line: &[u8], chunk: LineChunk) -> Result<()> {
        if self.state == ScanState::ExpectingFirstLine {
            return Err(FastaError::MissingHeader { line: chunk.line });
        }

        check_line(line).map_err(|violation| FastaError::InvalidCharacter {
            line: chunk.line,
            violation: violation.shifted(chunk.offset),
        })?;

        // Terminators count toward the record, so a blank line is data.
        self.record_len += line.len();
        self.summary.residues += residue_count(line);
        Ok(())
    }

    fn empty_sequence(&self) -> FastaError {
        FastaError::EmptySequence {
            line: self.header_line,
            id: self.current_id.clone(),
        }
    }

    /// Ends the run. The last record must hold sequence data; an input with
    /// no lines at all counts as an empty sequence too.
    pub fn finish(self) -> Result<ValidationSummary> {
        if self.record_len == 0 {
            return Err(self.empty_sequence());
        }
        log::debug!(
            "validated {} records, {} residues over {} lines",
            self.summary.records,
            self.summary.residues,
            self.summary.lines
        );
        Ok(self.summary)
    }

    /// Drains `source` through the state machine.
    pub fn run<S: LineSource>(mut self, mut source: S) -> Result<ValidationSummary> {
        let mut buf = Vec::with_capacity(self.max_line_len.min(64 * 1024));
        while let Some(chunk) = source.next_chunk(&mut buf)? {
            self.feed(&buf, chunk)?;
        }
        self.finish()
    }
}
