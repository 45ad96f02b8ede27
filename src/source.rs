use crate::config::DEFAULT_MAX_LINE_LEN;
use crate::error::{FastaError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Where a chunk sits within its physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChunk {
    /// 1-based number of the physical line.
    pub line: usize,
    /// Bytes of the same line delivered before this chunk.
    pub offset: usize,
    /// The chunk runs to the end of the line: it holds the terminator, or
    /// the input ends right after it.
    pub ends_line: bool,
}

impl LineChunk {
    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.offset > 0
    }
}

/// Produces successive lines, terminator included, in chunks of at most
/// a fixed number of bytes.
pub trait LineSource {
    /// Clears `buf` and fills it with the next chunk. Returns `Ok(None)` at
    /// end of input.
    fn next_chunk(&mut self, buf: &mut Vec<u8>) -> Result<Option<LineChunk>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_chunk(&mut self, buf: &mut Vec<u8>) -> Result<Option<LineChunk>> {
        (**self).next_chunk(buf)
    }
}

/// Bounded line reader over any `BufRead`.
pub struct LineReader<R: BufRead> {
    inner: R,
    max_line_len: usize,
    line: usize,
    offset: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_max_line_len(DEFAULT_MAX_LINE_LEN, inner)
    }

    pub fn with_max_line_len(max_line_len: usize, inner: R) -> Self {
        LineReader {
            inner,
            max_line_len: max_line_len.max(1),
            line: 0,
            offset: 0,
        }
    }

    #[inline]
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    fn read_bounded(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        loop {
            let room = self.max_line_len - buf.len();
            let (used, found_newline) = {
                let available = self.inner.fill_buf()?;
                if available.is_empty() {
                    return Ok(true);
                }
                let window = &available[..available.len().min(room)];
                match memchr::memchr(b'\n', window) {
                    Some(i) => {
                        buf.extend_from_slice(&window[..=i]);
                        (i + 1, true)
                    }
                    None => {
                        buf.extend_from_slice(window);
                        (window.len(), false)
                    }
                }
            };
            self.inner.consume(used);

            if found_newline {
                return Ok(true);
            }
            if buf.len() >= self.max_line_len {
                // A full chunk still ends the line when nothing follows it.
                return Ok(self.inner.fill_buf()?.is_empty());
            }
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_chunk(&mut self, buf: &mut Vec<u8>) -> Result<Option<LineChunk>> {
        buf.clear();
        let ends_line = self.read_bounded(buf)?;
        if buf.is_empty() {
            return Ok(None);
        }

        if self.offset == 0 {
            self.line += 1;
        }
        let chunk = LineChunk {
            line: self.line,
            offset: self.offset,
            ends_line,
        };

        if ends_line {
            self.offset = 0;
        } else {
            log::trace!(
                "line {} exceeds {} bytes, continuing in another chunk",
                self.line,
                self.max_line_len
            );
            self.offset += buf.len();
        }

        Ok(Some(chunk))
    }
}

/// `true` when the file name ends in the literal suffix `.gz`. The content
/// is never inspected.
pub fn is_gzip_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".gz")
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| FastaError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// A FASTA file opened for validation, plain or gzip-compressed. The file
/// handle is closed when the value is dropped.
pub enum FastaInput {
    Plain(LineReader<BufReader<File>>),
    Gzip(LineReader<BufReader<MultiGzDecoder<BufReader<File>>>>),
}

impl FastaInput {
    pub fn from_path<P: AsRef<Path>>(path: P, max_line_len: usize) -> Result<Self> {
        let path = path.as_ref();

        if is_gzip_path(path) {
            Self::from_gzip_file(path, max_line_len)
        } else {
            Self::from_file(path, max_line_len)
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, max_line_len: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = open_file(path)?;
        log::debug!("reading {} as plain text", path.display());
        let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        Ok(FastaInput::Plain(LineReader::with_max_line_len(max_line_len, reader)))
    }

    pub fn from_gzip_file<P: AsRef<Path>>(path: P, max_line_len: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = open_file(path)?;
        log::debug!("reading {} as gzip", path.display());
        let decoder = MultiGzDecoder::new(BufReader::new(file));
        let reader = BufReader::with_capacity(READ_BUFFER_SIZE, decoder);
        Ok(FastaInput::Gzip(LineReader::with_max_line_len(max_line_len, reader)))
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, FastaInput::Gzip(_))
    }
}

impl LineSource for FastaInput {
    fn next_chunk(&mut self, buf: &mut Vec<u8>) -> Result<Option<LineChunk>> {
        match self {
            FastaInput::Plain(reader) => reader.next_chunk(buf),
            FastaInput::Gzip(reader) => reader.next_chunk(buf),
        }
    }
}
