//! FASTQ record reader.
//!
//! A FASTQ record is four lines: `@id`, sequence, `+` (optionally followed
//! by a repeated id), and a quality string. This reader yields just the
//! sequence line of each record as a byte vector, and transparently unwraps
//! gzip-compressed input by sniffing the first two bytes of the stream for
//! the gzip magic `\x1f\x8b` (mirroring the way `framed::decompress` sniffs
//! the LZ4 frame magic before committing to a decode strategy).

use crate::error::Error;
use flate2::bufread::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Streams FASTQ records out of any `BufRead`, yielding each record's
/// sequence line.
pub struct FastqReader<R: BufRead> {
    inner: R,
    line_no: usize,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(inner: R) -> Self {
        FastqReader { inner, line_no: 0 }
    }

    fn read_line(&mut self) -> Result<Option<Vec<u8>>, Error> {
        let mut buf = Vec::new();
        let n = self.inner.read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        while matches!(buf.last(), Some(b'\n') | Some(b'\r')) {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Reads the next record, returning its sequence line. Returns `None` at
    /// clean end of stream.
    pub fn next_sequence(&mut self) -> Result<Option<Vec<u8>>, Error> {
        let header = match self.read_line()? {
            None => return Ok(None),
            Some(line) => line,
        };
        if header.first() != Some(&b'@') {
            return Err(Error::MalformedRecord {
                reason: format!(
                    "line {}: header must start with '@', got {:?}",
                    self.line_no,
                    String::from_utf8_lossy(&header)
                ),
            });
        }

        let sequence = self.read_line()?.ok_or_else(|| Error::MalformedRecord {
            reason: format!("line {}: truncated before sequence line", self.line_no + 1),
        })?;

        let plus = self.read_line()?.ok_or_else(|| Error::MalformedRecord {
            reason: format!("line {}: truncated before '+' line", self.line_no + 1),
        })?;
        if plus.first() != Some(&b'+') {
            return Err(Error::MalformedRecord {
                reason: format!("line {}: expected '+' separator", self.line_no),
            });
        }

        let quality = self.read_line()?.ok_or_else(|| Error::MalformedRecord {
            reason: format!("line {}: truncated before quality line", self.line_no + 1),
        })?;
        if quality.len() != sequence.len() {
            return Err(Error::MalformedRecord {
                reason: format!(
                    "line {}: quality length {} does not match sequence length {}",
                    self.line_no,
                    quality.len(),
                    sequence.len()
                ),
            });
        }

        #[cfg(feature = "trace")]
        tracing::trace!(line = self.line_no, len = sequence.len(), "read FASTQ record");

        Ok(Some(sequence))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<Vec<u8>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sequence().transpose()
    }
}

/// Opens `path`, sniffing for the gzip magic bytes and transparently
/// wrapping the file in a `MultiGzDecoder` when present.
pub fn open_fastq(path: impl AsRef<Path>) -> Result<FastqReader<Box<dyn BufRead>>, Error> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut prefix = [0u8; 2];
    let peeked = peek(&mut reader, &mut prefix)?;

    let boxed: Box<dyn BufRead> = if peeked == GZIP_MAGIC.len() && prefix == GZIP_MAGIC {
        Box::new(BufReader::new(MultiGzDecoder::new(reader)))
    } else {
        Box::new(reader)
    };
    Ok(FastqReader::new(boxed))
}

/// Reads up to `buf.len()` bytes without consuming them from `reader`.
fn peek<R: BufRead>(reader: &mut R, buf: &mut [u8]) -> Result<usize, Error> {
    let available = reader.fill_buf()?;
    let n = available.len().min(buf.len());
    buf[..n].copy_from_slice(&available[..n]);
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(s: &str) -> FastqReader<Cursor<&[u8]>> {
        FastqReader::new(Cursor::new(s.as_bytes()))
    }

    #[test]
    fn reads_single_record() {
        let mut r = reader("@read1\nACGT\n+\nIIII\n");
        assert_eq!(r.next_sequence().unwrap(), Some(b"ACGT".to_vec()));
        assert_eq!(r.next_sequence().unwrap(), None);
    }

    #[test]
    fn reads_multiple_records() {
        let mut r = reader("@r1\nACGT\n+\nIIII\n@r2\nTTTT\n+\nJJJJ\n");
        let seqs: Vec<_> = r.map(|res| res.unwrap()).collect();
        assert_eq!(seqs, vec![b"ACGT".to_vec(), b"TTTT".to_vec()]);
    }

    #[test]
    fn rejects_missing_at_sign() {
        let mut r = reader("read1\nACGT\n+\nIIII\n");
        assert!(r.next_sequence().is_err());
    }

    #[test]
    fn rejects_truncated_record() {
        let mut r = reader("@read1\nACGT\n+\n");
        assert!(r.next_sequence().is_err());
    }

    #[test]
    fn rejects_quality_length_mismatch() {
        let mut r = reader("@read1\nACGT\n+\nII\n");
        assert!(r.next_sequence().is_err());
    }
}
