//! A hashmap from packed sequence to occurrence count, and the FASTQ
//! pipeline built on top of it.

use crate::error::Error;
use crate::fastq;
use crate::pack;
use crate::short_seq::ShortSeq;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::path::Path;
use twox_hash::XxHash64;

type CounterMap = HashMap<ShortSeq, u64, BuildHasherDefault<XxHash64>>;

/// Deduplicating counter over packed sequences.
///
/// Built from any iterable of byte buffers or text (each element is packed
/// and its count incremented); the counter owns strong references to its
/// keys for its own lifetime. Uses `twox_hash::XxHash64` as the map's
/// hasher rather than the default SipHash — a non-cryptographic hash is the
/// right trade here since the keys are already validated, fixed-alphabet
/// packed sequences rather than attacker-controlled strings.
#[derive(Debug, Default)]
pub struct ShortSeqCounter {
    counts: CounterMap,
}

impl ShortSeqCounter {
    /// Packs every element of `sequences` and increments its count. Fails on
    /// the first element that doesn't pack (unsupported base, too long).
    pub fn from_sequences<I, T>(sequences: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut counts: CounterMap = CounterMap::default();
        for seq in sequences {
            let packed = pack::pack(seq)?;
            *counts.entry(packed).or_insert(0) += 1;
        }
        Ok(ShortSeqCounter { counts })
    }

    /// Number of distinct sequences seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts — the number of sequences that went in.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Count for a specific packed sequence; `0` if never seen.
    pub fn get(&self, seq: &ShortSeq) -> u64 {
        self.counts.get(seq).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ShortSeq, &u64)> {
        self.counts.iter()
    }
}

impl IntoIterator for ShortSeqCounter {
    type Item = (ShortSeq, u64);
    type IntoIter = std::collections::hash_map::IntoIter<ShortSeq, u64, BuildHasherDefault<XxHash64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Composes `FastqReader` and `ShortSeqCounter` into a single streaming
/// pass: opens `path` (transparently gzip-decompressing if the content is
/// gzip-magic-prefixed), packs each record's sequence line, and returns the
/// resulting counts.
pub fn read_and_count_fastq(path: impl AsRef<Path>) -> Result<ShortSeqCounter, Error> {
    let reader = fastq::open_fastq(path)?;
    let mut counts: CounterMap = CounterMap::default();
    #[cfg(feature = "trace")]
    let mut records = 0u64;
    for sequence in reader {
        let sequence = sequence?;
        let packed = pack::pack(sequence)?;
        *counts.entry(packed).or_insert(0) += 1;
        #[cfg(feature = "trace")]
        {
            records += 1;
        }
    }

    #[cfg(feature = "trace")]
    tracing::trace!(records, distinct = counts.len(), "finished counting FASTQ file");

    Ok(ShortSeqCounter { counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let counter = ShortSeqCounter::from_sequences(vec![b"ATGC".to_vec(); 10]).unwrap();
        assert_eq!(counter.len(), 1);
        assert_eq!(counter.total(), 10);
        let key = pack::pack("ATGC").unwrap();
        assert_eq!(counter.get(&key), 10);
    }

    #[test]
    fn distinct_sequences_get_distinct_entries() {
        let counter = ShortSeqCounter::from_sequences(vec!["ATGC", "ATGA", "ATGC"]).unwrap();
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn propagates_pack_errors() {
        let err = ShortSeqCounter::from_sequences(vec!["ATGN"]).unwrap_err();
        assert!(err.to_string().contains("Unsupported base character"));
    }

    #[test]
    fn empty_input_yields_empty_counter() {
        let counter = ShortSeqCounter::from_sequences(Vec::<&str>::new()).unwrap();
        assert!(counter.is_empty());
        assert_eq!(counter.total(), 0);
    }
}
