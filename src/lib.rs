#![forbid(unsafe_code)]

//! # shortseq
//!
//! A compact, immutable representation of short DNA sequences (alphabet
//! `{A, C, T, G}`, length 0..=1024), plus a high-throughput counter for
//! deduplicating sequences streamed out of FASTQ files.
//!
//! Sequences are packed 2 bits per base across one of three size tiers,
//! chosen automatically by length:
//!
//! | Tier | Length domain | Storage |
//! |---|---|---|
//! | `Packed64` | 1..=32 | one `u64` |
//! | `Packed192` | 33..=64 | three `u64` words |
//! | `PackedVar` | 65..=1024 | heap block array, 32 bases/block |
//!
//! ## Quick start
//!
//! ```
//! use shortseq::{pack, EMPTY};
//!
//! # fn main() -> Result<(), shortseq::Error> {
//! let seq = pack("ATGC")?;
//! assert_eq!(seq.decode(), "ATGC");
//! assert_eq!(seq.get(-1)?, 'C');
//!
//! let other = pack("ATGA")?;
//! assert_eq!(seq.hamming(&other)?, 1);
//!
//! assert_eq!(pack("")?, EMPTY);
//! # Ok(())
//! # }
//! ```
//!
//! ## Counting deduplicated reads
//!
//! ```
//! use shortseq::ShortSeqCounter;
//!
//! # fn main() -> Result<(), shortseq::Error> {
//! let counter = ShortSeqCounter::from_sequences(vec![b"ATGC".to_vec(); 10])?;
//! assert_eq!(counter.len(), 1);
//! assert_eq!(counter.total(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! Packed values are immutable and pure-function accessors (decode, index,
//! slice, hash, Hamming distance) never allocate beyond the decoded output
//! they return, so sharing a `ShortSeq` across threads for read-only use
//! needs no synchronization.

mod bitops;
mod codec;
mod counter;
mod error;
mod fastq;
mod pack;
mod packed192;
mod packed64;
mod packed_var;
mod short_seq;

pub use counter::{read_and_count_fastq, ShortSeqCounter};
pub use error::Error;
pub use fastq::{open_fastq, FastqReader};
pub use pack::{from_bytes, from_str, get_domain_192, get_domain_64, get_domain_var, pack};
pub use short_seq::{ShortSeq, EMPTY};

/// Inclusive minimum length handled by the `Packed64` tier (`1`).
pub const MIN_64_NT: usize = packed64::MIN_NT;
/// Inclusive maximum length handled by the `Packed64` tier (`32`).
pub const MAX_64_NT: usize = packed64::MAX_NT;
/// Inclusive minimum length handled by the `Packed192` tier (`33`).
pub const MIN_192_NT: usize = packed192::MIN_NT;
/// Inclusive maximum length handled by the `Packed192` tier (`64`).
pub const MAX_192_NT: usize = packed192::MAX_NT;
/// Inclusive minimum length handled by the `PackedVar` tier (`65`).
pub const MIN_VAR_NT: usize = packed_var::MIN_NT;
/// Inclusive maximum length handled by the `PackedVar` tier, and the
/// longest sequence this crate can represent at all (`1024`).
pub const MAX_VAR_NT: usize = packed_var::MAX_NT;
