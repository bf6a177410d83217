//! The dispatcher: validates input and picks a tier by length.

use crate::codec;
use crate::error::Error;
use crate::packed192::{self, Packed192};
use crate::packed64::{self, Packed64};
use crate::packed_var::{self, PackedVar};
use crate::short_seq::{ShortSeq, EMPTY};

/// Packs `input` (text or raw bytes — anything that derefs to `&[u8]`) into
/// the appropriate tier.
///
/// 1. Empty input returns [`EMPTY`].
/// 2. Longer than 1024 bases fails with [`Error::TooLong`].
/// 3. Every byte is validated against `{A,C,G,T,a,c,g,t}`, failing with
///    [`Error::UnsupportedBase`] on the first offender.
/// 4. The tier is chosen by length: `1..=32` -> `Packed64`, `33..=64` ->
///    `Packed192`, `65..=1024` -> `PackedVar`.
pub fn pack(input: impl AsRef<[u8]>) -> Result<ShortSeq, Error> {
    pack_bytes(input.as_ref())
}

/// Typed entry point for text input; behaves exactly like [`pack`].
pub fn from_str(text: &str) -> Result<ShortSeq, Error> {
    pack_bytes(text.as_bytes())
}

/// Typed entry point for byte-buffer input; behaves exactly like [`pack`].
pub fn from_bytes(bytes: &[u8]) -> Result<ShortSeq, Error> {
    pack_bytes(bytes)
}

fn pack_bytes(bytes: &[u8]) -> Result<ShortSeq, Error> {
    if bytes.is_empty() {
        return Ok(EMPTY);
    }
    if bytes.len() > packed_var::MAX_NT {
        return Err(Error::TooLong {
            length: bytes.len(),
        });
    }
    codec::validate(bytes)?;

    #[cfg(feature = "trace")]
    tracing::trace!(len = bytes.len(), "packing sequence");

    Ok(match bytes.len() {
        packed64::MIN_NT..=packed64::MAX_NT => ShortSeq::Seq64(Packed64::encode(bytes)),
        packed192::MIN_NT..=packed192::MAX_NT => ShortSeq::Seq192(Packed192::encode(bytes)),
        _ => ShortSeq::SeqVar(PackedVar::encode(bytes)),
    })
}

/// Inclusive length domain handled by the `Packed64` tier: `(1, 32)`.
pub fn get_domain_64() -> (usize, usize) {
    (packed64::MIN_NT, packed64::MAX_NT)
}

/// Inclusive length domain handled by the `Packed192` tier: `(33, 64)`.
pub fn get_domain_192() -> (usize, usize) {
    (packed192::MIN_NT, packed192::MAX_NT)
}

/// Inclusive length domain handled by the `PackedVar` tier: `(65, 1024)`.
pub fn get_domain_var() -> (usize, usize) {
    (packed_var::MIN_NT, packed_var::MAX_NT)
}
