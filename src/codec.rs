//! Base codec table: ASCII `{A,C,G,T,a,c,g,t}` <-> 2-bit code.
//!
//! `A=0, C=1, G=2, T=3`. The mapping is arbitrary but fixed: any two codes
//! differ in exactly one or two bits, so `popcount(a ^ b) in {0,1,2}` holds
//! for all pairs, which is all the Hamming fold in the tier modules needs.

use crate::error::Error;
use fehler::{throw, throws};

const INVALID: u8 = 0xFF;

const fn build_forward() -> [u8; 256] {
    let mut table = [INVALID; 256];
    table[b'A' as usize] = 0;
    table[b'a' as usize] = 0;
    table[b'C' as usize] = 1;
    table[b'c' as usize] = 1;
    table[b'G' as usize] = 2;
    table[b'g' as usize] = 2;
    table[b'T' as usize] = 3;
    table[b't' as usize] = 3;
    table
}

/// ASCII byte -> 2-bit code, or `INVALID` for anything outside `ACGTacgt`.
static FORWARD: [u8; 256] = build_forward();

/// 2-bit code -> uppercase ASCII byte.
pub(crate) const REVERSE: [u8; 4] = [b'A', b'C', b'G', b'T'];

#[inline]
pub(crate) fn code_of(byte: u8) -> Option<u8> {
    let code = FORWARD[byte as usize];
    if code == INVALID {
        None
    } else {
        Some(code)
    }
}

#[inline]
pub(crate) fn char_of(code: u8) -> u8 {
    REVERSE[(code & 0b11) as usize]
}

/// Validates every byte of `bytes`, returning the offset of the first
/// unsupported byte as an error. Mirrors `header::Flags::parse`'s
/// "parse or throw" shape.
#[throws(Error)]
pub(crate) fn validate(bytes: &[u8]) {
    for (position, &byte) in bytes.iter().enumerate() {
        if code_of(byte).is_none() {
            throw!(Error::UnsupportedBase { byte, position });
        }
    }
}
