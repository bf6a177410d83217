use thiserror::Error;

/// Everything that can go wrong while packing, decoding, or counting
/// sequences. All validation happens before any allocation for a packed
/// value, so a failed `pack` never leaves behind a partially constructed
/// object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte outside `{A,C,G,T,a,c,g,t}` was found in the input.
    #[error("Unsupported base character {byte:#04x} at position {position}")]
    UnsupportedBase { byte: u8, position: usize },

    /// Input is longer than the crate can represent.
    #[error("sequence of length {length} is longer than 1024 bases")]
    TooLong { length: usize },

    /// Subscript fell outside `[-len, len)` after normalization.
    #[error("index {index} out of range for sequence of length {length}")]
    IndexOutOfRange { index: isize, length: usize },

    /// Hamming/XOR attempted between sequences of different length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A FASTQ record didn't follow the four-line `@id` / seq / `+` / qual cadence.
    #[error("malformed FASTQ record: {reason}")]
    MalformedRecord { reason: String },

    /// Wraps I/O failures encountered while streaming a FASTQ file.
    #[error("I/O error reading FASTQ input: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
