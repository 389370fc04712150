use thiserror::Error;

use crate::min_heap::HeapErr;

pub type Result<T> = std::result::Result<T, Zip301Error>;

#[derive(Debug, Error)]
pub enum Zip301Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("heap error: {0}")]
    Heap(#[from] HeapErr),

    #[error("malformed header at line {line}: {message}")]
    MalformedHeader { line: usize, message: String },

    #[error("invalid code {code:?} at line {line}")]
    InvalidCode { line: usize, code: String },

    #[error("symbol {symbol:#04x} appears twice in the code table")]
    DuplicateSymbol { symbol: u8 },

    /// Two codes in the table where one is a prefix of the other.
    #[error("code {code} collides with another code in the table")]
    AmbiguousCode { code: String },

    #[error("byte {symbol:#04x} not in encode table")]
    UnknownSymbol { symbol: u8 },

    /// The independently computed bit total disagrees with the packed stream.
    #[error("bit count mismatch: expected {expected}, packed {actual}")]
    BitCountMismatch { expected: u64, actual: u64 },

    #[error("payload truncated: need {expected} bytes, got {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    #[error("no code matches the bits ending at bit {bit_index}")]
    UnmatchedBits { bit_index: u64 },

    #[error("ran out of bits mid-code at bit {bit_index}")]
    IncompleteCode { bit_index: u64 },
}

impl Zip301Error {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Zip301Error::MalformedHeader {
            line,
            message: message.into(),
        }
    }
}
