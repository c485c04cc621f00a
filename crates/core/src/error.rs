//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! The codec never logs or prints; callers decide what any failure
//! looks like to a user.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Empty input: encode called with nothing to compress
/// - Container: structurally truncated or inconsistent container on decode
/// - Frequency table: the stored table region fails validation
/// - Truncated bitstream: decode ran out of bits mid-codeword
/// - Bit I/O: reading/writing bits from/to byte buffers
/// - I/O: whole-file helpers only
#[derive(Debug, Error)]
pub enum Error {
    /// Encode was called with zero-length data; there are no symbols
    /// to build a tree from. Callers wanting to "compress" empty input
    /// should special-case it instead of invoking the codec.
    #[error("empty input: no symbols to encode")]
    EmptyInput,

    /// Container is structurally malformed (truncated or with
    /// inconsistent length fields).
    #[error("malformed container: {0}")]
    Container(#[from] ContainerError),

    /// The serialized frequency table fails to parse.
    #[error("corrupt frequency table: {0}")]
    FrequencyTable(#[from] FrequencyTableError),

    /// The decoded bit sequence ended without returning to the tree
    /// root, i.e. mid-codeword. `position` is the bit index at which
    /// the bits ran out.
    #[error("truncated bitstream: codeword incomplete at bit {position}")]
    TruncatedBitstream { position: usize },

    /// Bit I/O operation failed (e.g., reading past the valid bits).
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// File I/O error from the whole-file helpers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural container errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Buffer is too short to hold the next required field.
    #[error("container too short: need at least {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    /// Declared frequency-table length runs past the end of the buffer.
    #[error("table length {declared} exceeds remaining {available} bytes")]
    TableOverrun { declared: usize, available: usize },

    /// Padding byte is outside the valid 0..=7 range.
    #[error("padding length {0} out of range 0..=7")]
    PaddingOutOfRange(u8),

    /// Non-zero padding declared but the payload has no bytes to pad.
    #[error("padding {padding} declared for a {payload_bytes}-byte payload")]
    PaddingExceedsPayload { padding: u8, payload_bytes: usize },

    /// Decoded symbol count disagrees with the stored frequency table:
    /// the payload is shorter or longer than the table implies.
    #[error("payload length mismatch: table implies {expected} symbols, decoded {actual}")]
    PayloadLengthMismatch { expected: u64, actual: u64 },
}

/// Frequency-table parse errors.
#[derive(Debug, Error)]
pub enum FrequencyTableError {
    /// Table region holds zero entries; a decodable container always
    /// carries at least one symbol.
    #[error("table is empty")]
    Empty,

    /// Table byte length is not a whole number of entries.
    #[error("table length {0} is not a multiple of the entry size")]
    InvalidLength(usize),

    /// An entry carries a zero count; absent symbols are omitted, not
    /// stored with count zero.
    #[error("symbol {symbol:#04x} has zero count")]
    ZeroCount { symbol: u8 },

    /// Symbols are not strictly ascending (duplicate or out of order).
    #[error("symbol {symbol:#04x} out of order")]
    SymbolOrder { symbol: u8 },
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the valid bits of the stream.
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// Attempted to read more bits than remain.
    #[error("insufficient bits: requested {requested}, available {available}")]
    InsufficientBits { requested: usize, available: usize },

    /// Invalid bit count for a single call (more than 64 bits).
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Type alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;
