//! Container assembly and parsing.
//!
//! The container is the self-describing on-wire form of an encoded
//! buffer:
//!
//! ```text
//! +--------------------+
//! | table_len (4)      |  u32 big-endian, length N of the table region
//! +--------------------+
//! | frequency table    |  N bytes, see `freq` for the entry format
//! +--------------------+
//! | padding (1)        |  pad bits P in the final payload byte, 0..=7
//! +--------------------+
//! | payload            |  packed codeword bits, MSB-first, last byte
//! | (variable)         |  padded with P zero bits
//! +--------------------+
//! ```
//!
//! Parsing validates structure before touching content: every length
//! check happens against the actual buffer, so a truncated or
//! inconsistent container is rejected without reading past its end.

use crate::error::{ContainerError, Result};
use crate::freq::FrequencyTable;

/// Size of the big-endian table-length prefix.
const LEN_PREFIX_SIZE: usize = 4;

/// A parsed container: the frequency table, the pad-bit count, and the
/// packed payload (borrowed from the input buffer).
#[derive(Debug)]
pub struct Container<'a> {
    pub table: FrequencyTable,
    pub padding: u8,
    pub payload: &'a [u8],
}

impl Container<'_> {
    /// Number of meaningful bits in the payload.
    pub fn payload_bits(&self) -> usize {
        self.payload.len() * 8 - self.padding as usize
    }
}

/// Assemble a container from its parts.
///
/// `padding` must already be in 0..=7; the bit packer guarantees this
/// for payloads it produced.
pub fn assemble(table: &FrequencyTable, padding: u8, payload: &[u8]) -> Vec<u8> {
    debug_assert!(padding < 8);

    let table_wire = table.to_wire();
    let mut out =
        Vec::with_capacity(LEN_PREFIX_SIZE + table_wire.len() + 1 + payload.len());
    out.extend_from_slice(&(table_wire.len() as u32).to_be_bytes());
    out.extend_from_slice(&table_wire);
    out.push(padding);
    out.extend_from_slice(payload);
    out
}

/// Parse a container, validating every structural invariant.
///
/// # Errors
/// - `ContainerError::TooShort` if the length prefix or pad byte is cut
/// - `ContainerError::TableOverrun` if the declared table length runs
///   past the buffer
/// - `ContainerError::PaddingOutOfRange` for a pad byte above 7
/// - `ContainerError::PaddingExceedsPayload` for non-zero padding on an
///   empty payload
/// - `FrequencyTableError` (as `Error::FrequencyTable`) if the table
///   region fails validation
pub fn parse(bytes: &[u8]) -> Result<Container<'_>> {
    if bytes.len() < LEN_PREFIX_SIZE {
        return Err(ContainerError::TooShort {
            required: LEN_PREFIX_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    // length prefix is checked above
    let table_len = u32::from_be_bytes(bytes[..LEN_PREFIX_SIZE].try_into().unwrap()) as usize;
    let rest = &bytes[LEN_PREFIX_SIZE..];

    if table_len > rest.len() {
        return Err(ContainerError::TableOverrun {
            declared: table_len,
            available: rest.len(),
        }
        .into());
    }
    let (table_wire, rest) = rest.split_at(table_len);

    let Some((&padding, payload)) = rest.split_first() else {
        return Err(ContainerError::TooShort {
            required: bytes.len() + 1,
            actual: bytes.len(),
        }
        .into());
    };

    if padding > 7 {
        return Err(ContainerError::PaddingOutOfRange(padding).into());
    }
    if padding > 0 && payload.is_empty() {
        return Err(ContainerError::PaddingExceedsPayload {
            padding,
            payload_bytes: 0,
        }
        .into());
    }

    let table = FrequencyTable::from_wire(table_wire)?;

    Ok(Container {
        table,
        padding,
        payload,
    })
}
