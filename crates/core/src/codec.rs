//! Encode/decode orchestration.
//!
//! `encode` runs the full pipeline: tally frequencies, build the tree,
//! derive codewords, pack the input's codes into a bitstream, and wrap
//! everything in the container. `decode` inverts it: parse the
//! container, rebuild the identical tree from the stored table, and
//! walk the tree bit by bit.
//!
//! The file helpers read and write whole files around the buffer-level
//! operations and report the sizes a front-end displays.

use std::fs;
use std::path::Path;

use crate::bitio::{BitReader, BitWriter};
use crate::container;
use crate::error::{ContainerError, Error, Result};
use crate::freq::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};

/// Byte counts for one encode or decode operation, for display by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    /// Bytes read from the source (raw data on encode, container on
    /// decode).
    pub input_bytes: u64,
    /// Bytes produced (container on encode, raw data on decode).
    pub output_bytes: u64,
}

impl SizeReport {
    /// Output size as a fraction of input size.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// Compress `input` into a self-describing container.
///
/// # Errors
/// `Error::EmptyInput` for zero-length input; there are no symbols to
/// build a tree from.
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let table = FrequencyTable::tally(input);
    let tree = HuffmanTree::from_table(&table)?;
    let codes = tree.code_table()?;

    let mut writer = BitWriter::new();
    for &byte in input {
        // every input byte was tallied, so its code exists
        let code = codes[byte as usize].unwrap();
        writer.write_bits(code.bits, code.len as usize)?;
    }
    let (payload, padding) = writer.finish();

    Ok(container::assemble(&table, padding, &payload))
}

/// Recover the original bytes from a container produced by [`encode`].
///
/// # Errors
/// - `Error::Container` / `Error::FrequencyTable` for structural damage
/// - `Error::TruncatedBitstream` if the bits end mid-codeword
pub fn decode(bytes: &[u8]) -> Result<Vec<u8>> {
    let container = container::parse(bytes)?;
    let tree = HuffmanTree::from_table(&container.table)?;
    let mut reader = BitReader::new(container.payload, container.payload_bits());

    let root = tree.root();
    let output = if let HuffmanNode::Leaf { symbol, .. } = root {
        // Degenerate single-symbol tree: the sole codeword is one bit,
        // so each valid bit emits the symbol.
        vec![*symbol; reader.remaining()]
    } else {
        // At most one symbol per payload bit.
        let mut output = Vec::with_capacity(reader.remaining());
        let mut node = root;
        while !reader.is_empty() {
            let bit = reader.read_bit()?;
            node = match node {
                HuffmanNode::Internal { left, right, .. } => {
                    if bit {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    }
                }
                // the walk resets to root immediately after a leaf
                HuffmanNode::Leaf { .. } => unreachable!(),
            };
            if let HuffmanNode::Leaf { symbol, .. } = node {
                output.push(*symbol);
                node = root;
            }
        }
        if !std::ptr::eq(node, root) {
            return Err(Error::TruncatedBitstream {
                position: reader.position(),
            });
        }
        output
    };

    // The table fixes the exact symbol count; a payload yielding fewer
    // or more symbols was cut or spliced even if every codeword
    // decoded cleanly.
    let expected = container.table.total();
    if output.len() as u128 != expected {
        return Err(ContainerError::PayloadLengthMismatch {
            expected: expected.min(u64::MAX as u128) as u64,
            actual: output.len() as u64,
        }
        .into());
    }

    Ok(output)
}

/// Read `input` whole, encode it, and write the container to `output`.
///
/// Returns the sizes for display.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<SizeReport> {
    let data = fs::read(input)?;
    let encoded = encode(&data)?;
    fs::write(output, &encoded)?;
    Ok(SizeReport {
        input_bytes: data.len() as u64,
        output_bytes: encoded.len() as u64,
    })
}

/// Read a container from `input` whole, decode it, and write the
/// recovered bytes to `output`.
///
/// Returns the sizes for display.
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<SizeReport> {
    let data = fs::read(input)?;
    let decoded = decode(&data)?;
    fs::write(output, &decoded)?;
    Ok(SizeReport {
        input_bytes: data.len() as u64,
        output_bytes: decoded.len() as u64,
    })
}
