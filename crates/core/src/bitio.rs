//! Bit packing and unpacking for Huffman codewords.
//!
//! `BitWriter` groups bits eight at a time, MSB-first within each byte,
//! and zero-pads the final partial byte; the pad count (0..=7) is part
//! of its output so the container can record it. `BitReader` expands
//! bytes back into bits, MSB-first, bounded by an explicit valid-bit
//! limit so trailing pad bits are never surfaced to the decoder.
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! let (bytes, padding) = writer.finish();
//! assert_eq!(bytes, vec![0b1011_1000]);
//! assert_eq!(padding, 3);
//!
//! let mut reader = BitReader::new(&bytes, bytes.len() * 8 - padding as usize);
//! assert_eq!(reader.read_bits(5).unwrap(), 0b10111);
//! assert!(reader.is_empty());
//! ```

use crate::error::{BitIoError, Result};

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `filled` bits of the last byte of `bytes` are significant when
///   `filled > 0`; the rest of that byte is zero
/// - `filled` is always in 0..8
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Significant bits in the last byte of `bytes` (0 when the output
    /// ends on a byte boundary).
    filled: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the lowest `count` bits of `value`, most significant of
    /// those bits first.
    ///
    /// # Errors
    /// `BitIoError::InvalidBitCount` if `count > 64`.
    pub fn write_bits(&mut self, value: u64, count: usize) -> Result<()> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        for i in (0..count).rev() {
            self.push_bit((value >> i) & 1 == 1);
        }
        Ok(())
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        if self.filled == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - self.filled);
        }
        self.filled = (self.filled + 1) % 8;
    }

    /// Total bits written so far.
    pub fn bit_len(&self) -> usize {
        if self.filled == 0 {
            self.bytes.len() * 8
        } else {
            (self.bytes.len() - 1) * 8 + self.filled as usize
        }
    }

    /// Finish writing and return the packed bytes together with the
    /// number of zero pad bits (0..=7) in the final byte.
    ///
    /// The pad bits are already present: a partial final byte was
    /// zero-initialized when it was pushed.
    pub fn finish(self) -> (Vec<u8>, u8) {
        let padding = if self.filled == 0 {
            0
        } else {
            8 - self.filled
        };
        (self.bytes, padding)
    }
}

/// Reads bits MSB-first from a byte buffer, up to a valid-bit limit.
///
/// The limit is how the decoder drops container padding: construct the
/// reader with `payload.len() * 8 - padding` and the pad bits become
/// unreachable.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next bit to read (0 = MSB of first byte).
    position: usize,
    /// Total valid bits; never exceeds `data.len() * 8`.
    limit: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` exposing only the first `valid_bits`
    /// bits. A limit beyond the buffer is clamped to the buffer.
    pub fn new(data: &'a [u8], valid_bits: usize) -> Self {
        Self {
            data,
            position: 0,
            limit: valid_bits.min(data.len() * 8),
        }
    }

    /// Read `count` bits (0..=64), returned in the low bits of the
    /// result with the first bit read in the highest of them.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if `count > 64`
    /// - `BitIoError::InsufficientBits` if fewer than `count` valid
    ///   bits remain
    pub fn read_bits(&mut self, count: usize) -> Result<u64> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        if count > self.remaining() {
            return Err(BitIoError::InsufficientBits {
                requested: count,
                available: self.remaining(),
            }
            .into());
        }
        let mut value = 0u64;
        for _ in 0..count {
            let byte = self.data[self.position / 8];
            let bit = (byte >> (7 - self.position % 8)) & 1;
            value = (value << 1) | bit as u64;
            self.position += 1;
        }
        Ok(value)
    }

    /// Read a single bit.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` if no valid bits remain.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.position >= self.limit {
            return Err(BitIoError::UnexpectedEof.into());
        }
        let byte = self.data[self.position / 8];
        let bit = (byte >> (7 - self.position % 8)) & 1;
        self.position += 1;
        Ok(bit == 1)
    }

    /// Valid bits not yet read.
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once every valid bit has been read.
    pub fn is_empty(&self) -> bool {
        self.position >= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_full_byte() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1011_0011, 8).unwrap();
        let (bytes, padding) = writer.finish();
        assert_eq!(bytes, vec![0b1011_0011]);
        assert_eq!(padding, 0);
    }

    #[test]
    fn partial_byte_is_zero_padded() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1, 1).unwrap();
        let (bytes, padding) = writer.finish();
        assert_eq!(bytes, vec![0b1000_0000]);
        assert_eq!(padding, 7);
    }

    #[test]
    fn padding_zero_on_byte_boundary() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xABCD, 16).unwrap();
        let (bytes, padding) = writer.finish();
        assert_eq!(bytes, vec![0xAB, 0xCD]);
        assert_eq!(padding, 0);
    }

    #[test]
    fn bit_len_tracks_partial_bytes() {
        let mut writer = BitWriter::new();
        assert_eq!(writer.bit_len(), 0);
        writer.write_bits(0b101, 3).unwrap();
        assert_eq!(writer.bit_len(), 3);
        writer.write_bits(0b10110, 5).unwrap();
        assert_eq!(writer.bit_len(), 8);
        writer.push_bit(true);
        assert_eq!(writer.bit_len(), 9);
    }

    #[test]
    fn round_trip_across_byte_boundaries() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3).unwrap();
        writer.write_bits(0b0110_1110_1, 9).unwrap();
        let (bytes, padding) = writer.finish();
        assert_eq!(padding, 4);

        let mut reader = BitReader::new(&bytes, bytes.len() * 8 - padding as usize);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(9).unwrap(), 0b0110_1110_1);
        assert!(reader.is_empty());
    }

    #[test]
    fn reader_limit_hides_pad_bits() {
        // 5 valid bits in one byte, 3 pad bits.
        let data = [0b1101_1000];
        let mut reader = BitReader::new(&data, 5);
        assert_eq!(reader.read_bits(5).unwrap(), 0b11011);
        assert!(matches!(
            reader.read_bit(),
            Err(crate::Error::BitIo(BitIoError::UnexpectedEof))
        ));
    }

    #[test]
    fn read_past_limit_reports_available() {
        let data = [0xFF, 0xFF];
        let mut reader = BitReader::new(&data, 16);
        reader.read_bits(10).unwrap();
        let err = reader.read_bits(7).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::BitIo(BitIoError::InsufficientBits {
                requested: 7,
                available: 6,
            })
        ));
    }

    #[test]
    fn limit_clamped_to_buffer() {
        let data = [0xF0];
        let mut reader = BitReader::new(&data, 1000);
        assert_eq!(reader.remaining(), 8);
        assert_eq!(reader.read_bits(8).unwrap(), 0xF0);
    }

    #[test]
    fn invalid_bit_count() {
        let mut writer = BitWriter::new();
        assert!(writer.write_bits(0, 65).is_err());
        let mut reader = BitReader::new(&[], 0);
        assert!(reader.read_bits(65).is_err());
    }

    #[test]
    fn bit_by_bit() {
        let mut writer = BitWriter::new();
        for &bit in &[true, false, true, true, false, false, true, false] {
            writer.push_bit(bit);
        }
        let (bytes, padding) = writer.finish();
        assert_eq!(bytes, vec![0b1011_0010]);
        assert_eq!(padding, 0);

        let mut reader = BitReader::new(&bytes, 8);
        let expected = [true, false, true, true, false, false, true, false];
        for &exp in &expected {
            assert_eq!(reader.read_bit().unwrap(), exp);
        }
    }
}
