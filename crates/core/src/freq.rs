//! Byte frequency tables and their wire encoding.
//!
//! A `FrequencyTable` tallies how often each byte value occurs in an
//! input. The table travels inside every container so the decoder can
//! rebuild the exact tree the encoder used: it is stored as a sparse
//! list of fixed-width entries, one per symbol that occurs, in strictly
//! ascending symbol order:
//!
//! ```text
//! entry: [ symbol: u8 ][ count: u64 big-endian, non-zero ]
//! ```
//!
//! The table length is therefore always a multiple of 9 and the entry
//! count equals the alphabet size (1..=256). Ascending order makes the
//! encoding deterministic; the validation rules in `from_wire` reject
//! anything a conforming encoder cannot produce.

use crate::error::FrequencyTableError;

/// Bytes per serialized table entry: symbol + u64 count.
pub const ENTRY_SIZE: usize = 9;

/// Occurrence counts for each of the 256 byte values.
///
/// Dense storage internally; iteration and serialization are sparse
/// over the symbols with non-zero counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Count byte occurrences over `data`. Empty input yields an empty
    /// table; callers must check `is_empty` before building a tree.
    pub fn tally(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Occurrence count for `symbol` (zero if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols present.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True when no symbol occurs.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Total occurrences across all symbols, i.e. the length of the
    /// original input. Widened to u128 since stored counts are
    /// untrusted u64 values whose sum may overflow.
    pub fn total(&self) -> u128 {
        self.counts.iter().map(|&c| c as u128).sum()
    }

    /// Iterate `(symbol, count)` over present symbols in ascending
    /// symbol order. This order is what makes tree construction and
    /// serialization deterministic.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Serialize to the sparse wire form.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.distinct_symbols() * ENTRY_SIZE);
        for (symbol, count) in self.iter() {
            bytes.push(symbol);
            bytes.extend_from_slice(&count.to_be_bytes());
        }
        bytes
    }

    /// Parse the sparse wire form, enforcing every structural rule:
    /// whole entries only, at least one entry, strictly ascending
    /// symbols, non-zero counts.
    pub fn from_wire(bytes: &[u8]) -> Result<Self, FrequencyTableError> {
        if bytes.len() % ENTRY_SIZE != 0 {
            return Err(FrequencyTableError::InvalidLength(bytes.len()));
        }
        if bytes.is_empty() {
            return Err(FrequencyTableError::Empty);
        }

        let mut counts = [0u64; 256];
        let mut previous: Option<u8> = None;
        for entry in bytes.chunks_exact(ENTRY_SIZE) {
            let symbol = entry[0];
            // chunks_exact guarantees 8 bytes after the symbol
            let count = u64::from_be_bytes(entry[1..].try_into().unwrap());

            if count == 0 {
                return Err(FrequencyTableError::ZeroCount { symbol });
            }
            if previous.is_some_and(|p| symbol <= p) {
                return Err(FrequencyTableError::SymbolOrder { symbol });
            }
            previous = Some(symbol);
            counts[symbol as usize] = count;
        }

        Ok(Self { counts })
    }
}
