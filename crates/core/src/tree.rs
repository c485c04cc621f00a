//! Huffman tree construction and code derivation.
//!
//! The tree is built bottom-up from a frequency table: repeatedly merge
//! the two lowest-weight nodes until one root remains. Ties are broken
//! by an explicit insertion-order counter so the same table always
//! yields the same tree, on the encode side and when the decoder
//! rebuilds it from the stored table. Leaves are seeded in ascending
//! symbol order, so equal-weight leaves resolve by symbol value.
//!
//! Code derivation walks the tree with an explicit stack ('0' = left,
//! '1' = right). A single-leaf tree is special-cased: its sole symbol
//! gets the one-bit code `0`, since an empty codeword would produce an
//! undecodable zero-bit payload.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{BitIoError, Error, Result};
use crate::freq::FrequencyTable;

/// A node in the Huffman tree.
///
/// Strict binary: internal nodes always have exactly two children, and
/// only leaves carry a symbol.
#[derive(Debug, Clone)]
pub enum HuffmanNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// A codeword: the lowest `len` bits of `bits`, first path step in the
/// highest of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Per-symbol codewords; `None` for symbols absent from the input.
pub type CodeTable = [Option<Code>; 256];

/// Heap entry ordered by `(weight, order)`. `order` is the insertion
/// counter providing the deterministic tie-break.
#[derive(Debug)]
struct HeapEntry {
    weight: u64,
    order: u32,
    node: HuffmanNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.order.cmp(&other.order))
    }
}

/// An optimal prefix-code tree over the symbols of a frequency table.
///
/// Constructed fresh per encode and per decode; both sides build from
/// the same table and therefore get structurally identical trees.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build the tree from a non-empty frequency table.
    ///
    /// The first of the two nodes removed per merge becomes the left
    /// child. Weights from untrusted tables may be huge, so merged
    /// weights saturate instead of wrapping.
    ///
    /// # Errors
    /// `Error::EmptyInput` if the table has no symbols.
    pub fn from_table(table: &FrequencyTable) -> Result<Self> {
        let mut heap = BinaryHeap::with_capacity(table.distinct_symbols());
        let mut order = 0u32;
        for (symbol, weight) in table.iter() {
            heap.push(Reverse(HeapEntry {
                weight,
                order,
                node: HuffmanNode::Leaf { symbol, weight },
            }));
            order += 1;
        }

        if heap.is_empty() {
            return Err(Error::EmptyInput);
        }

        while heap.len() > 1 {
            // both pops are guarded by the loop condition
            let Reverse(left) = heap.pop().unwrap();
            let Reverse(right) = heap.pop().unwrap();
            let weight = left.weight.saturating_add(right.weight);
            heap.push(Reverse(HeapEntry {
                weight,
                order,
                node: HuffmanNode::Internal {
                    weight,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            }));
            order += 1;
        }

        // exactly one node remains
        let Reverse(entry) = heap.pop().unwrap();
        Ok(Self { root: entry.node })
    }

    /// Root node, the starting point for the decode walk.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Derive the per-symbol codewords by depth-first traversal with an
    /// explicit work stack.
    ///
    /// # Errors
    /// `BitIoError::InvalidBitCount` if a code would exceed 64 bits.
    /// Reaching that depth needs Fibonacci-like weights summing past
    /// 2^64, which no in-memory input can produce.
    pub fn code_table(&self) -> Result<CodeTable> {
        let mut table: CodeTable = [None; 256];

        if let HuffmanNode::Leaf { symbol, .. } = self.root {
            table[symbol as usize] = Some(Code { bits: 0, len: 1 });
            return Ok(table);
        }

        let mut stack: Vec<(&HuffmanNode, u64, u8)> = vec![(&self.root, 0, 0)];
        while let Some((node, bits, len)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    table[*symbol as usize] = Some(Code { bits, len });
                }
                HuffmanNode::Internal { left, right, .. } => {
                    if len >= 64 {
                        return Err(BitIoError::InvalidBitCount(len as usize + 1).into());
                    }
                    stack.push((right.as_ref(), (bits << 1) | 1, len + 1));
                    stack.push((left.as_ref(), bits << 1, len + 1));
                }
            }
        }

        Ok(table)
    }
}
