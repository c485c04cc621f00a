//! huffpack-core: lossless Huffman byte-stream compression.
//!
//! Given arbitrary byte data, this library builds an optimal prefix-code
//! tree from observed symbol frequencies, packs the data into a
//! bitstream, and wraps it in a self-describing container (frequency
//! table + padding length + payload) so the original bytes can be
//! recovered exactly, by this or any conforming implementation.
//!
//! # Architecture
//!
//! Modules in dependency order:
//! - `error`: structured failure taxonomy
//! - `bitio`: MSB-first bit packing/unpacking with padding accounting
//! - `freq`: frequency counting and the table's wire encoding
//! - `tree`: deterministic Huffman tree construction and code derivation
//! - `container`: container assembly and parsing
//! - `codec`: encode/decode orchestration and whole-file helpers
//!
//! # Design Principles
//!
//! - **No panics**: all failure modes are typed errors
//! - **Deterministic**: identical input always yields an identical
//!   container; tree tie-breaks use an explicit secondary key
//! - **Pure**: no logging, no shared state between calls; memory is
//!   bounded by input size plus the 256-symbol alphabet
//!
//! # Example
//! ```
//! let encoded = huffpack_core::encode(b"abracadabra").unwrap();
//! let decoded = huffpack_core::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"abracadabra");
//! ```

pub mod bitio;
pub mod codec;
pub mod container;
pub mod error;
pub mod freq;
pub mod tree;

// Re-export the primary API surface
pub use codec::{decode, decode_file, encode, encode_file, SizeReport};
pub use error::{Error, Result};
