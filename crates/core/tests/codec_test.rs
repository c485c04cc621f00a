//! Integration tests for the full codec pipeline.
//!
//! These exercise end-to-end behavior: input -> frequency table ->
//! tree -> packed bits -> container -> parse -> rebuilt tree ->
//! recovered bytes, with verification that output matches input and
//! that damaged containers are rejected rather than silently
//! mis-decoded.

use huffpack_core::error::{ContainerError, FrequencyTableError};
use huffpack_core::freq::{FrequencyTable, ENTRY_SIZE};
use huffpack_core::tree::HuffmanTree;
use huffpack_core::{decode, encode, Error};

#[test]
fn round_trip_plain_text() {
    let input = b"the quick brown fox jumps over the lazy dog".to_vec();
    let encoded = encode(&input).expect("encode failed");
    let decoded = decode(&encoded).expect("decode failed");
    assert_eq!(decoded, input, "output doesn't match input");
}

#[test]
fn round_trip_all_symbols() {
    let input: Vec<u8> = (0..=255).collect();
    let encoded = encode(&input).expect("encode failed");
    let decoded = decode(&encoded).expect("decode failed");
    assert_eq!(decoded, input);
}

#[test]
fn round_trip_single_repeated_symbol() {
    // Degenerate one-leaf tree: the sole symbol still gets a one-bit
    // code, so four input bytes become four payload bits.
    let input = b"AAAA".to_vec();
    let encoded = encode(&input).expect("encode failed");
    let decoded = decode(&encoded).expect("decode failed");
    assert_eq!(decoded, input);
}

#[test]
fn round_trip_single_byte() {
    let encoded = encode(b"x").expect("encode failed");
    assert_eq!(decode(&encoded).expect("decode failed"), b"x");
}

#[test]
fn round_trip_skewed_distribution() {
    let mut input = vec![b'X'; 64 * 1024];
    input.extend_from_slice(b"rare tail bytes \x00\x01\xfe\xff");
    let encoded = encode(&input).expect("encode failed");

    // Heavily skewed input compresses well below half.
    assert!(encoded.len() < input.len() / 2);

    let decoded = decode(&encoded).expect("decode failed");
    assert_eq!(decoded, input);
}

#[test]
fn round_trip_binary_patterns() {
    let input: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
    let encoded = encode(&input).expect("encode failed");
    let decoded = decode(&encoded).expect("decode failed");
    assert_eq!(decoded, input);
}

#[test]
fn repeated_encodes_are_byte_identical() {
    let input = b"idempotent tree reconstruction relies on deterministic ties";
    let first = encode(input).expect("encode failed");
    let second = encode(input).expect("encode failed");
    assert_eq!(first, second);
}

#[test]
fn empty_input_is_a_typed_error() {
    assert!(matches!(encode(b""), Err(Error::EmptyInput)));
}

#[test]
fn payload_size_matches_code_length_sum() {
    // alphabet {a:3, b:4, c:2}: payload bits must equal
    // sum(code_length(sym) * freq(sym)) and the packed byte count must
    // be ceil(bits / 8).
    let input = b"aaabbbbcc";
    let table = FrequencyTable::tally(input);
    let codes = HuffmanTree::from_table(&table)
        .expect("tree build failed")
        .code_table()
        .expect("code derivation failed");

    let expected_bits: u64 = table
        .iter()
        .map(|(sym, freq)| codes[sym as usize].unwrap().len as u64 * freq)
        .sum();
    assert_eq!(expected_bits, 14);

    let encoded = encode(input).expect("encode failed");
    let header_len = 4 + table.distinct_symbols() * ENTRY_SIZE + 1;
    let payload_bytes = encoded.len() - header_len;
    assert_eq!(payload_bytes as u64, expected_bits.div_ceil(8));

    let padding = encoded[header_len - 1] as u64;
    assert_eq!(payload_bytes as u64 * 8 - padding, expected_bits);
}

#[test]
fn truncating_container_never_returns_wrong_data() {
    let input = b"truncation must fail loudly, not corrupt";
    let encoded = encode(input).expect("encode failed");

    for len in 0..encoded.len() {
        let result = decode(&encoded[..len]);
        match result {
            Err(Error::Container(_))
            | Err(Error::FrequencyTable(_))
            | Err(Error::TruncatedBitstream { .. }) => {}
            Err(other) => panic!("unexpected error kind at len {len}: {other}"),
            // Any truncation loses payload bits, so the decoded count
            // can never match the stored table.
            Ok(_) => panic!("truncated container decoded successfully at len {len}"),
        }
    }
}

#[test]
fn dropping_last_byte_is_rejected() {
    let input = b"aaabbbbcc";
    let encoded = encode(input).expect("encode failed");
    let truncated = &encoded[..encoded.len() - 1];
    assert!(matches!(
        decode(truncated),
        Err(Error::Container(_)) | Err(Error::TruncatedBitstream { .. })
    ));
}

#[test]
fn garbage_table_region_is_rejected() {
    let input = b"corrupt table detection";
    let mut encoded = encode(input).expect("encode failed");
    // Swap the first two table entries' symbols to break ordering.
    let first_symbol = encoded[4];
    encoded[4] = encoded[4 + ENTRY_SIZE];
    encoded[4 + ENTRY_SIZE] = first_symbol;
    assert!(matches!(
        decode(&encoded),
        Err(Error::FrequencyTable(FrequencyTableError::SymbolOrder { .. }))
    ));
}

#[test]
fn oversized_table_length_is_rejected() {
    let input = b"length fields are validated against the buffer";
    let mut encoded = encode(input).expect("encode failed");
    encoded[..4].copy_from_slice(&u32::MAX.to_be_bytes());
    assert!(matches!(
        decode(&encoded),
        Err(Error::Container(ContainerError::TableOverrun { .. }))
    ));
}

#[test]
fn decode_side_tree_matches_encode_side() {
    let input = b"both sides rebuild structurally equivalent trees";
    let encode_table = FrequencyTable::tally(input);
    let decode_table = FrequencyTable::from_wire(&encode_table.to_wire())
        .expect("wire round trip failed");

    let encode_codes = HuffmanTree::from_table(&encode_table)
        .unwrap()
        .code_table()
        .unwrap();
    let decode_codes = HuffmanTree::from_table(&decode_table)
        .unwrap()
        .code_table()
        .unwrap();
    assert_eq!(encode_codes, decode_codes);
}
