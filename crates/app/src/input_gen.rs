//! Sample input generation.
//!
//! When `compress` runs without an input file, we generate data with
//! mixed compression characteristics: runs of one byte, text-like
//! sections over a small alphabet, and random bytes. The mix makes the
//! reported compression ratio interesting rather than degenerate.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample data with mixed compressibility.
///
/// Deterministic for a given `(seed, size_bytes)` pair.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(4096);
        match rng.gen_range(0..10u8) {
            // 40% runs of one byte (highly compressible)
            0..=3 => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(section));
            }
            // 40% text-like over a small alphabet
            4..=7 => {
                let alphabet = b"etaoin shrdlu.,!\n";
                for _ in 0..section {
                    data.push(alphabet[rng.gen_range(0..alphabet.len())]);
                }
            }
            // 20% random bytes (incompressible)
            _ => {
                for _ in 0..section {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}
