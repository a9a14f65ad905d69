//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every random sample in the crate comes from a generator built here, so a
//! given seed always yields the same noise on every platform.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for a named generator from a base seed.
///
/// BLAKE3 hashes the base seed (little-endian) followed by the key, and the
/// first four bytes of the digest become the new seed.
pub fn derive_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[..4]);
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a named generator.
pub fn create_keyed_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_seed(base_seed, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        let values1: Vec<f32> = (0..100).map(|_| rng1.gen()).collect();
        let values2: Vec<f32> = (0..100).map(|_| rng2.gen()).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(43);

        let values1: Vec<f32> = (0..10).map(|_| rng1.gen()).collect();
        let values2: Vec<f32> = (0..10).map(|_| rng2.gen()).collect();

        assert_ne!(values1, values2);
    }

    #[test]
    fn test_seed_derivation() {
        assert_eq!(derive_seed(42, "noise"), derive_seed(42, "noise"));
        assert_ne!(derive_seed(42, "noise"), derive_seed(42, "tone"));
        assert_ne!(derive_seed(42, "noise"), derive_seed(43, "noise"));
    }

    #[test]
    fn test_keyed_rng_independence() {
        let mut a = create_keyed_rng(7, "left");
        let mut b = create_keyed_rng(7, "right");

        let values_a: Vec<u32> = (0..10).map(|_| a.gen()).collect();
        let values_b: Vec<u32> = (0..10).map(|_| b.gen()).collect();

        assert_ne!(values_a, values_b);
    }
}
