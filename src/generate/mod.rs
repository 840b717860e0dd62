use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a sequence of `length` symbols drawn uniformly from `alpha`,
/// reproducibly for a given `seed`.
///
/// ## Panics
///
/// `alpha` must not be empty when `length` is nonzero.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Generates `count` words over `alpha` with lengths between 1 and
/// `max_length`, inclusive, reproducibly for a given `seed`.
///
/// `alpha` should hold ASCII symbols so that every word is valid UTF-8;
/// other bytes are replaced when converting to [`String`].
///
/// ## Panics
///
/// `alpha` must not be empty and `max_length` must be nonzero.
#[must_use]
pub fn rand_words(alpha: &[u8], count: usize, max_length: usize, seed: u64) -> Vec<String> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let length = 1 + rng.next_u32() as usize % max_length;
            let word: Vec<u8> = (0..length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect();
            String::from_utf8_lossy(&word).into_owned()
        })
        .collect()
}
