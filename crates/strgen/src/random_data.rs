//! Generate random strings for use in benchmarks and tests.

use rand::prelude::*;

/// Generate a randomized dataset of strings.
///
/// # Arguments:
///
/// * `cardinality`: number of strings to generate.
/// * `min_len`: minimum length of any string, in characters.
/// * `max_len`: maximum length of any string, in characters.
/// * `alphabet`: the alphabet from which to draw characters.
/// * `seed`: for the random number generator.
///
/// # Panics
///
/// * If `alphabet` is empty and a non-empty string is requested.
/// * If `min_len > max_len`.
#[must_use]
pub fn random_string(cardinality: usize, min_len: usize, max_len: usize, alphabet: &str, seed: u64) -> Vec<String> {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            random_units(len, &alphabet, &mut rng).into_iter().collect()
        })
        .collect()
}

/// Generate a sequence of `len` units drawn uniformly from `alphabet`.
///
/// # Panics
///
/// If `alphabet` is empty and `len` is not `0`.
pub fn random_units<T: Copy, R: Rng>(len: usize, alphabet: &[T], rng: &mut R) -> Vec<T> {
    (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
}

/// Generate a pair of strings of the given lengths with no character in
/// common, one drawn from `left` and the other from `right`.
///
/// The edit distance of such a pair is the length of the longer string.
///
/// # Panics
///
/// If either alphabet is empty and its string is not.
#[must_use]
pub fn disjoint_pair(len_a: usize, len_b: usize, left: &str, right: &str, seed: u64) -> (String, String) {
    let mut rng = StdRng::seed_from_u64(seed);
    let right = right.chars().filter(|c| !left.contains(*c)).collect::<Vec<_>>();
    let left = left.chars().collect::<Vec<_>>();
    let a = random_units(len_a, &left, &mut rng).into_iter().collect();
    let b = random_units(len_b, &right, &mut rng).into_iter().collect();
    (a, b)
}
