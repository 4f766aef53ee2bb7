//! Apply random edits to strings to build pairs with a bounded edit distance.

use rand::prelude::*;
use rayon::prelude::*;

use crate::random_data::random_units;

/// A single-character edit at a character index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Delete the character at the index.
    Del(usize),
    /// Insert a character before the index.
    Ins(usize, char),
    /// Replace the character at the index.
    Sub(usize, char),
}

/// Applies `edit` to `chars` in place.
///
/// # Panics
///
/// If the index of the edit is out of bounds for `chars`.
pub fn apply_edit(chars: &mut Vec<char>, edit: Edit) {
    match edit {
        Edit::Del(i) => {
            chars.remove(i);
        }
        Edit::Ins(i, c) => chars.insert(i, c),
        Edit::Sub(i, c) => chars[i] = c,
    }
}

/// Applies `edits` to `string`, in order.
///
/// # Panics
///
/// If the index of any edit is out of bounds at the time it is applied.
#[must_use]
pub fn apply_edits(string: &str, edits: &[Edit]) -> String {
    let mut chars = string.chars().collect::<Vec<_>>();
    for &edit in edits {
        apply_edit(&mut chars, edit);
    }
    chars.into_iter().collect()
}

/// Generates (but does not apply) a random edit to a string of `len`
/// characters.
///
/// An empty string can only receive an insertion.
///
/// # Panics
///
/// If `alphabet` is empty.
pub fn generate_random_edit<R: Rng>(len: usize, alphabet: &[char], rng: &mut R) -> Edit {
    let c = alphabet[rng.gen_range(0..alphabet.len())];
    if len == 0 {
        return Edit::Ins(0, c);
    }
    match rng.gen_range(0..3_u8) {
        0 => Edit::Ins(rng.gen_range(0..=len), c),
        1 => Edit::Sub(rng.gen_range(0..len), c),
        _ => Edit::Del(rng.gen_range(0..len)),
    }
}

/// Applies `num_edits` random edits to `string`.
///
/// The edit distance between `string` and the result is at most `num_edits`.
///
/// # Panics
///
/// If `alphabet` is empty and `num_edits` is not `0`.
pub fn apply_random_edits<R: Rng>(string: &str, alphabet: &[char], num_edits: usize, rng: &mut R) -> String {
    let mut chars = string.chars().collect::<Vec<_>>();
    for _ in 0..num_edits {
        let edit = generate_random_edit(chars.len(), alphabet, rng);
        apply_edit(&mut chars, edit);
    }
    chars.into_iter().collect()
}

/// Generates pairs of a random string of `len` characters and a copy of it
/// with up to `max_edits` random edits applied.
///
/// Pairs are generated in parallel. Pair `i` is drawn from its own generator
/// seeded with `seed + i`, so the output does not depend on scheduling.
///
/// # Panics
///
/// If `alphabet` is empty and `len` or `max_edits` is not `0`.
#[must_use]
pub fn near_duplicate_pairs(
    cardinality: usize,
    len: usize,
    alphabet: &str,
    max_edits: usize,
    seed: u64,
) -> Vec<(String, String)> {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    (0..cardinality)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let original = random_units(len, &alphabet, &mut rng).into_iter().collect::<String>();
            let num_edits = rng.gen_range(0..=max_edits);
            let edited = apply_random_edits(&original, &alphabet, num_edits, &mut rng);
            (original, edited)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::{apply_edits, apply_random_edits, generate_random_edit, near_duplicate_pairs, Edit};

    #[test]
    fn edits() {
        let x = "NAJIBEATSPEPPERS";
        let edits = [Edit::Del(0), Edit::Ins(0, 'M'), Edit::Sub(15, 'Z')];
        assert_eq!(apply_edits(x, &edits), "MAJIBEATSPEPPERZ");
    }

    #[test]
    fn empty_strings_grow() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert!(matches!(generate_random_edit(0, &['a'], &mut rng), Edit::Ins(0, 'a')));
        }
        let grown = apply_random_edits("", &['a', 'b'], 1, &mut rng);
        assert_eq!(grown.chars().count(), 1);
    }

    #[test]
    fn length_changes_are_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        let x = "ACCCGAGTCGTTT";
        for k in 0..10 {
            let y = apply_random_edits(x, &['A', 'C', 'G', 'T'], k, &mut rng);
            assert!(y.len().abs_diff(x.len()) <= k);
        }
    }

    #[test]
    fn pairs_are_reproducible() {
        let a = near_duplicate_pairs(16, 64, "ACGT", 4, 42);
        let b = near_duplicate_pairs(16, 64, "ACGT", 4, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|(x, _)| x.len() == 64));
    }
}
