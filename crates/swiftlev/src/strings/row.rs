//! The scalar row kernel.
//!
//! The scratch row holds columns `1..=inner.len()` of one row of the virtual
//! cost matrix. Column `0` of row `i` is always `i` and is never stored.

use crate::{number::Cost, simd::Lanes};

/// Number of costs written per step when seeding a row.
const SEED_LANES: usize = 8;

/// Writes row `0` of the virtual matrix, i.e. `1..=row.len()`, into `row`.
pub fn seed_row<C: Cost>(row: &mut [C]) {
    let len = row.len();
    let step = Lanes::<C, SEED_LANES>::splat(C::from_usize(SEED_LANES));
    let mut next = Lanes::<C, SEED_LANES>::from_fn(|k| C::from_usize(k + 1));

    let mut chunks = row.chunks_exact_mut(SEED_LANES);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&next.to_array());
        next = next.saturating_add(step);
    }

    let tail = chunks.into_remainder();
    let offset = len - tail.len();
    for (j, cell) in tail.iter_mut().enumerate() {
        *cell = C::from_usize(offset + j + 1);
    }
}

/// Updates `row` in place from row `row_index` to row `row_index + 1` of the
/// virtual matrix, where `outer_char` is the character of that row.
///
/// For each column the new cost is the diagonal predecessor when the
/// characters are equal, and otherwise one more than the smallest of the
/// diagonal, left and upper neighbours.
///
/// # Panics
///
/// Will panic in debug builds if `row` and `inner` have different lengths.
#[inline]
pub fn fill_row<T: Eq + Copy, C: Cost>(row: &mut [C], row_index: usize, outer_char: T, inner: &[T]) {
    debug_assert_eq!(row.len(), inner.len());

    let mut diag = C::from_usize(row_index);
    let mut left = diag.saturating_add(C::ONE);

    for (cell, &c) in row.iter_mut().zip(inner) {
        let up = *cell;
        let cost = if outer_char == c {
            diag
        } else {
            diag.min(left).min(up).saturating_add(C::ONE)
        };
        *cell = cost;
        left = cost;
        diag = up;
    }
}

/// Runs `fill_row` for every character of `outer`, starting at row
/// `first_row`.
pub fn fill_rows<T: Eq + Copy, C: Cost>(row: &mut [C], first_row: usize, outer: &[T], inner: &[T]) {
    for (i, &c) in outer.iter().enumerate() {
        fill_row(row, first_row + i, c, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::{fill_row, fill_rows, seed_row};

    #[test]
    fn seeds() {
        for len in [0, 1, 7, 8, 9, 16, 23] {
            let mut row = vec![0_u32; len];
            seed_row(&mut row);
            let expected = (1..=len).map(|j| j as u32).collect::<Vec<_>>();
            assert_eq!(row, expected);
        }
    }

    #[test]
    fn one_row() {
        // row 1 of "k" against "kitten"
        let mut row = vec![0_u16; 6];
        seed_row(&mut row);
        fill_row(&mut row, 0, b'k', b"kitten");
        assert_eq!(row, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn kitten_sitting() {
        let (outer, inner) = (b"sitting", b"kitten");
        let mut row = vec![0_u64; inner.len()];
        seed_row(&mut row);
        fill_rows(&mut row, 0, outer, inner);
        assert_eq!(row.last().copied(), Some(3));
    }
}
