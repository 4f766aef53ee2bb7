//! Row kernels that fill several rows of the virtual cost matrix per pass.
//!
//! Every cell depends on its left, upper and upper-left neighbours, so the
//! cells of one row cannot be computed independently. Both kernels here
//! process a group of `N` consecutive rows at once instead:
//!
//! * [`Wavefront`] skews the group so that lane `k` works on row
//!   `first_row + k + 1` one column behind lane `k - 1`. At every step the
//!   upper neighbour of lane `k` is the value lane `k - 1` produced in the
//!   previous step, so all lanes advance together along an anti-diagonal.
//! * [`RowBlock`] walks the columns once for the whole group, threading each
//!   row's new cost into the row below it. The inner character and the cost
//!   of the row above the group are read once per column instead of `N`
//!   times.
//!
//! Both produce exactly the cells the scalar row kernel would. Only the last
//! row of a group is written back to the scratch row.

use crate::{
    number::Cost,
    simd::{Capability, Lanes, Strategy},
};

use super::row::fill_rows;

/// A kernel that advances the scratch row by a fixed number of rows.
pub trait RowKernel {
    /// Number of rows processed per call of `fill_rows`.
    const LANES: usize;

    /// Advances `row` from row `first_row` to row `first_row + LANES` of the
    /// virtual matrix, where `outer` holds the `LANES` characters of those
    /// rows.
    ///
    /// # Panics
    ///
    /// Will panic in debug builds if `outer.len() != LANES`, if `inner` is
    /// empty, or if `row.len() != inner.len()`.
    fn fill_rows<T: Eq + Copy, C: Cost>(row: &mut [C], first_row: usize, outer: &[T], inner: &[T]);
}

/// Diagonal skewing over `N` lanes.
#[derive(Copy, Clone, Debug, Default)]
pub struct Wavefront<const N: usize>;

impl<const N: usize> RowKernel for Wavefront<N> {
    const LANES: usize = N;

    fn fill_rows<T: Eq + Copy, C: Cost>(row: &mut [C], first_row: usize, outer: &[T], inner: &[T]) {
        debug_assert_eq!(outer.len(), N);
        debug_assert!(!inner.is_empty());
        debug_assert_eq!(row.len(), inner.len());

        let n = inner.len();
        let outer = Lanes::<T, N>::from_slice(outer);
        let one = Lanes::<C, N>::splat(C::ONE);

        // column 0 of each lane's row, and of the row above it
        let boundary = Lanes::<C, N>::from_fn(|k| C::from_usize(first_row + k + 1));
        let mut left = boundary;
        let mut diag = Lanes::<C, N>::from_fn(|k| C::from_usize(first_row + k));
        let mut chars = Lanes::<T, N>::splat(inner[0]);

        for step in 0..(n + N - 1) {
            // past the last column lane 0 only produces cells that are never read
            let (c, upper) = if step < n { (inner[step], row[step]) } else { (inner[n - 1], C::MAX) };

            chars = chars.shift_in(c);
            let up = left.shift_in(upper);
            let mut next = diag.add_ne(outer, chars).min(left.min(up).saturating_add(one));

            // lanes that have not reached column 1 stay on their boundary
            for k in (step + 1)..N {
                next.set_lane(k, boundary.lane(k));
            }

            if step + 1 >= N {
                row[step + 1 - N] = next.last();
            }

            left = next;
            diag = up;
        }
    }
}

/// `N` adjacent rows with one lookahead cost threaded between them.
#[derive(Copy, Clone, Debug, Default)]
pub struct RowBlock<const N: usize>;

impl<const N: usize> RowKernel for RowBlock<N> {
    const LANES: usize = N;

    fn fill_rows<T: Eq + Copy, C: Cost>(row: &mut [C], first_row: usize, outer: &[T], inner: &[T]) {
        debug_assert_eq!(outer.len(), N);
        debug_assert_eq!(row.len(), inner.len());

        let chars: [T; N] = core::array::from_fn(|k| outer[k]);

        // `costs[k]` is the previous column of row `first_row + k`, and
        // `lookahead` that of the last row in the block.
        let mut costs: [C; N] = core::array::from_fn(|k| C::from_usize(first_row + k));
        let mut lookahead = C::from_usize(first_row + N);

        for (cell, &c) in row.iter_mut().zip(inner) {
            let mut up = *cell;
            for k in 0..N {
                let diag = costs[k];
                let left = if k + 1 < N { costs[k + 1] } else { lookahead };
                let cost = if chars[k] == c {
                    diag
                } else {
                    diag.min(left).min(up).saturating_add(C::ONE)
                };
                costs[k] = up;
                up = cost;
            }
            lookahead = up;
            *cell = up;
        }
    }
}

/// Fills the virtual matrix of `outer` against `inner` starting from a seeded
/// `row`, leaving its last row in `row`.
///
/// The bulk of the rows runs through the kernel picked by `strategy` at the
/// width of `capability`, in strides of that width. Rows left over after the
/// last full stride go through the scalar row kernel.
pub fn fill_matrix<T: Eq + Copy, C: Cost>(
    outer: &[T],
    inner: &[T],
    row: &mut [C],
    capability: Capability,
    strategy: Strategy,
) {
    if inner.is_empty() {
        return;
    }

    let done = match (strategy, capability) {
        (Strategy::Scalar, _) | (_, Capability::Scalar) => 0,
        (Strategy::Wavefront, Capability::Lanes4) => drive::<Wavefront<4>, _, _>(outer, inner, row),
        (Strategy::Wavefront, Capability::Lanes8) => drive::<Wavefront<8>, _, _>(outer, inner, row),
        (Strategy::Wavefront, Capability::Lanes16) => drive::<Wavefront<16>, _, _>(outer, inner, row),
        (Strategy::RowBlock, Capability::Lanes4) => drive::<RowBlock<4>, _, _>(outer, inner, row),
        (Strategy::RowBlock, Capability::Lanes8) => drive::<RowBlock<8>, _, _>(outer, inner, row),
        (Strategy::RowBlock, Capability::Lanes16) => drive::<RowBlock<16>, _, _>(outer, inner, row),
    };

    fill_rows(row, done, &outer[done..], inner);
}

/// Runs `K` over every full group of `K::LANES` rows and returns the number
/// of rows processed.
fn drive<K: RowKernel, T: Eq + Copy, C: Cost>(outer: &[T], inner: &[T], row: &mut [C]) -> usize {
    let mut first_row = 0;
    for group in outer.chunks_exact(K::LANES) {
        K::fill_rows(row, first_row, group, inner);
        first_row += K::LANES;
    }
    first_row
}
