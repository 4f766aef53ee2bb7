//! A portable, fixed-width lane register.

use crate::number::Cost;

/// `N` values processed in lock-step.
///
/// The kernels are written against this type only; with the lane count fixed
/// at compile time the element-wise loops are unrolled and vectorized by the
/// compiler for whatever instruction set the build targets.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Lanes<T, const N: usize>([T; N]);

impl<T: Copy, const N: usize> Lanes<T, N> {
    /// Create a new `Lanes` from an array.
    #[inline]
    pub const fn new(values: [T; N]) -> Self {
        Self(values)
    }

    /// The number of lanes.
    #[inline]
    #[must_use]
    pub const fn lanes() -> usize {
        N
    }

    /// Every lane holds `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Lane `k` holds `f(k)`.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Create a new `Lanes` from the first `N` elements of a slice.
    ///
    /// # Panics
    ///
    /// Will panic if the slice has fewer than `N` elements.
    #[inline]
    pub fn from_slice(slice: &[T]) -> Self {
        debug_assert!(slice.len() >= N);
        Self::from_fn(|k| slice[k])
    }

    /// The value in lane `k`.
    ///
    /// # Panics
    ///
    /// Will panic if `k >= N`.
    #[inline]
    pub const fn lane(&self, k: usize) -> T {
        self.0[k]
    }

    /// Overwrites lane `k`.
    #[inline]
    pub fn set_lane(&mut self, k: usize, value: T) {
        self.0[k] = value;
    }

    /// The value in the last lane.
    #[inline]
    pub const fn last(&self) -> T {
        self.0[N - 1]
    }

    /// Shifts every lane up by one position: lane `k` receives lane `k - 1`,
    /// lane `0` receives `value` and the last lane is dropped.
    #[inline]
    #[must_use]
    pub fn shift_in(self, value: T) -> Self {
        Self::from_fn(|k| if k == 0 { value } else { self.0[k - 1] })
    }

    /// Returns the lanes as an array.
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.0
    }
}

impl<C: Cost, const N: usize> Lanes<C, N> {
    /// Lane-wise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|k| core::cmp::min(self.0[k], other.0[k]))
    }

    /// Lane-wise addition, saturating at `C::MAX`.
    #[inline]
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self::from_fn(|k| self.0[k].saturating_add(other.0[k]))
    }

    /// Adds one in every lane where `a` and `b` differ.
    #[inline]
    #[must_use]
    pub fn add_ne<T: Eq + Copy>(self, a: Lanes<T, N>, b: Lanes<T, N>) -> Self {
        Self::from_fn(|k| {
            if a.0[k] == b.0[k] {
                self.0[k]
            } else {
                self.0[k].saturating_add(C::ONE)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Lanes;

    #[test]
    fn shift_in() {
        let a = Lanes::new([1_u32, 2, 3, 4]);
        assert_eq!(a.shift_in(9), Lanes::new([9, 1, 2, 3]));
        assert_eq!(a.shift_in(9).last(), 3);
    }

    #[test]
    fn min_and_add() {
        let a = Lanes::new([1_u16, 5, 3, u16::MAX]);
        let b = Lanes::new([4_u16, 2, 3, 1]);
        assert_eq!(a.min(b), Lanes::new([1, 2, 3, 1]));
        assert_eq!(a.saturating_add(b), Lanes::new([5, 7, 6, u16::MAX]));
    }

    #[test]
    fn add_ne() {
        let costs = Lanes::<u32, 4>::splat(10);
        let x = Lanes::new(['a', 'b', 'c', 'd']);
        let y = Lanes::new(['a', 'x', 'c', 'y']);
        assert_eq!(costs.add_ne(x, y), Lanes::new([10, 11, 10, 11]));
    }

    #[test]
    fn from_fn_and_lanes() {
        let seq = Lanes::<u32, 8>::from_fn(|k| k as u32 + 1);
        assert_eq!(seq.to_array(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Lanes::<u32, 8>::lanes(), 8);
        assert_eq!(seq.lane(3), 4);
    }
}
