//! A `Cost` is the integer width in which the kernels fill the virtual cost
//! matrix.

use super::UInt;

/// Integer widths the row kernels compute in.
///
/// All lane arithmetic saturates at `Self::MAX` instead of wrapping. The
/// orchestrator only ever runs a width whose `LIMIT` exceeds every cell value
/// the virtual matrix can hold, so saturation is unreachable in practice.
pub trait Cost: UInt {
    /// The largest length, exclusive, of the longer input for which this width
    /// holds every cell of the matrix exactly.
    const LIMIT: usize;

    /// Adds two costs, saturating at `Self::MAX`.
    #[must_use]
    fn saturating_add(self, other: Self) -> Self;

    /// Whether this width can fill a matrix whose longer side has `len`
    /// characters.
    #[must_use]
    fn fits(len: usize) -> bool {
        len < Self::LIMIT
    }
}

/// Macro to implement `Cost` for the kernel widths.
macro_rules! impl_cost {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                #[allow(clippy::cast_possible_truncation)]
                const LIMIT: usize = if (<$ty>::MAX as u128) < (usize::MAX as u128) {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                fn saturating_add(self, other: Self) -> Self {
                    <$ty>::saturating_add(self, other)
                }
            }
        )*
    }
}

impl_cost!(u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::Cost;

    #[test]
    fn limits() {
        assert!(u16::fits(1_000));
        assert!(!u16::fits(usize::from(u16::MAX)));
        assert!(u32::fits(usize::from(u16::MAX)));
        assert!(u64::fits(usize::MAX - 1));
    }

    #[test]
    fn saturates() {
        assert_eq!(Cost::saturating_add(u16::MAX, 1), u16::MAX);
        assert_eq!(Cost::saturating_add(7_u32, 1), 8);
    }
}
