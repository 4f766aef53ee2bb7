//! A `UInt` is the unsigned integer type in which a distance is returned.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Unsigned integers that a distance can be returned as.
pub trait UInt: Copy + Clone + Send + Sync + Debug + Display + Default + Hash + Eq + Ord {
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// The maximum possible value.
    const MAX: Self;

    /// Converts a `usize` to `Self`, saturating at `Self::MAX`.
    fn from_usize(n: usize) -> Self;

    /// Returns the number as a `usize`, saturating at `usize::MAX`.
    fn as_usize(self) -> usize;

    /// Returns the name of the type.
    #[must_use]
    fn type_name<'a>() -> &'a str {
        core::any::type_name::<Self>()
    }
}

/// Macro to implement `UInt` for all unsigned integer types.
macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl UInt for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                fn from_usize(n: usize) -> Self {
                    Self::try_from(n).unwrap_or(Self::MAX)
                }

                fn as_usize(self) -> usize {
                    usize::try_from(self).unwrap_or(usize::MAX)
                }
            }
        )*
    }
}

impl_uint!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::UInt;

    #[test]
    fn saturates_on_narrowing() {
        assert_eq!(<u8 as UInt>::from_usize(300), u8::MAX);
        assert_eq!(<u16 as UInt>::from_usize(300), 300);
        assert_eq!(<u128 as UInt>::from_usize(usize::MAX).as_usize(), usize::MAX);
    }

    #[test]
    fn names() {
        assert_eq!(<u32 as UInt>::type_name(), "u32");
    }
}
