//! Levenshtein distance between sequences of characters.
//!
//! A distance is computed in four stages:
//!
//! 1. Empty inputs return the other input's length.
//! 2. The common prefix and suffix are trimmed ([`trim`]). If either
//!    remainder is empty, the other remainder's length is the distance.
//! 3. The longer remainder becomes the outer (row) sequence, so the scratch
//!    row only needs as many costs as the shorter remainder has characters.
//! 4. The scratch row is seeded with row `0` of the virtual cost matrix and
//!    advanced through every row ([`wavefront`] for full groups of rows,
//!    [`row`] for the rest). Its last cost is the distance.

mod scratch;

pub mod row;
pub mod trim;
pub mod wavefront;

use crate::{
    number::{Cost, UInt},
    simd::{Capability, Strategy},
};

use scratch::{infallible, Allocation, Buffered, Fallible, Growing, ScratchRow};

/// Characters compared per step when trimming.
const TRIM_GROUP: usize = 16;

/// Computes the Levenshtein distance between two strings.
///
/// The Levenshtein distance is defined as the minimum number of edits
/// needed to transform one string into the other, with the allowable
/// edit operations being insertion, deletion, or substitution of a
/// single character. Every edit costs `1`.
///
/// Characters are Unicode scalar values compared by equality, without any
/// normalization or case folding. ASCII inputs are compared byte by byte,
/// which gives the same result without decoding.
///
/// Counting by scalar values differs from counting by UTF-16 code units for
/// characters outside the Basic Multilingual Plane: `"😀"` is one edit away
/// from `""` here, but two UTF-16 units. Use [`levenshtein_units`] on
/// `str::encode_utf16` output for the UTF-16 distance.
///
/// The lane width is detected from the CPU once per process, and the scratch
/// row is allocated for this call only. Use [`Levenshtein`] to pin the width or
/// reuse the scratch row across calls.
///
/// The result saturates at `U::MAX` if `U` is too narrow for it.
///
/// # Arguments
///
/// * `a` - The first string.
/// * `b` - The second string.
///
/// # Examples
///
/// ```
/// use swiftlev::strings::levenshtein;
///
/// let a = "NAJIBEATSPEPPERS";
/// let b = "NAJIBPEPPERSEATS";
///
/// let distance: u16 = levenshtein(a, b);
///
/// assert_eq!(distance, 8);
///
/// let a = "TOMEATSWHATFOODEATS";
/// let b = "FOODEATSWHATTOMEATS";
///
/// let distance: u16 = levenshtein(a, b);
///
/// assert_eq!(distance, 6);
/// ```
///
/// # References
///
/// * [Levenshtein distance](https://en.wikipedia.org/wiki/Levenshtein_distance)
#[must_use]
pub fn levenshtein<U: UInt>(a: &str, b: &str) -> U {
    let mut scratch = ScratchRow::default();
    let distance = infallible(str_distance::<Growing>(
        a,
        b,
        &mut scratch,
        Capability::detect(),
        Strategy::default(),
    ));
    U::from_usize(distance)
}

/// Like [`levenshtein`], treating a missing string as empty.
///
/// ```
/// use swiftlev::strings::levenshtein_opt;
///
/// assert_eq!(levenshtein_opt::<usize>(None, Some("test")), 4);
/// assert_eq!(levenshtein_opt::<usize>(Some("test"), None), 4);
/// assert_eq!(levenshtein_opt::<usize>(None, None), 0);
/// ```
#[must_use]
pub fn levenshtein_opt<U: UInt>(a: Option<&str>, b: Option<&str>) -> U {
    levenshtein(a.unwrap_or_default(), b.unwrap_or_default())
}

/// Computes the Levenshtein distance between two sequences of code units.
///
/// Any `Copy + Eq` type works as a code unit: bytes, UTF-16 units, `char`s,
/// or tokens.
///
/// ```
/// use swiftlev::strings::levenshtein_units;
///
/// let a = "Hello World".encode_utf16().collect::<Vec<_>>();
/// let b = "hello world".encode_utf16().collect::<Vec<_>>();
///
/// assert_eq!(levenshtein_units::<_, u32>(&a, &b), 2);
/// assert_eq!(levenshtein_units::<_, u32>(&[1, 2, 3], &[1, 3]), 1);
/// ```
#[must_use]
pub fn levenshtein_units<T: Eq + Copy, U: UInt>(a: &[T], b: &[T]) -> U {
    let mut scratch = ScratchRow::default();
    let distance = infallible(distance_with::<Growing, T>(
        a,
        b,
        &mut scratch,
        Capability::detect(),
        Strategy::default(),
    ));
    U::from_usize(distance)
}

/// Like [`levenshtein`], but reports failure to allocate the scratch row
/// instead of aborting.
///
/// # Errors
///
/// If the scratch row for the shorter (trimmed) string cannot be allocated.
pub fn try_levenshtein<U: UInt>(a: &str, b: &str) -> Result<U, String> {
    let mut scratch = ScratchRow::default();
    str_distance::<Fallible>(a, b, &mut scratch, Capability::detect(), Strategy::default()).map(U::from_usize)
}

/// A Levenshtein distance calculator that keeps its scratch row between
/// calls.
///
/// Calls take `&mut self`, so a scratch row is never shared by two
/// computations at once. Use one `Levenshtein` per thread.
///
/// ```
/// use swiftlev::{Capability, Levenshtein, Strategy};
///
/// let mut lev = Levenshtein::new().with_capability(Capability::Lanes4);
/// assert_eq!(lev.capability(), Capability::Lanes4);
/// assert_eq!(lev.strategy(), Strategy::Wavefront);
///
/// assert_eq!(lev.distance_str("abcdef", "zyxwvu"), Ok(6));
/// assert_eq!(lev.distance(b"te-st", b"test"), Ok(1));
/// ```
#[derive(Clone, Debug)]
pub struct Levenshtein {
    /// Lane width of the bulk row kernel.
    capability: Capability,
    /// Which bulk row kernel to run.
    strategy: Strategy,
    /// Reused across calls.
    scratch: ScratchRow,
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self::new()
    }
}

impl Levenshtein {
    /// A calculator using the detected capability of this CPU and the
    /// wavefront kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capability: Capability::detect(),
            strategy: Strategy::default(),
            scratch: ScratchRow::default(),
        }
    }

    /// Uses `capability` instead of the detected one.
    #[must_use]
    pub const fn with_capability(mut self, capability: Capability) -> Self {
        self.capability = capability;
        self
    }

    /// Uses `strategy` for the bulk of the rows.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The lane width in use.
    #[must_use]
    pub const fn capability(&self) -> Capability {
        self.capability
    }

    /// The bulk row kernel in use.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Bytes currently held by the scratch row.
    #[must_use]
    pub fn scratch_bytes(&self) -> usize {
        self.scratch.capacity_bytes()
    }

    /// Frees the scratch row.
    pub fn release_scratch(&mut self) {
        self.scratch.release();
    }

    /// Computes the Levenshtein distance between two sequences of code units.
    ///
    /// # Errors
    ///
    /// If the scratch row has to grow and cannot be allocated.
    pub fn distance<T: Eq + Copy>(&mut self, source: &[T], target: &[T]) -> Result<usize, String> {
        distance_with::<Fallible, T>(source, target, &mut self.scratch, self.capability, self.strategy)
    }

    /// Computes the Levenshtein distance between two strings, as
    /// [`levenshtein`] does.
    ///
    /// # Errors
    ///
    /// If the scratch row has to grow and cannot be allocated.
    pub fn distance_str(&mut self, source: &str, target: &str) -> Result<usize, String> {
        str_distance::<Fallible>(source, target, &mut self.scratch, self.capability, self.strategy)
    }
}

/// What is left to do after the short-circuits, trimming and orientation.
enum Plan<'a, T> {
    /// The distance is known without filling a matrix.
    Done(usize),
    /// The matrix of `outer` (rows) against `inner` (columns) has to be
    /// filled. `inner` is never longer than `outer` and neither is empty.
    Matrix {
        /// The longer remainder.
        outer: &'a [T],
        /// The shorter remainder.
        inner: &'a [T],
    },
}

/// Short-circuits, trims and orients the inputs.
fn plan<'a, T: Eq>(source: &'a [T], target: &'a [T]) -> Plan<'a, T> {
    if source.is_empty() {
        return Plan::Done(target.len());
    }
    if target.is_empty() {
        return Plan::Done(source.len());
    }

    let (source, target) = trim::trim_grouped::<T, TRIM_GROUP>(source, target).apply(source, target);

    if source.is_empty() {
        Plan::Done(target.len())
    } else if target.is_empty() {
        Plan::Done(source.len())
    } else if target.len() <= source.len() {
        Plan::Matrix {
            outer: source,
            inner: target,
        }
    } else {
        Plan::Matrix {
            outer: target,
            inner: source,
        }
    }
}

/// Computes the distance, acquiring the scratch row through `A`.
///
/// Costs are computed in the narrowest width that holds every cell of the
/// matrix, which is bounded by the length of the outer sequence.
fn distance_with<A: Allocation, T: Eq + Copy>(
    source: &[T],
    target: &[T],
    scratch: &mut ScratchRow,
    capability: Capability,
    strategy: Strategy,
) -> Result<usize, A::Error> {
    match plan(source, target) {
        Plan::Done(distance) => Ok(distance),
        Plan::Matrix { outer, inner } => {
            if u16::fits(outer.len()) {
                fill_with::<A, T, u16>(outer, inner, scratch, capability, strategy)
            } else if u32::fits(outer.len()) {
                fill_with::<A, T, u32>(outer, inner, scratch, capability, strategy)
            } else {
                fill_with::<A, T, u64>(outer, inner, scratch, capability, strategy)
            }
        }
    }
}

/// Fills the matrix of `outer` against `inner` with `C` costs.
fn fill_with<A: Allocation, T: Eq + Copy, C: Buffered>(
    outer: &[T],
    inner: &[T],
    scratch: &mut ScratchRow,
    capability: Capability,
    strategy: Strategy,
) -> Result<usize, A::Error> {
    let row = A::row::<C>(scratch, inner.len())?;
    row::seed_row(row);
    wavefront::fill_matrix(outer, inner, row, capability, strategy);
    Ok(row.last().map_or(outer.len(), |&cost| cost.as_usize()))
}

/// Computes the distance between the `char`s of two strings.
fn str_distance<A: Allocation>(
    a: &str,
    b: &str,
    scratch: &mut ScratchRow,
    capability: Capability,
    strategy: Strategy,
) -> Result<usize, A::Error> {
    if a.is_ascii() && b.is_ascii() {
        distance_with::<A, u8>(a.as_bytes(), b.as_bytes(), scratch, capability, strategy)
    } else {
        let a = a.chars().collect::<Vec<_>>();
        let b = b.chars().collect::<Vec<_>>();
        distance_with::<A, char>(&a, &b, scratch, capability, strategy)
    }
}
