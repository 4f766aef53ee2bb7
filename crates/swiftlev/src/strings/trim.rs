//! Stripping the common prefix and suffix of two sequences.
//!
//! Removing a run of characters shared by the start (or the end) of both
//! sequences cannot change their edit distance, and for near-identical inputs
//! it shrinks the matrix the kernels have to fill to almost nothing.

/// The sub-ranges of `source` and `target` left after trimming.
///
/// `source[..start] == target[..start]` and
/// `source[source_end..] == target[target_end..]`, both runs are maximal, and
/// together they never cover more than `min(source.len(), target.len())`
/// characters.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Trim {
    /// Length of the common prefix.
    pub start: usize,
    /// Exclusive end of the untrimmed region of `source`.
    pub source_end: usize,
    /// Exclusive end of the untrimmed region of `target`.
    pub target_end: usize,
}

impl Trim {
    /// The lengths of the untrimmed regions of `source` and `target`.
    #[must_use]
    pub const fn effective_lengths(&self) -> (usize, usize) {
        (self.source_end - self.start, self.target_end - self.start)
    }

    /// The length of the common suffix.
    #[must_use]
    pub const fn suffix_len(&self, source_len: usize) -> usize {
        source_len - self.source_end
    }

    /// Slices the untrimmed regions out of `source` and `target`.
    ///
    /// # Panics
    ///
    /// Will panic if `self` was not computed from sequences of these lengths.
    #[must_use]
    pub fn apply<'a, T>(&self, source: &'a [T], target: &'a [T]) -> (&'a [T], &'a [T]) {
        (&source[self.start..self.source_end], &target[self.start..self.target_end])
    }
}

/// Trims the common prefix and suffix one character at a time.
#[must_use]
pub fn trim<T: Eq>(source: &[T], target: &[T]) -> Trim {
    let start = source.iter().zip(target).take_while(|(s, t)| s == t).count();

    // zipping the remainders bounds the suffix by what the prefix left over
    let suffix = source[start..]
        .iter()
        .rev()
        .zip(target[start..].iter().rev())
        .take_while(|(s, t)| s == t)
        .count();

    Trim {
        start,
        source_end: source.len() - suffix,
        target_end: target.len() - suffix,
    }
}

/// Trims the common prefix and suffix `W` characters at a time.
///
/// Each step compares a group of `W` characters into a mismatch mask and
/// bit-scans it for the first difference. Fewer than `W` remaining characters
/// are compared one at a time. The result is always identical to [`trim`].
///
/// # Panics
///
/// Will panic in debug builds if `W` is `0` or larger than `64`.
#[must_use]
pub fn trim_grouped<T: Eq, const W: usize>(source: &[T], target: &[T]) -> Trim {
    debug_assert!(W > 0 && W <= 64);

    let mut available = source.len().min(target.len());
    let mut start = 0;

    while available >= W {
        let mask = mismatch_mask(&source[start..start + W], &target[start..start + W]);
        if mask != 0 {
            let matched = mask.trailing_zeros() as usize;
            start += matched;
            available -= matched;
            break;
        }
        start += W;
        available -= W;
    }
    while available > 0 && source[start] == target[start] {
        start += 1;
        available -= 1;
    }

    let (mut source_end, mut target_end) = (source.len(), target.len());

    while available >= W {
        let mask = mismatch_mask(&source[source_end - W..source_end], &target[target_end - W..target_end]);
        if mask != 0 {
            // bit `W - 1` is the last character of the group
            let matched = (mask.leading_zeros() as usize) - (64 - W);
            source_end -= matched;
            target_end -= matched;
            available -= matched;
            break;
        }
        source_end -= W;
        target_end -= W;
        available -= W;
    }
    while available > 0 && source[source_end - 1] == target[target_end - 1] {
        source_end -= 1;
        target_end -= 1;
        available -= 1;
    }

    Trim {
        start,
        source_end,
        target_end,
    }
}

/// Bit `k` is set iff `a[k] != b[k]`.
#[inline]
fn mismatch_mask<T: Eq>(a: &[T], b: &[T]) -> u64 {
    a.iter()
        .zip(b)
        .enumerate()
        .fold(0, |mask, (k, (x, y))| mask | (u64::from(x != y) << k))
}

#[cfg(test)]
mod tests {
    use super::{mismatch_mask, trim, trim_grouped, Trim};

    #[test]
    fn mask_bits() {
        assert_eq!(mismatch_mask(b"abcd", b"abcd"), 0);
        assert_eq!(mismatch_mask(b"abcd", b"xbcy"), 0b1001);
    }

    #[test]
    fn identical() {
        let s = b"Hello World";
        let t = trim(s, s);
        assert_eq!(t, Trim { start: 11, source_end: 11, target_end: 11 });
        assert_eq!(t.effective_lengths(), (0, 0));
    }

    #[test]
    fn prefix_and_suffix() {
        let (s, t) = (b"Hello World".as_slice(), b"He11o World".as_slice());
        let trimmed = trim(s, t);
        assert_eq!(trimmed, Trim { start: 2, source_end: 4, target_end: 4 });
        assert_eq!(trimmed.apply(s, t), (b"ll".as_slice(), b"11".as_slice()));
        assert_eq!(trimmed.suffix_len(s.len()), 7);
    }

    #[test]
    fn never_overlaps() {
        // "aaa" is both a prefix and a suffix of "aaaa"
        let t = trim(b"aaa", b"aaaa");
        assert_eq!(t.effective_lengths(), (0, 1));
        assert_eq!(t, trim_grouped::<u8, 2>(b"aaa", b"aaaa"));
    }

    #[test]
    fn grouped_matches_scalar() {
        let base = b"aababbadebaaebebbaababbadebaaebebbaababbadebaaebebb";
        for cut in 0..base.len() {
            let mut edited = base.to_vec();
            edited.insert(cut, b'D');
            for (s, t) in [(&base[..], &edited[..]), (&edited[..], &base[..])] {
                let expected = trim(s, t);
                assert_eq!(expected, trim_grouped::<u8, 4>(s, t), "cut {cut}");
                assert_eq!(expected, trim_grouped::<u8, 16>(s, t), "cut {cut}");
                assert_eq!(expected, trim_grouped::<u8, 64>(s, t), "cut {cut}");
            }
        }
    }
}
