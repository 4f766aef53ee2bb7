use rand::prelude::*;
use strgen::{
    random_data::{disjoint_pair, random_units},
    random_edits::apply_random_edits,
};
use swiftlev::{
    strings::{
        row::{fill_rows, seed_row},
        trim::{trim, trim_grouped},
        wavefront::fill_matrix,
    },
    Capability, Levenshtein, Strategy,
};

/// Lengths just below, at and just above one, two and three groups of every
/// lane width.
const BOUNDARY_LENGTHS: [usize; 22] = [
    1, 3, 4, 5, 7, 8, 9, 11, 12, 13, 15, 16, 17, 23, 24, 25, 31, 32, 33, 47, 48, 49,
];

const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Two-row Wagner-Fischer in `usize`.
fn reference(a: &[char], b: &[char]) -> usize {
    let mut prev = (0..=b.len()).collect::<Vec<_>>();
    let mut cur = vec![0; b.len() + 1];
    for (i, &x) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &y) in b.iter().enumerate() {
            let sub = prev[j] + usize::from(x != y);
            cur[j + 1] = sub.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        core::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

fn engines() -> Vec<Levenshtein> {
    Capability::ALL
        .into_iter()
        .flat_map(|c| {
            Strategy::ALL
                .into_iter()
                .map(move |s| Levenshtein::new().with_capability(c).with_strategy(s))
        })
        .collect()
}

#[test]
fn random_pairs_at_lane_boundaries() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut engines = engines();

    for &m in &BOUNDARY_LENGTHS {
        for &n in &BOUNDARY_LENGTHS {
            let a = random_units(m, &ALPHABET, &mut rng);
            let b = random_units(n, &ALPHABET, &mut rng);
            let expected = reference(&a, &b);

            for lev in &mut engines {
                let (c, s) = (lev.capability(), lev.strategy());
                assert_eq!(lev.distance(&a, &b)?, expected, "{c} {s} {m}x{n}");
                assert_eq!(lev.distance(&b, &a)?, expected, "{c} {s} {n}x{m}");
            }
        }
    }

    Ok(())
}

#[test]
fn near_duplicates() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut engines = engines();

    for &len in &[16, 64, 100, 257, 1000] {
        for k in [1, 2, 5, 20] {
            let a = random_units(len, &ALPHABET, &mut rng).into_iter().collect::<String>();
            let b = apply_random_edits(&a, &ALPHABET, k, &mut rng);

            let expected = reference(&a.chars().collect::<Vec<_>>(), &b.chars().collect::<Vec<_>>());
            assert!(expected <= k);

            for lev in &mut engines {
                let (c, s) = (lev.capability(), lev.strategy());
                assert_eq!(lev.distance_str(&a, &b)?, expected, "{c} {s} len {len} edits {k}");
            }
        }
    }

    Ok(())
}

#[test]
fn kernels_leave_identical_rows() {
    let mut rng = StdRng::seed_from_u64(0);
    let inner = random_units(37, &ALPHABET, &mut rng);
    let outer = random_units(101, &ALPHABET, &mut rng);

    let mut expected = vec![0_u16; inner.len()];
    seed_row(&mut expected);
    fill_rows(&mut expected, 0, &outer, &inner);

    for capability in Capability::ALL {
        for strategy in Strategy::ALL {
            let mut row = vec![0_u16; inner.len()];
            seed_row(&mut row);
            fill_matrix(&outer, &inner, &mut row, capability, strategy);
            assert_eq!(row, expected, "{capability} {strategy}");
        }
    }
}

#[test]
fn grouped_trim_on_random_pairs() {
    let mut rng = StdRng::seed_from_u64(99);
    for &len in &BOUNDARY_LENGTHS {
        let a = random_units(len, &['x', 'y'], &mut rng).into_iter().collect::<String>();
        let b = apply_random_edits(&a, &['x', 'y'], 2, &mut rng);
        let (a, b) = (a.as_bytes(), b.as_bytes());

        let expected = trim(a, b);
        assert_eq!(trim_grouped::<u8, 8>(a, b), expected);
        assert_eq!(trim_grouped::<u8, 16>(a, b), expected);
        assert_eq!(trim_grouped::<u8, 32>(a, b), expected);
    }
}

#[test]
fn u16_width_boundary() -> Result<(), String> {
    // `u16` costs are used while the longer input is shorter than `u16::MAX`
    let mut rng = StdRng::seed_from_u64(42);
    let mut engines = engines();

    for len in [65_534, 65_535, 65_536] {
        let outer = random_units(len, &ALPHABET, &mut rng);
        let inner = random_units(37, &ALPHABET, &mut rng);
        let expected = reference(&outer, &inner);

        for lev in &mut engines {
            let (c, s) = (lev.capability(), lev.strategy());
            assert_eq!(lev.distance(&outer, &inner)?, expected, "{c} {s} len {len}");
            assert_eq!(lev.distance(&inner, &outer)?, expected, "{c} {s} len {len}");
        }
    }

    Ok(())
}

#[test]
fn disjoint_pairs_cost_the_longer_length() -> Result<(), String> {
    let mut engines = engines();

    // at 65_534 the last cell is `u16::MAX - 1`
    let lengths = [(65_534, 5), (65_535, 5), (65_536, 5), (300, 17), (17, 300), (48, 48)];
    for (seed, (m, n)) in (0_u64..).zip(lengths) {
        let (a, b) = disjoint_pair(m, n, "abcd", "wxyz", seed);
        let expected = m.max(n);

        for lev in &mut engines {
            let (c, s) = (lev.capability(), lev.strategy());
            assert_eq!(lev.distance_str(&a, &b)?, expected, "{c} {s} {m}x{n}");
        }
    }

    Ok(())
}
