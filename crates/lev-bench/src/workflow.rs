//! Generating corpora of string pairs and running every kernel over them.

use rayon::prelude::*;
use strgen::{random_data, random_edits};
use swiftlev::{Capability, Levenshtein, Strategy};

use crate::report::{Record, Report};

/// How the pairs of a corpus are generated.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Corpus {
    /// A random string and a copy with a few random edits.
    #[clap(name = "near-duplicates")]
    NearDuplicates,
    /// Two unrelated random strings.
    #[clap(name = "random")]
    Random,
}

impl Corpus {
    /// The name of the corpus.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NearDuplicates => "near-duplicates",
            Self::Random => "random",
        }
    }

    /// Generates `num_pairs` pairs whose first string has `length` characters.
    ///
    /// For near-duplicates, up to `edit_percent` percent of `length` (at least
    /// one) random edits are applied to the copy. Random pairs have a second
    /// string between half and all of `length` characters long.
    #[must_use]
    pub fn generate(
        self,
        num_pairs: usize,
        length: usize,
        alphabet: &str,
        edit_percent: usize,
        seed: u64,
    ) -> Vec<(String, String)> {
        match self {
            Self::NearDuplicates => {
                let max_edits = (length * edit_percent / 100).max(1);
                random_edits::near_duplicate_pairs(num_pairs, length, alphabet, max_edits, seed)
            }
            Self::Random => {
                let firsts = random_data::random_string(num_pairs, length, length, alphabet, seed);
                let seconds = random_data::random_string(num_pairs, length / 2, length, alphabet, seed.wrapping_add(1));
                firsts.into_iter().zip(seconds).collect()
            }
        }
    }
}

/// Computes the distance of every pair with the scalar kernel, in parallel.
///
/// # Errors
///
/// If a scratch row cannot be allocated.
pub fn reference(pairs: &[(String, String)]) -> Result<Vec<usize>, String> {
    pairs
        .par_iter()
        .map_init(
            || {
                Levenshtein::new()
                    .with_capability(Capability::Scalar)
                    .with_strategy(Strategy::Scalar)
            },
            |lev, (a, b)| lev.distance_str(a, b),
        )
        .collect()
}

/// The kernel configurations to run: every strategy at every capability in
/// `capabilities`, skipping the duplicate scalar strategy at wider widths.
#[must_use]
pub fn configurations(capabilities: &[Capability]) -> Vec<(Capability, Strategy)> {
    capabilities
        .iter()
        .flat_map(|&c| Strategy::ALL.into_iter().map(move |s| (c, s)))
        .filter(|&(c, s)| s != Strategy::Scalar || c == Capability::Scalar)
        .collect()
}

/// Times one kernel configuration over `pairs` and checks every distance
/// against `expected`.
///
/// # Errors
///
/// If a scratch row cannot be allocated.
#[allow(clippy::cast_precision_loss)]
pub fn run(
    report: &mut Report,
    corpus: Corpus,
    length: usize,
    pairs: &[(String, String)],
    expected: &[usize],
    capability: Capability,
    strategy: Strategy,
) -> Result<(), String> {
    let mut lev = Levenshtein::new().with_capability(capability).with_strategy(strategy);

    let start = std::time::Instant::now();
    let distances = pairs
        .iter()
        .map(|(a, b)| lev.distance_str(a, b))
        .collect::<Result<Vec<_>, _>>()?;
    let time = start.elapsed().as_secs_f32();

    let mut mismatches = 0;
    for (i, (&actual, &expected)) in distances.iter().zip(expected).enumerate() {
        if actual != expected {
            mismatches += 1;
            ftlog::error!(
                "{capability} {strategy} on {} pair {i} of length {length}: got {actual}, expected {expected}",
                corpus.name()
            );
        }
    }

    report.append(Record {
        corpus: corpus.name().to_string(),
        length,
        capability,
        strategy,
        pairs: pairs.len(),
        time,
        throughput: if time > 0.0 { pairs.len() as f32 / time } else { f32::INFINITY },
        mismatches,
    });

    Ok(())
}
