//! Lane widths and kernel strategies for the distance computation.
//!
//! The kernels never call platform intrinsics. They are generic over the
//! number of lanes of a [`Lanes`] register and the integer width of the
//! costs, and a `Capability` picks which instantiation to run.

mod lanes;

pub use lanes::Lanes;

use std::sync::OnceLock;

/// How many lanes the data-parallel kernels may use.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[non_exhaustive]
pub enum Capability {
    /// No data-parallel width is available. Every row goes through the scalar
    /// row kernel.
    #[default]
    Scalar,
    /// 4 lanes, e.g. SSE4.1 or NEON.
    Lanes4,
    /// 8 lanes, e.g. AVX2.
    Lanes8,
    /// 16 lanes, e.g. AVX-512.
    Lanes16,
}

impl Capability {
    /// All capabilities, narrowest first.
    pub const ALL: [Self; 4] = [Self::Scalar, Self::Lanes4, Self::Lanes8, Self::Lanes16];

    /// The number of lanes, or `1` for `Scalar`.
    #[must_use]
    pub const fn lanes(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Lanes4 => 4,
            Self::Lanes8 => 8,
            Self::Lanes16 => 16,
        }
    }

    /// The widest capability of the current CPU, detected once per process.
    #[must_use]
    pub fn detect() -> Self {
        /// Cached result of the feature detection.
        static DETECTED: OnceLock<Capability> = OnceLock::new();
        *DETECTED.get_or_init(detect_capability)
    }

    /// A short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Lanes4 => "lanes4",
            Self::Lanes8 => "lanes8",
            Self::Lanes16 => "lanes16",
        }
    }
}

/// Runtime CPU feature detection.
#[allow(unreachable_code)]
fn detect_capability() -> Capability {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512bw") {
            return Capability::Lanes16;
        }
        if is_x86_feature_detected!("avx2") {
            return Capability::Lanes8;
        }
        if is_x86_feature_detected!("sse4.1") {
            return Capability::Lanes4;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return Capability::Lanes4;
        }
    }

    Capability::Scalar
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scalar" | "1" => Ok(Self::Scalar),
            "lanes4" | "4" => Ok(Self::Lanes4),
            "lanes8" | "8" => Ok(Self::Lanes8),
            "lanes16" | "16" => Ok(Self::Lanes16),
            "auto" | "detect" => Ok(Self::detect()),
            _ => Err(format!("Unknown capability: {s}")),
        }
    }
}

/// Which row kernel processes the bulk of the rows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[non_exhaustive]
pub enum Strategy {
    /// One row at a time with the scalar row kernel, regardless of capability.
    Scalar,
    /// Diagonal skewing: each lane holds one row, staggered one column behind
    /// the lane before it, so every lane's dependencies are ready at once.
    #[default]
    Wavefront,
    /// A block of adjacent rows updated column by column, with the inner
    /// character and the upper-row cost loaded once per column.
    RowBlock,
}

impl Strategy {
    /// All strategies.
    pub const ALL: [Self; 3] = [Self::Scalar, Self::Wavefront, Self::RowBlock];

    /// A short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Wavefront => "wavefront",
            Self::RowBlock => "row-block",
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scalar" => Ok(Self::Scalar),
            "wavefront" => Ok(Self::Wavefront),
            "row-block" | "rowblock" => Ok(Self::RowBlock),
            _ => Err(format!("Unknown strategy: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Capability, Strategy};

    #[test]
    fn detect_is_stable() {
        let first = Capability::detect();
        assert_eq!(first, Capability::detect());
        assert!(Capability::ALL.contains(&first));
    }

    #[test]
    fn names_round_trip() {
        for c in Capability::ALL {
            assert_eq!(c.name().parse::<Capability>(), Ok(c));
        }
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
        assert!("lanes3".parse::<Capability>().is_err());
    }

    #[test]
    fn lane_counts() {
        let lanes = Capability::ALL.map(Capability::lanes);
        assert_eq!(lanes, [1, 4, 8, 16]);
    }
}
