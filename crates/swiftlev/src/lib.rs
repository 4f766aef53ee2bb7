#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod number;
pub mod simd;
pub mod strings;

pub use number::UInt;
pub use simd::{Capability, Strategy};
pub use strings::{levenshtein, levenshtein_opt, levenshtein_units, try_levenshtein, Levenshtein};

/// The version of the crate.
pub const VERSION: &str = "0.3.0";
