//! Integer types used for distances.
//!
//! * `UInt` is implemented for all primitive unsigned integers: `u8`, `u16`,
//!   `u32`, `u64`, `u128`, `usize`. Callers pick it as the output type of a
//!   distance.
//! * `Cost` is implemented for `u16`, `u32` and `u64`. These are the widths
//!   the row kernels compute in.

mod _cost;
mod _uint;

pub use _cost::Cost;
pub use _uint::UInt;
