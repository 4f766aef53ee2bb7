//! Reusable scratch rows.

use core::convert::Infallible;

use crate::number::Cost;

/// Row buffers for every kernel width, owned by one distance computation at a
/// time.
///
/// Buffers only ever grow. Their contents on entry to a computation are
/// irrelevant and their contents afterwards are unspecified.
#[derive(Clone, Debug, Default)]
pub struct ScratchRow {
    /// Buffer for `u16` costs.
    narrow: Vec<u16>,
    /// Buffer for `u32` costs.
    wide: Vec<u32>,
    /// Buffer for `u64` costs.
    full: Vec<u64>,
}

impl ScratchRow {
    /// Total capacity of all buffers, in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.narrow.capacity() * core::mem::size_of::<u16>()
            + self.wide.capacity() * core::mem::size_of::<u32>()
            + self.full.capacity() * core::mem::size_of::<u64>()
    }

    /// Frees all buffers.
    pub fn release(&mut self) {
        *self = Self::default();
    }
}

/// Cost widths that have a buffer in a `ScratchRow`.
pub trait Buffered: Cost {
    /// The buffer for this width.
    fn buffer(scratch: &mut ScratchRow) -> &mut Vec<Self>;
}

impl Buffered for u16 {
    fn buffer(scratch: &mut ScratchRow) -> &mut Vec<Self> {
        &mut scratch.narrow
    }
}

impl Buffered for u32 {
    fn buffer(scratch: &mut ScratchRow) -> &mut Vec<Self> {
        &mut scratch.wide
    }
}

impl Buffered for u64 {
    fn buffer(scratch: &mut ScratchRow) -> &mut Vec<Self> {
        &mut scratch.full
    }
}

/// How a scratch row is acquired when its buffer has to grow.
pub trait Allocation {
    /// The error reported when the buffer cannot grow.
    type Error;

    /// Returns the first `len` costs of the buffer for width `C`, growing it
    /// if needed.
    fn row<C: Buffered>(scratch: &mut ScratchRow, len: usize) -> Result<&mut [C], Self::Error>;
}

/// Grows like `Vec` does, aborting through the global allocation error
/// handler if memory is exhausted.
pub enum Growing {}

impl Allocation for Growing {
    type Error = Infallible;

    fn row<C: Buffered>(scratch: &mut ScratchRow, len: usize) -> Result<&mut [C], Self::Error> {
        let buffer = C::buffer(scratch);
        if buffer.len() < len {
            buffer.resize(len, C::ZERO);
        }
        Ok(&mut buffer[..len])
    }
}

/// Unwraps a result that cannot be an error.
pub fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Reports allocation failure as an `Err` instead of aborting.
pub enum Fallible {}

impl Allocation for Fallible {
    type Error = String;

    fn row<C: Buffered>(scratch: &mut ScratchRow, len: usize) -> Result<&mut [C], Self::Error> {
        let buffer = C::buffer(scratch);
        if buffer.len() < len {
            buffer.try_reserve_exact(len - buffer.len()).map_err(|e| {
                format!(
                    "Failed to allocate a scratch row of {len} `{}` costs: {e}",
                    C::type_name()
                )
            })?;
            buffer.resize(len, C::ZERO);
        }
        Ok(&mut buffer[..len])
    }
}
