use std::alloc::Layout;

use derive_more::{Display, Error, From, IsVariant};

/// The allocator was unable to provide a block for the requested layout.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("failed to allocate {size} bytes with alignment {align}")]
pub struct AllocError {
    /// The size of the rejected request, in bytes.
    pub size: usize,
    /// The alignment of the rejected request.
    pub align: usize,
}

impl AllocError {
    /// Creates an AllocError describing the provided `layout`.
    pub const fn for_layout(layout: Layout) -> AllocError {
        AllocError {
            size: layout.size(),
            align: layout.align(),
        }
    }
}

/// The requested capacity can't be represented as a valid [`Layout`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// Any reason that growing a buffer may fail.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum TryReserveError {
    /// The capacity would overflow `isize::MAX` bytes.
    CapacityOverflow(CapacityOverflow),
    /// The allocator refused the request.
    AllocError(AllocError),
}
