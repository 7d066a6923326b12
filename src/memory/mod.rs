//! Memory strategy for the collections in this crate.
//!
//! Every container is generic over an [`Allocator`], which is responsible for handing out raw
//! blocks and for constructing / destroying the values placed in them. [`Global`] is the default
//! and simply forwards to the process-wide allocator. [`Counting`] and [`Budget`] wrap another
//! allocator to observe or restrict it.
#![warn(missing_docs)]

mod allocator;
mod error;

pub use allocator::*;
pub use error::*;
