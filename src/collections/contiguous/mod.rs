//! Contiguous collection types.
//!
//! [`Storage`] owns the memory and the element lifetimes, [`Array`] is the collection surface on
//! top of it.

pub mod array;
pub mod storage;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use storage::{DEFAULT_CAP, IntoIter, Storage};
