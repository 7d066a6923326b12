//! The container types themselves.
//!
//! # Layout
//! - [`contiguous`]: [`Storage`](contiguous::Storage), the raw growable buffer everything else
//!   sits on, and [`Array`](contiguous::Array), the general-purpose indexable sequence.
//! - [`linked`]: [`List`](linked::List), a doubly linked list of individually allocated nodes.
//! - [`hash`]: [`HashMap`](hash::HashMap), a separate-chaining map with one List per bucket.
//! - [`structures`]: [`Stack`](structures::Stack), [`Queue`](structures::Queue) and
//!   [`Deque`](structures::Deque), thin restricted-access wrappers.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
pub mod pair;
#[cfg(feature = "structures")]
pub mod structures;

pub use crate::util::error::IndexOutOfBounds;
pub use pair::KeyValue;
