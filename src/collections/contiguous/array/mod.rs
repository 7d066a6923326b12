//! A module containing [`Array`], the growable array type that other collections are built from.
//!
//! Owned iteration uses the same [`IntoIter`](super::IntoIter) as [`Storage`](super::Storage), while
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;
