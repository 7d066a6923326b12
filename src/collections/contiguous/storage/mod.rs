//! A module containing [`Storage`], the growable buffer underneath every other collection in this
//! crate, and [`IntoIter`] for owned iteration over it.
//!
//! Borrowed iteration is provided by [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut), through Storage's `Deref<Target = [T]>`.

mod iter;
mod storage;

pub use iter::*;
pub use storage::*;
