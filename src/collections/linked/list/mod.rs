//! A module containing [`List`], its [`Position`] handles, [`Cursor`] / [`CursorMut`] for
//! traversal and [`Iter`], [`IterMut`] and [`IntoIter`] for iteration.

mod cursor;
mod error;
mod iter;
mod list;
mod node;
mod sort;
mod tests;

pub use cursor::*;
pub use error::*;
pub use iter::*;
pub use list::*;
pub(crate) use node::*;
