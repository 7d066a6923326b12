//! Linked collection types. Primarily revolves around [`List`] and its accompanying [`Position`],
//! [`Cursor`] and [`CursorMut`] types.

pub mod list;

#[doc(inline)]
pub use list::{Cursor, CursorMut, List, Position, Side, StalePosition};
