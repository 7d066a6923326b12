use derive_more::{Display, Error};

/// A [`Position`](super::Position) didn't refer to a live element of the list it was used with.
/// This happens once the element has been erased, removed or cleared, once anything has been
/// spliced out of the list that made the position, or when the position belongs to another list.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("position doesn't refer to a live element of this list")]
pub struct StalePosition;
