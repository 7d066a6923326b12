use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An index was at or past the number of live elements in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of live elements at the time of the request.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for collection with {} elements", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}
