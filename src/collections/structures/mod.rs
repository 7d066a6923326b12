//! Restricted-access collections built on the core types: [`Stack`] and [`Queue`] wrap a
//! [`Storage`](super::contiguous::Storage) directly, [`Deque`] wraps a
//! [`List`](super::linked::List).

mod deque;
mod queue;
mod stack;

pub use deque::*;
pub use queue::*;
pub use stack::*;
