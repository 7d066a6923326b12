use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Storage;
use crate::memory::{Allocator, Global};
use crate::util::fmt::DebugEntries;

/// A first-in, first-out collection, built directly on a [`Storage`].
///
/// The front of the Queue is the start of the Storage, so [`pop`](Queue::pop) shifts every
/// remaining element down by one. For a queue with cheap removal at both ends, see
/// [`Deque`](super::Deque).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(n)` |
/// | `front` / `back` | `O(1)` |
///
/// \* Amortized, the Storage doubles when it's full.
pub struct Queue<T, A: Allocator = Global> {
    pub(crate) storage: Storage<T, A>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue::new_in(Global)
    }
}

impl<T, A: Allocator> Queue<T, A> {
    pub fn new_in(alloc: A) -> Queue<T, A> {
        Queue {
            storage: Storage::new_in(alloc),
        }
    }

    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Panics
    /// Panics if the Queue needs to grow and the allocation fails.
    pub fn push(&mut self, value: T) {
        self.storage.append(value)
    }

    /// Removes the front value and returns it, or None if the Queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.storage.remove(0)
    }

    pub fn front(&self) -> Option<&T> {
        self.storage.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.storage.first_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.storage.last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.storage.last_mut()
    }

    pub fn clear(&mut self) {
        self.storage.clear()
    }

    pub fn swap(&mut self, other: &mut Queue<T, A>) {
        self.storage.swap(&mut other.storage)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: Clone, A: Allocator> Clone for Queue<T, A> {
    fn clone(&self) -> Self {
        Queue {
            storage: self.storage.clone(),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            storage: Storage::from_iter(iter),
        }
    }
}

impl<T: Debug, A: Allocator> Debug for Queue<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front_to_back", &DebugEntries(self.storage.iter()))
            .finish()
    }
}
