use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Storage;
use crate::memory::{Allocator, Global};
use crate::util::fmt::DebugEntries;

/// A last-in, first-out collection, built directly on a [`Storage`].
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
///
/// \* Amortized, the Storage doubles when it's full.
pub struct Stack<T, A: Allocator = Global> {
    pub(crate) storage: Storage<T, A>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack::new_in(Global)
    }
}

impl<T, A: Allocator> Stack<T, A> {
    pub fn new_in(alloc: A) -> Stack<T, A> {
        Stack {
            storage: Storage::new_in(alloc),
        }
    }

    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Panics
    /// Panics if the Stack needs to grow and the allocation fails.
    pub fn push(&mut self, value: T) {
        self.storage.append(value)
    }

    /// Removes the top value and returns it, or None if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.storage.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.storage.last_mut()
    }

    pub fn clear(&mut self) {
        self.storage.clear()
    }

    pub fn swap(&mut self, other: &mut Stack<T, A>) {
        self.storage.swap(&mut other.storage)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T: Clone, A: Allocator> Clone for Stack<T, A> {
    fn clone(&self) -> Self {
        Stack {
            storage: self.storage.clone(),
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            storage: Storage::from_iter(iter),
        }
    }
}

impl<T: Debug, A: Allocator> Debug for Stack<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("bottom_to_top", &DebugEntries(self.storage.iter()))
            .finish()
    }
}
