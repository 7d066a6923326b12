use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::List;
use crate::collections::linked::list::Iter;
use crate::memory::{Allocator, Global};
use crate::util::fmt::DebugEntries;

/// A double-ended queue, built on a [`List`]. Values can be added and removed at either end in
/// constant time.
pub struct Deque<T, A: Allocator = Global> {
    pub(crate) list: List<T, A>,
}

impl<T> Deque<T> {
    pub fn new() -> Deque<T> {
        Deque::new_in(Global)
    }
}

impl<T, A: Allocator> Deque<T, A> {
    pub fn new_in(alloc: A) -> Deque<T, A> {
        Deque {
            list: List::new_in(alloc),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn push_front(&mut self, value: T) {
        self.list.push_front(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.list.push_back(value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    pub fn clear(&mut self) {
        self.list.clear()
    }

    pub fn swap(&mut self, other: &mut Deque<T, A>) {
        self.list.swap(&mut other.list)
    }

    /// Returns an iterator over the values, from front to back.
    pub fn iter(&self) -> Iter<'_, T, A> {
        self.list.iter()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Deque::new()
    }
}

impl<T: Clone, A: Allocator> Clone for Deque<T, A> {
    fn clone(&self) -> Self {
        Deque {
            list: self.list.clone(),
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            list: List::from_iter(iter),
        }
    }
}

impl<T: Debug, A: Allocator> Debug for Deque<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("front_to_back", &DebugEntries(self.list.iter()))
            .finish()
    }
}
