use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, List, Node};
use crate::memory::{Allocator, Global};

impl<T, A: Allocator> List<T, A> {
    /// Returns an iterator over references to the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T, A> {
        let sentinel = self.links(self.sentinel);
        Iter {
            list: self,
            front: sentinel.next,
            back: sentinel.prev,
            len: self.len,
        }
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let sentinel = self.links(self.sentinel);
        IterMut {
            front: sentinel.next,
            back: sentinel.prev,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<T, A: Allocator> IntoIterator for List<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// A type for owned iteration over a [`List`].
pub struct IntoIter<T, A: Allocator = Global> {
    // Holding the list and popping from either end keeps all of the unlinking in one place.
    pub(crate) list: List<T, A>,
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over a [`List`].
pub struct Iter<'a, T, A: Allocator = Global> {
    pub(crate) list: &'a List<T, A>,
    pub(crate) front: Link,
    pub(crate) back: Link,
    // The number of elements left to yield, so front and back never pass each other.
    pub(crate) len: usize,
}

impl<'a, T, A: Allocator> Iterator for Iter<'a, T, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }

        let value = self.list.value_of(self.front);
        self.front = self.list.links(self.front).next;
        self.len -= 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T, A: Allocator> DoubleEndedIterator for Iter<'a, T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }

        let value = self.list.value_of(self.back);
        self.back = self.list.links(self.back).prev;
        self.len -= 1;
        value
    }
}

impl<'a, T, A: Allocator> FusedIterator for Iter<'a, T, A> {}

impl<'a, T, A: Allocator> ExactSizeIterator for Iter<'a, T, A> {}

impl<T, A: Allocator> Clone for Iter<'_, T, A> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut List<T, A> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for mutable borrowed iteration over a [`List`].
pub struct IterMut<'a, T> {
    pub(crate) front: Link,
    pub(crate) back: Link,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// Yields the value of the node at `at` and returns the link next to it.
    ///
    /// # Safety
    /// `at` must be a linked node of the exclusively borrowed List that hasn't been yielded before.
    unsafe fn yield_node(&mut self, at: Link, forward: bool) -> (&'a mut T, Link) {
        // SAFETY: The links are read before the value is borrowed, and never overlap it. The node
        // is yielded at most once, because len stops front and back from passing each other, so no
        // two mutable references to the same value exist.
        let (links, value) = unsafe { (*at.as_ptr(), Node::<T>::value_ptr(at).as_mut()) };
        let next = if forward { links.next } else { links.prev };
        (value, next)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }

        // SAFETY: front is the next unyielded element from the front.
        let (value, next) = unsafe { self.yield_node(self.front, true) };
        self.front = next;
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }

        // SAFETY: back is the next unyielded element from the back.
        let (value, prev) = unsafe { self.yield_node(self.back, false) };
        self.back = prev;
        self.len -= 1;
        Some(value)
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
