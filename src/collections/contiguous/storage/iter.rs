use std::iter::FusedIterator;

use super::Storage;
use crate::memory::{Allocator, Global};

impl<T, A: Allocator> IntoIterator for Storage<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // The iterator owns [front, back) from here on, the Storage only keeps the block.
        self.len = 0;
        IntoIter {
            storage: self,
            front: 0,
            back,
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Storage<T, A> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Storage<T, A> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Storage`]. Values that haven't been yielded by the time the
/// iterator is dropped are destroyed through the Storage's allocator.
pub struct IntoIter<T, A: Allocator = Global> {
    pub(crate) storage: Storage<T, A>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        while self.front < self.back {
            // SAFETY: Every slot in [front, back) is initialized and owned by the iterator. front
            // is advanced before the next iteration, so no slot is destroyed twice.
            unsafe { self.storage.alloc.destroy(self.storage.ptr.add(self.front)) }
            self.front += 1;
        }
        // The Storage itself has a len of 0, so dropping it only releases the block.
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }

        // SAFETY: front < back, so the slot is initialized and owned by the iterator. Advancing
        // front afterwards moves the value out for good.
        let value = unsafe { self.storage.ptr.add(self.front).read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }

        self.back -= 1;
        // SAFETY: The newly decremented back is still >= front, so the slot is initialized and
        // owned by the iterator.
        Some(unsafe { self.storage.ptr.add(self.back).read() })
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}
