use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::{IntoIter, Storage};
use crate::memory::{Allocator, Global, TryReserveError};
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, based on [`Storage<T>`]. This is the surface that every
/// other array-like type is expected to build on, leaving the buffer management to Storage.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink` | `O(n)` |
/// | `swap` / `take` | `O(1)` |
///
/// \* If the Array doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Array has enough capacity already, `reserve` is `O(1)`.
pub struct Array<T, A: Allocator = Global> {
    pub(crate) storage: Storage<T, A>,
}

impl<T> Array<T> {
    /// Creates a new, empty Array with the default capacity preallocated.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.len(), 0);
    /// assert!(arr.cap() > 0);
    /// ```
    pub fn new() -> Array<T> {
        Array::new_in(Global)
    }

    /// Creates a new Array with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::Array;
    /// let mut arr: Array<u8> = Array::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Array<T> {
        Array::with_cap_in(cap, Global)
    }

    /// Creates an Array holding `len` clones of `value`.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::Array;
    /// let arr = Array::from_elem(3, 'x');
    /// assert_eq!(&*arr, &['x', 'x', 'x']);
    /// ```
    pub fn from_elem(len: usize, value: T) -> Array<T>
    where
        T: Clone,
    {
        let mut arr = Array::with_cap(len);
        for _ in 0..len {
            arr.push(value.clone());
        }
        arr
    }
}

impl<T, A: Allocator> Array<T, A> {
    /// Creates a new, empty Array on `alloc` with the default capacity preallocated.
    pub fn new_in(alloc: A) -> Array<T, A> {
        Array {
            storage: Storage::new_in(alloc),
        }
    }

    /// Creates a new, empty Array on `alloc` with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn with_cap_in(cap: usize, alloc: A) -> Array<T, A> {
        Array {
            storage: Storage::with_cap_in(cap, alloc),
        }
    }

    /// Returns the length of the Array.
    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the Array contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the current capacity of the Array.
    pub const fn cap(&self) -> usize {
        self.storage.cap()
    }

    /// Returns the allocator backing this Array.
    pub const fn allocator(&self) -> &A {
        self.storage.allocator()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, with an [`IndexOutOfBounds`] message.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::Array;
    /// let arr = Array::from_iter([4, 5, 6]);
    /// assert_eq!(arr.get(2), &6);
    /// ```
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, with an [`IndexOutOfBounds`] message.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.storage.try_get(index)
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index` is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.storage.try_get_mut(index)
    }

    /// Returns a reference to the element at `index` without checking the bounds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Array::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The bound is guaranteed by the caller.
        unsafe { self.storage.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without checking the bounds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Array::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The bound is guaranteed by the caller.
        unsafe { self.storage.get_unchecked_mut(index) }
    }

    /// Returns a reference to the first element, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a mutable reference to the first element, if there is one.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a mutable reference to the last element, if there is one.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Pushes `value` to the end of the Array, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if the required growth fails. The Array is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::Array;
    /// let mut arr = Array::with_cap(1);
    /// arr.push(1);
    /// arr.push(2);
    /// assert_eq!(&*arr, &[1, 2]);
    /// assert_eq!(arr.cap(), 2);
    /// ```
    pub fn push(&mut self, value: T) {
        self.storage.append(value)
    }

    /// Pushes `value` to the end of the Array, handing it back along with the error if the
    /// required growth fails.
    pub fn try_push(&mut self, value: T) -> Result<(), (TryReserveError, T)> {
        self.storage.try_append(value)
    }

    /// Removes the last element from the Array and returns it, or None if the Array is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.storage.clear()
    }

    /// Ensures that the capacity is at least `min_cap`. The capacity is never reduced here.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn reserve(&mut self, min_cap: usize) {
        self.storage.reserve(min_cap)
    }

    /// Ensures that the capacity is at least `min_cap`, returning an [`Err`] and leaving the Array
    /// unchanged on failure.
    pub fn try_reserve(&mut self, min_cap: usize) -> Result<(), TryReserveError> {
        self.storage.try_reserve(min_cap)
    }

    /// Reduces the capacity to exactly the current length.
    pub fn shrink(&mut self) {
        self.storage.shrink()
    }

    /// Exchanges the contents of two Arrays.
    pub fn swap(&mut self, other: &mut Array<T, A>) {
        self.storage.swap(&mut other.storage)
    }

    /// Moves the contents out into a new Array, leaving `self` empty and unallocated.
    pub fn take(&mut self) -> Array<T, A> {
        Array {
            storage: self.storage.take(),
        }
    }
}

impl<T, A: Allocator> Deref for Array<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.storage
    }
}

impl<T, A: Allocator> DerefMut for Array<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.storage
    }
}

impl<T, A: Allocator> AsRef<[T]> for Array<T, A> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator> AsMut<[T]> for Array<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: Allocator> Borrow<[T]> for Array<T, A> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for Array<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: Allocator> IntoIterator for Array<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Array<T, A> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Array<T, A> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, A: Allocator> Extend<T> for Array<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            storage: Storage::from_iter(iter),
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T: Clone, A: Allocator> Clone for Array<T, A> {
    fn clone(&self) -> Self {
        Array {
            storage: self.storage.clone(),
        }
    }
}

impl<T: PartialEq, A: Allocator> PartialEq for Array<T, A> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, A: Allocator> Eq for Array<T, A> {}

impl<T: Hash, A: Allocator> Hash for Array<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, A: Allocator> Debug for Array<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug, A: Allocator> Display for Array<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
