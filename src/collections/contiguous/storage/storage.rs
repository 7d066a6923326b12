use std::alloc::Layout;
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::memory::{Allocator, CapacityOverflow, Global, TryReserveError};
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugEntries;
use crate::util::log::coll_trace;
use crate::util::result::ResultExtension;

/// The capacity a Storage is given by [`Storage::new`], and the capacity that an unallocated
/// Storage grows to on its first append. Chosen so that small collections never reallocate.
pub const DEFAULT_CAP: usize = 100;

const GROWTH_FACTOR: usize = 2;

/// A growable, contiguous block of elements with separate length and capacity, which constructs
/// and destroys its elements through an [`Allocator`].
///
/// Elements `[0, len)` are always initialized, elements `[len, cap)` are raw memory. The Storage
/// exclusively owns both.
///
/// Growth never leaves the Storage half-modified: the new block is allocated before anything else
/// is touched, and moving elements into it can't fail. If the allocation fails, the Storage is
/// exactly as it was before the call.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Storage.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `omit` / `pop` | `O(1)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `swap` / `take` | `O(1)` |
///
/// \* If the Storage is full, `append` doubles the capacity first, which takes `O(n)`.
///
/// \** If the Storage already has the requested capacity, `reserve` is `O(1)`.
pub struct Storage<T, A: Allocator = Global> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Storage<T> {
    /// Creates a new, empty Storage on the [`Global`] allocator with [`DEFAULT_CAP`] slots
    /// preallocated.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::{Storage, DEFAULT_CAP};
    /// let storage: Storage<u8> = Storage::new();
    /// assert_eq!(storage.len(), 0);
    /// assert_eq!(storage.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> Storage<T> {
        Storage::new_in(Global)
    }

    /// Creates a new, empty Storage on the [`Global`] allocator with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if the layout overflows or the allocation fails.
    pub fn with_cap(cap: usize) -> Storage<T> {
        Storage::with_cap_in(cap, Global)
    }
}

impl<T, A: Allocator> Storage<T, A> {
    /// Creates a new, empty Storage on `alloc` with [`DEFAULT_CAP`] slots preallocated.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn new_in(alloc: A) -> Storage<T, A> {
        Storage::with_cap_in(DEFAULT_CAP, alloc)
    }

    /// Creates a new Storage with capacity 0, which holds no memory at all. This is the state that
    /// [`take`](Storage::take) leaves behind.
    pub const fn unallocated_in(alloc: A) -> Storage<T, A> {
        Storage {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
            _phantom: PhantomData,
        }
    }

    /// Creates a new, empty Storage on `alloc` with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if the layout overflows or the allocation fails.
    pub fn with_cap_in(cap: usize, alloc: A) -> Storage<T, A> {
        Storage::try_with_cap_in(cap, alloc).throw()
    }

    /// Creates a new, empty Storage on `alloc` with exactly `cap` slots, returning an [`Err`] if
    /// the memory can't be obtained.
    pub fn try_with_cap_in(cap: usize, alloc: A) -> Result<Storage<T, A>, TryReserveError> {
        let mut storage = Storage::unallocated_in(alloc);
        storage.try_realloc(cap)?;
        Ok(storage)
    }

    /// Returns the number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Storage holds no live elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the current block, live or not.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the allocator backing this Storage.
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a raw pointer to the first slot. The pointer is dangling while the capacity is 0.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Ensures that the capacity is at least `min_cap`. The capacity never shrinks.
    ///
    /// # Panics
    /// Panics if the layout overflows or the allocation fails. The Storage is left unchanged.
    pub fn reserve(&mut self, min_cap: usize) {
        self.try_reserve(min_cap).throw()
    }

    /// Ensures that the capacity is at least `min_cap`, returning an [`Err`] and leaving the
    /// Storage unchanged if the memory can't be obtained.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::Storage;
    /// # use container_core::memory::Budget;
    /// let budget = Budget::new(1);
    /// let mut storage = Storage::with_cap_in(2, budget);
    /// storage.append(1_u8);
    /// assert!(storage.try_reserve(10).is_err());
    /// assert_eq!(&*storage, &[1]);
    /// assert_eq!(storage.cap(), 2);
    /// ```
    pub fn try_reserve(&mut self, min_cap: usize) -> Result<(), TryReserveError> {
        if min_cap <= self.cap { return Ok(()); }

        self.try_realloc(min_cap)
    }

    /// Appends `value` after the last live element, doubling the capacity first if the Storage is
    /// full.
    ///
    /// # Panics
    /// Panics if growth is required and fails. The Storage is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::Storage;
    /// let mut storage = Storage::with_cap(1);
    /// for i in 0..5 {
    ///     storage.append(i);
    /// }
    /// assert_eq!(&*storage, &[0, 1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, value: T) {
        if self.len == self.cap {
            self.try_grow().throw();
        }
        // SAFETY: There is at least one free slot, either from before or after growing.
        unsafe { self.append_unchecked(value) }
    }

    /// Appends `value` after the last live element, doubling the capacity first if the Storage is
    /// full. If growing fails, the error and `value` are handed back and the Storage is left
    /// unchanged.
    pub fn try_append(&mut self, value: T) -> Result<(), (TryReserveError, T)> {
        if self.len == self.cap {
            if let Err(error) = self.try_grow() {
                return Err((error, value));
            }
        }
        // SAFETY: There is at least one free slot, either from before or after growing.
        unsafe { self.append_unchecked(value) }
        Ok(())
    }

    /// Appends `value` without checking for a free slot.
    ///
    /// # Safety
    /// The caller must ensure that `len < cap`, e.g. through [`reserve`](Storage::reserve).
    pub unsafe fn append_unchecked(&mut self, value: T) {
        // SAFETY: len < cap is guaranteed by the caller, so the slot is inside the block, properly
        // aligned and currently uninitialized.
        unsafe { self.alloc.construct(self.ptr.add(self.len), value) }
        self.len += 1;
    }

    /// Destroys the last live element, doing nothing if the Storage is empty. The capacity isn't
    /// changed.
    pub fn omit(&mut self) {
        if self.len == 0 { return; }

        self.len -= 1;
        // SAFETY: The slot at the old last index is initialized and is no longer considered live,
        // so it won't be read or destroyed again.
        unsafe { self.alloc.destroy(self.ptr.add(self.len)) }
    }

    /// Moves the last live element out of the Storage, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 { return None; }

        self.len -= 1;
        // SAFETY: The slot is initialized and is no longer considered live. Reading it moves the
        // value out, leaving the slot as raw memory.
        Some(unsafe { self.ptr.add(self.len).read() })
    }

    /// Moves the element at `index` out of the Storage and shifts every following element down by
    /// one. Returns None if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len { return None; }

        // SAFETY: index < len, so the slot is initialized. After the read, the following elements
        // are moved down over it with an overlapping copy, which leaves [len - 1, cap) as raw
        // memory before len is reduced.
        unsafe {
            let hole = self.ptr.add(index);
            let value = hole.read();
            ptr::copy(hole.add(1).as_ptr(), hole.as_ptr(), self.len - index - 1);
            self.len -= 1;
            Some(value)
        }
    }

    /// Destroys every live element past `new_len`. Does nothing if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.omit();
        }
    }

    /// Destroys all live elements. The capacity isn't changed.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Reallocates the Storage so that its capacity is exactly its length. A capacity of 0
    /// releases the block entirely.
    ///
    /// # Panics
    /// Panics if the allocation fails. The Storage is left unchanged.
    pub fn shrink(&mut self) {
        self.try_realloc(self.len).throw()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index` is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Exchanges the entire contents of two Storages, including their allocators.
    pub fn swap(&mut self, other: &mut Storage<T, A>) {
        mem::swap(self, other);
    }

    /// Moves the contents out into a new Storage, leaving `self` empty, unallocated and ready for
    /// further use.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::contiguous::Storage;
    /// let mut source = Storage::from_iter([1, 2, 3]);
    /// let moved = source.take();
    /// assert_eq!(&*moved, &[1, 2, 3]);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.cap(), 0);
    /// source.append(4);
    /// assert_eq!(&*source, &[4]);
    /// ```
    pub fn take(&mut self) -> Storage<T, A> {
        let empty = Storage::unallocated_in(self.alloc.clone());
        mem::replace(self, empty)
    }
}

impl<T, A: Allocator> Storage<T, A> {
    /// Doubles the capacity, or allocates [`DEFAULT_CAP`] slots if there are none.
    pub(crate) fn try_grow(&mut self) -> Result<(), TryReserveError> {
        let new_cap = match self.cap {
            0 => DEFAULT_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
        };

        self.try_realloc(new_cap)
    }

    /// Moves the live elements into a new block of exactly `new_cap` slots. The new block is
    /// obtained before anything else happens, so an [`Err`] leaves the Storage untouched.
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), TryReserveError> {
        debug_assert!(new_cap >= self.len);
        if new_cap == self.cap { return Ok(()); }

        if size_of::<T>() == 0 {
            // Zero-sized types never need memory, the capacity is purely logical.
            self.cap = new_cap;
            return Ok(());
        }

        let new_ptr = match new_cap {
            0 => NonNull::dangling(),
            _ => {
                let layout = Layout::array::<T>(new_cap).map_err(|_| CapacityOverflow)?;
                self.alloc.allocate(layout)?.cast()
            },
        };

        // SAFETY: Both blocks are valid for len elements and can't overlap, as the new one has just
        // been allocated. This is a bitwise move, so the old slots are treated as raw memory
        // afterwards.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
        }

        coll_trace!("storage reallocated from {} to {} slots", self.cap, new_cap);

        // SAFETY: The old block's contents have been moved out and the block is replaced right
        // after.
        unsafe { self.release_block(); }
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Returns the current block to the allocator without touching any elements.
    ///
    /// # Safety
    /// The block must not be used again, `ptr` and `cap` need to be replaced or the Storage
    /// forgotten.
    unsafe fn release_block(&mut self) {
        if self.cap == 0 || size_of::<T>() == 0 { return; }

        // UNWRAP: This layout was already computed successfully when the block was allocated.
        #[allow(clippy::unwrap_used)]
        let layout = Layout::array::<T>(self.cap).unwrap();
        // SAFETY: ptr was allocated by alloc (or a clone of it) with exactly this layout.
        unsafe { self.alloc.deallocate(self.ptr.cast(), layout) }
    }
}

impl<T, A: Allocator> Drop for Storage<T, A> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: The Storage is being dropped and never used again.
        unsafe { self.release_block(); }
    }
}

impl<T, A: Allocator> Deref for Storage<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized, ptr is properly aligned and non-null (even
        // if dangling for len == 0), and the borrow of self prevents mutation for the lifetime of
        // the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> DerefMut for Storage<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, with the mutable borrow of self ensuring exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> AsRef<[T]> for Storage<T, A> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T, A: Allocator> AsMut<[T]> for Storage<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T, A: Allocator> Borrow<[T]> for Storage<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for Storage<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Storage uniquely owns its block and elements, so it can be sent whenever its contents
// and allocator can.
unsafe impl<T: Send, A: Allocator + Send> Send for Storage<T, A> {}
// SAFETY: Storage's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Storage<T, A> {}

impl<T: Clone, A: Allocator> Clone for Storage<T, A> {
    /// Clones every live element into a new block with the same capacity. If cloning an element
    /// panics, the elements cloned so far are destroyed and the new block is released.
    fn clone(&self) -> Self {
        let mut copy = Storage::with_cap_in(self.cap, self.alloc.clone());

        for value in self.iter() {
            // SAFETY: copy has the same capacity as self, which holds at least len slots.
            unsafe { copy.append_unchecked(value.clone()); }
        }

        copy
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Storage::new()
    }
}

impl<T, A: Allocator> Extend<T> for Storage<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.len.saturating_add(iter.size_hint().0));

        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for Storage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut storage = Storage::with_cap(iter.size_hint().0);

        for item in iter {
            storage.append(item);
        }

        storage
    }
}

impl<T: PartialEq, A: Allocator> PartialEq for Storage<T, A> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, A: Allocator> Eq for Storage<T, A> {}

impl<T: Hash, A: Allocator> Hash for Storage<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, A: Allocator> Debug for Storage<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}
