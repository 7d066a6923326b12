use std::alloc::{self, Layout};
use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::ptr::{self, NonNull};
use std::rc::Rc;

use super::AllocError;

/// A source of raw memory, along with the hooks used to construct and destroy values inside of it.
///
/// Containers call [`allocate`](Allocator::allocate) / [`deallocate`](Allocator::deallocate) for
/// their backing blocks and [`construct`](Allocator::construct) / [`destroy`](Allocator::destroy)
/// for each element slot, so an implementation observes the full lifetime of every value.
///
/// # Safety
/// Implementors must return blocks that are valid for reads and writes of `layout.size()` bytes,
/// aligned to `layout.align()` and not aliased by any other live block, until the same block is
/// passed back to `deallocate`. Clones of an allocator must be able to free each other's blocks.
pub unsafe trait Allocator: Clone {
    /// Allocates a block described by `layout`. Containers never request zero-sized layouts.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases a block previously returned by [`allocate`](Allocator::allocate).
    ///
    /// # Safety
    /// `ptr` must have been allocated by this allocator (or a clone of it) with the same `layout`,
    /// and must not have been deallocated already.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Moves `value` into the uninitialized slot at `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for writes and properly aligned. Any value previously at `ptr` is
    /// overwritten without being dropped.
    unsafe fn construct<T>(&self, ptr: NonNull<T>, value: T) {
        // SAFETY: Validity and alignment of ptr are guaranteed by the caller.
        unsafe { ptr.write(value) }
    }

    /// Drops the value at `ptr` in place, leaving the slot uninitialized.
    ///
    /// # Safety
    /// `ptr` must point to an initialized value which isn't used again until it is reconstructed.
    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        // SAFETY: The caller guarantees that ptr is initialized and won't be read again.
        unsafe { ptr::drop_in_place(ptr.as_ptr()) }
    }
}

/// The process-wide allocator, as used by [`Box`] and friends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

// SAFETY: Blocks come directly from std::alloc, which upholds all of the trait's requirements.
unsafe impl Allocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0);
        // SAFETY: Containers never request zero-sized layouts.
        let raw = unsafe { alloc::alloc(layout) };
        NonNull::new(raw).ok_or(AllocError::for_layout(layout))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: The caller guarantees ptr was allocated here with the same layout.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

/// A snapshot of the counters kept by a [`Counting`] allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AllocStats {
    /// Blocks currently allocated and not yet released.
    pub live_blocks: usize,
    /// Bytes currently allocated and not yet released.
    pub live_bytes: usize,
    /// Blocks allocated over the lifetime of the allocator.
    pub total_blocks: usize,
    /// Values constructed through the allocator.
    pub constructed: usize,
    /// Values destroyed through the allocator.
    pub destroyed: usize,
}

/// An allocator which records every allocation, release, construction and destruction that passes
/// through it. All clones share the same counters.
///
/// # Examples
/// ```
/// # use container_core::memory::{Counting, Global};
/// # use container_core::collections::contiguous::Array;
/// let alloc = Counting::new(Global);
/// {
///     let mut arr = Array::new_in(alloc.clone());
///     arr.push(1_u32);
///     assert_eq!(alloc.stats().live_blocks, 1);
/// }
/// assert_eq!(alloc.stats().live_blocks, 0);
/// assert_eq!(alloc.stats().destroyed, 1);
/// ```
#[derive(Clone, Default)]
pub struct Counting<A: Allocator = Global> {
    inner: A,
    stats: Rc<Cell<AllocStats>>,
}

impl<A: Allocator> Counting<A> {
    /// Wraps `inner`, starting with all counters at zero.
    pub fn new(inner: A) -> Counting<A> {
        Counting {
            inner,
            stats: Rc::default(),
        }
    }

    /// Returns the current value of the shared counters.
    pub fn stats(&self) -> AllocStats {
        self.stats.get()
    }

    fn update(&self, f: impl FnOnce(&mut AllocStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

// SAFETY: All memory requests are forwarded to inner unchanged.
unsafe impl<A: Allocator> Allocator for Counting<A> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let ptr = self.inner.allocate(layout)?;
        self.update(|s| {
            s.live_blocks += 1;
            s.live_bytes += layout.size();
            s.total_blocks += 1;
        });
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.update(|s| {
            s.live_blocks -= 1;
            s.live_bytes -= layout.size();
        });
        // SAFETY: Requirements are passed on from the caller.
        unsafe { self.inner.deallocate(ptr, layout) }
    }

    unsafe fn construct<T>(&self, ptr: NonNull<T>, value: T) {
        self.update(|s| s.constructed += 1);
        // SAFETY: Requirements are passed on from the caller.
        unsafe { self.inner.construct(ptr, value) }
    }

    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        self.update(|s| s.destroyed += 1);
        // SAFETY: Requirements are passed on from the caller.
        unsafe { self.inner.destroy(ptr) }
    }
}

impl<A: Allocator + Debug> Debug for Counting<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counting")
            .field("inner", &self.inner)
            .field("stats", &self.stats())
            .finish()
    }
}

/// An allocator that serves a limited number of allocations and fails every request after that.
/// All clones draw from the same budget. Releasing memory doesn't refund the budget.
///
/// This is mostly useful to check how a container behaves when growth fails.
#[derive(Clone)]
pub struct Budget<A: Allocator = Global> {
    inner: A,
    remaining: Rc<Cell<usize>>,
}

impl Budget {
    /// Creates a budget of `allocations` requests on top of [`Global`].
    pub fn new(allocations: usize) -> Budget {
        Budget::wrap(Global, allocations)
    }
}

impl<A: Allocator> Budget<A> {
    /// Creates a budget of `allocations` requests on top of `inner`.
    pub fn wrap(inner: A, allocations: usize) -> Budget<A> {
        Budget {
            inner,
            remaining: Rc::new(Cell::new(allocations)),
        }
    }

    /// Returns the number of allocations that will still succeed.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    /// Replaces the number of allocations that will still succeed.
    pub fn set_remaining(&self, allocations: usize) {
        self.remaining.set(allocations);
    }
}

// SAFETY: Successful requests are forwarded to inner unchanged.
unsafe impl<A: Allocator> Allocator for Budget<A> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        match self.remaining.get().checked_sub(1) {
            Some(left) => {
                self.remaining.set(left);
                self.inner.allocate(layout)
            },
            None => Err(AllocError::for_layout(layout)),
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: Requirements are passed on from the caller.
        unsafe { self.inner.deallocate(ptr, layout) }
    }
}

impl<A: Allocator + Debug> Debug for Budget<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Budget")
            .field("inner", &self.inner)
            .field("remaining", &self.remaining())
            .finish()
    }
}
