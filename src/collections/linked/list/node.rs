use std::alloc::Layout;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::sync::atomic::{self, AtomicU64};

use crate::memory::{AllocError, Allocator};

/// A pointer to the links of a node, or to a list's sentinel, which is nothing but links.
pub(crate) type Link = NonNull<Links>;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Returns an id that no list has had before. Positions carry the id of the list that made them.
pub(crate) fn fresh_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    pub prev: Link,
    pub next: Link,
}

impl Links {
    pub const fn to_self(link: Link) -> Links {
        Links {
            prev: link,
            next: link,
        }
    }
}

/// Allocates a sentinel that links to itself.
pub(crate) fn allocate_sentinel<A: Allocator>(alloc: &A) -> Result<Link, AllocError> {
    let link = alloc.allocate(Layout::new::<Links>())?.cast::<Links>();
    // SAFETY: The block is fresh and sized and aligned for Links.
    unsafe { link.write(Links::to_self(link)) };
    Ok(link)
}

/// # Safety
/// `link` must come from [`allocate_sentinel`] on `alloc` or a clone of it, and must not be used
/// again.
pub(crate) unsafe fn deallocate_sentinel<A: Allocator>(alloc: &A, link: Link) {
    // SAFETY: Guaranteed by the caller.
    unsafe { alloc.deallocate(link.cast(), Layout::new::<Links>()) }
}

/// A heap node for one element. The links come first, so a [`Link`] to a node is also a pointer
/// to the whole node.
///
/// The generation is odd while the node holds an element and even while it is vacant. It's bumped
/// whenever an element enters or leaves, so a position made for one element never matches the next
/// element placed in the same node, and never matches a vacant node.
#[repr(C)]
pub(crate) struct Node<T> {
    pub links: Links,
    pub generation: u32,
    pub value: MaybeUninit<T>,
}

impl<T> Node<T> {
    const LAYOUT: Layout = Layout::new::<Node<T>>();

    /// Allocates a vacant node.
    pub fn allocate<A: Allocator>(alloc: &A) -> Result<Link, AllocError> {
        let node = alloc.allocate(Self::LAYOUT)?.cast::<Node<T>>();
        let link = node.cast::<Links>();
        // SAFETY: The block is fresh and sized and aligned for a Node<T>.
        unsafe {
            node.write(Node {
                links: Links::to_self(link),
                generation: 0,
                value: MaybeUninit::uninit(),
            });
        }
        Ok(link)
    }

    /// # Safety
    /// `link` must come from [`Node::allocate`] on `alloc` or a clone of it, its value must already
    /// be gone, and it must not be used again.
    pub unsafe fn deallocate<A: Allocator>(alloc: &A, link: Link) {
        // SAFETY: Guaranteed by the caller.
        unsafe { alloc.deallocate(link.cast(), Self::LAYOUT) }
    }

    /// Returns a pointer to the value field of the node behind `link`. Nothing is read.
    ///
    /// # Safety
    /// `link` must point at a live `Node<T>`, not at a sentinel.
    pub unsafe fn value_ptr(link: Link) -> NonNull<T> {
        let node = link.cast::<Node<T>>().as_ptr();
        // SAFETY: The node is live, so the address of its field is in bounds and non-null.
        unsafe { NonNull::new_unchecked((&raw mut (*node).value).cast::<T>()) }
    }

    /// # Safety
    /// `link` must point at a live `Node<T>`, not at a sentinel.
    pub unsafe fn generation(link: Link) -> u32 {
        // SAFETY: Guaranteed by the caller.
        unsafe { (*link.cast::<Node<T>>().as_ptr()).generation }
    }

    /// # Safety
    /// `link` must point at a live `Node<T>`, not at a sentinel.
    pub unsafe fn bump_generation(link: Link) {
        let node = link.cast::<Node<T>>().as_ptr();
        // SAFETY: Guaranteed by the caller.
        unsafe { (*node).generation = (*node).generation.wrapping_add(1) }
    }
}
