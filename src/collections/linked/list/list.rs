use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{
    allocate_sentinel, deallocate_sentinel, fresh_list_id, Link, Links, Node, StalePosition,
};
use crate::memory::{AllocError, Allocator, Global};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// The side of an existing element that a new element is inserted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Side {
    /// Immediately before the element, closer to the front of the list.
    Front,
    /// Immediately after the element, closer to the back of the list.
    Back,
}

/// A detached handle to an element of a [`List`], or to its end.
///
/// Positions are plain values that don't borrow the list, so they can be stored and used later.
/// Once the element they refer to is erased, removed or cleared, the position becomes stale and
/// every method that takes it reports a [`StalePosition`] instead of touching another element.
/// Positions of all other elements remain valid, including across inserts and sorts.
///
/// Splicing elements out of a list makes every position that list handed out stale, since the
/// moved nodes are no longer its own. The receiving list's positions are unaffected. The end
/// position never becomes stale and is shared by every list.
///
/// Positions follow their elements when whole lists are exchanged through [`List::swap`] or
/// [`List::take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) node: Option<Link>,
    pub(crate) generation: u32,
    pub(crate) list: u64,
}

// SAFETY: The node pointer is only dereferenced by the List whose id the position carries, which
// owns the node, and only through that List's own &self or &mut self.
unsafe impl Send for Position {}
// SAFETY: See above. A shared Position is never dereferenced on its own.
unsafe impl Sync for Position {}

impl Position {
    /// The position of the sentinel, which every list shares.
    pub(crate) const END: Position = Position {
        node: None,
        generation: 0,
        list: 0,
    };

    /// Returns true if this is the end position of a list.
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

/// A doubly linked list with a sentinel, made of individually allocated nodes.
///
/// The list is circular through the sentinel, so there is no special case for the first or last
/// element: [`begin`](List::begin) is the sentinel's next element, the sentinel itself is
/// [`end`](List::end) and an empty list is a sentinel that links to itself. The sentinel holds no
/// value, so `T` needs no default.
///
/// Each node is its own allocation, so moving elements between lists is only a matter of relinking
/// them. Erased nodes are kept on a free chain and reused by later inserts, and each reuse is told
/// apart from the original by a generation count. Elements can be referred to with a [`Position`],
/// traversed with a [`Cursor`] or [`CursorMut`], or iterated over with [`Iter`], [`IterMut`] and
/// [`IntoIter`].
///
/// Lists that splice into each other should share an allocator (or clones of one), because nodes
/// are released through whichever list holds them last.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `m`: The number of items moved from the other List.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `insert` | `O(1)` |
/// | `erase` / `remove` | `O(1)` |
/// | `find` | `O(n)` |
/// | `splice_one` | `O(1)` |
/// | `splice_range` | `O(m)`* |
/// | `splice_all` | `O(1)` |
/// | `merge` | `O(n+m)` |
/// | `sort` | `O(n log n)` |
/// | `clear` | `O(n)` |
///
/// \* The range is walked once to count it. The relinking itself is `O(1)`.
///
/// [`Cursor`]: super::Cursor
/// [`CursorMut`]: super::CursorMut
/// [`Iter`]: super::Iter
/// [`IterMut`]: super::IterMut
/// [`IntoIter`]: super::IntoIter
pub struct List<T, A: Allocator = Global> {
    pub(crate) sentinel: Link,
    /// Vacant nodes kept for reuse, chained through their next links.
    pub(crate) free: Option<Link>,
    pub(crate) len: usize,
    pub(crate) id: u64,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> List<T> {
    /// Creates a new List with no elements.
    ///
    /// # Panics
    /// Panics if the sentinel can't be allocated.
    pub fn new() -> List<T> {
        List::new_in(Global)
    }
}

impl<T, A: Allocator> List<T, A> {
    /// Creates a new List with no elements, allocating its nodes from `alloc`.
    ///
    /// # Panics
    /// Panics if the sentinel can't be allocated.
    pub fn new_in(alloc: A) -> List<T, A> {
        List::try_new_in(alloc).throw()
    }

    /// Creates a new List with no elements, returning an [`Err`] if the sentinel can't be
    /// allocated.
    pub fn try_new_in(alloc: A) -> Result<List<T, A>, AllocError> {
        let sentinel = allocate_sentinel(&alloc)?;
        Ok(List {
            sentinel,
            free: None,
            len: 0,
            id: fresh_list_id(),
            alloc,
            _phantom: PhantomData,
        })
    }

    /// Returns the length of the List.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the List contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the allocator backing this List's nodes.
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the position of the first element, which is [`end`](List::end) if the List is
    /// empty.
    pub fn begin(&self) -> Position {
        self.position_of(self.links(self.sentinel).next)
    }

    /// Returns the position after the last element. This position never becomes stale.
    pub const fn end(&self) -> Position {
        Position::END
    }

    /// Returns the position following `pos`. The list is circular, so the element after the last
    /// one is [`end`](List::end) and the element after `end` is [`begin`](List::begin).
    ///
    /// # Panics
    /// Panics if `pos` is stale.
    pub fn next(&self, pos: Position) -> Position {
        let at = self.validate(pos).throw();
        self.position_of(self.links(at).next)
    }

    /// Returns the position preceding `pos`, wrapping around through [`end`](List::end).
    ///
    /// # Panics
    /// Panics if `pos` is stale.
    pub fn prev(&self, pos: Position) -> Position {
        let at = self.validate(pos).throw();
        self.position_of(self.links(at).prev)
    }

    /// Returns true if `pos` refers to a live element of this List or to its end.
    pub fn contains_position(&self, pos: Position) -> bool {
        self.validate(pos).is_ok()
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is stale or the end of the List.
    pub fn get(&self, pos: Position) -> &T {
        self.try_get(pos).throw()
    }

    /// Returns a reference to the element at `pos`, or an [`Err`] if `pos` is stale or the end of
    /// the List.
    pub fn try_get(&self, pos: Position) -> Result<&T, StalePosition> {
        let at = self.validate(pos)?;
        self.value_of(at).ok_or(StalePosition)
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is stale or the end of the List.
    pub fn get_mut(&mut self, pos: Position) -> &mut T {
        self.try_get_mut(pos).throw()
    }

    /// Returns a mutable reference to the element at `pos`, or an [`Err`] if `pos` is stale or the
    /// end of the List.
    pub fn try_get_mut(&mut self, pos: Position) -> Result<&mut T, StalePosition> {
        let at = self.validate(pos)?;
        self.value_of_mut(at).ok_or(StalePosition)
    }

    /// Returns a reference to the first element in the List, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.value_of(self.links(self.sentinel).next)
    }

    /// Returns a mutable reference to the first element in the List, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.links(self.sentinel).next;
        self.value_of_mut(first)
    }

    /// Returns a reference to the last element in the List, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.value_of(self.links(self.sentinel).prev)
    }

    /// Returns a mutable reference to the last element in the List, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.links(self.sentinel).prev;
        self.value_of_mut(last)
    }

    /// Adds the provided element to the front of the List and returns its position.
    pub fn push_front(&mut self, value: T) -> Position {
        self.insert(Position::END, value, Side::Back)
    }

    /// Adds the provided element to the back of the List and returns its position.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::linked::List;
    /// let mut list = List::new();
    /// list.push_back(2);
    /// list.push_back(3);
    /// list.push_front(1);
    /// assert_eq!(list.to_string(), "(1) -> (2) -> (3)");
    /// ```
    pub fn push_back(&mut self, value: T) -> Position {
        self.insert(Position::END, value, Side::Front)
    }

    /// Removes the first element from the List and returns it, if the List isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.links(self.sentinel).next;
        self.take_node(first)
    }

    /// Removes the last element from the List and returns it, if the List isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.links(self.sentinel).prev;
        self.take_node(last)
    }

    /// Inserts `value` on the given `side` of `pos` and returns the new element's position.
    /// Inserting in front of [`end`](List::end) appends to the List and inserting behind `end`
    /// prepends to it.
    ///
    /// The value is placed in a node before any links change, so a failed allocation leaves the
    /// List as it was.
    ///
    /// # Panics
    /// Panics if `pos` is stale or a node can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::linked::{List, Side};
    /// let mut list = List::from_iter([1, 3]);
    /// let three = list.next(list.begin());
    /// list.insert(three, 2, Side::Front);
    /// list.insert(three, 4, Side::Back);
    /// assert_eq!(list.to_string(), "(1) -> (2) -> (3) -> (4)");
    /// ```
    pub fn insert(&mut self, pos: Position, value: T, side: Side) -> Position {
        let at = self.validate(pos).throw();
        let (prev, next) = match side {
            Side::Front => (self.links(at).prev, at),
            Side::Back => (at, self.links(at).next),
        };

        let node = self.claim_node(value);
        self.link_between(node, prev, next);
        self.len += 1;
        self.position_of(node)
    }

    /// Unlinks and drops the element at `pos`, returning the position of the element that
    /// followed it. Erasing [`end`](List::end) does nothing and returns `end`.
    ///
    /// # Panics
    /// Panics if `pos` is stale.
    pub fn erase(&mut self, pos: Position) -> Position {
        let at = self.validate(pos).throw();
        if at == self.sentinel { return Position::END; }

        let next = self.links(at).next;
        drop(self.take_node(at));
        self.position_of(next)
    }

    /// Unlinks the element at `pos` and returns it. Returns None for [`end`](List::end).
    ///
    /// # Panics
    /// Panics if `pos` is stale.
    pub fn remove(&mut self, pos: Position) -> Option<T> {
        let at = self.validate(pos).throw();
        self.take_node(at)
    }

    /// Returns the position of the first element for which `predicate` returns true.
    pub fn find_by(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Position> {
        let mut at = self.links(self.sentinel).next;
        while at != self.sentinel {
            if self.value_of(at).is_some_and(&mut predicate) {
                return Some(self.position_of(at));
            }
            at = self.links(at).next;
        }
        None
    }

    /// Moves the element at `src` out of `other` and links it in front of `dest`, returning its
    /// new position. Only links change: the value is neither moved, cloned nor dropped, and
    /// nothing is allocated. Returns None and does nothing if `src` is the end of `other`.
    ///
    /// `other` can never be this List, so splicing an element onto itself is ruled out statically.
    /// Every position handed out by `other` becomes stale.
    ///
    /// # Panics
    /// Panics if either position is stale. Neither List is modified in that case.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::linked::List;
    /// let mut a = List::from_iter([1, 2, 3]);
    /// let mut b = List::from_iter([9, 8]);
    /// let two = a.next(a.begin());
    /// b.splice_one(b.begin(), &mut a, two);
    /// assert_eq!(a.to_string(), "(1) -> (3)");
    /// assert_eq!(b.to_string(), "(2) -> (9) -> (8)");
    /// ```
    pub fn splice_one(
        &mut self,
        dest: Position,
        other: &mut List<T, A>,
        src: Position,
    ) -> Option<Position> {
        let dest = self.validate(dest).throw();
        let src = other.validate(src).throw();
        if src == other.sentinel { return None; }

        let stop = other.links(src).next;
        self.relink_range(dest, other, src, stop, 1);
        Some(self.position_of(src))
    }

    /// Moves the elements of `other` from `first` up to, but excluding, `last` in front of `dest`,
    /// keeping their order. Returns the number of elements moved. If `last` doesn't follow
    /// `first`, everything from `first` to the end of `other` is moved.
    ///
    /// Nothing is allocated and no value is moved. If anything was moved, every position handed
    /// out by `other` becomes stale.
    ///
    /// # Panics
    /// Panics if any position is stale. Neither List is modified in that case.
    pub fn splice_range(
        &mut self,
        dest: Position,
        other: &mut List<T, A>,
        first: Position,
        last: Position,
    ) -> usize {
        let dest = self.validate(dest).throw();
        let first = other.validate(first).throw();
        let last = other.validate(last).throw();

        let mut count = 0;
        let mut stop = first;
        while stop != last && stop != other.sentinel {
            count += 1;
            stop = other.links(stop).next;
        }

        self.relink_range(dest, other, first, stop, count);
        count
    }

    /// Moves every element of `other` in front of `dest`, leaving `other` empty. This relinks the
    /// two ends of `other`'s chain and nothing else, so it takes constant time and never
    /// allocates.
    ///
    /// # Panics
    /// Panics if `dest` is stale. Neither List is modified in that case.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::linked::List;
    /// let mut a = List::from_iter([1, 4]);
    /// let mut b = List::from_iter([2, 3]);
    /// let four = a.prev(a.end());
    /// a.splice_all(four, &mut b);
    /// assert_eq!(a.to_string(), "(1) -> (2) -> (3) -> (4)");
    /// assert!(b.is_empty());
    /// ```
    pub fn splice_all(&mut self, dest: Position, other: &mut List<T, A>) {
        let dest = self.validate(dest).throw();
        let first = other.links(other.sentinel).next;
        let count = other.len;
        self.relink_range(dest, other, first, other.sentinel, count);
    }

    /// Merges the already sorted `other` into this already sorted List, leaving `other` empty.
    /// The merge is stable: equal elements keep their relative order, with this List's elements
    /// in front of `other`'s.
    ///
    /// Elements are relinked one at a time, so if `compare` panics, both Lists are still valid
    /// and hold every element between them.
    pub fn merge(&mut self, other: &mut List<T, A>)
    where
        T: Ord,
    {
        self.merge_by(other, T::cmp)
    }

    /// Merges the already sorted `other` into this List, as ordered by `compare`.
    pub fn merge_by(&mut self, other: &mut List<T, A>, mut compare: impl FnMut(&T, &T) -> Ordering) {
        let mut here = self.links(self.sentinel).next;
        while !other.is_empty() {
            if here == self.sentinel {
                let first = other.links(other.sentinel).next;
                let count = other.len;
                self.relink_range(here, other, first, other.sentinel, count);
                break;
            }

            let incoming = other.links(other.sentinel).next;
            if compare(other.value_at(incoming), self.value_at(here)).is_lt() {
                let stop = other.links(incoming).next;
                self.relink_range(here, other, incoming, stop, 1);
            } else {
                here = self.links(here).next;
            }
        }
    }

    /// Drops every element and releases every node. All positions except [`end`](List::end)
    /// become stale.
    pub fn clear(&mut self) {
        self.id = fresh_list_id();

        // Each node is unlinked before its value is dropped, so a panicking drop leaks that node
        // but leaves the List intact.
        loop {
            let first = self.links(self.sentinel).next;
            if first == self.sentinel { break; }

            self.unlink(first);
            self.len -= 1;
            // SAFETY: first was linked, so it's a Node<T> holding a value, and it's no longer
            // reachable from the List.
            unsafe {
                self.alloc.destroy(Node::<T>::value_ptr(first));
                Node::<T>::deallocate(&self.alloc, first);
            }
        }

        while let Some(node) = self.free {
            self.free = self.next_free(node);
            // SAFETY: Nodes on the free chain are vacant and owned by this List.
            unsafe { Node::<T>::deallocate(&self.alloc, node) };
        }
    }

    /// Exchanges the contents of two Lists.
    pub fn swap(&mut self, other: &mut List<T, A>) {
        mem::swap(self, other);
    }

    /// Moves the contents out into a new List, leaving `self` empty.
    ///
    /// # Panics
    /// Panics if a new sentinel can't be allocated for `self`.
    pub fn take(&mut self) -> List<T, A> {
        let empty = List::new_in(self.alloc.clone());
        mem::replace(self, empty)
    }
}

impl<T: PartialEq, A: Allocator> List<T, A> {
    /// Returns the position of the first element equal to `item`.
    pub fn find(&self, item: &T) -> Option<Position> {
        self.find_by(|element| element == item)
    }

    /// Returns true if the List contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }
}

impl<T, A: Allocator> List<T, A> {
    pub(crate) fn position_of(&self, at: Link) -> Position {
        if at == self.sentinel { return Position::END; }

        Position {
            node: Some(at),
            // SAFETY: Every linked node other than the sentinel is a live Node<T>.
            generation: unsafe { Node::<T>::generation(at) },
            list: self.id,
        }
    }

    /// Checks that `pos` is this List's end or one of its live elements, returning its link.
    pub(crate) fn validate(&self, pos: Position) -> Result<Link, StalePosition> {
        let Some(node) = pos.node else { return Ok(self.sentinel) };
        if pos.list != self.id { return Err(StalePosition); }

        // SAFETY: The position was made by this List under its current id. Nodes only leave a List
        // by being spliced out or cleared, and both change the id, so the node is still owned by
        // this List, either linked in or vacant on the free chain.
        let generation = unsafe { Node::<T>::generation(node) };
        match generation == pos.generation {
            true => Ok(node),
            false => Err(StalePosition),
        }
    }

    /// Reads the links of `at`, which must be the sentinel or a node owned by this List.
    pub(crate) fn links(&self, at: Link) -> Links {
        // SAFETY: The sentinel and every node owned by this List are live allocations.
        unsafe { *at.as_ptr() }
    }

    pub(crate) fn set_prev(&mut self, at: Link, prev: Link) {
        // SAFETY: As for links.
        unsafe { (*at.as_ptr()).prev = prev }
    }

    pub(crate) fn set_next(&mut self, at: Link, next: Link) {
        // SAFETY: As for links.
        unsafe { (*at.as_ptr()).next = next }
    }

    /// Returns the value of a linked node, or None for the sentinel.
    pub(crate) fn value_of(&self, at: Link) -> Option<&T> {
        if at == self.sentinel { return None; }

        // SAFETY: Every linked node other than the sentinel holds an initialized value, which
        // lives as long as the borrow of the List.
        Some(unsafe { Node::<T>::value_ptr(at).as_ref() })
    }

    pub(crate) fn value_of_mut(&mut self, at: Link) -> Option<&mut T> {
        if at == self.sentinel { return None; }

        // SAFETY: As for value_of, and the List is borrowed mutably.
        Some(unsafe { Node::<T>::value_ptr(at).as_mut() })
    }

    /// Returns the value of a node that is known to be linked in.
    pub(crate) fn value_at(&self, at: Link) -> &T {
        match self.value_of(at) {
            Some(value) => value,
            None => panic!("the sentinel holds no value"),
        }
    }

    fn next_free(&self, node: Link) -> Option<Link> {
        let next = self.links(node).next;
        match next == node {
            true => None,
            false => Some(next),
        }
    }

    /// Places `value` in a vacant node, reusing one from the free chain if possible.
    fn claim_node(&mut self, value: T) -> Link {
        let node = match self.free {
            Some(node) => {
                self.free = self.next_free(node);
                node
            },
            None => Node::<T>::allocate(&self.alloc).throw(),
        };

        // SAFETY: The node is vacant and owned by this List, so its value is uninitialized.
        unsafe {
            self.alloc.construct(Node::<T>::value_ptr(node), value);
            Node::<T>::bump_generation(node);
        }
        node
    }

    fn link_between(&mut self, node: Link, prev: Link, next: Link) {
        // SAFETY: node is owned by this List and about to be linked in.
        unsafe { node.write(Links { prev, next }) };
        self.set_next(prev, node);
        self.set_prev(next, node);
    }

    fn unlink(&mut self, at: Link) {
        let Links { prev, next } = self.links(at);
        self.set_next(prev, next);
        self.set_prev(next, prev);
    }

    /// Moves the nodes of `other` from `first` up to, but excluding, `stop` in front of `dest`.
    /// `count` must be the number of nodes in that range.
    fn relink_range(&mut self, dest: Link, other: &mut List<T, A>, first: Link, stop: Link, count: usize) {
        if count == 0 { return; }

        let before = other.links(first).prev;
        let last = other.links(stop).prev;
        other.set_next(before, stop);
        other.set_prev(stop, before);
        other.len -= count;
        other.id = fresh_list_id();

        let prev = self.links(dest).prev;
        self.set_next(prev, first);
        self.set_prev(first, prev);
        self.set_next(last, dest);
        self.set_prev(dest, last);
        self.len += count;
    }

    /// Unlinks the node at `at`, puts it on the free chain and returns its value. Returns None for
    /// the sentinel.
    pub(crate) fn take_node(&mut self, at: Link) -> Option<T> {
        if at == self.sentinel { return None; }

        self.unlink(at);
        self.len -= 1;

        // SAFETY: at was linked, so it holds a value. Reading it out leaves the node vacant, and
        // the even generation means no position can reach the value again.
        let value = unsafe {
            Node::<T>::bump_generation(at);
            Node::<T>::value_ptr(at).read()
        };

        let next = self.free.unwrap_or(at);
        self.set_next(at, next);
        self.free = Some(at);
        Some(value)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T, A: Allocator> Drop for List<T, A> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: The sentinel was allocated from this allocator when the List was created.
        unsafe { deallocate_sentinel(&self.alloc, self.sentinel) };
    }
}

// SAFETY: A List exclusively owns its nodes, and only hands out access to them through &self and
// &mut self.
unsafe impl<T: Send, A: Allocator + Send> Send for List<T, A> {}
// SAFETY: See above, no interior mutability occurs.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for List<T, A> {}

impl<T: Clone, A: Allocator> Clone for List<T, A> {
    /// Clones every element into a new List. If cloning an element panics, the partial copy is
    /// dropped and nothing leaks.
    fn clone(&self) -> Self {
        let mut list = List::new_in(self.alloc.clone());
        for value in self.iter() {
            list.push_back(value.clone());
        }
        list
    }
}

impl<T, A: Allocator> Extend<T> for List<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq, A: Allocator> PartialEq for List<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> {}

impl<T: Hash, A: Allocator> Hash for List<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug, A: Allocator> Debug for List<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug, A: Allocator> Display for List<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({item:?})")?;
        }
        Ok(())
    }
}
