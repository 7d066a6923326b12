use std::cmp::Ordering;
use std::thread;

use super::{Link, List};
use crate::memory::Allocator;
use crate::util::log::coll_trace;

impl<T, A: Allocator> List<T, A> {
    /// Sorts the List in ascending order. See [`sort_by`](List::sort_by).
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::linked::List;
    /// let mut list = List::from_iter([5, 3, 8, 1]);
    /// list.sort();
    /// assert_eq!(list.to_string(), "(1) -> (3) -> (5) -> (8)");
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sorts the List with a stable merge sort, as ordered by `compare`.
    ///
    /// Elements are only relinked, never moved, so every position stays valid and keeps referring
    /// to the same element. The List is split in half by walking one link at single steps and
    /// another at double steps, with the first half taking the extra element of an odd length.
    ///
    /// Only next links change while sorting, and prev links are rebuilt once every comparison is
    /// done. If `compare` panics, the next links are restored from the untouched prev links, so the
    /// List is left in its original order before the panic continues.
    pub fn sort_by(&mut self, mut compare: impl FnMut(&T, &T) -> Ordering) {
        if self.len < 2 { return; }

        coll_trace!("sorting list of {} elements", self.len);

        let mut guard = RestoreOnUnwind { list: self };
        let list = &mut *guard.list;

        // The chain of next links from the first element already ends at the sentinel, which
        // serves as the terminator throughout.
        let first = list.links(list.sentinel).next;
        let head = list.merge_sort(first, &mut compare);
        list.rebuild_prev_links(head);
    }

    fn merge_sort(&mut self, head: Link, compare: &mut impl FnMut(&T, &T) -> Ordering) -> Link {
        let end = self.sentinel;
        if head == end || self.links(head).next == end { return head; }

        let mut slow = head;
        let mut fast = head;
        loop {
            let step = self.links(fast).next;
            if step == end { break; }
            let leap = self.links(step).next;
            if leap == end { break; }

            slow = self.links(slow).next;
            fast = leap;
        }

        let second = self.links(slow).next;
        self.set_next(slow, end);

        let first = self.merge_sort(head, compare);
        let second = self.merge_sort(second, compare);
        self.merge_chains(first, second, compare)
    }

    /// Merges two sentinel-terminated chains, preferring `a` when elements compare equal.
    fn merge_chains(
        &mut self,
        mut a: Link,
        mut b: Link,
        compare: &mut impl FnMut(&T, &T) -> Ordering,
    ) -> Link {
        let end = self.sentinel;
        let mut head = end;
        let mut tail = end;

        while a != end && b != end {
            let taken = if compare(self.value_at(b), self.value_at(a)).is_lt() {
                let taken = b;
                b = self.links(b).next;
                taken
            } else {
                let taken = a;
                a = self.links(a).next;
                taken
            };

            match tail == end {
                true => head = taken,
                false => self.set_next(tail, taken),
            }
            tail = taken;
        }

        let rest = if a != end { a } else { b };
        match tail == end {
            true => rest,
            false => {
                self.set_next(tail, rest);
                head
            },
        }
    }

    /// Walks the next links from `head` and points every prev link back along them, closing the
    /// circle through the sentinel.
    fn rebuild_prev_links(&mut self, head: Link) {
        let end = self.sentinel;
        let mut prev = end;
        let mut at = head;
        while at != end {
            self.set_prev(at, prev);
            prev = at;
            at = self.links(at).next;
        }

        self.set_prev(end, prev);
        self.set_next(end, head);
    }

    /// Points every next link forward along the prev links, which sorting leaves alone until it
    /// has finished comparing.
    fn restore_next_links(&mut self) {
        let end = self.sentinel;
        let mut at = end;
        loop {
            let prev = self.links(at).prev;
            self.set_next(prev, at);
            if prev == end { break; }
            at = prev;
        }
    }
}

struct RestoreOnUnwind<'a, T, A: Allocator> {
    list: &'a mut List<T, A>,
}

impl<T, A: Allocator> Drop for RestoreOnUnwind<'_, T, A> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.list.restore_next_links();
        }
    }
}
