use super::{Link, List, Position, Side};
use crate::memory::{Allocator, Global};
use crate::util::result::ResultExtension;

impl<T, A: Allocator> List<T, A> {
    /// Creates a [`Cursor`] at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is stale.
    pub fn cursor(&self, pos: Position) -> Cursor<'_, T, A> {
        let at = self.validate(pos).throw();
        Cursor {
            list: self,
            at,
        }
    }

    /// Creates a [`Cursor`] at the first element, or at the end if the List is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T, A> {
        self.cursor(self.begin())
    }

    /// Creates a [`CursorMut`] at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is stale.
    pub fn cursor_mut(&mut self, pos: Position) -> CursorMut<'_, T, A> {
        let at = self.validate(pos).throw();
        CursorMut {
            list: self,
            at,
        }
    }

    /// Creates a [`CursorMut`] at the first element, or at the end if the List is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, A> {
        let begin = self.begin();
        self.cursor_mut(begin)
    }
}

/// A read-only cursor for bi-directional traversal of a [`List`].
///
/// The cursor always rests on an element or on the end of the List. Like the List itself, it is
/// circular: moving past the last element reaches the end, and moving past the end wraps around to
/// the first element.
pub struct Cursor<'a, T, A: Allocator = Global> {
    pub(crate) list: &'a List<T, A>,
    pub(crate) at: Link,
}

impl<'a, T, A: Allocator> Cursor<'a, T, A> {
    /// Returns the element under the cursor, or None at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.list.value_of(self.at)
    }

    pub fn position(&self) -> Position {
        self.list.position_of(self.at)
    }

    pub fn is_end(&self) -> bool {
        self.at == self.list.sentinel
    }

    pub fn move_next(&mut self) {
        self.at = self.list.links(self.at).next;
    }

    pub fn move_prev(&mut self) {
        self.at = self.list.links(self.at).prev;
    }

    /// Returns the element after the cursor without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.list.value_of(self.list.links(self.at).next)
    }

    /// Returns the element before the cursor without moving.
    pub fn peek_prev(&self) -> Option<&'a T> {
        self.list.value_of(self.list.links(self.at).prev)
    }
}

impl<T, A: Allocator> Clone for Cursor<'_, T, A> {
    fn clone(&self) -> Self {
        Cursor {
            list: self.list,
            at: self.at,
        }
    }
}

/// A cursor for bi-directional traversal and mutation of a [`List`]. See [`Cursor`] for the
/// movement rules.
pub struct CursorMut<'a, T, A: Allocator = Global> {
    pub(crate) list: &'a mut List<T, A>,
    pub(crate) at: Link,
}

impl<'a, T, A: Allocator> CursorMut<'a, T, A> {
    pub fn current(&self) -> Option<&T> {
        self.list.value_of(self.at)
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.list.value_of_mut(self.at)
    }

    pub fn position(&self) -> Position {
        self.list.position_of(self.at)
    }

    pub fn is_end(&self) -> bool {
        self.at == self.list.sentinel
    }

    pub fn move_next(&mut self) {
        self.at = self.list.links(self.at).next;
    }

    pub fn move_prev(&mut self) {
        self.at = self.list.links(self.at).prev;
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.list.value_of(self.list.links(self.at).next)
    }

    pub fn peek_prev(&self) -> Option<&T> {
        self.list.value_of(self.list.links(self.at).prev)
    }

    /// Inserts `value` in front of the cursor. At the end, this appends to the List.
    pub fn insert_before(&mut self, value: T) -> Position {
        let at = self.position();
        self.list.insert(at, value, Side::Front)
    }

    /// Inserts `value` behind the cursor. At the end, this prepends to the List.
    pub fn insert_after(&mut self, value: T) -> Position {
        let at = self.position();
        self.list.insert(at, value, Side::Back)
    }

    /// Removes the element under the cursor and moves on to the one that followed it. Does nothing
    /// and returns None at the end.
    pub fn remove(&mut self) -> Option<T> {
        let next = self.list.links(self.at).next;
        let value = self.list.take_node(self.at)?;
        self.at = next;
        Some(value)
    }

    /// Drops the element under the cursor and moves on to the one that followed it.
    pub fn erase(&mut self) {
        drop(self.remove());
    }

    /// Downgrades to a read-only cursor at the same place.
    pub fn into_cursor(self) -> Cursor<'a, T, A> {
        Cursor {
            list: self.list,
            at: self.at,
        }
    }
}
