//! Element types for observing how collections construct, clone and destroy their contents.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroSizedType;

/// A shared counter which is incremented whenever a [`Tracked`] created from it is dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            counter: self.clone(),
        }
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct Tracked<T> {
    pub value: T,
    counter: DropCounter,
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}

/// Panics while being cloned once the shared fuse has burnt down to zero. Every successful clone
/// uses up one unit of the fuse.
#[derive(Debug)]
pub struct PanicOnClone {
    pub id: usize,
    fuse: Rc<Cell<usize>>,
}

impl PanicOnClone {
    pub fn batch(count: usize, fuse: usize) -> impl Iterator<Item = PanicOnClone> {
        let fuse = Rc::new(Cell::new(fuse));
        (0..count).map(move |id| PanicOnClone { id, fuse: fuse.clone() })
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        match self.fuse.get().checked_sub(1) {
            Some(left) => self.fuse.set(left),
            None => panic!("clone of element {} failed", self.id),
        }
        PanicOnClone {
            id: self.id,
            fuse: self.fuse.clone(),
        }
    }
}
