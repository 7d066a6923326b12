use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::{Bucket, HashMap};
use crate::collections::KeyValue;
use crate::collections::contiguous::IntoIter as ArrIntoIter;
use crate::collections::linked::list::{
    IntoIter as ListIntoIter, Iter as ListIter, IterMut as ListIterMut,
};
use crate::memory::{Allocator, Global};

use std::slice::Iter as ArrIter;
use std::slice::IterMut as ArrIterMut;

impl<K: Hash + Eq, V, S: BuildHasher, A: Allocator> IntoIterator for HashMap<K, V, S, A> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            buckets: self.buckets.into_iter(),
            current: None,
        }
    }
}

/// A type for owned iteration over the entries of a [`HashMap`], in bucket order.
pub struct IntoIter<K, V, A: Allocator = Global> {
    pub(crate) buckets: ArrIntoIter<Bucket<K, V, A>, A>,
    pub(crate) current: Option<ListIntoIter<KeyValue<K, V>, A>>,
    pub(crate) len: usize,
}

impl<K, V, A: Allocator> Iterator for IntoIter<K, V, A> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some(entry.into_parts());
            }
            self.current = Some(self.buckets.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V, A: Allocator> FusedIterator for IntoIter<K, V, A> {}

impl<K, V, A: Allocator> ExactSizeIterator for IntoIter<K, V, A> {}

impl<'a, K: Hash + Eq, V, S: BuildHasher, A: Allocator> IntoIterator
    for &'a HashMap<K, V, S, A>
{
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over the entries of a [`HashMap`], in bucket order.
pub struct Iter<'a, K, V, A: Allocator = Global> {
    pub(crate) buckets: ArrIter<'a, Bucket<K, V, A>>,
    pub(crate) current: Option<ListIter<'a, KeyValue<K, V>, A>>,
    pub(crate) len: usize,
}

impl<'a, K, V, A: Allocator> Iterator for Iter<'a, K, V, A> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some((entry.key(), entry.value()));
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V, A: Allocator> FusedIterator for Iter<'_, K, V, A> {}

impl<K, V, A: Allocator> ExactSizeIterator for Iter<'_, K, V, A> {}

impl<K, V, A: Allocator> Clone for Iter<'_, K, V, A> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            current: self.current.clone(),
            len: self.len,
        }
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher, A: Allocator> IntoIterator
    for &'a mut HashMap<K, V, S, A>
{
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for iteration over the entries of a [`HashMap`] with mutable access to the values. Keys
/// are only ever handed out immutably.
pub struct IterMut<'a, K, V, A: Allocator = Global> {
    pub(crate) buckets: ArrIterMut<'a, Bucket<K, V, A>>,
    pub(crate) current: Option<ListIterMut<'a, KeyValue<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K, V, A: Allocator> Iterator for IterMut<'a, K, V, A> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some(entry.parts_mut());
            }
            self.current = Some(self.buckets.next()?.iter_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V, A: Allocator> FusedIterator for IterMut<'_, K, V, A> {}

impl<K, V, A: Allocator> ExactSizeIterator for IterMut<'_, K, V, A> {}

pub struct IntoKeys<K, V, A: Allocator = Global>(
    pub(crate) IntoIter<K, V, A>
);

impl<K, V, A: Allocator> Iterator for IntoKeys<K, V, A> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, A: Allocator> ExactSizeIterator for IntoKeys<K, V, A> {}

pub struct Keys<'a, K, V, A: Allocator = Global>(
    pub(crate) Iter<'a, K, V, A>
);

impl<'a, K, V, A: Allocator> Iterator for Keys<'a, K, V, A> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, A: Allocator> ExactSizeIterator for Keys<'_, K, V, A> {}

pub struct IntoValues<K, V, A: Allocator = Global>(
    pub(crate) IntoIter<K, V, A>
);

impl<K, V, A: Allocator> Iterator for IntoValues<K, V, A> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, A: Allocator> ExactSizeIterator for IntoValues<K, V, A> {}

pub struct ValuesMut<'a, K, V, A: Allocator = Global>(
    pub(crate) IterMut<'a, K, V, A>
);

impl<'a, K, V, A: Allocator> Iterator for ValuesMut<'a, K, V, A> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, A: Allocator> ExactSizeIterator for ValuesMut<'_, K, V, A> {}

pub struct Values<'a, K, V, A: Allocator = Global>(
    pub(crate) Iter<'a, K, V, A>
);

impl<'a, K, V, A: Allocator> Iterator for Values<'a, K, V, A> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, A: Allocator> ExactSizeIterator for Values<'_, K, V, A> {}
