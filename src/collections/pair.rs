//! A module containing [`KeyValue`], the owned pair stored by associative collections.

use std::fmt::{self, Display, Formatter};
use std::mem;

/// An owned key and value, stored together as a single element.
///
/// The key can only be read once the pair is constructed, so a collection which indexes its
/// elements by key can hand out a KeyValue (or a reference to its value) without the key being
/// changed behind its back. Replacing a key means replacing the whole pair.
///
/// Pairs are ordered lexicographically, first by key and then by value.
///
/// # Examples
/// ```
/// # use container_core::collections::KeyValue;
/// let mut pair = KeyValue::new("apples", 3);
/// *pair.value_mut() += 1;
/// assert_eq!(pair.key(), &"apples");
/// assert_eq!(pair.into_parts(), ("apples", 4));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyValue<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Creates a new pair from a key and a value.
    pub const fn new(key: K, value: V) -> KeyValue<K, V> {
        KeyValue {
            key,
            value,
        }
    }

    /// Creates a new pair by running each constructor in turn, key first. If `make_value` panics,
    /// the key that was already made is dropped.
    pub fn piecewise(make_key: impl FnOnce() -> K, make_value: impl FnOnce() -> V) -> KeyValue<K, V> {
        let key = make_key();
        KeyValue::new(key, make_value())
    }

    pub const fn key(&self) -> &K {
        &self.key
    }

    pub const fn value(&self) -> &V {
        &self.value
    }

    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Borrows the key immutably and the value mutably at the same time.
    pub const fn parts_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    /// Replaces the value, returning the old one.
    pub fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Exchanges the entire contents of two pairs.
    pub fn swap(&mut self, other: &mut KeyValue<K, V>) {
        mem::swap(self, other);
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        KeyValue::new(key, value)
    }
}

impl<K, V> From<KeyValue<K, V>> for (K, V) {
    fn from(pair: KeyValue<K, V>) -> Self {
        pair.into_parts()
    }
}

impl<K: Display, V: Display> Display for KeyValue<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::alloc::DropCounter;
    use crate::util::panic::assert_panics;

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut pairs = [KeyValue::new(2, 'a'), KeyValue::new(1, 'z'), KeyValue::new(1, 'b')];
        pairs.sort();
        assert_eq!(
            pairs.map(KeyValue::into_parts),
            [(1, 'b'), (1, 'z'), (2, 'a')],
            "Pairs should order by key, then by value."
        );
        assert_ne!(KeyValue::new(1, 1), KeyValue::new(1, 2), "Equality should compare values.");
    }

    #[test]
    fn test_piecewise_drops_key_on_panic() {
        let counter = DropCounter::new();
        assert_panics!({
            KeyValue::piecewise(|| counter.track("key"), || -> u8 { panic!("no value") });
        });
        assert_eq!(counter.drops(), 1, "The constructed key should be dropped.");
    }

    #[test]
    fn test_parts() {
        let mut pair = KeyValue::from(("k", 1));
        let (key, value) = pair.parts_mut();
        *value += key.len() as i32;
        assert_eq!(pair.replace_value(0), 2);

        let mut other = KeyValue::new("o", 9);
        pair.swap(&mut other);
        assert_eq!(<(_, _)>::from(pair), ("o", 9));
        assert_eq!(format!("{other}"), "k: 0");
    }
}
