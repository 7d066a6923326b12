use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::ops::Index;

use super::{
    IntoKeys, IntoValues, InvalidLoadFactor, Iter, IterMut, KeyNotFound, Keys, Values, ValuesMut,
};
use crate::collections::KeyValue;
use crate::collections::contiguous::Array;
use crate::collections::linked::{List, Position as NodePosition};
use crate::memory::{Allocator, CapacityOverflow, Global};
use crate::util::fmt::{DebugEntries, DebugRaw};
use crate::util::log::coll_debug;
use crate::util::result::ResultExtension;

/// The number of buckets a HashMap starts with, and the count that `rehash(0)` resets to.
pub const DEFAULT_BUCKETS: usize = 16;

/// The highest ratio of entries to buckets that a HashMap accepts before it rehashes, by default.
pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 1.0;

const GROWTH_FACTOR: usize = 2;

pub(crate) type Bucket<K, V, A> = List<KeyValue<K, V>, A>;

/// A map of keys to values which relies on the keys implementing [`Hash`], resolving collisions by
/// chaining entries together in a [`List`] per bucket.
///
/// The number of buckets is always a power of two, so the bucket of a key is its hash masked to the
/// bucket count. Before an insert would push the load factor (entries per bucket) above the
/// maximum, the bucket count is doubled and every entry is redistributed.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
/// - `b`: The number of items in the bucket of the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(b)`*, `O(n)` |
/// | `find` / `get` | `O(b)` |
/// | `remove` | `O(b)` |
/// | `erase_at` | `O(1)`** |
/// | `rehash` / `reserve` | `O(n)` |
///
/// \* If the insert would exceed the maximum load factor, the map is rehashed first, which takes
/// `O(n)`.
///
/// \** Finding the position of the following entry may need to skip over empty buckets.
pub struct HashMap<K: Hash + Eq, V, S: BuildHasher = RandomState, A: Allocator = Global> {
    pub(crate) buckets: Array<Bucket<K, V, A>, A>,
    pub(crate) len: usize,
    pub(crate) max_load_factor: f32,
    pub(crate) hasher: S,
}

/// A detached handle to an entry of a [`HashMap`]. Positions stay valid until their entry is
/// removed, the map is cleared or the map is rehashed. Every rehash builds new bucket lists, and a
/// position never matches a list other than the one that made it, so old positions can't alias the
/// entries that take their place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) bucket: usize,
    pub(crate) node: NodePosition,
}

impl<K: Hash + Eq, V> HashMap<K, V> {
    /// Creates a new HashMap with [`DEFAULT_BUCKETS`] buckets and a random hasher.
    pub fn new() -> HashMap<K, V> {
        HashMap::with_buckets_hasher_in(DEFAULT_BUCKETS, RandomState::new(), Global)
    }

    /// Creates a new HashMap with at least `buckets` buckets, rounded up to a power of two.
    ///
    /// # Panics
    /// Panics if the rounded count overflows or the buckets can't be allocated.
    pub fn with_buckets(buckets: usize) -> HashMap<K, V> {
        HashMap::with_buckets_hasher_in(buckets, RandomState::new(), Global)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashMap<K, V, S> {
    /// Creates a new HashMap with [`DEFAULT_BUCKETS`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: S) -> HashMap<K, V, S> {
        HashMap::with_buckets_hasher_in(DEFAULT_BUCKETS, hasher, Global)
    }

    /// Creates a new HashMap with at least `buckets` buckets and the provided `hasher`.
    pub fn with_buckets_and_hasher(buckets: usize, hasher: S) -> HashMap<K, V, S> {
        HashMap::with_buckets_hasher_in(buckets, hasher, Global)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher, A: Allocator> HashMap<K, V, S, A> {
    /// Creates a new HashMap with at least `buckets` buckets, the provided `hasher`, and all
    /// memory allocated from `alloc`. A count of 0 means [`DEFAULT_BUCKETS`].
    ///
    /// # Panics
    /// Panics if the rounded count overflows or the buckets can't be allocated.
    pub fn with_buckets_hasher_in(buckets: usize, hasher: S, alloc: A) -> HashMap<K, V, S, A> {
        let count = bucket_count_for(buckets).throw();
        let mut buckets = Array::with_cap_in(count, alloc.clone());
        for _ in 0..count {
            buckets.push(List::new_in(alloc.clone()));
        }

        HashMap {
            buckets,
            len: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hasher,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets, which is always a power of two.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries in the bucket at `index`, or None if there is no such
    /// bucket.
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.buckets.try_get(index).ok().map(List::len)
    }

    /// Returns the current ratio of entries to buckets.
    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.bucket_count() as f32
    }

    pub const fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    /// Replaces the maximum load factor, rehashing straight away if the map is now overloaded.
    ///
    /// # Errors
    /// Returns [`InvalidLoadFactor`] and leaves the map untouched if `max_load_factor` isn't a
    /// positive, finite number, or if it is so small that the bucket count needed for one more
    /// entry can't be represented.
    pub fn set_max_load_factor(&mut self, max_load_factor: f32) -> Result<(), InvalidLoadFactor> {
        let invalid = InvalidLoadFactor { value: max_load_factor };
        if !(max_load_factor > 0.0 && max_load_factor.is_finite()) {
            return Err(invalid);
        }

        let previous = mem::replace(&mut self.max_load_factor, max_load_factor);
        if self.required_buckets(self.len.saturating_add(1)).is_err() {
            self.max_load_factor = previous;
            return Err(invalid);
        }

        self.reserve(self.len);
        Ok(())
    }

    pub const fn hasher(&self) -> &S {
        &self.hasher
    }

    pub fn allocator(&self) -> &A {
        self.buckets.allocator()
    }

    /// Inserts `key` with `value` if the key isn't in the map yet, returning the position of the
    /// entry and whether it was inserted. If the key already exists, neither the key nor its value
    /// is changed and the provided pair is dropped.
    ///
    /// # Panics
    /// Panics if the map needs to grow and the allocation fails. The map is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::hash::HashMap;
    /// let mut map = HashMap::new();
    /// let (pos, inserted) = map.insert("one", 1);
    /// assert!(inserted);
    /// assert_eq!(map.insert("one", 100), (pos, false));
    /// assert_eq!(map["one"], 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        if let Some(pos) = self.find(&key) {
            return (pos, false);
        }

        if self.exceeds_load(self.len + 1) {
            self.grow(self.len + 1);
        }

        let bucket = self.bucket_of(&key);
        let node = self.buckets[bucket].push_back(KeyValue::new(key, value));
        self.len += 1;
        (Position { bucket, node }, true)
    }

    /// Returns the position of the entry for `key`, if there is one.
    pub fn find<Q>(&self, key: &Q) -> Option<Position>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = self.bucket_of(key);
        let node = self.buckets[bucket].find_by(|entry| entry.key().borrow() == key)?;
        Some(Position { bucket, node })
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the map contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(key).ok_or(KeyNotFound)?;
        self.entry_at(pos).map(|(_, value)| value).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(key).ok_or(KeyNotFound)?;
        self.value_at_mut(pos).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`, inserting the default value
    /// first if there is none.
    ///
    /// # Examples
    /// ```
    /// # use container_core::collections::hash::HashMap;
    /// let mut counts = HashMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_default(word) += 1;
    /// }
    /// assert_eq!(counts.get("a"), Ok(&2));
    /// ```
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let pos = match self.find(&key) {
            Some(pos) => pos,
            None => self.insert(key, V::default()).0,
        };
        self.buckets[pos.bucket].get_mut(pos.node).value_mut()
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(key)?;
        let entry = self.buckets[pos.bucket].remove(pos.node)?;
        self.len -= 1;
        Some(entry.into_parts())
    }

    /// Drops the entry at `pos` and returns the position of the entry that followed it, if any.
    ///
    /// # Panics
    /// Panics if `pos` is stale.
    pub fn erase_at(&mut self, pos: Position) -> Option<Position> {
        let next = self.position_after(pos);
        if self.buckets.get_mut(pos.bucket).remove(pos.node).is_some() {
            self.len -= 1;
        }
        next
    }

    /// Returns the key and value of the entry at `pos`, or None if `pos` is stale.
    pub fn entry_at(&self, pos: Position) -> Option<(&K, &V)> {
        let entry = self.buckets.try_get(pos.bucket).ok()?.try_get(pos.node).ok()?;
        Some((entry.key(), entry.value()))
    }

    /// Returns a mutable reference to the value of the entry at `pos`, or None if `pos` is stale.
    pub fn value_at_mut(&mut self, pos: Position) -> Option<&mut V> {
        let bucket = self.buckets.try_get_mut(pos.bucket).ok()?;
        Some(bucket.try_get_mut(pos.node).ok()?.value_mut())
    }

    /// Returns the position of the first entry in iteration order.
    pub fn first(&self) -> Option<Position> {
        self.first_from(0)
    }

    /// Returns the position of the entry after `pos` in iteration order, skipping over empty
    /// buckets. Returns None past the last entry.
    ///
    /// # Panics
    /// Panics if `pos` is stale.
    pub fn position_after(&self, pos: Position) -> Option<Position> {
        let node = self.buckets.get(pos.bucket).next(pos.node);
        match node.is_end() {
            true => self.first_from(pos.bucket + 1),
            false => Some(Position {
                bucket: pos.bucket,
                node,
            }),
        }
    }

    /// Rebuilds the map with at least `buckets` buckets, rounded up to a power of two, and
    /// redistributes every entry. A count of 0 means [`DEFAULT_BUCKETS`]. The count is raised if
    /// needed so that the current entries don't exceed the maximum load factor. All positions
    /// become stale.
    ///
    /// Every key is hashed and every allocation happens before the first entry is moved. Entries
    /// are then spliced into their new buckets, which only relinks them, so if hashing or an
    /// allocation fails, the map is left as it was.
    ///
    /// # Panics
    /// Panics if the bucket count overflows or an allocation fails.
    pub fn rehash(&mut self, buckets: usize) {
        let count = bucket_count_for(buckets)
            .and_then(|count| Ok(count.max(self.required_buckets(self.len)?)))
            .throw();

        coll_debug!(
            "rehashing map of {} entries from {} to {} buckets",
            self.len,
            self.bucket_count(),
            count
        );

        let alloc = self.allocator().clone();
        let mut targets = Array::with_cap_in(self.len, alloc.clone());
        for entry in self.buckets.iter().flat_map(List::iter) {
            targets.push(index_for(&self.hasher, entry.key(), count));
        }

        let mut buckets = Array::with_cap_in(count, alloc.clone());
        for _ in 0..count {
            buckets.push(List::new_in(alloc.clone()));
        }

        // Targets are in iteration order, which is the order entries leave the old buckets.
        let mut old = mem::replace(&mut self.buckets, buckets);
        let mut targets = targets.into_iter();
        for bucket in old.iter_mut() {
            for _ in 0..bucket.len() {
                let Some(index) = targets.next() else { break };
                let (dest, first) = (self.buckets[index].end(), bucket.begin());
                self.buckets[index].splice_one(dest, bucket, first);
            }
        }
    }

    /// Makes sure that `count` entries fit without exceeding the maximum load factor, rehashing if
    /// they don't.
    ///
    /// # Panics
    /// Panics if the bucket count overflows or an allocation fails.
    pub fn reserve(&mut self, count: usize) {
        let required = self.required_buckets(count).throw();
        if required > self.bucket_count() {
            self.rehash(required);
        }
    }

    /// Drops every entry, keeping the buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Exchanges the contents of two HashMaps, including their hashers and settings.
    pub fn swap(&mut self, other: &mut HashMap<K, V, S, A>) {
        mem::swap(self, other);
    }

    /// Moves the contents out into a new HashMap, leaving `self` empty with [`DEFAULT_BUCKETS`]
    /// buckets and the default maximum load factor.
    pub fn take(&mut self) -> HashMap<K, V, S, A>
    where
        S: Clone,
    {
        let empty = HashMap::with_buckets_hasher_in(
            DEFAULT_BUCKETS,
            self.hasher.clone(),
            self.allocator().clone(),
        );
        mem::replace(self, empty)
    }

    /// Returns an iterator over all entries, as references, in bucket order.
    pub fn iter(&self) -> Iter<'_, K, V, A> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            len: self.len,
        }
    }

    /// Returns an iterator over all entries, with mutable references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, A> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            current: None,
            len: self.len,
        }
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V, A> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V, A> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, A> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V, A> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V, A> {
        IntoValues(self.into_iter())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher, A: Allocator> HashMap<K, V, S, A> {
    pub(crate) fn bucket_of<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        index_for(&self.hasher, key, self.bucket_count())
    }

    /// Returns true if `len` entries would exceed the maximum load factor.
    pub(crate) fn exceeds_load(&self, len: usize) -> bool {
        len as f32 > self.max_load_factor * self.bucket_count() as f32
    }

    /// Rehashes to at least double the bucket count, or further if `len` entries need more.
    pub(crate) fn grow(&mut self, len: usize) {
        let count = self
            .bucket_count()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)
            .and_then(|doubled| Ok(doubled.max(self.required_buckets(len)?)))
            .throw();
        self.rehash(count);
    }

    /// Calculates the smallest power of two bucket count that holds `len` entries without
    /// exceeding the maximum load factor.
    pub(crate) fn required_buckets(&self, len: usize) -> Result<usize, CapacityOverflow> {
        let exact = (len as f64 / self.max_load_factor as f64).ceil();
        if exact >= usize::MAX as f64 {
            return Err(CapacityOverflow);
        }
        bucket_count_for((exact as usize).max(1))
    }

    fn first_from(&self, start: usize) -> Option<Position> {
        self.buckets
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, bucket)| !bucket.is_empty())
            .map(|(bucket, list)| Position {
                bucket,
                node: list.begin(),
            })
    }
}

/// Masks the hash of `key` to one of `count` buckets, where `count` is a power of two.
fn index_for<S: BuildHasher, Q: Hash + ?Sized>(hasher: &S, key: &Q, count: usize) -> usize {
    debug_assert!(count.is_power_of_two());
    (hasher.hash_one(key) as usize) & (count - 1)
}

/// Rounds a requested bucket count up to a power of two, treating 0 as [`DEFAULT_BUCKETS`].
fn bucket_count_for(requested: usize) -> Result<usize, CapacityOverflow> {
    match requested {
        0 => Ok(DEFAULT_BUCKETS),
        n => n.checked_next_power_of_two().ok_or(CapacityOverflow),
    }
}

impl<K, Q, V, S, A> Index<&Q> for HashMap<K, V, S, A>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
    A: Allocator,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the map contains no value for `key`.
    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).throw()
    }
}

impl<K: Hash + Eq, V> Default for HashMap<K, V> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K, V, S, A> Clone for HashMap<K, V, S, A>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    A: Allocator,
{
    /// Builds a fresh table of [`DEFAULT_BUCKETS`] buckets with the same maximum load factor and
    /// hasher, then reinserts a clone of every entry, growing as usual.
    fn clone(&self) -> Self {
        let mut map = HashMap::with_buckets_hasher_in(
            DEFAULT_BUCKETS,
            self.hasher.clone(),
            self.allocator().clone(),
        );
        map.max_load_factor = self.max_load_factor;

        for (key, value) in self.iter() {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher, A: Allocator> Extend<(K, V)> for HashMap<K, V, S, A> {
    /// Inserts every pair, leaving keys that are already present untouched.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S, A> PartialEq for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    A: Allocator,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, value)| other.get(key).is_ok_and(|v| v == value))
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher, A: Allocator> Eq for HashMap<K, V, S, A> {}

impl<K, V, S, A> Debug for HashMap<K, V, S, A>
where
    K: Hash + Eq + Debug,
    V: Debug,
    S: BuildHasher + Debug,
    A: Allocator,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter().map(|bucket| {
            DebugRaw(match bucket.is_empty() {
                true => "-".into(),
                false => format!("{:?}", DebugEntries(bucket.iter().map(|entry| {
                    DebugRaw(format!("({:?}: {:?})", entry.key(), entry.value()))
                }))),
            })
        });

        f.debug_struct("HashMap")
            .field("buckets", &DebugEntries(buckets))
            .field("len", &self.len)
            .field("max_load_factor", &self.max_load_factor)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K, V, S, A> Display for HashMap<K, V, S, A>
where
    K: Hash + Eq + Debug,
    V: Debug,
    S: BuildHasher,
    A: Allocator,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
