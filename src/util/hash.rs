//! Hashing helpers for forcing bucket collisions in tests.

use std::hash::{BuildHasher, Hash, Hasher};

/// A key that hashes to a fixed, caller-chosen value while still comparing by `value`.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A hasher which passes a single written `u64` straight through, so `ManualHash::new(h, _)`
/// lands in bucket `h % bucket_count`.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 8) | *byte as u64;
        }
    }

    fn write_u32(&mut self, i: u32) {
        self.state = i as u64;
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }

    fn write_usize(&mut self, i: usize) {
        self.state = i as u64;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
