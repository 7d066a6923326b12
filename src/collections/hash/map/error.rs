use derive_more::{Display, Error};

/// A strict lookup didn't find the requested key.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("key not found in map")]
pub struct KeyNotFound;

/// A maximum load factor was zero, negative, not a finite number, or too small for the bucket count
/// it calls for to be represented. The map is left unchanged.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq)]
#[display("max load factor must be positive, finite and not vanishingly small, got {value}")]
pub struct InvalidLoadFactor {
    /// The rejected load factor.
    pub value: f32,
}
