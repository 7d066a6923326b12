//! Core container types, written from the ground up on top of a small allocator abstraction.
//!
//! # Purpose
//! This crate is a project for understanding how containers actually work: growable buffers,
//! linked lists, hash tables and the memory underneath them. It isn't intended to replace
//! [`std`]'s collections, but it tries to hold itself to the same standard for safety and
//! predictable complexity.
//!
//! # Method
//! Every container allocates through the [`Allocator`](memory::Allocator) trait, which also
//! constructs and destroys each element. [`Counting`](memory::Counting) and
//! [`Budget`](memory::Budget) wrap another allocator to observe or limit it, which is how the
//! tests check for leaks and for behaviour when memory runs out.
//!
//! The [`Storage`](collections::contiguous::Storage) buffer is the foundation:
//! [`Array`](collections::contiguous::Array), [`Stack`](collections::structures::Stack) and
//! [`Queue`](collections::structures::Queue) wrap it directly, while
//! [`List`](collections::linked::List) keeps its nodes in one and
//! [`HashMap`](collections::hash::HashMap) keeps an Array of Lists.
//!
//! # Error Handling
//! Operations that can fail in ordinary use come in two flavours. The `try_*` variant returns a
//! strongly typed [`Result`], and the plain variant panics with that error's message. Capacity
//! overflow and allocation failure are reported the same way. Looking up something that isn't
//! there returns [`None`] rather than an error wherever absence is an expected outcome.
//!
//! Where a method can fail part way through (growth, rehashing, splicing or sorting), it either
//! completes or leaves the container exactly as it was, unless its docs say otherwise.
//!
//! # Dependencies
//! This library doesn't use [`Vec`] at all. It depends on `derive_more` for its error types and
//! on `log` (behind the `log` feature) for tracing growth and rehashing.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod memory;

pub(crate) mod util;
