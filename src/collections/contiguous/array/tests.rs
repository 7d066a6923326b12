#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::memory::{Budget, Counting, Global};
use crate::util::alloc::ZeroSizedType;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut arr = Array::with_cap(2);
    for i in 0..5 {
        arr.push(i);
    }
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Pushes should keep their order through growth.");
    assert_eq!(arr.cap(), 8);

    assert_eq!(arr.pop(), Some(4));
    assert_eq!(arr.len(), 4);
    arr.clear();
    assert_eq!(arr.pop(), None, "Popping an empty Array should return None.");
}

#[test]
fn test_try_push_hands_back() {
    let mut arr = Array::with_cap_in(1, Budget::new(1));
    assert!(arr.try_push(1).is_ok());
    assert_eq!(arr.try_push(2).map_err(|(_, v)| v), Err(2));
    assert_eq!(&*arr, &[1], "A failed push shouldn't change the Array.");
}

#[test]
fn test_indexing() {
    let mut arr = Array::from_iter(10..15);
    assert_eq!(arr[0], 10, "Indexing with no offset should work.");
    assert_eq!(*arr.get(4), 14, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.try_get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_panics!({ arr.get(5); }, "Getting out of bounds should panic.");

    *arr.get_mut(1) = 0;
    // SAFETY: 1 < len.
    assert_eq!(unsafe { *arr.get_unchecked(1) }, 0);

    assert_eq!(arr.front(), Some(&10));
    assert_eq!(arr.back(), Some(&14));
    *arr.back_mut().expect("the Array isn't empty") = 1;
    assert_eq!(arr.back(), Some(&1));
}

#[test]
fn test_reserve_and_shrink() {
    let mut arr = Array::from_elem(3, 'z');
    arr.reserve(10);
    assert_eq!(arr.cap(), 10);
    arr.reserve(4);
    assert_eq!(arr.cap(), 10, "Reserve should never reduce the capacity.");
    arr.shrink();
    assert_eq!(arr.cap(), 3);
    assert_eq!(&*arr, &['z', 'z', 'z']);
}

#[test]
fn test_take_leaves_usable() {
    let alloc = Counting::new(Global);
    let mut arr = Array::new_in(alloc.clone());
    arr.extend(["a", "b"]);

    let moved = arr.take();
    assert_eq!(&*moved, &["a", "b"]);
    assert!(arr.is_empty());
    assert_eq!(arr.cap(), 0);
    assert_eq!(alloc.stats().live_blocks, 1, "Only the moved Array should own a block.");

    arr.push("c");
    assert_eq!(&*arr, &["c"]);
}

#[test]
fn test_swap() {
    let mut a = Array::from_iter([1]);
    let mut b = Array::from_iter([2, 3]);
    a.swap(&mut b);
    assert_eq!(&*a, &[2, 3]);
    assert_eq!(&*b, &[1]);
}

#[test]
fn test_equality_and_hash() {
    let a = Array::from_iter(0..3);
    let mut b = Array::with_cap(50);
    b.extend(0..3);
    assert_eq!(a, b, "Capacity shouldn't affect equality.");

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b));
}

#[test]
fn test_formatting() {
    let arr = Array::from_iter([1, 2]);
    assert_eq!(format!("{arr}"), "[1, 2]");
    assert_eq!(format!("{arr:?}"), format!("Array {{ contents: [1, 2], len: 2, cap: 2 }}"));
}

#[test]
fn test_zst_support() {
    let arr = Array::from_elem(5, ZeroSizedType);
    assert_eq!(arr[4], ZeroSizedType);
    assert_eq!(arr.iter().len(), 5, "Should iterate over the right number of ZST instances.");
    assert_eq!(arr.into_iter().rev().count(), 5);
}
