#![cfg(test)]

use super::*;
use crate::collections::KeyValue;
use crate::collections::contiguous::Array;
use crate::memory::{Budget, Counting, Global};
use crate::util::alloc::{DropCounter, PanicOnClone};
use crate::util::panic::assert_panics;

fn values<T: Copy, A: crate::memory::Allocator>(list: &List<T, A>) -> Array<T> {
    list.iter().copied().collect()
}

fn check_links<T: PartialEq + std::fmt::Debug>(list: &List<T>) {
    let forward: Array<_> = list.iter().collect();
    let mut backward: Array<_> = list.iter().rev().collect();
    backward.reverse();
    assert_eq!(forward.len(), list.len(), "Walking forward should visit len elements.");
    assert_eq!(forward, backward, "Walking backward should reverse the forward walk.");

    let mut cursor = list.cursor_front();
    for _ in 0..list.len() {
        cursor.move_next();
    }
    assert!(cursor.is_end(), "The element after the last one should be the end.");
}

#[test]
fn test_empty() {
    let list = List::<u8>::new();
    assert!(list.is_empty());
    assert_eq!(list.begin(), list.end(), "An empty List should begin at its end.");
    assert_eq!(list.front(), None);
    assert_eq!(list.next(list.end()), list.end(), "The sentinel should link to itself.");
}

#[test]
fn test_push_and_pop() {
    let mut list = List::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);
    check_links(&list);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), None, "Popping an empty List should return None.");
    assert_eq!(list.pop_back(), None);
    check_links(&list);
}

#[test]
fn test_insert_sides() {
    let mut list = List::new();
    let end = list.end();
    list.insert(end, 'b', Side::Front);
    list.insert(end, 'a', Side::Back);
    let b = list.find(&'b').expect("b was inserted");
    list.insert(b, 'c', Side::Back);
    assert_eq!(list.to_string(), "('a') -> ('b') -> ('c')");
    check_links(&list);
}

#[test]
fn test_erase() {
    let mut list = List::from_iter(1..=4);
    let two = list.find(&2).expect("2 is in the list");
    let three = list.find(&3).expect("3 is in the list");

    let after = list.erase(two);
    assert_eq!(after, three, "Erase should return the following position.");
    assert_eq!(list.erase(list.end()), list.end(), "Erasing the end should do nothing.");
    assert_eq!(list.len(), 3);
    check_links(&list);

    assert_eq!(list.try_get(two), Err(StalePosition));
    assert_eq!(*list.get(three), 3, "Other positions should stay valid.");
    assert_panics!({ list.erase(two); }, "Erasing a stale position should panic.");

    let four = list.find(&4).expect("4 is in the list");
    assert_eq!(list.erase(four), list.end());
}

#[test]
fn test_node_reuse_is_detected() {
    let mut list = List::from_iter(["x", "y"]);
    let x = list.begin();
    assert_eq!(list.remove(x), Some("x"));

    let z = list.push_back("z");
    assert_eq!(z.node, x.node, "The vacant node should be reused.");
    assert!(!list.contains_position(x), "The old position should stay stale.");
    assert!(list.try_get_mut(x).is_err());
    assert_eq!(list.get(z), &"z");
}

#[test]
fn test_navigation_wraps() {
    let list = List::from_iter([1, 2]);
    let first = list.begin();
    let last = list.prev(list.end());
    assert_eq!(list.next(last), list.end());
    assert_eq!(list.next(list.end()), first);
    assert_eq!(list.prev(first), list.end());
    assert_eq!(list.try_get(list.end()), Err(StalePosition));
}

#[test]
fn test_splice_one() {
    let mut a = List::from_iter([1, 2, 3]);
    let mut b = List::from_iter([9, 8]);
    let two = a.next(a.begin());
    let nine = b.begin();

    let moved = b.splice_one(b.begin(), &mut a, two);
    assert_eq!(a.to_string(), "(1) -> (3)");
    assert_eq!(b.to_string(), "(2) -> (9) -> (8)");
    assert_eq!(moved.map(|pos| *b.get(pos)), Some(2));
    assert!(!a.contains_position(two), "The spliced position should be stale in the source.");
    assert!(!b.contains_position(two), "Positions don't follow a spliced element.");
    assert_eq!(b.get(nine), &9, "The receiving List's positions should stay valid.");
    check_links(&a);
    check_links(&b);

    let end = a.end();
    assert_eq!(b.splice_one(b.end(), &mut a, end), None, "Splicing the end should do nothing.");
    assert_eq!(a.len(), 2);
}

#[test]
fn test_splice_moves_without_clone_or_drop() {
    let counter = DropCounter::new();
    let mut a = List::new();
    a.extend(PanicOnClone::batch(3, 0).map(|v| counter.track(v)));
    let mut b = List::new();
    b.push_back(counter.track(PanicOnClone::batch(1, 0).next().expect("batch of one")));

    let first = a.begin();
    b.splice_one(b.end(), &mut a, first);
    let (start, stop) = (a.begin(), a.end());
    assert_eq!(b.splice_range(b.begin(), &mut a, start, stop), 2);

    assert_eq!(counter.drops(), 0, "Splicing shouldn't drop anything.");
    assert_eq!(b.len(), 4);
    assert!(a.is_empty());
}

#[test]
fn test_splice_range() {
    let mut a = List::from_iter(0..6);
    let mut b = List::from_iter([100]);
    let first = a.find(&1).expect("1 is in the list");
    let last = a.find(&4).expect("4 is in the list");

    let count = b.splice_range(b.end(), &mut a, first, last);
    assert_eq!(count, 3);
    assert_eq!(&*values(&a), &[0, 4, 5]);
    assert_eq!(&*values(&b), &[100, 1, 2, 3]);
    check_links(&a);
    check_links(&b);

    let first = a.find(&4).expect("4 is in the list");
    let unrelated = a.find(&0).expect("0 is in the list");
    assert_eq!(
        b.splice_range(b.begin(), &mut a, first, unrelated),
        2,
        "A range that never reaches last should stop at the end."
    );
    assert_eq!(&*values(&b), &[4, 5, 100, 1, 2, 3]);
}

#[test]
fn test_splice_all() {
    let mut a = List::from_iter([1, 2]);
    let two = a.find(&2).expect("2 is in the list");
    let mut fresh = List::new();
    fresh.splice_all(fresh.end(), &mut a);
    assert!(a.is_empty());
    assert_eq!(fresh.to_string(), "(1) -> (2)");
    assert!(!fresh.contains_position(two), "Positions from the source shouldn't carry over.");
    assert_eq!(fresh.find(&2).map(|pos| *fresh.get(pos)), Some(2));

    let mut used = List::from_iter([0]);
    used.pop_front();
    let mut c = List::from_iter([3, 4]);
    used.push_back(9);
    let nine = used.begin();
    used.splice_all(nine, &mut c);
    assert_eq!(used.to_string(), "(3) -> (4) -> (9)");
    assert_eq!(used.get(nine), &9);
    assert!(c.is_empty());
    check_links(&used);

    c.push_back(5);
    used.splice_all(used.end(), &mut c);
    assert_eq!(used.to_string(), "(3) -> (4) -> (9) -> (5)");
    check_links(&used);
    check_links(&c);
}

#[test]
fn test_splice_only_relinks() {
    let alloc = Counting::new(Global);
    let mut a = List::new_in(alloc.clone());
    a.push_back(0);
    let mut b = List::new_in(alloc.clone());
    b.extend(1..=1000);

    let before = alloc.stats();
    a.splice_all(a.end(), &mut b);
    let first = a.begin();
    b.splice_one(b.end(), &mut a, first);
    let (start, stop) = (a.find(&10).expect("10 was moved"), a.find(&20).expect("20 was moved"));
    assert_eq!(b.splice_range(b.begin(), &mut a, start, stop), 10);

    let after = alloc.stats();
    assert_eq!(after.total_blocks, before.total_blocks, "Splicing shouldn't allocate.");
    assert_eq!(after.constructed, before.constructed, "Splicing shouldn't move any value.");
    assert_eq!(a.len(), 990);
    assert_eq!(&*values(&b), &[10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 0]);

    drop(a);
    drop(b);
    assert_eq!(alloc.stats().live_blocks, 0, "Spliced nodes should be released by their new List.");
}

#[test]
fn test_splice_works_without_memory() {
    let budget = Budget::new(10);
    let mut a = List::new_in(budget.clone());
    let mut b = List::new_in(budget.clone());
    a.push_back(1);
    a.push_back(3);
    b.push_back(2);
    budget.set_remaining(0);

    let three = a.prev(a.end());
    let src = b.begin();
    assert_eq!(a.splice_one(three, &mut b, src).map(|pos| *a.get(pos)), Some(2));
    assert_eq!(a.to_string(), "(1) -> (2) -> (3)");

    a.splice_all(a.end(), &mut b);
    b.splice_all(b.end(), &mut a);
    assert_eq!(b.to_string(), "(1) -> (2) -> (3)");
    assert!(a.is_empty());
}

#[test]
fn test_positions_belong_to_their_list() {
    let a = List::from_iter([1, 2]);
    let b = List::from_iter([1, 2]);
    assert!(!b.contains_position(a.begin()), "A position shouldn't be valid in another List.");
    assert_eq!(b.try_get(a.begin()), Err(StalePosition));
    assert!(b.contains_position(a.end()), "The end position is shared.");
}

#[test]
fn test_sort() {
    let mut list = List::from_iter([5, 3, 8, 1]);
    list.sort();
    assert_eq!(list.to_string(), "(1) -> (3) -> (5) -> (8)");
    check_links(&list);

    let mut odd = List::from_iter([4, 2, 9, 7, 1]);
    let nine = odd.find(&9).expect("9 is in the list");
    odd.sort_by(|a, b| b.cmp(a));
    assert_eq!(&*values(&odd), &[9, 7, 4, 2, 1]);
    assert_eq!(odd.begin(), nine, "Sorting should relink, not move, elements.");
    check_links(&odd);
}

#[test]
fn test_sort_is_stable() {
    let mut list: List<_> = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]
        .into_iter()
        .map(KeyValue::from)
        .collect();
    list.sort_by(|a, b| a.key().cmp(b.key()));
    let order: Array<_> = list.iter().map(|kv| *kv.value()).collect();
    assert_eq!(&*order, &['e', 'b', 'd', 'a', 'c'], "Equal keys should keep their order.");
}

#[test]
fn test_sort_panic_restores_order() {
    let mut list = List::from_iter([4, 9, 0, 7, 2, 8, 1, 6, 3, 5]);
    let mut calls = 0;
    assert_panics!({
        list.sort_by(|a, b| {
            calls += 1;
            if calls == 5 { panic!("comparison failed"); }
            a.cmp(b)
        });
    });
    assert_eq!(list.len(), 10);
    assert_eq!(
        &*values(&list),
        &[4, 9, 0, 7, 2, 8, 1, 6, 3, 5],
        "A failed sort should leave the original order."
    );
    check_links(&list);
}

#[test]
fn test_merge() {
    let mut a = List::from_iter([1, 4, 6]);
    let mut b = List::from_iter([2, 4, 5, 9]);
    a.merge(&mut b);
    assert_eq!(&*values(&a), &[1, 2, 4, 4, 5, 6, 9]);
    assert!(b.is_empty());
    check_links(&a);

    let mut a = List::from_iter([KeyValue::new(1, 'a'), KeyValue::new(3, 'a')]);
    let mut b = List::from_iter([KeyValue::new(1, 'b'), KeyValue::new(2, 'b')]);
    a.merge_by(&mut b, |x, y| x.key().cmp(y.key()));
    let order: Array<_> = a.iter().map(|kv| (*kv.key(), *kv.value())).collect();
    assert_eq!(
        &*order,
        &[(1, 'a'), (1, 'b'), (2, 'b'), (3, 'a')],
        "Equal elements from this List should come first."
    );
}

#[test]
fn test_cursor() {
    let list = List::from_iter(['a', 'b', 'c']);
    let mut cursor = list.cursor_front();
    assert_eq!(cursor.current(), Some(&'a'));
    assert_eq!(cursor.peek_prev(), None, "The sentinel holds no value.");
    cursor.move_prev();
    assert!(cursor.is_end());
    cursor.move_prev();
    assert_eq!(cursor.current(), Some(&'c'), "Moving back from the end should wrap around.");
    assert_eq!(cursor.peek_next(), None);
    assert_eq!(cursor.position(), list.prev(list.end()));
}

#[test]
fn test_cursor_mut() {
    let mut list = List::from_iter([1, 2, 3]);
    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    *cursor.current_mut().expect("the cursor is on 2") *= 10;
    cursor.insert_before(15);
    cursor.insert_after(25);
    assert_eq!(cursor.remove(), Some(20));
    assert_eq!(cursor.current(), Some(&25), "Removing should move to the next element.");
    cursor.erase();
    cursor.erase();
    assert!(cursor.is_end());
    cursor.erase();
    assert_eq!(list.to_string(), "(1) -> (15)");
    check_links(&list);
}

#[test]
fn test_iter_mut_and_into_iter() {
    let mut list = List::from_iter(1..=5);
    for value in list.iter_mut() {
        *value *= 2;
    }
    let mut iter = list.iter_mut();
    assert_eq!(iter.len(), 5);
    *iter.next_back().expect("list isn't empty") += 1;
    assert_eq!(&*values(&list), &[2, 4, 6, 8, 11]);

    let mut iter = list.into_iter();
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(11));
    assert_eq!(iter.len(), 3);
}

#[test]
fn test_clear_and_take() {
    let alloc = Counting::new(Global);
    let counter = DropCounter::new();
    let mut list = List::new_in(alloc.clone());
    let first = list.push_back(counter.track(1));
    list.push_back(counter.track(2));

    list.clear();
    assert_eq!(counter.drops(), 2);
    assert!(!list.contains_position(first), "Clear should invalidate positions.");

    list.push_back(counter.track(3));
    let taken = list.take();
    assert!(list.is_empty());
    assert_eq!(taken.len(), 1);
    list.push_back(counter.track(4));

    drop(taken);
    drop(list);
    assert_eq!(counter.drops(), 4);
    assert_eq!(alloc.stats().live_blocks, 0, "Every node and sentinel should be released.");
}

#[test]
fn test_clone_and_eq() {
    let mut original = List::from_iter(["a", "b", "c"]);
    original.pop_front();
    let copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(format!("{copy:?}"), "List { contents: [\"b\", \"c\"], len: 2 }");

    let alloc = Counting::new(Global);
    let mut list = List::new_in(alloc.clone());
    list.extend(PanicOnClone::batch(4, 2));
    let live = alloc.stats().live_blocks;
    assert_panics!({ let _ = list.clone(); });
    assert_eq!(alloc.stats().live_blocks, live, "The partial clone should be released.");
}

#[test]
fn test_sort_compare_count_is_linearithmic() {
    let mut list: List<u32> = (0..64).rev().collect();
    let mut calls = 0;
    list.sort_by(|a, b| {
        calls += 1;
        a.cmp(b)
    });
    assert!(calls <= 64 * 6, "Merge sort should need at most n log n comparisons.");
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&63));
}
