// Property tests for the core containers.
//
// Each property drives a container with generated operations and checks it against a plain std
// model after every step (or at the end, where only the final state matters).
use std::collections::{HashMap as ModelMap, VecDeque};

use container_core::collections::contiguous::Storage;
use container_core::collections::hash::HashMap;
use container_core::collections::linked::{List, Position, Side};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum ListOp {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(usize, i32, bool),
    Erase(usize),
    SpliceIn(usize, usize),
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        any::<i32>().prop_map(ListOp::PushFront),
        any::<i32>().prop_map(ListOp::PushBack),
        Just(ListOp::PopFront),
        Just(ListOp::PopBack),
        (any::<usize>(), any::<i32>(), any::<bool>()).prop_map(|(i, v, f)| ListOp::Insert(i, v, f)),
        any::<usize>().prop_map(ListOp::Erase),
        (any::<usize>(), 0_usize..4).prop_map(|(i, n)| ListOp::SpliceIn(i, n)),
    ]
}

/// Returns the position of the element at `index`, or the end position when `index == len`.
fn position_at<T>(list: &List<T>, index: usize) -> Position {
    let mut pos = list.begin();
    for _ in 0..index {
        pos = list.next(pos);
    }
    pos
}

fn forward<T: Clone>(list: &List<T>) -> VecDeque<T> {
    let mut out = VecDeque::new();
    let mut pos = list.begin();
    while !pos.is_end() {
        out.push_back(list.get(pos).clone());
        pos = list.next(pos);
    }
    out
}

fn backward<T: Clone>(list: &List<T>) -> VecDeque<T> {
    let mut out = VecDeque::new();
    let mut pos = list.prev(list.end());
    while !pos.is_end() {
        out.push_back(list.get(pos).clone());
        pos = list.prev(pos);
    }
    out
}

proptest! {
    #[test]
    fn prop_storage_growth_preserves_contents(values in proptest::collection::vec(any::<u16>(), 0..400)) {
        let mut storage = Storage::new();
        for &value in &values {
            storage.append(value);
        }
        prop_assert_eq!(storage.len(), values.len());
        prop_assert!(storage.cap() >= storage.len());
        prop_assert_eq!(&storage[..], &values[..]);
    }

    #[test]
    fn prop_take_leaves_source_usable(values in proptest::collection::vec(any::<i64>(), 0..50), extra in any::<i64>()) {
        let mut storage: Storage<i64> = values.iter().copied().collect();
        let moved = storage.take();
        prop_assert_eq!(&moved[..], &values[..]);
        prop_assert_eq!(storage.len(), 0);
        storage.append(extra);
        prop_assert_eq!(&storage[..], &[extra]);

        let mut list: List<i64> = values.iter().copied().collect();
        let moved = list.take();
        prop_assert_eq!(moved.len(), values.len());
        prop_assert!(list.is_empty());
        list.push_back(extra);
        prop_assert_eq!(list.front(), Some(&extra));
    }

    #[test]
    fn prop_list_walks_agree(ops in proptest::collection::vec(list_op(), 0..120)) {
        let mut list: List<i32> = List::new();
        let mut model: VecDeque<i32> = VecDeque::new();
        let mut donor: List<i32> = (1000..1004).collect();
        let mut donor_model: VecDeque<i32> = (1000..1004).collect();

        for op in ops {
            match op {
                ListOp::PushFront(v) => {
                    list.push_front(v);
                    model.push_front(v);
                },
                ListOp::PushBack(v) => {
                    list.push_back(v);
                    model.push_back(v);
                },
                ListOp::PopFront => prop_assert_eq!(list.pop_front(), model.pop_front()),
                ListOp::PopBack => prop_assert_eq!(list.pop_back(), model.pop_back()),
                ListOp::Insert(i, v, front) => {
                    let index = i % (model.len() + 1);
                    let pos = position_at(&list, index);
                    if front || pos.is_end() {
                        list.insert(pos, v, Side::Front);
                        model.insert(index, v);
                    } else {
                        list.insert(pos, v, Side::Back);
                        model.insert(index + 1, v);
                    }
                },
                ListOp::Erase(i) => {
                    if !model.is_empty() {
                        let index = i % model.len();
                        let following = list.erase(position_at(&list, index));
                        model.remove(index);
                        prop_assert_eq!(following, position_at(&list, index));
                    }
                },
                ListOp::SpliceIn(i, count) => {
                    let index = i % (model.len() + 1);
                    let count = count.min(donor_model.len());
                    let dest = position_at(&list, index);
                    let last = position_at(&donor, count);
                    let first = donor.begin();
                    prop_assert_eq!(list.splice_range(dest, &mut donor, first, last), count);
                    for offset in 0..count {
                        if let Some(v) = donor_model.pop_front() {
                            model.insert(index + offset, v);
                        }
                    }
                },
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(&forward(&list), &model);
            let mut reversed = backward(&list);
            reversed.make_contiguous().reverse();
            prop_assert_eq!(&reversed, &model);
            prop_assert_eq!(donor.len(), donor_model.len());
        }
    }

    #[test]
    fn prop_sort_is_ordered_and_stable(keys in proptest::collection::vec(0_u8..8, 0..200)) {
        let mut list: List<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        list.sort_by(|a, b| a.0.cmp(&b.0));

        let mut expected: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        expected.sort_by_key(|&(key, _)| key);
        prop_assert_eq!(forward(&list), VecDeque::from(expected));

        let mut reversed = backward(&list);
        reversed.make_contiguous().reverse();
        prop_assert_eq!(reversed, forward(&list));
    }

    #[test]
    fn prop_map_keys_stay_unique(entries in proptest::collection::vec((0_u16..64, any::<u32>()), 0..300)) {
        let mut map = HashMap::new();
        let mut model = ModelMap::new();

        for (key, value) in entries {
            let (pos, inserted) = map.insert(key, value);
            prop_assert_eq!(inserted, !model.contains_key(&key));
            model.entry(key).or_insert(value);
            prop_assert_eq!(map.find(&key), Some(pos));
            prop_assert_eq!(map.get(&key).ok(), model.get(&key));
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.keys().count(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Ok(value));
        }
    }

    #[test]
    fn prop_rehash_preserves_membership(
        keys in proptest::collection::hash_set(any::<u64>(), 0..200),
        removals in proptest::collection::vec(any::<prop::sample::Index>(), 0..20),
    ) {
        let keys: Vec<u64> = keys.into_iter().collect();
        let mut map = HashMap::with_buckets(1);
        let mut model = ModelMap::new();
        for &key in &keys {
            map.insert(key, key.wrapping_mul(3));
            model.insert(key, key.wrapping_mul(3));
            prop_assert!(map.load_factor() <= map.max_load_factor());
        }
        if !keys.is_empty() {
            for index in removals {
                let key = keys[index.index(keys.len())];
                prop_assert_eq!(map.remove(&key), model.remove(&key));
            }
        }
        map.rehash(map.bucket_count() * 2);

        prop_assert!(map.bucket_count().is_power_of_two());
        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Ok(value));
        }
    }
}
