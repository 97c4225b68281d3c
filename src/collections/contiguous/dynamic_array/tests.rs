#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use proptest::prelude::*;

use super::*;
use crate::util::drop::DropCounter;
use crate::util::panic::assert_panics;

#[test]
fn test_push_get_and_render() {
    let mut arr = DynamicArray::new();
    arr.push(5);
    arr.push(3);
    arr.push(9);

    assert_eq!(arr.len(), 3);
    assert_eq!(*arr.get(1), 3);

    assert!(arr.remove(&3), "A present value should be found and removed.");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr.to_string(), "[5, 9]");
    assert_eq!(DynamicArray::<u8>::new().to_string(), "[]");
}

#[test]
fn test_growth_policy() {
    let mut arr = DynamicArray::with_cap(0);
    assert_eq!(arr.cap(), 0, "A zero capacity should be accepted as-is.");

    let mut caps = DynamicArray::with_cap(0);
    for i in 0..9 {
        arr.push(i);
        caps.push(arr.cap());
    }

    assert_eq!(
        *caps,
        [1, 2, 4, 8, 8, 8, 8, 16, 16],
        "Capacity should double whenever a push would bring len + 1 up to the capacity."
    );
    assert_eq!(*arr, [0, 1, 2, 3, 4, 5, 6, 7, 8], "Growing shouldn't lose or reorder elements.");

    let mut arr = DynamicArray::new();
    for i in 0..DEFAULT_CAP - 1 {
        arr.push(i);
    }
    assert_eq!(arr.cap(), DEFAULT_CAP);
    arr.push(0);
    assert_eq!(
        arr.cap(),
        DEFAULT_CAP * GROWTH_FACTOR,
        "The push that brings len + 1 to the capacity should grow."
    );
}

#[test]
fn test_invalid_capacity() {
    assert_eq!(
        DynamicArray::<u32>::try_with_cap(usize::MAX).err(),
        Some(InvalidCapacity { cap: usize::MAX }),
        "A capacity with an unrepresentable layout should be rejected."
    );
    assert_panics!({ DynamicArray::<u32>::with_cap(usize::MAX) }, "Illegal capacity");
}

#[test]
fn test_bounds() {
    let mut arr: DynamicArray<u8> = (0..3).collect();

    assert_eq!(arr.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(arr.try_set(7, 0), Err(IndexOutOfBounds { index: 7, len: 3 }));
    assert_eq!(arr.try_remove_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(*arr, [0, 1, 2], "Failed operations shouldn't modify the DynamicArray.");

    assert_panics!({ arr.clone().get(3); }, "Index 3 out of bounds");
    assert_panics!({ arr.clone().remove_at(10); }, "Index 10 out of bounds");
    assert_panics!({ DynamicArray::<u8>::with_cap(0).set(0, 1); });
}

#[test]
fn test_spare_capacity_is_hidden() {
    let mut arr = DynamicArray::with_cap(8);
    arr.push(1u8);
    arr.push(2);

    assert_eq!(arr.cap(), 8);
    assert_eq!(arr.as_slice().len(), 2, "Only live elements should be visible.");
    assert_eq!(arr.as_mut_slice().len(), 2);
    assert_eq!(arr.iter().count(), 2);
    assert_eq!(arr.try_get(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(arr.try_get_mut(7), Err(IndexOutOfBounds { index: 7, len: 2 }));
}

#[test]
fn test_remove_at_shifts_and_keeps_cap() {
    let mut arr: DynamicArray<_> = (0..10).collect();
    let cap = arr.cap();

    assert_eq!(arr.remove_at(4), 4);
    assert_eq!(*arr, [0, 1, 2, 3, 5, 6, 7, 8, 9]);
    assert_eq!(arr.cap(), cap, "Removing shouldn't shrink the capacity.");

    assert_eq!(arr.remove_at(8), 9, "Removing the last element should work.");
    assert_eq!(arr.remove_at(0), 0, "Removing the first element should work.");
    assert_eq!(*arr, [1, 2, 3, 5, 6, 7, 8]);

    arr.shrink_to_fit();
    assert_eq!(arr.cap(), arr.len());
    arr.push(100);
    assert_eq!(arr.last(), Some(&100), "Pushing after shrinking should grow again.");
}

#[test]
fn test_search() {
    let mut arr: DynamicArray<_> = ["a", "b", "c", "b"].into_iter().collect();

    assert_eq!(arr.index_of(&"b"), Some(1), "The first match should be returned.");
    assert_eq!(arr.index_of(&"z"), None);
    assert!(arr.contains(&"c"));
    assert!(!arr.remove(&"z"), "Removing an absent value should report false.");

    assert!(arr.remove(&"b"));
    assert_eq!(*arr, ["a", "c", "b"]);

    let mut options: DynamicArray<Option<u8>> = [Some(1), None, Some(2)].into_iter().collect();
    assert_eq!(options.index_of(&None), Some(1));
    assert!(options.remove(&None));
    assert!(!options.contains(&None));
}

#[test]
fn test_clear_and_drop() {
    let counter = DropCounter::new();
    let mut arr: DynamicArray<_> = std::iter::repeat_with(|| counter.clone()).take(10).collect();
    let cap = arr.cap();

    arr.clear();
    assert_eq!(counter.dropped(), 10, "Clearing should drop every element.");
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.cap(), cap, "Clearing should keep the capacity.");

    arr.clear();
    assert_eq!(arr.len(), 0, "Clearing twice should be a no-op.");
    assert_eq!(counter.dropped(), 10);

    arr.extend(std::iter::repeat_with(|| counter.clone()).take(5));
    arr.set(0, counter.clone());
    assert_eq!(counter.dropped(), 11, "Set should return the old value to be dropped.");
    arr.remove(&counter);
    assert_eq!(counter.dropped(), 12);
    drop(arr);
    assert_eq!(counter.dropped(), 16, "Dropping should drop the remaining elements.");
}

#[test]
fn test_iterators() {
    let mut arr: DynamicArray<usize> = (0..5).collect();

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0, 2, 4, 6, 8]);
    assert_eq!(
        arr.iter().copied().collect::<DynamicArray<_>>(),
        arr,
        "Iteration should be restartable and produce the same elements."
    );

    let mut iter = arr.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = DropCounter::default();
    let arr: DynamicArray<_> = std::iter::repeat_with(|| counter.clone()).take(6).collect();
    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.dropped(), 6, "Unyielded elements should be dropped with the iterator.");
}

#[test]
fn test_zero_sized_types() {
    let mut arr = DynamicArray::with_cap(0);
    for _ in 0..100 {
        arr.push(());
    }
    assert_eq!(arr.len(), 100);
    arr.remove_at(50);
    assert_eq!(arr.into_iter().count(), 99);
}

#[test]
fn test_equality_and_hash() {
    let arr: DynamicArray<usize> = (0..5).collect();
    let mut other = DynamicArray::with_cap(1);
    other.extend([0, 1, 2, 3, 4]);

    assert_eq!(arr, other, "Capacity shouldn't affect equality.");
    let state = RandomState::new();
    assert_eq!(state.hash_one(&arr), state.hash_one(&other));
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4].as_slice()),
        "Hashing should match the equivalent slice."
    );

    assert_eq!(
        format!("{arr:?}"),
        format!("DynamicArray {{ contents: [0, 1, 2, 3, 4], len: 5, cap: {} }}", arr.cap())
    );
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    RemoveAt(usize),
    Set(usize, u8),
    Pop,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Push),
        2 => (0usize..40).prop_map(Op::RemoveAt),
        1 => (0usize..40, any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => Just(Op::Pop),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn behaves_like_vec(cap in 0usize..20, ops in prop::collection::vec(op(), 0..200)) {
        let mut arr = DynamicArray::with_cap(cap);
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    arr.push(v);
                    model.push(v);
                },
                Op::RemoveAt(i) => {
                    let expected = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(arr.try_remove_at(i).ok(), expected);
                },
                Op::Set(i, v) => {
                    let expected = model.get_mut(i).map(|slot| std::mem::replace(slot, v));
                    prop_assert_eq!(arr.try_set(i, v).ok(), expected);
                },
                Op::Pop => {
                    prop_assert_eq!(arr.pop(), model.pop());
                },
                Op::Clear => {
                    arr.clear();
                    model.clear();
                },
            }

            prop_assert!(arr.len() <= arr.cap());
            prop_assert_eq!(arr.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn remove_at_shifts_later_indices(values in prop::collection::vec(any::<i32>(), 1..64), pick in any::<prop::sample::Index>()) {
        let index = pick.index(values.len());
        let mut arr: DynamicArray<_> = values.iter().copied().collect();

        prop_assert_eq!(arr.remove_at(index), values[index]);
        prop_assert_eq!(arr.len(), values.len() - 1);
        prop_assert_eq!(&arr[..index], &values[..index]);
        prop_assert_eq!(&arr[index..], &values[index + 1..]);
    }
}
