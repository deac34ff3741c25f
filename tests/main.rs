use std::cmp::Ordering;
use std::mem;

use dyn_array_rs::{sort_utils, DynamicArray};
use seq_test_tools::{instantiate_sort_tests, Sort};

/// `sort_utils` entry points driven through a `DynamicArray`.
struct QuickSortImpl {}

impl Sort for QuickSortImpl {
    fn name() -> String {
        "sort_utils_quick_sort".into()
    }

    fn sort<T>(v: &mut Vec<T>)
    where
        T: Ord,
    {
        let mut arr = DynamicArray::from(mem::take(v));
        sort_utils::quick_sort(Some(&mut arr)).unwrap();
        *v = arr.into_vec();
    }

    fn sort_by<T, F>(v: &mut Vec<T>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut arr = DynamicArray::from(mem::take(v));
        sort_utils::quick_sort_by(Some(&mut arr), Some(compare)).unwrap();
        *v = arr.into_vec();
    }
}

/// `sort_utils` entry points applied to a plain `Vec`.
struct QuickSortVecImpl {}

impl Sort for QuickSortVecImpl {
    fn name() -> String {
        "sort_utils_quick_sort_vec".into()
    }

    fn sort<T>(v: &mut Vec<T>)
    where
        T: Ord,
    {
        sort_utils::quick_sort(Some(v)).unwrap();
    }

    fn sort_by<T, F>(v: &mut Vec<T>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort_utils::quick_sort_by(Some(v), Some(compare)).unwrap();
    }
}

/// The container's own `sort` and `sort_by`.
struct DynamicArraySortImpl {}

impl Sort for DynamicArraySortImpl {
    fn name() -> String {
        "dynamic_array_sort".into()
    }

    fn sort<T>(v: &mut Vec<T>)
    where
        T: Ord,
    {
        let mut arr = DynamicArray::from(mem::take(v));
        arr.sort();
        *v = arr.into_vec();
    }

    fn sort_by<T, F>(v: &mut Vec<T>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut arr = DynamicArray::from(mem::take(v));
        arr.sort_by(compare);
        *v = arr.into_vec();
    }
}

instantiate_sort_tests!(quick_sort, QuickSortImpl);
instantiate_sort_tests!(quick_sort_vec, QuickSortVecImpl);
instantiate_sort_tests!(dynamic_array_sort, DynamicArraySortImpl);
