//! Lomuto quicksort over any [`IndexedSeq`].
//!
//! The entry points mirror the two ways a caller can describe an order: an explicit comparator, or
//! the elements' own [`Ord`]. Both accept the container (and comparator) as `Option`, `None`
//! standing for an absent argument which is reported as [`ContainerError::InvalidArgument`].
//!
//! Ranges still to be partitioned are kept on an explicit stack instead of the call stack. The
//! smaller side of every partition is handled first, so the stack never holds more than
//! *O*(log(*n*)) ranges even for the *O*(*n*²) inputs of a last-element pivot (sorted, reversed or
//! all-equal data).

use core::cmp::Ordering;

use crate::error::{ContainerError, Result};
use crate::IndexedSeq;

const SOURCE_NOT_NONE: &str = "source container must be present";
const ARGUMENTS_NOT_NONE: &str = "source container and comparator must be present";

/// Sorts `source` in place in the order defined by `compare`.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place, *O*(*n* \* log(*n*)) on
/// average and *O*(*n*²) worst-case.
///
/// The comparator function must define a total ordering for the elements. If the ordering is not
/// total, the order of the elements is unspecified, but all original elements remain in `source`.
///
/// Fails with [`ContainerError::InvalidArgument`] if either argument is `None`.
pub fn quick_sort_by<C, F>(source: Option<&mut C>, compare: Option<F>) -> Result<()>
where
    C: IndexedSeq + ?Sized,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let (Some(source), Some(mut compare)) = (source, compare) else {
        return Err(ContainerError::InvalidArgument(ARGUMENTS_NOT_NONE));
    };

    quicksort(source, |a, b| compare(a, b) == Ordering::Less)
}

/// Sorts `source` in place in ascending natural order.
///
/// Same algorithm and guarantees as [`quick_sort_by`]. Fails with
/// [`ContainerError::InvalidArgument`] if `source` is `None`.
pub fn quick_sort<C>(source: Option<&mut C>) -> Result<()>
where
    C: IndexedSeq + ?Sized,
    C::Item: Ord,
{
    let Some(source) = source else {
        return Err(ContainerError::InvalidArgument(SOURCE_NOT_NONE));
    };

    quicksort(source, |a, b| a.lt(b))
}

// --- IMPL ---

fn quicksort<C, F>(source: &mut C, mut is_less: F) -> Result<()>
where
    C: IndexedSeq + ?Sized,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let len = source.size();
    if len < 2 {
        return Ok(());
    }

    // Half-open `[from, to)` ranges, each holding at least two elements.
    let mut pending = vec![(0, len)];

    while let Some((from, to)) = pending.pop() {
        let pivot_pos = partition(source, from, to, &mut is_less)?;

        let left = (from, pivot_pos);
        let right = (pivot_pos + 1, to);

        // Push the larger side first so the smaller one is popped next.
        let (larger, smaller) = if left.1 - left.0 >= right.1 - right.0 {
            (left, right)
        } else {
            (right, left)
        };

        for range in [larger, smaller] {
            if range.1 - range.0 >= 2 {
                pending.push(range);
            }
        }
    }

    Ok(())
}

/// Lomuto partition of `[from, to)` around the last element.
///
/// Every element for which `is_less(elem, pivot)` holds is moved into a growing prefix, then the
/// pivot is swapped in directly behind it. Returns the final position of the pivot.
fn partition<C, F>(source: &mut C, from: usize, to: usize, is_less: &mut F) -> Result<usize>
where
    C: IndexedSeq + ?Sized,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let pivot = to - 1;
    let mut num_lt = from;

    // The pivot slot is never touched by the scan, so it can be borrowed afresh each iteration.
    for scan in from..pivot {
        if is_less(source.get(scan)?, source.get(pivot)?) {
            source.swap(num_lt, scan)?;
            num_lt += 1;
        }
    }

    source.swap(num_lt, pivot)?;

    Ok(num_lt)
}
