use core::cmp::Ordering;
use core::fmt;

use crate::error::{ContainerError, Result};
use crate::IndexedSeq;

/// Capacity used by [`DynamicArray::new`] and restored by [`DynamicArray::clear`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity that follows `cap` once the buffer is full: `cap * 3 / 2 + 1`.
///
/// Always strictly larger than `cap`, including for `cap == 0`.
#[inline]
pub const fn grow_capacity(cap: usize) -> usize {
    // cap + cap / 2 == cap * 3 / 2 without the intermediate overflow.
    cap.saturating_add(cap / 2).saturating_add(1)
}

/// Growable array of `E` with checked indexed access.
///
/// The backing buffer is a boxed slice whose length *is* the capacity. Slots `[0, size)` are always
/// occupied, slots `[size, capacity)` are always vacant. Elements may themselves be "absent"
/// values, e.g. `DynamicArray<Option<T>>` stores `None` like any other element.
#[derive(Clone)]
pub struct DynamicArray<E> {
    store: Box<[Option<E>]>,
    size: usize,
}

impl<E> DynamicArray<E> {
    /// Creates an empty array with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    ///
    /// A capacity of zero is valid, the buffer grows on the first insertion.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: vacant_store(capacity),
            size: 0,
        }
    }

    /// Like [`DynamicArray::with_capacity`], for callers holding a signed or wider capacity.
    ///
    /// Fails with [`ContainerError::InvalidArgument`] if `capacity` is negative or does not fit
    /// `usize`.
    pub fn try_with_capacity<C: TryInto<usize>>(capacity: C) -> Result<Self> {
        let capacity = capacity.try_into().map_err(|_| {
            ContainerError::InvalidArgument("start capacity must not be less than 0")
        })?;

        Ok(Self::with_capacity(capacity))
    }

    /// Number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Appends `element`, growing the buffer first if it is full.
    pub fn add(&mut self, element: E) {
        if self.size == self.capacity() {
            self.grow();
        }

        self.store[self.size] = Some(element);
        self.size += 1;
    }

    /// Inserts `element` at `index`, shifting `[index, size)` one slot to the right.
    ///
    /// `index == size` appends. Anything past that fails with
    /// [`ContainerError::IndexOutOfBounds`] and leaves the array untouched.
    pub fn insert(&mut self, index: usize, element: E) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_bounds(index));
        }

        if self.size == self.capacity() {
            self.grow();
        }

        // Write into the first vacant slot, then rotate it down into place.
        self.store[self.size] = Some(element);
        self.store[index..=self.size].rotate_right(1);
        self.size += 1;

        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&E> {
        self.check_index(index)?;

        Ok(occupied(&self.store[index]))
    }

    /// Overwrites the element at `index` and returns the one it replaced.
    pub fn set(&mut self, index: usize, element: E) -> Result<E> {
        self.check_index(index)?;

        Ok(occupied_take(self.store[index].replace(element)))
    }

    /// Removes and returns the element at `index`, shifting `(index, size)` one slot to the left.
    pub fn remove(&mut self, index: usize) -> Result<E> {
        self.check_index(index)?;

        self.store[index..self.size].rotate_left(1);
        self.size -= 1;

        Ok(occupied_take(self.store[self.size].take()))
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;

        self.store.swap(a, b);
        Ok(())
    }

    /// Drops every element and starts over with a fresh [`DEFAULT_CAPACITY`] buffer.
    pub fn clear(&mut self) {
        self.store = vacant_store(DEFAULT_CAPACITY);
        self.size = 0;
    }

    /// Sorts the live elements in ascending order.
    ///
    /// This sort is stable, equal elements keep their relative order.
    pub fn sort(&mut self)
    where
        E: Ord,
    {
        // All live slots are `Some`, so `Option`'s order is the element order.
        self.store[..self.size].sort();
    }

    /// Sorts the live elements with a comparator function. Stable.
    ///
    /// The comparator must define a total order, otherwise the resulting order is unspecified but
    /// all elements remain in the array.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        self.store[..self.size].sort_by(|a, b| compare(occupied(a), occupied(b)));
    }

    /// Copies the live elements into a new `Vec`, independent of later changes to `self`.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.store[..self.size].iter().flatten().cloned().collect()
    }

    /// Consumes the array and returns its live elements in order.
    pub fn into_vec(self) -> Vec<E> {
        let size = self.size;
        self.store.into_vec().into_iter().take(size).flatten().collect()
    }

    fn grow(&mut self) {
        let mut store = vacant_store(grow_capacity(self.capacity()));
        for (dst, src) in store.iter_mut().zip(self.store[..self.size].iter_mut()) {
            *dst = src.take();
        }

        self.store = store;
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    #[inline]
    fn out_of_bounds(&self, index: usize) -> ContainerError {
        ContainerError::IndexOutOfBounds {
            index,
            size: self.size,
        }
    }
}

fn vacant_store<E>(capacity: usize) -> Box<[Option<E>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

#[inline]
fn occupied<E>(slot: &Option<E>) -> &E {
    match slot {
        Some(element) => element,
        None => unreachable!("vacant slot inside the live range"),
    }
}

#[inline]
fn occupied_take<E>(slot: Option<E>) -> E {
    match slot {
        Some(element) => element,
        None => unreachable!("vacant slot inside the live range"),
    }
}

impl<E> Default for DynamicArray<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for DynamicArray<E> {
    /// Takes over the elements of `v`. The resulting capacity equals `v.len()`.
    fn from(v: Vec<E>) -> Self {
        let size = v.len();
        Self {
            store: v.into_iter().map(Some).collect(),
            size,
        }
    }
}

impl<E> From<DynamicArray<E>> for Vec<E> {
    fn from(array: DynamicArray<E>) -> Self {
        array.into_vec()
    }
}

impl<E: fmt::Debug> fmt::Debug for DynamicArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.store[..self.size].iter().flatten())
            .finish()
    }
}

/// Two arrays are equal if their live elements are, capacity is not compared.
impl<E: PartialEq> PartialEq for DynamicArray<E> {
    fn eq(&self, other: &Self) -> bool {
        self.store[..self.size] == other.store[..other.size]
    }
}

impl<E: Eq> Eq for DynamicArray<E> {}

impl<E> IndexedSeq for DynamicArray<E> {
    type Item = E;

    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&E> {
        DynamicArray::get(self, index)
    }

    #[inline]
    fn set(&mut self, index: usize, element: E) -> Result<E> {
        DynamicArray::set(self, index, element)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        DynamicArray::swap(self, a, b)
    }
}

