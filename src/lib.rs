//! A growable array with checked indexed access, and an in-place quicksort that works through any
//! container exposing the same indexed contract.

pub mod dynamic_array;
pub mod error;
pub mod sort_utils;

pub use dynamic_array::DynamicArray;
pub use error::{ContainerError, Result};

/// Indexed access to a sequence of live elements.
///
/// Every index is checked against `size()`. Implementations must reject out of range indices with
/// [`ContainerError::IndexOutOfBounds`] before touching any element.
pub trait IndexedSeq {
    type Item;

    fn size(&self) -> usize;

    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item>;

    /// Exchanges the elements at `a` and `b`. Both indices are validated before anything moves.
    fn swap(&mut self, a: usize, b: usize) -> Result<()>;
}

impl<E> IndexedSeq for Vec<E> {
    type Item = E;

    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<&E> {
        self.as_slice()
            .get(index)
            .ok_or(ContainerError::IndexOutOfBounds {
                index,
                size: self.len(),
            })
    }

    fn set(&mut self, index: usize, element: E) -> Result<E> {
        let size = self.len();
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, element)),
            None => Err(ContainerError::IndexOutOfBounds { index, size }),
        }
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let size = self.len();
        for index in [a, b] {
            if index >= size {
                return Err(ContainerError::IndexOutOfBounds { index, size });
            }
        }
        self.as_mut_slice().swap(a, b);
        Ok(())
    }
}
