use std::cmp::Ordering;

/// A sort entry point under test.
///
/// Inputs are handed over as `Vec` so implementations can move them into whatever container they
/// sort through and hand the result back.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut Vec<T>)
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut Vec<T>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
