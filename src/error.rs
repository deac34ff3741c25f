use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContainerError>;

/// Errors reported by [`DynamicArray`](crate::DynamicArray) and the [`sort_utils`](crate::sort_utils)
/// entry points.
///
/// Every failing operation validates before it mutates, so the container is left exactly as it
/// was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// A constructor or sort argument was unusable, e.g. a negative capacity or a missing
    /// comparator.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("index: {index}, size: {size}")]
    IndexOutOfBounds { index: usize, size: usize },
}
