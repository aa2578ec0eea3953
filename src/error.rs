use thiserror::Error;

/// Errors reported by [`DynamicArray`](crate::DynamicArray) and
/// [`Stack`](crate::Stack) operations.
///
/// Every error is signaled synchronously by the violating call; no
/// operation clamps an invalid index or defers reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// An index was outside the valid domain of the operation.
    ///
    /// For checked access and removal the valid domain is `index < len`;
    /// for insertion it is `index <= len`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A pop or peek was attempted on an empty collection.
    #[error("collection is empty")]
    Empty,

    /// A fallible growth operation could not obtain memory.
    ///
    /// The collection is left exactly as it was before the call.
    #[error("allocation of {requested} elements failed")]
    Alloc { requested: usize },
}
