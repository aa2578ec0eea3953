use crate::array::DynamicArray;
use crate::error::ArrayError;

/// Last-in-first-out view over one owned [`DynamicArray`].
///
/// Only the LIFO operations are exposed; the full array surface stays
/// hidden.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: DynamicArray<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack without allocating.
    pub fn new() -> Self {
        Self {
            items: DynamicArray::new(),
        }
    }

    /// Pushes a value on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the most recently pushed value.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.items.pop()
    }

    /// Returns a reference to the most recently pushed value.
    pub fn peek(&self) -> Result<&T, ArrayError> {
        self.items.last().ok_or(ArrayError::Empty)
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
