//! Mutable-list interfaces, kept apart from the read-only capability set.
//!
//! [`ListMutation`] and [`CursorMutation`] describe the mutating half of a
//! general list API. The immutable types implement both traits so they can
//! be handed to code written against the general API, and reject every call
//! with [`SequenceError::Unsupported`].
//!
//! # Examples
//!
//! ```rust
//! use immutable_sequence::sequence::{ImmutableSequence, ListMutation};
//!
//! fn append_marker<L: ListMutation<i32>>(list: &mut L) -> bool {
//!     list.add(-1).unwrap_or(false)
//! }
//!
//! let mut sequence = ImmutableSequence::from(vec![1, 2]);
//! assert!(!append_marker(&mut sequence));
//! assert_eq!(sequence.to_vec(), vec![1, 2]);
//! ```

use super::cursor::SequenceCursor;
use super::error::SequenceError;
use super::immutable::ImmutableSequence;

/// The mutating operations of a general list.
pub trait ListMutation<T> {
    /// Appends `element`. Returns `true` if the list changed.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn add(&mut self, element: T) -> Result<bool, SequenceError>;

    /// Inserts `element` at `index`, shifting later elements back.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn insert(&mut self, index: usize, element: T) -> Result<(), SequenceError>;

    /// Appends every element of `elements`. Returns `true` if the list changed.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn add_all<I>(&mut self, elements: I) -> Result<bool, SequenceError>
    where
        I: IntoIterator<Item = T>;

    /// Inserts every element of `elements` starting at `index`.
    /// Returns `true` if the list changed.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn insert_all<I>(&mut self, index: usize, elements: I) -> Result<bool, SequenceError>
    where
        I: IntoIterator<Item = T>;

    /// Removes the first element equal to `value`. Returns `true` if one was found.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn remove(&mut self, value: &T) -> Result<bool, SequenceError>
    where
        T: PartialEq;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn remove_at(&mut self, index: usize) -> Result<T, SequenceError>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn set(&mut self, index: usize, element: T) -> Result<T, SequenceError>;

    /// Removes every element contained in `values`. Returns `true` if the list changed.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn remove_all(&mut self, values: &[T]) -> Result<bool, SequenceError>
    where
        T: PartialEq;

    /// Keeps only the elements contained in `values`. Returns `true` if the list changed.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn retain_all(&mut self, values: &[T]) -> Result<bool, SequenceError>
    where
        T: PartialEq;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for immutable lists.
    fn clear(&mut self) -> Result<(), SequenceError>;
}

/// The mutating operations of a list cursor.
pub trait CursorMutation<T> {
    /// Removes the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for read-only cursors.
    fn remove(&mut self) -> Result<(), SequenceError>;

    /// Replaces the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for read-only cursors.
    fn set(&mut self, element: T) -> Result<(), SequenceError>;

    /// Inserts an element at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unsupported`] for read-only cursors.
    fn add(&mut self, element: T) -> Result<(), SequenceError>;
}

fn reject(type_name: &'static str, operation: &'static str) -> SequenceError {
    log::debug!("rejected {operation} on read-only {type_name}");
    SequenceError::unsupported(type_name, operation)
}

// =============================================================================
// ImmutableSequence
// =============================================================================

const SEQUENCE_TYPE_NAME: &str = "ImmutableSequence";

impl<T> ListMutation<T> for ImmutableSequence<T> {
    fn add(&mut self, _element: T) -> Result<bool, SequenceError> {
        Err(reject(SEQUENCE_TYPE_NAME, "add"))
    }

    fn insert(&mut self, _index: usize, _element: T) -> Result<(), SequenceError> {
        Err(reject(SEQUENCE_TYPE_NAME, "insert"))
    }

    fn add_all<I>(&mut self, _elements: I) -> Result<bool, SequenceError>
    where
        I: IntoIterator<Item = T>,
    {
        Err(reject(SEQUENCE_TYPE_NAME, "add_all"))
    }

    fn insert_all<I>(&mut self, _index: usize, _elements: I) -> Result<bool, SequenceError>
    where
        I: IntoIterator<Item = T>,
    {
        Err(reject(SEQUENCE_TYPE_NAME, "insert_all"))
    }

    fn remove(&mut self, _value: &T) -> Result<bool, SequenceError>
    where
        T: PartialEq,
    {
        Err(reject(SEQUENCE_TYPE_NAME, "remove"))
    }

    fn remove_at(&mut self, _index: usize) -> Result<T, SequenceError> {
        Err(reject(SEQUENCE_TYPE_NAME, "remove_at"))
    }

    fn set(&mut self, _index: usize, _element: T) -> Result<T, SequenceError> {
        Err(reject(SEQUENCE_TYPE_NAME, "set"))
    }

    fn remove_all(&mut self, _values: &[T]) -> Result<bool, SequenceError>
    where
        T: PartialEq,
    {
        Err(reject(SEQUENCE_TYPE_NAME, "remove_all"))
    }

    fn retain_all(&mut self, _values: &[T]) -> Result<bool, SequenceError>
    where
        T: PartialEq,
    {
        Err(reject(SEQUENCE_TYPE_NAME, "retain_all"))
    }

    fn clear(&mut self) -> Result<(), SequenceError> {
        Err(reject(SEQUENCE_TYPE_NAME, "clear"))
    }
}

// =============================================================================
// SequenceCursor
// =============================================================================

const CURSOR_TYPE_NAME: &str = "SequenceCursor";

impl<T> CursorMutation<T> for SequenceCursor<'_, T> {
    fn remove(&mut self) -> Result<(), SequenceError> {
        Err(reject(CURSOR_TYPE_NAME, "remove"))
    }

    fn set(&mut self, _element: T) -> Result<(), SequenceError> {
        Err(reject(CURSOR_TYPE_NAME, "set"))
    }

    fn add(&mut self, _element: T) -> Result<(), SequenceError> {
        Err(reject(CURSOR_TYPE_NAME, "add"))
    }
}
