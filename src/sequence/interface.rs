//! The read-only capability set shared by sequence-like types.
//!
//! [`ReadOnlySequence`] is the interface generic code should accept when it
//! only needs to read: length, checked indexed access, search, iteration,
//! range copies and defensive export. It is implemented for
//! [`ImmutableSequence`], `Vec<T>` and `[T]`.
//!
//! # Examples
//!
//! ```rust
//! use immutable_sequence::sequence::{ImmutableSequence, ReadOnlySequence};
//!
//! fn count_matches<S: ReadOnlySequence<i32> + ?Sized>(sequence: &S, value: i32) -> usize {
//!     sequence.elements().filter(|element| **element == value).count()
//! }
//!
//! let immutable = ImmutableSequence::from(vec![1, 2, 1]);
//! let vector = vec![1, 1, 1];
//! assert_eq!(count_matches(&immutable, 1), 2);
//! assert_eq!(count_matches(&vector, 1), 3);
//! assert_eq!(count_matches(&vector[..1], 1), 1);
//! ```

use super::error::SequenceError;
use super::immutable::{ImmutableSequence, ImmutableSequenceIterator, check_range};

/// A type that exposes an ordered, read-only view of its elements.
pub trait ReadOnlySequence<T> {
    /// The iterator returned by [`elements`](Self::elements).
    type Iter<'a>: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `index >= self.len()`.
    fn element_at(&self, index: usize) -> Result<&T, SequenceError>;

    /// Returns an iterator over the elements, front to back.
    fn elements(&self) -> Self::Iter<'_>;

    /// Returns the index of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements().position(|element| element == value)
    }

    /// Returns the index of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements().rposition(|element| element == value)
    }

    /// Returns `true` if some element equals `value`.
    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns `true` if every value yielded by `values` is contained.
    fn contains_all<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v T>,
        T: PartialEq + 'v,
    {
        values.into_iter().all(|value| self.contains_value(value))
    }

    /// Copies the half-open range `from_index..to_index` into a new
    /// [`ImmutableSequence`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidRange`] if `from_index > to_index`
    /// or `to_index > self.len()`.
    fn copy_range(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<ImmutableSequence<T>, SequenceError>
    where
        T: Clone,
    {
        check_range(from_index, to_index, self.len())?;
        Ok(self
            .elements()
            .skip(from_index)
            .take(to_index - from_index)
            .cloned()
            .collect())
    }

    /// Returns a fresh `Vec` holding copies of the elements.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements().cloned().collect()
    }

    /// Returns an [`ImmutableSequence`] holding copies of the elements.
    fn to_immutable(&self) -> ImmutableSequence<T>
    where
        T: Clone,
    {
        self.elements().cloned().collect()
    }
}

impl<T> ReadOnlySequence<T> for ImmutableSequence<T> {
    type Iter<'a>
        = ImmutableSequenceIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.get(index)
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn copy_range(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<Self, SequenceError>
    where
        T: Clone,
    {
        self.sub_sequence(from_index, to_index)
    }

    fn to_immutable(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }
}

impl<T> ReadOnlySequence<T> for [T] {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        Self::get(self, index).ok_or(SequenceError::IndexOutOfBounds {
            index,
            length: Self::len(self),
        })
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn copy_range(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<ImmutableSequence<T>, SequenceError>
    where
        T: Clone,
    {
        ImmutableSequence::from_slice_range(self, from_index, to_index)
    }
}

impl<T> ReadOnlySequence<T> for Vec<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.as_slice().element_at(index)
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn copy_range(
        &self,
        from_index: usize,
        to_index: usize,
    ) -> Result<ImmutableSequence<T>, SequenceError>
    where
        T: Clone,
    {
        ImmutableSequence::from_slice_range(self, from_index, to_index)
    }
}
