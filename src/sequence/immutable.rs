//! Immutable, fixed-content sequence.
//!
//! This module provides [`ImmutableSequence`], an ordered collection whose
//! contents are fixed at construction time.
//!
//! # Overview
//!
//! `ImmutableSequence` owns a single contiguous buffer. It provides:
//!
//! - O(1) length and indexed access
//! - O(n) search (`index_of`, `last_index_of`, `contains`)
//! - O(n) transforms (`reverse`, `filter`, `map`, `sub_sequence`)
//! - a read-only, bidirectional [`SequenceCursor`]
//!
//! Every transform produces a new sequence with its own buffer. Nothing is
//! shared between a sequence and the sequences derived from it.
//!
//! # Examples
//!
//! ```rust
//! use immutable_sequence::sequence::ImmutableSequence;
//!
//! let sequence = ImmutableSequence::from(vec![97, 44, 67, 3, 22]);
//!
//! let even = sequence.filter(|value| value % 2 == 0);
//! assert_eq!(even.to_vec(), vec![44, 22]);
//!
//! // The original sequence is unchanged
//! assert_eq!(sequence.len(), 5);
//! ```
//!
//! # Defensive Copies
//!
//! A sequence never aliases storage owned by its caller. Borrowed sources are
//! cloned and owned sources are moved in:
//!
//! ```rust
//! use immutable_sequence::sequence::ImmutableSequence;
//!
//! let mut source = vec![1, 2, 3];
//! let sequence = ImmutableSequence::from_slice(&source);
//! source[0] = 100;
//! assert_eq!(sequence.get(0), Ok(&1));
//!
//! let mut exported = sequence.to_vec();
//! exported[1] = 200;
//! assert_eq!(sequence.get(1), Ok(&2));
//! ```

use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::ops::Index;

use super::cursor::SequenceCursor;
use super::error::SequenceError;

/// An immutable, fixed-content ordered collection.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `new`           | O(1)       |
/// | `len`           | O(1)       |
/// | `get`           | O(1)       |
/// | `index_of`      | O(n)       |
/// | `sub_sequence`  | O(k)       |
/// | `reverse`       | O(n)       |
/// | `filter`        | O(n)       |
/// | `map`           | O(n)       |
/// | `fold_left`     | O(n)       |
///
/// # Absent Values
///
/// Slots that may be empty are modelled as `Option<T>` elements. Search
/// operations compare with `PartialEq`, so `None` matches only `None`:
///
/// ```rust
/// use immutable_sequence::sequence::ImmutableSequence;
///
/// let sequence = ImmutableSequence::from(vec![Some(1), None, Some(3), None]);
/// assert_eq!(sequence.index_of(&None), Some(1));
/// assert_eq!(sequence.last_index_of(&None), Some(3));
/// assert!(!sequence.contains(&Some(2)));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImmutableSequence<T> {
    /// The owned buffer. Never mutated after construction.
    elements: Box<[T]>,
}

/// Validates a half-open range `from_index..to_index` against `length`.
pub const fn check_range(
    from_index: usize,
    to_index: usize,
    length: usize,
) -> Result<(), SequenceError> {
    if from_index > to_index || to_index > length {
        return Err(SequenceError::InvalidRange {
            from_index,
            to_index,
            length,
        });
    }
    Ok(())
}

impl<T> ImmutableSequence<T> {
    /// Creates a new empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence: ImmutableSequence<i32> = ImmutableSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Box::default(),
        }
    }

    /// Creates a sequence from any collection, in the collection's iteration order.
    ///
    /// The collection is consumed, so no storage is shared with the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    /// use std::collections::BTreeSet;
    ///
    /// let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    /// let sequence = ImmutableSequence::from_collection(set);
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_collection<I>(collection: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        collection.into_iter().collect()
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::{ImmutableSequence, SequenceError};
    ///
    /// let sequence = ImmutableSequence::from(vec!["a", "b"]);
    /// assert_eq!(sequence.get(1), Ok(&"b"));
    /// assert_eq!(
    ///     sequence.get(2),
    ///     Err(SequenceError::IndexOutOfBounds { index: 2, length: 2 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.elements
            .get(index)
            .ok_or(SequenceError::IndexOutOfBounds {
                index,
                length: self.elements.len(),
            })
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Borrows the contents as a read-only slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from([1, 2, 3]);
    /// let collected: Vec<&i32> = sequence.iter().rev().collect();
    /// assert_eq!(collected, vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ImmutableSequenceIterator<'_, T> {
        ImmutableSequenceIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns a read-only cursor positioned on the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from([10, 20, 30]);
    /// let mut cursor = sequence.cursor();
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert_eq!(cursor.advance(), Ok(&20));
    /// ```
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> SequenceCursor<'_, T> {
        SequenceCursor::new(self, 0)
    }

    /// Returns a read-only cursor positioned on `start`.
    ///
    /// `start` may equal `self.len()`, which places the cursor just past the
    /// last element so that it can only move backwards.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `start > self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from([10, 20, 30]);
    /// let mut cursor = sequence.cursor_at(3).unwrap();
    /// assert_eq!(cursor.retreat(), Ok(&30));
    /// assert!(sequence.cursor_at(4).is_err());
    /// ```
    pub fn cursor_at(&self, start: usize) -> Result<SequenceCursor<'_, T>, SequenceError> {
        if start > self.len() {
            return Err(SequenceError::IndexOutOfBounds {
                index: start,
                length: self.len(),
            });
        }
        Ok(SequenceCursor::new(self, start))
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// Returns `None` if no element matches.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().position(|element| element == value)
    }

    /// Returns the index of the last element equal to `value`.
    ///
    /// Returns `None` if no element matches.
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().rposition(|element| element == value)
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns `true` if every value yielded by `values` is contained in the sequence.
    ///
    /// An empty set of values is always contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from(vec!["bond", "equity", "gold"]);
    /// assert!(sequence.contains_all(&["gold", "bond"]));
    /// assert!(!sequence.contains_all(&["gold", "silver"]));
    /// ```
    #[must_use]
    pub fn contains_all<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v T>,
        T: PartialEq + 'v,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Returns a new sequence with `function` applied to every element.
    ///
    /// `function` is called exactly once per element, in index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from(vec![1, 2, 3]);
    /// let doubled: ImmutableSequence<f64> = sequence.map(|value| f64::from(*value) * 2.0);
    /// assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> ImmutableSequence<B>
    where
        F: FnMut(&T) -> B,
    {
        self.elements.iter().map(function).collect()
    }

    /// Folds the sequence from the left, starting from `initial`.
    ///
    /// Unlike [`fold_left`](Self::fold_left), this is defined for empty
    /// sequences, where it returns `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from(vec![1, 2, 3]);
    /// let length = sequence.fold(0usize, |count, _| count + 1);
    /// assert_eq!(length, 3);
    /// ```
    pub fn fold<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.elements.iter().fold(initial, function)
    }

    /// Consumes the sequence and returns its elements as a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_vec()
    }
}

impl<T: Clone> ImmutableSequence<T> {
    /// Creates a sequence holding a copy of `slice`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let source = [1, 2, 3];
    /// let sequence = ImmutableSequence::from_slice(&source);
    /// assert_eq!(sequence.as_slice(), &source);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self {
            elements: Box::from(slice),
        }
    }

    /// Creates a sequence holding a copy of `slice[from_index..to_index]`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidRange`] if `from_index > to_index`
    /// or `to_index > slice.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let source = ["a", "b", "c", "d"];
    /// let sequence = ImmutableSequence::from_slice_range(&source, 1, 3).unwrap();
    /// assert_eq!(sequence.to_vec(), vec!["b", "c"]);
    /// ```
    pub fn from_slice_range(
        slice: &[T],
        from_index: usize,
        to_index: usize,
    ) -> Result<Self, SequenceError> {
        check_range(from_index, to_index, slice.len())?;
        log::trace!(
            "copying range {from_index}..{to_index} out of {} elements",
            slice.len()
        );
        Ok(Self::from_slice(&slice[from_index..to_index]))
    }

    /// Returns a new sequence holding a copy of the half-open range
    /// `from_index..to_index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidRange`] if `from_index > to_index`
    /// or `to_index > self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(sequence.sub_sequence(1, 4).unwrap().to_vec(), vec![2, 3, 4]);
    /// assert!(sequence.sub_sequence(4, 1).is_err());
    /// ```
    pub fn sub_sequence(&self, from_index: usize, to_index: usize) -> Result<Self, SequenceError> {
        Self::from_slice_range(&self.elements, from_index, to_index)
    }

    /// Returns a new sequence with the elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    ///
    /// let sequence = ImmutableSequence::from(vec![1, 2, 3]);
    /// assert_eq!(sequence.reverse().to_vec(), vec![3, 2, 1]);
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.elements.iter().rev().cloned().collect()
    }

    /// Returns a new sequence holding, in their original order, the elements
    /// for which `predicate` returns `true`.
    ///
    /// `predicate` is called exactly once per element, in index order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .iter()
            .filter(|&element| predicate(element))
            .cloned()
            .collect()
    }

    /// Folds the sequence from the left using the first element as the seed.
    ///
    /// `function(accumulator, element)` is applied to every remaining element
    /// in index order. The order of application only matters for combiners
    /// that are not both associative and commutative.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyFold`] if the sequence is empty. Use
    /// [`fold`](Self::fold) when an identity value exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::{ImmutableSequence, SequenceError};
    ///
    /// let words = ImmutableSequence::from(vec![
    ///     String::from("sub"),
    ///     String::from("way"),
    ///     String::from(" station"),
    /// ]);
    /// let joined = words.fold_left(|accumulator, word| accumulator + word);
    /// assert_eq!(joined.as_deref(), Ok("subway station"));
    ///
    /// let empty: ImmutableSequence<i32> = ImmutableSequence::new();
    /// assert_eq!(empty.fold_left(|x, y| x + y), Err(SequenceError::EmptyFold));
    /// ```
    pub fn fold_left<F>(&self, function: F) -> Result<T, SequenceError>
    where
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.elements.iter();
        let Some(first) = iter.next() else {
            log::debug!("fold_left called on an empty sequence");
            return Err(SequenceError::EmptyFold);
        };
        Ok(iter.fold(first.clone(), function))
    }

    /// Returns a fresh copy of the elements.
    ///
    /// Mutating the returned `Vec` never affects the sequence.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of an [`ImmutableSequence`].
pub struct ImmutableSequenceIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<T> Clone for ImmutableSequenceIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for ImmutableSequenceIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, count: usize) -> Option<Self::Item> {
        self.inner.nth(count)
    }
}

impl<T> DoubleEndedIterator for ImmutableSequenceIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ImmutableSequenceIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for ImmutableSequenceIterator<'_, T> {}

/// An owning iterator over elements of an [`ImmutableSequence`].
pub struct ImmutableSequenceIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for ImmutableSequenceIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ImmutableSequenceIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ImmutableSequenceIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for ImmutableSequenceIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ImmutableSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ImmutableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for ImmutableSequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for ImmutableSequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: Box::from(elements),
        }
    }
}

impl<T: Clone> From<&[T]> for ImmutableSequence<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T> From<ImmutableSequence<T>> for Vec<T> {
    fn from(sequence: ImmutableSequence<T>) -> Self {
        sequence.into_vec()
    }
}

impl<T> IntoIterator for ImmutableSequence<T> {
    type Item = T;
    type IntoIter = ImmutableSequenceIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ImmutableSequenceIntoIterator {
            inner: self.elements.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSequence<T> {
    type Item = &'a T;
    type IntoIter = ImmutableSequenceIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Indexes into the sequence.
///
/// # Panics
///
/// Panics if `index >= self.len()`. Use [`ImmutableSequence::get`] for a
/// checked lookup.
impl<T> Index<usize> for ImmutableSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> AsRef<[T]> for ImmutableSequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ImmutableSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// Reads never need synchronization.
static_assertions::assert_impl_all!(ImmutableSequence<i32>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableSequence<String>: Send, Sync);
static_assertions::assert_not_impl_any!(ImmutableSequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ImmutableSequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ImmutableSequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ImmutableSequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ImmutableSequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(ImmutableSequence::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmutableSequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ImmutableSequenceVisitor::new())
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
impl<T: Sync> ImmutableSequence<T> {
    /// Returns a parallel iterator over references to the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_sequence::sequence::ImmutableSequence;
    /// use rayon::prelude::*;
    ///
    /// let sequence: ImmutableSequence<u64> = (1..=100).collect();
    /// let total: u64 = sequence.par_iter().sum();
    /// assert_eq!(total, 5050);
    /// ```
    #[must_use]
    pub fn par_iter(&self) -> rayon::slice::Iter<'_, T> {
        use rayon::iter::IntoParallelIterator;
        self.as_slice().into_par_iter()
    }
}

#[cfg(feature = "rayon")]
impl<'a, T: Sync + 'a> rayon::iter::IntoParallelIterator for &'a ImmutableSequence<T> {
    type Iter = rayon::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_par_iter(self) -> Self::Iter {
        self.par_iter()
    }
}

#[cfg(feature = "rayon")]
impl<T: Send> rayon::iter::FromParallelIterator<T> for ImmutableSequence<T> {
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: rayon::iter::IntoParallelIterator<Item = T>,
    {
        use rayon::iter::ParallelIterator;
        let elements: Vec<T> = par_iter.into_par_iter().collect();
        Self::from(elements)
    }
}

// =============================================================================
// Tests
// =============================================================================
