//! Read-only bidirectional cursor over an [`ImmutableSequence`].
//!
//! A [`SequenceCursor`] always stands on a position. [`advance`] and
//! [`retreat`] move it one step and return the element at the new
//! position:
//!
//! ```text
//! sequence:  [ a , b , c ]
//! position:    0   1   2   3
//!              ^ start      ^ cursor_at(len)
//! ```
//!
//! A failed move leaves the cursor where it was.
//!
//! [`advance`]: SequenceCursor::advance
//! [`retreat`]: SequenceCursor::retreat

use std::fmt;

use super::error::SequenceError;
use super::immutable::ImmutableSequence;

/// A read-only cursor that moves forwards and backwards over a sequence.
///
/// The cursor borrows the sequence, so it can never observe a change to it.
/// Moving requires `&mut self`; independent cursors over the same sequence
/// can be used from different threads.
///
/// # Examples
///
/// ```rust
/// use immutable_sequence::sequence::ImmutableSequence;
///
/// let sequence = ImmutableSequence::from(["a", "b", "c"]);
/// let mut cursor = sequence.cursor();
///
/// assert!(cursor.has_next());
/// assert_eq!(cursor.advance(), Ok(&"b"));
/// assert_eq!(cursor.advance(), Ok(&"c"));
/// assert!(!cursor.has_next());
///
/// assert!(cursor.has_previous());
/// assert_eq!(cursor.retreat(), Ok(&"b"));
/// ```
pub struct SequenceCursor<'a, T> {
    sequence: &'a ImmutableSequence<T>,
    position: usize,
}

impl<'a, T> SequenceCursor<'a, T> {
    pub(crate) const fn new(sequence: &'a ImmutableSequence<T>, position: usize) -> Self {
        Self { sequence, position }
    }

    /// Returns the current position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the element at the current position.
    ///
    /// Returns `None` for an empty sequence or a cursor placed past the last element.
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        self.sequence.get(self.position).ok()
    }

    /// Returns `true` if [`advance`](Self::advance) would succeed.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position + 1 < self.sequence.len()
    }

    /// Moves one step forward and returns the element at the new position.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if the cursor is already on
    /// the last position. The cursor does not move.
    pub fn advance(&mut self) -> Result<&'a T, SequenceError> {
        let sequence = self.sequence;
        let target = self.position + 1;
        let element = sequence.get(target)?;
        self.position = target;
        Ok(element)
    }

    /// Returns `true` if [`retreat`](Self::retreat) would succeed.
    #[inline]
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Moves one step backward and returns the element at the new position.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::BeforeFirst`] if the cursor is on position 0.
    /// The cursor does not move.
    pub fn retreat(&mut self) -> Result<&'a T, SequenceError> {
        let sequence = self.sequence;
        let Some(target) = self.position.checked_sub(1) else {
            return Err(SequenceError::BeforeFirst {
                length: sequence.len(),
            });
        };
        let element = sequence.get(target)?;
        self.position = target;
        Ok(element)
    }

    /// Returns the position [`advance`](Self::advance) would move to.
    ///
    /// Not checked against the length; call [`has_next`](Self::has_next) first.
    #[inline]
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.position + 1
    }

    /// Returns the position [`retreat`](Self::retreat) would move to, or
    /// `None` on position 0.
    #[inline]
    #[must_use]
    pub const fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }
}

impl<T> Clone for SequenceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SequenceCursor<'_, T> {}

impl<T> fmt::Debug for SequenceCursor<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SequenceCursor")
            .field("position", &self.position)
            .field("length", &self.sequence.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(SequenceCursor<'static, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters() -> ImmutableSequence<char> {
        ImmutableSequence::from(['a', 'b', 'c'])
    }

    #[rstest]
    fn test_new_cursor_starts_on_first_element() {
        let sequence = letters();
        let cursor = sequence.cursor();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current(), Some(&'a'));
        assert!(cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.previous_index(), None);
    }

    #[rstest]
    fn test_advance_until_end() {
        let sequence = letters();
        let mut cursor = sequence.cursor();
        assert_eq!(cursor.advance(), Ok(&'b'));
        assert_eq!(cursor.advance(), Ok(&'c'));
        assert!(!cursor.has_next());
        assert_eq!(
            cursor.advance(),
            Err(SequenceError::IndexOutOfBounds {
                index: 3,
                length: 3
            })
        );
        assert_eq!(cursor.position(), 2);
    }

    #[rstest]
    fn test_retreat_at_start_does_not_move() {
        let sequence = letters();
        let mut cursor = sequence.cursor();
        assert_eq!(
            cursor.retreat(),
            Err(SequenceError::BeforeFirst { length: 3 })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[rstest]
    #[case(0, Some(&'a'))]
    #[case(2, Some(&'c'))]
    #[case(3, None)]
    fn test_cursor_at_honours_start(#[case] start: usize, #[case] expected: Option<&char>) {
        let sequence = letters();
        let cursor = sequence.cursor_at(start).unwrap();
        assert_eq!(cursor.position(), start);
        assert_eq!(cursor.current(), expected);
    }

    #[rstest]
    fn test_cursor_at_past_end_is_error() {
        let sequence = letters();
        assert_eq!(
            sequence.cursor_at(4).map(|cursor| cursor.position()),
            Err(SequenceError::IndexOutOfBounds {
                index: 4,
                length: 3
            })
        );
    }

    #[rstest]
    fn test_empty_sequence_cursor() {
        let sequence: ImmutableSequence<i32> = ImmutableSequence::new();
        let mut cursor = sequence.cursor();
        assert_eq!(cursor.current(), None);
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert!(cursor.advance().is_err());
        assert!(cursor.retreat().is_err());
    }

    #[rstest]
    fn test_copied_cursor_moves_independently() {
        let sequence = letters();
        let mut first = sequence.cursor();
        let second = first;
        first.advance().unwrap();
        assert_eq!(first.position(), 1);
        assert_eq!(second.position(), 0);
    }

    #[rstest]
    fn test_debug_shows_position_and_length() {
        let sequence = letters();
        let cursor = sequence.cursor();
        assert_eq!(
            format!("{cursor:?}"),
            "SequenceCursor { position: 0, length: 3 }"
        );
    }
}
