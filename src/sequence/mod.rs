//! Immutable, fixed-content sequences.
//!
//! This module provides:
//!
//! - [`ImmutableSequence`]: an ordered collection whose contents never change
//! - [`SequenceCursor`]: a read-only cursor that moves in both directions
//! - [`ReadOnlySequence`]: the read-only capability set, also implemented for
//!   `Vec<T>` and `[T]`
//! - [`ListMutation`] / [`CursorMutation`]: the mutating half of a general
//!   list API, rejected by the immutable types
//! - [`SequenceError`]: the errors reported by all of the above
//!
//! # No Structural Sharing
//!
//! Unlike a persistent collection, every derived sequence owns a complete
//! copy of its elements:
//!
//! ```rust
//! use immutable_sequence::sequence::ImmutableSequence;
//!
//! let sequence = ImmutableSequence::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let reversed = sequence.reverse();
//! assert_eq!(reversed.first(), Some(&10));
//! assert_eq!(sequence.first(), Some(&1));   // Original unchanged
//!
//! assert_eq!(sequence.fold_left(|x, y| x + y), Ok(55));
//! assert_eq!(reversed.fold_left(|x, y| x + y), Ok(55));
//! ```
//!
//! # Cursors
//!
//! ```rust
//! use immutable_sequence::sequence::ImmutableSequence;
//!
//! let sequence = ImmutableSequence::from(["bond", "equity", "gold"]);
//! let mut cursor = sequence.cursor_at(1).unwrap();
//! assert_eq!(cursor.current(), Some(&"equity"));
//! assert_eq!(cursor.retreat(), Ok(&"bond"));
//! assert_eq!(cursor.previous_index(), None);
//! ```

mod cursor;
mod error;
mod immutable;
mod interface;
mod mutation;
mod sequence_macro;

pub use cursor::SequenceCursor;
pub use error::SequenceError;
pub use error::UnsupportedOperationError;
pub use immutable::ImmutableSequence;
pub use immutable::ImmutableSequenceIntoIterator;
pub use immutable::ImmutableSequenceIterator;
pub use interface::ReadOnlySequence;
pub use mutation::CursorMutation;
pub use mutation::ListMutation;
