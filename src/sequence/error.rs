//! Error types for sequence operations.
//!
//! Every fallible operation on an [`ImmutableSequence`] or a
//! [`SequenceCursor`] reports one of the variants of [`SequenceError`].
//! Errors are detected before any observable work is done, so a failed
//! call never leaves a partially updated value behind.
//!
//! [`ImmutableSequence`]: super::ImmutableSequence
//! [`SequenceCursor`]: super::SequenceCursor

/// Represents an attempt to mutate a type that only supports reads.
///
/// Returned by every [`ListMutation`](super::ListMutation) and
/// [`CursorMutation`](super::CursorMutation) method implemented by the
/// immutable types of this crate.
///
/// # Examples
///
/// ```rust
/// use immutable_sequence::sequence::UnsupportedOperationError;
///
/// let error = UnsupportedOperationError {
///     type_name: "ImmutableSequence",
///     operation: "add",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "ImmutableSequence::add: operation not supported on an immutable sequence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedOperationError {
    /// The name of the type that rejected the operation.
    pub type_name: &'static str,
    /// The name of the rejected operation.
    pub operation: &'static str,
}

impl std::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: operation not supported on an immutable sequence",
            self.type_name, self.operation
        )
    }
}

impl std::error::Error for UnsupportedOperationError {}

/// Represents errors that can occur when reading from or navigating a sequence.
///
/// # Examples
///
/// ```rust
/// use immutable_sequence::sequence::{ImmutableSequence, SequenceError};
///
/// let sequence = ImmutableSequence::from(vec![1, 2, 3]);
/// assert_eq!(
///     sequence.get(3),
///     Err(SequenceError::IndexOutOfBounds { index: 3, length: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// An index was not within `0..length`.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        length: usize,
    },
    /// A cursor was asked to move before the first element.
    BeforeFirst {
        /// The length of the sequence.
        length: usize,
    },
    /// A half-open range `from_index..to_index` was not within `0..=length`,
    /// or its start was past its end.
    InvalidRange {
        /// The inclusive start of the range.
        from_index: usize,
        /// The exclusive end of the range.
        to_index: usize,
        /// The length of the sequence.
        length: usize,
    },
    /// A seedless fold was applied to an empty sequence.
    EmptyFold,
    /// A mutating operation was called on an immutable type.
    Unsupported(UnsupportedOperationError),
}

impl SequenceError {
    /// Builds the error returned by every rejected mutation.
    #[must_use]
    pub const fn unsupported(type_name: &'static str, operation: &'static str) -> Self {
        Self::Unsupported(UnsupportedOperationError {
            type_name,
            operation,
        })
    }

    /// Returns `true` if this error reports a rejected mutation.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index {index} out of bounds for sequence of length {length}"
            ),
            Self::BeforeFirst { length } => write!(
                formatter,
                "cannot move before the first element of sequence of length {length}"
            ),
            Self::InvalidRange {
                from_index,
                to_index,
                length,
            } => write!(
                formatter,
                "range {from_index}..{to_index} is invalid for sequence of length {length}"
            ),
            Self::EmptyFold => write!(formatter, "cannot fold an empty sequence without a seed"),
            Self::Unsupported(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unsupported(error) => Some(error),
            _ => None,
        }
    }
}

impl From<UnsupportedOperationError> for SequenceError {
    fn from(error: UnsupportedOperationError) -> Self {
        Self::Unsupported(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_unsupported_operation_error_display() {
        let error = UnsupportedOperationError {
            type_name: "SequenceCursor",
            operation: "set",
        };
        assert_eq!(
            format!("{error}"),
            "SequenceCursor::set: operation not supported on an immutable sequence"
        );
    }

    #[rstest]
    #[case(
        SequenceError::IndexOutOfBounds { index: 7, length: 3 },
        "index 7 out of bounds for sequence of length 3"
    )]
    #[case(
        SequenceError::BeforeFirst { length: 4 },
        "cannot move before the first element of sequence of length 4"
    )]
    #[case(
        SequenceError::InvalidRange { from_index: 2, to_index: 1, length: 5 },
        "range 2..1 is invalid for sequence of length 5"
    )]
    #[case(SequenceError::EmptyFold, "cannot fold an empty sequence without a seed")]
    #[case(
        SequenceError::unsupported("ImmutableSequence", "clear"),
        "ImmutableSequence::clear: operation not supported on an immutable sequence"
    )]
    fn test_sequence_error_display(#[case] error: SequenceError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_unsupported_exposes_source() {
        let error = SequenceError::unsupported("ImmutableSequence", "add");
        assert!(error.is_unsupported());
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_other_errors_have_no_source() {
        let error = SequenceError::EmptyFold;
        assert!(!error.is_unsupported());
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_from_unsupported_operation_error() {
        let inner = UnsupportedOperationError {
            type_name: "ImmutableSequence",
            operation: "remove",
        };
        assert_eq!(SequenceError::from(inner), SequenceError::Unsupported(inner));
    }
}
