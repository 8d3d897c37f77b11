//! The `sequence!` macro for literal construction.

/// Creates an [`ImmutableSequence`](crate::sequence::ImmutableSequence)
/// from a list of elements, the way `vec!` creates a `Vec`.
///
/// # Syntax
///
/// - `sequence![]` - An empty sequence
/// - `sequence![a, b, c]` - A sequence holding `a`, `b` and `c`
/// - `sequence![value; count]` - A sequence holding `count` clones of `value`
///
/// # Examples
///
/// ```
/// use immutable_sequence::sequence;
/// use immutable_sequence::sequence::ImmutableSequence;
///
/// let empty: ImmutableSequence<i32> = sequence![];
/// assert!(empty.is_empty());
///
/// let numbers = sequence![1, 2, 3];
/// assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
///
/// let zeros = sequence![0; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::sequence::ImmutableSequence::new()
    };

    ($element:expr; $count:expr) => {
        $crate::sequence::ImmutableSequence::from(::std::vec![$element; $count])
    };

    ($($element:expr),+ $(,)?) => {
        $crate::sequence::ImmutableSequence::from([$($element),+])
    };
}
