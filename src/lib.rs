//! # immutable-sequence
//!
//! An immutable, fixed-content sequence type for Rust, with a read-only
//! bidirectional cursor and functional combinators.
//!
//! ## Overview
//!
//! - **`ImmutableSequence`**: ordered collection fixed at construction time,
//!   with checked indexed access, search, range copies and defensive export
//! - **Functional helpers**: `reverse`, `filter`, `map`, `fold_left`
//! - **`SequenceCursor`**: a cursor that moves forwards and backwards
//! - **`ReadOnlySequence`**: the read-only interface, shared with `Vec` and slices
//! - **`ListMutation`**: a mutable-list interface the immutable types reject
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for `ImmutableSequence`
//! - `rayon`: parallel iteration
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use immutable_sequence::prelude::*;
//!
//! let numbers = sequence![97, 44, 67, 3, 22, 90, 1, 77, 98, 1078, 6, 64, 6, 79, 42];
//! let even = numbers.filter(|value| value % 2 == 0);
//! assert_eq!(even.to_vec(), vec![44, 22, 90, 98, 1078, 6, 64, 6, 42]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and the `sequence!` macro.
///
/// # Usage
///
/// ```rust
/// use immutable_sequence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence;
    pub use crate::sequence::*;
}

pub mod sequence;
