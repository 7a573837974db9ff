//! # lambars-vector
//!
//! A persistent (immutable) vector for Rust, built as a bit-partitioned trie
//! with a tail buffer.
//!
//! ## Overview
//!
//! Every operation that changes the logical content of a vector returns a new
//! vector. The original stays valid and unchanged, and the two versions share
//! all internal nodes that the operation did not touch:
//!
//! - **Append**: amortized O(1) through the tail buffer
//! - **Indexed read**: O(log32 N), negative indices count from the end
//! - **Indexed update**: O(log32 N) path copying
//! - **Prefix drop**: O(1) view offset
//!
//! ## Feature Flags
//!
//! - `arc` (default): share nodes with `Arc` so vectors are `Send + Sync`
//! - `serde`: serialize and deserialize vectors as sequences
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_vector::prelude::*;
//!
//! let vector = pvector![1, 2, 3];
//! let updated = vector.set(-1, 30);
//!
//! assert_eq!(vector.get(-1), Some(&3));
//! assert_eq!(updated.get(-1), Some(&30));
//! assert_eq!(format!("{updated}"), "[1, 2, 30]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the vector, its index trait, its error type and the
/// [`pvector!`] macro.
///
/// # Usage
///
/// ```rust
/// use lambars_vector::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
    pub use crate::pvector;
}

pub mod persistent;
