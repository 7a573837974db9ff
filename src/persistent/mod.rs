//! Persistent (immutable) vector.
//!
//! This module provides [`PersistentVector`], a 32-way bit-partitioned trie
//! with a tail buffer. Operations that change the logical content return a
//! new vector and leave the original untouched; both versions share every
//! node the operation did not have to copy.
//!
//! # Structural Sharing
//!
//! Appending copies at most one root-to-leaf path (usually only the tail),
//! and updating copies exactly the path to the changed element. Everything
//! else is shared by reference counting.
//!
//! # Examples
//!
//! ```rust
//! use lambars_vector::persistent::PersistentVector;
//!
//! let vector: PersistentVector<i32> = (0..100).collect();
//! assert_eq!(vector.get(50), Some(&50));
//!
//! // Structural sharing: the original vector is preserved
//! let updated = vector.set(50, 999);
//! assert_eq!(vector.get(50), Some(&50));     // Original unchanged
//! assert_eq!(updated.get(50), Some(&999));   // New version
//!
//! // Negative indices count from the end
//! assert_eq!(vector.get(-1), Some(&99));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets vectors cross thread boundaries and be read concurrently.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod index;
mod iter;
mod node;
mod vector;

pub use error::IndexOutOfBoundsError;
pub use index::VectorIndex;
pub use iter::PersistentVectorIntoIterator;
pub use iter::PersistentVectorIterator;
pub use vector::PersistentVector;

// =============================================================================
// Tests
// =============================================================================
