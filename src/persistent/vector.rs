//! Persistent (immutable) vector based on a bit-partitioned trie.
//!
//! This module provides [`PersistentVector`], an immutable dynamic array
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentVector` is a 32-way branching trie inspired by Clojure's
//! `PersistentVector`. It provides:
//!
//! - O(log32 N) random access (effectively O(1) for practical sizes)
//! - amortized O(1) `push_back` through the tail buffer
//! - O(log32 N) update by path copying
//! - O(1) `drop_first` (a view offset, the trie is not restructured)
//! - O(1) len and `is_empty`
//!
//! All operations return new vectors without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Internal Structure
//!
//! The vector consists of:
//! - A root node (32-way branching trie) holding every full leaf
//! - A tail buffer (up to 32 elements) holding the most recent appends
//! - A start offset hiding a dropped prefix
//!
//! # Examples
//!
//! ```rust
//! use lambars_vector::persistent::PersistentVector;
//!
//! let vector = PersistentVector::new()
//!     .push_back(1)
//!     .push_back(2)
//!     .push_back(3);
//!
//! assert_eq!(vector.get(0), Some(&1));
//! assert_eq!(vector.get(-1), Some(&3));
//!
//! // Structural sharing: the original vector is preserved
//! let extended = vector.push_back(4);
//! assert_eq!(vector.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4);   // New vector
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::ControlFlow;

use arrayvec::ArrayVec;

use super::ReferenceCounter;
use super::error::IndexOutOfBoundsError;
use super::index::VectorIndex;
use super::iter::{PersistentVectorIntoIterator, PersistentVectorIterator};
use super::node::{
    BITS_PER_LEVEL, BRANCHING_FACTOR, MASK, MAX_BRANCH_LEVELS, Node, TriePath, root_overflow,
    slot, tail_offset,
};

// =============================================================================
// PersistentVector Definition
// =============================================================================

/// A persistent (immutable) vector based on a bit-partitioned trie.
///
/// `PersistentVector` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns.
///
/// Positions are given as any primitive integer (see [`VectorIndex`]).
/// Negative positions count from the end: `-1` is the last element.
///
/// # Time Complexity
///
/// | Operation    | Complexity                    |
/// |--------------|-------------------------------|
/// | `new`        | O(1)                          |
/// | `get`        | O(log32 N)                    |
/// | `push_back`  | O(log32 N) amortized O(1)     |
/// | `set`        | O(log32 N)                    |
/// | `drop_first` | O(1)                          |
/// | `take`       | O(min(N, count))              |
/// | `len`        | O(1)                          |
/// | `iter`       | O(1) to create, O(N) to iterate |
///
/// # Examples
///
/// ```rust
/// use lambars_vector::persistent::PersistentVector;
///
/// let vector: PersistentVector<i32> = (0..100).collect();
/// assert_eq!(vector.len(), 100);
/// assert_eq!(vector.get(50), Some(&50));
/// assert_eq!(vector.get(-100), Some(&0));
/// assert_eq!(vector.get(-101), None);
/// ```
pub struct PersistentVector<T> {
    /// Number of elements stored, including the dropped prefix
    count: usize,
    /// Shift amount for index calculation: (depth - 1) * `BITS_PER_LEVEL`
    shift: usize,
    /// Root node of the trie
    root: ReferenceCounter<Node<T>>,
    /// Tail buffer for efficient append (up to 32 elements)
    tail: ReferenceCounter<[T]>,
    /// Number of leading elements hidden by `drop_first`
    start: usize,
}

impl<T> PersistentVector<T> {
    /// Creates a new empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = PersistentVector::new();
    /// assert!(vector.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            shift: BITS_PER_LEVEL,
            root: ReferenceCounter::new(Node::empty_branch()),
            tail: ReferenceCounter::from(Vec::<T>::new()),
            start: 0,
        }
    }

    /// Returns the number of visible elements in the vector.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.len(), 5);
    /// assert_eq!(vector.drop_first(2).len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count - self.start
    }

    /// Returns `true` if the vector contains no visible elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let empty: PersistentVector<i32> = PersistentVector::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = empty.push_back(1);
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the trie keys `[start, count)` covering the visible elements.
    #[inline]
    pub(crate) const fn key_range(&self) -> (usize, usize) {
        (self.start, self.count)
    }

    /// Translates a caller's position into a trie key.
    #[inline]
    fn key_for<I: VectorIndex>(&self, index: I) -> Option<usize> {
        index
            .resolve(self.len())
            .map(|position| position + self.start)
    }

    /// Returns the leaf (or tail) holding `key`.
    pub(crate) fn leaf_containing(&self, key: usize) -> Option<&[T]> {
        if key >= tail_offset(self.count) {
            Some(&*self.tail)
        } else {
            self.root
                .descend(self.shift, key)
                .map(|leaf| leaf.elements())
        }
    }

    /// Returns a shared handle on the leaf (or tail) holding `key`.
    pub(crate) fn shared_leaf_containing(&self, key: usize) -> Option<ReferenceCounter<[T]>> {
        if key >= tail_offset(self.count) {
            Some(self.tail.clone())
        } else {
            self.root
                .descend(self.shift, key)
                .map(|leaf| leaf.shared_elements().clone())
        }
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Negative indices count from the end. Returns `None` if the index is
    /// out of bounds in either direction.
    ///
    /// # Arguments
    ///
    /// * `index` - The position of the element, from the front if
    ///   non-negative, from the back if negative
    ///
    /// # Complexity
    ///
    /// O(log32 N), O(1) for elements in the tail
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.get(0), Some(&1));
    /// assert_eq!(vector.get(-1), Some(&5));
    /// assert_eq!(vector.get(-3), Some(&3));
    /// assert_eq!(vector.get(55), None);
    /// assert_eq!(vector.get(-6), None);
    /// ```
    #[must_use]
    pub fn get<I: VectorIndex>(&self, index: I) -> Option<&T> {
        let key = self.key_for(index)?;
        let tail_offset = tail_offset(self.count);

        if key >= tail_offset {
            self.tail.get(key - tail_offset)
        } else {
            self.root
                .descend(self.shift, key)?
                .elements()
                .get(key & MASK)
        }
    }

    /// Returns a reference to the first element.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.first(), Some(&1));
    ///
    /// let empty: PersistentVector<i32> = PersistentVector::new();
    /// assert_eq!(empty.first(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0_usize)
    }

    /// Returns a reference to the last element.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Complexity
    ///
    /// O(1) - the last element is always in the tail
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.last(), Some(&5));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.tail.last()
        }
    }

    /// Returns an iterator over references to the visible elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// let collected: Vec<&i32> = vector.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3, &4, &5]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentVectorIterator<'_, T> {
        PersistentVectorIterator::new(self)
    }

    /// Visits the elements front to back until the visitor asks to stop.
    ///
    /// The visitor returns `Ok(ControlFlow::Continue(()))` to move on,
    /// `Ok(ControlFlow::Break(()))` to stop early, or `Err(error)` to abort.
    /// Stopping early is a normal completion and yields `Ok(())`; an error
    /// ends the visit at once and is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visitor`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=6).collect();
    /// let mut seen = Vec::new();
    /// let result: Result<(), String> = vector.visit(|element| {
    ///     seen.push(*element);
    ///     Ok(if seen.len() == 4 {
    ///         ControlFlow::Break(())
    ///     } else {
    ///         ControlFlow::Continue(())
    ///     })
    /// });
    ///
    /// assert_eq!(result, Ok(()));
    /// assert_eq!(seen, vec![1, 2, 3, 4]);
    /// ```
    pub fn visit<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<ControlFlow<()>, E>,
    {
        for element in self {
            if visitor(element)?.is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Compares two vectors element by element with a custom equality.
    ///
    /// Vectors of different lengths are never equal; the predicate is only
    /// consulted when the lengths match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let words: PersistentVector<&str> = ["a", "bb"].into_iter().collect();
    /// let lengths: PersistentVector<usize> = [1, 2].into_iter().collect();
    /// assert!(words.equals_by(&lengths, |word, length| word.len() == *length));
    /// ```
    pub fn equals_by<U, F>(&self, other: &PersistentVector<U>, mut equal: F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(left, right)| equal(left, right))
    }

    /// Applies a function to every element, collecting the results into a new vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=3).collect();
    /// let squared = vector.map(|element| element * element);
    /// assert_eq!(squared.to_vec(), vec![1, 4, 9]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> PersistentVector<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        self.iter()
            .fold(PersistentVector::new(), |result, element| {
                result.push_back(function(element))
            })
    }

    /// Returns a new vector with the first `count` visible elements hidden.
    ///
    /// The trie and tail are shared untouched; only the view offset moves.
    /// Dropping every element yields an empty vector.
    ///
    /// # Arguments
    ///
    /// * `count` - The number of elements to skip from the front
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=4).collect();
    /// let dropped = vector.drop_first(2);
    /// assert_eq!(dropped.to_vec(), vec![3, 4]);
    ///
    /// assert!(vector.drop_first(10).is_empty());
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        match self.start.checked_add(count) {
            Some(start) if start < self.count => Self {
                count: self.count,
                shift: self.shift,
                root: self.root.clone(),
                tail: self.tail.clone(),
                start,
            },
            _ => Self::new(),
        }
    }

    /// Returns every element except the first one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=3).collect();
    /// assert_eq!(vector.rest().to_vec(), vec![2, 3]);
    /// assert!(PersistentVector::new().push_back(1).rest().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn rest(&self) -> Self {
        self.drop_first(1)
    }
}

impl<T: Clone> PersistentVector<T> {
    /// Builds a vector by appending each element in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::of([1, 2, 3]);
    /// assert_eq!(vector.len(), 3);
    /// assert_eq!(vector.get(2), Some(&3));
    /// ```
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .fold(Self::new(), |vector, element| vector.push_back(element))
    }

    /// Appends an element to the back of the vector.
    ///
    /// Returns a new vector with the element at the end.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to append
    ///
    /// # Complexity
    ///
    /// O(log32 N) amortized O(1) due to tail optimization
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::new()
    ///     .push_back(1)
    ///     .push_back(2)
    ///     .push_back(3);
    ///
    /// assert_eq!(vector.len(), 3);
    /// assert_eq!(vector.get(2), Some(&3));
    /// ```
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        if self.tail.len() < BRANCHING_FACTOR {
            // Tail has space, just add to tail
            let mut new_tail = Vec::with_capacity(self.tail.len() + 1);
            new_tail.extend_from_slice(&self.tail);
            new_tail.push(element);

            Self {
                count: self.count + 1,
                shift: self.shift,
                root: self.root.clone(),
                tail: ReferenceCounter::from(new_tail),
                start: self.start,
            }
        } else {
            // Tail is full, push tail to root and create new tail
            self.push_tail_to_root(element)
        }
    }

    /// Grafts the full tail into the trie and starts a new tail with `element`.
    fn push_tail_to_root(&self, element: T) -> Self {
        // The tail buffer becomes the leaf as is; only its reference count changes
        let tail_leaf = ReferenceCounter::new(Node::leaf(self.tail.clone()));

        let (root, shift) = if root_overflow(self.count, self.shift) {
            let shift = self.shift + BITS_PER_LEVEL;
            log::trace!(
                "growing trie root at count {}: shift {} -> {}",
                self.count,
                self.shift,
                shift
            );
            let root = Node::empty_branch()
                .with_child(0, self.root.clone())
                .with_child(1, Node::new_path(self.shift, tail_leaf));
            (root, shift)
        } else {
            log::trace!(
                "flushing tail into trie at key {}",
                tail_offset(self.count)
            );
            let root = Self::push_tail_into_node(&self.root, self.shift, self.count - 1, tail_leaf);
            (root, self.shift)
        };

        Self {
            count: self.count + 1,
            shift,
            root: ReferenceCounter::new(root),
            tail: ReferenceCounter::from(vec![element]),
            start: self.start,
        }
    }

    /// Copies the rightmost path of `node` and hangs `tail_leaf` at its end.
    ///
    /// `key` is any key of the leaf being grafted; where the path does not
    /// exist yet a fresh one is built.
    fn push_tail_into_node(
        node: &Node<T>,
        level: usize,
        key: usize,
        tail_leaf: ReferenceCounter<Node<T>>,
    ) -> Node<T> {
        let subindex = slot(key, level);

        let child = if level == BITS_PER_LEVEL {
            // We're at the bottom branch level, insert the tail leaf
            tail_leaf
        } else {
            match node.children()[subindex].as_deref() {
                Some(existing) => ReferenceCounter::new(Self::push_tail_into_node(
                    existing,
                    level - BITS_PER_LEVEL,
                    key,
                    tail_leaf,
                )),
                None => Node::new_path(level - BITS_PER_LEVEL, tail_leaf),
            }
        };

        node.with_child(subindex, child)
    }

    /// Returns a new vector with the element at `index` replaced.
    ///
    /// Negative indices count from the end.
    ///
    /// # Arguments
    ///
    /// * `index` - The position to replace
    /// * `element` - The new element
    ///
    /// # Complexity
    ///
    /// O(log32 N)
    ///
    /// # Panics
    ///
    /// Panics if `index` does not address an element. Updating a position
    /// the vector does not have is a caller bug; use [`try_set`](Self::try_set)
    /// to validate untrusted positions instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// let updated = vector.set(0, -1).set(-1, -5);
    ///
    /// assert_eq!(updated.to_vec(), vec![-1, 2, 3, 4, -5]);
    /// assert_eq!(vector.get(0), Some(&1)); // Original unchanged
    /// ```
    #[must_use]
    pub fn set<I: VectorIndex>(&self, index: I, element: T) -> Self {
        match self.try_set(index, element) {
            Ok(updated) => updated,
            Err(error) => {
                log::error!("rejected update: {error}");
                panic!("{error}")
            }
        }
    }

    /// Returns a new vector with the element at `index` replaced, or an error
    /// if `index` does not address an element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] if `index` resolves outside
    /// `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::{IndexOutOfBoundsError, PersistentVector};
    ///
    /// let vector: PersistentVector<i32> = (1..=3).collect();
    /// assert_eq!(vector.try_set(1, 20).unwrap().get(1), Some(&20));
    /// assert_eq!(
    ///     vector.try_set(3, 40).unwrap_err(),
    ///     IndexOutOfBoundsError { index: 3, length: 3 }
    /// );
    /// ```
    pub fn try_set<I: VectorIndex>(
        &self,
        index: I,
        element: T,
    ) -> Result<Self, IndexOutOfBoundsError> {
        let key = self.key_for(index).ok_or_else(|| IndexOutOfBoundsError {
            index: index.to_i128(),
            length: self.len(),
        })?;
        let tail_offset = tail_offset(self.count);

        if key >= tail_offset {
            // Element is in the tail
            let mut new_tail = self.tail.to_vec();
            new_tail[key - tail_offset] = element;

            Ok(Self {
                count: self.count,
                shift: self.shift,
                root: self.root.clone(),
                tail: ReferenceCounter::from(new_tail),
                start: self.start,
            })
        } else {
            // Element is in the root
            Ok(Self {
                count: self.count,
                shift: self.shift,
                root: self.set_in_root(key, element),
                tail: self.tail.clone(),
                start: self.start,
            })
        }
    }

    /// Copies the root-to-leaf path of `key`, replacing the element at its end.
    ///
    /// Every node off the path is shared with `self`.
    fn set_in_root(&self, key: usize, element: T) -> ReferenceCounter<Node<T>> {
        let path = TriePath::new(key, self.shift);

        let mut spine: ArrayVec<&Node<T>, MAX_BRANCH_LEVELS> = ArrayVec::new();
        let mut node = self.root.as_ref();
        for &subindex in &path.branches {
            spine.push(node);
            node = match node.children()[subindex].as_deref() {
                Some(child) => child,
                None => unreachable!("no leaf for key {key} below the tail offset"),
            };
        }

        let mut replacement = ReferenceCounter::new(node.with_element(path.leaf, element));
        for (parent, &subindex) in spine.iter().zip(&path.branches).rev() {
            replacement = ReferenceCounter::new(parent.with_child(subindex, replacement));
        }
        replacement
    }

    /// Returns a new vector containing the first `count` visible elements.
    ///
    /// If `count` is at least the vector's length, returns the vector itself.
    ///
    /// # Arguments
    ///
    /// * `count` - The number of elements to take from the front
    ///
    /// # Complexity
    ///
    /// O(min(n, count))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=3).collect();
    /// assert_eq!(vector.take(2).to_vec(), vec![1, 2]);
    /// assert_eq!(vector.take(50), vector);
    /// assert!(vector.take(0).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.len() {
            return self.clone();
        }
        self.iter().take(count).cloned().collect()
    }

    /// Returns a new vector with the elements that satisfy the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=3).collect();
    /// let odd = vector.filter(|element| element % 2 == 1);
    /// assert_eq!(odd.to_vec(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|&element| predicate(element))
            .cloned()
            .collect()
    }

    /// Copies the visible elements into a standard `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_vector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=3).collect();
    /// assert_eq!(vector.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Literal Macro
// =============================================================================

/// Builds a [`PersistentVector`] from a list of elements, in order.
///
/// # Examples
///
/// ```rust
/// use lambars_vector::pvector;
///
/// let vector = pvector![1, 2, 3];
/// assert_eq!(vector.len(), 3);
/// assert_eq!(vector.get(-1), Some(&3));
///
/// let empty: lambars_vector::persistent::PersistentVector<i32> = pvector![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! pvector {
    () => {
        $crate::persistent::PersistentVector::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::persistent::PersistentVector::new()$(.push_back($element))+
    };
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentVector<T> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            shift: self.shift,
            root: self.root.clone(),
            tail: self.tail.clone(),
            start: self.start,
        }
    }
}

impl<T> Default for PersistentVector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for PersistentVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Clone> IntoIterator for PersistentVector<T> {
    type Item = T;
    type IntoIter = PersistentVectorIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentVectorIntoIterator::new(self)
    }
}

impl<'a, T> IntoIterator for &'a PersistentVector<T> {
    type Item = &'a T;
    type IntoIter = PersistentVectorIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_by(other, PartialEq::eq)
    }
}

impl<T: Eq> Eq for PersistentVector<T> {}

/// Computes a hash value for this vector.
///
/// The hash covers the visible length followed by each visible element in
/// order, so equal vectors hash equally regardless of any dropped prefix
/// they carry internally.
///
/// # Examples
///
/// ```rust
/// use lambars_vector::persistent::PersistentVector;
/// use std::collections::HashMap;
///
/// let mut map: HashMap<PersistentVector<i32>, &str> = HashMap::new();
/// let key: PersistentVector<i32> = (1..=3).collect();
/// map.insert(key.clone(), "value");
/// assert_eq!(map.get(&key), Some(&"value"));
/// ```
impl<T: Hash> Hash for PersistentVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentVector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentVector<T> {
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

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentVector<T> {
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
struct PersistentVectorVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> PersistentVectorVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentVectorVisitor<T>
where
    T: serde::Deserialize<'de> + Clone,
{
    type Value = PersistentVector<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut vector = PersistentVector::new();
        while let Some(element) = seq.next_element()? {
            vector = vector.push_back(element);
        }
        Ok(vector)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentVector<T>
where
    T: serde::Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentVectorVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Thread Safety Tests (arc feature only)
// =============================================================================
