//! Iterators over [`PersistentVector`].
//!
//! Both iterators walk the visible keys `[start, count)` leaf by leaf. The
//! leaf for the current key is cached, so a full pass descends the trie
//! once per 32 elements instead of once per element.

use std::iter::FusedIterator;

use super::ReferenceCounter;
use super::node::{BITS_PER_LEVEL, MASK};
use super::vector::PersistentVector;

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// A leaf cached by block number (`key >> BITS_PER_LEVEL`).
type CachedLeaf<'a, T> = Option<(usize, &'a [T])>;

/// Looks up `key`, reusing `cache` when it already holds the right leaf.
fn cached_element<'a, T>(
    vector: &'a PersistentVector<T>,
    cache: &mut CachedLeaf<'a, T>,
    key: usize,
) -> Option<&'a T> {
    let block = key >> BITS_PER_LEVEL;
    let leaf = match *cache {
        Some((cached_block, leaf)) if cached_block == block => leaf,
        _ => {
            let leaf = vector.leaf_containing(key)?;
            *cache = Some((block, leaf));
            leaf
        }
    };
    leaf.get(key & MASK)
}

/// An iterator over references to elements of a [`PersistentVector`].
///
/// Yields the visible elements front to back, or back to front through
/// [`DoubleEndedIterator`].
///
/// # Examples
///
/// ```rust
/// use lambars_vector::persistent::PersistentVector;
///
/// let vector: PersistentVector<i32> = (1..=5).collect();
/// let reversed: Vec<&i32> = vector.iter().rev().collect();
/// assert_eq!(reversed, vec![&5, &4, &3, &2, &1]);
/// ```
pub struct PersistentVectorIterator<'a, T> {
    vector: &'a PersistentVector<T>,
    /// Next key to yield from the front
    front: usize,
    /// One past the next key to yield from the back
    back: usize,
    front_leaf: CachedLeaf<'a, T>,
    back_leaf: CachedLeaf<'a, T>,
}

impl<'a, T> PersistentVectorIterator<'a, T> {
    pub(crate) fn new(vector: &'a PersistentVector<T>) -> Self {
        let (front, back) = vector.key_range();
        Self {
            vector,
            front,
            back,
            front_leaf: None,
            back_leaf: None,
        }
    }
}

impl<'a, T> Iterator for PersistentVectorIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = cached_element(self.vector, &mut self.front_leaf, self.front)?;
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for PersistentVectorIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = cached_element(self.vector, &mut self.back_leaf, self.back - 1)?;
        self.back -= 1;
        Some(element)
    }
}

impl<T> ExactSizeIterator for PersistentVectorIterator<'_, T> {
    fn len(&self) -> usize {
        self.back.saturating_sub(self.front)
    }
}

impl<T> FusedIterator for PersistentVectorIterator<'_, T> {}

// =============================================================================
// Owning Iterator
// =============================================================================

type SharedLeaf<T> = Option<(usize, ReferenceCounter<[T]>)>;

fn cached_owned_element<T: Clone>(
    vector: &PersistentVector<T>,
    cache: &mut SharedLeaf<T>,
    key: usize,
) -> Option<T> {
    let block = key >> BITS_PER_LEVEL;
    if !matches!(cache, Some((cached_block, _)) if *cached_block == block) {
        *cache = Some((block, vector.shared_leaf_containing(key)?));
    }
    cache
        .as_ref()
        .and_then(|(_, leaf)| leaf.get(key & MASK))
        .cloned()
}

/// An owning iterator over elements of a [`PersistentVector`].
///
/// Leaves may be shared with other versions, so elements are cloned out of
/// them rather than moved.
pub struct PersistentVectorIntoIterator<T> {
    vector: PersistentVector<T>,
    front: usize,
    back: usize,
    front_leaf: SharedLeaf<T>,
    back_leaf: SharedLeaf<T>,
}

impl<T> PersistentVectorIntoIterator<T> {
    pub(crate) fn new(vector: PersistentVector<T>) -> Self {
        let (front, back) = vector.key_range();
        Self {
            vector,
            front,
            back,
            front_leaf: None,
            back_leaf: None,
        }
    }
}

impl<T: Clone> Iterator for PersistentVectorIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = cached_owned_element(&self.vector, &mut self.front_leaf, self.front)?;
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for PersistentVectorIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = cached_owned_element(&self.vector, &mut self.back_leaf, self.back - 1)?;
        self.back -= 1;
        Some(element)
    }
}

impl<T: Clone> ExactSizeIterator for PersistentVectorIntoIterator<T> {
    fn len(&self) -> usize {
        self.back.saturating_sub(self.front)
    }
}

impl<T: Clone> FusedIterator for PersistentVectorIntoIterator<T> {}
