//! Trie nodes and index-to-path arithmetic.
//!
//! A node is either a branch of up to 32 shared children or a leaf of up to
//! 32 elements. Which of the two a traversal expects is decided by the level
//! it has reached: every node reached at level 0 is a leaf, every node above
//! it is a branch. Navigation code tracks the level explicitly and never
//! inspects a node to find out where it is.

use arrayvec::ArrayVec;
use static_assertions::const_assert;
use static_assertions::const_assert_eq;

use super::ReferenceCounter;

// =============================================================================
// Constants
// =============================================================================

/// Branching factor (2^5 = 32)
pub(crate) const BRANCHING_FACTOR: usize = 32;

/// Bits per level in the trie
pub(crate) const BITS_PER_LEVEL: usize = 5;

/// Bit mask for extracting index within a node
pub(crate) const MASK: usize = BRANCHING_FACTOR - 1;

/// Number of branch levels a `usize` key can ever need.
pub(crate) const MAX_BRANCH_LEVELS: usize = (usize::BITS as usize).div_ceil(BITS_PER_LEVEL);

const_assert_eq!(BRANCHING_FACTOR, 1 << BITS_PER_LEVEL);
const_assert!(MAX_BRANCH_LEVELS * BITS_PER_LEVEL >= usize::BITS as usize);

// =============================================================================
// Node Definition
// =============================================================================

/// Children of a branch node. Empty slots lie to the right of every filled one.
pub(crate) type Children<T> = [Option<ReferenceCounter<Node<T>>>; BRANCHING_FACTOR];

/// Internal node of the trie.
pub(crate) enum Node<T> {
    /// Interior node: reached at a level above 0
    Branch(Box<Children<T>>),
    /// Leaf node: reached at level 0, always full once inside the trie
    Leaf(ReferenceCounter<[T]>),
}

impl<T> Node<T> {
    /// Creates an empty branch node.
    pub(crate) fn empty_branch() -> Self {
        Self::Branch(Box::new(std::array::from_fn(|_| None)))
    }

    /// Wraps a tail buffer as a leaf without copying its elements.
    #[inline]
    pub(crate) const fn leaf(elements: ReferenceCounter<[T]>) -> Self {
        Self::Leaf(elements)
    }

    /// Returns the children of a node reached above the leaf level.
    pub(crate) fn children(&self) -> &Children<T> {
        match self {
            Self::Branch(children) => children,
            Self::Leaf(_) => unreachable!("leaf node found above the leaf level"),
        }
    }

    /// Returns the shared element buffer of a node reached at the leaf level.
    pub(crate) fn shared_elements(&self) -> &ReferenceCounter<[T]> {
        match self {
            Self::Leaf(elements) => elements,
            Self::Branch(_) => unreachable!("branch node found at the leaf level"),
        }
    }

    /// Returns the elements of a node reached at the leaf level.
    #[inline]
    pub(crate) fn elements(&self) -> &[T] {
        self.shared_elements()
    }

    /// Walks from this node, taken to sit at `shift`, down to the leaf holding `key`.
    ///
    /// Returns `None` if a branch on the way has no child for `key`.
    pub(crate) fn descend(&self, shift: usize, key: usize) -> Option<&Self> {
        let mut node = self;
        let mut level = shift;
        while level > 0 {
            node = node.children()[slot(key, level)].as_deref()?;
            level -= BITS_PER_LEVEL;
        }
        Some(node)
    }

    /// Returns a copy of this branch with `slot` pointing at `child`.
    ///
    /// Only the children array is copied; every other child stays shared.
    pub(crate) fn with_child(&self, slot: usize, child: ReferenceCounter<Self>) -> Self {
        let mut children = Box::new(self.children().clone());
        children[slot] = Some(child);
        Self::Branch(children)
    }

    /// Builds a chain of single-child branches `level` bits tall ending in `node`.
    ///
    /// `new_path(0, leaf)` is the leaf itself.
    pub(crate) fn new_path(level: usize, node: ReferenceCounter<Self>) -> ReferenceCounter<Self> {
        let mut current = node;
        let mut height = 0;
        while height < level {
            let mut children: Box<Children<T>> = Box::new(std::array::from_fn(|_| None));
            children[0] = Some(current);
            current = ReferenceCounter::new(Self::Branch(children));
            height += BITS_PER_LEVEL;
        }
        current
    }
}

impl<T: Clone> Node<T> {
    /// Returns a copy of this leaf with `slot` replaced by `element`.
    pub(crate) fn with_element(&self, slot: usize, element: T) -> Self {
        let mut elements = self.elements().to_vec();
        elements[slot] = element;
        Self::Leaf(ReferenceCounter::from(elements))
    }
}

// =============================================================================
// Index Arithmetic
// =============================================================================

/// Slot of `key` in the node sitting at `level`.
#[inline]
pub(crate) const fn slot(key: usize, level: usize) -> usize {
    (key >> level) & MASK
}

/// Key of the first element held by the tail of a vector with `count` elements.
#[inline]
pub(crate) const fn tail_offset(count: usize) -> usize {
    if count < BRANCHING_FACTOR {
        0
    } else {
        ((count - 1) >> BITS_PER_LEVEL) << BITS_PER_LEVEL
    }
}

/// Whether grafting one more full leaf into a trie rooted at `shift` needs a
/// new root level. `count` is the element count including the full tail.
#[inline]
pub(crate) const fn root_overflow(count: usize, shift: usize) -> bool {
    (count >> BITS_PER_LEVEL) > (1 << shift)
}

/// The route from the root to one element: a slot per branch level, then
/// the slot inside the leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TriePath {
    /// Branch slots, root first
    pub(crate) branches: ArrayVec<usize, MAX_BRANCH_LEVELS>,
    /// Slot inside the leaf
    pub(crate) leaf: usize,
}

impl TriePath {
    /// Computes the path to `key` in a trie whose root sits at `shift`.
    pub(crate) fn new(key: usize, shift: usize) -> Self {
        let mut branches = ArrayVec::new();
        let mut level = shift;
        while level > 0 {
            branches.push(slot(key, level));
            level -= BITS_PER_LEVEL;
        }
        Self {
            branches,
            leaf: slot(key, 0),
        }
    }
}
