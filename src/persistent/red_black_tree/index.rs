//! Snapshot-bound indices for bidirectional ordered iteration.
//!
//! A [`TreeIndex`] names a position by the element stored there, or the end
//! position when it holds nothing. It carries no reference to a tree: every
//! operation takes the snapshot alongside the index and validates the index
//! against it. An index produced from one snapshot is not meaningful for
//! another one holding different elements.

use super::RedBlackTree;
use std::cmp::Ordering;
use std::fmt;
use std::ops;

// =============================================================================
// TreeIndex Definition
// =============================================================================

/// A position in a [`RedBlackTree`].
///
/// The end index compares greater than every index holding an element, so
/// indices can delimit ranges: `start_index() <= index < end_index()`.
///
/// # Examples
///
/// ```rust
/// use redblack::persistent::{RedBlackTree, TreeIndex};
///
/// let tree: RedBlackTree<i32> = [2, 1].into_iter().collect();
/// let start = tree.start_index();
///
/// assert_eq!(start.element(), Some(&1));
/// assert!(start < tree.end_index());
/// assert!(TreeIndex::<i32>::end().is_end());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreeIndex<T> {
    element: Option<T>,
}

impl<T> TreeIndex<T> {
    /// Returns the end index.
    #[inline]
    #[must_use]
    pub const fn end() -> Self {
        Self { element: None }
    }

    const fn at(element: T) -> Self {
        Self {
            element: Some(element),
        }
    }

    /// Returns `true` if this is the end index.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.element.is_none()
    }

    /// Returns the element this index refers to, or `None` for the end index.
    #[inline]
    #[must_use]
    pub const fn element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    /// Consumes the index, returning its element.
    #[inline]
    #[must_use]
    pub fn into_element(self) -> Option<T> {
        self.element
    }
}

impl<T: Ord> Ord for TreeIndex<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.element, &other.element) {
            (Some(element), Some(other_element)) => element.cmp(other_element),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: Ord> PartialOrd for TreeIndex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// IndexError Definition
// =============================================================================

/// Represents a misuse of a [`TreeIndex`] against a particular snapshot.
///
/// The panicking index operations panic with this error's message; the
/// `try_` variants return it instead.
///
/// # Examples
///
/// ```rust
/// use redblack::persistent::{IndexError, RedBlackTree};
///
/// let tree: RedBlackTree<i32> = (1..=3).collect();
/// assert_eq!(
///     tree.try_index_after(&tree.end_index()),
///     Err(IndexError::EndIndex)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The end index was advanced or dereferenced.
    EndIndex,
    /// The start index was moved backwards.
    StartIndex,
    /// The index holds an element that is not stored in this tree.
    NotPresent,
}

impl fmt::Display for IndexError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndIndex => write!(formatter, "cannot advance or dereference the end index"),
            Self::StartIndex => write!(formatter, "cannot move before the start index"),
            Self::NotPresent => {
                write!(formatter, "index does not refer to an element of this tree")
            }
        }
    }
}

impl std::error::Error for IndexError {}

// =============================================================================
// Index Operations
// =============================================================================

impl<T: Ord> RedBlackTree<T> {
    /// Returns the element an index refers to.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EndIndex`] for the end index and
    /// [`IndexError::NotPresent`] when the element is not in this tree.
    pub fn try_element_at(&self, index: &TreeIndex<T>) -> Result<&T, IndexError> {
        let element = index.element().ok_or(IndexError::EndIndex)?;
        self.get(element).ok_or(IndexError::NotPresent)
    }

    /// Returns the element an index refers to.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the end index or refers to an element that is not
    /// stored in this tree.
    #[must_use]
    pub fn element_at(&self, index: &TreeIndex<T>) -> &T {
        self.try_element_at(index)
            .unwrap_or_else(|error| panic!("{error}"))
    }
}

impl<T: Clone + Ord> RedBlackTree<T> {
    /// Returns the index of the smallest element, or the end index when the
    /// tree is empty.
    #[must_use]
    pub fn start_index(&self) -> TreeIndex<T> {
        self.min()
            .cloned()
            .map_or_else(TreeIndex::end, TreeIndex::at)
    }

    /// Returns the end index.
    #[inline]
    #[must_use]
    pub const fn end_index(&self) -> TreeIndex<T> {
        TreeIndex::end()
    }

    /// Returns the index following `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EndIndex`] for the end index and
    /// [`IndexError::NotPresent`] when the element is not in this tree.
    pub fn try_index_after(&self, index: &TreeIndex<T>) -> Result<TreeIndex<T>, IndexError> {
        let element = index.element().ok_or(IndexError::EndIndex)?;
        match self.following(element) {
            (true, next) => Ok(next.cloned().map_or_else(TreeIndex::end, TreeIndex::at)),
            (false, _) => Err(IndexError::NotPresent),
        }
    }

    /// Returns the index following `index`; advancing past the largest
    /// element yields the end index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the end index or refers to an element that is not
    /// stored in this tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [1, 2].into_iter().collect();
    /// let second = tree.index_after(&tree.start_index());
    /// assert_eq!(tree[&second], 2);
    /// assert_eq!(tree.index_after(&second), tree.end_index());
    /// ```
    #[must_use]
    pub fn index_after(&self, index: &TreeIndex<T>) -> TreeIndex<T> {
        self.try_index_after(index)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the index preceding `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::StartIndex`] when there is nothing before
    /// `index` (including the end index of an empty tree) and
    /// [`IndexError::NotPresent`] when the element is not in this tree.
    pub fn try_index_before(&self, index: &TreeIndex<T>) -> Result<TreeIndex<T>, IndexError> {
        let Some(element) = index.element() else {
            return self
                .max()
                .cloned()
                .map(TreeIndex::at)
                .ok_or(IndexError::StartIndex);
        };

        match self.preceding(element) {
            (true, Some(previous)) => Ok(TreeIndex::at(previous.clone())),
            (true, None) => Err(IndexError::StartIndex),
            (false, _) => Err(IndexError::NotPresent),
        }
    }

    /// Returns the index preceding `index`; stepping back from the end index
    /// yields the index of the largest element.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the start index or refers to an element that is
    /// not stored in this tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [1, 2].into_iter().collect();
    /// let last = tree.index_before(&tree.end_index());
    /// assert_eq!(tree[&last], 2);
    /// assert_eq!(tree.index_before(&last), tree.start_index());
    /// ```
    #[must_use]
    pub fn index_before(&self, index: &TreeIndex<T>) -> TreeIndex<T> {
        self.try_index_before(index)
            .unwrap_or_else(|error| panic!("{error}"))
    }
}

impl<T: Ord> ops::Index<&TreeIndex<T>> for RedBlackTree<T> {
    type Output = T;

    fn index(&self, index: &TreeIndex<T>) -> &T {
        self.element_at(index)
    }
}
