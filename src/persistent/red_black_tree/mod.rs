//! Persistent (immutable) ordered set based on a Red-Black Tree.
//!
//! This module provides [`RedBlackTree`], an immutable ordered set
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! - O(log N) contains
//! - O(log N) insert
//! - O(log N) min/max
//! - O(log N) following/preceding
//! - O(N) count (subtree sizes are not stored)
//!
//! All operations return new trees without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use redblack::persistent::RedBlackTree;
//!
//! let tree = RedBlackTree::new()
//!     .inserting(3)
//!     .inserting(1)
//!     .inserting(2);
//!
//! // Elements are always in sorted order
//! let elements: Vec<&i32> = tree.iter().collect();
//! assert_eq!(elements, vec![&1, &2, &3]);
//!
//! // Neighbour queries
//! assert_eq!(tree.following(&1), (true, Some(&2)));
//! assert_eq!(tree.preceding(&5), (false, Some(&3)));
//! ```
//!
//! # Internal Structure
//!
//! The Red-Black Tree maintains the following invariants:
//! 1. No red node has a red child
//! 2. Every path from root to an empty leaf has the same number of black nodes
//! 3. The root is black
//! 4. In-order traversal is strictly ascending
//!
//! These invariants ensure the tree height is O(log N). Insertion restores
//! them with a single local rewrite (see `balance`), applied bottom-up.

mod balance;
mod diagram;
mod index;
mod iter;
mod navigate;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;
mod validate;

use crate::persistent::ReferenceCounter;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use balance::balance;
use node::{Link, Node, link};

pub use index::{IndexError, TreeIndex};
pub use iter::RedBlackTreeIterator;
pub use node::Color;
pub use validate::InvariantViolation;

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// A persistent (immutable) ordered set based on a Red-Black Tree.
///
/// `RedBlackTree` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns.
/// Cloning a tree is O(1): it only bumps the root's reference count.
///
/// Elements must implement `Ord` for ordering. Each element is stored at most
/// once; inserting an element that is already present leaves the tree as is
/// and hands back the stored element.
///
/// # Time Complexity
///
/// | Operation                 | Complexity |
/// |---------------------------|------------|
/// | `new`                     | O(1)       |
/// | `contains`/`get`          | O(log N)   |
/// | `insert`                  | O(log N)   |
/// | `min`/`max`               | O(log N)   |
/// | `following`/`preceding`   | O(log N)   |
/// | `index_after`/`index_before` | O(log N) |
/// | `count`                   | O(N)       |
/// | `is_empty`                | O(1)       |
///
/// # Examples
///
/// ```rust
/// use redblack::persistent::RedBlackTree;
///
/// let tree = RedBlackTree::singleton(42);
/// assert!(tree.contains(&42));
///
/// // Duplicates are reported, not stored twice
/// let (same, inserted, member) = tree.insert(42);
/// assert!(!inserted);
/// assert_eq!(member, 42);
/// assert_eq!(same.count(), 1);
/// ```
pub struct RedBlackTree<T> {
    /// Root node of the tree
    root: Link<T>,
}

// Rc-backed trees stay on one thread; the `arc` feature lifts that.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(RedBlackTree<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(RedBlackTree<String>: Send, Sync);

impl<T> RedBlackTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the tree.
    ///
    /// Subtree sizes are not stored, so every call walks the whole tree.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=5).collect();
    /// assert_eq!(tree.count(), 5);
    /// ```
    #[must_use]
    pub fn count(&self) -> usize {
        Self::count_from_node(self.root.as_deref())
    }

    /// Recursive helper for count.
    fn count_from_node(node: Option<&Node<T>>) -> usize {
        node.map_or(0, |node_ref| {
            1 + Self::count_from_node(node_ref.left.as_deref())
                + Self::count_from_node(node_ref.right.as_deref())
        })
    }

    /// Returns the smallest element.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&1));
    ///
    /// let empty: RedBlackTree<i32> = RedBlackTree::new();
    /// assert_eq!(empty.min(), None);
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        Self::min_from_node(self.root.as_deref())
    }

    /// Recursive helper for min.
    fn min_from_node(node: Option<&Node<T>>) -> Option<&T> {
        node.and_then(|node_ref| {
            node_ref.left.as_deref().map_or_else(
                || Some(&node_ref.value),
                |left| Self::min_from_node(Some(left)),
            )
        })
    }

    /// Returns the largest element.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        Self::max_from_node(self.root.as_deref())
    }

    /// Recursive helper for max.
    fn max_from_node(node: Option<&Node<T>>) -> Option<&T> {
        node.and_then(|node_ref| {
            node_ref.right.as_deref().map_or_else(
                || Some(&node_ref.value),
                |right| Self::max_from_node(Some(right)),
            )
        })
    }

    /// Calls `visitor` on every element in ascending order.
    ///
    /// The walk depends only on this snapshot, so it can be repeated freely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [2, 3, 1].into_iter().collect();
    /// let mut visited = Vec::new();
    /// tree.for_each(|element| visited.push(*element));
    /// assert_eq!(visited, vec![1, 2, 3]);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        Self::for_each_in_node(self.root.as_deref(), &mut visitor);
    }

    /// Recursive helper for `for_each` (left, self, right).
    fn for_each_in_node<F>(node: Option<&Node<T>>, visitor: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node_ref) = node {
            Self::for_each_in_node(node_ref.left.as_deref(), visitor);
            visitor(&node_ref.value);
            Self::for_each_in_node(node_ref.right.as_deref(), visitor);
        }
    }

    /// Calls a fallible `visitor` on every element in ascending order,
    /// stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visitor`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=10).collect();
    /// let mut visited = Vec::new();
    /// let result = tree.try_for_each(|element| {
    ///     if *element > 3 {
    ///         return Err(*element);
    ///     }
    ///     visited.push(*element);
    ///     Ok(())
    /// });
    /// assert_eq!(result, Err(4));
    /// assert_eq!(visited, vec![1, 2, 3]);
    /// ```
    pub fn try_for_each<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        Self::try_for_each_in_node(self.root.as_deref(), &mut visitor)
    }

    /// Recursive helper for `try_for_each`.
    fn try_for_each_in_node<E, F>(node: Option<&Node<T>>, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        match node {
            None => Ok(()),
            Some(node_ref) => {
                Self::try_for_each_in_node(node_ref.left.as_deref(), visitor)?;
                visitor(&node_ref.value)?;
                Self::try_for_each_in_node(node_ref.right.as_deref(), visitor)
            }
        }
    }

    /// Returns a lazy iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// let doubled: Vec<i32> = tree.iter().map(|element| element * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> RedBlackTreeIterator<'_, T> {
        RedBlackTreeIterator::new(self.root.as_ref())
    }

    /// Returns the color of the root, or `None` for an empty tree.
    #[must_use]
    pub fn root_color(&self) -> Option<Color> {
        self.root.as_ref().map(|root| root.color)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn height(&self) -> usize {
        Self::height_from_node(self.root.as_deref())
    }

    fn height_from_node(node: Option<&Node<T>>) -> usize {
        node.map_or(0, |node_ref| {
            1 + Self::height_from_node(node_ref.left.as_deref())
                .max(Self::height_from_node(node_ref.right.as_deref()))
        })
    }

    /// Returns the number of black nodes on the leftmost root-to-leaf path.
    ///
    /// For a tree satisfying the invariants this is the black-height of
    /// every path; use [`RedBlackTree::check_invariants`] to verify that.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut black_nodes = 0;
        let mut current = self.root.as_deref();
        while let Some(node_ref) = current {
            if node_ref.color == Color::Black {
                black_nodes += 1;
            }
            current = node_ref.left.as_deref();
        }
        black_nodes
    }

    /// Returns `true` if both trees share the same root node.
    ///
    /// A duplicate insertion returns a tree that shares the original root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=3).collect();
    /// let (again, _, _) = tree.insert(2);
    /// assert!(tree.ptr_eq(&again));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Returns a reference to the stored element equal to `element`.
    ///
    /// The element may be any borrowed form of the tree's element type, but the
    /// ordering on the borrowed form must match the ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::singleton("hello".to_string());
    ///
    /// // Can use &str to look up String elements
    /// assert_eq!(tree.get("hello"), Some(&"hello".to_string()));
    /// assert_eq!(tree.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, element: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::get_from_node(self.root.as_deref(), element)
    }

    /// Recursive helper for get.
    fn get_from_node<'a, Q>(node: Option<&'a Node<T>>, element: &Q) -> Option<&'a T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.and_then(|node_ref| match element.cmp(node_ref.value.borrow()) {
            Ordering::Less => Self::get_from_node(node_ref.left.as_deref(), element),
            Ordering::Greater => Self::get_from_node(node_ref.right.as_deref(), element),
            Ordering::Equal => Some(&node_ref.value),
        })
    }

    /// Returns `true` if the tree contains `element`.
    ///
    /// # Complexity
    ///
    /// O(log N), no allocation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..20).collect();
    /// assert!(tree.contains(&10));
    /// assert!(!tree.contains(&20));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(element).is_some()
    }
}

/// Outcome of the recursive insertion descent.
enum Descent<'a, T> {
    /// The subtree was rebuilt around the new element.
    Rebuilt(Node<T>),
    /// The element is already stored; nothing above it is rebuilt.
    Found(&'a T),
}

impl<T: Clone + Ord> RedBlackTree<T> {
    /// Creates a tree containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::singleton(7);
    /// assert_eq!(tree.count(), 1);
    /// assert_eq!(tree.min(), Some(&7));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().inserting(element)
    }

    /// Inserts an element into the tree.
    ///
    /// Returns the new tree, whether the element was added, and the element
    /// now stored at that position: the inserted element, or the pre-existing
    /// equal element when it was already present. A duplicate insertion
    /// allocates nothing and returns a tree sharing this tree's root.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let (tree, inserted, member) = RedBlackTree::new().insert(10);
    /// assert!(inserted);
    /// assert_eq!(member, 10);
    ///
    /// let (again, inserted, member) = tree.insert(10);
    /// assert!(!inserted);
    /// assert_eq!(member, 10);
    /// assert_eq!(again.count(), 1);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> (Self, bool, T) {
        let member = element.clone();
        match Self::insert_into_node(self.root.as_ref(), element) {
            Descent::Found(existing) => (self.clone(), false, existing.clone()),
            Descent::Rebuilt(mut new_root) => {
                // Make root black
                new_root.color = Color::Black;
                (
                    Self {
                        root: link(new_root),
                    },
                    true,
                    member,
                )
            }
        }
    }

    /// Recursive helper for insert.
    fn insert_into_node(
        node: Option<&ReferenceCounter<Node<T>>>,
        element: T,
    ) -> Descent<'_, T> {
        let Some(node_ref) = node else {
            // New leaves are red; the parent's balance or the root recolor fixes any violation
            return Descent::Rebuilt(Node::new_red(element));
        };

        match element.cmp(&node_ref.value) {
            Ordering::Less => match Self::insert_into_node(node_ref.left.as_ref(), element) {
                Descent::Rebuilt(new_left) => Descent::Rebuilt(balance(Node::new(
                    node_ref.color,
                    node_ref.value.clone(),
                    link(new_left),
                    node_ref.right.clone(),
                ))),
                found @ Descent::Found(_) => found,
            },
            Ordering::Greater => match Self::insert_into_node(node_ref.right.as_ref(), element) {
                Descent::Rebuilt(new_right) => Descent::Rebuilt(balance(Node::new(
                    node_ref.color,
                    node_ref.value.clone(),
                    node_ref.left.clone(),
                    link(new_right),
                ))),
                found @ Descent::Found(_) => found,
            },
            Ordering::Equal => Descent::Found(&node_ref.value),
        }
    }

    /// Inserts an element and returns only the new tree.
    ///
    /// Convenient for chaining; use [`RedBlackTree::insert`] to learn whether
    /// the element was added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new().inserting(2).inserting(1).inserting(2);
    /// assert_eq!(tree.count(), 2);
    /// ```
    #[must_use]
    pub fn inserting(&self, element: T) -> Self {
        self.insert(element).0
    }

    /// Inserts an element, replacing `self` with the new snapshot.
    ///
    /// Other clones of the previous snapshot are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// let snapshot = tree.clone();
    ///
    /// assert_eq!(tree.insert_in_place(5), (true, 5));
    /// assert_eq!(tree.insert_in_place(5), (false, 5));
    /// assert_eq!(tree.count(), 1);
    /// assert!(snapshot.is_empty());
    /// ```
    pub fn insert_in_place(&mut self, element: T) -> (bool, T) {
        let (tree, inserted, member) = self.insert(element);
        *self = tree;
        (inserted, member)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for RedBlackTree<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> Default for RedBlackTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Clone + Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert_in_place(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = RedBlackTreeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for RedBlackTree<T> {
    /// Two trees are equal when they hold the same elements, regardless of shape.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RedBlackTree<T> {}

/// Computes a hash value for this tree.
///
/// Each element is hashed in ascending order, followed by the element count,
/// so equal trees hash equally whatever order their elements were inserted in.
impl<T: Hash> Hash for RedBlackTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0_usize;
        for element in self {
            element.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SHUFFLED: [i32; 19] = [7, 15, 2, 19, 11, 4, 13, 1, 9, 17, 6, 3, 18, 10, 14, 5, 16, 8, 12];

    #[rstest]
    fn test_new_creates_empty() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.count(), 0);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.root_color(), None);
    }

    #[rstest]
    fn test_shuffled_one_to_nineteen() {
        let tree: RedBlackTree<i32> = SHUFFLED.into_iter().collect();

        assert_eq!(tree.count(), 19);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&19));
        assert!(tree.contains(&10));
        assert!(!tree.contains(&20));
        assert_eq!(tree.root_color(), Some(Color::Black));

        let mut visited = Vec::new();
        tree.for_each(|element| visited.push(*element));
        assert_eq!(visited, (1..=19).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_duplicate_insert_reports_existing_member() {
        let (tree, inserted, member) = RedBlackTree::new().insert(10);
        assert!(inserted);
        assert_eq!(member, 10);

        let (again, inserted, member) = tree.insert(10);
        assert!(!inserted);
        assert_eq!(member, 10);
        assert_eq!(again.count(), 1);
    }

    #[rstest]
    fn test_duplicate_insert_shares_root() {
        let tree: RedBlackTree<i32> = SHUFFLED.into_iter().collect();
        let (again, _, _) = tree.insert(13);
        assert!(tree.ptr_eq(&again));
        assert!(ReferenceCounter::ptr_eq(
            tree.root.as_ref().unwrap(),
            again.root.as_ref().unwrap()
        ));
    }

    #[rstest]
    fn test_insert_shares_untouched_subtrees() {
        let tree: RedBlackTree<i32> = (1..=15).collect();
        let root = tree.root.as_ref().unwrap();
        let (extended, inserted, _) = tree.insert(100);
        assert!(inserted);

        fn holds_subtree(
            node: Option<&ReferenceCounter<Node<i32>>>,
            subtree: &ReferenceCounter<Node<i32>>,
        ) -> bool {
            node.is_some_and(|node_ref| {
                ReferenceCounter::ptr_eq(node_ref, subtree)
                    || holds_subtree(node_ref.left.as_ref(), subtree)
                    || holds_subtree(node_ref.right.as_ref(), subtree)
            })
        }

        let new_root = extended.root.as_ref().unwrap();
        assert!(!ReferenceCounter::ptr_eq(root, new_root));
        // 100 goes right, so the whole left subtree is reused somewhere in the new tree
        assert!(holds_subtree(
            extended.root.as_ref(),
            root.left.as_ref().unwrap()
        ));
    }

    #[rstest]
    fn test_insert_preserves_original_tree() {
        let tree = RedBlackTree::singleton(1);
        let (extended, _, _) = tree.insert(2);

        assert_eq!(tree.count(), 1);
        assert_eq!(extended.count(), 2);
        assert!(!tree.contains(&2));
        assert!(extended.contains(&2));
    }

    #[rstest]
    fn test_duplicate_returns_stored_element() {
        // Ordered by the first field only, so equal elements can still differ
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct Entry(i32, &'static str);

        impl PartialOrd for Entry {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Entry {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }

        let tree = RedBlackTree::singleton(Entry(1, "first"));
        let (tree, inserted, member) = tree.insert(Entry(1, "second"));
        assert!(!inserted);
        assert_eq!(member.1, "first");
        assert_eq!(tree.min().map(|entry| entry.1), Some("first"));
    }

    #[rstest]
    fn test_ascending_insertions_stay_balanced() {
        let tree: RedBlackTree<u32> = (0..1024).collect();
        assert_eq!(tree.count(), 1024);
        // A red-black tree with n nodes is at most 2 * log2(n + 1) high
        assert!(tree.height() <= 20);
        assert!(tree.check_invariants().is_ok());
    }

    #[rstest]
    fn test_insert_in_place_replaces_snapshot() {
        let mut tree = RedBlackTree::new();
        let snapshot = tree.clone();

        assert_eq!(tree.insert_in_place(3), (true, 3));
        assert_eq!(tree.insert_in_place(1), (true, 1));
        assert_eq!(tree.insert_in_place(3), (false, 3));

        assert_eq!(tree.count(), 2);
        assert!(snapshot.is_empty());
    }

    #[rstest]
    fn test_get_with_borrowed_form() {
        let tree: RedBlackTree<String> = ["b", "a", "c"].into_iter().map(String::from).collect();
        assert_eq!(tree.get("a"), Some(&"a".to_string()));
        assert!(tree.contains("c"));
        assert!(!tree.contains("d"));
    }

    #[rstest]
    fn test_try_for_each_stops_at_first_error() {
        let tree: RedBlackTree<i32> = SHUFFLED.into_iter().collect();
        let mut visited = Vec::new();
        let result = tree.try_for_each(|element| {
            if element % 5 == 0 {
                Err(*element)
            } else {
                visited.push(*element);
                Ok(())
            }
        });
        assert_eq!(result, Err(5));
        assert_eq!(visited, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_black_height_of_small_trees() {
        assert_eq!(RedBlackTree::<i32>::new().black_height(), 0);
        assert_eq!(RedBlackTree::singleton(1).black_height(), 1);
        let tree: RedBlackTree<i32> = (1..=3).collect();
        assert_eq!(tree.black_height(), 2);
    }

    #[rstest]
    fn test_eq_ignores_shape() {
        let ascending: RedBlackTree<i32> = (1..=19).collect();
        let shuffled: RedBlackTree<i32> = SHUFFLED.into_iter().collect();
        assert_eq!(ascending, shuffled);
        assert_ne!(ascending, ascending.inserting(20));
    }

    #[rstest]
    fn test_hash_ignores_insertion_order() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(tree: &RedBlackTree<i32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            tree.hash(&mut hasher);
            hasher.finish()
        }

        let ascending: RedBlackTree<i32> = (1..=19).collect();
        let shuffled: RedBlackTree<i32> = SHUFFLED.into_iter().collect();
        assert_eq!(hash_of(&ascending), hash_of(&shuffled));
    }

    #[rstest]
    fn test_debug_is_set_form() {
        let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }
}
