//! Successor and predecessor queries.
//!
//! Both queries accept targets that are not stored in the tree, and report
//! whether the target itself was found alongside the neighbouring element.

use super::RedBlackTree;
use super::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;

impl<T: Ord> RedBlackTree<T> {
    /// Returns whether `target` is stored, and the smallest element strictly
    /// greater than it.
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
    /// let tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(tree.following(&10), (true, Some(&20)));
    /// assert_eq!(tree.following(&15), (false, Some(&20)));
    /// assert_eq!(tree.following(&30), (true, None));
    /// ```
    #[must_use]
    pub fn following<Q>(&self, target: &Q) -> (bool, Option<&T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::following_in_node(self.root.as_deref(), target)
    }

    /// Recursive helper for following.
    ///
    /// A node passed on the way left is the answer unless something smaller
    /// turns up deeper in its left subtree.
    fn following_in_node<'a, Q>(node: Option<&'a Node<T>>, target: &Q) -> (bool, Option<&'a T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(node_ref) = node else {
            return (false, None);
        };

        match target.cmp(node_ref.value.borrow()) {
            Ordering::Less => {
                let (found, deeper) = Self::following_in_node(node_ref.left.as_deref(), target);
                (found, deeper.or(Some(&node_ref.value)))
            }
            Ordering::Greater => Self::following_in_node(node_ref.right.as_deref(), target),
            Ordering::Equal => (true, Self::min_from_node(node_ref.right.as_deref())),
        }
    }

    /// Returns whether `target` is stored, and the largest element strictly
    /// smaller than it.
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
    /// let tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(tree.preceding(&20), (true, Some(&10)));
    /// assert_eq!(tree.preceding(&25), (false, Some(&20)));
    /// assert_eq!(tree.preceding(&10), (true, None));
    /// ```
    #[must_use]
    pub fn preceding<Q>(&self, target: &Q) -> (bool, Option<&T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut previous = None;
        let mut current = self.root.as_deref();

        while let Some(node_ref) = current {
            match target.cmp(node_ref.value.borrow()) {
                Ordering::Less => current = node_ref.left.as_deref(),
                Ordering::Greater => {
                    previous = Some(&node_ref.value);
                    current = node_ref.right.as_deref();
                }
                Ordering::Equal => {
                    let predecessor = Self::max_from_node(node_ref.left.as_deref()).or(previous);
                    return (true, predecessor);
                }
            }
        }

        (false, previous)
    }
}
