//! Invariant checking for diagnostics and tests.

use super::RedBlackTree;
use super::node::{Color, Node, is_red};
use std::fmt;

/// A broken red-black tree invariant, as reported by
/// [`RedBlackTree::check_invariants`].
///
/// Trees built through the public API never produce one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    RedRedChain,
    /// The two subtrees of a node have different black-heights.
    BlackHeightMismatch {
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// The in-order sequence is not strictly ascending.
    OutOfOrder,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "the root node is red"),
            Self::RedRedChain => write!(formatter, "a red node has a red child"),
            Self::BlackHeightMismatch { left, right } => write!(
                formatter,
                "black-height mismatch: left subtree {left}, right subtree {right}"
            ),
            Self::OutOfOrder => write!(formatter, "elements are not strictly ascending"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<T: Ord> RedBlackTree<T> {
    /// Verifies every red-black and search-tree invariant, returning the
    /// tree's black-height.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=100).collect();
    /// assert_eq!(tree.check_invariants(), Ok(tree.black_height()));
    /// ```
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        if self.root_color() == Some(Color::Red) {
            return Err(InvariantViolation::RedRoot);
        }

        let black_height = Self::check_node(self.root.as_deref())?;

        let mut previous: Option<&T> = None;
        for element in self {
            if previous.is_some_and(|previous| previous >= element) {
                return Err(InvariantViolation::OutOfOrder);
            }
            previous = Some(element);
        }

        Ok(black_height)
    }

    /// Returns the black-height of `node`, empty subtrees counting zero.
    fn check_node(node: Option<&Node<T>>) -> Result<usize, InvariantViolation> {
        let Some(node_ref) = node else {
            return Ok(0);
        };

        if node_ref.is_red() && (is_red(node_ref.left.as_ref()) || is_red(node_ref.right.as_ref()))
        {
            return Err(InvariantViolation::RedRedChain);
        }

        let left = Self::check_node(node_ref.left.as_deref())?;
        let right = Self::check_node(node_ref.right.as_deref())?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { left, right });
        }

        Ok(left + usize::from(node_ref.color == Color::Black))
    }
}
