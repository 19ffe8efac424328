//! Node and colour definitions shared by every tree operation.

use crate::persistent::ReferenceCounter;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a Red-Black Tree node.
///
/// An empty subtree counts as [`Color::Black`] when black-heights are measured.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red node. A red node never has a red child.
    Red,
    /// A black node. Every root-to-leaf path crosses the same number of them.
    Black,
}

impl Color {
    /// Returns the glyph used by the tree diagram for this color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::Color;
    ///
    /// assert_eq!(Color::Black.symbol(), '■');
    /// assert_eq!(Color::Red.symbol(), '□');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => '■',
            Self::Red => '□',
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// A possibly empty subtree. `None` is the black `Empty` leaf.
pub(super) type Link<T> = Option<ReferenceCounter<Node<T>>>;

/// Internal node structure for the Red-Black Tree.
#[derive(Clone)]
pub(super) struct Node<T> {
    pub(super) color: Color,
    pub(super) value: T,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new red node with no children.
    pub(super) const fn new_red(value: T) -> Self {
        Self {
            color: Color::Red,
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node from its parts.
    pub(super) const fn new(color: Color, value: T, left: Link<T>, right: Link<T>) -> Self {
        Self {
            color,
            value,
            left,
            right,
        }
    }

    /// Checks if this node is red.
    pub(super) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Helper function to check if an optional node is red.
pub(super) fn is_red<T>(link: Option<&ReferenceCounter<Node<T>>>) -> bool {
    link.is_some_and(|node| node.is_red())
}

/// Wraps a node into a shared link.
pub(super) fn link<T>(node: Node<T>) -> Link<T> {
    Some(ReferenceCounter::new(node))
}
