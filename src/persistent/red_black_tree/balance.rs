//! The local rewrite that restores the red-black invariants during insertion.
//!
//! A black node whose red child has a red child forms one of four shapes:
//!
//! ```text
//!        z            z          x            x
//!       /            /            \            \
//!      y            x              z            y
//!     /              \            /              \
//!    x                y          y                z
//! ```
//!
//! Each is rewritten into the same balanced cluster, with the four dangling
//! subtrees `a < b < c < d` reattached in order:
//!
//! ```text
//!          y (red)
//!        /   \
//!   x (black)  z (black)
//!    / \       / \
//!   a   b     c   d
//! ```

use super::node::{Color, Link, Node, link};

/// The seven pieces of a red-red cluster, in ascending order.
struct Cluster<T> {
    x: T,
    y: T,
    z: T,
    a: Link<T>,
    b: Link<T>,
    c: Link<T>,
    d: Link<T>,
}

impl<T: Clone> Cluster<T> {
    /// Splits a black node with a red-red chain below it into its pieces.
    ///
    /// Returns the node unchanged when it is not the top of such a chain.
    fn split(node: Node<T>) -> Result<Self, Node<T>> {
        if node.color != Color::Black {
            return Err(node);
        }

        if let Some(child) = node.left.as_deref().filter(|child| child.is_red()) {
            // Left-Left
            if let Some(grandchild) = child.left.as_deref().filter(|grand| grand.is_red()) {
                let (x, a, b) = (
                    grandchild.value.clone(),
                    grandchild.left.clone(),
                    grandchild.right.clone(),
                );
                let (y, c) = (child.value.clone(), child.right.clone());
                return Ok(Self {
                    x,
                    y,
                    z: node.value,
                    a,
                    b,
                    c,
                    d: node.right,
                });
            }

            // Left-Right
            if let Some(grandchild) = child.right.as_deref().filter(|grand| grand.is_red()) {
                let (x, a) = (child.value.clone(), child.left.clone());
                let (y, b, c) = (
                    grandchild.value.clone(),
                    grandchild.left.clone(),
                    grandchild.right.clone(),
                );
                return Ok(Self {
                    x,
                    y,
                    z: node.value,
                    a,
                    b,
                    c,
                    d: node.right,
                });
            }
        }

        if let Some(child) = node.right.as_deref().filter(|child| child.is_red()) {
            // Right-Left
            if let Some(grandchild) = child.left.as_deref().filter(|grand| grand.is_red()) {
                let (y, b, c) = (
                    grandchild.value.clone(),
                    grandchild.left.clone(),
                    grandchild.right.clone(),
                );
                let (z, d) = (child.value.clone(), child.right.clone());
                return Ok(Self {
                    x: node.value,
                    y,
                    z,
                    a: node.left,
                    b,
                    c,
                    d,
                });
            }

            // Right-Right
            if let Some(grandchild) = child.right.as_deref().filter(|grand| grand.is_red()) {
                let (y, b) = (child.value.clone(), child.left.clone());
                let (z, c, d) = (
                    grandchild.value.clone(),
                    grandchild.left.clone(),
                    grandchild.right.clone(),
                );
                return Ok(Self {
                    x: node.value,
                    y,
                    z,
                    a: node.left,
                    b,
                    c,
                    d,
                });
            }
        }

        Err(node)
    }

    /// Builds the balanced cluster: red `y` over black `x(a, b)` and black `z(c, d)`.
    fn rebuild(self) -> Node<T> {
        Node::new(
            Color::Red,
            self.y,
            link(Node::new(Color::Black, self.x, self.a, self.b)),
            link(Node::new(Color::Black, self.z, self.c, self.d)),
        )
    }
}

/// Balances a node rebuilt on the way back up from an insertion.
///
/// Every configuration other than the four red-red shapes is returned as is.
pub(super) fn balance<T: Clone>(node: Node<T>) -> Node<T> {
    match Cluster::split(node) {
        Ok(cluster) => cluster.rebuild(),
        Err(node) => node,
    }
}
