//! Human-readable rendering of a tree's shape and coloring.
//!
//! The right subtree is drawn above its parent and the left subtree below,
//! so reading the output top to bottom lists the elements in descending
//! order. The glyphs are cosmetic and may change.

use super::RedBlackTree;
use super::node::Node;
use std::fmt::{self, Display, Write};

impl<T: Display> Display for RedBlackTree<T> {
    /// Renders the tree diagram.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=3).collect();
    /// assert_eq!(tree.to_string(), "┌───■ 3\n■ 2\n└───■ 1\n");
    /// ```
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_diagram(formatter, self.root.as_deref(), "", "", "")
    }
}

/// Writes `node` with `root` as the prefix of its own line; `top` and
/// `bottom` prefix the lines of the right and left subtrees.
fn write_diagram<T, W>(
    out: &mut W,
    node: Option<&Node<T>>,
    top: &str,
    root: &str,
    bottom: &str,
) -> fmt::Result
where
    T: Display,
    W: Write,
{
    let Some(node_ref) = node else {
        return writeln!(out, "{root}•");
    };

    if node_ref.left.is_none() && node_ref.right.is_none() {
        return writeln!(out, "{root}{} {}", node_ref.color.symbol(), node_ref.value);
    }

    write_diagram(
        out,
        node_ref.right.as_deref(),
        &format!("{top}    "),
        &format!("{top}┌───"),
        &format!("{top}│   "),
    )?;
    writeln!(out, "{root}{} {}", node_ref.color.symbol(), node_ref.value)?;
    write_diagram(
        out,
        node_ref.left.as_deref(),
        &format!("{bottom}│   "),
        &format!("{bottom}└───"),
        &format!("{bottom}    "),
    )
}
