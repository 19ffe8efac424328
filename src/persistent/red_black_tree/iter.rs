use super::node::Node;
use crate::persistent::ReferenceCounter;
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Inline capacity of the traversal stack.
///
/// A red-black tree holding `n` elements is at most `2 * log2(n + 1)` nodes
/// high, so trees of up to 2^24 elements never spill to the heap.
const STACK_INLINE_CAPACITY: usize = 48;

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A lazy in-order iterator over the elements of a [`RedBlackTree`].
///
/// Holds the path of nodes whose values are still to be yielded, so memory
/// use is bounded by the tree height rather than its size.
///
/// [`RedBlackTree`]: super::RedBlackTree
pub struct RedBlackTreeIterator<'a, T> {
    stack: SmallVec<[&'a ReferenceCounter<Node<T>>; STACK_INLINE_CAPACITY]>,
}

impl<'a, T> RedBlackTreeIterator<'a, T> {
    pub(super) fn new(root: Option<&'a ReferenceCounter<Node<T>>>) -> Self {
        let mut iterator = Self {
            stack: SmallVec::new(),
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ReferenceCounter<Node<T>>>) {
        while let Some(node_ref) = node {
            self.stack.push(node_ref);
            node = node_ref.left.as_ref();
        }
    }
}

impl<'a, T> Iterator for RedBlackTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node_ref = self.stack.pop()?;
        self.push_left_spine(node_ref.right.as_ref());
        Some(&node_ref.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<T> FusedIterator for RedBlackTreeIterator<'_, T> {}

impl<T> Clone for RedBlackTreeIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
