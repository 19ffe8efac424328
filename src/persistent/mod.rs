//! Persistent (immutable) data structures.
//!
//! This module provides [`RedBlackTree`], an immutable ordered set that uses
//! structural sharing to minimize copying: inserting into a tree creates a new
//! version that reuses every subtree off the search path.
//!
//! # Structural Sharing
//!
//! ```rust
//! use redblack::persistent::RedBlackTree;
//!
//! let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
//!
//! // The original tree is preserved
//! let (extended, inserted, member) = tree.insert(4);
//! assert!(inserted);
//! assert_eq!(member, 4);
//! assert_eq!(tree.count(), 3);     // Original unchanged
//! assert_eq!(extended.count(), 4); // New version
//! ```
//!
//! ## Ordered iteration with indices
//!
//! ```rust
//! use redblack::persistent::RedBlackTree;
//!
//! let tree: RedBlackTree<i32> = [30, 10, 20].into_iter().collect();
//!
//! let mut index = tree.start_index();
//! let mut seen = Vec::new();
//! while index != tree.end_index() {
//!     seen.push(tree[&index]);
//!     index = tree.index_after(&index);
//! }
//! assert_eq!(seen, vec![10, 20, 30]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod red_black_tree;

pub use red_black_tree::Color;
pub use red_black_tree::IndexError;
pub use red_black_tree::InvariantViolation;
pub use red_black_tree::RedBlackTree;
pub use red_black_tree::RedBlackTreeIterator;
pub use red_black_tree::TreeIndex;

// =============================================================================
// Tests
// =============================================================================
