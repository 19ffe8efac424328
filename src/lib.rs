//! # redblack
//!
//! A persistent red-black tree for Rust, providing an immutable ordered set
//! with structural sharing.
//!
//! ## Overview
//!
//! - **Persistent**: inserting returns a new tree; every earlier version stays
//!   valid and shares all untouched subtrees with the new one
//! - **Ordered set**: membership, min/max, successor/predecessor and in-order
//!   traversal over any `Ord` element type
//! - **Snapshot-bound indices**: bidirectional iteration through
//!   [`persistent::TreeIndex`] values validated against the tree they are used with
//!
//! ## Feature Flags
//!
//! - `arc`: Use `Arc` instead of `Rc` so trees are `Send + Sync`
//! - `serde`: Serialize trees as ascending sequences
//! - `full`: Enable all optional features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use redblack::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! for element in [5, 2, 8, 2] {
//!     tree.insert_in_place(element);
//! }
//!
//! assert_eq!(tree.count(), 3);
//! assert_eq!(tree.min(), Some(&2));
//! assert_eq!(tree.following(&5), (true, Some(&8)));
//! assert_eq!(tree.root_color(), Some(Color::Black));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
