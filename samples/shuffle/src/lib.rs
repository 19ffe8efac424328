//! Shuffle Sample Application
//!
//! Inserts a random permutation of `1..=N` into a persistent red-black tree,
//! logging every insertion, and reports the resulting shape.
//!
//! # redblack Features Used
//!
//! - `RedBlackTree::insert` with its `inserted` flag
//! - `check_invariants`, `height` and `black_height` diagnostics
//! - The `Display` diagram

pub mod config;

pub use config::{ConfigError, ShuffleConfig};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use redblack::persistent::{InvariantViolation, RedBlackTree};

/// Summary of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Number of distinct elements in the tree.
    pub count: usize,
    /// Longest root-to-leaf path.
    pub height: usize,
    /// Black nodes on every root-to-leaf path.
    pub black_height: usize,
}

/// Returns `1..=config.count` in a random order.
///
/// The order is reproducible when `config.seed` is set.
pub fn permutation(config: &ShuffleConfig) -> Vec<u32> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut elements: Vec<u32> = (1..=config.count).collect();
    elements.shuffle(&mut rng);
    elements
}

/// Inserts `elements` one by one into an empty tree.
pub fn build(elements: &[u32]) -> RedBlackTree<u32> {
    elements.iter().fold(RedBlackTree::new(), |tree, &element| {
        let (tree, inserted, _) = tree.insert(element);
        tracing::debug!(element, inserted, height = tree.height(), "insert");
        tree
    })
}

/// Verifies `tree` and summarizes its shape.
///
/// # Errors
///
/// Returns the [`InvariantViolation`] found, if any.
pub fn summarize(tree: &RedBlackTree<u32>) -> Result<Summary, InvariantViolation> {
    let black_height = tree.check_invariants()?;
    Ok(Summary {
        count: tree.count(),
        height: tree.height(),
        black_height,
    })
}
