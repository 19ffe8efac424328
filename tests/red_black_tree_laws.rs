//! Property-based tests for RedBlackTree.
//!
//! These tests verify that RedBlackTree satisfies the expected laws
//! and invariants using proptest.

use proptest::prelude::*;
use redblack::persistent::{Color, RedBlackTree};
use std::collections::BTreeSet;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for generating insertion sequences, duplicates included.
fn insertions(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500..500_i32, 0..max_size)
}

/// Strategy for generating a shuffled permutation of `1..=size`.
fn permutation(size: i32) -> impl Strategy<Value = Vec<i32>> {
    Just((1..=size).collect::<Vec<_>>()).prop_shuffle()
}

// =============================================================================
// Invariant Laws
// =============================================================================

proptest! {
    /// Law: every insertion sequence yields a valid red-black tree.
    #[test]
    fn prop_invariants_hold_after_every_insert(elements in insertions(200)) {
        let mut tree = RedBlackTree::new();
        for element in elements {
            tree.insert_in_place(element);
            prop_assert!(tree.check_invariants().is_ok());
            prop_assert_eq!(tree.root_color(), Some(Color::Black));
        }
    }

    /// Law: height is logarithmic.
    /// tree.height() <= 2 * log2(count + 1)
    #[test]
    fn prop_height_is_logarithmic(elements in insertions(500)) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        let bound = 2 * (usize::BITS - (tree.count() + 1).leading_zeros()) as usize;
        prop_assert!(tree.height() <= bound);
    }

    /// Law: any permutation of 1..=19 gives the same observable set.
    #[test]
    fn prop_shuffled_nineteen(elements in permutation(19)) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        prop_assert_eq!(tree.count(), 19);
        prop_assert_eq!(tree.min(), Some(&1));
        prop_assert_eq!(tree.max(), Some(&19));
        prop_assert!(tree.contains(&10));
        prop_assert!(!tree.contains(&20));
        prop_assert_eq!(tree.root_color(), Some(Color::Black));
    }
}

// =============================================================================
// Insert Laws
// =============================================================================

proptest! {
    /// Law: inserting twice is the same as inserting once.
    #[test]
    fn prop_insert_idempotent(elements in insertions(50), element: i32) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        let once = tree.inserting(element);
        let (twice, inserted, member) = once.insert(element);

        prop_assert!(!inserted);
        prop_assert_eq!(member, element);
        prop_assert_eq!(twice.count(), once.count());
        prop_assert_eq!(&twice, &once);
    }

    /// Law: the inserted flag is the negation of prior membership.
    #[test]
    fn prop_inserted_flag_matches_membership(elements in insertions(50), element in -500..500_i32) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        let was_present = tree.contains(&element);
        let (updated, inserted, _) = tree.insert(element);

        prop_assert_eq!(inserted, !was_present);
        prop_assert_eq!(updated.count(), tree.count() + usize::from(inserted));
    }

    /// Law: insert does not affect the original snapshot.
    #[test]
    fn prop_insert_is_persistent(elements in insertions(50), element: i32) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        let before: Vec<i32> = tree.iter().copied().collect();
        let _updated = tree.inserting(element);
        let after: Vec<i32> = tree.iter().copied().collect();
        prop_assert_eq!(before, after);
    }
}

// =============================================================================
// Membership and Order Laws
// =============================================================================

proptest! {
    /// Law: contains agrees with a reference set.
    #[test]
    fn prop_membership_matches_reference(elements in insertions(100), probe in -600..600_i32) {
        let tree: RedBlackTree<i32> = elements.iter().copied().collect();
        let reference: BTreeSet<i32> = elements.into_iter().collect();
        prop_assert_eq!(tree.contains(&probe), reference.contains(&probe));
    }

    /// Law: traversal is the sorted, deduplicated input.
    #[test]
    fn prop_traversal_is_sorted_and_deduplicated(elements in insertions(100)) {
        let tree: RedBlackTree<i32> = elements.iter().copied().collect();
        let mut expected = elements;
        expected.sort_unstable();
        expected.dedup();

        let mut visited = Vec::new();
        tree.for_each(|element| visited.push(*element));
        prop_assert_eq!(&visited, &expected);

        let iterated: Vec<i32> = tree.iter().copied().collect();
        prop_assert_eq!(iterated, expected);
    }

    /// Law: min and max agree with the traversal ends.
    #[test]
    fn prop_min_max_match_traversal(elements in insertions(100)) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        prop_assert_eq!(tree.min(), tree.iter().next());
        prop_assert_eq!(tree.max(), tree.iter().last());
    }
}

// =============================================================================
// Neighbour Laws
// =============================================================================

proptest! {
    /// Law: following and preceding agree with in-order adjacency.
    #[test]
    fn prop_neighbours_agree_with_traversal(elements in insertions(100)) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        let sorted: Vec<i32> = tree.iter().copied().collect();

        for pair in sorted.windows(2) {
            prop_assert_eq!(tree.following(&pair[0]), (true, Some(&pair[1])));
            prop_assert_eq!(tree.preceding(&pair[1]), (true, Some(&pair[0])));
        }
    }

    /// Law: neighbours of absent targets match a reference set's ranges.
    #[test]
    fn prop_neighbours_of_any_target(elements in insertions(100), target in -600..600_i32) {
        let tree: RedBlackTree<i32> = elements.iter().copied().collect();
        let reference: BTreeSet<i32> = elements.into_iter().collect();

        let expected_next = reference.range(target + 1..).next();
        let expected_previous = reference.range(..target).next_back();
        let found = reference.contains(&target);

        prop_assert_eq!(tree.following(&target), (found, expected_next));
        prop_assert_eq!(tree.preceding(&target), (found, expected_previous));
    }
}

// =============================================================================
// Index Laws
// =============================================================================

proptest! {
    /// Law: advancing from start reaches end in exactly count steps.
    #[test]
    fn prop_forward_iteration_terminates(elements in insertions(100)) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        let mut index = tree.start_index();
        let mut visited = Vec::new();
        while index != tree.end_index() {
            visited.push(tree[&index]);
            index = tree.index_after(&index);
        }

        prop_assert_eq!(visited.len(), tree.count());
        prop_assert_eq!(visited, tree.iter().copied().collect::<Vec<_>>());
    }

    /// Law: retreating from end reaches start in exactly count steps.
    #[test]
    fn prop_backward_iteration_terminates(elements in insertions(100)) {
        let tree: RedBlackTree<i32> = elements.into_iter().collect();
        let start = tree.start_index();
        let mut index = tree.end_index();
        let mut steps = 0;
        while index != start {
            index = tree.index_before(&index);
            steps += 1;
        }
        prop_assert_eq!(steps, tree.count());
    }
}
