//! Depth-first search without recursion or a stack
//!
//! State: one visited bit per slot plus the current index.
//! Step rule:
//!   - entering an unvisited node: report it, mark it visited
//!   - otherwise descend into the first unvisited child (left, then right)
//!   - no such child: climb to the parent
//! The walk ends when it stands on the root with every existing child
//! of the root visited, which also covers a lone root (height 1).

use bitvec::prelude::*;
use tracing::{debug, trace};

use crate::tree::{child_index, parent_index, IndexedTree, Side};

/// Pre-order walk driven by visited markers
///
/// Yields each index once, on entry. Every edge is crossed twice,
/// so a full walk takes O(capacity) steps.
#[derive(Debug, Clone)]
pub struct DepthFirstWalk {
    /// One bit per slot
    visited: BitVec,

    /// Node the walk stands on; `None` once finished
    current: Option<usize>,

    capacity: usize,
}

impl DepthFirstWalk {
    /// Walk starting at the root of `tree`
    pub fn new(tree: &IndexedTree) -> Self {
        let capacity = tree.capacity();
        Self {
            visited: bitvec![0; capacity],
            current: (capacity > 0).then_some(0),
            capacity,
        }
    }

    /// Number of slots already entered
    pub fn visited_count(&self) -> usize {
        self.visited.count_ones()
    }

    fn first_unvisited_child(&self, parent: usize) -> Option<usize> {
        Side::BOTH
            .into_iter()
            .filter_map(|side| child_index(self.capacity, parent, side))
            .find(|&child| !self.visited[child])
    }
}

impl Iterator for DepthFirstWalk {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            let current = self.current?;

            if !self.visited[current] {
                trace!(index = current, "dfs enter");
                self.visited.set(current, true);
                return Some(current);
            }

            // Back at the root with nothing left below it: parent_index is None
            self.current = self
                .first_unvisited_child(current)
                .or_else(|| parent_index(self.capacity, current));
        }
    }
}

/// First index, in depth-first pre-order, whose label equals `target`
///
/// With duplicate labels this can differ from breadth-first order.
pub fn depth_first_search(tree: &IndexedTree, target: &str) -> Option<usize> {
    let mut walk = DepthFirstWalk::new(tree);
    let found = walk.find(|&index| tree[index].matches(target));
    debug!(
        label = target,
        ?found,
        visited = walk.visited_count(),
        "depth-first search finished"
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeConfig;

    #[test]
    fn test_preorder_visit_order() {
        let tree = IndexedTree::new(TreeConfig::new(3)).unwrap();
        let order: Vec<usize> = DepthFirstWalk::new(&tree).collect();
        assert_eq!(order, vec![0, 1, 3, 4, 2, 5, 6]);
    }

    #[test]
    fn test_lone_root_terminates() {
        let tree = IndexedTree::new(TreeConfig::new(1)).unwrap();
        let order: Vec<usize> = DepthFirstWalk::new(&tree).collect();
        assert_eq!(order, vec![0]);
        assert_eq!(depth_first_search(&tree, "0"), Some(0));
        assert_eq!(depth_first_search(&tree, "1"), None);
    }

    #[test]
    fn test_walk_visits_every_slot_once() {
        let tree = IndexedTree::new(TreeConfig::new(5)).unwrap();
        let mut walk = DepthFirstWalk::new(&tree);
        let mut order: Vec<usize> = walk.by_ref().collect();
        assert_eq!(walk.visited_count(), 31);
        order.sort_unstable();
        assert_eq!(order, (0..31).collect::<Vec<_>>());
    }

    #[test]
    fn test_first_match_in_preorder() {
        // 3 and 2 share a label; 3 is entered first depth-first
        let tree = IndexedTree::with_initializer(TreeConfig::new(3), |i| match i {
            2 | 3 => "dup".to_string(),
            other => other.to_string(),
        })
        .unwrap();
        assert_eq!(depth_first_search(&tree, "dup"), Some(3));
    }
}
