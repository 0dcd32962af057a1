//! Breadth-first search
//!
//! The flat array is level-ordered, so a front-to-back scan visits
//! nodes exactly as a queue-driven BFS would. No queue needed.

use std::ops::Range;

use tracing::debug;

use crate::tree::IndexedTree;

/// Level-order walk over a tree's indices
#[derive(Debug, Clone)]
pub struct BreadthFirstWalk {
    remaining: Range<usize>,
}

impl BreadthFirstWalk {
    /// Walk every slot of `tree`, root first
    pub fn new(tree: &IndexedTree) -> Self {
        Self {
            remaining: 0..tree.capacity(),
        }
    }
}

impl Iterator for BreadthFirstWalk {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.remaining.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl ExactSizeIterator for BreadthFirstWalk {}

/// First index, in level order, whose label equals `target`
///
/// Ties go to the lowest index.
pub fn breadth_first_search(tree: &IndexedTree, target: &str) -> Option<usize> {
    let found = BreadthFirstWalk::new(tree).find(|&index| tree[index].matches(target));
    debug!(label = target, ?found, "breadth-first search finished");
    found
}
