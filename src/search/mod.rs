//! Label search over an indexed tree
//!
//! Two strategies, same contract: the first matching index in
//! traversal order, or `None`. A miss is not an error.

mod bfs;
mod dfs;

pub use bfs::{breadth_first_search, BreadthFirstWalk};
pub use dfs::{depth_first_search, DepthFirstWalk};

use std::fmt;

use crate::tree::IndexedTree;

/// Which traversal order a search follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Level order (array order)
    BreadthFirst,

    /// Pre-order, left before right
    DepthFirst,
}

impl SearchStrategy {
    /// Every strategy, breadth-first first
    pub const ALL: [SearchStrategy; 2] = [SearchStrategy::BreadthFirst, SearchStrategy::DepthFirst];

    /// Find the first node labeled `target`
    pub fn search(self, tree: &IndexedTree, target: &str) -> Option<usize> {
        match self {
            SearchStrategy::BreadthFirst => breadth_first_search(tree, target),
            SearchStrategy::DepthFirst => depth_first_search(tree, target),
        }
    }

    /// Indices of `tree` in this strategy's visiting order
    pub fn walk<'a>(self, tree: &'a IndexedTree) -> Box<dyn Iterator<Item = usize> + 'a> {
        match self {
            SearchStrategy::BreadthFirst => Box::new(BreadthFirstWalk::new(tree)),
            SearchStrategy::DepthFirst => Box::new(DepthFirstWalk::new(tree)),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::BreadthFirst => f.write_str("breadth-first"),
            SearchStrategy::DepthFirst => f.write_str("depth-first"),
        }
    }
}
