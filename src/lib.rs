//! # Fixed-Capacity Indexed Binary Tree
//!
//! A binary tree of fixed height `H` stored as a flat array of
//! `2^H - 1` labeled slots. Structure is implicit: nothing but the
//! position of a slot says where its parent and children live.
//!
//! ## Index arithmetic
//!
//! For the node at index `i` (0-based):
//!
//! 1. **Left child**: `2i + 1`
//! 2. **Right child**: `2i + 2`
//! 3. **Parent**: `⌊(i - 1) / 2⌋`, undefined for the root
//!
//! A child index exists only while it is `< capacity`. The layout is level
//! order, so scanning the array front to back *is* a breadth-first traversal.
//!
//! ## Usage Example
//!
//! ```
//! use indexed_tree::{IndexedTree, SearchStrategy, Side, TreeConfig};
//!
//! let tree = IndexedTree::new(TreeConfig::new(4))?;
//! assert_eq!(tree.capacity(), 15);
//! assert_eq!(tree.child_index(0, Side::Right), Some(2));
//! assert_eq!(SearchStrategy::BreadthFirst.search(&tree, "14"), Some(14));
//! assert_eq!(SearchStrategy::DepthFirst.search(&tree, "21"), None);
//! print!("{tree}");
//! # Ok::<(), indexed_tree::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod render; // Row-oriented text rendering
pub mod search; // Breadth-first and depth-first search
pub mod tree; // Flat storage and index arithmetic

// Re-exports for convenience
pub use render::{RenderConfig, Renderer};
pub use search::{
    breadth_first_search, depth_first_search, BreadthFirstWalk, DepthFirstWalk, SearchStrategy,
};
pub use tree::{IndexedTree, Label, Relation, Side};

use std::collections::TryReserveError;

use thiserror::Error;

/// Default tree height (15 slots).
pub const DEFAULT_HEIGHT: u32 = 4;

/// Default maximum number of visible characters per label.
pub const DEFAULT_LABEL_WIDTH: usize = 4;

/// Configuration for building an [`IndexedTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Number of levels `H`; capacity is `2^H - 1`
    pub height: u32,

    /// Maximum characters kept per label; longer labels are truncated
    pub label_width: usize,
}

impl TreeConfig {
    /// Configuration for a tree of the given height with default label width
    pub fn new(height: u32) -> Self {
        Self {
            height,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }

    /// Override the label width
    pub fn with_label_width(self, label_width: usize) -> Self {
        Self {
            label_width,
            ..self
        }
    }

    /// Check that the configuration describes a tree that can exist
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.label_width == 0 {
            return Err(TreeError::InvalidConfiguration(
                "label width must be > 0".to_string(),
            ));
        }
        self.capacity().map(|_| ())
    }

    /// Number of slots, `2^height - 1`
    pub fn capacity(&self) -> Result<usize, TreeError> {
        if self.height == 0 {
            return Err(TreeError::InvalidConfiguration(
                "tree height must be > 0".to_string(),
            ));
        }
        tree::capacity_for_height(self.height).ok_or_else(|| {
            TreeError::InvalidConfiguration(format!(
                "tree height {} exceeds the {}-bit index range",
                self.height,
                usize::BITS
            ))
        })
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT)
    }
}

/// Errors that can occur while building or navigating a tree
#[derive(Error, Debug)]
pub enum TreeError {
    /// Backing storage could not be reserved
    #[error("failed to allocate binary tree of {capacity} nodes")]
    Allocation {
        /// Number of slots requested
        capacity: usize,
        /// Reservation failure reported by the allocator
        #[source]
        source: TryReserveError,
    },

    /// A child or parent was requested that does not exist
    #[error("no such node: {relation} of index {index}")]
    NoSuchNode {
        /// Index the lookup started from
        index: usize,
        /// Which neighbour was requested
        relation: Relation,
    },

    /// Configuration values out of range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
