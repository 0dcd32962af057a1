//! Fixed-capacity binary tree stored as a flat array
//!
//! Key property: level-order layout.
//! Slot i's children sit at 2i+1 and 2i+2, so the array is
//! already sorted by depth and, within a level, left to right.
//!
//! Storage is reserved once, fallibly, and never resized.

mod index;
mod node;

pub use index::{
    capacity_for_height, child_index, depth_of, level_range, parent_index, side_of, Relation,
    Side,
};
pub use node::Label;

use std::fmt;
use std::ops::Index;

use tracing::debug;

use crate::render::Renderer;
use crate::{TreeConfig, TreeError};

/// Binary tree of fixed height backed by one flat allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedTree {
    /// Level-order labels, `len == capacity`
    labels: Vec<Label>,

    /// Construction parameters
    config: TreeConfig,
}

impl IndexedTree {
    /// Create a tree whose slots are labeled with their own index
    pub fn new(config: TreeConfig) -> Result<Self, TreeError> {
        Self::with_initializer(config, |index| index.to_string())
    }

    /// Create a tree, labeling slot `i` with `init(i)`
    ///
    /// Labels longer than `config.label_width` are truncated.
    pub fn with_initializer<F, S>(config: TreeConfig, init: F) -> Result<Self, TreeError>
    where
        F: Fn(usize) -> S,
        S: AsRef<str>,
    {
        config.validate()?;
        let capacity = config.capacity()?;

        let mut labels = Vec::new();
        labels
            .try_reserve_exact(capacity)
            .map_err(|source| TreeError::Allocation { capacity, source })?;
        labels.extend(
            (0..capacity).map(|index| Label::truncated(init(index).as_ref(), config.label_width)),
        );

        debug!(height = config.height, capacity, "binary tree initialized");
        Ok(Self { labels, config })
    }

    /// Total number of slots, `2^height - 1`
    #[inline]
    pub fn capacity(&self) -> usize {
        self.labels.len()
    }

    /// Number of levels
    #[inline]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Construction parameters
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Label at `index`, if it lies within the tree
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    /// All labels in level order
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Child index of `parent` on `side`; `None` means `parent` is a leaf
    #[inline]
    pub fn child_index(&self, parent: usize, side: Side) -> Option<usize> {
        child_index(self.capacity(), parent, side)
    }

    /// Parent index of `child`; `None` only for the root or out-of-range input
    #[inline]
    pub fn parent_index(&self, child: usize) -> Option<usize> {
        parent_index(self.capacity(), child)
    }

    /// Label of the child of `parent` on `side`
    ///
    /// Unlike [`child_index`](Self::child_index), a missing child is an error:
    /// use this when the caller expects the child to exist.
    pub fn get_child(&self, parent: usize, side: Side) -> Result<&Label, TreeError> {
        self.child_index(parent, side)
            .map(|child| &self.labels[child])
            .ok_or(TreeError::NoSuchNode {
                index: parent,
                relation: Relation::Child(side),
            })
    }

    /// Label of the parent of `child`; errors for the root
    pub fn get_parent(&self, child: usize) -> Result<&Label, TreeError> {
        self.parent_index(child)
            .map(|parent| &self.labels[parent])
            .ok_or(TreeError::NoSuchNode {
                index: child,
                relation: Relation::Parent,
            })
    }

    /// Rows of the tree, root first, each left to right
    pub fn levels(&self) -> impl ExactSizeIterator<Item = &[Label]> + '_ {
        (0..self.config.height).map(move |depth| &self.labels[level_range(depth)])
    }

    /// Longest label in the tree, in characters
    pub fn max_label_width(&self) -> usize {
        self.labels.iter().map(Label::width).max().unwrap_or(0)
    }

    /// Release the tree's storage in a single step
    ///
    /// Consumes `self`; the tree cannot be touched afterwards.
    ///
    /// ```compile_fail
    /// use indexed_tree::{IndexedTree, TreeConfig};
    ///
    /// let tree = IndexedTree::new(TreeConfig::default()).unwrap();
    /// tree.destroy();
    /// tree.capacity();
    /// ```
    pub fn destroy(self) {
        debug!(capacity = self.capacity(), "binary tree released");
        drop(self.labels);
    }

    /// Consume the tree, returning its labels in level order
    ///
    /// ```
    /// use indexed_tree::{IndexedTree, TreeConfig};
    ///
    /// let labels = IndexedTree::new(TreeConfig::new(2)).unwrap().into_labels();
    /// assert_eq!(labels.len(), 3);
    /// ```
    ///
    /// The tree is gone once its labels are taken:
    ///
    /// ```compile_fail
    /// use indexed_tree::{IndexedTree, TreeConfig};
    ///
    /// let tree = IndexedTree::new(TreeConfig::default()).unwrap();
    /// let labels = tree.into_labels();
    /// tree.capacity();
    /// ```
    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }
}

impl Index<usize> for IndexedTree {
    type Output = Label;

    fn index(&self, index: usize) -> &Label {
        &self.labels[index]
    }
}

impl fmt::Display for IndexedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::default().write_to(self, f)
    }
}
