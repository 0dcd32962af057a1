//! Row-oriented text rendering
//!
//! One line per level. Within a level of n nodes the row is split into
//! n + 1 equal gaps of `width / (n + 1)` columns and node c (1-based)
//! starts at column `c * gap`. Everything else is fill.
//!
//! Display only: there is no parser back from the text.

use std::fmt;

use crate::tree::IndexedTree;
use crate::TreeError;

/// Default row width in columns
pub const DEFAULT_ROW_WIDTH: usize = 127;

/// Default background character
pub const DEFAULT_FILL: char = '_';

/// Rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Requested row width; widened when the deepest level would not fit
    pub width: usize,

    /// Background character
    pub fill: char,

    /// Character written before every row, if any
    pub border: Option<char>,
}

impl RenderConfig {
    /// Configuration with the given row width and default characters
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Check the configuration can produce output
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.width == 0 {
            return Err(TreeError::InvalidConfiguration(
                "row width must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROW_WIDTH,
            fill: DEFAULT_FILL,
            border: Some('|'),
        }
    }
}

/// Renders an [`IndexedTree`] level by level
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer, rejecting a zero-width configuration
    pub fn new(config: RenderConfig) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Rendering parameters
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Row width actually used for `tree`
    ///
    /// The deepest level needs `(n + 1) * (label_width + 1)` columns for its
    /// labels to stay apart; narrower requests are widened to that.
    pub fn effective_width(&self, tree: &IndexedTree) -> usize {
        let deepest = tree.levels().last().map_or(0, <[_]>::len);
        let label_width = tree.max_label_width().max(1);
        self.config.width.max((deepest + 1) * (label_width + 1))
    }

    /// One string per level, root first
    pub fn render_lines(&self, tree: &IndexedTree) -> Vec<String> {
        let width = self.effective_width(tree);
        tree.levels()
            .map(|row| {
                let spacing = width / (row.len() + 1);
                let mut buffer = vec![self.config.fill; width];
                for (slot, label) in row.iter().enumerate() {
                    let start = (slot + 1) * spacing;
                    for (column, ch) in (start..width).zip(label.as_str().chars()) {
                        buffer[column] = ch;
                    }
                }
                self.config.border.into_iter().chain(buffer).collect::<String>()
            })
            .collect()
    }

    /// The whole tree, one newline-terminated line per level
    pub fn render(&self, tree: &IndexedTree) -> String {
        self.render_lines(tree)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }

    /// Stream the rendering into any text sink
    pub fn write_to<W: fmt::Write>(&self, tree: &IndexedTree, out: &mut W) -> fmt::Result {
        for line in self.render_lines(tree) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
