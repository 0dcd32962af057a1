//! Implicit index arithmetic
//!
//! Node i ↦ children 2i+1, 2i+2 and parent ⌊(i-1)/2⌋
//! Level d ↦ indices [2^d - 1, 2^(d+1) - 1)
//!
//! Nothing here touches storage: every function is pure arithmetic
//! against a capacity.

use std::fmt;
use std::ops::Range;

/// Which child of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Child at 2i+1
    Left,

    /// Child at 2i+2
    Right,
}

impl Side {
    /// Both sides in visiting order
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    #[inline]
    fn offset(self) -> usize {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Neighbour requested by a hard-error lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// A child on the given side
    Child(Side),

    /// The parent
    Parent,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Child(side) => write!(f, "{side} child"),
            Relation::Parent => f.write_str("parent"),
        }
    }
}

/// Capacity of a tree with `height` levels, `None` on overflow
pub fn capacity_for_height(height: u32) -> Option<usize> {
    1usize.checked_shl(height).map(|nodes| nodes - 1)
}

/// Child of `parent` on `side`, or `None` if it falls outside `capacity`
///
/// Absence is the normal answer for a leaf.
#[inline]
pub fn child_index(capacity: usize, parent: usize, side: Side) -> Option<usize> {
    parent
        .checked_mul(2)
        .and_then(|doubled| doubled.checked_add(side.offset()))
        .filter(|&child| child < capacity)
}

/// Parent of `child`, or `None` for the root and for indices outside `capacity`
#[inline]
pub fn parent_index(capacity: usize, child: usize) -> Option<usize> {
    if child == 0 || child >= capacity {
        return None;
    }
    Some((child - 1) / 2)
}

/// Which side of its parent `child` hangs on (`None` for the root)
#[inline]
pub fn side_of(child: usize) -> Option<Side> {
    match child {
        0 => None,
        c if c % 2 == 1 => Some(Side::Left),
        _ => Some(Side::Right),
    }
}

/// Depth of `index` below the root: ⌊log2(index + 1)⌋
///
/// Defined for every `usize`; `usize::MAX` sits at depth `usize::BITS`.
#[inline]
pub fn depth_of(index: usize) -> u32 {
    index.checked_add(1).map_or(usize::BITS, usize::ilog2)
}

/// Index range occupied by level `depth`
///
/// Callers clamp against capacity; the range is exact for full levels.
///
/// # Panics
///
/// If `depth >= usize::BITS`: such a level has no index range.
pub fn level_range(depth: u32) -> Range<usize> {
    assert!(
        depth < usize::BITS,
        "level {depth} exceeds the {}-bit index range",
        usize::BITS
    );
    let start = (1usize << depth) - 1;
    start..(start * 2 + 1)
}
