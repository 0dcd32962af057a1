//! Node label representation
//!
//! A node carries nothing but a short label.
//! Identity is positional: the tree index, never a pointer.

use std::fmt;

/// Bounded-width node label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(Box<str>);

impl Label {
    /// Build a label keeping at most `width` characters of `text`
    ///
    /// Truncation always lands on a character boundary.
    pub fn truncated(text: &str, width: usize) -> Self {
        let end = text
            .char_indices()
            .nth(width)
            .map_or(text.len(), |(byte, _)| byte);
        Self(text[..end].into())
    }

    /// Label text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Visible width in characters
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }

    /// Exact byte-for-byte comparison against a search target
    #[inline]
    pub fn matches(&self, target: &str) -> bool {
        self.0.as_bytes() == target.as_bytes()
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_keeps_prefix() {
        assert_eq!(Label::truncated("12345", 4).as_str(), "1234");
        assert_eq!(Label::truncated("7", 4).as_str(), "7");
        assert_eq!(Label::truncated("", 4).width(), 0);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let label = Label::truncated("ééééé", 2);
        assert_eq!(label.as_str(), "éé");
        assert_eq!(label.width(), 2);
    }

    #[test]
    fn test_matching_is_exact() {
        let label = Label::truncated("14", 4);
        assert!(label.matches("14"));
        assert!(!label.matches("1"));
        assert!(!label.matches("14 "));
        assert_eq!(label, "14");
    }
}
