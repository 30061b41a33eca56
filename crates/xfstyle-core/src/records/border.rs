//! Border records

/// A `<border>` entry of the style sheet
///
/// Each edge holds its line style tag ("thin", "dashed", ...). An empty tag
/// means the edge has no line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderRecord {
    /// Left edge
    pub left: String,
    /// Right edge
    pub right: String,
    /// Top edge
    pub top: String,
    /// Bottom edge
    pub bottom: String,
}

impl BorderRecord {
    /// Create a border with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four edges to the same line style
    pub fn all<S: Into<String>>(style: S) -> Self {
        let style = style.into();
        Self {
            left: style.clone(),
            right: style.clone(),
            top: style.clone(),
            bottom: style,
        }
    }

    /// Set the left edge
    pub fn with_left<S: Into<String>>(mut self, style: S) -> Self {
        self.left = style.into();
        self
    }

    /// Set the right edge
    pub fn with_right<S: Into<String>>(mut self, style: S) -> Self {
        self.right = style.into();
        self
    }

    /// Set the top edge
    pub fn with_top<S: Into<String>>(mut self, style: S) -> Self {
        self.top = style.into();
        self
    }

    /// Set the bottom edge
    pub fn with_bottom<S: Into<String>>(mut self, style: S) -> Self {
        self.bottom = style.into();
        self
    }

    /// Check if all edges are empty
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
            && self.right.is_empty()
            && self.top.is_empty()
            && self.bottom.is_empty()
    }
}
