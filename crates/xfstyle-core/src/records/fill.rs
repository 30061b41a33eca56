//! Fill records

use super::Color;

/// A `<fill>` entry of the style sheet (pattern fills only)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillRecord {
    /// Pattern type tag (e.g., "solid", "none", "gray125")
    pub pattern_type: String,
    /// Foreground color
    pub fg_color: Option<Color>,
    /// Background color
    pub bg_color: Option<Color>,
}

impl FillRecord {
    /// Create a fill with the given pattern and no colors
    pub fn pattern<S: Into<String>>(pattern_type: S) -> Self {
        Self {
            pattern_type: pattern_type.into(),
            fg_color: None,
            bg_color: None,
        }
    }

    /// Create a solid fill with the given foreground color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern_type: "solid".to_string(),
            fg_color: Some(color),
            bg_color: None,
        }
    }

    /// Set the foreground color
    pub fn with_fg_color(mut self, color: Color) -> Self {
        self.fg_color = Some(color);
        self
    }

    /// Set the background color
    pub fn with_bg_color(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        self.pattern_type.is_empty() || self.pattern_type == "none"
    }
}
