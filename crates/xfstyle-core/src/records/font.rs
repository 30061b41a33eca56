//! Font records

use super::Color;

/// A `<font>` entry of the style sheet
///
/// Size, family and charset are kept as the text of their `val` attributes;
/// they are only turned into integers when a style is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontRecord {
    /// Font size in points (`<sz val="11"/>`)
    pub size: String,
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: String,
    /// Font family id (`<family val="2"/>`)
    pub family: String,
    /// Character set id (`<charset val="0"/>`)
    pub charset: String,
    /// Font color
    pub color: Option<Color>,
}

impl FontRecord {
    /// Create a font with a name and size
    pub fn new<S: Into<String>>(name: S, size: u32) -> Self {
        Self {
            size: size.to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the family id
    pub fn with_family(mut self, family: u32) -> Self {
        self.family = family.to_string();
        self
    }

    /// Set the charset id
    pub fn with_charset(mut self, charset: u32) -> Self {
        self.charset = charset.to_string();
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
