//! Color representation

use std::fmt;

/// An RGB color as written in the style sheet (`rgb="FFFF0000"`)
///
/// The hex text is kept verbatim, including any alpha prefix. A color that was
/// not set is `Option::<Color>::None` at the use site, never an empty `Color`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(String);

impl Color {
    /// Opaque black
    pub fn black() -> Self {
        Color("FF000000".to_string())
    }

    /// Opaque white
    pub fn white() -> Self {
        Color("FFFFFFFF".to_string())
    }

    /// Wrap an RGB/ARGB hex string (e.g., "FF0000" or "FFFF0000")
    pub fn new<S: Into<String>>(rgb: S) -> Self {
        Color(rgb.into())
    }

    /// Wrap a hex string, treating an empty value as "not set"
    pub fn from_attr(rgb: &str) -> Option<Self> {
        if rgb.is_empty() {
            None
        } else {
            Some(Color(rgb.to_string()))
        }
    }

    /// The hex text as stored
    pub fn rgb(&self) -> &str {
        &self.0
    }

    /// Decode into `(a, r, g, b)` components
    ///
    /// Accepts 6 digit RGB (alpha defaults to 0xFF) and 8 digit ARGB, with or
    /// without a leading `#`. Returns `None` for anything else.
    pub fn components(&self) -> Option<(u8, u8, u8, u8)> {
        let hex = self.0.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some((0xFF, r, g, b))
            }
            8 => {
                let a = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let r = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let g = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let b = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some((a, r, g, b))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(rgb: &str) -> Self {
        Color::new(rgb)
    }
}

impl From<String> for Color {
    fn from(rgb: String) -> Self {
        Color(rgb)
    }
}
