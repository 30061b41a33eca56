//! Cell format (`<xf>`) records

/// A cell format entry, shared by `cellXfs` (direct formats) and
/// `cellStyleXfs` (named style formats)
///
/// Ids index into the style sheet's font, fill and border tables. An id is
/// only meaningful while it is inside its table's bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFormatRecord {
    pub apply_alignment: bool,
    pub apply_border: bool,
    pub apply_font: bool,
    pub apply_fill: bool,
    pub apply_protection: bool,
    /// Index into the border table
    pub border_id: u32,
    /// Index into the fill table
    pub fill_id: u32,
    /// Index into the font table
    pub font_id: u32,
    /// Key into the number format lookup (not a table position)
    pub num_fmt_id: u32,
    /// Alignment, carried through but never resolved
    pub alignment: Option<AlignmentRecord>,
}

impl CellFormatRecord {
    /// Create a cell format referencing entry 0 of every table, applying nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference a font and mark it applied
    pub fn with_font(mut self, font_id: u32) -> Self {
        self.font_id = font_id;
        self.apply_font = true;
        self
    }

    /// Reference a fill and mark it applied
    pub fn with_fill(mut self, fill_id: u32) -> Self {
        self.fill_id = fill_id;
        self.apply_fill = true;
        self
    }

    /// Reference a border and mark it applied
    pub fn with_border(mut self, border_id: u32) -> Self {
        self.border_id = border_id;
        self.apply_border = true;
        self
    }

    /// Reference a number format id
    pub fn with_num_fmt(mut self, num_fmt_id: u32) -> Self {
        self.num_fmt_id = num_fmt_id;
        self
    }

    /// Attach alignment and mark it applied
    pub fn with_alignment(mut self, alignment: AlignmentRecord) -> Self {
        self.alignment = Some(alignment);
        self.apply_alignment = true;
        self
    }
}

/// The `<alignment>` child of an `<xf>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentRecord {
    /// Horizontal anchor tag (e.g., "left", "center")
    pub horizontal: String,
    /// Vertical anchor tag (e.g., "top", "center")
    pub vertical: String,
    /// Indent level
    pub indent: u32,
    /// Text rotation in degrees (255 for vertical text)
    pub text_rotation: u32,
    /// Wrap text
    pub wrap_text: bool,
    /// Shrink to fit
    pub shrink_to_fit: bool,
}

impl AlignmentRecord {
    /// Create an alignment with every attribute unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal anchor
    pub fn with_horizontal<S: Into<String>>(mut self, horizontal: S) -> Self {
        self.horizontal = horizontal.into();
        self
    }

    /// Set the vertical anchor
    pub fn with_vertical<S: Into<String>>(mut self, vertical: S) -> Self {
        self.vertical = vertical.into();
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_applies_nothing() {
        let xf = CellFormatRecord::new();
        assert!(!xf.apply_border && !xf.apply_fill && !xf.apply_font);
        assert_eq!((xf.border_id, xf.fill_id, xf.font_id, xf.num_fmt_id), (0, 0, 0, 0));
        assert!(xf.alignment.is_none());
    }

    #[test]
    fn test_with_sets_apply_flags() {
        let xf = CellFormatRecord::new()
            .with_font(2)
            .with_fill(3)
            .with_alignment(AlignmentRecord::new().with_horizontal("center"));
        assert!(xf.apply_font);
        assert!(xf.apply_fill);
        assert!(!xf.apply_border);
        assert!(xf.apply_alignment);
        assert_eq!(xf.font_id, 2);
        assert_eq!(xf.fill_id, 3);
    }
}
