//! Error types for xfstyle-core
//!
//! Resolution itself never fails. These errors are only produced by the
//! conformance checker in [`crate::validate`].

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// A table of the style sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `<fonts>`
    Fonts,
    /// `<fills>`
    Fills,
    /// `<borders>`
    Borders,
    /// `<cellXfs>`
    CellFormats,
    /// `<cellStyleXfs>`
    NamedCellFormats,
}

impl Section {
    /// Element name of the table in the style sheet
    pub fn element_name(self) -> &'static str {
        match self {
            Section::Fonts => "fonts",
            Section::Fills => "fills",
            Section::Borders => "borders",
            Section::CellFormats => "cellXfs",
            Section::NamedCellFormats => "cellStyleXfs",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

/// Style sheet anomalies that the resolver tolerates silently
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Declared `count` attribute disagrees with the number of entries
    #[error("{section} declares count {declared} but holds {actual} entries")]
    CountMismatch {
        section: Section,
        declared: usize,
        actual: usize,
    },

    /// A cell format references a font, fill or border that does not exist
    #[error("{section}[{format_index}] {field} {id} out of bounds (len: {len})")]
    DanglingReference {
        section: Section,
        format_index: usize,
        field: &'static str,
        id: u32,
        len: usize,
    },

    /// Fewer named formats than direct formats
    #[error("cellStyleXfs holds {named} entries, fewer than the {direct} cellXfs entries")]
    MissingNamedFormats { named: usize, direct: usize },

    /// A numeric font attribute that resolves to 0 because it does not parse
    #[error("fonts[{font_index}] {attribute} {value:?} is not an integer")]
    UnparsableFontAttribute {
        font_index: usize,
        attribute: &'static str,
        value: String,
    },

    /// A cell format references a number format id the lookup does not know
    #[error("cellXfs[{format_index}] numFmtId {num_fmt_id} has no format code")]
    UnknownNumberFormat { format_index: usize, num_fmt_id: u32 },
}
