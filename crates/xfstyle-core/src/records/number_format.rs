//! Number format records

/// A `<numFmt>` entry: a format code registered under an id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormatRecord {
    /// Id referenced by a cell format's `numFmtId`
    pub num_fmt_id: u32,
    /// Format code (e.g., "yyyy-mm-dd", "0.00%")
    pub format_code: String,
}

impl NumberFormatRecord {
    /// Create a number format record
    pub fn new<S: Into<String>>(num_fmt_id: u32, format_code: S) -> Self {
        Self {
            num_fmt_id,
            format_code: format_code.into(),
        }
    }
}
