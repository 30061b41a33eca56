//! Append operations for authoring style sheets
//!
//! Every operation appends one record and returns the position it was given.
//! That position is what a cell (or a named style) stores to reference the
//! record later. Nothing is ever removed or updated in place, so returned
//! positions never go stale; a style sheet is rebuilt rather than edited.
//!
//! No deduplication happens here. Callers that want each distinct record once
//! must check for an existing entry before appending.

use crate::records::{BorderRecord, CellFormatRecord, FillRecord, FontRecord};
use crate::table::StyleTable;

impl StyleTable {
    /// Append a font, returning its font id
    pub fn add_font(&mut self, font: FontRecord) -> usize {
        self.fonts.push(font)
    }

    /// Append a fill, returning its fill id
    pub fn add_fill(&mut self, fill: FillRecord) -> usize {
        self.fills.push(fill)
    }

    /// Append a border, returning its border id
    pub fn add_border(&mut self, border: BorderRecord) -> usize {
        self.borders.push(border)
    }

    /// Append a direct cell format (`cellXfs`), returning the style index
    /// cells use to reference it
    pub fn add_cell_format(&mut self, format: CellFormatRecord) -> usize {
        self.cell_formats.push(format)
    }

    /// Append a named style format (`cellStyleXfs`), returning its index
    pub fn add_named_cell_format(&mut self, format: CellFormatRecord) -> usize {
        self.named_cell_formats.push(format)
    }
}
