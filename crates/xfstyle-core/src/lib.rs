//! # xfstyle-core
//!
//! Cell format resolution for spreadsheet style sheets.
//!
//! A cell records a numeric style index. That index points into the style sheet's
//! direct cell formats (`cellXfs`), which in turn reference fonts, fills and borders
//! by id. This crate provides:
//! - [`StyleTable`] - The style sheet tables, each an append-only [`Collection`]
//! - [`ResolvedStyle`] - The effective border, fill and font of a style index
//! - [`NumberFormatLookup`] - Number format codes keyed by `numFmtId`
//! - [`StyleCache`] - Per-index memo of resolved styles
//!
//! Resolution never fails. Out-of-range indices, missing named formats and
//! unparsable font attributes all resolve to zero values. Use
//! [`StyleTable::validate`] to find out what was tolerated.
//!
//! ## Example
//!
//! ```rust
//! use xfstyle_core::{BorderRecord, CellFormatRecord, NumberFormatLookup, StyleTable};
//!
//! let mut table = StyleTable::new();
//! let border_id = table.add_border(BorderRecord::new().with_left("thin"));
//! let index = table.add_cell_format(
//!     CellFormatRecord::new()
//!         .with_border(border_id as u32)
//!         .with_num_fmt(14),
//! );
//!
//! let style = table.resolve_style(index);
//! assert!(style.apply_border);
//! assert_eq!(style.border.left, "thin");
//!
//! let formats = NumberFormatLookup::with_builtins();
//! assert_eq!(table.resolve_number_format(index, &formats), "mm-dd-yy");
//! ```

pub mod builder;
pub mod cache;
pub mod error;
pub mod number_format;
pub mod records;
pub mod resolve;
pub mod table;
pub mod validate;

// Re-exports for convenience
pub use cache::StyleCache;
pub use error::{Error, Result, Section};
pub use number_format::NumberFormatLookup;
pub use records::{
    AlignmentRecord, BorderRecord, CellFormatRecord, Color, FillRecord, FontRecord,
    NumberFormatRecord,
};
pub use resolve::{ResolvedFill, ResolvedFont, ResolvedStyle};
pub use table::{Collection, StyleTable};

/// First `numFmtId` available for custom number formats; lower ids are built-in
pub const FIRST_CUSTOM_NUM_FMT_ID: u32 = 164;
