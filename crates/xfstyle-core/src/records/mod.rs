//! Style sheet table records
//!
//! These mirror the entries of a style sheet as the deserialization layer hands
//! them over:
//! - [`FontRecord`] - `<font>` entries, numeric attributes kept as text
//! - [`FillRecord`] - `<fill>` pattern fills
//! - [`BorderRecord`] - `<border>` edge line styles
//! - [`CellFormatRecord`] - `<xf>` entries of `cellXfs` and `cellStyleXfs`
//! - [`NumberFormatRecord`] - `<numFmt>` entries
//! - [`Color`] - RGB hex colors

mod border;
mod cell_format;
mod color;
mod fill;
mod font;
mod number_format;

pub use border::BorderRecord;
pub use cell_format::{AlignmentRecord, CellFormatRecord};
pub use color::Color;
pub use fill::FillRecord;
pub use font::FontRecord;
pub use number_format::NumberFormatRecord;
