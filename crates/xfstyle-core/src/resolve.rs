//! Style index resolution
//!
//! Turns the style index recorded on a cell into the effective border, fill,
//! font and number format code. Resolution is total: anything that does not
//! dereference cleanly resolves to the zero value instead of failing.

use crate::number_format::NumberFormatLookup;
use crate::records::{BorderRecord, CellFormatRecord, Color};
use crate::table::StyleTable;

/// Effective presentation of one style index
///
/// `Default` is the zero value returned for indices that do not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedStyle {
    /// Direct or named format asks for the border to be applied
    pub apply_border: bool,
    /// Direct or named format asks for the fill to be applied
    pub apply_fill: bool,
    /// Direct or named format asks for the font to be applied
    pub apply_font: bool,
    pub border: BorderRecord,
    pub fill: ResolvedFill,
    pub font: ResolvedFont,
}

impl ResolvedStyle {
    /// Check if this is the zero value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Fill of a resolved style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedFill {
    pub pattern_type: String,
    pub fg_color: Option<Color>,
    pub bg_color: Option<Color>,
}

/// Font of a resolved style, with numeric attributes parsed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedFont {
    /// Size in points, 0 if absent or not an integer
    pub size: i32,
    pub name: String,
    /// Family id, 0 if absent or not an integer
    pub family: i32,
    /// Charset id, 0 if absent or not an integer
    pub charset: i32,
}

impl StyleTable {
    /// Resolve the border, fill and font of a style index
    ///
    /// Negative and out-of-range indices yield [`ResolvedStyle::default`].
    /// The apply flags are the union of the direct format's flags and those of
    /// the named format at the same index; a missing named format contributes
    /// nothing. Ids that fall outside their table leave that part zero-valued.
    pub fn resolve_style<I: TryInto<usize>>(&self, index: I) -> ResolvedStyle {
        let mut style = ResolvedStyle::default();

        let Some(index) = self.accept_index(index) else {
            return style;
        };
        let Some(xf) = self.cell_formats.get(index) else {
            log::trace!("cellXfs[{index}] accepted by the inclusive bound but absent");
            return style;
        };

        // Some producers (Google Sheets exports among them) write fewer
        // cellStyleXfs than cellXfs.
        let missing = CellFormatRecord::default();
        let named = match self.named_cell_formats.get(index) {
            Some(named) => named,
            None => {
                log::debug!(
                    "no cellStyleXfs entry for style {index} ({} entries), using empty format",
                    self.named_cell_formats.len()
                );
                &missing
            }
        };

        style.apply_border = xf.apply_border || named.apply_border;
        style.apply_fill = xf.apply_fill || named.apply_fill;
        style.apply_font = xf.apply_font || named.apply_font;

        match self.borders.get(xf.border_id as usize) {
            Some(border) => style.border = border.clone(),
            None => log::trace!("style {index}: borderId {} out of range", xf.border_id),
        }

        match self.fills.get(xf.fill_id as usize) {
            Some(fill) => {
                style.fill = ResolvedFill {
                    pattern_type: fill.pattern_type.clone(),
                    fg_color: fill.fg_color.clone(),
                    bg_color: fill.bg_color.clone(),
                };
            }
            None => log::trace!("style {index}: fillId {} out of range", xf.fill_id),
        }

        match self.fonts.get(xf.font_id as usize) {
            Some(font) => {
                style.font = ResolvedFont {
                    size: parse_lenient(&font.size),
                    name: font.name.clone(),
                    family: parse_lenient(&font.family),
                    charset: parse_lenient(&font.charset),
                };
            }
            None => log::trace!("style {index}: fontId {} out of range", xf.font_id),
        }

        style
    }

    /// Resolve the number format code of a style index, lower-cased
    ///
    /// Returns "" when the table has no cell formats, when the index does not
    /// resolve, or when `formats` has no entry for the format's `numFmtId`.
    /// The code is lower-cased so consumers can match date and time patterns
    /// without caring how the producer capitalized them.
    pub fn resolve_number_format<I: TryInto<usize>>(
        &self,
        index: I,
        formats: &NumberFormatLookup,
    ) -> String {
        let Some(index) = self.accept_index(index) else {
            return String::new();
        };

        self.cell_formats
            .get(index)
            .and_then(|xf| formats.format_code(xf.num_fmt_id))
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    /// Convert and bound-check a style index against `cellXfs`
    ///
    /// The upper bound is inclusive: `index == len` is accepted, matching
    /// producers that treat the style count as the last valid index. The
    /// record lookup that follows is still bounds-checked, so such an index
    /// resolves to nothing.
    fn accept_index<I: TryInto<usize>>(&self, index: I) -> Option<usize> {
        let index = index.try_into().ok()?;
        let len = self.cell_formats.len();
        if len == 0 || index > len {
            return None;
        }
        Some(index)
    }
}

/// Parse a textual font attribute, yielding 0 for anything that is not an integer
pub(crate) fn parse_lenient(text: &str) -> i32 {
    text.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{FillRecord, FontRecord, NumberFormatRecord};
    use crate::table::Collection;
    use pretty_assertions::assert_eq;

    fn sample_table() -> StyleTable {
        let mut table = StyleTable::new();
        table.add_font(
            FontRecord::new("Calibri", 11)
                .with_family(2)
                .with_charset(0),
        );
        table.add_font(FontRecord::new("Arial", 14).with_color(Color::new("FFFF0000")));
        table.add_fill(FillRecord::pattern("none"));
        table.add_fill(
            FillRecord::solid(Color::new("FFFFFF00")).with_bg_color(Color::new("FF000000")),
        );
        table.add_border(BorderRecord::new());
        table.add_border(BorderRecord::all("thin").with_bottom("double"));

        table.add_cell_format(CellFormatRecord::new());
        table.add_cell_format(
            CellFormatRecord::new()
                .with_font(1)
                .with_fill(1)
                .with_border(1)
                .with_num_fmt(164),
        );
        table.add_named_cell_format(CellFormatRecord::new());
        table.add_named_cell_format(CellFormatRecord::new());
        table
    }

    #[test]
    fn test_resolve_full_style() {
        let table = sample_table();
        let style = table.resolve_style(1);

        assert_eq!(
            style,
            ResolvedStyle {
                apply_border: true,
                apply_fill: true,
                apply_font: true,
                border: BorderRecord {
                    left: "thin".into(),
                    right: "thin".into(),
                    top: "thin".into(),
                    bottom: "double".into(),
                },
                fill: ResolvedFill {
                    pattern_type: "solid".into(),
                    fg_color: Some(Color::new("FFFFFF00")),
                    bg_color: Some(Color::new("FF000000")),
                },
                font: ResolvedFont {
                    size: 14,
                    name: "Arial".into(),
                    family: 0,
                    charset: 0,
                },
            }
        );
    }

    #[test]
    fn test_resolve_default_format_references_entry_zero() {
        let table = sample_table();
        let style = table.resolve_style(0);

        assert!(!style.apply_border && !style.apply_fill && !style.apply_font);
        assert_eq!(style.font.name, "Calibri");
        assert_eq!(style.font.size, 11);
        assert_eq!(style.font.family, 2);
        assert_eq!(style.fill.pattern_type, "none");
        assert!(style.border.is_empty());
    }

    #[test]
    fn test_negative_index() {
        let table = sample_table();
        assert!(table.resolve_style(-1).is_empty());
        assert!(table.resolve_style(i64::MIN).is_empty());
    }

    #[test]
    fn test_inclusive_upper_bound_resolves_to_nothing() {
        let table = sample_table();
        let len = table.cell_formats().len();
        assert_eq!(table.accept_index(len), Some(len));
        assert_eq!(table.accept_index(len + 1), None);
        assert!(table.resolve_style(len).is_empty());
        assert!(table.resolve_style(len + 1).is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = StyleTable::new();
        assert_eq!(table.accept_index(0usize), None);
        assert!(table.resolve_style(0).is_empty());
    }

    #[test]
    fn test_apply_flags_are_union() {
        let mut table = StyleTable::new();
        table.add_cell_format(CellFormatRecord {
            apply_border: true,
            ..CellFormatRecord::default()
        });
        table.add_named_cell_format(CellFormatRecord {
            apply_font: true,
            ..CellFormatRecord::default()
        });

        let style = table.resolve_style(0);
        assert!(style.apply_border);
        assert!(style.apply_font);
        assert!(!style.apply_fill);
    }

    #[test]
    fn test_ids_out_of_range_leave_parts_zero() {
        let table = sample_table().with_cell_formats(Collection::from(vec![CellFormatRecord {
            border_id: 2,
            fill_id: 7,
            font_id: u32::MAX,
            apply_border: true,
            ..CellFormatRecord::default()
        }]));

        let style = table.resolve_style(0);
        assert!(style.apply_border);
        assert_eq!(style.border, BorderRecord::default());
        assert_eq!(style.fill, ResolvedFill::default());
        assert_eq!(style.font, ResolvedFont::default());
    }

    #[test]
    fn test_font_attributes_parse_leniently() {
        let font = FontRecord {
            size: "10.5".into(),
            name: "Verdana".into(),
            family: String::new(),
            charset: "x".into(),
            color: None,
        };
        let table = StyleTable::new()
            .with_fonts(vec![font].into())
            .with_cell_formats(vec![CellFormatRecord::new().with_font(0)].into());

        let style = table.resolve_style(0);
        assert_eq!(
            style.font,
            ResolvedFont {
                size: 0,
                name: "Verdana".into(),
                family: 0,
                charset: 0,
            }
        );
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_lenient("11"), 11);
        assert_eq!(parse_lenient("+12"), 12);
        assert_eq!(parse_lenient("-3"), -3);
        assert_eq!(parse_lenient(""), 0);
        assert_eq!(parse_lenient(" 11"), 0);
        assert_eq!(parse_lenient("99999999999"), 0);
    }

    #[test]
    fn test_resolve_number_format() {
        let table = sample_table();
        let formats: NumberFormatLookup =
            std::iter::once(NumberFormatRecord::new(164, "YYYY-MM-DD")).collect();

        assert_eq!(table.resolve_number_format(1, &formats), "yyyy-mm-dd");
        // numFmtId 0 is not in the lookup
        assert_eq!(table.resolve_number_format(0, &formats), "");
        assert_eq!(table.resolve_number_format(2, &formats), "");
        assert_eq!(table.resolve_number_format(-1, &formats), "");
    }

    #[test]
    fn test_resolve_number_format_with_builtins() {
        let table = sample_table();
        let formats = NumberFormatLookup::with_builtins();
        assert_eq!(table.resolve_number_format(0, &formats), "general");
        assert_eq!(table.resolve_number_format(1, &formats), "");
    }

    #[test]
    fn test_resolve_number_format_without_cell_formats() {
        let table = StyleTable::new();
        let formats = NumberFormatLookup::with_builtins();
        for index in [-1i64, 0, 1, 164] {
            assert_eq!(table.resolve_number_format(index, &formats), "");
        }
    }
}
