//! Style sheet tables

use std::slice;

use crate::records::{BorderRecord, CellFormatRecord, FillRecord, FontRecord};

/// Append-only table of style sheet records
///
/// Records are referenced by their 0-based position. Positions stay valid for
/// the lifetime of the collection since nothing is ever removed or reordered.
///
/// Alongside the records the collection keeps the `count` the producer
/// declared for the table. Lookups always bound-check against the actual
/// number of records, never against the declared count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection<T> {
    items: Vec<T>,
    count: usize,
}

impl<T> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
        }
    }

    /// Create a collection with the `count` its producer declared
    ///
    /// `count` is stored as given, even when it disagrees with `items.len()`.
    pub fn with_count(items: Vec<T>, count: usize) -> Self {
        Self { items, count }
    }

    /// Get a record by position
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of records actually held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Declared record count
    pub fn count(&self) -> usize {
        self.count
    }

    /// Iterate over the records in position order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// All records as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Append a record, returning its position
    pub(crate) fn push(&mut self, item: T) -> usize {
        let index = self.items.len();
        self.items.push(item);
        self.count += 1;
        index
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let count = items.len();
        Self { items, count }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        let count = items.len();
        Self { items, count }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// In-memory style sheet
///
/// Holds the font, fill and border tables together with the two parallel cell
/// format tables: direct formats (`cellXfs`), indexed by the style index on a
/// cell, and named style formats (`cellStyleXfs`). The named table may be
/// shorter than the direct one.
///
/// The tables are filled either by a deserializer through the `with_*`
/// constructors, or incrementally through the `add_*` operations in
/// [`crate::builder`]. Resolution only needs `&self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleTable {
    pub(crate) fonts: Collection<FontRecord>,
    pub(crate) fills: Collection<FillRecord>,
    pub(crate) borders: Collection<BorderRecord>,
    pub(crate) cell_formats: Collection<CellFormatRecord>,
    pub(crate) named_cell_formats: Collection<CellFormatRecord>,
}

impl StyleTable {
    /// Create an empty style table
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the font table
    pub fn with_fonts(mut self, fonts: Collection<FontRecord>) -> Self {
        self.fonts = fonts;
        self
    }

    /// Replace the fill table
    pub fn with_fills(mut self, fills: Collection<FillRecord>) -> Self {
        self.fills = fills;
        self
    }

    /// Replace the border table
    pub fn with_borders(mut self, borders: Collection<BorderRecord>) -> Self {
        self.borders = borders;
        self
    }

    /// Replace the direct cell format table (`cellXfs`)
    pub fn with_cell_formats(mut self, cell_formats: Collection<CellFormatRecord>) -> Self {
        self.cell_formats = cell_formats;
        self
    }

    /// Replace the named style format table (`cellStyleXfs`)
    pub fn with_named_cell_formats(
        mut self,
        named_cell_formats: Collection<CellFormatRecord>,
    ) -> Self {
        self.named_cell_formats = named_cell_formats;
        self
    }

    /// Font table
    pub fn fonts(&self) -> &Collection<FontRecord> {
        &self.fonts
    }

    /// Fill table
    pub fn fills(&self) -> &Collection<FillRecord> {
        &self.fills
    }

    /// Border table
    pub fn borders(&self) -> &Collection<BorderRecord> {
        &self.borders
    }

    /// Direct cell format table (`cellXfs`)
    pub fn cell_formats(&self) -> &Collection<CellFormatRecord> {
        &self.cell_formats
    }

    /// Named style format table (`cellStyleXfs`)
    pub fn named_cell_formats(&self) -> &Collection<CellFormatRecord> {
        &self.named_cell_formats
    }

    /// Get a font by id
    pub fn font(&self, id: usize) -> Option<&FontRecord> {
        self.fonts.get(id)
    }

    /// Get a fill by id
    pub fn fill(&self, id: usize) -> Option<&FillRecord> {
        self.fills.get(id)
    }

    /// Get a border by id
    pub fn border(&self, id: usize) -> Option<&BorderRecord> {
        self.borders.get(id)
    }

    /// Get a direct cell format by style index
    pub fn cell_format(&self, index: usize) -> Option<&CellFormatRecord> {
        self.cell_formats.get(index)
    }

    /// Get a named style format by style index
    pub fn named_cell_format(&self, index: usize) -> Option<&CellFormatRecord> {
        self.named_cell_formats.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_push_returns_position() {
        let mut fills: Collection<FillRecord> = Collection::new();
        assert_eq!(fills.push(FillRecord::pattern("none")), 0);
        assert_eq!(fills.push(FillRecord::pattern("gray125")), 1);
        assert_eq!(fills.len(), 2);
        assert_eq!(fills.count(), 2);
        assert_eq!(fills.get(1).map(|f| f.pattern_type.as_str()), Some("gray125"));
        assert_eq!(fills.get(2), None);
    }

    #[test]
    fn test_collection_keeps_declared_count() {
        let borders = Collection::with_count(vec![BorderRecord::new()], 3);
        assert_eq!(borders.len(), 1);
        assert_eq!(borders.count(), 3);
        assert!(borders.get(2).is_none());
    }

    #[test]
    fn test_from_iter_counts_items() {
        let fonts: Collection<FontRecord> =
            (10..13).map(|sz| FontRecord::new("Arial", sz)).collect();
        assert_eq!(fonts.len(), 3);
        assert_eq!(fonts.count(), 3);
        let sizes: Vec<&str> = fonts.iter().map(|f| f.size.as_str()).collect();
        assert_eq!(sizes, ["10", "11", "12"]);
    }

    #[test]
    fn test_table_accessors() {
        let table = StyleTable::new()
            .with_fonts(vec![FontRecord::new("Calibri", 11)].into())
            .with_cell_formats(vec![CellFormatRecord::new().with_font(0)].into());

        assert_eq!(table.font(0).map(|f| f.name.as_str()), Some("Calibri"));
        assert!(table.fill(0).is_none());
        assert!(table.cell_format(0).is_some());
        assert!(table.named_cell_format(0).is_none());
    }

    #[test]
    fn test_table_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StyleTable>();
    }
}
