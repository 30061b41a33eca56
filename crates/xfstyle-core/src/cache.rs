//! Per-index memo of resolved styles

use ahash::AHashMap;

use crate::resolve::ResolvedStyle;
use crate::table::StyleTable;

/// Caches [`StyleTable::resolve_style`] results by style index
///
/// Resolution is deterministic, and a sheet typically repeats a handful of
/// style indices across many cells. The cache borrows the table, so the table
/// cannot be appended to while the cache is alive.
#[derive(Debug)]
pub struct StyleCache<'a> {
    table: &'a StyleTable,
    styles: AHashMap<usize, ResolvedStyle>,
    empty: ResolvedStyle,
}

impl<'a> StyleCache<'a> {
    /// Create an empty cache over a table
    pub fn new(table: &'a StyleTable) -> Self {
        Self {
            table,
            styles: AHashMap::with_capacity(table.cell_formats().len().min(64)),
            empty: ResolvedStyle::default(),
        }
    }

    /// Resolve a style index, reusing an earlier result when there is one
    pub fn get<I: TryInto<usize>>(&mut self, index: I) -> &ResolvedStyle {
        let Ok(index) = index.try_into() else {
            return &self.empty;
        };

        let table = self.table;
        self.styles
            .entry(index)
            .or_insert_with(|| table.resolve_style(index))
    }

    /// The table this cache resolves against
    pub fn table(&self) -> &'a StyleTable {
        self.table
    }

    /// Number of distinct indices resolved so far
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if nothing has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Drop all cached results
    pub fn clear(&mut self) {
        self.styles.clear();
    }
}
