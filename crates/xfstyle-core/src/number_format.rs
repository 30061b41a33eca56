//! Number format lookup
//!
//! Cell formats reference number formats by `numFmtId`, not by position. The
//! lookup maps those ids to their [`NumberFormatRecord`]. It is kept apart from
//! [`crate::StyleTable`] and passed to
//! [`crate::StyleTable::resolve_number_format`] on each call.

use ahash::AHashMap;

use crate::records::NumberFormatRecord;
use crate::FIRST_CUSTOM_NUM_FMT_ID;

/// Well-known built-in number formats (ids below 164)
const BUILTIN_FORMATS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// Number format records keyed by `numFmtId`
#[derive(Debug, Clone, Default)]
pub struct NumberFormatLookup {
    formats: AHashMap<u32, NumberFormatRecord>,
}

impl NumberFormatLookup {
    /// Create an empty lookup
    ///
    /// Every id is unknown, so every number format resolves to "".
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lookup seeded with the well-known built-in formats
    ///
    /// Documents usually reference built-in ids without declaring them in
    /// `<numFmts>`. Custom records inserted afterwards override a built-in id.
    pub fn with_builtins() -> Self {
        BUILTIN_FORMATS
            .iter()
            .map(|&(id, code)| NumberFormatRecord::new(id, code))
            .collect()
    }

    /// Insert a record, replacing any earlier record with the same id
    pub fn insert(&mut self, record: NumberFormatRecord) -> Option<NumberFormatRecord> {
        self.formats.insert(record.num_fmt_id, record)
    }

    /// Register a custom format code under the next free custom id
    ///
    /// Returns the existing id if the code is already registered.
    pub fn add_custom<S: Into<String>>(&mut self, format_code: S) -> u32 {
        let format_code = format_code.into();
        if let Some(existing) = self
            .formats
            .values()
            .find(|r| r.num_fmt_id >= FIRST_CUSTOM_NUM_FMT_ID && r.format_code == format_code)
        {
            return existing.num_fmt_id;
        }

        let id = self.next_custom_id();
        self.formats.insert(id, NumberFormatRecord::new(id, format_code));
        id
    }

    /// Next id that [`NumberFormatLookup::add_custom`] would assign
    pub fn next_custom_id(&self) -> u32 {
        self.formats
            .keys()
            .copied()
            .filter(|&id| id >= FIRST_CUSTOM_NUM_FMT_ID)
            .max()
            .map_or(FIRST_CUSTOM_NUM_FMT_ID, |id| id.saturating_add(1))
    }

    /// Get the record for an id
    pub fn get(&self, num_fmt_id: u32) -> Option<&NumberFormatRecord> {
        self.formats.get(&num_fmt_id)
    }

    /// Format code for an id, as written (not lower-cased)
    pub fn format_code(&self, num_fmt_id: u32) -> Option<&str> {
        self.get(num_fmt_id).map(|r| r.format_code.as_str())
    }

    /// Check if an id has a record
    pub fn contains(&self, num_fmt_id: u32) -> bool {
        self.formats.contains_key(&num_fmt_id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Check if the lookup has no records
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Iterate over all records, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &NumberFormatRecord> {
        self.formats.values()
    }
}

impl FromIterator<NumberFormatRecord> for NumberFormatLookup {
    fn from_iter<I: IntoIterator<Item = NumberFormatRecord>>(iter: I) -> Self {
        let mut lookup = Self::new();
        lookup.extend(iter);
        lookup
    }
}

impl Extend<NumberFormatRecord> for NumberFormatLookup {
    fn extend<I: IntoIterator<Item = NumberFormatRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
