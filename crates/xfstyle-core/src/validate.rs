//! Conformance checks
//!
//! The resolver accepts ragged and dangling tables without complaint. These
//! checks report what it tolerated, for callers that want to reject or flag
//! such documents. They never change how a style resolves.

use crate::error::{Error, Result, Section};
use crate::number_format::NumberFormatLookup;
use crate::records::CellFormatRecord;
use crate::table::{Collection, StyleTable};

impl StyleTable {
    /// Check the table, returning the first issue found
    pub fn validate(&self) -> Result<()> {
        match self.conformance_issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Collect every issue in the table
    ///
    /// Issues are reported in table order: declared counts, then the named
    /// format shortfall, then dangling references of direct and named formats,
    /// then unparsable font attributes.
    pub fn conformance_issues(&self) -> Vec<Error> {
        let mut issues = Vec::new();

        check_count(Section::Fonts, &self.fonts, &mut issues);
        check_count(Section::Fills, &self.fills, &mut issues);
        check_count(Section::Borders, &self.borders, &mut issues);
        check_count(Section::CellFormats, &self.cell_formats, &mut issues);
        check_count(Section::NamedCellFormats, &self.named_cell_formats, &mut issues);

        if self.named_cell_formats.len() < self.cell_formats.len() {
            issues.push(Error::MissingNamedFormats {
                named: self.named_cell_formats.len(),
                direct: self.cell_formats.len(),
            });
        }

        self.check_references(Section::CellFormats, &self.cell_formats, &mut issues);
        self.check_references(Section::NamedCellFormats, &self.named_cell_formats, &mut issues);

        for (font_index, font) in self.fonts.iter().enumerate() {
            for (attribute, value) in [
                ("sz", &font.size),
                ("family", &font.family),
                ("charset", &font.charset),
            ] {
                if !value.is_empty() && value.parse::<i32>().is_err() {
                    issues.push(Error::UnparsableFontAttribute {
                        font_index,
                        attribute,
                        value: value.clone(),
                    });
                }
            }
        }

        issues
    }

    /// Check that every direct format's `numFmtId` has a code in `formats`
    pub fn validate_number_formats(&self, formats: &NumberFormatLookup) -> Result<()> {
        for (format_index, xf) in self.cell_formats.iter().enumerate() {
            if !formats.contains(xf.num_fmt_id) {
                return Err(Error::UnknownNumberFormat {
                    format_index,
                    num_fmt_id: xf.num_fmt_id,
                });
            }
        }
        Ok(())
    }

    fn check_references(
        &self,
        section: Section,
        formats: &Collection<CellFormatRecord>,
        issues: &mut Vec<Error>,
    ) {
        for (format_index, xf) in formats.iter().enumerate() {
            let references = [
                ("fontId", xf.font_id, self.fonts.len()),
                ("fillId", xf.fill_id, self.fills.len()),
                ("borderId", xf.border_id, self.borders.len()),
            ];
            for (field, id, len) in references {
                if id as usize >= len {
                    issues.push(Error::DanglingReference {
                        section,
                        format_index,
                        field,
                        id,
                        len,
                    });
                }
            }
        }
    }
}

fn check_count<T>(section: Section, collection: &Collection<T>, issues: &mut Vec<Error>) {
    if collection.count() != collection.len() {
        issues.push(Error::CountMismatch {
            section,
            declared: collection.count(),
            actual: collection.len(),
        });
    }
}
