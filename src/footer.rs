//! Footer summary table
//!
//! `fileFooter.csv` gets one row per export file: the file and node name plus
//! whichever of `label`, `ExportResult` and `dateTime` the footer element
//! carries. The first footer of a run fixes the table header; later footers
//! are rendered against it.

use log::warn;

use crate::metadata::{ExportDocument, MetadataField, FOOTER_TAG};
use crate::output::{OutputError, OutputMultiplexer};

/// Name of the footer summary table
pub const FOOTER_TABLE: &str = FOOTER_TAG;

/// Footer attributes copied into the summary table
pub const FOOTER_ATTRIBUTES: [&str; 3] = ["label", "ExportResult", "dateTime"];

/// One footer summary row with its own column names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterRecord {
    fields: Vec<(String, String)>,
}

impl FooterRecord {
    /// Build the record for a footer element
    ///
    /// Footer attributes appear in encounter order; other attributes are
    /// ignored.
    pub fn from_element(doc: &ExportDocument, attributes: &[(String, String)]) -> Self {
        let mut fields = vec![
            (
                MetadataField::FileName.token().to_string(),
                doc.get(MetadataField::FileName).to_string(),
            ),
            (
                MetadataField::NodeName.token().to_string(),
                doc.get(MetadataField::NodeName).to_string(),
            ),
        ];
        fields.extend(
            attributes
                .iter()
                .filter(|(key, _)| FOOTER_ATTRIBUTES.contains(&key.as_str()))
                .cloned(),
        );
        Self { fields }
    }

    /// Column names of this record
    pub fn header(&self) -> Vec<String> {
        self.fields.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Values of this record
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Values rearranged to match `header`
    ///
    /// Columns the record lacks are empty. Returns the names of record fields
    /// that have no column in `header`.
    pub fn aligned_to(&self, header: &[String]) -> (Vec<String>, Vec<&str>) {
        let row = header
            .iter()
            .map(|column| {
                self.fields
                    .iter()
                    .find(|(name, _)| name == column)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default()
            })
            .collect();
        let unmatched = self
            .fields
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| !header.iter().any(|column| column == name))
            .collect();
        (row, unmatched)
    }
}

/// Append a footer record to the footer summary table
pub fn write_footer(output: &mut OutputMultiplexer, record: &FooterRecord) -> Result<(), OutputError> {
    let row = match output.header(FOOTER_TABLE) {
        Some(header) => {
            let (row, unmatched) = record.aligned_to(header);
            if !unmatched.is_empty() {
                warn!(
                    "Footer attributes {} are not in the {} header and were not written",
                    unmatched.join(", "),
                    FOOTER_TABLE
                );
            }
            row
        }
        None => record.values(),
    };
    output.write_row(FOOTER_TABLE, || record.header(), &row)
}
