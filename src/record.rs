//! Record assembly
//!
//! Turns a completed managed object instance into the fields of one CSV row,
//! laid out according to its frozen schema.

use crate::metadata::{ExportDocument, MetadataField};
use crate::parser::Moi;
use crate::schema::{ColumnSet, SchemaMode};

/// Row layout for a schema mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAssembler {
    /// Eight metadata columns followed by the discovered attribute columns
    MetadataPrefix,
    /// Exactly the configured columns; reserved tokens pull from metadata
    Configured,
}

impl RecordAssembler {
    /// Layout used by a schema mode
    pub fn for_mode(mode: SchemaMode) -> Self {
        match mode {
            SchemaMode::Discovery => RecordAssembler::MetadataPrefix,
            SchemaMode::Predefined => RecordAssembler::Configured,
        }
    }

    /// Header fields for a schema
    pub fn header(&self, columns: &ColumnSet) -> Vec<String> {
        match self {
            RecordAssembler::MetadataPrefix => MetadataField::ALL
                .iter()
                .map(|field| field.token().to_string())
                .chain(columns.iter().map(str::to_string))
                .collect(),
            RecordAssembler::Configured => columns.iter().map(str::to_string).collect(),
        }
    }

    /// Row fields for an instance; always as many fields as [`Self::header`]
    pub fn row(&self, doc: &ExportDocument, moi: &Moi, columns: &ColumnSet) -> Vec<String> {
        match self {
            RecordAssembler::MetadataPrefix => MetadataField::ALL
                .iter()
                .map(|&field| doc.get(field).to_string())
                .chain(
                    columns
                        .iter()
                        .map(|column| moi.get(column).unwrap_or_default().to_string()),
                )
                .collect(),
            RecordAssembler::Configured => columns
                .iter()
                .map(|column| match MetadataField::from_token(column) {
                    Some(field) => doc.get(field).to_string(),
                    None => moi.get(column).unwrap_or_default().to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> ExportDocument {
        let mut doc = ExportDocument::new("a.xml");
        doc.capture_syndata(&[("Id".to_string(), "NE=N1".to_string())]);
        doc.date_time = Some("2020-01-01".to_string());
        doc
    }

    #[test]
    fn test_prefix_header_and_row() {
        let columns: ColumnSet = ["A", "B", "C"].into_iter().collect();
        let moi = Moi::of_type("CELL").with("C", "3").with("A", "1");
        let assembler = RecordAssembler::for_mode(SchemaMode::Discovery);

        let header = assembler.header(&columns);
        let row = assembler.row(&document(), &moi, &columns);

        assert_eq!(
            header,
            vec![
                "FILENAME",
                "DATETIME",
                "NODENAME",
                "SYNCDATAFUNCTIONTYPE",
                "SYNCDATAID",
                "SYNCDATAPRODUCTVERSION",
                "SYNCDATANERMVERSION",
                "SYNCDATAOBJID",
                "A",
                "B",
                "C"
            ]
        );
        assert_eq!(row.len(), header.len());
        assert_eq!(&row[..3], &["a.xml", "2020-01-01", "N1"]);
        assert_eq!(&row[3..8], &["", "NE=N1", "", "", ""]);
        // missing B stays in place as an empty field
        assert_eq!(&row[8..], &["1", "", "3"]);
    }

    #[test]
    fn test_configured_columns_interleave_metadata() {
        let columns: ColumnSet = ["CELLID", "NODENAME", "FILENAME", "MISSING"]
            .into_iter()
            .collect();
        let moi = Moi::of_type("CELL").with("CELLID", "7").with("OTHER", "x");
        let assembler = RecordAssembler::for_mode(SchemaMode::Predefined);

        assert_eq!(
            assembler.header(&columns),
            vec!["CELLID", "NODENAME", "FILENAME", "MISSING"]
        );
        assert_eq!(
            assembler.row(&document(), &moi, &columns),
            vec!["7", "N1", "a.xml", ""]
        );
    }

    #[test]
    fn test_reserved_token_wins_over_attribute() {
        let columns: ColumnSet = ["NODENAME"].into_iter().collect();
        let moi = Moi::of_type("CELL").with("NODENAME", "from-attribute");
        let row = RecordAssembler::Configured.row(&document(), &moi, &columns);
        assert_eq!(row, vec!["N1"]);
    }
}
