//! Export document metadata
//!
//! Each export file carries a few facts about the network element it was
//! taken from: the `syndata` element names the element and its software
//! versions, the `fileFooter` element records when the export was taken.
//! These values are copied into every row so rows from different files can
//! be told apart after the tables are merged.

use std::fmt;

/// Element carrying the network element identity and versions
pub const SYNDATA_TAG: &str = "syndata";

/// Element carrying the export time and result
pub const FOOTER_TAG: &str = "fileFooter";

/// Metadata columns, in the order of the implicit row prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    /// Base name of the export file
    FileName,
    /// Export date-time from the footer
    DateTime,
    /// Node name derived from the sync id
    NodeName,
    /// `FunctionType` of `syndata`
    FunctionType,
    /// `Id` of `syndata`
    SyncId,
    /// `productversion` of `syndata`
    ProductVersion,
    /// `nermversion` of `syndata`
    RmVersion,
    /// `objId` of `syndata`
    ObjectId,
}

impl MetadataField {
    /// Every field in prefix order
    pub const ALL: [MetadataField; 8] = [
        MetadataField::FileName,
        MetadataField::DateTime,
        MetadataField::NodeName,
        MetadataField::FunctionType,
        MetadataField::SyncId,
        MetadataField::ProductVersion,
        MetadataField::RmVersion,
        MetadataField::ObjectId,
    ];

    /// Reserved column token
    pub fn token(&self) -> &'static str {
        match self {
            MetadataField::FileName => "FILENAME",
            MetadataField::DateTime => "DATETIME",
            MetadataField::NodeName => "NODENAME",
            MetadataField::FunctionType => "SYNCDATAFUNCTIONTYPE",
            MetadataField::SyncId => "SYNCDATAID",
            MetadataField::ProductVersion => "SYNCDATAPRODUCTVERSION",
            MetadataField::RmVersion => "SYNCDATANERMVERSION",
            MetadataField::ObjectId => "SYNCDATAOBJID",
        }
    }

    /// Field for a reserved column token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.token() == token)
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Node name from a sync id: everything after the first `=`, or the whole id
pub fn node_name_from_id(id: &str) -> &str {
    id.split_once('=').map(|(_, rest)| rest).unwrap_or(id)
}

/// Metadata of one export file
///
/// Unset fields render as empty CSV fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportDocument {
    /// Base name of the export file
    pub file_name: String,
    /// `FunctionType` attribute of `syndata`
    pub function_type: Option<String>,
    /// `Id` attribute of `syndata`
    pub sync_id: Option<String>,
    /// Node name derived from the sync id
    pub node_name: Option<String>,
    /// `productversion` attribute of `syndata`
    pub product_version: Option<String>,
    /// `nermversion` attribute of `syndata`
    pub rm_version: Option<String>,
    /// `objId` attribute of `syndata`
    pub object_id: Option<String>,
    /// `dateTime` attribute of `fileFooter`
    pub date_time: Option<String>,
    /// `label` attribute of `fileFooter`
    pub label: Option<String>,
    /// `ExportResult` attribute of `fileFooter`
    pub export_result: Option<String>,
}

impl ExportDocument {
    /// Metadata for a file, nothing captured yet
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Capture the attributes of the `syndata` element
    pub fn capture_syndata(&mut self, attributes: &[(String, String)]) {
        for (key, value) in attributes {
            match key.as_str() {
                "FunctionType" => self.function_type = Some(value.clone()),
                "Id" => {
                    self.node_name = Some(node_name_from_id(value).to_string());
                    self.sync_id = Some(value.clone());
                }
                "productversion" => self.product_version = Some(value.clone()),
                "nermversion" => self.rm_version = Some(value.clone()),
                "objId" => self.object_id = Some(value.clone()),
                _ => {}
            }
        }
    }

    /// Capture the attributes of the `fileFooter` element
    pub fn capture_footer(&mut self, attributes: &[(String, String)]) {
        for (key, value) in attributes {
            match key.as_str() {
                "dateTime" => self.date_time = Some(value.clone()),
                "label" => self.label = Some(value.clone()),
                "ExportResult" => self.export_result = Some(value.clone()),
                _ => {}
            }
        }
    }

    /// Value of a metadata column
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::FileName => &self.file_name,
            MetadataField::DateTime => self.date_time.as_deref().unwrap_or_default(),
            MetadataField::NodeName => self.node_name.as_deref().unwrap_or_default(),
            MetadataField::FunctionType => self.function_type.as_deref().unwrap_or_default(),
            MetadataField::SyncId => self.sync_id.as_deref().unwrap_or_default(),
            MetadataField::ProductVersion => self.product_version.as_deref().unwrap_or_default(),
            MetadataField::RmVersion => self.rm_version.as_deref().unwrap_or_default(),
            MetadataField::ObjectId => self.object_id.as_deref().unwrap_or_default(),
        }
    }
}
