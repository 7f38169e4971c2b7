/// Errors that can occur while reading tokens from an export file
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Error parsing XML
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// UTF-8 encoding error in an element or attribute name
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Text could not be decoded with the document encoding
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Input ended before every open element was closed
    #[error("Unexpected end of input with {open} element(s) still open")]
    UnexpectedEof {
        /// Number of elements left open
        open: usize,
    },
}
