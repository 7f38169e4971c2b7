//! CSV field escaping
//!
//! Output tables use a deliberately small quoting rule set so that values
//! copied from the export survive unchanged apart from the quoting itself:
//!
//! - a field containing `"` has every quote doubled and is wrapped in quotes
//! - otherwise a field containing `,` is wrapped in quotes
//! - anything else is written as-is (no trimming, no newline translation)

use std::borrow::Cow;
use std::io::{self, Write};

/// Escape a single field for CSV output
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains('"') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else if field.contains(',') {
        Cow::Owned(format!("\"{}\"", field))
    } else {
        Cow::Borrowed(field)
    }
}

/// Encode a full record as one CSV line, including the trailing newline
pub fn encode_record<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&escape_field(field.as_ref()));
    }
    line.push('\n');
    line
}

/// Write a record to `writer` as one CSV line
pub fn write_record<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> io::Result<()> {
    writer.write_all(encode_record(fields).as_bytes())
}
