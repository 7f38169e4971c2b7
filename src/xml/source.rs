use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{ParseError, Token};

/// Read buffer used when opening export files from disk
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Pull-based token source over an XML byte stream
pub struct TokenSource<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    depth: usize,
}

impl TokenSource<BufReader<File>> {
    /// Open an export file for streaming
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::with_capacity(DEFAULT_INPUT_BUFFER_SIZE, file);
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> TokenSource<R> {
    /// Create a token source from any buffered reader
    pub fn new(reader: R) -> Self {
        let mut xml_reader = Reader::from_reader(reader);
        // Leaf values keep their surrounding whitespace
        xml_reader.config_mut().trim_text(false);
        // `<x/>` arrives as an open/close pair
        xml_reader.config_mut().expand_empty_elements = true;

        Self {
            reader: xml_reader,
            buf: Vec::new(),
            depth: 0,
        }
    }

    /// Read the next structural token, `None` at end of input
    ///
    /// Input that ends while elements are still open is an
    /// [`ParseError::UnexpectedEof`], so a truncated export never passes
    /// for a complete one.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        loop {
            self.buf.clear();
            let event = self.reader.read_event_into(&mut self.buf)?;
            let decoder = self.reader.decoder();

            let token = match event {
                Event::Start(ref e) => {
                    self.depth += 1;
                    Token::Open {
                        name: std::str::from_utf8(e.local_name().as_ref())?.to_string(),
                        attributes: collect_attributes(e, decoder)?,
                    }
                }
                Event::End(ref e) => {
                    self.depth = self.depth.saturating_sub(1);
                    Token::Close {
                        name: std::str::from_utf8(e.local_name().as_ref())?.to_string(),
                    }
                }
                Event::Text(ref e) => {
                    let text = e.unescape()?;
                    if text.trim().is_empty() {
                        continue;
                    }
                    Token::Text(text.into_owned())
                }
                Event::CData(ref e) => {
                    let text = decoder
                        .decode(e)
                        .map_err(|err| ParseError::EncodingError(err.to_string()))?;
                    if text.trim().is_empty() {
                        continue;
                    }
                    Token::Text(text.into_owned())
                }
                Event::Comment(ref e) => {
                    let text = decoder
                        .decode(e)
                        .map_err(|err| ParseError::EncodingError(err.to_string()))?;
                    Token::Comment(text.into_owned())
                }
                Event::Eof if self.depth > 0 => {
                    let open = std::mem::take(&mut self.depth);
                    return Err(ParseError::UnexpectedEof { open });
                }
                Event::Eof => return Ok(None),
                _ => continue,
            };

            return Ok(Some(token));
        }
    }

    /// Iterate over the remaining tokens
    pub fn tokens(self) -> TokenIterator<R> {
        TokenIterator { source: self }
    }
}

/// Iterator over the tokens of an export file
pub struct TokenIterator<R: BufRead> {
    source: TokenSource<R>,
}

impl<R: BufRead> Iterator for TokenIterator<R> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.source.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Collect attributes of a start tag as (local name, value) pairs
fn collect_attributes(e: &BytesStart, decoder: Decoder) -> Result<Vec<(String, String)>, ParseError> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ParseError::XmlError(quick_xml::Error::from(e)))?;
        let key = std::str::from_utf8(attr.key.local_name().as_ref())?.to_string();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}
