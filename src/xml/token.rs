/// A structural token read from an export file
///
/// Element names and attribute keys carry the local name only; namespace
/// prefixes such as `spec:` are stripped by the token source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Element open tag with its attributes in document order
    Open {
        /// Local element name
        name: String,
        /// Attribute (local name, unescaped value) pairs
        attributes: Vec<(String, String)>,
    },

    /// Element close tag
    Close {
        /// Local element name
        name: String,
    },

    /// Character data (text or CDATA) that is not whitespace-only
    Text(String),

    /// Comment body, without the `<!--` and `-->` markers
    Comment(String),
}

impl Token {
    /// Open token without attributes
    pub fn open(name: impl Into<String>) -> Self {
        Token::Open {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Open token with attributes
    pub fn open_with<K, V>(name: impl Into<String>, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Token::Open {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Close token
    pub fn close(name: impl Into<String>) -> Self {
        Token::Close { name: name.into() }
    }

    /// Text token
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text(text.into())
    }

    /// Comment token
    pub fn comment(text: impl Into<String>) -> Self {
        Token::Comment(text.into())
    }

    /// Element name for open and close tokens
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Open { name, .. } | Token::Close { name } => Some(name),
            Token::Text(_) | Token::Comment(_) => None,
        }
    }

    /// Look up an attribute value on an open token
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            Token::Open { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}
