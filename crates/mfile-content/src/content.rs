//! Content values accepted by the resolver

use serde_json::Value;

/// Desired file content: raw text or an arbitrary structured value.
///
/// Structured values are carried as `serde_json::Value` with
/// insertion-ordered mappings, so serialized output follows the order keys
/// were supplied in.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Verbatim text
    Text(String),
    /// Structured data (nested mappings, sequences, scalars)
    Data(Value),
}

impl Content {
    /// Whether this content is raw text
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Text form of the content.
    ///
    /// Raw text is returned as-is. Structured values fall back to a generic
    /// stringification (currently their compact JSON form) with no stable
    /// byte-for-byte contract.
    pub(crate) fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Data(value) => value.to_string(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}
