//! Whole-value serialization of content into final file text

use crate::content::Content;
use crate::error::Result;
use crate::format::Format;

/// Serialize a content value in the given format.
///
/// JSON output is pretty-printed and terminated by exactly one newline.
/// YAML output starts with a `---` document marker and renders block style.
/// Text output is the identity on raw text; structured values fall back to
/// a generic stringification with no stable contract.
pub fn resolve(content: &Content, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(content.to_text()),
        Format::Json => {
            let rendered = match content {
                Content::Text(text) => serde_json::to_string_pretty(text)?,
                Content::Data(value) => serde_json::to_string_pretty(value)?,
            };
            Ok(format!("{rendered}\n"))
        }
        Format::Yaml => {
            // serde_yaml omits the document marker; prepend it so the output
            // is a complete YAML document. to_string already ends in `\n`.
            let rendered = match content {
                Content::Text(text) => serde_yaml::to_string(text)?,
                Content::Data(value) => serde_yaml::to_string(value)?,
            };
            Ok(format!("---\n{rendered}"))
        }
    }
}
