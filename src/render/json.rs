//! JSON rendering for word trees.

use crate::error::{Error, Result};
use crate::model::WordTree;

/// Default file name for the downloadable artifact.
pub const ARTIFACT_FILE_NAME: &str = "filtered_words.json";

/// MIME type of the JSON artifact.
pub const ARTIFACT_MIME_TYPE: &str = "application/json";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a word tree to the `{"Page N": {"Paragraph M": [...]}}`
/// structure, keys in document order.
pub fn to_json(tree: &WordTree, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(tree),
        JsonFormat::Compact => serde_json::to_string(tree),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
