//! Rendering the word tree to output artifacts.

mod json;

pub use json::{to_json, JsonFormat, ARTIFACT_FILE_NAME, ARTIFACT_MIME_TYPE};
