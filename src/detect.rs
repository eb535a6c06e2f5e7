//! PDF format detection.
//!
//! Used by callers that want a cheap pre-flight check before running the
//! pipeline. [`crate::acquire::acquire`] itself does not pre-validate:
//! whatever the parsing and rasterization backends reject is rejected by
//! them, not by a separate gate.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g. "1.7"

/// Detect the PDF version from the first bytes of a file.
///
/// Returns `Err(Error::UnknownFormat)` when the data does not start with
/// a PDF header.
pub fn detect_version(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version).to_string();
    if !is_valid_version(&version) {
        return Err(Error::UnknownFormat);
    }

    Ok(version)
}

fn is_valid_version(version: &str) -> bool {
    let chars: Vec<char> = version.chars().collect();
    chars.len() == 3 && chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}

/// Check if bytes look like a PDF document.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_version(data).is_ok()
}

/// Check if a file looks like a PDF document.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut header = [0u8; 16];
    let mut reader = BufReader::new(file);
    if reader.read_exact(&mut header).is_err() {
        return false;
    }
    is_pdf_bytes(&header)
}
