//! Error types for lexpdf.

use std::io;
use thiserror::Error;

/// Result type alias for lexpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a document.
///
/// Note that text-layer extraction failures never surface through the
/// public API: the acquisition stage swallows them and falls back to
/// OCR. Only OCR-path failures (and rendering/IO problems) reach the
/// caller.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error extracting text content from the PDF text layer.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error rasterizing pages to bitmaps.
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// Error running optical character recognition.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Error serializing the output artifact.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a valid PDF");

        let err = Error::Ocr("tesseract not found".to_string());
        assert_eq!(err.to_string(), "OCR error: tesseract not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
