//! Pipeline options and configuration.

/// Options for running the extraction pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Rasterization resolution for the OCR path, in dots per inch.
    pub dpi: u32,

    /// Language passed to the OCR engine (tesseract language code).
    pub ocr_language: String,

    /// Whether to parallelize per-page OCR and per-paragraph filtering.
    /// Output ordering is positional and unaffected by this flag.
    pub parallel: bool,
}

impl PipelineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rasterization resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the OCR language code.
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.ocr_language = language.into();
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            dpi: 300,
            ocr_language: "eng".to_string(),
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PipelineOptions::default();
        assert_eq!(options.dpi, 300);
        assert_eq!(options.ocr_language, "eng");
        assert!(options.parallel);
    }

    #[test]
    fn test_options_builder() {
        let options = PipelineOptions::new()
            .with_dpi(150)
            .with_ocr_language("deu")
            .sequential();

        assert_eq!(options.dpi, 150);
        assert_eq!(options.ocr_language, "deu");
        assert!(!options.parallel);
    }
}
