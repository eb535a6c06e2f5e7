//! Rasterize-and-recognize fallback for scanned documents.
//!
//! Pages are rendered to PNG with `pdftoppm` and recognized with
//! `tesseract`, both invoked as subprocesses. Failures on this path are
//! fatal for the acquisition call: there is no further fallback.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{PageText, RawLayout};
use crate::options::PipelineOptions;

const RASTERIZER: &str = "pdftoppm";
const OCR_ENGINE: &str = "tesseract";

/// Blank-line boundary between OCR paragraph blocks.
static BLOCK_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid block boundary regex"));

/// Acquire a layout by rasterizing every page at `options.dpi` and
/// running OCR on each page image independently.
pub(crate) fn acquire_scanned(data: &[u8], options: &PipelineOptions) -> Result<RawLayout> {
    for tool in [RASTERIZER, OCR_ENGINE] {
        if !command_available(tool) {
            return Err(Error::Ocr(format!(
                "required OCR tool '{}' is not available",
                tool
            )));
        }
    }

    let mut pdf_file = tempfile::Builder::new().suffix(".pdf").tempfile()?;
    pdf_file.write_all(data)?;
    pdf_file.flush()?;

    let image_dir = tempfile::tempdir()?;
    rasterize(pdf_file.path(), image_dir.path(), options.dpi)?;
    let images = page_images(image_dir.path())?;

    let texts = if options.parallel {
        images
            .par_iter()
            .map(|path| recognize(path, &options.ocr_language))
            .collect::<Result<Vec<_>>>()?
    } else {
        images
            .iter()
            .map(|path| recognize(path, &options.ocr_language))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(texts
        .iter()
        .enumerate()
        .map(|(i, text)| PageText::new(i as u32 + 1, split_blocks(text)))
        .collect())
}

/// Render every page of the document to `<dir>/page-N.png`.
fn rasterize(pdf_path: &Path, dir: &Path, dpi: u32) -> Result<()> {
    let output = Command::new(RASTERIZER)
        .arg("-png")
        .arg("-r")
        .arg(dpi.to_string())
        .arg(pdf_path)
        .arg(dir.join("page"))
        .output()
        .map_err(|e| Error::Rasterize(format!("failed to execute {}: {}", RASTERIZER, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Rasterize(format!(
            "{} returned non-zero exit status: {}",
            RASTERIZER,
            stderr.trim()
        )));
    }

    Ok(())
}

/// Collect rendered page images in page order.
///
/// `pdftoppm` numbers output files `page-1.png`, `page-2.png`, ...
/// (zero-padded on multi-digit documents), so sorting by the numeric
/// suffix recovers document order.
fn page_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images: Vec<(u32, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("png") {
            continue;
        }
        if let Some(number) = page_number_from_path(&path) {
            images.push((number, path));
        }
    }
    images.sort_by_key(|(number, _)| *number);
    Ok(images.into_iter().map(|(_, path)| path).collect())
}

fn page_number_from_path(path: &Path) -> Option<u32> {
    path.file_stem()?
        .to_str()?
        .rsplit('-')
        .next()?
        .parse()
        .ok()
}

/// Run OCR on one page image.
fn recognize(image: &Path, language: &str) -> Result<String> {
    let output = Command::new(OCR_ENGINE)
        .arg(image)
        .arg("stdout")
        .arg("-l")
        .arg(language)
        .output()
        .map_err(|e| Error::Ocr(format!("failed to execute {}: {}", OCR_ENGINE, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Ocr(format!(
            "{} failed on {}: {}",
            OCR_ENGINE,
            image.display(),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).replace('\u{0000}', ""))
}

fn command_available(program: &str) -> bool {
    Command::new(program).arg("--version").output().is_ok()
}

/// Split recognized text into trimmed, non-empty blank-line-delimited
/// blocks.
pub(crate) fn split_blocks(text: &str) -> Vec<String> {
    BLOCK_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
