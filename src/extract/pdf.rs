//! Transcript text extraction
//!
//! Thin wrapper over the `pdf-extract` decoder: the transcript becomes one
//! concatenated text blob, page order preserved, no layout reconstruction
//! and no OCR. A scanned-image PDF yields little or no text, which the
//! parser downstream simply reports as an empty record set.

use std::panic;
use std::path::Path;
use thiserror::Error;

/// PDF magic bytes
const PDF_MAGIC: &[u8] = b"%PDF";

/// Errors that can occur when turning a PDF into text
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read PDF file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Not a PDF file (missing %PDF header)")]
    NotAPdf,

    #[error("Failed to extract text: {0}")]
    Extraction(#[from] pdf_extract::OutputError),

    #[error("PDF decoder crashed on a malformed document")]
    DecoderPanic,
}

/// Extract the full text of a transcript PDF as a single blob
///
/// The file must contain machine-readable text for anything downstream to
/// match. The magic-byte check keeps obviously-wrong files out of the
/// decoder, and the unwind guard keeps the decoder's panics on malformed
/// documents from tearing down the whole process.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;

    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ExtractError::NotAPdf);
    }

    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
        Ok(result) => Ok(result?),
        Err(_) => Err(ExtractError::DecoderPanic),
    }
}
