// src/convert/mod.rs
use std::io::Read;

use crate::utils::error::ConvertError;

/// Document-to-text collaborator. The pipeline only depends on this seam;
/// callers may swap in their own converter (e.g. an OCR service).
pub trait TextConverter: Send + Sync {
    /// Extracts raw text from the document bytes.
    /// Fails with `ConvertError::UnsupportedFormat` for any extension other
    /// than `.pdf`/`.docx`/`.doc`.
    fn extract_text(&self, bytes: &[u8], filename: &str) -> Result<String, ConvertError>;
}

/// Default converter: PDF via pdf-extract, DOCX via the OOXML container.
/// Legacy `.doc` is treated the same as `.docx` for extraction purposes.
pub struct DocumentTextConverter;

impl TextConverter for DocumentTextConverter {
    fn extract_text(&self, bytes: &[u8], filename: &str) -> Result<String, ConvertError> {
        match file_extension(filename).as_deref() {
            Some("pdf") => pdf_text(bytes),
            Some("docx") | Some("doc") => docx_text(bytes),
            Some(other) => Err(ConvertError::UnsupportedFormat(other.to_string())),
            None => Err(ConvertError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Lowercased extension of a filename, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// MIME type forwarded to the remote service for a given filename.
pub fn mime_for(filename: &str) -> &'static str {
    match file_extension(filename).as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("doc") => "application/msword",
        _ => "application/octet-stream",
    }
}

fn pdf_text(bytes: &[u8]) -> Result<String, ConvertError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ConvertError::Pdf(e.to_string()))
}

/// Reads `word/document.xml` out of the OOXML zip container and flattens
/// the `w:t` text runs, one line per `w:p` paragraph.
fn docx_text(bytes: &[u8]) -> Result<String, ConvertError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| ConvertError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ConvertError::Docx(e.to_string()))?
        .read_to_string(&mut xml)?;

    let document =
        roxmltree::Document::parse(&xml).map_err(|e| ConvertError::Docx(e.to_string()))?;

    let mut text = String::new();
    for paragraph in document
        .descendants()
        .filter(|n| n.tag_name().name() == "p")
    {
        for run in paragraph
            .descendants()
            .filter(|n| n.tag_name().name() == "t")
        {
            if let Some(t) = run.text() {
                text.push_str(t);
            }
        }
        text.push('\n');
    }

    Ok(text)
}
