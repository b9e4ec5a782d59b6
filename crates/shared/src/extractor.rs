use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::error::BriefingError;

/// A format-specific byte-to-text conversion.
///
/// Handlers are registered with [`TextExtractor`] and selected by file
/// extension; anything unclaimed falls back to verbatim UTF-8 decoding.
pub trait FormatExtractor: Send + Sync {
    /// Lowercased extensions this handler claims, without the leading dot.
    fn extensions(&self) -> &[&str];

    /// Convert raw document bytes to plain text.
    fn extract(&self, bytes: &[u8]) -> Result<String, BriefingError>;
}

/// PDF text extraction over the full in-memory byte stream.
struct PdfExtractor;

impl FormatExtractor for PdfExtractor {
    fn extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, BriefingError> {
        // pdf-extract returns all page text concatenated in document order.
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| BriefingError::Extraction(format!("PDF parse failed: {e}")))
    }
}

/// Word text extraction: paragraph text in document order, styling dropped.
struct WordExtractor;

impl FormatExtractor for WordExtractor {
    fn extensions(&self) -> &[&str] {
        // Legacy binary .doc is routed here too; the parse fails and
        // surfaces as an extraction error rather than silent empty text.
        &["doc", "docx"]
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, BriefingError> {
        let docx = read_docx(bytes)
            .map_err(|e| BriefingError::Extraction(format!("Word parse failed: {e}")))?;

        let mut paragraphs = Vec::new();
        for child in docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                let mut line = String::new();
                for content in paragraph.children {
                    if let ParagraphChild::Run(run) = content {
                        for piece in run.children {
                            if let RunChild::Text(text) = piece {
                                line.push_str(&text.text);
                            }
                        }
                    }
                }
                paragraphs.push(line);
            }
        }

        Ok(paragraphs.join("\n"))
    }
}

/// Registry of format handlers keyed by file extension.
pub struct TextExtractor {
    handlers: Vec<Box<dyn FormatExtractor>>,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self {
            handlers: vec![Box::new(PdfExtractor), Box::new(WordExtractor)],
        }
    }

    /// Convert an uploaded byte buffer plus its declared filename to plain
    /// text.
    ///
    /// Dispatches on the lowercased extension; unrecognized or missing
    /// extensions decode the bytes as UTF-8 verbatim (lossy). A handler
    /// that cannot parse the buffer is a hard failure — corrupt documents
    /// never degrade to empty text.
    pub fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, BriefingError> {
        if filename.trim().is_empty() {
            return Err(BriefingError::Extraction(
                "uploaded file is missing a name".to_string(),
            ));
        }
        if bytes.is_empty() {
            return Err(BriefingError::Extraction(
                "uploaded file is empty".to_string(),
            ));
        }

        let extension = filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match self
            .handlers
            .iter()
            .find(|h| h.extensions().contains(&extension.as_str()))
        {
            Some(handler) => handler.extract(bytes),
            None => Ok(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_falls_back_to_utf8() {
        let extractor = TextExtractor::new();
        let text = extractor
            .extract(b"Budget review is due Friday.", "notes.txt")
            .unwrap();
        assert_eq!(text, "Budget review is due Friday.");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_utf8() {
        let extractor = TextExtractor::new();
        let text = extractor.extract(b"raw contents", "export.dat").unwrap();
        assert_eq!(text, "raw contents");
    }

    #[test]
    fn test_missing_extension_falls_back_to_utf8() {
        let extractor = TextExtractor::new();
        let text = extractor.extract(b"no extension here", "README").unwrap();
        assert_eq!(text, "no extension here");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let extractor = TextExtractor::new();
        let text = extractor.extract(&[0x68, 0x69, 0xFF], "notes.txt").unwrap();
        assert_eq!(text, "hi\u{FFFD}");
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        let extractor = TextExtractor::new();
        let err = extractor.extract(b"", "notes.txt").unwrap_err();
        assert!(matches!(err, BriefingError::Extraction(_)));
    }

    #[test]
    fn test_missing_filename_is_rejected() {
        let extractor = TextExtractor::new();
        let err = extractor.extract(b"some bytes", "  ").unwrap_err();
        assert!(matches!(err, BriefingError::Extraction(_)));
    }

    #[test]
    fn test_corrupt_pdf_is_a_hard_failure() {
        let extractor = TextExtractor::new();
        let err = extractor.extract(b"not a pdf at all", "report.pdf").unwrap_err();
        assert!(matches!(err, BriefingError::Extraction(_)));
    }

    #[test]
    fn test_corrupt_word_document_is_a_hard_failure() {
        let extractor = TextExtractor::new();
        let err = extractor.extract(b"not a docx either", "minutes.docx").unwrap_err();
        assert!(matches!(err, BriefingError::Extraction(_)));
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        let extractor = TextExtractor::new();
        // Garbage bytes under an uppercase .PDF extension must reach the
        // PDF handler (and fail there), not the UTF-8 fallback.
        let err = extractor.extract(b"garbage", "REPORT.PDF").unwrap_err();
        assert!(matches!(err, BriefingError::Extraction(_)));
    }
}
