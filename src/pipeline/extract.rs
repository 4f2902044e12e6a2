//! PDF text extraction: a prioritized chain of interchangeable backends.
//!
//! No single Rust PDF library reads every curriculum PDF in the wild —
//! `pdf-extract` handles fonts and encodings well but rejects some
//! generator quirks, while `lopdf`'s content-stream extraction is cruder
//! but more tolerant. Rather than racing them, backends run strictly in
//! priority order and the first success wins; only when every backend has
//! failed does the chain report [`ConvertError::ExtractionUnavailable`].
//!
//! Each backend exposes one capability: PDF bytes in, raw text lines out.
//! Everything downstream is backend-agnostic.

use crate::config::BackendKind;
use crate::error::ConvertError;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A single backend's failure. Wrapped into
/// [`ConvertError::ExtractionUnavailable`] only once the whole chain is
/// exhausted.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("pdf-extract: {0}")]
    PdfExtract(#[from] pdf_extract::OutputError),

    #[error("lopdf: {0}")]
    Lopdf(#[from] lopdf::Error),
}

/// One replaceable extraction capability: turn a PDF file into raw lines.
pub trait TextExtractor {
    /// Stable backend name for logs and error reports.
    fn name(&self) -> &'static str;

    /// Extract the document's text as an ordered line sequence.
    fn extract_lines(&self, path: &Path) -> Result<Vec<String>, BackendError>;
}

/// Backend built on the `pdf-extract` crate.
pub struct PdfExtractBackend;

impl TextExtractor for PdfExtractBackend {
    fn name(&self) -> &'static str {
        BackendKind::PdfExtract.name()
    }

    fn extract_lines(&self, path: &Path) -> Result<Vec<String>, BackendError> {
        let text = pdf_extract::extract_text(path)?;
        Ok(split_lines(&text))
    }
}

/// Backend built on `lopdf`'s content-stream text extraction.
pub struct LopdfBackend;

impl TextExtractor for LopdfBackend {
    fn name(&self) -> &'static str {
        BackendKind::Lopdf.name()
    }

    fn extract_lines(&self, path: &Path) -> Result<Vec<String>, BackendError> {
        let doc = lopdf::Document::load(path)?;
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        let text = doc.extract_text(&pages)?;
        Ok(split_lines(&text))
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn instantiate(kind: BackendKind) -> Box<dyn TextExtractor> {
    match kind {
        BackendKind::PdfExtract => Box::new(PdfExtractBackend),
        BackendKind::Lopdf => Box::new(LopdfBackend),
    }
}

/// Run the backend chain: try each backend in order, return the first
/// successful line sequence.
///
/// # Errors
/// [`ConvertError::ExtractionUnavailable`] when every backend failed,
/// listing the backends in the order they ran.
pub fn extract_lines(path: &Path, backends: &[BackendKind]) -> Result<Vec<String>, ConvertError> {
    let mut attempted = Vec::with_capacity(backends.len());
    let mut last_error = String::new();

    for &kind in backends {
        let backend = instantiate(kind);
        debug!("trying extraction backend '{}'", backend.name());
        match backend.extract_lines(path) {
            Ok(lines) => {
                info!(
                    "backend '{}' extracted {} raw line(s) from {}",
                    backend.name(),
                    lines.len(),
                    path.display()
                );
                return Ok(lines);
            }
            Err(e) => {
                warn!("backend '{}' failed: {e}", backend.name());
                attempted.push(backend.name().to_string());
                last_error = e.to_string();
            }
        }
    }

    Err(ConvertError::ExtractionUnavailable {
        attempted,
        last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_reports_all_attempted_backends() {
        // Not a PDF, so both backends fail and the chain is exhausted.
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"not a pdf at all").unwrap();

        let err = extract_lines(
            tmp.path(),
            &[BackendKind::PdfExtract, BackendKind::Lopdf],
        )
        .unwrap_err();

        match err {
            ConvertError::ExtractionUnavailable {
                attempted,
                last_error,
            } => {
                assert_eq!(attempted, vec!["pdf-extract", "lopdf"]);
                assert!(!last_error.is_empty());
            }
            other => panic!("expected ExtractionUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn empty_chain_is_immediately_unavailable() {
        let err = extract_lines(Path::new("/nonexistent.pdf"), &[]).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::ExtractionUnavailable { attempted, .. } if attempted.is_empty()
        ));
    }

    #[test]
    fn split_lines_preserves_order() {
        assert_eq!(split_lines("a\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(split_lines(""), Vec::<String>::new());
    }
}
