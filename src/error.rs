//! Error types for the studyplan2xml library.
//!
//! Only *fatal* conditions surface as [`ConvertError`]: bad input files,
//! every extraction backend failing, output I/O, invalid configuration.
//! The line grammar itself is heuristic by design and never raises —
//! malformed headers lose their semester attribute, unrecognised spans are
//! dropped, and the counts of what was dropped are reported through
//! [`crate::output::ParseStats`] instead of an error channel.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the studyplan2xml library.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── Extraction errors ─────────────────────────────────────────────────
    /// Every candidate extraction backend failed or was unavailable.
    ///
    /// Fatal for this document; the conversion produces nothing. The chain
    /// is strictly sequential try-then-fallback, so `attempted` lists the
    /// backends in the order they ran and `last_error` is the failure of
    /// the final one.
    #[error(
        "Text extraction failed: every backend errored (tried: {})\nLast error: {last_error}",
        attempted.join(", ")
    )]
    ExtractionUnavailable {
        attempted: Vec<String>,
        last_error: String,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output artifact.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not stage in-memory PDF bytes in a temporary file for the
    /// extraction backends, which need a file-system path.
    #[error("Failed to stage PDF bytes in a temporary file: {source}")]
    TempFileFailed {
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
