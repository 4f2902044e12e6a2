//! Configuration types for PDF-to-XML conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The output directory is an explicit
//! per-call value here rather than process-wide mutable state, so two
//! conversions with different sinks can coexist in one process and a config
//! can be logged or diffed to explain why two runs differ.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An available PDF text-extraction backend.
///
/// Backends are interchangeable: each turns PDF bytes into a raw line
/// sequence, and the core grammar has no knowledge of which one ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    /// The `pdf-extract` crate: full text extraction with font/encoding
    /// handling. Primary backend.
    PdfExtract,
    /// The `lopdf` crate's content-stream text extraction. Lighter-weight
    /// fallback for documents `pdf-extract` chokes on.
    Lopdf,
}

impl BackendKind {
    /// Stable name used in logs and in `ExtractionUnavailable` reports.
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::PdfExtract => "pdf-extract",
            BackendKind::Lopdf => "lopdf",
        }
    }
}

/// Configuration for one PDF-to-XML conversion.
///
/// Built via [`ConversionConfig::builder()`] or [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use studyplan2xml::{BackendKind, ConversionConfig};
///
/// let config = ConversionConfig::builder()
///     .backends(vec![BackendKind::Lopdf])
///     .output_dir("out/processed")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Extraction backends in priority order. The first backend that
    /// succeeds wins; the next is tried only on failure. Default:
    /// `[PdfExtract, Lopdf]`.
    pub backends: Vec<BackendKind>,

    /// Directory the output artifacts (`.txt`, `.xml`, `.structured.xml`)
    /// are written into by [`crate::convert::convert_to_files`]. Created on
    /// demand. Default: `data/processed`.
    pub output_dir: PathBuf,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            backends: vec![BackendKind::PdfExtract, BackendKind::Lopdf],
            output_dir: PathBuf::from("data/processed"),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    /// Replace the backend priority list.
    pub fn backends(mut self, backends: Vec<BackendKind>) -> Self {
        self.config.backends = backends;
        self
    }

    /// Set the output directory for file artifacts.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, ConvertError> {
        if self.config.backends.is_empty() {
            return Err(ConvertError::InvalidConfig(
                "At least one extraction backend is required".into(),
            ));
        }
        let mut seen = Vec::new();
        for b in &self.config.backends {
            if seen.contains(b) {
                return Err(ConvertError::InvalidConfig(format!(
                    "Backend '{}' listed more than once",
                    b.name()
                )));
            }
            seen.push(*b);
        }
        Ok(self.config)
    }
}
