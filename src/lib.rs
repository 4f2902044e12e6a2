//! # studyplan2xml
//!
//! Convert curriculum study-plan PDFs into structured XML.
//!
//! ## Why this crate?
//!
//! Curriculum PDFs are laid out for humans: block headings, per-semester
//! sections, and course rows whose title and numbers come out of text
//! extraction as separate, noisy lines in reading order. This crate turns
//! that unstructured line stream back into a validated hierarchy — blocks
//! containing sections containing disciplines with credits, hours and a
//! semester — using a small heuristic line grammar, and renders the result
//! as escaped XML for downstream services to serve or load.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input      validate the local file (%PDF magic bytes)
//!  ├─ 2. Extract    backend chain: pdf-extract, then lopdf on failure
//!  ├─ 3. Normalize  strip NBSPs, drop glyph noise, collapse blanks
//!  ├─ 4. Parse      single-pass state machine → StudyPlan tree
//!  └─ 5. Serialize  <document> wrapper + nested <study_plan> XML
//! ```
//!
//! Everything after extraction is pure, synchronous and single-threaded:
//! one call builds one tree to completion, then hands it read-only to the
//! serializer. The parser never fails — unrecognised spans are dropped and
//! counted in [`ParseStats`] instead.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use studyplan2xml::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let output = convert("study_plan.pdf", &config)?;
//!     println!("{}", output.structured_xml);
//!     eprintln!("{} disciplines parsed", output.stats.disciplines);
//!     Ok(())
//! }
//! ```
//!
//! Pre-extracted lines (e.g. in tests, or when another component already ran
//! extraction) skip the PDF entirely:
//!
//! ```rust
//! use studyplan2xml::convert_lines;
//!
//! let output = convert_lines(&["Машинное обучение", "5", "144", "2"]);
//! assert_eq!(output.stats.disciplines, 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `studyplan2xml` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! studyplan2xml = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod plan;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{BackendKind, ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, convert_bytes, convert_lines, convert_to_files};
pub use error::ConvertError;
pub use output::{ConversionOutput, ParseStats, WrittenArtifacts};
pub use plan::{Block, Discipline, Section, StudyPlan};
