//! Conversion entry points.
//!
//! [`convert_lines`] is the pure core: normalized lines in, three artifacts
//! out, no I/O and no failure path. [`convert`] wraps it with input
//! resolution and the extraction backend chain; [`convert_to_files`]
//! additionally writes the artifacts to disk with atomic renames so a
//! crashed run never leaves a consumer reading a half-written file.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::output::{ConversionOutput, WrittenArtifacts};
use crate::pipeline::{extract, input, normalize, parse, serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Convert an already-extracted raw line sequence.
///
/// This is the whole core pipeline — normalize, parse, serialize — as one
/// pure, deterministic, synchronous call. It cannot fail: the grammar is
/// heuristic and degrades to dropped spans, reported in `stats`.
pub fn convert_lines<S: AsRef<str>>(raw_lines: &[S]) -> ConversionOutput {
    let lines = normalize::normalize_lines(raw_lines);
    debug!(
        "normalized {} raw line(s) down to {}",
        raw_lines.len(),
        lines.len()
    );

    let (plan, stats) = parse::parse_lines(&lines);

    let document_xml = serialize::document_xml(&lines);
    let structured_xml = serialize::structured_xml(&plan);
    let text = normalize::to_text(&lines);

    ConversionOutput {
        text,
        document_xml,
        structured_xml,
        plan,
        stats,
    }
}

/// Convert a PDF file to the three text artifacts.
///
/// # Errors
/// Fatal errors only: bad input file ([`ConvertError::FileNotFound`],
/// [`ConvertError::NotAPdf`], …) or every extraction backend failing
/// ([`ConvertError::ExtractionUnavailable`]). Parsing itself never errors.
pub fn convert(
    pdf_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let pdf_path = input::resolve_input(pdf_path.as_ref())?;
    info!("converting {}", pdf_path.display());

    let raw_lines = extract::extract_lines(&pdf_path, &config.backends)?;
    let output = convert_lines(&raw_lines);

    info!(
        "parsed {} block(s), {} section(s), {} discipline(s)",
        output.stats.blocks, output.stats.sections, output.stats.disciplines
    );
    Ok(output)
}

/// Convert PDF bytes held in memory.
///
/// The extraction backends need a file-system path, so the bytes are spilled
/// to a managed [`tempfile`] that is removed automatically on return. Useful
/// when the PDF comes from a download step or a message attachment rather
/// than a file on disk.
pub fn convert_bytes(
    bytes: &[u8],
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let mut tmp =
        tempfile::NamedTempFile::new().map_err(|e| ConvertError::TempFileFailed { source: e })?;
    tmp.write_all(bytes)
        .map_err(|e| ConvertError::TempFileFailed { source: e })?;
    // `tmp` is dropped (and the file deleted) when `convert` returns.
    convert(tmp.path(), config)
}

/// Convert a PDF and write `<stem>.txt`, `<stem>.xml` and
/// `<stem>.structured.xml` into `config.output_dir`.
///
/// Each artifact is written to a temp path and renamed into place.
pub fn convert_to_files(
    pdf_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<WrittenArtifacts, ConvertError> {
    let pdf_path = pdf_path.as_ref();
    let output = convert(pdf_path, config)?;

    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "study_plan".to_string());

    std::fs::create_dir_all(&config.output_dir).map_err(|e| ConvertError::OutputWriteFailed {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let txt = config.output_dir.join(format!("{stem}.txt"));
    let xml = config.output_dir.join(format!("{stem}.xml"));
    let structured_xml = config.output_dir.join(format!("{stem}.structured.xml"));

    write_atomic(&txt, &output.text)?;
    write_atomic(&xml, &output.document_xml)?;
    write_atomic(&structured_xml, &output.structured_xml)?;

    info!(
        "wrote artifacts for '{stem}' into {}",
        config.output_dir.display()
    );

    Ok(WrittenArtifacts {
        txt,
        xml,
        structured_xml,
    })
}

/// Atomic write: temp file in the same directory, then rename.
fn write_atomic(path: &PathBuf, contents: &str) -> Result<(), ConvertError> {
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| ConvertError::OutputWriteFailed {
        path: path.clone(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| ConvertError::OutputWriteFailed {
        path: path.clone(),
        source: e,
    })
}
