//! Conversion output types: the three text artifacts, the parsed tree, and
//! parse diagnostics.

use crate::plan::StudyPlan;
use serde::Serialize;
use std::path::PathBuf;

/// Everything one conversion produces.
///
/// The two XML artifacts are fully rendered strings, each ending with
/// exactly one trailing newline. The parsed tree is also exposed so callers
/// can inspect the hierarchy without re-parsing the XML.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    /// Flat normalized text, one cleaned line per row, `\n`-terminated.
    pub text: String,
    /// The normalized text escaped inside a single `<document>` root.
    pub document_xml: String,
    /// The nested `<study_plan>` rendering of `plan`.
    pub structured_xml: String,
    /// The parsed block/section/discipline tree.
    pub plan: StudyPlan,
    /// Diagnostics from the parse pass.
    pub stats: ParseStats,
}

/// Side diagnostics channel for the heuristic grammar.
///
/// The parser never fails; instead it counts what it dropped so callers can
/// judge how well the heuristics fit a given document. None of these counts
/// affect the primary output artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Blocks in the tree, synthetic "Блок" fallback included.
    pub blocks: usize,
    /// Sections in the tree, synthetic "Разное" fallback included.
    pub sections: usize,
    /// Disciplines emitted via a successful three-integer lookahead.
    pub disciplines: usize,
    /// "Итого"/"Всего"-style summary lines discarded.
    pub total_lines_dropped: usize,
    /// Pure-integer lines not consumed by any header skip or lookahead.
    pub stray_integers_dropped: usize,
    /// Name fragments still buffered when input ended, lost without a
    /// matching numeric triple.
    pub dangling_fragments: usize,
}

/// Paths of the artifacts written by [`crate::convert::convert_to_files`].
#[derive(Debug, Clone, Serialize)]
pub struct WrittenArtifacts {
    pub txt: PathBuf,
    pub xml: PathBuf,
    pub structured_xml: PathBuf,
}
