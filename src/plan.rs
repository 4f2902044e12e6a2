//! The parsed study-plan tree.
//!
//! A [`StudyPlan`] is built once per conversion by
//! [`crate::pipeline::parse::StructureBuilder`] in a single pass over the
//! normalized line stream and is never mutated afterwards — the serializer
//! borrows it read-only. Insertion order everywhere equals input order.
//!
//! Titles are always non-empty: when a section or discipline appears before
//! any header was seen, the builder creates synthetic containers
//! ("Блок" / "Разное") rather than leaving a hole in the hierarchy.

use serde::Serialize;

/// Root of the parsed curriculum document: an ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudyPlan {
    pub blocks: Vec<Block>,
}

/// Top-level grouping ("Блок N. …"), holding an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// The matched header line, verbatim.
    pub title: String,
    pub sections: Vec<Section>,
}

/// Subgrouping within a block, e.g. by semester or discipline category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    /// Captured from a "<digit> семест…" header pattern; absent when the
    /// header carried no semester digit.
    pub semester: Option<u8>,
    pub disciplines: Vec<Discipline>,
}

/// A single course-like entry.
///
/// All three numeric fields are present by construction: the builder only
/// emits a discipline after a successful three-integer lookahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discipline {
    pub title: String,
    pub credits: u32,
    pub hours: u32,
    pub semester: u32,
}

impl StudyPlan {
    /// Total number of disciplines across all blocks and sections.
    pub fn discipline_count(&self) -> usize {
        self.blocks
            .iter()
            .flat_map(|b| &b.sections)
            .map(|s| s.disciplines.len())
            .sum()
    }

    /// Total number of sections across all blocks.
    pub fn section_count(&self) -> usize {
        self.blocks.iter().map(|b| b.sections.len()).sum()
    }
}
