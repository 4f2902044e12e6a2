//! Structure builder: a single-pass state machine over normalized lines.
//!
//! The builder walks the line stream with one cursor and applies the first
//! matching rule at each position, in fixed priority order:
//!
//! 1. Blank line                → advance
//! 2. Block header              → open block, discard up to 4 summary integers
//! 3. Section header            → open section, discard up to 3 summary integers
//! 4. Total line                → discard
//! 5. Other non-integer line    → buffer as a name fragment; if the next
//!    three lines are all pure integers, emit a discipline
//!    `{credits, hours, semester}` and consume all four lines
//! 6. Stray integer line        → discard
//!
//! The grammar is heuristic, not verified: ambiguous or malformed input
//! degrades silently into dropped spans, counted in [`ParseStats`], and the
//! builder never errors. Known misfire modes — documents with a different
//! number of summary rows after a header, or disciplines whose titles are
//! themselves 1–4 digit strings — are inherent to the heuristic and are
//! preserved for output compatibility with existing consumers.
//!
//! Synthetic containers keep the tree total: a section arriving with no open
//! block lands in a block titled "Блок", a discipline with no open section
//! in a section titled "Разное".

use crate::output::ParseStats;
use crate::pipeline::predicates;
use crate::plan::{Block, Discipline, Section, StudyPlan};
use tracing::{debug, trace};

/// Title given to the synthetic block created when a section or discipline
/// appears before any block header.
const FALLBACK_BLOCK_TITLE: &str = "Блок";
/// Title given to the synthetic section created when a discipline appears
/// before any section header.
const FALLBACK_SECTION_TITLE: &str = "Разное";

/// Summary integers discarded after a block header, at most.
const BLOCK_SUMMARY_SKIP: usize = 4;
/// Summary integers discarded after a section header, at most.
const SECTION_SUMMARY_SKIP: usize = 3;

/// Parse a normalized line sequence into a [`StudyPlan`].
///
/// Convenience wrapper around [`StructureBuilder`].
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> (StudyPlan, ParseStats) {
    StructureBuilder::new().build(lines)
}

/// The parser state: indices of the open block/section plus the pending
/// name-fragment buffer.
///
/// Blocks are addressed by index into the growing `StudyPlan` rather than by
/// reference, so the tree has a single owner throughout construction.
#[derive(Debug, Default)]
pub struct StructureBuilder {
    plan: StudyPlan,
    current_block: Option<usize>,
    current_section: Option<usize>,
    name_buffer: Vec<String>,
    stats: ParseStats,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the entire line sequence and return the finished tree.
    ///
    /// Runs to completion for any input; there is no failure path.
    pub fn build<S: AsRef<str>>(mut self, lines: &[S]) -> (StudyPlan, ParseStats) {
        let n = lines.len();
        let mut i = 0;
        while i < n {
            let line = lines[i].as_ref().trim();

            if line.is_empty() {
                i += 1;
                continue;
            }

            if predicates::is_block_header(line) {
                self.open_block(line);
                i += 1;
                i = self.skip_summary_integers(lines, i, BLOCK_SUMMARY_SKIP);
                continue;
            }

            if predicates::is_section_header(line) {
                self.open_section(line);
                i += 1;
                i = self.skip_summary_integers(lines, i, SECTION_SUMMARY_SKIP);
                continue;
            }

            if predicates::is_total_line(line) {
                trace!("dropping total line: {line:?}");
                self.stats.total_lines_dropped += 1;
                i += 1;
                continue;
            }

            if !predicates::is_integer_line(line) {
                self.name_buffer.push(line.to_string());
                if let Some(triple) = parse_numeric_triple(lines, i + 1) {
                    self.emit_discipline(triple);
                    i += 4;
                } else {
                    i += 1;
                }
                continue;
            }

            // Integer line not consumed by any header skip or lookahead.
            trace!("dropping stray integer line: {line:?}");
            self.stats.stray_integers_dropped += 1;
            i += 1;
        }

        self.finish()
    }

    fn finish(mut self) -> (StudyPlan, ParseStats) {
        self.stats.dangling_fragments = self.name_buffer.len();
        self.stats.blocks = self.plan.blocks.len();
        self.stats.sections = self.plan.section_count();
        self.stats.disciplines = self.plan.discipline_count();
        debug!(
            blocks = self.stats.blocks,
            sections = self.stats.sections,
            disciplines = self.stats.disciplines,
            dropped_totals = self.stats.total_lines_dropped,
            dropped_integers = self.stats.stray_integers_dropped,
            dangling = self.stats.dangling_fragments,
            "structure build complete"
        );
        (self.plan, self.stats)
    }

    /// Rule 2: start a new block titled with the matched line verbatim.
    fn open_block(&mut self, title: &str) {
        debug!("opening block: {title:?}");
        self.plan.blocks.push(Block {
            title: title.to_string(),
            sections: Vec::new(),
        });
        self.current_block = Some(self.plan.blocks.len() - 1);
        self.current_section = None;
        self.name_buffer.clear();
    }

    /// Rule 3: open a new section under the current block, creating a
    /// synthetic block first if none is open. The semester attribute comes
    /// from the header's "<digit> семест…" pattern and is simply absent for
    /// keyword-only headers.
    fn open_section(&mut self, title: &str) {
        let semester = predicates::semester_of(title);
        debug!("opening section: {title:?} (semester {semester:?})");
        let block_idx = self.ensure_block();
        let sections = &mut self.plan.blocks[block_idx].sections;
        sections.push(Section {
            title: title.to_string(),
            semester,
            disciplines: Vec::new(),
        });
        self.current_section = Some(sections.len() - 1);
        self.name_buffer.clear();
    }

    /// Rule 5, successful lookahead: join the buffered fragments into one
    /// title and attach the discipline to the current section.
    fn emit_discipline(&mut self, (credits, hours, semester): (u32, u32, u32)) {
        let title = self.name_buffer.join(" ").trim().to_string();
        self.name_buffer.clear();
        trace!("discipline: {title:?} credits={credits} hours={hours} semester={semester}");

        let block_idx = self.ensure_block();
        let section_idx = match self.current_section {
            Some(idx) => idx,
            None => {
                let sections = &mut self.plan.blocks[block_idx].sections;
                sections.push(Section {
                    title: FALLBACK_SECTION_TITLE.to_string(),
                    semester: None,
                    disciplines: Vec::new(),
                });
                let idx = sections.len() - 1;
                self.current_section = Some(idx);
                idx
            }
        };

        self.plan.blocks[block_idx].sections[section_idx]
            .disciplines
            .push(Discipline {
                title,
                credits,
                hours,
                semester,
            });
    }

    /// Discard up to `limit` consecutive pure-integer summary lines after a
    /// header, stopping early at the first non-integer line.
    fn skip_summary_integers<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        mut i: usize,
        limit: usize,
    ) -> usize {
        let mut skipped = 0;
        while i < lines.len() && skipped < limit && predicates::is_integer_line(lines[i].as_ref()) {
            skipped += 1;
            i += 1;
        }
        if skipped > 0 {
            trace!("discarded {skipped} header summary integer(s)");
        }
        i
    }

    /// Index of the open block, creating the synthetic fallback if none is.
    fn ensure_block(&mut self) -> usize {
        match self.current_block {
            Some(idx) => idx,
            None => {
                self.plan.blocks.push(Block {
                    title: FALLBACK_BLOCK_TITLE.to_string(),
                    sections: Vec::new(),
                });
                let idx = self.plan.blocks.len() - 1;
                self.current_block = Some(idx);
                idx
            }
        }
    }
}

/// Lookahead at `idx`: if the next three lines are all pure-integer lines,
/// read them positionally as `(credits, hours, semester)` without consuming.
fn parse_numeric_triple<S: AsRef<str>>(lines: &[S], idx: usize) -> Option<(u32, u32, u32)> {
    if idx + 2 >= lines.len() {
        return None;
    }
    let mut values = [0u32; 3];
    for (slot, line) in values.iter_mut().zip(&lines[idx..idx + 3]) {
        let line = line.as_ref().trim();
        if !predicates::is_integer_line(line) {
            return None;
        }
        *slot = line.parse().ok()?;
    }
    Some((values[0], values[1], values[2]))
}
