//! Pipeline stages for PDF-to-XML conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. add an extraction backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ normalize ──▶ parse ──▶ serialize
//! (path)   (raw lines)  (clean lines) (tree)    (XML text)
//! ```
//!
//! 1. [`input`]      — validate the user-supplied path (existence, `%PDF` magic)
//! 2. [`extract`]    — turn PDF bytes into raw text lines; prioritized
//!    backend chain with fallback, the only stage touching the PDF format
//! 3. [`normalize`]  — whitespace/noise cleanup of the raw line stream
//! 4. [`predicates`] — pure per-line classifiers used by the parser
//! 5. [`parse`]      — single-pass state machine building the study-plan tree
//! 6. [`serialize`]  — render the tree and the flat text as escaped XML
//!
//! Everything downstream of [`extract`] is pure and synchronous: one
//! conversion call builds one tree to completion with no I/O, no shared
//! state and no suspension points.

pub mod extract;
pub mod input;
pub mod normalize;
pub mod parse;
pub mod predicates;
pub mod serialize;
