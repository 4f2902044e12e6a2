//! Line predicates: pure, stateless classifiers for one line of text.
//!
//! The parser's transition table is only as testable as its guards, so every
//! guard lives here as a standalone function over a single line. All regexes
//! are compiled once. The grammar these encode is heuristic — tuned against
//! real curriculum PDFs, not derived from a format definition — which is why
//! each predicate is deliberately loose (substring keyword matches,
//! case-insensitive headers).

use once_cell::sync::Lazy;
use regex::Regex;

/// A standalone summary number: exactly 1–4 ASCII digits once trimmed.
static INT_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,4}$").unwrap());

/// Block header: "Блок <digits>.<rest>", anchored at line start.
static BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^Блок\s+[0-9]+\..*$").unwrap());

/// Semester marker: a digit followed by a "семест…" stem, anywhere in the
/// line. The first digit is the semester number.
static SEMESTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([0-9])\s*семест").unwrap());

/// Section titles that carry no semester marker but are known category names.
const SECTION_KEYWORDS: &[&str] = &[
    "Обязательные дисциплины",
    "Пул выборных дисциплин",
    "Практика по выбору",
    "Универсальная (надпрофессиональная) подготовка",
    "Государственная итоговая аттестация",
    "Факультативные модули",
    "Практика",
    "ГИА",
];

/// Summary-row markers. Matching lines carry aggregate numbers that belong
/// to no single discipline and are discarded.
const TOTAL_KEYWORDS: &[&str] = &["итог", "итоги", "всего", "сумма"];

/// True iff the trimmed line is exactly 1–4 ASCII digits.
pub fn is_integer_line(line: &str) -> bool {
    INT_LINE_RE.is_match(line.trim())
}

/// True iff the line is a block header ("Блок N. …", case-insensitive).
/// The whole matched line becomes the block title verbatim.
pub fn is_block_header(line: &str) -> bool {
    BLOCK_RE.is_match(line)
}

/// Extract the semester digit from a "<digit> семест…" pattern, if present.
pub fn semester_of(line: &str) -> Option<u8> {
    SEMESTER_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// True iff the line opens a section: it contains a semester marker or one
/// of the known category keywords (case-insensitive substring match).
pub fn is_section_header(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    if SEMESTER_RE.is_match(line) {
        return true;
    }
    let lower = line.to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .any(|k| lower.contains(&k.to_lowercase()))
}

/// True iff the lowercased line contains a summary-row marker.
pub fn is_total_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    TOTAL_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_line_accepts_one_to_four_digits() {
        assert!(is_integer_line("7"));
        assert!(is_integer_line(" 144 "));
        assert!(is_integer_line("2025"));
    }

    #[test]
    fn integer_line_rejects_everything_else() {
        assert!(!is_integer_line(""));
        assert!(!is_integer_line("12345"));
        assert!(!is_integer_line("12a"));
        assert!(!is_integer_line("1.5"));
        assert!(!is_integer_line("-3"));
        // Non-ASCII digits do not count.
        assert!(!is_integer_line("١٢٣"));
    }

    #[test]
    fn block_header_matches_verbatim_form() {
        assert!(is_block_header("Блок 3. Образовательные результаты"));
        assert!(is_block_header("блок 1.Модули"));
        assert!(!is_block_header("Блок без номера"));
        assert!(!is_block_header("  Блок 1. сдвинут")); // anchored at start
    }

    #[test]
    fn semester_digit_captured() {
        assert_eq!(semester_of("Обязательные дисциплины 3 семестр"), Some(3));
        assert_eq!(semester_of("1семестр"), Some(1));
        assert_eq!(semester_of("Практика"), None);
    }

    #[test]
    fn section_header_by_semester_or_keyword() {
        assert!(is_section_header("Обязательные дисциплины 3 семестр"));
        assert!(is_section_header("практика по выбору"));
        assert!(is_section_header("ГИА"));
        assert!(!is_section_header("Машинное обучение"));
        assert!(!is_section_header(""));
    }

    #[test]
    fn total_line_by_keyword() {
        assert!(is_total_line("Итого за семестр"));
        assert!(is_total_line("ВСЕГО"));
        assert!(is_total_line("Сумма часов"));
        assert!(!is_total_line("Физика"));
    }
}
