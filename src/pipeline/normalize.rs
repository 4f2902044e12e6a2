//! Line normalization: deterministic cleanup of raw extracted text.
//!
//! PDF text extraction is noisy in predictable ways: non-breaking spaces
//! where the layout engine padded columns, runs of blank lines between text
//! boxes, and stray single-letter artifacts where a word was split glyph by
//! glyph. This stage applies three cheap rules so the parser downstream only
//! ever sees clean input:
//!
//! 1. Strip non-breaking spaces and surrounding whitespace per line
//! 2. Drop lines made entirely of single-character alphabetic tokens
//! 3. Collapse blank-line runs to at most one, with no leading or trailing
//!    blank line
//!
//! Rule 2 runs before rule 3 so that removing a noise line between two
//! blanks cannot leave a double blank behind — which also makes the whole
//! pass idempotent: normalizing already-normalized lines is a no-op.

/// A noise token is a stray single alphabetic character left over from
/// glyph-level extraction.
fn is_noise_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/// True if every whitespace-separated token on the line is a noise token.
fn is_noise_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        None => false,
        Some(first) => is_noise_token(first) && tokens.all(is_noise_token),
    }
}

/// Clean one raw line: replace non-breaking spaces, trim.
fn clean_line(line: &str) -> String {
    line.replace('\u{00A0}', " ").trim().to_string()
}

/// Normalize a raw extracted line sequence.
///
/// Order of surviving lines is preserved. Blank lines are kept (at most one
/// in a row) because the parser treats them as soft separators; noise lines
/// are dropped entirely rather than kept as blanks.
pub fn normalize_lines<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for line in raw {
        let s = clean_line(line.as_ref());
        if s.is_empty() {
            if !out.is_empty() && !out.last().is_some_and(|l| l.is_empty()) {
                out.push(String::new());
            }
            continue;
        }
        if is_noise_line(&s) {
            continue;
        }
        out.push(s);
    }
    if out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out
}

/// Join normalized lines into the flat text artifact, `\n`-terminated.
///
/// Empty input yields just `"\n"` so the artifact file is never zero bytes.
pub fn to_text(lines: &[String]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &[&str]) -> Vec<String> {
        normalize_lines(raw)
    }

    #[test]
    fn strips_nbsp_and_whitespace() {
        assert_eq!(norm(&["\u{00A0} Практика \u{00A0}"]), vec!["Практика"]);
    }

    #[test]
    fn collapses_blank_runs() {
        // Multi-character tokens: a single-letter line would be noise.
        assert_eq!(norm(&["aa", "", "  ", "", "bb"]), vec!["aa", "", "bb"]);
    }

    #[test]
    fn no_leading_or_trailing_blank() {
        assert_eq!(norm(&["", "aa", ""]), vec!["aa"]);
        assert_eq!(norm(&["", "", ""]), Vec::<String>::new());
    }

    #[test]
    fn drops_noise_lines() {
        // Glyph-split artifact: every token a single letter.
        assert_eq!(norm(&["П р а к", "ok"]), vec!["ok"]);
        assert_eq!(norm(&["x"]), Vec::<String>::new());
    }

    #[test]
    fn keeps_lines_with_any_real_token() {
        assert_eq!(norm(&["a bc"]), vec!["a bc"]);
        // Single digits are not alphabetic, so not noise.
        assert_eq!(norm(&["1 2 3"]), vec!["1 2 3"]);
    }

    #[test]
    fn noise_between_blanks_does_not_leave_double_blank() {
        assert_eq!(norm(&["aa", "", "б", "", "bb"]), vec!["aa", "", "bb"]);
    }

    #[test]
    fn idempotent() {
        let raw = vec![
            "  Блок 1. Дисциплины \u{00A0}",
            "",
            "",
            "я",
            "Машинное обучение",
            "",
        ];
        let once = normalize_lines(&raw);
        let twice = normalize_lines(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn to_text_is_newline_terminated() {
        assert_eq!(to_text(&["a".into(), "b".into()]), "a\nb\n");
        assert_eq!(to_text(&[]), "\n");
    }
}
