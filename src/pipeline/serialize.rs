//! XML rendering of the conversion results.
//!
//! Two artifacts come out of one conversion:
//!
//! * the **generic wrapper** — the flat normalized text, escaped, inside a
//!   single `<document>` root, for consumers that only need the raw text in
//!   a well-formed envelope;
//! * the **structured form** — nested `<block>` / `<section>` /
//!   `<discipline>` elements mirroring the parsed tree, the stable format
//!   downstream tooling parses.
//!
//! Both use the same five-entity escaping rule for every attribute and text
//! value and end with exactly one trailing newline. Optional attributes
//! (a section's `semester`) are omitted entirely when absent, never emitted
//! as a zero or placeholder.

use crate::plan::StudyPlan;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escape the five XML special characters in text or attribute values.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the generic wrapper: the normalized lines escaped inside a single
/// `<document>` root element.
pub fn document_xml(lines: &[String]) -> String {
    format!(
        "{XML_DECLARATION}\n<document>\n{}\n</document>\n",
        xml_escape(&lines.join("\n"))
    )
}

/// Render the structured form of a parsed study plan.
pub fn structured_xml(plan: &StudyPlan) -> String {
    let mut out: Vec<String> = vec![XML_DECLARATION.to_string(), "<study_plan>".to_string()];
    for block in &plan.blocks {
        out.push(format!("  <block title=\"{}\">", xml_escape(&block.title)));
        for section in &block.sections {
            let semester_attr = section
                .semester
                .map(|s| format!(" semester=\"{s}\""))
                .unwrap_or_default();
            out.push(format!(
                "    <section title=\"{}\"{semester_attr}>",
                xml_escape(&section.title)
            ));
            for d in &section.disciplines {
                out.push(format!(
                    "      <discipline title=\"{}\" credits=\"{}\" hours=\"{}\" semester=\"{}\"/>",
                    xml_escape(&d.title),
                    d.credits,
                    d.hours,
                    d.semester
                ));
            }
            out.push("    </section>".to_string());
        }
        out.push("  </block>".to_string());
    }
    out.push("</study_plan>\n".to_string());
    out.join("\n")
}
