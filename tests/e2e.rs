//! End-to-end integration tests for studyplan2xml.
//!
//! The line-level tests run the whole core pipeline (normalize → parse →
//! serialize) through the public API on a synthetic study-plan fixture, so
//! they need no PDF and no network. The one real-PDF test is gated on a
//! fixture file existing under `test_cases/` and is skipped otherwise.
//!
//! Run with:
//!   cargo test --test e2e -- --nocapture

use std::path::PathBuf;
use studyplan2xml::{convert, convert_lines, convert_to_files, BackendKind, ConversionConfig};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases")
}

/// Raw extractor-style output: noisy, with NBSPs, glyph artifacts, blank
/// runs and summary rows, shaped like a real curriculum PDF dump.
fn raw_fixture() -> Vec<&'static str> {
    vec![
        "",
        "Учебный план образовательной программы",
        "",
        "",
        "п р о г р а м м а", // glyph-split noise line
        "Блок 1. Модули (дисциплины)",
        "90",
        "3240",
        "Обязательные дисциплины 1 семестр",
        "30",
        "1080",
        "1",
        "\u{00A0}Машинное обучение\u{00A0}",
        "5",
        "144",
        "1",
        "Методы",
        "глубокого обучения",
        "4",
        "108",
        "1",
        "Итого за семестр", // digit-free: a semester digit would open a section
        "9",
        "252",
        "Пул выборных дисциплин 2 семестр",
        "20",
        "720",
        "2",
        "Анализ данных & визуализация",
        "3",
        "108",
        "2",
        "Блок 2. Практика",
        "6",
        "Практика",
        "Проектный семинар",
        "6",
        "216",
        "2",
        "Всего",
        "116",
        "4176",
        "",
    ]
}

/// Assert an XML artifact passes the output-contract checks shared by both
/// serializer forms.
fn assert_xml_contract(xml: &str, context: &str) {
    assert!(
        xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
        "[{context}] missing XML declaration"
    );
    assert!(
        xml.ends_with('\n') && !xml.ends_with("\n\n"),
        "[{context}] must end with exactly one newline"
    );
    // Raw specials may not appear inside attribute values.
    for line in xml.lines().filter(|l| l.contains("title=\"")) {
        let attrs = &line[line.find("title=\"").unwrap() + 7..];
        assert!(
            !attrs.contains(" & ") && !attrs.contains("<<"),
            "[{context}] unescaped special in: {line}"
        );
    }
}

// ── Core pipeline (no PDF needed) ────────────────────────────────────────────

#[test]
fn full_pipeline_builds_expected_tree() {
    let output = convert_lines(&raw_fixture());

    assert_eq!(output.plan.blocks.len(), 2);
    assert_eq!(output.plan.blocks[0].title, "Блок 1. Модули (дисциплины)");

    let sections = &output.plan.blocks[0].sections;
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].semester, Some(1));
    assert_eq!(sections[0].disciplines.len(), 2);
    assert_eq!(sections[0].disciplines[0].title, "Машинное обучение");
    assert_eq!(sections[0].disciplines[1].title, "Методы глубокого обучения");
    assert_eq!(sections[1].semester, Some(2));
    assert_eq!(
        sections[1].disciplines[0].title,
        "Анализ данных & визуализация"
    );

    let practice = &output.plan.blocks[1].sections[0];
    assert_eq!(practice.title, "Практика");
    assert_eq!(practice.disciplines[0].title, "Проектный семинар");
    assert_eq!(
        (
            practice.disciplines[0].credits,
            practice.disciplines[0].hours,
            practice.disciplines[0].semester
        ),
        (6, 216, 2)
    );

    assert_eq!(output.stats.disciplines, 4);
    assert!(output.stats.total_lines_dropped >= 2); // "Итого…" + "Всего"
}

#[test]
fn artifacts_satisfy_output_contract() {
    let output = convert_lines(&raw_fixture());

    assert_xml_contract(&output.document_xml, "document");
    assert_xml_contract(&output.structured_xml, "structured");

    // Escaping: the ampersand title is escaped in both artifacts.
    assert!(output
        .structured_xml
        .contains("Анализ данных &amp; визуализация"));
    assert!(output.document_xml.contains("Анализ данных &amp; визуализация"));

    // The glyph-noise line never reaches any artifact.
    assert!(!output.text.contains("п р о г р а м м а"));
    assert!(!output.document_xml.contains("п р о г р а м м а"));
}

#[test]
fn normalized_text_is_stable_under_reconversion() {
    let first = convert_lines(&raw_fixture());
    let relines: Vec<&str> = first.text.lines().collect();
    let second = convert_lines(&relines);

    assert_eq!(first.text, second.text, "normalization must be idempotent");
    assert_eq!(first.plan, second.plan, "reparse must yield the same tree");
}

#[test]
fn json_dump_of_output_is_well_formed() {
    let output = convert_lines(&raw_fixture());
    let json = serde_json::to_string(&output).expect("output serializes");
    assert!(json.contains("\"disciplines\":4"));
    assert!(json.contains("Машинное обучение"));
}

// ── File artifacts ───────────────────────────────────────────────────────────

#[test]
fn convert_to_files_writes_three_artifacts() {
    // A tiny but valid-magic PDF is still unparseable by both backends, so
    // go through convert_lines for content and only exercise the file layer
    // with a real fixture below. Here: missing file must not create outputs.
    let dir = tempfile::TempDir::new().unwrap();
    let config = ConversionConfig::builder()
        .output_dir(dir.path().join("processed"))
        .build()
        .unwrap();

    let err = convert_to_files("/no/such/plan.pdf", &config).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(
        !dir.path().join("processed").exists(),
        "no artifacts may appear for a failed conversion"
    );
}

// ── Real-PDF tests (fixture-gated) ───────────────────────────────────────────

/// Skip this test unless a PDF fixture exists at `path`.
macro_rules! skip_unless_fixture {
    ($path:expr) => {{
        let p: PathBuf = $path;
        if !p.exists() {
            println!("SKIP — test fixture not found: {}", p.display());
            return;
        }
        p
    }};
}

#[test]
fn convert_real_study_plan_pdf() {
    let path = skip_unless_fixture!(test_cases_dir().join("study_plan.pdf"));

    let dir = tempfile::TempDir::new().unwrap();
    let config = ConversionConfig::builder()
        .backends(vec![BackendKind::PdfExtract, BackendKind::Lopdf])
        .output_dir(dir.path())
        .build()
        .unwrap();

    let output = convert(&path, &config).expect("conversion should succeed");
    assert!(!output.text.trim().is_empty(), "extracted text is empty");
    assert_xml_contract(&output.structured_xml, "real-pdf structured");

    let artifacts = convert_to_files(&path, &config).expect("file write should succeed");
    for p in [&artifacts.txt, &artifacts.xml, &artifacts.structured_xml] {
        assert!(p.exists(), "missing artifact: {}", p.display());
    }
    println!(
        "parsed {} block(s) / {} discipline(s) from {}",
        output.stats.blocks,
        output.stats.disciplines,
        path.display()
    );
}
