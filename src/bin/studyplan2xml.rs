//! CLI binary for studyplan2xml.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, runs the conversion and prints the artifact paths.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use studyplan2xml::{convert, convert_to_files, BackendKind, ConversionConfig};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a study plan; writes <stem>.txt, <stem>.xml, <stem>.structured.xml
  studyplan2xml study_plan.pdf

  # Choose where artifacts land
  studyplan2xml study_plan.pdf -o out/processed

  # Print only the structured XML path after conversion
  studyplan2xml --structured study_plan.pdf

  # Dump the parsed tree and diagnostics as JSON to stdout, write nothing
  studyplan2xml --json study_plan.pdf

  # Force the fallback backend only
  studyplan2xml --backends lopdf study_plan.pdf

EXTRACTION BACKENDS (tried in the order given):
  pdf-extract   full text extraction with font/encoding handling (default first)
  lopdf         content-stream extraction, tolerant of generator quirks

ENVIRONMENT VARIABLES:
  STUDYPLAN2XML_OUTPUT_DIR   Output directory (same as -o)
  RUST_LOG                   Override log filtering (tracing EnvFilter syntax)
"#;

/// Convert curriculum study-plan PDFs to TXT and XML artifacts.
#[derive(Parser, Debug)]
#[command(
    name = "studyplan2xml",
    version,
    about = "Convert curriculum study-plan PDFs to structured XML",
    long_about = "Convert a curriculum study-plan PDF into three text artifacts: the flat \
normalized text, the text wrapped in a <document> XML envelope, and the parsed \
block/section/discipline hierarchy as <study_plan> XML.",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the study-plan PDF.
    input: PathBuf,

    /// Directory the artifacts are written into.
    #[arg(
        short,
        long,
        env = "STUDYPLAN2XML_OUTPUT_DIR",
        default_value = "data/processed"
    )]
    output_dir: PathBuf,

    /// Print only the structured XML artifact path.
    #[arg(long)]
    structured: bool,

    /// Dump the parsed tree and parse diagnostics as JSON to stdout instead
    /// of writing files.
    #[arg(long, conflicts_with = "structured")]
    json: bool,

    /// Extraction backends in priority order.
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values = ["pdf-extract", "lopdf"]
    )]
    backends: Vec<BackendArg>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum BackendArg {
    PdfExtract,
    Lopdf,
}

impl From<BackendArg> for BackendKind {
    fn from(v: BackendArg) -> Self {
        match v {
            BackendArg::PdfExtract => BackendKind::PdfExtract,
            BackendArg::Lopdf => BackendKind::Lopdf,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = ConversionConfig::builder()
        .backends(cli.backends.iter().map(|&b| b.into()).collect())
        .output_dir(cli.output_dir.clone())
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    if cli.json {
        let output = convert(&cli.input, &config).context("Conversion failed")?;
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(json.as_bytes())
            .and_then(|_| handle.write_all(b"\n"))
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    let artifacts = convert_to_files(&cli.input, &config).context("Conversion failed")?;

    if cli.structured {
        println!("{}", artifacts.structured_xml.display());
    } else {
        println!("{}", artifacts.txt.display());
        println!("{}", artifacts.xml.display());
        println!("{}", artifacts.structured_xml.display());
    }

    Ok(())
}
