//! doc2chunks — batch document-to-chunk ingestion.
//!
//! Scans a directory for PDF/TXT/MD files, splits their text into
//! overlapping character windows, and writes the labeled records to a
//! single JSON artifact.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use doc2chunks::config::{
    IngestConfig, DEFAULT_CHUNK_SIZE_CHARS, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH,
    DEFAULT_OVERLAP_CHARS,
};
use doc2chunks::pipeline;

/// Split PDF/TXT/MD documents into overlapping character chunks.
#[derive(Parser, Debug)]
#[command(name = "doc2chunks", version, about)]
struct Cli {
    /// Directory scanned (non-recursively) for source documents; created if absent.
    #[arg(long, env = "DOC2CHUNKS_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Output artifact; overwritten on every run.
    #[arg(long, env = "DOC2CHUNKS_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Window length in characters.
    #[arg(long, env = "DOC2CHUNKS_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE_CHARS)]
    chunk_size: usize,

    /// Characters shared between adjacent windows; must be smaller than the window.
    #[arg(long, env = "DOC2CHUNKS_OVERLAP", default_value_t = DEFAULT_OVERLAP_CHARS)]
    overlap: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = IngestConfig {
        input_dir: cli.input_dir,
        output_path: cli.output,
        chunk_size_chars: cli.chunk_size,
        overlap_chars: cli.overlap,
    };

    let report = pipeline::run(&config)?;
    match report.output {
        Some(path) => println!("Wrote {} chunks to {}", report.records, path.display()),
        None => println!(
            "No documents found in {} or content was empty.",
            config.input_dir.display()
        ),
    }
    Ok(())
}
