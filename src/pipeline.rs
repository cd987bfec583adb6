//! Run orchestrator: scan a directory, extract, chunk, serialize.
//!
//! One synchronous pass, one file at a time, in file-name order. A read
//! or extraction failure aborts the whole run; unsupported and empty
//! entries are skipped.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::chunker::{Chunker, ChunkerConfig};
use crate::config::IngestConfig;
use crate::document::{self, DocumentKind};
use crate::record::ChunkRecord;

/// Outcome of a completed run.
#[derive(Debug)]
pub struct IngestReport {
    /// Records serialized to the output artifact.
    pub records: usize,
    /// Files that contributed at least one chunk.
    pub files_processed: usize,
    /// Entries skipped: directories, unsupported extensions, empty documents.
    pub files_skipped: usize,
    /// Where the artifact was written; `None` when there was nothing to write.
    pub output: Option<PathBuf>,
}

/// Execute one ingestion pass over `config.input_dir`.
///
/// The configuration is validated before any filesystem work. When no
/// file yields a chunk, no artifact is written and the run still
/// succeeds; otherwise the output file is fully overwritten with the
/// accumulated records, pretty-printed and with non-ASCII text verbatim.
pub fn run(config: &IngestConfig) -> Result<IngestReport> {
    config.validate()?;
    let chunker = Chunker::new(ChunkerConfig {
        chunk_size_chars: config.chunk_size_chars,
        overlap_chars: config.overlap_chars,
    })?;

    fs::create_dir_all(&config.input_dir).with_context(|| {
        format!("failed to create input directory {}", config.input_dir.display())
    })?;

    let mut entries: Vec<PathBuf> = fs::read_dir(&config.input_dir)
        .with_context(|| format!("failed to read input directory {}", config.input_dir.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to list {}", config.input_dir.display()))?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    entries.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));

    let mut records: Vec<ChunkRecord> = Vec::new();
    let mut files_processed = 0usize;
    let mut files_skipped = 0usize;

    for path in &entries {
        // Non-recursive: subdirectories are not descended into.
        if path.is_dir() {
            debug!(path = %path.display(), "skipping directory");
            files_skipped += 1;
            continue;
        }
        let Some(kind) = DocumentKind::from_path(path) else {
            debug!(path = %path.display(), "unsupported extension, skipping");
            files_skipped += 1;
            continue;
        };
        let source = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .with_context(|| format!("non-UTF-8 file name: {}", path.display()))?;

        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let text = document::extract_text(&bytes, kind)
            .with_context(|| format!("failed to extract text from {}", path.display()))?;

        if text.trim().is_empty() {
            debug!(file = %source, "document is empty, skipping");
            files_skipped += 1;
            continue;
        }

        let chunks = chunker.chunk(&text);
        info!(file = %source, chunks = chunks.len(), "chunked document");
        for (index, chunk) in chunks.into_iter().enumerate() {
            records.push(ChunkRecord::new(&source, index, chunk));
        }
        files_processed += 1;
    }

    if records.is_empty() {
        return Ok(IngestReport {
            records: 0,
            files_processed,
            files_skipped,
            output: None,
        });
    }

    let json =
        serde_json::to_string_pretty(&records).context("failed to serialize chunk records")?;
    fs::write(&config.output_path, json)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;

    Ok(IngestReport {
        records: records.len(),
        files_processed,
        files_skipped,
        output: Some(config.output_path.clone()),
    })
}
