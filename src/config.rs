use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_INPUT_DIR: &str = "data";
pub const DEFAULT_OUTPUT_PATH: &str = "chunks.json";
pub const DEFAULT_CHUNK_SIZE_CHARS: usize = 2000;
pub const DEFAULT_OVERLAP_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chunk_size_chars must be greater than zero")]
    ZeroChunkSize,

    #[error("overlap_chars ({overlap}) must be smaller than chunk_size_chars ({chunk_size}): the window would never advance")]
    OverlapTooLarge { overlap: usize, chunk_size: usize },
}

/// Settings for one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Directory scanned (non-recursively) for source documents.
    pub input_dir: PathBuf,
    /// Output artifact, fully overwritten on each run.
    pub output_path: PathBuf,
    /// Window length in characters.
    pub chunk_size_chars: usize,
    /// Characters shared between adjacent windows.
    pub overlap_chars: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chunk_size_chars: DEFAULT_CHUNK_SIZE_CHARS,
            overlap_chars: DEFAULT_OVERLAP_CHARS,
        }
    }
}

impl IngestConfig {
    /// Reject parameter combinations the chunker cannot make progress on.
    /// Must pass before any filesystem work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size_chars == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.overlap_chars >= self.chunk_size_chars {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.overlap_chars,
                chunk_size: self.chunk_size_chars,
            });
        }
        Ok(())
    }
}
