//! Fixed-window chunking with character overlap.
//!
//! Splits extracted text into windows of `chunk_size_chars` characters,
//! each window sharing its first `overlap_chars` characters with the tail
//! of the previous one. The last window may be shorter.

use crate::config::{ConfigError, DEFAULT_CHUNK_SIZE_CHARS, DEFAULT_OVERLAP_CHARS};

/// Configuration for the chunking engine.
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Window length in characters (default: 2000).
    pub chunk_size_chars: usize,
    /// Overlap between adjacent windows (default: 200). Must be smaller
    /// than `chunk_size_chars`.
    pub overlap_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size_chars: DEFAULT_CHUNK_SIZE_CHARS,
            overlap_chars: DEFAULT_OVERLAP_CHARS,
        }
    }
}

pub struct Chunker {
    chunk_size: usize,
    step: usize,
}

impl Chunker {
    /// Build a chunker, rejecting configurations where the cursor would
    /// never advance (overlap >= chunk size would loop forever).
    pub fn new(config: ChunkerConfig) -> Result<Self, ConfigError> {
        if config.chunk_size_chars == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if config.overlap_chars >= config.chunk_size_chars {
            return Err(ConfigError::OverlapTooLarge {
                overlap: config.overlap_chars,
                chunk_size: config.chunk_size_chars,
            });
        }
        Ok(Self {
            chunk_size: config.chunk_size_chars,
            step: config.chunk_size_chars - config.overlap_chars,
        })
    }

    /// Split `text` into trimmed windows.
    ///
    /// Windows are cut at character positions, not bytes, so multibyte
    /// text never splits mid-codepoint. Each window is whitespace-trimmed
    /// independently after slicing; the cursor arithmetic runs over the
    /// raw text, so trimming never shifts where the next window starts.
    /// A window that trims to empty is still emitted. Empty input yields
    /// an empty sequence.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let end = usize::min(i + self.chunk_size, chars.len());
            let window: String = chars[i..end].iter().collect();
            chunks.push(window.trim().to_string());
            i += self.step;
        }
        chunks
    }
}
