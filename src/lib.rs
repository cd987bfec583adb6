pub mod chunker;
pub mod config;
pub mod document;
pub mod pipeline;
pub mod record;

pub use chunker::{Chunker, ChunkerConfig};
pub use config::{ConfigError, IngestConfig};
pub use document::{extract_text, DocumentKind, ExtractionError};
pub use pipeline::{run, IngestReport};
pub use record::{ChunkMeta, ChunkRecord};
